use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use log::debug;
use rs_conllu::UPOS;

use crate::quiz::error::LexiconError;

/// Word class as stored in the lexicon, before any context or morphology
/// is applied by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordClass {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Auxiliary,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Modal,
    Number,
    Particle,
    Other,
}

impl WordClass {
    pub fn from_upos(upos: &UPOS) -> Self {
        match upos {
            UPOS::ADJ => WordClass::Adjective,
            UPOS::ADV => WordClass::Adverb,
            UPOS::NOUN => WordClass::Noun,
            UPOS::PROPN => WordClass::ProperNoun,
            UPOS::VERB => WordClass::Verb,
            UPOS::AUX => WordClass::Auxiliary,
            UPOS::PRON => WordClass::Pronoun,
            UPOS::DET => WordClass::Determiner,
            UPOS::ADP => WordClass::Preposition,
            UPOS::CCONJ => WordClass::Conjunction,
            UPOS::SCONJ => WordClass::Conjunction,
            UPOS::NUM => WordClass::Number,
            UPOS::PART => WordClass::Particle,

            UPOS::INTJ => WordClass::Other,
            UPOS::X => WordClass::Other,
            UPOS::SYM => WordClass::Other,
            UPOS::PUNCT => WordClass::Other,
        }
    }
}

// Possessive determiners (my, their, ...) are filed as determiners so that
// "their run" reads as a noun phrase.
const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "another", "either", "neither", "all", "both", "such", "what", "which", "whose", "my", "your",
    "his", "her", "its", "our", "their", "few", "many", "much", "several", "own", "other",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "myself", "you", "yourself", "yourselves", "he", "him", "himself", "she",
    "herself", "it", "itself", "we", "us", "ourselves", "they", "them", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "who", "whom", "whoever", "whatever", "someone", "somebody",
    "something", "anyone", "anybody", "anything", "everyone", "everybody", "everything", "nobody",
    "nothing", "none",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by", "despite",
    "down", "during", "except", "for", "from", "in", "inside", "into", "like", "near", "of", "off",
    "on", "onto", "out", "outside", "over", "past", "since", "through", "throughout", "till", "to",
    "toward", "towards", "under", "underneath", "until", "up", "upon", "with", "within",
    "without", "via", "per",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "whereas",
    "if", "unless", "whether", "as", "than", "once",
];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ca", "wo",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "has", "have", "had", "having", "do",
    "does", "did", "doing", "'re", "’re", "'ve", "’ve", "'m", "’m", "'ll", "’ll", "'d", "’d",
];

const ADVERBS: &[&str] = &[
    "not", "n't", "n’t", "very", "too", "also", "just", "only", "often", "always", "never",
    "sometimes", "now", "then", "here", "there", "soon", "already", "still", "even", "again",
    "almost", "quite", "rather", "perhaps", "usually", "however", "therefore", "thus", "ever",
    "twice", "away", "back", "well", "together", "where", "when", "why", "how", "more", "most",
    "less", "least", "further", "instead", "indeed", "else",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
    "billion",
];

const PARTICLES: &[&str] = &["'s", "’s", "'", "’"];

const INTERJECTIONS: &[&str] = &["oh", "yes", "hello", "wow", "please", "okay", "ok"];

const ADJECTIVES: &[&str] = &[
    "quick", "brown", "lazy", "loyal", "big", "small", "large", "little", "good", "bad", "new",
    "old", "great", "high", "low", "long", "short", "young", "early", "late", "important",
    "different", "able", "free", "full", "real", "sure", "clear", "whole", "certain", "hot",
    "cold", "warm", "cool", "red", "blue", "green", "black", "white", "yellow", "orange",
    "purple", "grey", "gray", "dark", "bright", "strong", "weak", "easy", "hard", "simple",
    "common", "rare", "fast", "slow", "rich", "poor", "happy", "sad", "wild", "deep", "wide",
    "narrow", "heavy", "true", "false", "main", "major", "minor", "basic", "natural", "human",
    "social", "public", "political", "chemical", "physical", "solar", "ancient", "modern", "huge",
    "tiny", "tall", "safe", "dangerous", "beautiful", "famous", "popular", "rapid", "smooth",
    "rough", "dry", "wet", "fresh", "clean", "empty", "kind", "nice", "fine", "proud", "brave",
    "smart", "wise", "gentle", "calm", "quiet", "loud", "busy", "friendly", "lovely", "likely",
    "lonely", "silly", "ugly", "holy", "daily", "weekly", "yearly", "only", "first", "last",
    "next", "similar", "special", "general", "local", "national", "international", "central",
    "final", "total", "key", "entire", "several", "various", "complex", "difficult", "possible",
    "necessary", "available", "economic", "electric", "magnetic", "organic", "scientific",
    "thick", "thin", "soft", "sharp", "flat", "round", "square", "sweet", "bitter", "sour",
    "clever", "curious", "eager", "fierce", "humble", "noble", "polite", "rude", "shy", "tough",
    "vast", "pure", "raw", "ripe", "mild", "harsh", "dense", "solid", "liquid", "frozen",
    "living", "dead", "alive", "native", "foreign", "northern", "southern", "eastern", "western",
];

const VERBS: &[&str] = &[
    "jump", "run", "walk", "eat", "make", "take", "give", "go", "come", "see", "know", "think",
    "say", "get", "find", "use", "work", "call", "try", "ask", "need", "feel", "become", "leave",
    "put", "mean", "keep", "let", "begin", "seem", "help", "show", "hear", "play", "move", "live",
    "believe", "bring", "happen", "write", "provide", "sit", "stand", "lose", "pay", "meet",
    "include", "continue", "set", "learn", "change", "lead", "understand", "watch", "follow",
    "stop", "create", "speak", "read", "allow", "add", "spend", "grow", "open", "win", "offer",
    "remember", "love", "consider", "appear", "buy", "wait", "serve", "die", "send", "expect",
    "build", "stay", "fall", "cut", "reach", "kill", "remain", "suggest", "raise", "pass", "sell",
    "require", "report", "decide", "pull", "produce", "contain", "orbit", "rotate", "absorb",
    "convert", "release", "cause", "develop", "describe", "explain", "discover", "invent",
    "study", "protect", "hunt", "bark", "chase", "swim", "fly", "sleep", "rise", "shine", "carry",
    "flow", "store", "divide", "consist", "depend", "occur", "exist", "belong", "lie", "tell",
    "drink", "drive", "ride", "sing", "teach", "catch", "hold", "turn", "look", "like", "want",
    "travel", "measure", "form", "join", "connect", "separate", "increase", "reduce", "support",
    "feed", "breathe", "generate", "transform", "mix", "heat", "melt", "freeze", "boil",
];

const IRREGULAR_VERB_FORMS: &[&str] = &[
    "went", "came", "saw", "knew", "thought", "said", "got", "found", "took", "made", "gave",
    "began", "became", "left", "brought", "wrote", "ran", "ate", "grew", "built", "sent", "fell",
    "told", "felt", "kept", "held", "stood", "understood", "won", "lost", "paid", "met", "led",
    "spoke", "chose", "drove", "rose", "flew", "swam", "slept", "taught", "caught", "bought",
    "sang", "drank", "rode", "known", "seen", "taken", "given", "written", "eaten", "grown",
    "spoken", "chosen", "driven", "risen", "flown", "begun", "gone", "done", "fed", "froze",
    "frozen", "lay", "lain", "shone",
];

const IRREGULAR_COMPARATIVES: &[&str] = &["better", "worse", "farther", "lesser", "elder"];

const IRREGULAR_SUPERLATIVES: &[&str] = &["best", "worst", "farthest", "furthest", "eldest"];

/// Built-in word lists plus the optional treebank-derived lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    closed: HashMap<&'static str, WordClass>,
    adjectives: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    irregular_verb_forms: HashSet<&'static str>,
    comparatives: HashSet<&'static str>,
    superlatives: HashSet<&'static str>,
    treebank: HashMap<String, WordClass>,
}

impl Lexicon {
    pub fn builtin() -> Self {
        let mut closed = HashMap::new();
        let classes: [(&[&'static str], WordClass); 10] = [
            (DETERMINERS, WordClass::Determiner),
            (PRONOUNS, WordClass::Pronoun),
            (PREPOSITIONS, WordClass::Preposition),
            (CONJUNCTIONS, WordClass::Conjunction),
            (MODALS, WordClass::Modal),
            (AUXILIARIES, WordClass::Auxiliary),
            (ADVERBS, WordClass::Adverb),
            (NUMBER_WORDS, WordClass::Number),
            (PARTICLES, WordClass::Particle),
            (INTERJECTIONS, WordClass::Other),
        ];
        for (words, class) in classes {
            for word in words {
                // a word filed under two classes keeps the first one
                closed.entry(*word).or_insert(class);
            }
        }

        Self {
            closed,
            adjectives: ADJECTIVES.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
            irregular_verb_forms: IRREGULAR_VERB_FORMS.iter().copied().collect(),
            comparatives: IRREGULAR_COMPARATIVES.iter().copied().collect(),
            superlatives: IRREGULAR_SUPERLATIVES.iter().copied().collect(),
            treebank: HashMap::new(),
        }
    }

    pub fn with_treebank(mut self, entries: HashMap<String, WordClass>) -> Self {
        self.treebank = entries;
        self
    }

    /// Function-word lookup. `lower` must already be lowercase.
    pub fn closed_class(&self, lower: &str) -> Option<WordClass> {
        self.closed.get(lower).copied()
    }

    pub fn treebank_class(&self, lower: &str) -> Option<WordClass> {
        self.treebank.get(lower).copied()
    }

    pub fn is_adjective(&self, lower: &str) -> bool {
        self.adjectives.contains(lower) || self.treebank_class(lower) == Some(WordClass::Adjective)
    }

    pub fn is_verb(&self, lower: &str) -> bool {
        self.verbs.contains(lower) || self.treebank_class(lower) == Some(WordClass::Verb)
    }

    pub fn is_irregular_verb_form(&self, lower: &str) -> bool {
        self.irregular_verb_forms.contains(lower)
    }

    pub fn is_irregular_comparative(&self, lower: &str) -> bool {
        self.comparatives.contains(lower)
    }

    pub fn is_irregular_superlative(&self, lower: &str) -> bool {
        self.superlatives.contains(lower)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Reads a CoNLL-U treebank and maps every lowercase form to the word class
/// it is most often annotated with. Ties go to the class declared first in
/// `WordClass`.
pub fn load_treebank(path: &Path) -> Result<HashMap<String, WordClass>, LexiconError> {
    let file = File::open(path).map_err(|source| LexiconError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut counts: HashMap<String, HashMap<WordClass, usize>> = HashMap::new();
    let mut sentences = 0;
    for sentence in rs_conllu::parse_file(file).filter_map(|sentence| sentence.ok()) {
        sentences += 1;
        for token in &sentence.tokens {
            let Some(upos) = token.upos.as_ref() else {
                continue;
            };
            *counts
                .entry(token.form.to_lowercase())
                .or_default()
                .entry(WordClass::from_upos(upos))
                .or_default() += 1;
        }
    }

    if sentences == 0 {
        return Err(LexiconError::Empty(path.to_path_buf()));
    }
    debug!(
        "treebank {}: {} sentences, {} distinct forms",
        path.display(),
        sentences,
        counts.len()
    );

    Ok(counts
        .into_iter()
        .filter_map(|(form, classes)| {
            classes
                .into_iter()
                .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
                .map(|(class, _)| (form, class))
        })
        .collect())
}
