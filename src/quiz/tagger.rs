use crate::quiz::lexicon::{Lexicon, WordClass};
use crate::quiz::tokenize::{Token, TokenKind};

/// Coarse part-of-speech tag, modelled on the Penn treebank categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Noun,
    PluralNoun,
    ProperNoun,
    ProperPluralNoun,
    Adjective,
    ComparativeAdjective,
    SuperlativeAdjective,
    Verb,
    Auxiliary,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Modal,
    Number,
    Punctuation,
    Other,
}

impl Tag {
    /// Nouns and adjectives in any form are eligible as answers and distractors.
    pub fn is_keyword_category(self) -> bool {
        matches!(
            self,
            Tag::Noun
                | Tag::PluralNoun
                | Tag::ProperNoun
                | Tag::ProperPluralNoun
                | Tag::Adjective
                | Tag::ComparativeAdjective
                | Tag::SuperlativeAdjective
        )
    }

    pub fn penn(self) -> &'static str {
        match self {
            Tag::Noun => "NN",
            Tag::PluralNoun => "NNS",
            Tag::ProperNoun => "NNP",
            Tag::ProperPluralNoun => "NNPS",
            Tag::Adjective => "JJ",
            Tag::ComparativeAdjective => "JJR",
            Tag::SuperlativeAdjective => "JJS",
            Tag::Verb | Tag::Auxiliary => "VB",
            Tag::Adverb => "RB",
            Tag::Determiner => "DT",
            Tag::Pronoun => "PRP",
            Tag::Preposition => "IN",
            Tag::Conjunction => "CC",
            Tag::Modal => "MD",
            Tag::Number => "CD",
            Tag::Punctuation => ".",
            Tag::Other => "X",
        }
    }

    fn is_nominal(self) -> bool {
        matches!(
            self,
            Tag::Noun | Tag::PluralNoun | Tag::ProperNoun | Tag::ProperPluralNoun | Tag::Pronoun
        )
    }

    fn is_noun_modifier(self) -> bool {
        matches!(
            self,
            Tag::Determiner
                | Tag::Adjective
                | Tag::ComparativeAdjective
                | Tag::SuperlativeAdjective
        )
    }
}

impl From<WordClass> for Tag {
    fn from(class: WordClass) -> Self {
        match class {
            WordClass::Noun => Tag::Noun,
            WordClass::ProperNoun => Tag::ProperNoun,
            WordClass::Adjective => Tag::Adjective,
            WordClass::Verb => Tag::Verb,
            WordClass::Auxiliary => Tag::Auxiliary,
            WordClass::Adverb => Tag::Adverb,
            WordClass::Determiner => Tag::Determiner,
            WordClass::Pronoun => Tag::Pronoun,
            WordClass::Preposition => Tag::Preposition,
            WordClass::Conjunction => Tag::Conjunction,
            WordClass::Modal => Tag::Modal,
            WordClass::Number => Tag::Number,
            WordClass::Particle | WordClass::Other => Tag::Other,
        }
    }
}

const ADJECTIVE_SUFFIXES: [&str; 9] = [
    "ous", "ful", "ive", "able", "ible", "less", "ical", "ial", "ual",
];

// -ly words that are not adverbs
const LY_NOUNS: [&str; 9] = [
    "family", "assembly", "supply", "reply", "butterfly", "ally", "anomaly", "monopoly", "rally",
];

/// Rule-based tagger. Evidence is consulted from most to least reliable:
/// token shape, function-word lists, capitalisation, the treebank lexicon,
/// built-in open-class lists with left context, suffixes, and finally a
/// noun default.
#[derive(Debug, Clone, Default)]
pub struct Tagger {
    lexicon: Lexicon,
}

impl Tagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Tags one sentence worth of tokens; the result is parallel to `tokens`.
    pub fn tag(&self, tokens: &[Token<'_>]) -> Vec<Tag> {
        let mut tags: Vec<Tag> = Vec::with_capacity(tokens.len());
        let mut sentence_initial = true;
        for token in tokens {
            let previous = tags
                .iter()
                .rev()
                .copied()
                .find(|tag| *tag != Tag::Punctuation);
            let tag = match token.kind {
                TokenKind::Punctuation => Tag::Punctuation,
                TokenKind::Number => Tag::Number,
                TokenKind::Word => {
                    let tag = self.tag_word(token.text, sentence_initial, previous);
                    sentence_initial = false;
                    tag
                }
            };
            tags.push(tag);
        }
        tags
    }

    fn tag_word(&self, word: &str, sentence_initial: bool, previous: Option<Tag>) -> Tag {
        let lower = word.to_lowercase();

        if let Some(class) = self.lexicon.closed_class(&lower) {
            return class.into();
        }
        if is_acronym(word) || (!sentence_initial && starts_uppercase(word)) {
            return proper_noun(word);
        }

        if let Some(class) = self.lexicon.treebank_class(&lower) {
            return match class {
                WordClass::ProperNoun if starts_uppercase(word) => proper_noun(word),
                WordClass::ProperNoun | WordClass::Noun => common_noun(&lower),
                WordClass::Adjective => self.degree(&lower).unwrap_or(Tag::Adjective),
                WordClass::Verb if previous == Some(Tag::Determiner) => Tag::Noun,
                other => other.into(),
            };
        }

        if let Some(tag) = self.degree(&lower) {
            return tag;
        }
        if let Some(tag) = self.verb_or_noun(&lower, previous) {
            return tag;
        }
        suffix_guess(&lower, previous)
    }

    /// Adjective in positive, comparative or superlative degree.
    fn degree(&self, lower: &str) -> Option<Tag> {
        if self.lexicon.is_adjective(lower) {
            return Some(Tag::Adjective);
        }
        if self.lexicon.is_irregular_comparative(lower) {
            return Some(Tag::ComparativeAdjective);
        }
        if self.lexicon.is_irregular_superlative(lower) {
            return Some(Tag::SuperlativeAdjective);
        }

        for (suffix, tag) in [
            ("est", Tag::SuperlativeAdjective),
            ("er", Tag::ComparativeAdjective),
        ] {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            if stem.chars().count() < 2 {
                continue;
            }
            if inflection_stems(stem)
                .iter()
                .any(|candidate| self.lexicon.is_adjective(candidate))
            {
                return Some(tag);
            }
        }
        None
    }

    fn verb_or_noun(&self, lower: &str, previous: Option<Tag>) -> Option<Tag> {
        // A full verb right before is taking this word as its object
        // ("conducts heat"); auxiliaries still expect a verb ("do grow").
        let nominal_slot =
            previous.is_some_and(Tag::is_noun_modifier) || previous == Some(Tag::Verb);

        if self.lexicon.is_verb(lower) {
            return Some(if nominal_slot { Tag::Noun } else { Tag::Verb });
        }
        if self.lexicon.is_irregular_verb_form(lower) {
            return Some(Tag::Verb);
        }

        // "jumps" after a subject is a verb, otherwise a plural noun ("the jumps").
        if third_person_stems(lower)
            .iter()
            .any(|stem| self.lexicon.is_verb(stem))
        {
            let after_subject = previous.is_some_and(Tag::is_nominal);
            return Some(if after_subject { Tag::Verb } else { Tag::PluralNoun });
        }

        for suffix in ["ing", "ed"] {
            let Some(stem) = lower.strip_suffix(suffix) else {
                continue;
            };
            if inflection_stems(stem)
                .iter()
                .any(|candidate| self.lexicon.is_verb(candidate))
            {
                let nominal = previous == Some(Tag::Determiner);
                return Some(if nominal { Tag::Noun } else { Tag::Verb });
            }
        }
        None
    }
}

fn suffix_guess(lower: &str, previous: Option<Tag>) -> Tag {
    let length = lower.chars().count();

    if length > 4 && lower.ends_with("ly") && !LY_NOUNS.contains(&lower) {
        return Tag::Adverb;
    }
    if length > 5 && lower.ends_with("ing") {
        return if previous.is_some_and(Tag::is_noun_modifier) {
            Tag::Noun
        } else {
            Tag::Verb
        };
    }
    if length > 4 && lower.ends_with("ed") {
        return if previous == Some(Tag::Determiner) {
            Tag::Adjective
        } else {
            Tag::Verb
        };
    }
    if length > 5
        && ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    {
        return Tag::Adjective;
    }
    // an unknown -s word right after its subject ("Iron rusts")
    if previous.is_some_and(Tag::is_nominal) && has_plural_shape(lower) {
        return Tag::Verb;
    }
    common_noun(lower)
}

fn common_noun(lower: &str) -> Tag {
    if has_plural_shape(lower) {
        Tag::PluralNoun
    } else {
        Tag::Noun
    }
}

fn proper_noun(word: &str) -> Tag {
    let lower = word.to_lowercase();
    let demonym_or_group = ["ans", "ers", "ists", "ites"]
        .iter()
        .any(|suffix| lower.ends_with(suffix));
    if demonym_or_group && !is_acronym(word) {
        Tag::ProperPluralNoun
    } else {
        Tag::ProperNoun
    }
}

fn has_plural_shape(lower: &str) -> bool {
    lower.chars().count() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is", "ous"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_acronym(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// Possible base forms of a stem left after stripping an inflection:
/// as-is, silent `e` restored, `i` back to `y`, doubled consonant undone.
fn inflection_stems(stem: &str) -> Vec<String> {
    let mut stems = vec![stem.to_string(), format!("{stem}e")];
    if let Some(base) = stem.strip_suffix('i') {
        stems.push(format!("{base}y"));
    }
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 3 && chars[chars.len() - 1] == chars[chars.len() - 2] {
        stems.push(chars[..chars.len() - 1].iter().collect());
    }
    stems
}

fn third_person_stems(lower: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if let Some(base) = lower.strip_suffix("ies") {
        stems.push(format!("{base}y"));
    }
    if let Some(base) = lower.strip_suffix("es") {
        stems.push(base.to_string());
    }
    if !lower.ends_with("ss") {
        if let Some(base) = lower.strip_suffix('s') {
            stems.push(base.to_string());
        }
    }
    stems.retain(|stem| !stem.is_empty());
    stems
}
