use std::collections::HashSet;

// A period after one of these never closes a sentence ("Dr. Smith", "e.g. iron").
const NON_TERMINAL_ABBREVIATIONS: [&str; 24] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "e.g", "i.e", "cf", "al",
    "approx", "fig", "vol", "pp", "ch", "lt", "col", "capt", "rev",
];

// Nouns naming something by a letter ("Vitamin C.", "Plan B."), where the
// letter is not somebody's initial.
const LETTER_LABELS: [&str; 12] = [
    "vitamin", "type", "plan", "grade", "class", "group", "section", "part", "appendix",
    "exhibit", "model", "option",
];

#[derive(Debug, Clone)]
pub struct Segmenter {
    abbreviations: HashSet<&'static str>,
}

impl Segmenter {
    pub fn english() -> Self {
        Self {
            abbreviations: NON_TERMINAL_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Splits `text` into trimmed, non-empty sentences.
    ///
    /// A run of `.`, `!` or `?` (plus any closing quotes or brackets) ends a
    /// sentence when whitespace or the end of input follows it. For a plain
    /// period the next word must not start lowercase and the word before it
    /// must not be an initial or a known abbreviation. A capital letter counts
    /// as an initial unless it labels a noun such as "Vitamin". Blank lines
    /// always end a sentence.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (position, c) = chars[i];
            if is_terminal(c) {
                let mut j = i + 1;
                while j < chars.len() && is_terminal(chars[j].1) {
                    j += 1;
                }
                let run_end = j;
                while j < chars.len() && is_closing(chars[j].1) {
                    j += 1;
                }
                if self.is_boundary(text, &chars, start, i, run_end, j) {
                    let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
                    push_sentence(&mut sentences, text, start, end);
                    start = end;
                }
                i = j;
                continue;
            }
            if c == '\n' && is_paragraph_break(&chars, i) {
                push_sentence(&mut sentences, text, start, position);
                start = position;
            }
            i += 1;
        }
        push_sentence(&mut sentences, text, start, text.len());
        sentences
    }

    fn is_boundary(
        &self,
        text: &str,
        chars: &[(usize, char)],
        start: usize,
        run_start: usize,
        run_end: usize,
        after: usize,
    ) -> bool {
        let Some(&(_, next)) = chars.get(after) else {
            return true;
        };
        if !next.is_whitespace() {
            return false;
        }
        let Some(following) = chars[after..]
            .iter()
            .map(|&(_, c)| c)
            .find(|c| !c.is_whitespace())
        else {
            return true;
        };

        let run = &chars[run_start..run_end];
        if run.iter().any(|&(_, c)| c == '!' || c == '?') {
            return true;
        }
        if following.is_lowercase() {
            return false;
        }
        if run.len() > 1 {
            // ellipsis followed by a capitalised word
            return true;
        }

        let (word_start, word) = preceding_word(text, start, chars[run_start].0);
        if self.abbreviations.contains(word.to_lowercase().as_str()) {
            return false;
        }
        let mut letters = word.chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            return true;
        };
        if !letter.is_uppercase() {
            return true;
        }
        let head_end = start + text[start..word_start].trim_end().len();
        let (_, head) = preceding_word(text, start, head_end);
        let head = head
            .trim_end_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        LETTER_LABELS.contains(&head.as_str())
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::english()
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»')
}

fn is_paragraph_break(chars: &[(usize, char)], newline: usize) -> bool {
    chars[newline + 1..]
        .iter()
        .map(|&(_, c)| c)
        .take_while(|c| c.is_whitespace())
        .any(|c| c == '\n')
}

/// The whitespace-delimited word ending right before `end`, without leading
/// punctuation such as an opening bracket, and the byte offset where its
/// whitespace-delimited span starts.
fn preceding_word(text: &str, start: usize, end: usize) -> (usize, &str) {
    let before = &text[start..end];
    let word_start = before
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let word = before[word_start..].trim_start_matches(|c: char| !c.is_alphanumeric());
    (start + word_start, word)
}

fn push_sentence<'a>(sentences: &mut Vec<&'a str>, text: &'a str, start: usize, end: usize) {
    let trimmed = text[start..end].trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
