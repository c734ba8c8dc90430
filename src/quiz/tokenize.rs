#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    fn word(text: &'a str) -> Self {
        let kind = if text.chars().any(char::is_alphabetic) {
            TokenKind::Word
        } else if text.chars().any(|c| c.is_ascii_digit()) {
            TokenKind::Number
        } else {
            TokenKind::Punctuation
        };
        Self { text, kind }
    }

    fn punctuation(text: &'a str) -> Self {
        Self {
            text,
            kind: TokenKind::Punctuation,
        }
    }
}

// Contractions are split off the way treebank tokenizers do it: "don't" -> "do" + "n't"
const CLITICS: [&str; 14] = [
    "n't", "n’t", "'s", "’s", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'m", "’m",
];

/// Splits a sentence into word, number and punctuation tokens.
///
/// Leading and trailing punctuation is peeled off each whitespace-separated
/// chunk one character at a time; hyphens and apostrophes inside a word are
/// kept, except for the contraction suffixes in `CLITICS`.
pub fn words(sentence: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for chunk in sentence.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }
    tokens
}

fn split_chunk<'a>(chunk: &'a str, out: &mut Vec<Token<'a>>) {
    let Some(start) = chunk.find(char::is_alphanumeric) else {
        push_punctuation(chunk, out);
        return;
    };
    let end = chunk
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map_or(chunk.len(), |(i, c)| i + c.len_utf8());

    push_punctuation(&chunk[..start], out);
    split_clitic(&chunk[start..end], out);
    push_punctuation(&chunk[end..], out);
}

fn push_punctuation<'a>(text: &'a str, out: &mut Vec<Token<'a>>) {
    for (i, c) in text.char_indices() {
        out.push(Token::punctuation(&text[i..i + c.len_utf8()]));
    }
}

fn split_clitic<'a>(core: &'a str, out: &mut Vec<Token<'a>>) {
    for clitic in CLITICS {
        if core.len() <= clitic.len() {
            continue;
        }
        let split = core.len() - clitic.len();
        if core.is_char_boundary(split) && core[split..].eq_ignore_ascii_case(clitic) {
            out.push(Token::word(&core[..split]));
            out.push(Token::word(&core[split..]));
            return;
        }
    }
    out.push(Token::word(core));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentence: &str) -> Vec<&str> {
        words(sentence).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn peels_punctuation_off_words() {
        assert_eq!(
            texts("The quick (brown) fox, jumps!"),
            vec!["The", "quick", "(", "brown", ")", "fox", ",", "jumps", "!"]
        );
    }

    #[test]
    fn splits_contractions() {
        assert_eq!(texts("Dogs don't bark"), vec!["Dogs", "do", "n't", "bark"]);
        assert_eq!(texts("the cat's toy"), vec!["the", "cat", "'s", "toy"]);
    }

    #[test]
    fn keeps_hyphenated_words_whole() {
        assert_eq!(texts("a well-known fact."), vec!["a", "well-known", "fact", "."]);
    }

    #[test]
    fn classifies_token_kinds() {
        let tokens = words("In 1969, 3.5 million watched.");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Number,
                TokenKind::Punctuation,
                TokenKind::Number,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::Punctuation,
            ]
        );
    }

    #[test]
    fn handles_non_ascii_text() {
        assert_eq!(texts("«Café» naïve"), vec!["«", "Café", "»", "naïve"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(words("   ").is_empty());
    }
}
