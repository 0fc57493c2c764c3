use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::resources;

/// A run of terminators, optional closing quotes or brackets, then whitespace or end of text.
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'”’)\]]*(?:\s+|$)"#).expect("Invalid sentence regex"));

static CLITIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(.+?)(n['’]t|['’](?:s|m|d|ll|re|ve))$").expect("Invalid clitic regex")
});

const OPENING: &[char] = &['"', '\'', '(', '[', '{', '<', '`', '“', '‘'];
const CLOSING: &[char] = &[',', ';', ':', '!', '?', ')', ']', '}', '>', '"', '\'', '”', '’'];

/// Treebank-style word tokenizer and abbreviation-aware sentence splitter.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    abbreviations: HashSet<String>,
}

impl Tokenizer {
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.into().to_lowercase())
                .collect(),
        }
    }

    /// Builds a tokenizer from the content of the sentence-rules bundle.
    pub fn from_bundle(content: &str) -> Self {
        Self::new(
            resources::entries(content)
                .map(|(_, line)| line.trim_end_matches('.').to_string())
                .filter(|line| !line.is_empty()),
        )
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for boundary in SENTENCE_END.find_iter(text) {
            let terminator = boundary.as_str().trim_end();
            if terminator == "." && self.is_period_internal(&text[start..boundary.start()]) {
                continue;
            }

            let sentence = text[start..boundary.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = boundary.end();
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }
        sentences
    }

    /// True when the period closing `preceding` belongs to an abbreviation or an initial.
    fn is_period_internal(&self, preceding: &str) -> bool {
        let word = preceding
            .split_whitespace()
            .next_back()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        let mut chars = word.chars();
        let is_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
        is_initial || self.is_abbreviation(word)
    }

    pub fn words(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for chunk in text.split_whitespace() {
            self.split_chunk(chunk, &mut tokens);
        }
        tokens
    }

    fn split_chunk(&self, chunk: &str, tokens: &mut Vec<String>) {
        let mut rest = chunk;

        while let Some(c) = rest.chars().next() {
            if !OPENING.contains(&c) || rest.len() == c.len_utf8() {
                break;
            }
            tokens.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        }

        let mut trailing = Vec::new();
        loop {
            // A run of two or more periods is punctuation, never part of the word
            let dots = rest.len() - rest.trim_end_matches('.').len();
            if dots >= 2 && dots < rest.len() {
                trailing.push(rest[rest.len() - dots..].to_string());
                rest = &rest[..rest.len() - dots];
                continue;
            }

            let Some(c) = rest.chars().next_back() else {
                break;
            };
            if rest.len() == c.len_utf8() {
                break;
            }

            let stem = &rest[..rest.len() - c.len_utf8()];
            let peel = CLOSING.contains(&c)
                || (c == '.' && !stem.contains('.') && !self.is_abbreviation(stem));
            if !peel {
                break;
            }
            trailing.push(c.to_string());
            rest = stem;
        }

        for piece in split_inner_punctuation(rest) {
            push_with_clitic(piece, tokens);
        }
        tokens.extend(trailing.into_iter().rev());
    }
}

/// Splits on `,` `;` `:` unless a digit follows, keeping the separators as tokens.
fn split_inner_punctuation(chunk: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = chunk.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, ',' | ';' | ':') {
            continue;
        }
        let before_digit = chars.peek().is_some_and(|(_, next)| next.is_ascii_digit());
        if before_digit {
            continue;
        }
        pieces.push(&chunk[start..i]);
        pieces.push(&chunk[i..i + 1]);
        start = i + 1;
    }
    pieces.push(&chunk[start..]);

    pieces.retain(|piece| !piece.is_empty());
    pieces
}

fn push_with_clitic(word: &str, tokens: &mut Vec<String>) {
    if word.eq_ignore_ascii_case("cannot") {
        tokens.push(word[..3].to_string());
        tokens.push(word[3..].to_string());
        return;
    }

    match CLITIC.captures(word) {
        Some(caps) => {
            tokens.push(caps[1].to_string());
            tokens.push(caps[2].to_string());
        }
        None => tokens.push(word.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Bundle;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tokenizer() -> Tokenizer {
        Tokenizer::from_bundle(Bundle::SentenceRules.embedded_text().unwrap())
    }

    #[rstest]
    #[case("Cats cats dogs. Dogs run fast!", vec!["Cats", "cats", "dogs", ".", "Dogs", "run", "fast", "!"])]
    #[case("Hello, world", vec!["Hello", ",", "world"])]
    #[case("\"Quoted.\"", vec!["\"", "Quoted", ".", "\""])]
    #[case("(see below)", vec!["(", "see", "below", ")"])]
    #[case("don't stop", vec!["do", "n't", "stop"])]
    #[case("it's John's", vec!["it", "'s", "John", "'s"])]
    #[case("we'll they've", vec!["we", "'ll", "they", "'ve"])]
    #[case("I cannot", vec!["I", "can", "not"])]
    #[case("well-known 3.14 1,000", vec!["well-known", "3.14", "1,000"])]
    #[case("a,b;c", vec!["a", ",", "b", ";", "c"])]
    #[case("wait... what", vec!["wait", "...", "what"])]
    #[case("end.. now", vec!["end", "..", "now"])]
    #[case("so.... \"fine..\"", vec!["so", "....", "\"", "fine", "..", "\""])]
    #[case("Dr. Smith", vec!["Dr.", "Smith"])]
    #[case("the U.S. army", vec!["the", "U.S.", "army"])]
    fn splits_words(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokenizer().words(text), expected);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(tokenizer().words("   \n\t").is_empty());
    }

    #[rstest]
    #[case("Cats cats dogs. Dogs run fast!", vec!["Cats cats dogs.", "Dogs run fast!"])]
    #[case("hello. world", vec!["hello.", "world"])]
    #[case("Is it? Yes! Fine.", vec!["Is it?", "Yes!", "Fine."])]
    #[case("Dr. Smith arrived. He sat.", vec!["Dr. Smith arrived.", "He sat."])]
    #[case("J. K. Rowling wrote it.", vec!["J. K. Rowling wrote it."])]
    #[case("Pi is 3.14 exactly", vec!["Pi is 3.14 exactly"])]
    #[case("\"Stop.\" She left.", vec!["\"Stop.\"", "She left."])]
    #[case("No terminator", vec!["No terminator"])]
    fn splits_sentences(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokenizer().sentences(text), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   \n  ")]
    fn whitespace_has_no_sentences(#[case] text: &str) {
        assert!(tokenizer().sentences(text).is_empty());
    }

    #[test]
    fn bundle_entries_drop_trailing_periods() {
        let tokenizer = Tokenizer::from_bundle("# comment\nmr.\nDr\n\n");

        assert_eq!(tokenizer.abbreviation_count(), 2);
        assert!(tokenizer.is_abbreviation("MR"));
        assert!(tokenizer.is_abbreviation("dr"));
    }
}
