use crate::bitset::LetterBitset;
use crate::chars::{self, Character};

/// Collects, in order, the characters that begin a word inside an
/// identifier.
///
/// The head of the identifier counts unless it is punctuation; after that, a
/// word starts at an uppercase character following a non-uppercase one
/// (camelCase and PascalCase humps) and at a letter following punctuation
/// (snake_case, kebab-case, dotted names).
pub(crate) fn word_boundary_chars(chars: &[Character]) -> Vec<Character> {
    let mut boundaries = Vec::new();
    let Some(&first) = chars.first() else {
        return boundaries;
    };
    if !first.is_punctuation() {
        boundaries.push(first);
    }
    for pair in chars.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        let camel_hump = current.is_uppercase() && !previous.is_uppercase();
        let after_punctuation = previous.is_punctuation() && current.is_letter();
        if camel_hump || after_punctuation {
            boundaries.push(current);
        }
    }
    boundaries
}

/// An identifier precomputed for repeated scoring.
///
/// Construction derives everything [`query_match`](crate::query_match)
/// needs per invocation: the character sequence, the word-boundary
/// characters, and the letter presence set. A candidate is write-once;
/// the owning store builds it when an identifier is added and reuses it for
/// every subsequent query.
#[derive(Debug, Clone)]
pub struct Candidate {
    text: Box<str>,
    characters: Box<[Character]>,
    word_boundary_chars: Box<[Character]>,
    letters_present: LetterBitset,
}

impl Candidate {
    pub fn new(text: &str) -> Self {
        let characters = chars::characters(text).into_boxed_slice();
        let word_boundary_chars = word_boundary_chars(&characters).into_boxed_slice();
        let letters_present = LetterBitset::from_characters(&characters);
        Self {
            text: text.into(),
            characters,
            word_boundary_chars,
            letters_present,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn word_boundary_chars(&self) -> &[Character] {
        &self.word_boundary_chars
    }

    pub fn letters_present(&self) -> LetterBitset {
        self.letters_present
    }
}
