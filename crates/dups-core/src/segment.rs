//! Sentence and line segmentation.

use std::collections::BTreeSet;

use crate::normalize::is_sentence_terminator;

/// Words whose trailing period never ends a sentence. Compared lower-cased.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "sr", "jr", "rev", "vs", "e.g", "i.e",
];

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']')
}

/// The word that ends right before `end` (exclusive), stripped of leading
/// quotes and brackets.
fn word_before(chars: &[char], end: usize) -> String {
    let start = chars[..end]
        .iter()
        .rposition(|c| c.is_whitespace())
        .map_or(0, |p| p + 1);
    chars[start..end]
        .iter()
        .skip_while(|c| !c.is_alphanumeric())
        .collect()
}

fn is_abbreviation(word: &str) -> bool {
    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        // Single capital initial, as in "J. Smith". The pronoun "I" is not one.
        if first.is_uppercase() && first != 'I' {
            return true;
        }
    }
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let collapsed = current.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        sentences.push(collapsed);
    }
    current.clear();
}

/// Split `text` into sentences on `.`, `!` and `?`.
///
/// Closing quotes and brackets right after a terminator stay with the
/// sentence. A period after a known abbreviation or a single capital initial
/// does not end the sentence, and a terminator only ends one when followed by
/// whitespace or end of input. Whitespace inside a sentence is collapsed.
pub fn segment_into_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if !is_sentence_terminator(c) {
            current.push(c);
            i += 1;
            continue;
        }

        let run_start = i;
        while i < chars.len() && is_sentence_terminator(chars[i]) {
            current.push(chars[i]);
            i += 1;
        }
        let single_period = i - run_start == 1 && c == '.';
        while i < chars.len() && is_closer(chars[i]) {
            current.push(chars[i]);
            i += 1;
        }

        let at_boundary = i == chars.len() || chars[i].is_whitespace();
        let abbreviated = single_period && is_abbreviation(&word_before(&chars, run_start));

        if at_boundary && !abbreviated {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

/// One entry per non-empty, trimmed input line.
pub fn segment_into_set_of_lines(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
