//! Text normalization: reduce a raw text unit to the canonical form that
//! comparisons operate on.

use parking_lot::RwLock;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::types::TextUnit;

static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:Mrs|Mr|Ms|Dr|Prof|St|Sr|Jr|Rev)\.").unwrap());
static RE_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)*").unwrap());
static RE_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[-\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\u{2015}]+").unwrap());
static RE_INNER_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[,;:\"()\\[\\]{}\u{201C}\u{201D}\u{2018}\u{00AB}\u{00BB}]").unwrap()
});

/// English stop words (NLTK list).
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

fn ligatures() -> [(char, &'static str); 11] {
    [
        ('\u{FB00}', "ff"), ('\u{FB01}', "fi"), ('\u{FB02}', "fl"), ('\u{FB03}', "ffi"),
        ('\u{FB04}', "ffl"), ('\u{FB05}', "st"), ('\u{FB06}', "st"), ('\u{00E6}', "ae"),
        ('\u{00C6}', "AE"), ('\u{0153}', "oe"), ('\u{0152}', "OE"),
    ]
}

/// Sentence-ending characters.
pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Expand typographic ligatures into their letter sequences.
pub fn expand_ligatures(text: &str) -> String {
    let table = ligatures();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table.iter().find(|(lig, _)| *lig == c) {
            Some((_, expansion)) => out.push_str(expansion),
            None => out.push(c),
        }
    }
    out
}

/// Normalize `raw`: expand ligatures, drop titles, numerics, hyphens and
/// internal punctuation, lower-case, optionally drop stop words, and
/// collapse whitespace. Sentence terminators survive.
pub fn normalize(raw: &str, remove_stop_words: bool) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let text = expand_ligatures(raw);
    let text = RE_TITLE.replace_all(&text, " ");
    let text = RE_NUMERIC.replace_all(&text, " ");
    let text = RE_HYPHEN.replace_all(&text, " ");
    let text = RE_INNER_PUNCT.replace_all(&text, " ");
    let text = text.to_lowercase();

    let mut words: Vec<String> = Vec::new();
    for token in text.split_whitespace() {
        let token = token.trim_matches(|c| c == '\'' || c == '\u{2019}');
        if token.is_empty() {
            continue;
        }
        if !token.chars().any(char::is_alphanumeric) {
            // Stray terminators left behind by removed numerics stick to the
            // previous word; any other punctuation-only token is dropped.
            if token.chars().all(is_sentence_terminator) {
                if let Some(last) = words.last_mut() {
                    last.push_str(token);
                }
            }
            continue;
        }
        if remove_stop_words && is_stop_word(token.trim_end_matches(is_sentence_terminator)) {
            continue;
        }
        words.push(token.to_string());
    }
    words.join(" ")
}

/// Remove one trailing sentence terminator, if present.
pub fn strip_terminator(text: &str) -> &str {
    match text.chars().last() {
        Some(c) if is_sentence_terminator(c) => &text[..text.len() - c.len_utf8()],
        _ => text,
    }
}

/// Memo of raw text to normalized text, scoped to one comparison run.
#[derive(Debug, Default)]
pub struct NormalizeCache {
    with_stops: RwLock<HashMap<String, String>>,
    without_stops: RwLock<HashMap<String, String>>,
}

impl NormalizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, remove_stop_words: bool) -> &RwLock<HashMap<String, String>> {
        if remove_stop_words { &self.without_stops } else { &self.with_stops }
    }

    /// Normalize through the cache.
    pub fn normalize(&self, raw: &str, remove_stop_words: bool) -> String {
        let table = self.table(remove_stop_words);
        if let Some(hit) = table.read().get(raw) {
            return hit.clone();
        }
        let normalized = normalize(raw, remove_stop_words);
        table.write().insert(raw.to_string(), normalized.clone());
        normalized
    }

    pub fn len(&self) -> usize {
        self.with_stops.read().len() + self.without_stops.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the comparable units for one input sequence.
pub fn prepare_units<S: AsRef<str>>(
    raw_units: &[S],
    remove_stop_words: bool,
    cache: &NormalizeCache,
) -> Vec<TextUnit> {
    let units: Vec<TextUnit> = raw_units
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            let normalized = cache.normalize(raw, remove_stop_words);
            TextUnit::new(raw, strip_terminator(&normalized))
        })
        .collect();
    tracing::debug!(
        units = units.len(),
        skipped = units.iter().filter(|u| u.is_skipped()).count(),
        "prepared text units"
    );
    units
}
