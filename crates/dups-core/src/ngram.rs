//! Sliding-window word n-grams.

use std::collections::HashSet;

/// Fixed-capacity window over the last `n` pushed tokens.
///
/// Backed by a ring buffer with a rotating head, so a push is O(1) once
/// the window is full.
#[derive(Debug, Clone)]
pub struct WordWindow {
    slots: Vec<String>,
    capacity: usize,
    /// Index of the oldest token once the window is full.
    head: usize,
}

impl WordWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.slots.len() == self.capacity
    }

    /// Push a token, evicting the oldest one when full.
    pub fn push(&mut self, token: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.is_full() {
            self.slots[self.head] = token.into();
            self.head = (self.head + 1) % self.capacity;
        } else {
            self.slots.push(token.into());
        }
    }

    /// Tokens oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter()).map(String::as_str)
    }

    /// The space-joined window, defined only while full.
    pub fn current_window(&self) -> Option<String> {
        if !self.is_full() {
            return None;
        }
        Some(self.iter().collect::<Vec<_>>().join(" "))
    }
}

/// Builds the distinct n-grams of a token stream in first-seen order.
#[derive(Debug, Clone)]
pub struct NgramAggregator {
    window: WordWindow,
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl NgramAggregator {
    pub fn new(n: usize) -> Self {
        Self {
            window: WordWindow::new(n),
            seen: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    /// Feed one word. Trailing `,.!?` are trimmed first. Returns the n-gram
    /// completed by this word if it has not been seen before.
    pub fn push(&mut self, word: &str) -> Option<&str> {
        let word = word.trim_end_matches([',', '.', '!', '?']);
        self.window.push(word);
        let ngram = self.window.current_window()?;
        if self.seen.contains(&ngram) {
            return None;
        }
        self.seen.insert(ngram.clone());
        self.ordered.push(ngram);
        self.ordered.last().map(String::as_str)
    }

    /// Feed every whitespace-separated word of `text`.
    pub fn extend_from_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            self.push(word);
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Distinct n-grams in first-seen order.
    pub fn ngrams(&self) -> &[String] {
        &self.ordered
    }

    pub fn into_ordered(self) -> Vec<String> {
        self.ordered
    }

    pub fn into_set(self) -> HashSet<String> {
        self.seen
    }
}

/// Distinct `n`-grams of `text` in first-seen order.
pub fn ngrams(text: &str, n: usize) -> Vec<String> {
    let mut agg = NgramAggregator::new(n);
    agg.extend_from_text(text);
    agg.into_ordered()
}

/// The n-gram set of `text`.
pub fn ngram_set(text: &str, n: usize) -> HashSet<String> {
    let mut agg = NgramAggregator::new(n);
    agg.extend_from_text(text);
    agg.into_set()
}
