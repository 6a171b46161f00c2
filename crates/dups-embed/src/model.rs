//! Word2vec model in the Google binary format.
//!
//! Layout: an ASCII header `"<vocab> <dim>\n"`, then for every word the word
//! itself terminated by a space, followed by `dim` little-endian `f32`s and an
//! optional newline.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;

use crate::distance;
use crate::error::{EmbedError, Result};

/// Upper bounds on what the header may make us reserve up front. Larger
/// models grow as entries are read.
const MAX_PREALLOCATED_WORDS: usize = 1 << 16;
const MAX_PREALLOCATED_FLOATS: usize = 1 << 24;
/// Largest vector dimension accepted from a header.
const MAX_DIMENSION: usize = 1 << 16;

/// Word vectors, L2-normalized on load.
#[derive(Debug, Clone)]
pub struct Word2VecModel {
    dimension: usize,
    index: HashMap<String, usize>,
    /// Row-major `index.len() x dimension`.
    vectors: Vec<f32>,
}

impl Word2VecModel {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let model = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            words = model.len(),
            dimension = model.dimension(),
            "loaded word2vec model"
        );
        Ok(model)
    }

    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let (vocab, dimension) = read_header(&mut reader)?;
        let mut model = Self {
            dimension,
            index: HashMap::with_capacity(vocab.min(MAX_PREALLOCATED_WORDS)),
            vectors: Vec::with_capacity((vocab * dimension).min(MAX_PREALLOCATED_FLOATS)),
        };

        let mut word_buf = Vec::new();
        let mut vector = vec![0f32; dimension];
        for i in 0..vocab {
            word_buf.clear();
            if reader.read_until(b' ', &mut word_buf)? == 0 {
                return Err(EmbedError::Truncated { expected: vocab, got: i });
            }
            let word = String::from_utf8_lossy(&word_buf);
            let word = word.trim();
            if word.is_empty() {
                return Err(EmbedError::MalformedEntry { index: i, reason: "empty word".into() });
            }
            let word = word.to_string();
            match reader.read_f32_into::<LittleEndian>(&mut vector) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(EmbedError::Truncated { expected: vocab, got: i });
                }
                Err(e) => return Err(e.into()),
            }
            model.insert(word, &vector);
        }
        Ok(model)
    }

    /// Build a model from in-memory word vectors.
    pub fn from_pairs<I, S>(dimension: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut model = Self { dimension, index: HashMap::new(), vectors: Vec::new() };
        for (word, vector) in pairs {
            if vector.len() != dimension {
                return Err(EmbedError::DimensionMismatch { expected: dimension, got: vector.len() });
            }
            model.insert(word.into(), &vector);
        }
        Ok(model)
    }

    fn insert(&mut self, word: String, vector: &[f32]) {
        let mut normalized = vector.to_vec();
        distance::normalize_vector(&mut normalized);
        if let Some(&row) = self.index.get(&word) {
            let start = row * self.dimension;
            self.vectors[start..start + self.dimension].copy_from_slice(&normalized);
        } else {
            self.index.insert(word, self.index.len());
            self.vectors.extend_from_slice(&normalized);
        }
    }

    /// Write the model back out in the binary format.
    pub fn write_binary<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{} {}", self.len(), self.dimension)?;
        let mut rows: Vec<(&String, &usize)> = self.index.iter().collect();
        rows.sort_by_key(|(_, row)| **row);
        for (word, row) in rows {
            writer.write_all(word.as_bytes())?;
            writer.write_all(b" ")?;
            let start = row * self.dimension;
            for x in &self.vectors[start..start + self.dimension] {
                writer.write_f32::<LittleEndian>(*x)?;
            }
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        let row = *self.index.get(word)?;
        let start = row * self.dimension;
        Some(&self.vectors[start..start + self.dimension])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn read_header<R: BufRead>(reader: &mut R) -> Result<(usize, usize)> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(EmbedError::MalformedHeader("missing header".into()));
    }
    let mut fields = line.split_whitespace().map(str::parse::<usize>);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(vocab)), Some(Ok(dim)), None)
            if (1..=MAX_DIMENSION).contains(&dim) && vocab.checked_mul(dim).is_some() =>
        {
            Ok((vocab, dim))
        }
        _ => Err(EmbedError::MalformedHeader(line.trim().to_string())),
    }
}
