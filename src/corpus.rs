//! Plumbing for building distributions out of observed data: a word
//! tokenizer for text corpora and a frequency normalizer. The sampler
//! itself never does I/O; these feed it.

use std::collections::HashMap;
use std::fs;
use std::hash::Hash;
use std::io;
use std::path::Path;

/// Read a text file into lowercase word tokens, trimming punctuation off
/// both ends of each whitespace-separated chunk. Chunks that were pure
/// punctuation are dropped.
pub fn read_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .split_whitespace()
        .map(|chunk| {
            chunk
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect())
}

/// Turn a sequence of observations into an empirical distribution:
/// each distinct item maps to `count / total`.
///
/// An empty input yields an empty map, which the table constructor then
/// rejects as [`VoseError::Empty`](crate::VoseError::Empty).
pub fn to_distribution<T, I>(items: I) -> HashMap<T, f64>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, u64> = HashMap::new();
    let mut total = 0u64;
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
        total += 1;
    }
    counts
        .into_iter()
        .map(|(item, c)| (item, c as f64 / total as f64))
        .collect()
}
