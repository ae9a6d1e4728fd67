//! Counters for words the lexicon does not know

use dashmap::DashMap;
use std::io::Write;
use std::sync::Arc;

/// Concurrent occurrence counter of unmatched words
#[derive(Debug, Default)]
pub struct UnmatchedWords {
    counts: DashMap<Arc<str>, u64>,
}

impl UnmatchedWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, word: &Arc<str>) {
        *self.counts.entry(Arc::clone(word)).or_insert(0) += 1;
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).map_or(0, |c| *c)
    }

    /// Distinct words recorded
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most frequent first, ties by word
    pub fn snapshot(&self) -> Vec<(Arc<str>, u64)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|entry| (Arc::clone(entry.key()), *entry.value()))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Write `count,word` lines
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for (word, count) in self.snapshot() {
            writeln!(writer, "{count},{word}")?;
        }
        writer.flush()
    }
}
