//! Process-wide string interning
//!
//! Equal words share one `Arc<str>`. Interning only saves memory and
//! speeds up lookups; equality of interned words is still content equality.

use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

/// Concurrent get-or-insert table of canonical strings
#[derive(Debug, Default)]
pub struct Interner {
    table: DashMap<Arc<str>, ()>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical instance of `word`, creating it on first use
    pub fn intern(&self, word: &str) -> Arc<str> {
        if let Some(existing) = self.table.get(word) {
            return Arc::clone(existing.key());
        }

        // Another thread may win the race; `entry` hands back whichever key landed.
        let entry = self.table.entry(Arc::from(word)).or_insert(());
        Arc::clone(entry.key())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

static GLOBAL: OnceLock<Interner> = OnceLock::new();

/// The interner shared by every tokenizer and lexicon in the process
pub fn global() -> &'static Interner {
    GLOBAL.get_or_init(Interner::new)
}

/// Intern through the global table
pub fn intern(word: &str) -> Arc<str> {
    global().intern(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_equal_words_share_instance() {
        let interner = Interner::new();
        let a = interner.intern("hejsa");
        let b = interner.intern(&String::from("hejsa"));

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(interner.len(), 1);
    }

    #[test]
    fn test_distinct_words() {
        let interner = Interner::new();
        let a = interner.intern("godt");
        let b = interner.intern("skidt");

        assert_ne!(a, b);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_concurrent_interning_converges() {
        let interner = Arc::new(Interner::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let interner = Arc::clone(&interner);
                thread::spawn(move || {
                    (0..100)
                        .map(|i| interner.intern(&format!("ord{}", i % 10)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(interner.len(), 10);
        let first = interner.intern("ord3");
        let second = interner.intern("ord3");
        assert!(Arc::ptr_eq(&first, &second));
    }
}
