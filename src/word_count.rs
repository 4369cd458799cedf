//! Word-frequency client: counts tokens of a text into a `ChainedHashMap`.

use crate::chained_hash_map::ChainedHashMap;
use crate::error::TableError;

/// Splits `text` on every character that is not alphanumeric. Empty tokens
/// are skipped and case is preserved.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

/// Formats one report line as `count=word`.
pub fn format_report_line(word: &str, count: usize) -> String {
    format!("{count}={word}")
}

#[derive(Debug)]
pub struct WordCounter {
    counts: ChainedHashMap<String, usize>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self {
            counts: ChainedHashMap::new(),
        }
    }

    pub fn with_table_size(table_size: usize) -> Result<Self, TableError> {
        Ok(Self {
            counts: ChainedHashMap::with_capacity(table_size)?,
        })
    }

    /// Insert-or-increment for a single word. Returns the new count.
    pub fn count_word(&mut self, word: &str) -> usize {
        if let Some(n) = self.counts.get_mut(word) {
            *n += 1;
            return *n;
        }
        self.counts.put(word.to_owned(), 1);
        1
    }

    /// Counts every token of `text`.
    pub fn count_words(&mut self, text: &str) {
        let mut tokens = 0usize;
        for word in tokenize(text) {
            self.count_word(word);
            tokens += 1;
        }
        tracing::debug!(tokens, distinct = self.distinct(), "counted words");
    }

    pub fn counts(&self) -> &ChainedHashMap<String, usize> {
        &self.counts
    }

    pub fn into_counts(self) -> ChainedHashMap<String, usize> {
        self.counts
    }

    /// Number of distinct words seen so far.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The `n` most frequent words, highest count first. The sort is stable,
    /// so equal counts keep table iteration order.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries = self.counts.entries();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

impl Default for WordCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChainedHashMap<String, usize>> for WordCounter {
    fn from(counts: ChainedHashMap<String, usize>) -> Self {
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_non_alphanumeric() {
        let words: Vec<&str> = tokenize("  The cat's  hat--on\t42 times!\n").collect();
        assert_eq!(words, vec!["The", "cat", "s", "hat", "on", "42", "times"]);
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize(" ,.;").count(), 0);
    }

    #[test]
    fn count_word_increments() {
        let mut wc = WordCounter::new();
        assert_eq!(wc.count_word("a"), 1);
        assert_eq!(wc.count_word("a"), 2);
        assert_eq!(wc.count_word("b"), 1);
        assert_eq!(wc.distinct(), 2);
        assert_eq!(wc.counts().get("a"), Some(&2));
    }

    #[test]
    fn the_cat_sat_on_the_mat() {
        let mut wc = WordCounter::with_table_size(3).unwrap();
        wc.count_words("the cat sat on the mat");
        let counts = wc.counts();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts.get("the"), Some(&2));
        for w in ["cat", "sat", "on", "mat"] {
            assert_eq!(counts.get(w), Some(&1));
        }
        assert_eq!(wc.top(1), vec![("the".to_string(), 2)]);
    }

    #[test]
    fn top_is_descending_and_bounded() {
        let mut wc = WordCounter::new();
        wc.count_words("c b a c b c d");
        let top = wc.top(10);
        assert_eq!(top.len(), 4);
        assert_eq!(top[0], ("c".to_string(), 3));
        assert_eq!(top[1], ("b".to_string(), 2));
        assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
        assert!(wc.top(0).is_empty());
    }

    #[test]
    fn zero_table_size_is_an_error() {
        assert!(matches!(
            WordCounter::with_table_size(0),
            Err(TableError::InvalidCapacity { requested: 0 })
        ));
    }

    #[test]
    fn report_line_format() {
        assert_eq!(format_report_line("the", 2), "2=the");
    }
}
