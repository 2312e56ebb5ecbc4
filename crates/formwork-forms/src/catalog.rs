//! The fixed option catalog.

use std::sync::Arc;

use rand::RngExt;

/// An immutable, ordered list of option strings.
///
/// The catalog doubles as the menu contents and the universe of intended
/// values. It is shared read-only for the lifetime of the process; cloning
/// only bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCatalog {
    entries: Arc<[String]>,
}

impl OptionCatalog {
    /// Creates a catalog from the given options, preserving order.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the option at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Returns whether `value` is one of the options.
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e == value)
    }

    /// Iterates over the options in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Draws a uniformly random option, or `None` if the catalog is empty.
    pub fn sample<R: RngExt>(&self, rng: &mut R) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.entries.len());
        Some(&self.entries[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> OptionCatalog {
        OptionCatalog::new(["Option 1", "Option 2", "Option 3"])
    }

    #[test]
    fn test_order_and_lookup() {
        let c = catalog();
        assert_eq!(c.len(), 3);
        assert_eq!(c.get(0), Some("Option 1"));
        assert_eq!(c.get(3), None);
        assert!(c.contains("Option 2"));
        assert!(!c.contains("Option 4"));
    }

    #[test]
    fn test_sample_is_always_a_member() {
        let c = catalog();
        let mut rng = rand::rng();
        for _ in 0..100 {
            let pick = c.sample(&mut rng).unwrap();
            assert!(c.contains(pick));
        }
    }

    #[test]
    fn test_sample_is_roughly_uniform() {
        let c = catalog();
        let mut rng = rand::rng();
        let mut counts = [0usize; 3];
        let trials = 3000;
        for _ in 0..trials {
            let pick = c.sample(&mut rng).unwrap();
            let index = c.iter().position(|e| e == pick).unwrap();
            counts[index] += 1;
        }
        // Statistical, not exact: each option should land well away from
        // zero and from the total.
        for count in counts {
            assert!(count > trials / 6, "count {count} too low");
            assert!(count < trials / 2, "count {count} too high");
        }
    }

    #[test]
    fn test_sample_empty() {
        let c = OptionCatalog::new(Vec::<String>::new());
        let mut rng = rand::rng();
        assert!(c.sample(&mut rng).is_none());
    }
}
