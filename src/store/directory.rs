//! A single remapping table.

use crate::domain::PhoneNumber;
use std::collections::HashMap;

/// Maps an original phone number to the number it was changed to.
///
/// Keys are unique; inserting an existing key overwrites its target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: HashMap<PhoneNumber, PhoneNumber>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `src -> dst`, returning the previous target of `src` if any.
    pub fn insert(&mut self, src: PhoneNumber, dst: PhoneNumber) -> Option<PhoneNumber> {
        self.entries.insert(src, dst)
    }

    /// Remove the entry for `src`. Returns whether an entry existed.
    pub fn erase(&mut self, src: &str) -> bool {
        self.entries.remove(src).is_some()
    }

    /// Target recorded for `src`, if any.
    pub fn get(&self, src: &str) -> Option<&PhoneNumber> {
        self.entries.get(src)
    }

    pub fn contains(&self, src: &str) -> bool {
        self.entries.contains_key(src)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(original, redirected)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&PhoneNumber, &PhoneNumber)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> PhoneNumber {
        PhoneNumber::new(s).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut dir = Directory::new();
        assert!(dir.insert(num("111"), num("222")).is_none());

        assert_eq!(dir.get("111"), Some(&num("222")));
        assert_eq!(dir.get("222"), None);
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut dir = Directory::new();
        dir.insert(num("111"), num("222"));
        let previous = dir.insert(num("111"), num("333"));

        assert_eq!(previous, Some(num("222")));
        assert_eq!(dir.get("111"), Some(&num("333")));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_erase_present_and_absent() {
        let mut dir = Directory::new();
        dir.insert(num("111"), num("222"));

        assert!(!dir.erase("999"));
        assert_eq!(dir.len(), 1);

        assert!(dir.erase("111"));
        assert!(dir.is_empty());
        assert!(!dir.contains("111"));
    }
}
