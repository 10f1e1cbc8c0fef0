//! Case-insensitive, insertion-ordered name collections.
//!
//! Tricks and diseases are both plain names where "Sit" and "sit" mean the
//! same thing. [`NameList`] keeps the first spelling it was given and
//! refuses case-insensitive duplicates.

/// An ordered list of names, unique under case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Whether a name matching `name` (ignoring case) is present.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// The stored spelling of the entry matching `name`, if any.
    pub fn find(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|idx| self.names.get(idx))
            .map(String::as_str)
    }

    /// Append `name` unless a matching entry exists. Returns `true` if added.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_owned());
        true
    }

    /// Remove the entry matching `name`, returning its stored spelling.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.position(name)?;
        Some(self.names.remove(idx))
    }

    /// Entries in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list is empty.
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.names
            .iter()
            .position(|existing| existing.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_refuses_case_insensitive_duplicates() {
        let mut list = NameList::new();
        assert!(list.insert("Sit"));
        assert!(!list.insert("sit"));
        assert!(!list.insert("SIT"));
        assert_eq!(list.as_slice(), ["Sit".to_owned()]);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut list = NameList::new();
        list.insert("Sit");
        list.insert("Roll Over");
        list.insert("Fetch");
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.as_slice(),
            ["Sit".to_owned(), "Roll Over".to_owned(), "Fetch".to_owned()]
        );
    }

    #[test]
    fn find_and_remove_ignore_case() {
        let mut list = NameList::new();
        list.insert("Kennel Cough");
        assert_eq!(list.find("kennel cough"), Some("Kennel Cough"));
        assert_eq!(list.remove("KENNEL COUGH"), Some("Kennel Cough".to_owned()));
        assert!(list.is_empty());
        assert_eq!(list.remove("kennel cough"), None);
    }
}
