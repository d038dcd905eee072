//! Location labels and dense location ids.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense index of a location inside a [`LocationGraph`](crate::graph::LocationGraph).
///
/// Ids are assigned in first-seen order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A rental location, identified only by its label.
///
/// Equality is exact string match. The label is not validated; an empty
/// label is a legal (if unusual) location.
///
/// # Examples
///
/// ```
/// use rental_graph::models::Location;
///
/// let a = Location::new("Mumbai");
/// assert_eq!(a.as_str(), "Mumbai");
/// assert_eq!(a, Location::from("Mumbai"));
/// assert_ne!(a, Location::from("mumbai"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a location from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Location {
    fn from(label: String) -> Self {
        Self(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Location::new("Delhi"), 3);
        assert_eq!(map.get("Delhi"), Some(&3));
        assert_eq!(map.get("delhi"), None);
    }

    #[test]
    fn test_empty_label_is_a_location() {
        let empty = Location::new("");
        assert_eq!(empty.as_str(), "");
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Location::new("Pune")).expect("serialize");
        assert_eq!(json, "\"Pune\"");
    }
}
