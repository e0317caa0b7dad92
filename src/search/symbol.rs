use internment::Intern;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
};

/// An interned string, used for node names and action labels of problems
/// that are described by text. Cheap to copy, hash and compare for equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    inner: Intern<String>,
}

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self {
            inner: Intern::from_ref(name),
        }
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

// Ordering is by the string contents, not by the interned pointer, so that it
// is stable across runs.
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// This custom implementation hides the internment details from the user.
impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
