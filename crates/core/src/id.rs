//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stored item.
///
/// Issued by the item store from a monotonically increasing counter that starts
/// at [`ItemId::FIRST`]. Ids are never reused, even after deletion.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// The first id handed out by a fresh store.
    pub const FIRST: ItemId = ItemId(1);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// The id issued after this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

// Any integer parses; ids below FIRST simply never match a stored item.
impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!("42".parse::<ItemId>().unwrap(), ItemId::new(42));
        assert_eq!("-3".parse::<ItemId>().unwrap(), ItemId::new(-3));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = "abc".parse::<ItemId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ItemId:")),
            _ => panic!("Expected InvalidId error"),
        }
    }

    #[test]
    fn next_is_successor() {
        assert_eq!(ItemId::FIRST.next(), ItemId::new(2));
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
