//! Pending expression history
//!
//! Operands and operators are appended in entry order and kept until the
//! owner clears them. Nothing here validates the alternation; see
//! [`History::is_well_formed`] for an explicit check.

use crate::core::Operation;
use serde::{Deserialize, Serialize};

/// A single recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum HistoryItem {
    /// An operand
    Number(f64),
    /// A binary operator
    Operation(Operation),
}

impl HistoryItem {
    /// Returns the operand, if this item is one
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Operation(_) => None,
        }
    }

    /// Returns the operator, if this item is one
    #[must_use]
    pub const fn as_operation(&self) -> Option<Operation> {
        match self {
            Self::Operation(op) => Some(*op),
            Self::Number(_) => None,
        }
    }
}

impl std::fmt::Display for HistoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operation(op) => write!(f, "{op}"),
        }
    }
}

/// Ordered record of operands and operators awaiting evaluation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item
    pub fn push(&mut self, item: HistoryItem) {
        self.items.push(item);
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the items in entry order
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryItem> {
        self.items.iter()
    }

    /// Returns the items as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[HistoryItem] {
        &self.items
    }

    /// Returns the item at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    /// Returns the most recent item
    #[must_use]
    pub fn last(&self) -> Option<&HistoryItem> {
        self.items.last()
    }

    /// Returns true if the items alternate number, operation, ..., number
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.items.len() % 2 == 1
            && self.items.iter().enumerate().all(|(i, item)| {
                if i % 2 == 0 {
                    matches!(item, HistoryItem::Number(_))
                } else {
                    matches!(item, HistoryItem::Operation(_))
                }
            })
    }

    /// Serializes the history to JSON
    ///
    /// JSON has no encoding for NaN or infinity, so a history holding a
    /// non-finite operand is an error rather than a silent `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        if let Some(index) = self
            .items
            .iter()
            .position(|item| item.as_number().is_some_and(|n| !n.is_finite()))
        {
            return Err(serde::ser::Error::custom(format!(
                "non-finite operand at item {index}"
            )));
        }
        serde_json::to_string(&self.items)
    }

    /// Deserializes history from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<HistoryItem> = serde_json::from_str(json)?;
        Ok(Self { items })
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl Extend<HistoryItem> for History {
    fn extend<T: IntoIterator<Item = HistoryItem>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<HistoryItem> for History {
    fn from_iter<T: IntoIterator<Item = HistoryItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryItem;
    type IntoIter = std::slice::Iter<'a, HistoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
