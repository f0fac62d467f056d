#![forbid(unsafe_code)]

//! Card identity.
//!
//! A [`Card`] pairs an opaque stable id with the caller-supplied event text.
//! Ids are assigned by input order at widget initialization and never change
//! for the trial's duration; the canonical rank of a card is its index in
//! the caller's authoritative list.

use serde::{Deserialize, Serialize};

/// Stable opaque token identifying a card within one trial.
///
/// Assigned by input order; the numeric value is an implementation detail
/// and carries no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    /// Create an id from its input-order index.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// The raw token value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0 + 1)
    }
}

/// An event card: immutable for the trial's duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable opaque id, assigned by input order.
    pub id: CardId,
    /// Position in the caller-supplied authoritative list.
    pub canonical_index: usize,
    /// Display text.
    pub text: String,
}

impl Card {
    /// Build the card set from the caller's ordered text list.
    ///
    /// Canonical order is the input order. An empty input yields an empty
    /// set rather than an error.
    pub fn from_texts<I, S>(texts: I) -> Vec<Card>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(idx, text)| Card {
                id: CardId::from_index(idx as u32),
                canonical_index: idx,
                text: text.into(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_input_order() {
        let cards = Card::from_texts(["a", "b", "c"]);
        assert_eq!(cards.len(), 3);
        for (idx, card) in cards.iter().enumerate() {
            assert_eq!(card.id, CardId::from_index(idx as u32));
            assert_eq!(card.canonical_index, idx);
        }
        assert_eq!(cards[1].text, "b");
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let cards = Card::from_texts(Vec::<String>::new());
        assert!(cards.is_empty());
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(CardId::from_index(0).to_string(), "e1");
        assert_eq!(CardId::from_index(6).to_string(), "e7");
    }

    #[test]
    fn card_id_serializes_transparently() {
        let json = serde_json::to_string(&CardId::from_index(3)).unwrap();
        assert_eq!(json, "3");
        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CardId::from_index(3));
    }
}
