#![forbid(unsafe_code)]

//! Non-identity display shuffle.
//!
//! A participant must never see the true event order by chance, so the
//! initial display permutation is drawn by rejection sampling: a uniform
//! Fisher–Yates pass, re-drawn whenever the result is identical, as an
//! ordered id sequence, to the canonical input order.
//!
//! Only exact identity is rejected; a near-identity order (say, one adjacent
//! pair swapped) is a valid draw. Expected extra passes are O(1) for n > 3;
//! for n = 2 at most one extra draw is ever needed since only two
//! permutations exist.

use rand::Rng;

use crate::card::{Card, CardId};

/// Shuffle `cards` in place into a uniformly random non-identity permutation.
///
/// Zero- or one-element input is returned unchanged (the non-identity
/// invariant holds vacuously).
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    if cards.len() < 2 {
        return;
    }
    let canonical: Vec<CardId> = cards.iter().map(|c| c.id).collect();
    loop {
        for i in (1..cards.len()).rev() {
            let j = rng.random_range(0..=i);
            cards.swap(i, j);
        }
        if !is_canonical(cards, &canonical) {
            return;
        }
    }
}

fn is_canonical(cards: &[Card], canonical: &[CardId]) -> bool {
    cards.iter().map(|c| c.id).eq(canonical.iter().copied())
}
