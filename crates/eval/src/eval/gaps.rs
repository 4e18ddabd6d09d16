// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight windows scan.
use showdown_cards::Rank;

use crate::game::WheelPolicy;

/// A window of consecutive ranks found by [scan].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// The slot index of the highest rank in the window.
    pub top: usize,
    /// The window position in scan order, lower is stronger.
    pub priority: usize,
    /// The window slots from the top down with the pool index of the card
    /// that fills the slot.
    pub slots: Vec<(Rank, Option<usize>)>,
}

impl Run {
    /// The number of slots filled by natural cards.
    pub fn present(&self) -> usize {
        self.slots.iter().filter(|(_, idx)| idx.is_some()).count()
    }

    /// Checks if this is the A-2-3-4-5 window.
    pub fn is_wheel(&self) -> bool {
        self.slots.last().is_some_and(|(r, _)| *r == Rank::LowAce)
    }

    /// Empty slots in the order wild cards should fill them.
    ///
    /// Gaps between natural cards come first from the highest, then slots
    /// above the highest card from the closest, then slots below the lowest
    /// card.
    pub fn fill_order(&self) -> Vec<usize> {
        let filled = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(pos, (_, idx))| idx.map(|_| pos))
            .collect::<Vec<_>>();

        let (Some(&first), Some(&last)) = (filled.first(), filled.last()) else {
            return (0..self.slots.len()).collect();
        };

        let inside = (first..last).filter(|&pos| self.slots[pos].1.is_none());
        let above = (0..first).rev();
        let below = last + 1..self.slots.len();

        inside.chain(above).chain(below).collect()
    }
}

/// Finds the best window of `span` consecutive ranks that `wilds` wild cards
/// can bring to `need` cards.
///
/// The naturals are `(pool index, rank)` pairs, the first card of each rank
/// fills its slot. Windows are tried from the highest down and the first one
/// that reaches `need` is returned.
pub fn scan(
    naturals: &[(usize, Rank)],
    span: usize,
    need: usize,
    wilds: usize,
    wheel: WheelPolicy,
) -> Option<Run> {
    runs(naturals, span, need, wilds, wheel).next()
}

/// All the windows [scan] accepts, strongest first.
pub fn runs(
    naturals: &[(usize, Rank)],
    span: usize,
    need: usize,
    wilds: usize,
    wheel: WheelPolicy,
) -> impl Iterator<Item = Run> {
    let mut slots = [None; Rank::SLOTS];
    for &(idx, rank) in naturals {
        slots[rank.index()].get_or_insert(idx);
        if rank == Rank::Ace && wheel != WheelPolicy::Off {
            slots[Rank::LowAce.index()].get_or_insert(idx);
        }
    }

    let ace = Rank::Ace.index();
    let tops = if span == 0 || span > Rank::SLOTS - 1 {
        Vec::new()
    } else {
        let lowest = if wheel == WheelPolicy::Off { span } else { span - 1 };
        match wheel {
            WheelPolicy::SecondHighest if lowest < ace => std::iter::once(ace)
                .chain(std::iter::once(lowest))
                .chain((lowest + 1..ace).rev())
                .collect::<Vec<_>>(),
            _ => (lowest..=ace).rev().collect(),
        }
    };

    tops.into_iter()
        .enumerate()
        .filter_map(move |(priority, top)| {
            let window = (top + 1 - span..=top).rev();
            let present = window.clone().filter(|&slot| slots[slot].is_some()).count();
            (present + wilds >= need && present + wilds > 0).then(|| Run {
                top,
                priority,
                slots: window
                    .filter_map(|slot| Rank::from_index(slot).map(|r| (r, slots[slot])))
                    .collect(),
            })
        })
}
