//! Ordered event-type lists.
//!
//! The order of a list is exactly the order in which ids are submitted
//! to the persistence endpoint; position is never stored separately.

pub mod coordinator;

pub use coordinator::{ListCache, OrderStore, ReorderCoordinator, ReorderOutcome};

use serde::{Deserialize, Serialize};

/// Stable identifier of an ordered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An entry in an ordered event-type list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedItem {
    pub id: ItemId,
    pub title: String,
    /// Disabled items are not offered as move targets by the UI; the
    /// swap primitive itself is index-based and ignores this flag.
    #[serde(default)]
    pub disabled: bool,
}

/// Direction of a single-position move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    fn offset(self) -> isize {
        match self {
            MoveDirection::Up => -1,
            MoveDirection::Down => 1,
        }
    }
}

/// Move the item at `index` one position up or down, returning the new
/// order. Moving past either end of the list (or from an out-of-range
/// index) is a no-op: the original order comes back unchanged.
pub fn move_item<T: Clone>(list: &[T], index: usize, direction: MoveDirection) -> Vec<T> {
    let mut new_list = list.to_vec();

    if index >= list.len() {
        return new_list;
    }

    let target = index as isize + direction.offset();
    if target < 0 || target as usize >= list.len() {
        return new_list;
    }

    new_list.swap(index, target as usize);
    new_list
}
