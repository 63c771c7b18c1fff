// Name slot indices.
//
// A name line carries up to three words. Patterns address them as `{1}`,
// `{2}` and `{3}`; index 0 is a permanently empty placeholder so records can
// be indexed 1-based without shifting.

use std::fmt;

/// Sentinel value for a word that should be enumerated rather than taken
/// literally.
pub const UNKNOWN_MARKER: &str = "?";

/// Number of addressable name slots (excluding the reserved slot 0).
pub const SLOT_COUNT: usize = 3;

/// One of the three name-word positions, guaranteed to be in `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub const FIRST: SlotIndex = SlotIndex(1);
    pub const SECOND: SlotIndex = SlotIndex(2);
    pub const THIRD: SlotIndex = SlotIndex(3);

    /// All slots in ascending order.
    pub const ALL: [SlotIndex; SLOT_COUNT] = [Self::FIRST, Self::SECOND, Self::THIRD];

    /// Returns `None` when `index` is outside `1..=3`.
    pub fn new(index: usize) -> Option<SlotIndex> {
        match index {
            1..=SLOT_COUNT => Some(SlotIndex(index as u8)),
            _ => None,
        }
    }

    /// Position of this slot inside a [`NameRecord`](crate::NameRecord).
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Zero-based position, for per-slot arrays that have no reserved slot 0.
    #[inline]
    pub fn offset(self) -> usize {
        self.get() - 1
    }
}

impl From<SlotIndex> for usize {
    fn from(slot: SlotIndex) -> usize {
        slot.get()
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
