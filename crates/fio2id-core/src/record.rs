// Fixed-width name records.

use crate::slot::{SLOT_COUNT, SlotIndex, UNKNOWN_MARKER};

/// Total width of a record: the reserved slot 0 plus three name slots.
pub const RECORD_WIDTH: usize = SLOT_COUNT + 1;

/// A name split into slots, indexed `[0, 1, 2, 3]`.
///
/// Slot 0 is always the empty string. Slots 1-3 hold a concrete word, the
/// unknown marker `?`, or the empty string. The width never changes, so
/// equality and hashing compare all four values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NameRecord {
    values: [String; RECORD_WIDTH],
}

impl NameRecord {
    /// A record with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a record from up to three words; missing words become `""` and
    /// words past the third are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::empty();
        for (slot, word) in SlotIndex::ALL.iter().zip(words) {
            record.values[slot.get()] = word.into();
        }
        record
    }

    /// Value stored at `slot`.
    #[inline]
    pub fn get(&self, slot: SlotIndex) -> &str {
        &self.values[slot.get()]
    }

    /// Value at a raw position, including the reserved slot 0.
    pub fn get_index(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Replace the value at `slot`.
    pub fn set(&mut self, slot: SlotIndex, value: impl Into<String>) {
        self.values[slot.get()] = value.into();
    }

    /// Copy of this record with `slot` replaced.
    pub fn with_slot(&self, slot: SlotIndex, value: impl Into<String>) -> Self {
        let mut record = self.clone();
        record.set(slot, value);
        record
    }

    /// Whether `slot` holds the unknown marker.
    #[inline]
    pub fn is_unknown(&self, slot: SlotIndex) -> bool {
        self.get(slot) == UNKNOWN_MARKER
    }

    /// Apply `f` to each name slot. Slot 0 stays empty.
    pub fn map_words<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let mut record = Self::empty();
        for slot in SlotIndex::ALL {
            record.values[slot.get()] = f(self.get(slot));
        }
        record
    }

    /// All four values, slot 0 first.
    pub fn values(&self) -> &[String; RECORD_WIDTH] {
        &self.values
    }
}
