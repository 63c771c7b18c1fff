// Record normalization: raw line -> fixed-width name record.

use fio2id_core::{NameRecord, SlotIndex, UNKNOWN_MARKER};

/// Split `line` on whitespace into a [`NameRecord`].
///
/// Missing words up to the highest referenced slot are filled with the
/// unknown marker. When the number of unknown words on the padded line equals
/// the number of referenced slots, the line carries nothing usable for the
/// pattern and the record collapses to all-empty, so no expansion happens for
/// it.
///
/// Unknown words past the third still count towards the collapse; the words
/// themselves are dropped. This never fails.
pub fn normalize_line(line: &str, referenced: &[SlotIndex]) -> NameRecord {
    let max_referenced = referenced.last().map_or(0, |slot| slot.get());

    let mut words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < max_referenced {
        words.resize(max_referenced, UNKNOWN_MARKER);
    }

    let unknown = words.iter().filter(|&&w| w == UNKNOWN_MARKER).count();
    if unknown == referenced.len() {
        return NameRecord::empty();
    }
    NameRecord::from_words(words)
}
