// Transliteration fan-out: every record through every scheme.

use fio2id_core::character::sanitize_word;
use fio2id_core::{NameRecord, UNKNOWN_MARKER};
use fio2id_translit::Transliterate;
use hashbrown::HashSet;

/// Transliterate one record with one scheme.
///
/// Empty slots and the unknown marker are not handed to the scheme. Every
/// slot is then sanitized to the identifier allow-set and lowercased.
pub fn transliterate_record<T: Transliterate + ?Sized>(
    record: &NameRecord,
    scheme: &T,
) -> NameRecord {
    record.map_words(|word| {
        if word.is_empty() || word == UNKNOWN_MARKER {
            sanitize_word(word)
        } else {
            sanitize_word(&scheme.translate(word))
        }
    })
}

/// All `(record x scheme)` variants, duplicates removed in first-seen order.
pub fn transliterate_records<T: Transliterate>(
    records: &[NameRecord],
    schemes: &[T],
) -> Vec<NameRecord> {
    let mut seen: HashSet<NameRecord> = HashSet::with_capacity(records.len());
    let mut variants = Vec::with_capacity(records.len());

    for record in records {
        for scheme in schemes {
            let variant = transliterate_record(record, scheme);
            if !seen.contains(&variant) {
                seen.insert(variant.clone());
                variants.push(variant);
            }
        }
    }
    variants
}
