// Identifier formatting: records -> sorted, unique identifiers.

use fio2id_core::NameRecord;
use hashbrown::HashSet;

use crate::pattern::{Pattern, PatternError};

/// Render every record through `pattern`, drop duplicates and sort.
///
/// A single rendering failure fails the whole batch.
pub fn format_identifiers(
    records: &[NameRecord],
    pattern: &Pattern,
) -> Result<Vec<String>, PatternError> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut identifiers = Vec::with_capacity(records.len());

    for record in records {
        let identifier = pattern.render(record)?;
        if !seen.contains(&identifier) {
            seen.insert(identifier.clone());
            identifiers.push(identifier);
        }
    }

    identifiers.sort();
    Ok(identifiers)
}
