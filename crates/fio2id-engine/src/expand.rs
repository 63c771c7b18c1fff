// Candidate expansion: cartesian product over unknown slots.
//
// The expansion plan pairs every referenced slot that holds the unknown
// marker with its candidate source. Each step consumes the working sequence
// and returns a new, pre-sized one, so the enumeration order is fixed:
// ascending slot index, then candidate-source order.

use fio2id_core::{NameRecord, SlotIndex};

use crate::candidates::{CandidateSource, Expansion};

/// Slots to enumerate for `record`, with their candidate sources, in
/// ascending slot order.
pub fn expansion_plan<'a>(
    record: &NameRecord,
    referenced: &[SlotIndex],
    expansion: &'a Expansion,
) -> Vec<(SlotIndex, &'a CandidateSource)> {
    match expansion {
        Expansion::Disabled => Vec::new(),
        Expansion::Enabled(sources) => referenced
            .iter()
            .filter(|&&slot| record.is_unknown(slot))
            .map(|&slot| (slot, sources.for_slot(slot)))
            .collect(),
    }
}

/// Number of records [`expand_record`] will produce.
pub fn expansion_size(plan: &[(SlotIndex, &CandidateSource)]) -> usize {
    plan.iter()
        .fold(1usize, |acc, (_, source)| acc.saturating_mul(source.len()))
}

/// Every record obtainable by replacing unknown referenced slots with
/// candidates. Concrete values are left untouched; with expansion disabled
/// the record is returned as-is.
pub fn expand_record(
    record: &NameRecord,
    referenced: &[SlotIndex],
    expansion: &Expansion,
) -> Vec<NameRecord> {
    expansion_plan(record, referenced, expansion)
        .into_iter()
        .fold(vec![record.clone()], |working, (slot, source)| {
            expand_slot(working, slot, source)
        })
}

/// One expansion step: each record whose `slot` is unknown is replaced by
/// one copy per candidate.
pub fn expand_slot(
    working: Vec<NameRecord>,
    slot: SlotIndex,
    source: &CandidateSource,
) -> Vec<NameRecord> {
    let unknown = working.iter().filter(|r| r.is_unknown(slot)).count();
    let capacity = (working.len() - unknown).saturating_add(unknown.saturating_mul(source.len()));
    let mut next = Vec::with_capacity(capacity);

    for record in working {
        if record.is_unknown(slot) {
            next.extend(source.values().iter().map(|c| record.with_slot(slot, c.as_str())));
        } else {
            next.push(record);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::CandidateSources;

    const ALL: &[SlotIndex] = &SlotIndex::ALL;

    fn record(words: &[&str]) -> NameRecord {
        NameRecord::from_words(words.iter().copied())
    }

    #[test]
    fn one_unknown_slot_yields_one_record_per_candidate() {
        let input = record(&["Иванов", "?", "Петрович"]);
        let out = expand_record(&input, ALL, &Expansion::default());
        assert_eq!(out.len(), 23);
        for (expanded, letter) in out.iter().zip(crate::candidates::DEFAULT_ALPHABET) {
            assert_eq!(expanded.get(SlotIndex::FIRST), "Иванов");
            assert_eq!(expanded.get(SlotIndex::SECOND), letter);
            assert_eq!(expanded.get(SlotIndex::THIRD), "Петрович");
        }
    }

    #[test]
    fn two_unknown_slots_form_a_cartesian_product() {
        let sources = CandidateSources::new(
            CandidateSource::from_values(["a", "b"]),
            CandidateSource::from_values(["x", "y", "z"]),
            CandidateSource::default(),
        );
        let input = record(&["?", "?", "Smith"]);
        let out = expand_record(&input, ALL, &Expansion::Enabled(sources));

        let pairs: Vec<(&str, &str)> = out
            .iter()
            .map(|r| (r.get(SlotIndex::FIRST), r.get(SlotIndex::SECOND)))
            .collect();
        assert_eq!(
            pairs,
            [("a", "x"), ("a", "y"), ("a", "z"), ("b", "x"), ("b", "y"), ("b", "z")]
        );
    }

    #[test]
    fn unreferenced_unknown_slots_are_not_expanded() {
        let input = record(&["?", "?"]);
        let out = expand_record(&input, &[SlotIndex::FIRST], &Expansion::default());
        assert_eq!(out.len(), 23);
        assert!(out.iter().all(|r| r.is_unknown(SlotIndex::SECOND)));
    }

    #[test]
    fn disabled_expansion_is_identity() {
        let input = record(&["?", "Петр"]);
        let out = expand_record(&input, ALL, &Expansion::Disabled);
        assert_eq!(out, [input]);
    }

    #[test]
    fn concrete_record_is_unchanged() {
        let input = record(&["a", "b", "c"]);
        let out = expand_record(&input, ALL, &Expansion::default());
        assert_eq!(out, [input]);
    }

    #[test]
    fn empty_candidate_source_removes_the_record() {
        let sources = CandidateSources::new(
            CandidateSource::from_values(Vec::<String>::new()),
            CandidateSource::default(),
            CandidateSource::default(),
        );
        let input = record(&["?", "b"]);
        let out = expand_record(&input, ALL, &Expansion::Enabled(sources));
        assert!(out.is_empty());
    }

    #[test]
    fn size_matches_product_of_sources() {
        let expansion = Expansion::default();
        let input = record(&["?", "b", "?"]);
        let plan = expansion_plan(&input, ALL, &expansion);
        assert_eq!(plan.len(), 2);
        assert_eq!(expansion_size(&plan), 23 * 23);
        assert_eq!(expand_record(&input, ALL, &expansion).len(), 23 * 23);
    }
}
