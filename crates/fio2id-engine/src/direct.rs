// Direct transliteration: a whole line through every scheme, no pattern.

use fio2id_translit::Transliterate;
use hashbrown::HashSet;

/// Each scheme's rendering of `line`, trailing whitespace trimmed,
/// duplicates dropped in first-seen order. Blank lines give nothing.
///
/// Unlike the identifier pipeline, output is not sanitized or lowercased.
pub fn transliterate_line<T: Transliterate>(line: &str, schemes: &[T]) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::with_capacity(schemes.len());
    let mut out = Vec::with_capacity(schemes.len());
    for scheme in schemes {
        let rendered = scheme.translate(line).trim_end().to_string();
        if !seen.contains(&rendered) {
            seen.insert(rendered.clone());
            out.push(rendered);
        }
    }
    out
}
