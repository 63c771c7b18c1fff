// Character rules for generated identifiers.
//
// Transliterated words are embedded verbatim into identifier patterns
// (usually an email local-part). Only ASCII letters and the placeholder-safe
// punctuation below survive.

/// Punctuation kept in identifiers besides ASCII letters.
const IDENTIFIER_PUNCTUATION: &[char] = &['?', '-', '_', '.', '@'];

/// Whether `c` may appear in a sanitized identifier word.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || IDENTIFIER_PUNCTUATION.contains(&c)
}

/// Strip every character outside the allow-set and lowercase the rest.
pub fn sanitize_word(word: &str) -> String {
    word.chars()
        .filter(|&c| is_identifier_char(c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Lowercase a character when the mapping is one-to-one; otherwise return
/// it unchanged.
pub fn simple_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Uppercase counterpart of [`simple_lower`].
pub fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Uppercase the first character of `s`, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(simple_upper(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_allow_set() {
        assert_eq!(sanitize_word("Gorodeckij"), "gorodeckij");
        assert_eq!(sanitize_word("a?b-c_d.e@f"), "a?b-c_d.e@f");
    }

    #[test]
    fn sanitize_strips_marks_and_digits() {
        assert_eq!(sanitize_word("Ob''ekt"), "obekt");
        assert_eq!(sanitize_word("e`tazh"), "etazh");
        assert_eq!(sanitize_word("Zoë 42"), "zo");
        assert_eq!(sanitize_word("Иван"), "");
    }

    #[test]
    fn sanitize_empty() {
        assert_eq!(sanitize_word(""), "");
    }

    #[test]
    fn simple_case_mapping() {
        assert_eq!(simple_lower('Ж'), 'ж');
        assert_eq!(simple_upper('ё'), 'Ё');
        assert_eq!(simple_lower('a'), 'a');
        // 'İ' lowercases to two chars; left alone
        assert_eq!(simple_lower('\u{0130}'), '\u{0130}');
    }

    #[test]
    fn capitalize_first_only() {
        assert_eq!(capitalize("shch"), "Shch");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("yE"), "YE");
    }
}
