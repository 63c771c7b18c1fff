// Static rule tables for the 16 romanization schemes.
//
// All keys are lowercase; case is restored by the schema at lookup time.
// Rule groups shared between schemes are listed once and referenced by
// several tables.

use crate::SchemeId;

/// A rule table for one scheme.
///
/// - `letters`: single-letter renderings, applied after [`COMMON_LETTERS`]
///   so a scheme can override a common letter.
/// - `prev`: keyed by previous letter + current letter. A one-letter key
///   matches at the start of a word.
/// - `next`: keyed by current letter + next letter. A one-letter key
///   matches at the end of a word.
/// - `endings`: two-letter word endings, replaced as a unit.
pub struct SchemeTable {
    pub letters: &'static [(char, &'static str)],
    pub prev: &'static [&'static [(&'static str, &'static str)]],
    pub next: &'static [&'static [(&'static str, &'static str)]],
    pub endings: &'static [(&'static str, &'static str)],
}

/// Letters rendered the same way by every scheme.
pub const COMMON_LETTERS: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('з', "z"),
    ('и', "i"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
];

// ---------------------------------------------------------------------------
// Shared rule groups
// ---------------------------------------------------------------------------

/// `е` at the start of a word.
const YE_AT_START: &[(&str, &str)] = &[("е", "ye")];

/// `е` after a vowel.
const YE_AFTER_VOWEL: &[(&str, &str)] = &[
    ("ае", "ye"),
    ("ее", "ye"),
    ("ёе", "ye"),
    ("ие", "ye"),
    ("ое", "ye"),
    ("уе", "ye"),
    ("ые", "ye"),
    ("эе", "ye"),
    ("юе", "ye"),
    ("яе", "ye"),
];

/// `е` after a hard or soft sign.
const YE_AFTER_SIGN: &[(&str, &str)] = &[("ъе", "ye"), ("ье", "ye")];

/// `ё` after a sibilant loses its glide.
const E_AFTER_SIBILANT: &[(&str, &str)] = &[("жё", "e"), ("чё", "e"), ("шё", "e"), ("щё", "e")];

// ---------------------------------------------------------------------------
// Scheme tables
// ---------------------------------------------------------------------------

const ALA_LC_ALT: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('й', "i"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "iu"),
        ('я', "ia"),
    ],
    prev: &[],
    next: &[],
    endings: &[],
};

const BS_2979_ALT: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('й', "i"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[],
    next: &[],
    endings: &[("ий", "y"), ("ый", "y")],
};

const GOST_52290: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "yo"),
        ('ж', "zh"),
        ('й', "y"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[
        YE_AT_START,
        YE_AFTER_VOWEL,
        YE_AFTER_SIGN,
        E_AFTER_SIBILANT,
        &[("ъё", "ye"), ("ьё", "ye")],
    ],
    next: &[],
    endings: &[("ий", "iy"), ("ый", "y")],
};

const GOST_7034: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "jo"),
        ('ж', "zh"),
        ('й', "j"),
        ('х', "x"),
        ('ц', "c"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shh"),
        ('ъ', "''"),
        ('ы', "y"),
        ('ь', "'"),
        ('э', "e'"),
        ('ю', "ju"),
        ('я', "ja"),
    ],
    prev: &[],
    next: &[],
    endings: &[],
};

const ICAO_DOC_9303: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('й', "i"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', "ie"),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "iu"),
        ('я', "ia"),
    ],
    prev: &[],
    next: &[],
    endings: &[],
};

const GOST_779_ALT: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "yo"),
        ('ж', "zh"),
        ('й', "j"),
        ('х', "x"),
        ('ц', "cz"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shh"),
        ('ъ', "``"),
        ('ы', "y`"),
        ('ь', "`"),
        ('э', "e`"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[],
    // `ц` is written `c` before front vowels and `j`.
    next: &[&[
        ("це", "c"),
        ("ци", "c"),
        ("цй", "c"),
        ("цы", "c"),
    ]],
    endings: &[],
};

const MOSMETRO: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('й', "y"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "sch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[&[("тц", "s")]],
    next: &[],
    endings: &[("ий", "iy"), ("ый", "y")],
};

const TELEGRAM: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "j"),
        ('й', "i"),
        ('х', "h"),
        ('ц', "c"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "sch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[],
    next: &[],
    endings: &[],
};

const WIKIPEDIA: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "yo"),
        ('ж', "zh"),
        ('й', "y"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[YE_AT_START, YE_AFTER_VOWEL, YE_AFTER_SIGN, E_AFTER_SIBILANT],
    next: &[],
    endings: &[("ий", "y"), ("ый", "y")],
};

const YANDEX_MAPS: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "yo"),
        ('ж', "zh"),
        ('й', "y"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "sch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[YE_AFTER_SIGN],
    next: &[],
    endings: &[("ий", "iy"), ("ый", "iy")],
};

const YANDEX_MONEY: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('й', "j"),
        ('х', "h"),
        ('ц', "c"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "sch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[],
    next: &[],
    endings: &[],
};

const GOST_16876_ALT: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "jo"),
        ('ж', "zh"),
        ('й', "jj"),
        ('х', "kh"),
        ('ц', "c"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shh"),
        ('ъ', "\""),
        ('ы', "y"),
        ('ь', "'"),
        ('э', "eh"),
        ('ю', "ju"),
        ('я', "ja"),
    ],
    prev: &[],
    next: &[],
    endings: &[],
};

const GOST_52535: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('й', "i"),
        ('х', "kh"),
        ('ц', "tc"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', "ie"),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "iu"),
        ('я', "ia"),
    ],
    prev: &[],
    next: &[],
    endings: &[],
};

const MVD_310: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('й', "y"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[YE_AFTER_SIGN],
    next: &[],
    endings: &[],
};

const MVD_310_FR: SchemeTable = SchemeTable {
    letters: &[
        ('у', "ou"),
        ('е', "e"),
        ('ё', "e"),
        ('ж', "j"),
        ('й', "i"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "tch"),
        ('ш', "ch"),
        ('щ', "chtch"),
        ('ъ', ""),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "iou"),
        ('я', "ia"),
    ],
    prev: &[&[("ъе", "ie"), ("ье", "ie")]],
    next: &[],
    endings: &[("ий", "i"), ("ый", "y")],
};

const MVD_782: SchemeTable = SchemeTable {
    letters: &[
        ('е', "e"),
        ('ё', "e"),
        ('ж', "zh"),
        ('й', "y"),
        ('х', "kh"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('щ', "shch"),
        ('ъ', "ie"),
        ('ы', "y"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
    ],
    prev: &[YE_AT_START, YE_AFTER_VOWEL, YE_AFTER_SIGN],
    next: &[],
    endings: &[],
};

/// Rule table for `id`.
pub fn table(id: SchemeId) -> &'static SchemeTable {
    match id {
        SchemeId::AlaLcAlt => &ALA_LC_ALT,
        SchemeId::Bs2979Alt => &BS_2979_ALT,
        SchemeId::Gost52290 => &GOST_52290,
        SchemeId::Gost7034 => &GOST_7034,
        SchemeId::IcaoDoc9303 => &ICAO_DOC_9303,
        SchemeId::Gost779Alt => &GOST_779_ALT,
        SchemeId::Mosmetro => &MOSMETRO,
        SchemeId::Telegram => &TELEGRAM,
        SchemeId::Wikipedia => &WIKIPEDIA,
        SchemeId::YandexMaps => &YANDEX_MAPS,
        SchemeId::YandexMoney => &YANDEX_MONEY,
        SchemeId::Gost16876Alt => &GOST_16876_ALT,
        SchemeId::Gost52535 => &GOST_52535,
        SchemeId::Mvd310 => &MVD_310,
        SchemeId::Mvd310Fr => &MVD_310_FR,
        SchemeId::Mvd782 => &MVD_782,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUSSIAN_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

    #[test]
    fn every_scheme_covers_the_alphabet() {
        for id in SchemeId::ALL {
            let t = table(id);
            for c in RUSSIAN_ALPHABET.chars() {
                let covered = COMMON_LETTERS.iter().any(|&(k, _)| k == c)
                    || t.letters.iter().any(|&(k, _)| k == c);
                assert!(covered, "{id}: no rule for {c}");
            }
        }
    }

    #[test]
    fn rule_keys_have_expected_lengths() {
        for id in SchemeId::ALL {
            let t = table(id);
            for group in t.prev.iter().chain(t.next.iter()) {
                for (key, _) in group.iter() {
                    let n = key.chars().count();
                    assert!(n == 1 || n == 2, "{id}: bad context key {key}");
                }
            }
            for (key, _) in t.endings {
                assert_eq!(key.chars().count(), 2, "{id}: bad ending key {key}");
            }
        }
    }

    #[test]
    fn keys_are_lowercase() {
        for id in SchemeId::ALL {
            let t = table(id);
            for &(c, _) in t.letters {
                assert!(!c.is_uppercase(), "{id}: uppercase letter key {c}");
            }
        }
    }
}
