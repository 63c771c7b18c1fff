//! Cyrillic to Latin romanization schemes.
//!
//! Each scheme is a table-driven transliterator in the style of the Russian
//! romanization standards (GOST, ICAO, ALA-LC, BS 2979, MVD, and the
//! conventions used by Wikipedia, Telegram, Yandex and the Moscow metro).
//!
//! # Architecture
//!
//! - [`schema`] -- Rule lookup (ending, previous letter, next letter, letter)
//! - [`tables`] -- Static rule tables for the 16 schemes
//!
//! The engine never depends on [`Schema`] directly; it works against the
//! [`Transliterate`] trait so stages can be exercised with fakes.

pub mod schema;
pub mod tables;

use std::fmt;
use std::str::FromStr;

pub use schema::Schema;

/// A word transliterator: a pure function from source text to Latin text.
pub trait Transliterate {
    /// Stable name used in logs and on the command line.
    fn name(&self) -> &str;

    /// Transliterate `text`. Characters without a rule pass through.
    fn translate(&self, text: &str) -> String;
}

impl<T: Transliterate + ?Sized> Transliterate for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

impl<T: Transliterate + ?Sized> Transliterate for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn translate(&self, text: &str) -> String {
        (**self).translate(text)
    }
}

/// Error returned when a scheme name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transliteration scheme: {0}")]
pub struct SchemeParseError(pub String);

/// The 16 supported romanization schemes, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeId {
    AlaLcAlt,
    Bs2979Alt,
    Gost52290,
    Gost7034,
    IcaoDoc9303,
    Gost779Alt,
    Mosmetro,
    Telegram,
    Wikipedia,
    YandexMaps,
    YandexMoney,
    Gost16876Alt,
    Gost52535,
    Mvd310,
    Mvd310Fr,
    Mvd782,
}

impl SchemeId {
    /// Every scheme in canonical order. Output ordering before the final
    /// sort follows this order.
    pub const ALL: [SchemeId; 16] = [
        SchemeId::AlaLcAlt,
        SchemeId::Bs2979Alt,
        SchemeId::Gost52290,
        SchemeId::Gost7034,
        SchemeId::IcaoDoc9303,
        SchemeId::Gost779Alt,
        SchemeId::Mosmetro,
        SchemeId::Telegram,
        SchemeId::Wikipedia,
        SchemeId::YandexMaps,
        SchemeId::YandexMoney,
        SchemeId::Gost16876Alt,
        SchemeId::Gost52535,
        SchemeId::Mvd310,
        SchemeId::Mvd310Fr,
        SchemeId::Mvd782,
    ];

    /// Kebab-case name, e.g. `gost-779-alt`.
    pub fn name(self) -> &'static str {
        match self {
            SchemeId::AlaLcAlt => "ala-lc-alt",
            SchemeId::Bs2979Alt => "bs-2979-alt",
            SchemeId::Gost52290 => "gost-52290",
            SchemeId::Gost7034 => "gost-7034",
            SchemeId::IcaoDoc9303 => "icao-doc-9303",
            SchemeId::Gost779Alt => "gost-779-alt",
            SchemeId::Mosmetro => "mosmetro",
            SchemeId::Telegram => "telegram",
            SchemeId::Wikipedia => "wikipedia",
            SchemeId::YandexMaps => "yandex-maps",
            SchemeId::YandexMoney => "yandex-money",
            SchemeId::Gost16876Alt => "gost-16876-alt",
            SchemeId::Gost52535 => "gost-52535",
            SchemeId::Mvd310 => "mvd-310",
            SchemeId::Mvd310Fr => "mvd-310-fr",
            SchemeId::Mvd782 => "mvd-782",
        }
    }

    /// Short human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            SchemeId::AlaLcAlt => "ALA-LC, ASCII variant without diacritics",
            SchemeId::Bs2979Alt => "British Standard 2979:1958, simplified",
            SchemeId::Gost52290 => "GOST R 52290-2004 (road signs)",
            SchemeId::Gost7034 => "GOST R 7.0.34-2014, simplified",
            SchemeId::IcaoDoc9303 => "ICAO Doc 9303 (machine-readable travel documents)",
            SchemeId::Gost779Alt => "GOST 7.79-2000, system B",
            SchemeId::Mosmetro => "Moscow metro map",
            SchemeId::Telegram => "Telegram login transliteration",
            SchemeId::Wikipedia => "English Wikipedia convention",
            SchemeId::YandexMaps => "Yandex.Maps",
            SchemeId::YandexMoney => "Yandex.Money",
            SchemeId::Gost16876Alt => "GOST 16876-71, table 2",
            SchemeId::Gost52535 => "GOST R 52535.1-2006 (ID cards)",
            SchemeId::Mvd310 => "MVD order 310 (1997)",
            SchemeId::Mvd310Fr => "MVD order 310 (1997), French variant",
            SchemeId::Mvd782 => "MVD order 782 (2000)",
        }
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeId {
    type Err = SchemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SchemeId::ALL
            .into_iter()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| SchemeParseError(s.to_string()))
    }
}

/// An ordered, immutable set of compiled schemas.
///
/// Built once per run and shared read-only by every line.
pub struct SchemeSet {
    schemas: Vec<Schema>,
}

impl SchemeSet {
    /// All 16 schemes in canonical order.
    pub fn all() -> Self {
        Self::select(&SchemeId::ALL)
    }

    /// The given schemes, in the given order. Duplicates are kept once.
    pub fn select(ids: &[SchemeId]) -> Self {
        let mut schemas: Vec<Schema> = Vec::with_capacity(ids.len());
        for &id in ids {
            if schemas.iter().all(|s| s.id() != id) {
                schemas.push(Schema::for_id(id));
            }
        }
        Self { schemas }
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Schema> {
        self.schemas.iter()
    }

    pub fn as_slice(&self) -> &[Schema] {
        &self.schemas
    }

    pub fn into_vec(self) -> Vec<Schema> {
        self.schemas
    }
}

impl<'a> IntoIterator for &'a SchemeSet {
    type Item = &'a Schema;
    type IntoIter = std::slice::Iter<'a, Schema>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for id in SchemeId::ALL {
            assert_eq!(id.name().parse::<SchemeId>(), Ok(id));
        }
    }

    #[test]
    fn from_str_is_lenient_about_case_and_underscores() {
        assert_eq!("GOST_779_ALT".parse::<SchemeId>(), Ok(SchemeId::Gost779Alt));
        assert_eq!(" telegram ".parse::<SchemeId>(), Ok(SchemeId::Telegram));
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "iso-9".parse::<SchemeId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown transliteration scheme: iso-9");
    }

    #[test]
    fn all_has_sixteen_distinct_schemes() {
        let set = SchemeSet::all();
        assert_eq!(set.len(), 16);
        let ids: Vec<SchemeId> = set.iter().map(Schema::id).collect();
        assert_eq!(ids, SchemeId::ALL);
    }

    #[test]
    fn select_keeps_order_and_drops_duplicates() {
        let set = SchemeSet::select(&[
            SchemeId::Telegram,
            SchemeId::AlaLcAlt,
            SchemeId::Telegram,
        ]);
        let names: Vec<&str> = set.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["telegram", "ala-lc-alt"]);
    }
}
