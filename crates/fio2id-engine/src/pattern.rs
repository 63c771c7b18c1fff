// Identifier patterns.
//
// A pattern is a `str.format`-style template such as
// `{3}_{1:.1}{2:.1}@example.ru`. It is parsed once into literal and
// placeholder segments; the referenced slot set is derived from the
// placeholders and validated before any line is processed.
//
// Supported placeholder syntax:
//
//   {i}  {i!s}  {i!r}  {i:spec}  {i!r:spec}      i in 1..=3
//   spec = [[fill]align][0][width][.precision][s]    align in < > ^
//
// `{{` and `}}` are literal braces.

use std::fmt::Write as _;

use fio2id_core::{NameRecord, SlotIndex};

/// Pattern analysis and rendering failures. All of them are fatal for a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern has no slot placeholders")]
    NoPlaceholders,
    #[error("slot index {index} is out of range (expected 1, 2 or 3)")]
    SlotOutOfRange { index: String },
    #[error("invalid placeholder field {field:?}: expected a slot number")]
    InvalidField { field: String },
    #[error(
        "index or attribute access in {field:?} is not supported; \
         use a precision such as {{1:.1}} for leading characters"
    )]
    FieldAccess { field: String },
    #[error("unbalanced brace at position {position}")]
    UnbalancedBrace { position: usize },
    #[error("invalid format spec {spec:?}: {reason}")]
    InvalidFormatSpec { spec: String, reason: &'static str },
    #[error("invalid conversion {conversion:?}: expected s, r or a")]
    InvalidConversion { conversion: String },
    #[error("slot {slot} is not available in the record")]
    SlotUnavailable { slot: SlotIndex },
}

/// Horizontal alignment inside a padded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Value conversion applied before the format spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conversion {
    /// `!s` or no conversion: the value as-is.
    #[default]
    Str,
    /// `!r` / `!a`: the value wrapped in single quotes.
    Repr,
}

/// Parsed format spec for a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Align,
    pub width: Option<usize>,
    /// Maximum number of characters kept ("first N characters").
    pub precision: Option<usize>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Align::Left,
            width: None,
            precision: None,
        }
    }
}

impl FormatSpec {
    /// Parse the text after `:` in a placeholder.
    pub fn parse(spec: &str) -> Result<Self, PatternError> {
        let invalid = |reason| PatternError::InvalidFormatSpec {
            spec: spec.to_string(),
            reason,
        };
        if spec.contains(['{', '}']) {
            return Err(invalid("nested fields are not supported"));
        }

        let chars: Vec<char> = spec.chars().collect();
        let mut out = FormatSpec::default();
        let mut i = 0;
        let mut explicit_fill = false;

        if chars.len() >= 2 && is_align_char(chars[1]) {
            out.fill = chars[0];
            out.align = parse_align(chars[1]).ok_or_else(|| invalid(NO_EQUALS_ALIGN))?;
            explicit_fill = true;
            i = 2;
        } else if let Some(&c) = chars.first().filter(|&&c| is_align_char(c)) {
            out.align = parse_align(c).ok_or_else(|| invalid(NO_EQUALS_ALIGN))?;
            i = 1;
        }

        match chars.get(i) {
            Some('+' | '-' | ' ') => return Err(invalid("sign is not allowed for text")),
            Some('z') => return Err(invalid("'z' is not allowed for text")),
            Some('#') => return Err(invalid("alternate form is not allowed for text")),
            _ => {}
        }

        // The zero flag only replaces the default fill, whatever the alignment.
        if chars.get(i) == Some(&'0') {
            if !explicit_fill {
                out.fill = '0';
            }
            i += 1;
        }

        let (width, next) = take_number(&chars, i);
        out.width = width;
        i = next;

        if matches!(chars.get(i), Some(',' | '_')) {
            return Err(invalid("grouping is not allowed for text"));
        }

        if chars.get(i) == Some(&'.') {
            let (precision, next) = take_number(&chars, i + 1);
            if precision.is_none() {
                return Err(invalid("precision is missing after '.'"));
            }
            out.precision = precision;
            i = next;
        }

        match &chars[i..] {
            [] | ['s'] => Ok(out),
            _ => Err(invalid("only the 's' presentation type applies to text")),
        }
    }

    /// Apply precision, then pad to width.
    pub fn apply(&self, value: &str, out: &mut String) {
        let truncated: &str = match self.precision {
            Some(n) => match value.char_indices().nth(n) {
                Some((end, _)) => &value[..end],
                None => value,
            },
            None => value,
        };

        let len = truncated.chars().count();
        let pad = self.width.map_or(0, |w| w.saturating_sub(len));
        let (left, right) = match self.align {
            Align::Left => (0, pad),
            Align::Right => (pad, 0),
            Align::Center => (pad / 2, pad - pad / 2),
        };
        out.extend(std::iter::repeat_n(self.fill, left));
        out.push_str(truncated);
        out.extend(std::iter::repeat_n(self.fill, right));
    }
}

const NO_EQUALS_ALIGN: &str = "'=' alignment is not allowed for text";

fn is_align_char(c: char) -> bool {
    matches!(c, '<' | '>' | '^' | '=')
}

fn parse_align(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        _ => None,
    }
}

/// Read a run of ASCII digits starting at `start`.
fn take_number(chars: &[char], start: usize) -> (Option<usize>, usize) {
    let digits = chars[start.min(chars.len())..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if digits == 0 {
        return (None, start);
    }
    let number = chars[start..start + digits]
        .iter()
        .fold(0usize, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(c.to_digit(10).unwrap_or(0) as usize)
        });
    (Some(number), start + digits)
}

/// A slot reference inside a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub slot: SlotIndex,
    pub conversion: Conversion,
    pub spec: FormatSpec,
}

impl Placeholder {
    fn render(&self, value: &str, out: &mut String) {
        match self.conversion {
            Conversion::Str => self.spec.apply(value, out),
            Conversion::Repr => self.spec.apply(&format!("'{value}'"), out),
        }
    }
}

/// One piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed, validated identifier pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
    referenced: Vec<SlotIndex>,
    max_referenced: SlotIndex,
}

impl Pattern {
    /// Parse and validate a pattern.
    ///
    /// Fails when the pattern is malformed, references a slot outside
    /// `1..=3`, or references no slot at all.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let segments = parse_segments(source)?;

        let mut referenced: Vec<SlotIndex> = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(p) => Some(p.slot),
                Segment::Literal(_) => None,
            })
            .collect();
        referenced.sort();
        referenced.dedup();
        let max_referenced = *referenced.last().ok_or(PatternError::NoPlaceholders)?;

        Ok(Self {
            source: source.to_string(),
            segments,
            referenced,
            max_referenced,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Referenced slots, ascending and without duplicates. Never empty.
    pub fn referenced(&self) -> &[SlotIndex] {
        &self.referenced
    }

    /// Highest referenced slot.
    pub fn max_referenced(&self) -> SlotIndex {
        self.max_referenced
    }

    /// Substitute the record's slot values into the pattern.
    pub fn render(&self, record: &NameRecord) -> Result<String, PatternError> {
        let mut out = String::with_capacity(self.source.len() + 16);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => {
                    let value = record
                        .get_index(p.slot.get())
                        .ok_or(PatternError::SlotUnavailable { slot: p.slot })?;
                    p.render(value, &mut out);
                }
            }
        }
        Ok(out)
    }
}

fn parse_segments(source: &str) -> Result<Vec<Segment>, PatternError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' if chars.peek().map(|&(_, n)| n) == Some('{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek().map(|&(_, n)| n) == Some('}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err(PatternError::UnbalancedBrace { position: pos }),
            '{' => {
                let mut field = String::new();
                let mut depth = 0usize;
                let mut closed = false;
                for (_, f) in chars.by_ref() {
                    match f {
                        '{' => depth += 1,
                        '}' if depth == 0 => {
                            closed = true;
                            break;
                        }
                        '}' => depth -= 1,
                        _ => {}
                    }
                    field.push(f);
                }
                if !closed {
                    return Err(PatternError::UnbalancedBrace { position: pos });
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(parse_placeholder(&field)?));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_placeholder(field: &str) -> Result<Placeholder, PatternError> {
    let name_end = field.find(['!', ':']).unwrap_or(field.len());
    let (name, rest) = field.split_at(name_end);

    let digits = name.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 && name[digits..].starts_with(['[', '.']) {
        return Err(PatternError::FieldAccess {
            field: name.to_string(),
        });
    }
    if name.is_empty() || digits != name.len() {
        return Err(PatternError::InvalidField {
            field: name.to_string(),
        });
    }
    let slot = name
        .parse::<usize>()
        .ok()
        .and_then(SlotIndex::new)
        .ok_or_else(|| PatternError::SlotOutOfRange {
            index: name.to_string(),
        })?;

    let (conversion, spec) = match rest.strip_prefix('!') {
        Some(after) => {
            let (conv, spec) = match after.find(':') {
                Some(colon) => (&after[..colon], Some(&after[colon + 1..])),
                None => (after, None),
            };
            let conversion = match conv {
                "s" => Conversion::Str,
                "r" | "a" => Conversion::Repr,
                other => {
                    return Err(PatternError::InvalidConversion {
                        conversion: other.to_string(),
                    });
                }
            };
            (conversion, spec)
        }
        None => (Conversion::Str, rest.strip_prefix(':')),
    };

    let spec = match spec {
        Some(text) => FormatSpec::parse(text)?,
        None => FormatSpec::default(),
    };

    Ok(Placeholder {
        slot,
        conversion,
        spec,
    })
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Render a human-readable summary of the referenced slots, e.g. `{1, 3}`.
pub fn describe_slots(slots: &[SlotIndex]) -> String {
    let mut out = String::from("{");
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{slot}");
    }
    out.push('}');
    out
}
