// Table-driven transliteration.
//
// Text is split into words (runs of alphanumerics and `_`); everything
// between words is copied through. Within a word each letter is looked up
// in order of precedence:
//
//   1. previous-letter rule  (`prev + curr`, prev empty at word start)
//   2. next-letter rule      (`curr + next`, next empty at word end)
//   3. letter rule
//
// Before that, a word longer than two letters whose last two letters have an
// ending rule is split: the stem goes through the letter rules on its own and
// the ending is replaced as a unit.

use fio2id_core::character::{capitalize, simple_lower};
use hashbrown::HashMap;

use crate::tables::{COMMON_LETTERS, SchemeTable, table};
use crate::{SchemeId, Transliterate};

/// Length of an ending rule, in characters.
const ENDING_LEN: usize = 2;

/// A compiled romanization scheme.
pub struct Schema {
    id: SchemeId,
    letters: HashMap<char, &'static str>,
    prev: HashMap<(Option<char>, char), &'static str>,
    next: HashMap<(char, Option<char>), &'static str>,
    endings: HashMap<[char; ENDING_LEN], &'static str>,
}

impl Schema {
    /// Compile the built-in table for `id`.
    pub fn for_id(id: SchemeId) -> Self {
        Self::compile(id, table(id))
    }

    /// Compile an arbitrary rule table under the identity `id`.
    pub fn compile(id: SchemeId, table: &SchemeTable) -> Self {
        let letters = COMMON_LETTERS
            .iter()
            .chain(table.letters)
            .copied()
            .collect();

        let mut prev = HashMap::new();
        for &(key, value) in table.prev.iter().flat_map(|group| group.iter()) {
            if let Some((first, second)) = split_key(key) {
                match second {
                    Some(curr) => prev.insert((Some(first), curr), value),
                    None => prev.insert((None, first), value),
                };
            }
        }

        let mut next = HashMap::new();
        for &(key, value) in table.next.iter().flat_map(|group| group.iter()) {
            if let Some((curr, following)) = split_key(key) {
                next.insert((curr, following), value);
            }
        }

        let mut endings = HashMap::new();
        for &(key, value) in table.endings {
            if let Some((a, Some(b))) = split_key(key) {
                endings.insert([a, b], value);
            }
        }

        Self {
            id,
            letters,
            prev,
            next,
            endings,
        }
    }

    pub fn id(&self) -> SchemeId {
        self.id
    }

    fn translate_word(&self, word: &[char], out: &mut String) {
        if word.len() > ENDING_LEN {
            let (stem, ending) = word.split_at(word.len() - ENDING_LEN);
            if let Some(rendered) = self.translate_ending(ending) {
                self.translate_letters(stem, out);
                out.push_str(&rendered);
                return;
            }
        }
        self.translate_letters(word, out);
    }

    fn translate_ending(&self, ending: &[char]) -> Option<String> {
        let key = [simple_lower(ending[0]), simple_lower(ending[1])];
        let value = self.endings.get(&key)?;
        if ending.iter().all(|c| c.is_uppercase()) {
            Some(value.to_uppercase())
        } else {
            Some((*value).to_string())
        }
    }

    fn translate_letters(&self, word: &[char], out: &mut String) {
        let all_caps = word.len() > 1 && is_all_caps(word);
        for (i, &curr) in word.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| word[p]);
            let next = word.get(i + 1).copied();
            match self.translate_letter(prev, curr, next) {
                Some(latin) if all_caps => out.push_str(&latin.to_uppercase()),
                Some(latin) if curr.is_uppercase() => out.push_str(&capitalize(latin)),
                Some(latin) => out.push_str(latin),
                None => out.push(curr),
            }
        }
    }

    fn translate_letter(
        &self,
        prev: Option<char>,
        curr: char,
        next: Option<char>,
    ) -> Option<&'static str> {
        let curr = simple_lower(curr);
        self.prev
            .get(&(prev.map(simple_lower), curr))
            .or_else(|| self.next.get(&(curr, next.map(simple_lower))))
            .or_else(|| self.letters.get(&curr))
            .copied()
    }
}

impl Transliterate for Schema {
    fn name(&self) -> &str {
        self.id.name()
    }

    fn translate(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len() * 2);
        let mut start = 0;
        while start < chars.len() {
            let in_word = is_word_char(chars[start]);
            let end = chars[start..]
                .iter()
                .position(|&c| is_word_char(c) != in_word)
                .map_or(chars.len(), |n| start + n);
            let run = &chars[start..end];
            if in_word {
                self.translate_word(run, &mut out);
            } else {
                out.extend(run);
            }
            start = end;
        }
        out
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_all_caps(word: &[char]) -> bool {
    word.iter().any(|c| c.is_uppercase()) && !word.iter().any(|c| c.is_lowercase())
}

/// Split a one- or two-letter rule key into its letters.
fn split_key(key: &str) -> Option<(char, Option<char>)> {
    let mut chars = key.chars();
    let first = chars.next()?;
    let second = chars.next();
    if chars.next().is_some() {
        return None;
    }
    Some((first, second))
}
