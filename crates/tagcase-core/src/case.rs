//! Naming convention conversions.
//!
//! Every convention is a pure `fn(&str) -> String`. Input is first split into
//! words: `_`, `-`, `.` and whitespace separate words, a lowercase letter or
//! digit followed by an uppercase letter starts a new word, and in a run of
//! uppercase letters followed by a lowercase one the last uppercase letter
//! starts the next word (`HTTPServer` -> `HTTP`, `Server`). Digits stay in
//! the word they follow.
//!
//! The `go*` conventions additionally keep common initialisms (`ID`, `URL`,
//! `HTTP`, ...) fully upper-cased.
//!
//! Rendering can glue words the splitter later reads as one (`pos_x_y` ->
//! `posXY`, which splits as `pos`, `XY`), so every word-based conversion is
//! re-applied until its output no longer changes. The result is always a
//! fixed point of its own converter: `posXy`, not `posXY`.

use std::fmt;
use std::str::FromStr;

/// A pure case conversion.
pub type Converter = fn(&str) -> String;

/// Errors raised when resolving a convention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// The identifier does not name a known convention.
    #[error("unsupported case: {0}")]
    Unsupported(String),
}

/// A naming convention a tag value can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Convention {
    /// `lowerCamelCase`
    Camel,
    /// `UpperCamelCase`
    Pascal,
    /// `kebab-case`
    Kebab,
    /// `snake_case`
    Snake,
    /// `lowerCamelCase` with Go initialisms (`userID`)
    GoCamel,
    /// `UpperCamelCase` with Go initialisms (`UserID`)
    GoPascal,
    /// `kebab-case` with Go initialisms (`user-ID`)
    GoKebab,
    /// `snake_case` with Go initialisms (`user_ID`)
    GoSnake,
    /// `UPPERCASE`
    Upper,
    /// `lowercase`
    Lower,
}

impl Convention {
    /// All conventions, in documentation order.
    pub const ALL: [Self; 10] = [
        Self::Camel,
        Self::Pascal,
        Self::Kebab,
        Self::Snake,
        Self::GoCamel,
        Self::GoPascal,
        Self::GoKebab,
        Self::GoSnake,
        Self::Upper,
        Self::Lower,
    ];

    /// Returns the configuration identifier of this convention.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Kebab => "kebab",
            Self::Snake => "snake",
            Self::GoCamel => "goCamel",
            Self::GoPascal => "goPascal",
            Self::GoKebab => "goKebab",
            Self::GoSnake => "goSnake",
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    /// Returns the conversion function for this convention.
    #[must_use]
    pub fn converter(self) -> Converter {
        match self {
            Self::Camel => to_camel,
            Self::Pascal => to_pascal,
            Self::Kebab => to_kebab,
            Self::Snake => to_snake,
            Self::GoCamel => to_go_camel,
            Self::GoPascal => to_go_pascal,
            Self::GoKebab => to_go_kebab,
            Self::GoSnake => to_go_snake,
            Self::Upper => to_upper,
            Self::Lower => to_lower,
        }
    }

    /// Converts `input` to this convention.
    #[must_use]
    pub fn convert(self, input: &str) -> String {
        (self.converter())(input)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Convention {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CaseError::Unsupported(s.to_string()))
    }
}

/// Resolves a convention identifier to its converter.
///
/// # Errors
///
/// Returns [`CaseError::Unsupported`] for unknown identifiers.
pub fn converter_for(name: &str) -> Result<Converter, CaseError> {
    name.parse::<Convention>().map(Convention::converter)
}

/// Initialisms kept upper-case by the `go*` conventions.
const INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

fn is_initialism(word: &str) -> bool {
    let upper = word.to_uppercase();
    INITIALISMS.contains(&upper.as_str())
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '_' | '-' | '.') || c.is_whitespace()
}

fn split_words(input: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if is_delimiter(c) {
            if let Some(s) = start.take() {
                words.push(&input[s..offset]);
            }
            continue;
        }

        let Some(s) = start else {
            start = Some(offset);
            continue;
        };

        let prev = chars[i - 1].1;
        if c.is_uppercase() && !prev.is_uppercase() {
            words.push(&input[s..offset]);
            start = Some(offset);
        } else if c.is_lowercase() && prev.is_uppercase() && i >= 2 {
            let (prev_offset, _) = chars[i - 1];
            let before = chars[i - 2].1;
            if before.is_uppercase() && prev_offset > s {
                words.push(&input[s..prev_offset]);
                start = Some(prev_offset);
            }
        }
    }

    if let Some(s) = start {
        words.push(&input[s..]);
    }
    words
}

/// Splits for the `go*` conventions: an all-caps word made of several
/// initialisms (`XMLHTTP`) becomes one word per initialism.
fn go_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for word in split_words(input) {
        match segment_initialisms(word) {
            Some(parts) => words.extend(parts),
            None => words.push(word),
        }
    }
    words
}

fn segment_initialisms(word: &str) -> Option<Vec<&str>> {
    if word.is_empty() {
        return Some(Vec::new());
    }
    if word.chars().any(char::is_lowercase) {
        return None;
    }
    for len in (1..=word.len()).rev() {
        if !word.is_char_boundary(len) {
            continue;
        }
        let (head, tail) = word.split_at(len);
        if INITIALISMS.contains(&head) {
            if let Some(mut parts) = segment_initialisms(tail) {
                parts.insert(0, head);
                return Some(parts);
            }
        }
    }
    None
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Upper bound on re-rendering passes. A pass that changes the output
/// always merges words, so inputs settle well before this.
const MAX_PASSES: usize = 8;

fn settle(input: &str, render: impl Fn(&str) -> String) -> String {
    let mut current = render(input);
    for _ in 0..MAX_PASSES {
        let next = render(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn render_lower(input: &str, sep: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

fn render_go(input: &str, sep: &str) -> String {
    go_words(input)
        .iter()
        .map(|w| {
            if is_initialism(w) {
                w.to_uppercase()
            } else {
                w.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(sep)
}

fn render_camel(input: &str, lower_first: bool, initialisms: bool) -> String {
    let words = if initialisms {
        go_words(input)
    } else {
        split_words(input)
    };
    let mut out = String::with_capacity(input.len());
    for (i, word) in words.into_iter().enumerate() {
        if i == 0 && lower_first {
            out.push_str(&word.to_lowercase());
        } else if initialisms && is_initialism(word) {
            out.push_str(&word.to_uppercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

fn join_lower(input: &str, sep: &str) -> String {
    settle(input, |s| render_lower(s, sep))
}

fn join_go(input: &str, sep: &str) -> String {
    settle(input, |s| render_go(s, sep))
}

fn join_camel(input: &str, lower_first: bool, initialisms: bool) -> String {
    settle(input, |s| render_camel(s, lower_first, initialisms))
}

/// Converts to `lowerCamelCase`.
#[must_use]
pub fn to_camel(input: &str) -> String {
    join_camel(input, true, false)
}

/// Converts to `UpperCamelCase`.
#[must_use]
pub fn to_pascal(input: &str) -> String {
    join_camel(input, false, false)
}

/// Converts to `kebab-case`.
#[must_use]
pub fn to_kebab(input: &str) -> String {
    join_lower(input, "-")
}

/// Converts to `snake_case`.
#[must_use]
pub fn to_snake(input: &str) -> String {
    join_lower(input, "_")
}

/// Converts to `lowerCamelCase`, keeping initialisms upper-case after the first word.
#[must_use]
pub fn to_go_camel(input: &str) -> String {
    join_camel(input, true, true)
}

/// Converts to `UpperCamelCase`, keeping initialisms upper-case.
#[must_use]
pub fn to_go_pascal(input: &str) -> String {
    join_camel(input, false, true)
}

/// Converts to `kebab-case`, keeping initialisms upper-case.
#[must_use]
pub fn to_go_kebab(input: &str) -> String {
    join_go(input, "-")
}

/// Converts to `snake_case`, keeping initialisms upper-case.
#[must_use]
pub fn to_go_snake(input: &str) -> String {
    join_go(input, "_")
}

/// Converts to upper case.
#[must_use]
pub fn to_upper(input: &str) -> String {
    input.to_uppercase()
}

/// Converts to lower case.
#[must_use]
pub fn to_lower(input: &str) -> String {
    input.to_lowercase()
}
