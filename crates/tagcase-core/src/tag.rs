//! Struct tag parsing.
//!
//! Tags follow the conventional Go layout: space-separated `key:"value"`
//! entries where the value is a double-quoted string. Only the first
//! comma-separated segment of a value is significant here, so options such
//! as `omitempty` are dropped.

use tracing::debug;

/// A struct tag with its literal delimiters removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructTag {
    text: String,
}

impl StructTag {
    /// Builds a tag from literal text as written in source.
    ///
    /// Backtick-delimited literals are trimmed; double-quoted literals are
    /// unquoted. Anything else is taken verbatim.
    #[must_use]
    pub fn from_literal(raw: &str) -> Self {
        let text = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            unquote(raw).unwrap_or_else(|| raw.to_string())
        } else {
            raw.trim_matches('`').to_string()
        };
        Self { text }
    }

    /// Returns the tag text without delimiters.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the full (unquoted) value stored under `key`.
    ///
    /// Scanning stops at the first malformed entry; a key after that point
    /// is reported as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let mut rest = self.text.as_bytes();

        loop {
            while let [b' ', tail @ ..] = rest {
                rest = tail;
            }
            if rest.is_empty() {
                return None;
            }

            let name_len = rest
                .iter()
                .position(|&b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
                .unwrap_or(rest.len());
            if name_len == 0
                || name_len + 1 >= rest.len()
                || rest[name_len] != b':'
                || rest[name_len + 1] != b'"'
            {
                debug!(tag = %self.text, "malformed struct tag entry");
                return None;
            }
            let name = &rest[..name_len];
            rest = &rest[name_len + 1..];

            let mut i = 1;
            while i < rest.len() && rest[i] != b'"' {
                if rest[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= rest.len() {
                debug!(tag = %self.text, "unterminated struct tag value");
                return None;
            }
            let quoted = &rest[..=i];
            rest = &rest[i + 1..];

            if name == key.as_bytes() {
                let quoted = std::str::from_utf8(quoted).ok()?;
                return unquote(quoted);
            }
        }
    }

    /// Returns the first comma-separated segment of the value under `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|value| value.split(',').next().unwrap_or_default().to_string())
    }
}

/// Looks up `key` in a tag literal and returns the first value segment.
#[must_use]
pub fn lookup_tag_value(raw: &str, key: &str) -> Option<String> {
    StructTag::from_literal(raw).lookup(key)
}

/// Decodes a double-quoted Go string literal.
///
/// `\x` and octal escapes are raw bytes, as in Go. The decoded bytes must
/// form valid UTF-8, so `\xc3\xa9` yields `é` and a lone `\xff` fails.
fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        let decoded = match c {
            '"' | '\n' => return None,
            '\\' => match chars.next()? {
                'a' => '\u{7}',
                'b' => '\u{8}',
                'f' => '\u{c}',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                'v' => '\u{b}',
                '\\' => '\\',
                '"' => '"',
                'x' => {
                    out.push(u8::try_from(hex_value(&mut chars, 2)?).ok()?);
                    continue;
                }
                'u' => char::from_u32(hex_value(&mut chars, 4)?)?,
                'U' => char::from_u32(hex_value(&mut chars, 8)?)?,
                d @ '0'..='7' => {
                    let mut value = d.to_digit(8)?;
                    for _ in 0..2 {
                        value = value * 8 + chars.next()?.to_digit(8)?;
                    }
                    out.push(u8::try_from(value).ok()?);
                    continue;
                }
                _ => return None,
            },
            other => other,
        };
        let mut buf = [0u8; 4];
        out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
    }

    String::from_utf8(out).ok()
}

fn hex_value(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
