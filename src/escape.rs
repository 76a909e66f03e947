//! Escapes accepted in text typed at the prompt.
//!
//! Besides the JSON string escapes, `\xHH` and `\u{H...}` name a code point
//! directly. Anything that does not unescape cleanly is shown as typed.

use std::char;
use std::convert::TryFrom;
use std::str::Chars;

/// Unescapes `input`, or returns `None` if it is not a valid escaped string.
pub fn unescape(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(escaped(&mut chars)?),
            '"' => return None,
            c if (c as u32) < 0x20 => return None,
            c => out.push(c),
        }
    }

    Some(out)
}

/// Unescapes `input`, falling back to the raw text.
pub fn unescape_or_raw(input: &str) -> String {
    unescape(input).unwrap_or_else(|| input.to_string())
}

fn escaped(chars: &mut Chars<'_>) -> Option<char> {
    let c = match chars.next()? {
        '"' => '"',
        '\\' => '\\',
        '/' => '/',
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'x' => char::from_u32(hex(chars, 2)?)?,
        'u' => {
            if chars.as_str().starts_with('{') {
                chars.next();
                braced(chars)?
            } else {
                utf16(chars)?
            }
        }
        _ => return None,
    };
    Some(c)
}

fn braced(chars: &mut Chars<'_>) -> Option<char> {
    let rest = chars.as_str();
    let end = rest.find('}')?;
    let digits = &rest[..end];
    if digits.is_empty() || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let cp = u32::from_str_radix(digits, 16).ok()?;
    *chars = rest[end + 1..].chars();
    char::from_u32(cp)
}

// `\uHHHH`, possibly the high half of a `\uHHHH\uHHHH` surrogate pair.
fn utf16(chars: &mut Chars<'_>) -> Option<char> {
    let first = u16::try_from(hex(chars, 4)?).ok()?;
    if !(0xD800..=0xDBFF).contains(&first) {
        return char::from_u32(u32::from(first));
    }

    let rest = chars.as_str();
    if !rest.starts_with("\\u") {
        return None;
    }
    *chars = rest[2..].chars();
    let second = u16::try_from(hex(chars, 4)?).ok()?;
    char::decode_utf16([first, second].iter().copied()).next()?.ok()
}

fn hex(chars: &mut Chars<'_>, digits: usize) -> Option<u32> {
    let rest = chars.as_str();
    let field = rest.get(..digits)?;
    if !field.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    *chars = rest[digits..].chars();
    u32::from_str_radix(field, 16).ok()
}
