//! Modeline detection.
//!
//! A Camel K modeline is a comment line carrying integration options:
//!
//! ```text
//! // camel-k: dependency=mvn:org.my/app:1.0 trait=service.enabled=false
//! # camel-k: property=file:integration.properties
//! ```
//!
//! Options are whitespace separated `name=value` tokens after the
//! `camel-k:` marker. Columns taken and returned here are UTF-16 code units,
//! the LSP default position encoding.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use ropey::RopeSlice;

static MODELINE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?<leader>//|#)\s*camel-k:").unwrap());

static OPTION_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

/// The option name being typed at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionNamePrefix {
    /// Text typed so far, up to the cursor (may be empty)
    pub partial: String,
    /// Column where the option token starts
    pub start: usize,
    /// Column where the option token ends; may lie after the cursor
    pub end: usize,
}

/// An option name already present in a modeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionNameSpan {
    pub name: String,
    pub range: Range<usize>,
}

/// Byte offset just past the `camel-k:` marker.
fn marker_end(line: &str) -> Option<usize> {
    MODELINE_PATTERN.find(line).map(|marker| marker.end())
}

/// Byte offset of a UTF-16 column, clamped to the end of the line.
fn byte_offset(line: &str, character: usize) -> usize {
    let slice = RopeSlice::from(line);
    let char_idx = slice.utf16_cu_to_char(character.min(slice.len_utf16_cu()));
    slice.char_to_byte(char_idx)
}

fn utf16_column(line: &str, byte: usize) -> usize {
    let slice = RopeSlice::from(line);
    slice.char_to_utf16_cu(slice.byte_to_char(byte))
}

/// Finds the option name being typed at `character`.
///
/// The whole whitespace delimited token around the cursor is considered.
/// Returns `None` when the line is not a modeline, when the cursor sits
/// before the `camel-k:` marker, or when the token already has a `=`.
pub fn option_name_prefix_at(line: &str, character: usize) -> Option<OptionNamePrefix> {
    let cursor = byte_offset(line, character);
    let marker = marker_end(line)?;
    if cursor < marker {
        return None;
    }

    let before = line[marker..cursor].rsplit(char::is_whitespace).next()?;
    let after = line[cursor..].split(char::is_whitespace).next()?;
    if before.contains('=') || after.contains('=') {
        return None;
    }

    let start = cursor - before.len();
    let end = cursor + after.len();
    Some(OptionNamePrefix {
        partial: before.to_string(),
        start: utf16_column(line, start),
        end: utf16_column(line, end),
    })
}

/// Finds the option name the cursor is on.
///
/// The cursor may be anywhere within the name or right after it; positions
/// inside the value part of `name=value` yield `None`.
pub fn option_name_at(line: &str, character: usize) -> Option<OptionNameSpan> {
    let marker = marker_end(line)?;
    let cursor = byte_offset(line, character);
    if cursor < marker {
        return None;
    }

    let options = &line[marker..];
    let token = OPTION_TOKEN
        .find_iter(options)
        .map(|token| (marker + token.start(), token.as_str()))
        .find(|(start, token)| (*start..=start + token.len()).contains(&cursor))?;

    let (start, token) = token;
    let name = token.split('=').next().unwrap_or_default();
    let end = start + name.len();
    if name.is_empty() || cursor > end {
        return None;
    }

    Some(OptionNameSpan {
        name: name.to_string(),
        range: utf16_column(line, start)..utf16_column(line, end),
    })
}
