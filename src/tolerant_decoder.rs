use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::assistant_error::AssistantError;

static TRAILING_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("trailing comma pattern"));

static MISSING_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([}\]])\s*([{\[])").expect("missing separator pattern"));

/// Re-trims to the outermost bracket span. The extractor already isolated
/// one, but replies occasionally keep stray text inside the handed-off
/// slice, so the span search is applied again before parsing.
pub fn trim_to_span(text: &str) -> &str {
    let trimmed = text.trim();
    let start = match (trimmed.find('{'), trimmed.find('[')) {
        (Some(obj), Some(arr)) => obj.min(arr),
        (Some(obj), None) => obj,
        (None, Some(arr)) => arr,
        (None, None) => return trimmed,
    };
    let close = if trimmed.as_bytes()[start] == b'{' { '}' } else { ']' };
    match trimmed.rfind(close) {
        Some(end) if end > start => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Curly and typographic quotation marks become plain straight quotes.
pub fn normalize_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' => '\'',
            other => other,
        })
        .collect()
}

/// Removes commas sitting immediately before a closing brace or bracket.
/// Runs to a fixpoint so stacked trailing commas cannot survive one call.
pub fn strip_trailing_commas(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = TRAILING_COMMA_RE.replace_all(&current, "$1").into_owned();
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Inserts the comma the model forgot between adjacent object or array
/// literals: a closing brace/bracket directly followed by an opening one.
pub fn insert_missing_separators(text: &str) -> String {
    MISSING_SEPARATOR_RE.replace_all(text, "$1,$2").into_owned()
}

/// Strips zero-width characters and byte-order marks.
pub fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\u{FEFF}' | '\u{200B}' | '\u{200C}' | '\u{200D}'))
        .collect()
}

/// The full repair sequence, in its fixed order. Applying it twice yields
/// the same result as applying it once.
pub fn repair(text: &str) -> String {
    let spanned = trim_to_span(text);
    let straight_quoted = normalize_quotes(spanned);
    let without_trailing = strip_trailing_commas(&straight_quoted);
    let separated = insert_missing_separators(&without_trailing);
    strip_control_chars(&separated)
}

pub fn decode(text: &str) -> Result<Value, AssistantError> {
    decode_with_recovery(text, None)
}

/// Repairs and strictly parses `text`. When strict parsing fails and a
/// recovery field was supplied, a second narrower attempt looks for that
/// field's array sub-span and rebuilds a minimal wrapping object around it.
/// Any other malformed shape is a hard parse failure.
pub fn decode_with_recovery(
    text: &str,
    recovery_field: Option<&str>,
) -> Result<Value, AssistantError> {
    let repaired = repair(text);
    match serde_json::from_str::<Value>(&repaired) {
        Ok(value) => Ok(value),
        Err(parse_err) => {
            if let Some(field) = recovery_field {
                if let Some(fragment) = find_field_array(&repaired, field) {
                    let rebuilt = format!("{{\"{}\":{}}}", field, fragment);
                    if let Ok(value) = serde_json::from_str::<Value>(&rebuilt) {
                        eprintln!(
                            "[DEBUG] Recovered \"{}\" array from malformed reply.",
                            field
                        );
                        return Ok(value);
                    }
                }
            }
            Err(AssistantError::parse(
                format!("invalid JSON after repairs: {}", parse_err),
                &repaired,
            ))
        }
    }
}

/// Finds `"<field>": [...]` in `text` and returns the bracket-balanced
/// array slice, honoring string literals and escapes.
fn find_field_array<'a>(text: &'a str, field: &str) -> Option<&'a str> {
    let marker = Regex::new(&format!(r#""{}"\s*:\s*\["#, regex::escape(field))).ok()?;
    let found = marker.find(text)?;
    let open = found.end() - 1;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, &byte) in text.as_bytes().iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 && byte == b']' {
                    return Some(&text[open..=idx]);
                }
            }
            _ => {}
        }
    }
    None
}
