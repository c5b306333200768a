//! Inline markup substitution passes.
//!
//! Four rewrites applied in a fixed order, each scanning the output of the
//! previous pass. Every pass matches the shortest possible span per
//! delimiter pair, left to right, non-overlapping.

/// Rewrite a span of block text, resolving all inline markup.
///
/// Applied to heading text, each list-item text, and the fully assembled
/// paragraph text. Pass order matters: content produced by an earlier pass
/// can be consumed by a later one.
pub fn rewrite_inline(input: &str) -> String {
    let bolded = rewrite_spans(input, "**", "**", |inner| format!("<b>{inner}</b>"));
    let emphasized = rewrite_spans(&bolded, "__", "__", |inner| format!("<em>{inner}</em>"));
    let hashed = rewrite_spans(&emphasized, "[[", "]]", content_digest);
    rewrite_spans(&hashed, "((", "))", |inner| {
        inner.chars().filter(|c| *c != 'c').collect()
    })
}

/// Lowercase hexadecimal xxHash3 128-bit digest of the text's bytes.
///
/// Content-derived substitution for `[[...]]` spans: identical inner text
/// always yields an identical digest string.
pub fn content_digest(text: &str) -> String {
    format!("{:032x}", twox_hash::xxh3::hash128(text.as_bytes()))
}

/// Replace every non-greedy `open ... close` span via `replace`.
///
/// An opening delimiter with no matching closer leaves the remainder of the
/// string untouched.
fn rewrite_spans(input: &str, open: &str, close: &str, replace: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&replace(&after_open[..end]));
        rest = &after_open[end + close.len()..];
    }
    out.push_str(rest);
    out
}
