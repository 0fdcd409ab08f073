//! Loose coercion of environment strings into TOML values.
//!
//! Environment variables carry no type information, so a raw string is read
//! as the right-hand side of a TOML key/value pair. Whatever the `toml` crate
//! accepts as a boolean, integer, float, array or inline table is kept with
//! that type; everything else stays a string. Coercion never fails.
//!
//! Radix-prefixed literals (`0x..`) are the exception: they are addresses and
//! balances here, so they are kept as strings.

use toml::Value;

const PROBE_KEY: &str = "__value";

/// Coerce `raw` into a typed TOML value, falling back to a string.
///
/// ```
/// use foundry_config::coerce_value;
///
/// assert_eq!(coerce_value("true"), toml::Value::Boolean(true));
/// assert_eq!(coerce_value("42"), toml::Value::Integer(42));
/// assert_eq!(coerce_value("hello"), toml::Value::String("hello".into()));
/// ```
pub fn coerce_value(raw: &str) -> Value {
    let candidate = raw.trim();
    if candidate.is_empty() || is_radix_prefixed(candidate) {
        return Value::String(raw.to_string());
    }

    match parse_literal(candidate) {
        Some(value @ (Value::Boolean(_)
        | Value::Integer(_)
        | Value::Float(_)
        | Value::Array(_)
        | Value::Table(_))) => value,
        // A quoted TOML string: keep the unquoted contents.
        Some(Value::String(s)) => Value::String(s),
        // Date-times and anything unparseable stay verbatim.
        _ => Value::String(raw.to_string()),
    }
}

/// `0x`/`0o`/`0b` literals are addresses, balances and hashes in this domain
/// and must keep their textual form.
fn is_radix_prefixed(candidate: &str) -> bool {
    let digits = candidate.strip_prefix(['+', '-']).unwrap_or(candidate);
    ["0x", "0o", "0b", "0X"].iter().any(|p| digits.starts_with(p))
}

/// Parse `candidate` as a single TOML value, rejecting input that smuggles in
/// additional keys or tables.
fn parse_literal(candidate: &str) -> Option<Value> {
    let document = format!("{PROBE_KEY} = {candidate}");
    let mut table: toml::Table = toml::from_str(&document).ok()?;
    if table.len() != 1 {
        return None;
    }
    table.remove(PROBE_KEY)
}
