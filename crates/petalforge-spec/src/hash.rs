//! Canonical hashing of parameter sets.
//!
//! The hash identifies a logo independent of key order or whitespace:
//! ```text
//! params_hash = hex(BLAKE3(canonical_json(params)))
//! ```
//! Two exports produced from sets with equal hashes are byte-identical.

use crate::params::ParameterSet;

/// Computes the canonical BLAKE3 hash of a parameter set.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use petalforge_spec::{ParameterSet, hash::canonical_params_hash};
///
/// let hash = canonical_params_hash(&ParameterSet::default()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_params_hash(params: &ParameterSet) -> Result<String, serde_json::Error> {
    let value = params.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Short form of a hash for file names and terminal output.
pub fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(12)]
}

/// Produces a deterministic JSON string: sorted object keys, no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => format_number(n),
        serde_json::Value::String(s) => format_string(s),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{}:{}", format_string(k), canonicalize_json(v)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
            format!("{}", f)
        }
        _ => "null".to_string(),
    }
}

fn format_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_hash_is_stable() {
        let params = ParameterSet::default();
        let a = canonical_params_hash(&params).unwrap();
        let b = canonical_params_hash(&params).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_hash_changes_with_any_field() {
        let base = canonical_params_hash(&ParameterSet::default()).unwrap();
        let waved = canonical_params_hash(&ParameterSet {
            waviness: 0.51,
            ..Default::default()
        })
        .unwrap();
        let recolored = canonical_params_hash(&ParameterSet {
            line_color: Color::rgb(0, 0, 0),
            ..Default::default()
        })
        .unwrap();
        assert_ne!(base, waved);
        assert_ne!(base, recolored);
        assert_ne!(waved, recolored);
    }

    #[test]
    fn test_hash_ignores_key_order() {
        let a: serde_json::Value = serde_json::from_str(r#"{"b": 1, "a": [1.5, "x"]}"#).unwrap();
        let b: serde_json::Value = serde_json::from_str(r#"{"a": [1.5, "x"], "b": 1}"#).unwrap();
        assert_eq!(canonical_value_hash(&a), canonical_value_hash(&b));
        assert_eq!(canonicalize_json(&a), r#"{"a":[1.5,"x"],"b":1}"#);
    }

    #[test]
    fn test_integer_like_floats_are_normalized() {
        let v: serde_json::Value = serde_json::from_str(r#"{"w": 2.0, "z": 0.0}"#).unwrap();
        assert_eq!(canonicalize_json(&v), r#"{"w":2,"z":0}"#);
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("0123456789abcdef"), "0123456789ab");
        assert_eq!(short_hash("abc"), "abc");
    }
}
