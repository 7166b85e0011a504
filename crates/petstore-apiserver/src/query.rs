//! Query-string decoding for bracket-nested parameters
//!
//! qs-style clients encode nested objects as `a[b][c]=v` and arrays as
//! `a[0]=v` or `a[]=v`. Plain form decoding is flat and cannot express
//! either, so routes that accept these parameters read the raw query
//! string and decode it here into a `serde_json` tree.

use serde_json::{Map, Value};
use thiserror::Error;

/// Deepest bracket nesting the decoder will build
pub const MAX_DEPTH: usize = 32;

/// Errors from the bracket-syntax decoder
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A parameter was given both a value and nested fields
    #[error("Query parameter {0} mixes values and nested fields")]
    Conflict(String),

    /// An array index skips ahead of the array length
    #[error("Query parameter {0} has a non-contiguous array index")]
    BadArrayIndex(String),

    /// Bracket groups nested beyond MAX_DEPTH
    #[error("Query parameter {0} nests deeper than {max} levels", max = MAX_DEPTH)]
    TooDeep(String),
}

/// One bracket group of a parameter key
#[derive(Debug)]
enum Segment<'a> {
    /// `[name]` - an object field
    Key(&'a str),
    /// `[0]` - an explicit array position
    Index(usize),
    /// `[]` - append to an array
    Push,
}

impl<'a> Segment<'a> {
    fn classify(content: &'a str) -> Self {
        if content.is_empty() {
            return Segment::Push;
        }
        if content.bytes().all(|byte| byte.is_ascii_digit()) {
            if let Ok(index) = content.parse() {
                return Segment::Index(index);
            }
        }
        Segment::Key(content)
    }
}

/// Decode a raw query string into a JSON object
///
/// Pairs are split on `&` and `=`, percent-decoded, then merged into
/// one tree keyed by parameter name. A repeated scalar key collects its
/// values into an array, matching what qs-style decoders produce.
pub fn parse_query(raw: &str) -> Result<Map<String, Value>, QueryError> {
    let mut root = Map::new();

    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }

        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        let key = percent_decode(key);
        let value = percent_decode(value);
        if key.is_empty() {
            continue;
        }

        match split_key(&key) {
            Some((base, segments)) => {
                if segments.len() > MAX_DEPTH {
                    return Err(QueryError::TooDeep(key.clone()));
                }
                let slot = root.entry(base.to_string()).or_insert(Value::Null);
                set_path(slot, &segments, &key, value)?;
            }
            None => {
                let slot = root.entry(key.clone()).or_insert(Value::Null);
                set_leaf(slot, &key, value)?;
            }
        }
    }

    Ok(root)
}

/// Collect a parameter's string items
///
/// An array yields its string elements, a scalar yields its
/// comma-separated pieces with empty pieces dropped, and anything else
/// yields nothing.
pub fn string_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::to_string)
            .collect(),
        Value::String(text) => text
            .split(',')
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Split a decoded key into its base name and bracket segments
///
/// `a[b][0][]` becomes `("a", [Key("b"), Index(0), Push])`. Returns
/// `None` for keys that do not follow the bracket convention (no
/// brackets, an empty base, unbalanced brackets, or text between
/// groups); such keys are stored verbatim as flat parameters.
fn split_key(key: &str) -> Option<(&str, Vec<Segment<'_>>)> {
    let open = key.find('[')?;
    let base = &key[..open];
    if base.is_empty() {
        return None;
    }

    let mut segments = Vec::new();
    let mut rest = &key[open..];
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        segments.push(Segment::classify(&inner[..close]));
        rest = &inner[close + 1..];
    }

    Some((base, segments))
}

/// Walk `path` below `slot`, materializing containers, and set the leaf
fn set_path(
    slot: &mut Value,
    path: &[Segment<'_>],
    key: &str,
    value: String,
) -> Result<(), QueryError> {
    let Some((head, rest)) = path.split_first() else {
        return set_leaf(slot, key, value);
    };

    match head {
        Segment::Key(name) => {
            if slot.is_null() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(fields) = slot else {
                return Err(QueryError::Conflict(key.to_string()));
            };
            let child = fields.entry(name.to_string()).or_insert(Value::Null);
            set_path(child, rest, key, value)
        }
        Segment::Index(index) => {
            if slot.is_null() {
                *slot = Value::Array(Vec::new());
            }
            let Value::Array(items) = slot else {
                return Err(QueryError::Conflict(key.to_string()));
            };
            if *index < items.len() {
                set_path(&mut items[*index], rest, key, value)
            } else if *index == items.len() {
                items.push(Value::Null);
                set_path(&mut items[*index], rest, key, value)
            } else {
                Err(QueryError::BadArrayIndex(key.to_string()))
            }
        }
        Segment::Push => {
            if slot.is_null() {
                *slot = Value::Array(Vec::new());
            }
            let Value::Array(items) = slot else {
                return Err(QueryError::Conflict(key.to_string()));
            };
            let end = items.len();
            items.push(Value::Null);
            set_path(&mut items[end], rest, key, value)
        }
    }
}

/// Store a scalar at `slot`, collecting repeats into an array
fn set_leaf(slot: &mut Value, key: &str, value: String) -> Result<(), QueryError> {
    match slot {
        Value::Null => {
            *slot = Value::String(value);
            Ok(())
        }
        Value::String(_) => {
            let first = slot.take();
            *slot = Value::Array(vec![first, Value::String(value)]);
            Ok(())
        }
        Value::Array(items) => {
            items.push(Value::String(value));
            Ok(())
        }
        _ => Err(QueryError::Conflict(key.to_string())),
    }
}

/// Decode `%XX` escapes and `+` as space; invalid escapes pass through
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi * 16 + lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed(raw: &str) -> Value {
        Value::Object(parse_query(raw).unwrap())
    }

    #[test]
    fn test_flat_pairs() {
        assert_eq!(parsed("name=cat&tag=cute"), json!({"name": "cat", "tag": "cute"}));
        assert_eq!(parsed("flag"), json!({"flag": ""}));
        assert_eq!(parsed(""), json!({}));
        assert_eq!(parsed("&&a=1"), json!({"a": "1"}));
    }

    #[test]
    fn test_repeated_key_collects_values() {
        assert_eq!(parsed("tags=cute&tags=gentle"), json!({"tags": ["cute", "gentle"]}));
        assert_eq!(
            parsed("tags=a&tags=b&tags=c"),
            json!({"tags": ["a", "b", "c"]})
        );
    }

    #[test]
    fn test_array_syntaxes() {
        assert_eq!(parsed("tags[]=a&tags[]=b"), json!({"tags": ["a", "b"]}));
        assert_eq!(parsed("tags[0]=a&tags[1]=b"), json!({"tags": ["a", "b"]}));
        assert_eq!(parsed("tags[0]=only"), json!({"tags": ["only"]}));
    }

    #[test]
    fn test_nested_objects() {
        assert_eq!(
            parsed("russianDoll[name]=name"),
            json!({"russianDoll": {"name": "name"}})
        );
        assert_eq!(
            parsed("russianDoll[name]=name&russianDoll[nestedDoll][name]=name1"),
            json!({"russianDoll": {"name": "name", "nestedDoll": {"name": "name1"}}})
        );
    }

    #[test]
    fn test_objects_inside_arrays() {
        assert_eq!(
            parsed("pets[0][name]=cat&pets[1][name]=dog"),
            json!({"pets": [{"name": "cat"}, {"name": "dog"}]})
        );
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(parsed("a%5Bb%5D=1"), json!({"a": {"b": "1"}}));
        assert_eq!(parsed("q=hello+world%21"), json!({"q": "hello world!"}));
    }

    #[test]
    fn test_invalid_escapes_pass_through() {
        assert_eq!(parsed("q=100%"), json!({"q": "100%"}));
        assert_eq!(parsed("q=%zz"), json!({"q": "%zz"}));
    }

    #[test]
    fn test_malformed_brackets_fall_back_to_literal_keys() {
        assert_eq!(parsed("a[b=1"), json!({"a[b": "1"}));
        assert_eq!(parsed("[a]=1"), json!({"[a]": "1"}));
        assert_eq!(parsed("a[b]c=1"), json!({"a[b]c": "1"}));
    }

    #[test]
    fn test_scalar_object_conflicts() {
        assert_eq!(
            parse_query("a=1&a[b]=2").unwrap_err(),
            QueryError::Conflict("a[b]".to_string())
        );
        assert_eq!(
            parse_query("a[b]=1&a=2").unwrap_err(),
            QueryError::Conflict("a".to_string())
        );
    }

    #[test]
    fn test_non_contiguous_index_is_rejected() {
        assert_eq!(
            parse_query("tags[2]=x").unwrap_err(),
            QueryError::BadArrayIndex("tags[2]".to_string())
        );
        assert_eq!(
            parse_query("tags[0]=a&tags[5]=b").unwrap_err(),
            QueryError::BadArrayIndex("tags[5]".to_string())
        );
    }

    #[test]
    fn test_nesting_depth_is_capped() {
        let key = format!("a{}=v", "[b]".repeat(MAX_DEPTH + 1));
        assert!(matches!(
            parse_query(&key).unwrap_err(),
            QueryError::TooDeep(_)
        ));

        let key = format!("a{}=v", "[b]".repeat(MAX_DEPTH));
        assert!(parse_query(&key).is_ok());
    }

    #[test]
    fn test_string_items() {
        assert_eq!(string_items(&json!(["a", "b"])), vec!["a", "b"]);
        assert_eq!(string_items(&json!("a,b")), vec!["a", "b"]);
        assert_eq!(string_items(&json!("solo")), vec!["solo"]);
        assert_eq!(string_items(&json!("a,,b")), vec!["a", "b"]);
        assert!(string_items(&json!("")).is_empty());
        assert!(string_items(&json!({"not": "a list"})).is_empty());
    }
}
