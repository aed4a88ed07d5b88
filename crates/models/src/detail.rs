//! Book detail codec: a JSON object kept as text in `books.book_detail`.

use serde_json::{Map, Value};

use crate::errors::ModelError;

/// Free-form detail attached to a book. Key order is preserved.
pub type Detail = Map<String, Value>;

pub fn encode(detail: &Detail) -> Result<String, ModelError> {
    serde_json::to_string(detail)
        .map_err(|e| ModelError::Validation(format!("book detail cannot be serialized: {e}")))
}

/// Stored text must be a well-formed JSON object; anything else fails the row.
pub fn decode(raw: &str) -> Result<Detail, ModelError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ModelError::DetailDecode(format!(
            "expected a JSON object, found {}",
            kind(&other)
        ))),
        Err(e) => Err(ModelError::DetailDecode(e.to_string())),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Detail {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn nested_detail_survives_storage() {
        let detail = obj(json!({
            "publishing year": 2015,
            "genre": "Fiction",
            "editions": [{"isbn": "978-0735211292", "pages": 320}],
            "translated": null,
            "rating": 4.5
        }));
        let text = encode(&detail).unwrap();
        assert_eq!(decode(&text).unwrap(), detail);
    }

    #[test]
    fn key_order_is_kept() {
        let detail = obj(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<_> = decode(&encode(&detail).unwrap()).unwrap().keys().cloned().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn finite_floats_round_trip_exactly() {
        // xorshift over raw bit patterns covers subnormals and extreme exponents
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut checked = 0;
        while checked < 20_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let f = f64::from_bits(state);
            if !f.is_finite() {
                continue;
            }
            let detail = obj(json!({ "v": f }));
            let back = decode(&encode(&detail).unwrap()).unwrap();
            assert_eq!(back["v"].as_f64(), Some(f), "bits {:#018x}", state);
            checked += 1;
        }
    }

    #[test]
    fn malformed_text_is_a_decode_error() {
        let err = decode("{\"genre\": ").unwrap_err();
        assert!(matches!(err, ModelError::DetailDecode(_)));
    }

    #[test]
    fn non_object_json_is_a_decode_error() {
        let err = decode("[1, 2, 3]").unwrap_err();
        match err {
            ModelError::DetailDecode(msg) => assert!(msg.contains("array")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
