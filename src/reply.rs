//! Recovery of the JSON object embedded in a free-text model reply.

use serde_json::{Map, Value};

use crate::error::PipelineError;

/// Locate the first `{` to last `}` span of `raw` and decode it as a JSON object.
///
/// Models routinely wrap their JSON in prose or markdown fences, so everything
/// outside the outermost braces is ignored.
pub fn decode_object(raw: &str) -> Result<Map<String, Value>, PipelineError> {
    let span = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => return Err(malformed("no JSON object found in reply", raw)),
    };

    match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(malformed("reply JSON is not an object", raw)),
        Err(e) => Err(malformed(&format!("invalid JSON syntax: {}", e), raw)),
    }
}

fn malformed(reason: &str, raw: &str) -> PipelineError {
    PipelineError::MalformedDelegateResponse {
        reason: reason.to_string(),
        raw_reply: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_wrapped_in_prose() {
        let raw = "Sure! Here is the data:\n```json\n{\"victim_name\": \"Ram\"}\n```\nHope this helps.";
        let object = decode_object(raw).unwrap();
        assert_eq!(object.get("victim_name"), Some(&Value::from("Ram")));
    }

    #[test]
    fn test_nested_braces_use_outermost_span() {
        let object = decode_object(r#"{"a": {"b": 1}} trailing"#).unwrap();
        assert!(object.get("a").unwrap().is_object());
    }

    #[test]
    fn test_prose_without_braces() {
        let err = decode_object("I could not find any details.").unwrap_err();
        assert_eq!(err.status(), "format_error");
        assert_eq!(err.raw_reply(), Some("I could not find any details."));
    }

    #[test]
    fn test_invalid_json_keeps_raw_reply() {
        let raw = "{victim_name: Ram}";
        match decode_object(raw).unwrap_err() {
            PipelineError::MalformedDelegateResponse { reason, raw_reply } => {
                assert!(reason.starts_with("invalid JSON syntax"));
                assert_eq!(raw_reply, raw);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_reversed_braces() {
        assert!(decode_object("} nothing {").is_err());
    }
}
