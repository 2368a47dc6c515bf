use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no JSON object found in text")]
    NoObject,

    #[error("embedded JSON is invalid: {0}")]
    Invalid(String),
}

/// Parses the JSON object embedded in free-form model output.
///
/// Takes the substring from the first `{` to the last `}` (inclusive) and
/// parses only that. Prose before and after the object is ignored. Text
/// without braces, or whose last `}` comes before its first `{`, yields
/// [`ExtractError::NoObject`].
pub fn extract_first_json_object(text: &str) -> Result<Value, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoObject)?;
    let end = text.rfind('}').ok_or(ExtractError::NoObject)?;
    if end < start {
        return Err(ExtractError::NoObject);
    }

    // both delimiters are ASCII, so the byte range is on char boundaries
    serde_json::from_str(&text[start..=end]).map_err(|e| ExtractError::Invalid(e.to_string()))
}
