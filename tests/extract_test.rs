use moodtune::recommend::{ExtractError, extract_first_json_object};
use serde_json::json;

#[test]
fn test_extracts_object_surrounded_by_prose() {
    let text = r#"Sure! {"mood":"happy","songs":[{"title":"A","artist":"B","reason":"C"}]}  Hope that helps."#;
    let value = extract_first_json_object(text).unwrap();
    assert_eq!(value["mood"], json!("happy"));
    assert_eq!(value["songs"][0]["title"], json!("A"));
}

#[test]
fn test_bare_object_is_parsed() {
    let value = extract_first_json_object(r#"{"mood":"sad","songs":[]}"#).unwrap();
    assert_eq!(value, json!({"mood": "sad", "songs": []}));
}

#[test]
fn test_nested_braces_span_first_to_last() {
    let text = "prefix {\"a\": {\"b\": {\"c\": 1}}} suffix";
    assert_eq!(
        extract_first_json_object(text).unwrap(),
        json!({"a": {"b": {"c": 1}}})
    );
}

#[test]
fn test_text_without_braces_has_no_object() {
    assert_eq!(
        extract_first_json_object("no json here"),
        Err(ExtractError::NoObject)
    );
    assert_eq!(extract_first_json_object(""), Err(ExtractError::NoObject));
    assert_eq!(
        extract_first_json_object("only { opening"),
        Err(ExtractError::NoObject)
    );
    assert_eq!(
        extract_first_json_object("only } closing"),
        Err(ExtractError::NoObject)
    );
}

#[test]
fn test_two_objects_do_not_parse_as_one() {
    // first `{` to last `}` covers both objects, which is not valid JSON
    let result = extract_first_json_object(r#"{"a":1} and {"b":2}"#);
    assert!(matches!(result, Err(ExtractError::Invalid(_))));
}

#[test]
fn test_invalid_json_between_braces() {
    let result = extract_first_json_object("{mood: happy}");
    assert!(matches!(result, Err(ExtractError::Invalid(_))));
}
