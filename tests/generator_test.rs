mod common;

use std::sync::Arc;

use common::{FIVE_TITLES, FakeModel, model_reply};
use moodtune::recommend::{
    GenerateError, RETRY_MESSAGE, RecommendationGenerator, SONG_COUNT, build_prompt,
    extract_first_json_object, parse_recommendation,
};
use serde_json::json;

fn generator(model: &Arc<FakeModel>) -> RecommendationGenerator {
    RecommendationGenerator::new(model.clone())
}

#[tokio::test]
async fn test_blank_mood_is_rejected_without_calling_model() {
    let model = Arc::new(FakeModel::replying(model_reply("happy", &FIVE_TITLES)));
    let generator = generator(&model);

    for input in ["", "   ", "\n\t "] {
        let result = generator.generate(input).await;
        assert!(matches!(result, Err(GenerateError::Validation)));
    }

    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_generate_parses_reply_wrapped_in_prose() {
    let model = Arc::new(FakeModel::replying(model_reply("hopeful", &FIVE_TITLES)));
    let recommendation = generator(&model)
        .generate("I'm tired but hopeful")
        .await
        .unwrap();

    assert_eq!(recommendation.detected_mood, "hopeful");
    assert_eq!(recommendation.songs.len(), SONG_COUNT);

    // model order is kept
    let titles: Vec<&str> = recommendation
        .songs
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, FIVE_TITLES);
    assert_eq!(recommendation.songs[0].artist, "Alpha Band");
    assert_eq!(recommendation.songs[0].reason, "fits");
    assert_eq!(model.calls(), 1);
}

#[tokio::test]
async fn test_prompt_carries_mood_text_and_schema() {
    let model = Arc::new(FakeModel::replying(model_reply("calm", &FIVE_TITLES)));
    generator(&model).generate("rainy sunday").await.unwrap();

    let prompt = model.last_prompt().unwrap();
    assert!(prompt.contains("User mood description: \"rainy sunday\""));
    assert!(prompt.contains("EXACTLY 5 songs"));
    assert!(prompt.contains("STRICT JSON ONLY"));
    assert!(prompt.contains("\"mood\""));
    assert!(prompt.contains("\"songs\""));
}

#[test]
fn test_build_prompt_contains_example_structure() {
    let prompt = build_prompt("happy");
    assert!(prompt.contains("{ \"title\": \"Song A\", \"artist\": \"Artist A\", \"reason\": \"why it fits\" }"));
    // the example itself must be extractable JSON
    let example = extract_first_json_object(&prompt[prompt.find("Follow").unwrap()..]).unwrap();
    assert_eq!(example["songs"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_upstream_failure_is_categorized() {
    let model = Arc::new(FakeModel::offline());
    let result = generator(&model).generate("happy").await;

    let err = result.unwrap_err();
    assert!(matches!(err, GenerateError::Upstream(_)));
    assert_eq!(err.user_message(), RETRY_MESSAGE);
}

#[tokio::test]
async fn test_reply_without_braces_is_malformed() {
    let model = Arc::new(FakeModel::replying("I can't help with that."));
    let result = generator(&model).generate("happy").await;
    assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
}

#[test]
fn test_unbalanced_braces_are_malformed() {
    for raw in [
        "{\"mood\": \"happy\", \"songs\": [",
        "\"mood\": \"happy\"}",
        "} {",
        "{\"mood\": \"happy\"} trailing { junk",
    ] {
        let result = parse_recommendation(raw);
        assert!(
            matches!(result, Err(GenerateError::MalformedResponse(_))),
            "expected malformed for {:?}",
            raw
        );
    }
}

#[test]
fn test_missing_mood_or_songs_is_malformed() {
    let cases = [
        json!({"songs": []}),
        json!({"mood": 3, "songs": []}),
        json!({"mood": "   ", "songs": []}),
        json!({"mood": "happy"}),
        json!({"mood": "happy", "songs": "none"}),
    ];
    for case in cases {
        let result = parse_recommendation(&case.to_string());
        assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
    }
}

#[test]
fn test_song_count_other_than_five_is_rejected() {
    let four = model_reply("sad", &FIVE_TITLES[..4]);
    let six = model_reply("sad", &["A", "B", "C", "D", "E", "F"]);

    for raw in [four, six] {
        match parse_recommendation(&raw) {
            Err(GenerateError::MalformedResponse(msg)) => assert!(msg.contains("expected 5 songs")),
            other => panic!("expected count rejection, got {:?}", other),
        }
    }
}

#[test]
fn test_song_without_title_is_malformed_but_missing_reason_is_accepted() {
    let mut songs: Vec<_> = FIVE_TITLES
        .iter()
        .map(|t| json!({"title": t, "artist": "X"}))
        .collect();
    let ok = parse_recommendation(&json!({"mood": "calm", "songs": songs}).to_string()).unwrap();
    assert!(ok.songs.iter().all(|s| s.reason.is_empty()));

    songs[2] = json!({"artist": "X", "reason": "no title"});
    let result = parse_recommendation(&json!({"mood": "calm", "songs": songs}).to_string());
    assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
}

#[test]
fn test_mood_is_trimmed() {
    let raw = model_reply("  energetic ", &FIVE_TITLES);
    assert_eq!(parse_recommendation(&raw).unwrap().detected_mood, "energetic");
}
