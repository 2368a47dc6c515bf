use chrono::{DateTime, SecondsFormat, Utc};

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

const MOOD_EMOJIS: [(&str, &str); 9] = [
    ("happy", "😄"),
    ("sad", "😢"),
    ("calm", "😌"),
    ("angry", "😠"),
    ("romantic", "💕"),
    ("relaxed", "🌿"),
    ("energetic", "⚡"),
    ("anxious", "😰"),
    ("excited", "🎉"),
];

/// Video-search link for a song. Independent of any catalog lookup.
pub fn youtube_search_url(title: &str, artist: &str) -> String {
    let query = format!("{} {}", title, artist);
    format!("{}{}", YOUTUBE_SEARCH_URL, urlencoding::encode(&query))
}

/// RFC 3339 timestamp with millisecond precision and a `Z` suffix,
/// e.g. `2025-11-21T13:09:18.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn mood_emoji(mood: &str) -> Option<&'static str> {
    let mood = mood.trim().to_lowercase();
    MOOD_EMOJIS
        .iter()
        .find(|(name, _)| *name == mood)
        .map(|(_, emoji)| *emoji)
}

/// Formats a stored timestamp for tables. Unparseable input is returned unchanged.
pub fn display_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Shortens `text` to at most `max` characters, ending with `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(3);
    let mut short: String = text.chars().take(keep).collect();
    short.push_str("...");
    short
}
