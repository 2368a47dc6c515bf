use colored::Colorize;

use crate::{
    types::{EnrichedSong, HistoryEntry},
    utils,
};

/// Prints one recommendation set the way the results panel shows it.
pub fn entry(entry: &HistoryEntry) {
    let emoji = utils::mood_emoji(&entry.detected_mood)
        .map(|e| format!(" {}", e))
        .unwrap_or_default();

    println!(
        "{} {}{}",
        "Detected Mood:".bold(),
        entry.detected_mood,
        emoji
    );
    println!(
        "{} \"{}\" ({})",
        "You said:".bold(),
        entry.original_text,
        utils::display_date(&entry.timestamp)
    );
    println!("\n{}", "Recommended Songs".bold());

    for (i, s) in entry.songs.iter().enumerate() {
        song(i + 1, s);
    }
}

fn song(position: usize, song: &EnrichedSong) {
    println!("\n{}. {} - {}", position, song.title.bold(), song.artist);

    if !song.reason.is_empty() {
        println!("   {}", song.reason.dimmed());
    }

    if song.preview_audio_url.is_empty() {
        println!("   {}", "No preview available".dimmed());
    } else {
        println!("   Preview: {}", song.preview_audio_url);
    }

    if !song.album_cover_url.is_empty() {
        println!("   Cover:   {}", song.album_cover_url);
    }

    if !song.catalog_url.is_empty() {
        println!("   Spotify: {}", song.catalog_url.green());
    }

    println!("   YouTube: {}", video_link(song).blue());
}

/// The video-search link, rebuilt for entries stored without one.
pub fn video_link(song: &EnrichedSong) -> String {
    if song.external_search_url.is_empty() {
        utils::youtube_search_url(&song.title, &song.artist)
    } else {
        song.external_search_url.clone()
    }
}
