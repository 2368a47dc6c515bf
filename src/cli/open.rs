use super::{load_config, recommend::history_store, render};
use crate::{error, success, warning};

/// Opens a song link from history in the default browser.
///
/// Uses the Spotify link unless `youtube` is set or the song has none.
pub async fn open(entry: usize, song: usize, youtube: bool) {
    let config = load_config();
    let entries = history_store(&config).read_all().await;

    let Some(found) = entry.checked_sub(1).and_then(|i| entries.get(i)) else {
        error!(
            "No history entry {}. There are {} entries.",
            entry,
            entries.len()
        );
    };

    let Some(s) = song.checked_sub(1).and_then(|i| found.songs.get(i)) else {
        error!(
            "Entry {} has no song {}. It has {} songs.",
            entry,
            song,
            found.songs.len()
        );
    };

    let url = if youtube || s.catalog_url.is_empty() {
        render::video_link(s)
    } else {
        s.catalog_url.clone()
    };

    if webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        );
        return;
    }

    success!("Opened {} - {}", s.title, s.artist);
}
