use tabled::Table;

use super::{load_config, recommend::history_store, render};
use crate::{error, info, types::HistoryTableRow, utils};

/// Lists past queries, or prints one of them in full with `show`.
///
/// Positions are 1-based, most recent first.
pub async fn history(limit: Option<usize>, show: Option<usize>) {
    let config = load_config();
    let entries = history_store(&config).read_all().await;

    if entries.is_empty() {
        info!("No history yet. Run `moodtune recommend \"<your mood>\"` first.");
        return;
    }

    if let Some(position) = show {
        match position.checked_sub(1).and_then(|i| entries.get(i)) {
            Some(entry) => render::entry(entry),
            None => error!(
                "No history entry {}. There are {} entries.",
                position,
                entries.len()
            ),
        }
        return;
    }

    let rows: Vec<HistoryTableRow> = entries
        .iter()
        .take(limit.unwrap_or(entries.len()))
        .enumerate()
        .map(|(i, e)| HistoryTableRow {
            index: i + 1,
            date: utils::display_date(&e.timestamp),
            mood: match utils::mood_emoji(&e.detected_mood) {
                Some(emoji) => format!("{} {}", e.detected_mood, emoji),
                None => e.detected_mood.clone(),
            },
            text: utils::truncate(&e.original_text, 60),
        })
        .collect();

    println!("{}", Table::new(rows));
    info!("{} entries in history", entries.len());
}
