mod history;
mod store;

pub use history::HISTORY_KEY;
pub use history::HistoryStore;
pub use store::FileStore;
pub use store::KeyValueStore;
pub use store::MemoryStore;
pub use store::StoreError;
