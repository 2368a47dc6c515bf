//! # CLI Module
//!
//! Command implementations for the `moodtune` binary. Each command loads
//! the configuration, validates the keys it needs, and then delegates to
//! the library layers.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the token broker HTTP surface (`GET /spotify-token`)
//! - [`recommend`] - Runs the mood pipeline and prints the enriched songs
//! - [`history`] - Lists or shows past recommendation sets
//! - [`open`] - Opens a stored song link in the default browser
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Recommendation Layer (generate, enrich, persist)
//!     ↓
//! Integration Layer (Gemini, Spotify, local store)
//!     ↓
//! Network / File System
//! ```
//!
//! ## Error Presentation
//!
//! - Missing configuration stops the command before any request is made.
//! - A failed recommendation attempt shows a single retry prompt; details
//!   are available with `RUST_LOG=moodtune=debug`.
//! - Missing catalog data is not an error. Songs are shown with whatever
//!   metadata was found.
//!
//! ## Usage Patterns
//!
//! ```bash
//! moodtune serve                                   # start the token broker
//! moodtune recommend "I'm tired but hopeful"      # get five songs
//! moodtune recommend --broker-url http://127.0.0.1:5004 "rainy sunday"
//! moodtune history                                 # list past queries
//! moodtune history --show 1                        # print the latest set
//! moodtune open 1 3                                # open song 3 of entry 1
//! ```

mod history;
mod open;
mod recommend;
mod render;
mod serve;

pub use history::history;
pub use open::open;
pub use recommend::build_pipeline;
pub use recommend::recommend;
pub use serve::serve;

use crate::{config::Config, error};

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    }
}
