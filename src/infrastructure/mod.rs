//! Infrastructure layer - External I/O and persistence

pub mod caption;
pub mod config;
pub mod imaging;
pub mod repository;
pub mod store;

pub use caption::{CaptionTransport, GeminiClient};
pub use config::Config;
pub use repository::{EntryRepository, ImportOutcome};
pub use store::{FileStore, KeyValueStore};
