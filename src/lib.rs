//! momo - Terminal photo journal
//!
//! A command-line journaling application: attach a photo and/or short text
//! to a calendar date, tag a mood, and browse entries through a month grid
//! or an image gallery. Entries persist as keyed JSON records on disk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MomoError;
