//! CLI command implementations.
//!
//! - **score**: run the scoring pipeline over a dataset and report or
//!   export the filtered results
//! - **init**: write a default `.firerisk.toml`

pub mod init;
pub mod score;

pub use init::init_config;
pub use score::{handle_score, ScoreConfig};
