//! Resume skill gap analyzer library

pub mod analysis;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod output;

pub use config::Config;
pub use controller::UploadController;
pub use error::{Result, SkillGapError};
