//! Configuration and path management for Splitmate

pub mod paths;
pub mod settings;

pub use paths::SplitmatePaths;
pub use settings::Settings;
