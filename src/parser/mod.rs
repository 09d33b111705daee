//! Loading configurations, icons and extra files from disk

pub mod config;
pub mod icon;
pub mod extra_files;

pub use config::{load_configuration, parse_configuration};
pub use extra_files::load_extra_files;
pub use icon::{icon_from_bytes, load_icon};
