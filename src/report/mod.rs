//! Report generation

pub mod generator;

pub use generator::{collect_notes, generate_markdown_report};
