//! Output formatting utilities

pub mod display;

pub use display::BoardFormatter;
