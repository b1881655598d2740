//! Dialog components for TUI

mod base;
mod notice;

pub use notice::render_notice;
