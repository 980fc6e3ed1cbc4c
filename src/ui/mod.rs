//! UI module - TUI rendering components.
//!
//! - `layout.rs`: main layout orchestration
//! - `input_panel.rs`: question and CSV path input boxes
//! - `result_panel.rs`: visual tree -> terminal lines projection
//! - `widgets/`: overlays (help, query plan)

mod input_panel;
mod layout;
mod result_panel;

pub mod widgets;

pub use layout::render;
pub use result_panel::{plain_text, tree_lines};
