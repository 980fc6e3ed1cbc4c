//! The rendering core.
//!
//! Two pure functions turn a [`crate::domain::ResultValue`] into a
//! [`crate::domain::VisualTree`]:
//!
//! - [`dispatch`] recognizes the two tagged shapes the query backend emits
//!   (`{"type": "table", "data": [...]}` and
//!   `{"type": "text", "content": "..."}`) and gives them specialized
//!   layouts.
//! - [`render_any`] handles everything else: a recursive projection of an
//!   arbitrary value with no schema knowledge.
//!
//! Rendering never fails. Malformed tagged shapes degrade to a placeholder
//! or to the generic projection; unrenderable leaves become a visible
//! marker. Only the network layer around this module has error paths.

mod dispatch;
mod generic;

pub use dispatch::dispatch;
pub use generic::render_any;
