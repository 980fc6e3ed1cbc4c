//! Domain models for the client.

mod app;
mod tree;
mod value;

pub use app::{App, Focus, Submission};
pub use tree::{Section, TableView, VisualTree};
pub use value::ResultValue;
