//! askcsv: terminal client for the CSV insight services.
//!
//! A TUI client that uploads CSV files to the indexing service and submits
//! natural-language questions to the query service, then renders whatever
//! JSON the backend answers with.
//!
//! ## Architecture
//!
//! The heart of the program is the schema-less renderer in [`render`]: the
//! query backend is free to answer with any JSON shape, and the renderer
//! projects it into a [`domain::VisualTree`] with no foreknowledge of that
//! shape. Two tagged shapes (`{"type": "table", ...}` and
//! `{"type": "text", ...}`) get specialized layouts; everything else goes
//! through the generic recursive projection.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ASKCSV                     ● connected      answered 14:02:11  │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Question  > which services got the worst reviews?              │
//! │  CSV file  > ./feedback.csv                                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  RESULT                                                         │
//! │  service                                                        │
//! │  │ visa renewal                                                 │
//! │  review_count                                                   │
//! │  │ 214                                                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  [Tab] Field  [Enter] Submit  [^D] Plan  [F1] Help  [Esc] Quit  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Modules:
//! - [`api`]: reqwest client for the indexing and query services
//! - [`domain`]: result value model, visual tree, application state
//! - [`render`]: the dispatcher and the generic renderer (pure functions)
//! - [`ui`]: ratatui projection of the app state and visual trees

pub mod api;
pub mod domain;
pub mod render;
pub mod ui;

pub use api::{ApiError, BackendClient, Endpoints};
pub use domain::{App, ResultValue, Section, TableView, VisualTree};
pub use render::{dispatch, render_any};
