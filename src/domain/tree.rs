//! The visual tree.
//!
//! Output of the renderers, independent of any particular terminal widget.
//! The [`crate::ui`] module projects this structure onto the screen; tests
//! compare trees structurally.

/// A rendered view of one result value.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualTree {
    /// Nothing at all. Produced by the dispatcher when no result is
    /// present; occupies no space on screen.
    Empty,
    /// The muted "empty" indicator for a null leaf. Distinguishable from
    /// both [`VisualTree::Empty`] and an empty text leaf.
    EmptyMarker,
    /// A string, verbatim. Embedded line breaks are preserved.
    Text(String),
    /// A scalar in canonical string form, shown in a visually distinct
    /// style to signal structured data rather than prose.
    Emphasis(String),
    /// An ordered bulleted sequence. An empty list is an empty but present
    /// container, not the empty marker.
    Bullets(Vec<VisualTree>),
    /// One titled, visually grouped sub-section per record key, in
    /// insertion order.
    Sections(Vec<Section>),
    /// A tabular result: header row plus body rows, already stringified.
    Table(TableView),
    /// A recoverable degenerate case, e.g. a table with no rows.
    Notice(String),
    /// An emphasized text block, line breaks verbatim.
    Callout(String),
    /// A visible, non-fatal marker for a leaf the renderer cannot display.
    Unsupported,
}

/// A titled sub-section of a record view.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Humanized key (underscores replaced with spaces, case preserved).
    pub title: String,
    /// Recursively rendered value.
    pub body: VisualTree,
}

impl Section {
    pub fn new(title: impl Into<String>, body: VisualTree) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}

/// A rendered table. Columns come from the first row of the payload;
/// header cells are right-aligned per the system's right-to-left
/// convention.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
