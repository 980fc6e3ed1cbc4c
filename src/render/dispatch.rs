//! Result dispatcher: tagged-shape recognition in front of the generic
//! renderer.

use crate::domain::{ResultValue, TableView, VisualTree};

use super::generic::render_any;

/// Discriminator key the query backend puts on tagged results.
const TYPE_KEY: &str = "type";
/// Payload key of a tagged table: the row list.
const DATA_KEY: &str = "data";
/// Payload key of a tagged text block.
const CONTENT_KEY: &str = "content";

/// Placeholder shown for a tagged table with nothing to show.
pub(crate) const NO_DATA_NOTICE: &str = "no data to display";

/// Render one result value, recognizing tagged shapes first.
///
/// Classification order, first match wins:
/// 1. record tagged `"table"` renders as a table (or the no-data
///    placeholder when the payload is missing, malformed, or empty)
/// 2. record tagged `"text"` renders its content as an emphasized block
/// 3. everything else goes to [`render_any`]
///
/// An absent or null result renders nothing at all. There are no error
/// paths: malformed tagged shapes degrade, they never fail.
pub fn dispatch(value: Option<&ResultValue>) -> VisualTree {
    let Some(value) = value else {
        return VisualTree::Empty;
    };
    if matches!(value, ResultValue::Null) {
        return VisualTree::Empty;
    }

    match value.get(TYPE_KEY).and_then(ResultValue::as_str) {
        Some("table") => render_table(value),
        // A text tag without string content falls back to the generic
        // projection instead of erroring.
        Some("text") => match value.get(CONTENT_KEY).and_then(ResultValue::as_str) {
            Some(content) => VisualTree::Callout(content.to_string()),
            None => render_any(value),
        },
        _ => render_any(value),
    }
}

/// Render a tagged table.
///
/// Columns are derived strictly from the key order of the first row. Later
/// rows missing a column get an empty cell; extra keys in later rows are
/// ignored. Rows are assumed homogeneous but this is deliberately not
/// enforced.
fn render_table(value: &ResultValue) -> VisualTree {
    let rows = match value.get(DATA_KEY) {
        Some(ResultValue::List(rows)) if !rows.is_empty() => rows,
        // Missing payload, wrong payload type, or zero rows: a recoverable
        // degenerate case, not a failure.
        _ => return VisualTree::Notice(NO_DATA_NOTICE.to_string()),
    };

    let columns: Vec<String> = match &rows[0] {
        ResultValue::Record(fields) => fields.iter().map(|(k, _)| k.clone()).collect(),
        _ => Vec::new(),
    };

    let body = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|col| row.get(col).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    VisualTree::Table(TableView {
        columns,
        rows: body,
    })
}

/// Stringify one table cell.
fn cell_text(value: &ResultValue) -> String {
    match value {
        ResultValue::Null => String::new(),
        ResultValue::Text(s) => s.clone(),
        ResultValue::Number(n) => n.to_string(),
        ResultValue::Bool(b) => b.to_string(),
        ResultValue::List(_) | ResultValue::Record(_) => value.compact(),
        ResultValue::Opaque(_) => "unsupported type".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;
    use serde_json::json;

    fn dispatch_json(value: serde_json::Value) -> VisualTree {
        dispatch(Some(&ResultValue::from(value)))
    }

    #[test]
    fn absent_and_null_results_render_nothing() {
        assert_eq!(dispatch(None), VisualTree::Empty);
        assert_eq!(dispatch(Some(&ResultValue::Null)), VisualTree::Empty);
    }

    #[test]
    fn tagged_table_uses_first_row_key_order() {
        let rendered = dispatch_json(json!({
            "type": "table",
            "data": [{"a": 1, "b": 2}, {"a": 3, "b": 4}],
        }));

        assert_eq!(
            rendered,
            VisualTree::Table(TableView {
                columns: vec!["a".into(), "b".into()],
                rows: vec![
                    vec!["1".into(), "2".into()],
                    vec!["3".into(), "4".into()],
                ],
            })
        );
    }

    #[test]
    fn rows_missing_a_column_get_an_empty_cell() {
        let rendered = dispatch_json(json!({
            "type": "table",
            "data": [{"a": "x", "b": "y"}, {"b": "only"}],
        }));

        let VisualTree::Table(table) = rendered else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[1], vec!["".to_string(), "only".to_string()]);
    }

    #[test]
    fn extra_keys_in_later_rows_are_ignored() {
        let rendered = dispatch_json(json!({
            "type": "table",
            "data": [{"a": 1}, {"a": 2, "surprise": 3}],
        }));

        let VisualTree::Table(table) = rendered else {
            panic!("expected a table");
        };
        assert_eq!(table.columns, vec!["a".to_string()]);
        assert_eq!(table.rows, vec![vec!["1".to_string()], vec!["2".to_string()]]);
    }

    #[test]
    fn table_cells_stringify_mixed_values() {
        let rendered = dispatch_json(json!({
            "type": "table",
            "data": [{"v": null}, {"v": true}, {"v": [1, 2]}, {"v": {"k": "x"}}],
        }));

        let VisualTree::Table(table) = rendered else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0], vec!["".to_string()]);
        assert_eq!(table.rows[1], vec!["true".to_string()]);
        assert_eq!(table.rows[2], vec!["[1,2]".to_string()]);
        assert_eq!(table.rows[3], vec![r#"{"k":"x"}"#.to_string()]);
    }

    #[test]
    fn empty_table_payload_renders_the_placeholder() {
        let rendered = dispatch_json(json!({"type": "table", "data": []}));
        assert_eq!(rendered, VisualTree::Notice(NO_DATA_NOTICE.into()));
    }

    #[test]
    fn missing_or_malformed_table_payload_renders_the_placeholder() {
        assert_eq!(
            dispatch_json(json!({"type": "table"})),
            VisualTree::Notice(NO_DATA_NOTICE.into())
        );
        assert_eq!(
            dispatch_json(json!({"type": "table", "data": "not a list"})),
            VisualTree::Notice(NO_DATA_NOTICE.into())
        );
    }

    #[test]
    fn tagged_text_preserves_line_breaks() {
        let rendered = dispatch_json(json!({"type": "text", "content": "line1\nline2"}));
        assert_eq!(rendered, VisualTree::Callout("line1\nline2".into()));
    }

    #[test]
    fn tagged_text_without_string_content_falls_back_to_generic() {
        let rendered = dispatch_json(json!({"type": "text", "content": 7}));
        assert_eq!(
            rendered,
            VisualTree::Sections(vec![
                Section::new("type", VisualTree::Text("text".into())),
                Section::new("content", VisualTree::Emphasis("7".into())),
            ])
        );
    }

    #[test]
    fn undiscriminated_records_go_to_the_generic_renderer() {
        let rendered = dispatch_json(json!({"foo": "bar"}));
        assert_eq!(
            rendered,
            VisualTree::Sections(vec![Section::new("foo", VisualTree::Text("bar".into()))])
        );
    }

    #[test]
    fn non_string_discriminators_go_to_the_generic_renderer() {
        let rendered = dispatch_json(json!({"type": 3, "data": [{"a": 1}]}));
        assert!(matches!(rendered, VisualTree::Sections(_)));
    }

    #[test]
    fn scalars_go_straight_to_the_generic_renderer() {
        assert_eq!(
            dispatch_json(json!("plain answer")),
            VisualTree::Text("plain answer".into())
        );
        assert_eq!(dispatch_json(json!(9)), VisualTree::Emphasis("9".into()));
    }

    #[test]
    fn dispatch_is_idempotent() {
        let value = ResultValue::from(json!({
            "type": "table",
            "data": [{"a": 1, "b": null}],
        }));
        assert_eq!(dispatch(Some(&value)), dispatch(Some(&value)));
    }
}
