//! Generic renderer: schema-less recursive projection.

use crate::domain::{ResultValue, Section, VisualTree};

/// Render an arbitrary value with no foreknowledge of its shape.
///
/// Total and terminating for any finite value: recursion depth is bounded
/// by input depth, and values deserialized from JSON are acyclic. If this
/// is ever fed from a source that can produce cycles or pathological
/// depth, a visited-set guard or a depth cap has to be added here first.
pub fn render_any(value: &ResultValue) -> VisualTree {
    match value {
        ResultValue::Null => VisualTree::EmptyMarker,
        ResultValue::Text(s) => VisualTree::Text(s.clone()),
        ResultValue::Number(n) => VisualTree::Emphasis(n.to_string()),
        ResultValue::Bool(b) => VisualTree::Emphasis(b.to_string()),
        ResultValue::List(items) => {
            VisualTree::Bullets(items.iter().map(render_any).collect())
        }
        ResultValue::Record(fields) => VisualTree::Sections(
            fields
                .iter()
                .map(|(key, v)| Section::new(humanize_key(key), render_any(v)))
                .collect(),
        ),
        ResultValue::Opaque(_) => VisualTree::Unsupported,
    }
}

/// Turn a record key into a section title: underscores become spaces,
/// nothing else changes (case is preserved).
pub(crate) fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn from_json(value: serde_json::Value) -> ResultValue {
        ResultValue::from(value)
    }

    #[test]
    fn null_renders_the_empty_marker() {
        assert_eq!(render_any(&ResultValue::Null), VisualTree::EmptyMarker);
    }

    #[test]
    fn empty_string_is_not_the_empty_marker() {
        let rendered = render_any(&from_json(json!("")));
        assert_eq!(rendered, VisualTree::Text(String::new()));
        assert_ne!(rendered, VisualTree::EmptyMarker);
    }

    #[test]
    fn strings_render_verbatim_without_emphasis() {
        let rendered = render_any(&from_json(json!("a line\nanother line")));
        assert_eq!(rendered, VisualTree::Text("a line\nanother line".into()));
    }

    #[test]
    fn numbers_and_booleans_render_emphasized_canonical_forms() {
        assert_eq!(
            render_any(&from_json(json!(42))),
            VisualTree::Emphasis("42".into())
        );
        assert_eq!(
            render_any(&from_json(json!(2.5))),
            VisualTree::Emphasis("2.5".into())
        );
        assert_eq!(
            render_any(&from_json(json!(false))),
            VisualTree::Emphasis("false".into())
        );
    }

    #[test]
    fn lists_keep_length_and_order() {
        let rendered = render_any(&from_json(json!(["b", "a", 3])));
        match rendered {
            VisualTree::Bullets(items) => {
                assert_eq!(
                    items,
                    vec![
                        VisualTree::Text("b".into()),
                        VisualTree::Text("a".into()),
                        VisualTree::Emphasis("3".into()),
                    ]
                );
            }
            other => panic!("expected bullets, got {other:?}"),
        }
    }

    #[test]
    fn empty_list_is_a_present_container() {
        let rendered = render_any(&from_json(json!([])));
        assert_eq!(rendered, VisualTree::Bullets(vec![]));
        assert_ne!(rendered, VisualTree::EmptyMarker);
    }

    #[test]
    fn records_become_titled_sections_in_key_order() {
        let rendered = render_any(&from_json(json!({
            "total_reviews": 12,
            "Top_Service": "passport renewal",
        })));

        match rendered {
            VisualTree::Sections(sections) => {
                assert_eq!(sections.len(), 2);
                assert_eq!(sections[0].title, "total reviews");
                assert_eq!(sections[0].body, VisualTree::Emphasis("12".into()));
                // Case is preserved; only underscores are replaced.
                assert_eq!(sections[1].title, "Top Service");
                assert_eq!(
                    sections[1].body,
                    VisualTree::Text("passport renewal".into())
                );
            }
            other => panic!("expected sections, got {other:?}"),
        }
    }

    #[test]
    fn nested_structures_render_recursively() {
        let rendered = render_any(&from_json(json!({
            "by_service": [{"name": "visa", "count": 4}],
        })));

        let VisualTree::Sections(sections) = rendered else {
            panic!("expected sections");
        };
        let VisualTree::Bullets(items) = &sections[0].body else {
            panic!("expected bullets under the section");
        };
        let VisualTree::Sections(inner) = &items[0] else {
            panic!("expected sections inside the list item");
        };
        assert_eq!(inner[0].title, "name");
        assert_eq!(inner[1].body, VisualTree::Emphasis("4".into()));
    }

    #[test]
    fn opaque_leaves_render_the_unsupported_marker() {
        let rendered = render_any(&ResultValue::Opaque("file handle".into()));
        assert_eq!(rendered, VisualTree::Unsupported);
    }

    #[test]
    fn opaque_leaves_do_not_abort_the_surrounding_tree() {
        let value = ResultValue::List(vec![
            ResultValue::Text("fine".into()),
            ResultValue::Opaque("socket".into()),
            ResultValue::Text("also fine".into()),
        ]);

        let VisualTree::Bullets(items) = render_any(&value) else {
            panic!("expected bullets");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], VisualTree::Unsupported);
        assert_eq!(items[2], VisualTree::Text("also fine".into()));
    }

    #[test]
    fn rendering_is_idempotent() {
        let value = from_json(json!({
            "summary": "ok",
            "counts": [1, null, {"deep_key": true}],
        }));
        assert_eq!(render_any(&value), render_any(&value));
    }

    #[test]
    fn humanize_replaces_underscores_only() {
        assert_eq!(humanize_key("service_demanded_hebrew"), "service demanded hebrew");
        assert_eq!(humanize_key("CreationDate"), "CreationDate");
        assert_eq!(humanize_key("__x__"), "  x  ");
    }
}
