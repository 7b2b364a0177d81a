//! Property tests for placeholder resolution.

use proptest::prelude::*;
use serde_json::json;

use choice_collector::domain::shared_state::SharedState;
use choice_collector::domain::template::{resolve, TemplateError};

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?\"]{0,20}"
}

fn value_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-z\"\\\\\n\t{}. ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn text_without_markers_only_loses_quotes(template in "[^{]{0,40}") {
        let out = resolve(&template, &SharedState::new()).unwrap();
        prop_assert_eq!(out, template.replace('"', ""));
    }

    #[test]
    fn single_segment_is_substituted_everywhere(
        k in key(),
        v in value_text(),
        extra in value_text(),
        prefix in plain_text(),
        middle in plain_text(),
    ) {
        let state = SharedState::new().with(k.clone(), json!([v.clone(), extra]));
        let template = format!("{}{{{}}}{}{{{}}}", prefix, k, middle, k);

        let out = resolve(&template, &state).unwrap();

        let expected = format!(
            "{}{}{}{}",
            prefix.replace('"', ""),
            v.replace('"', ""),
            middle.replace('"', ""),
            v.replace('"', "")
        );
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn nested_placeholder_walks_two_levels(a in key(), b in key(), v in value_text()) {
        let state = SharedState::new().with(a.clone(), json!({ b.clone(): [v.clone()] }));
        let out = resolve(&format!("<{{{}.{}}}>", a, b), &state).unwrap();
        prop_assert_eq!(out, format!("<{}>", v.replace('"', "")));
    }

    #[test]
    fn missing_nested_segments_raise_nested_error(a in key(), b in key(), other in key()) {
        prop_assume!(a != other);
        let body = format!("{}.{}", a, b);
        let template = format!("{{{}}}", body);

        let missing_root = SharedState::new().with(other.clone(), json!({ b.clone(): ["x"] }));
        prop_assert_eq!(
            resolve(&template, &missing_root),
            Err(TemplateError::nested_path_incomplete(body.clone()))
        );

        let missing_leaf = SharedState::new().with(a.clone(), json!({}));
        prop_assert_eq!(
            resolve(&template, &missing_leaf),
            Err(TemplateError::nested_path_incomplete(body))
        );
    }

    #[test]
    fn unresolvable_placeholder_never_renders(
        known in key(),
        unknown in key(),
        v in value_text(),
    ) {
        prop_assume!(known != unknown);
        let state = SharedState::new().with(known.clone(), json!([v]));
        let template = format!("{{{}}} then {{{}}}", known, unknown);

        prop_assert_eq!(
            resolve(&template, &state),
            Err(TemplateError::variable_not_found(unknown))
        );
    }
}

#[test]
fn string_values_keep_everything_but_quotes() {
    let state = SharedState::new()
        .with("greeting", json!(["say \"hi\""]))
        .with("path", json!(["C:\\Users"]))
        .with("note", json!(["line one\nline two"]));

    assert_eq!(resolve("{greeting}", &state).unwrap(), "say hi");
    assert_eq!(resolve("{path}", &state).unwrap(), "C:\\Users");
    assert_eq!(resolve("{note}", &state).unwrap(), "line one\nline two");
}

#[test]
fn object_leaf_renders_as_compact_json_without_quotes() {
    let state = SharedState::new().with("user", json!({ "name": "Alice" }));
    assert_eq!(resolve("{user}", &state).unwrap(), "{name:Alice}");
}
