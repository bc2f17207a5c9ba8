//! Property-based tests for minifier and content policy determinism

use proptest::prelude::*;
use treesnap::tree::minify::minify;
use treesnap::tree::policy::extension_of;

/// Script-like text: words, whitespace, and well-formed comments
fn script_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9;=(){}]{1,8}",
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\t".to_string()),
            Just("// note\n".to_string()),
            Just("/* block\n comment */".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Script-like text that also scatters bare `/`, `*` and marker halves, so
/// comment removal can land next to them
fn spliced_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9;=(){}]{1,8}",
            "[ \n\t]",
            Just("/".to_string()),
            Just("*".to_string()),
            Just("/*".to_string()),
            Just("*/".to_string()),
            Just("\"/\"".to_string()),
            Just("\"*\"".to_string()),
            Just("// note\n".to_string()),
            Just("/* block\n comment */".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Minifying already-minified text changes nothing
#[test]
fn test_minify_fixed_point_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&spliced_text(), |text| {
            let once = minify(&text);
            let twice = minify(&once);
            prop_assert_eq!(&once, &twice);
            prop_assert!(!once.contains("//"));
            Ok(())
        })
        .unwrap();
}

/// Minified output has no comments, no whitespace runs, and no outer whitespace
#[test]
fn test_minify_output_shape_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&script_text(), |text| {
            let out = minify(&text);
            prop_assert!(!out.contains("//"));
            prop_assert!(!out.contains("/*"));
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.contains('\n'));
            prop_assert_eq!(out.trim(), out.as_str());
            Ok(())
        })
        .unwrap();
}

/// Extension is always lower-case and starts with a dot
#[test]
fn test_extension_shape_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[A-Za-z0-9_.-]{1,20}", |name| {
            let ext = extension_of(std::path::Path::new(&name));
            prop_assert!(ext.starts_with('.'));
            prop_assert_eq!(ext.to_lowercase(), ext.clone());
            Ok(())
        })
        .unwrap();
}
