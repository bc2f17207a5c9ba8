//! Integration tests for extension filtering and script minification

use super::test_utils::Fixture;
use treesnap::config::ScanConfig;
use treesnap::scan;
use treesnap::tree::node::FileNode;

const SCRIPT: &str = "/* banner */\nvar a = 1; // one\n\nvar b = 2;\n";

fn content_of<'a>(tree: &'a FileNode, path: &str) -> &'a str {
    tree.lookup(path)
        .and_then(FileNode::content)
        .unwrap_or_else(|| panic!("no file at {path}"))
}

#[test]
fn test_excluded_extension_yields_sentinel() {
    let fixture = Fixture::new("root", &[("a.min.js", SCRIPT)]);
    let config = ScanConfig {
        excluded_extensions: vec![".js".to_string()],
        ..ScanConfig::default()
    };

    let tree = scan(&fixture.root, &config).unwrap();

    assert_eq!(content_of(&tree, "a.min.js"), "<!-- Skipped -->");
}

#[test]
fn test_unfiltered_script_is_minified() {
    let fixture = Fixture::new("root", &[("a.min.js", SCRIPT)]);

    let tree = scan(&fixture.root, &ScanConfig::default()).unwrap();

    assert_eq!(content_of(&tree, "a.min.js"), "var a = 1; var b = 2;");
}

#[test]
fn test_non_script_content_is_verbatim() {
    let fixture = Fixture::new("root", &[("notes.md", "# Notes\n\n// keep me\n")]);

    let tree = scan(&fixture.root, &ScanConfig::default()).unwrap();

    assert_eq!(content_of(&tree, "notes.md"), "# Notes\n\n// keep me\n");
}

#[test]
fn test_allow_list_limits_content() {
    let fixture = Fixture::new(
        "root",
        &[
            ("src/main.rs", "fn main() {}"),
            ("docs/guide.md", "guide"),
            ("Makefile", "all:"),
        ],
    );
    let config = ScanConfig {
        included_extensions: vec!["RS".to_string()],
        ..ScanConfig::default()
    };

    let tree = scan(&fixture.root, &config).unwrap();

    assert_eq!(content_of(&tree, "src/main.rs"), "fn main() {}");
    assert_eq!(content_of(&tree, "docs/guide.md"), "<!-- Skipped -->");
    assert_eq!(content_of(&tree, "Makefile"), "<!-- Skipped -->");
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let fixture = Fixture::new("root", &[("Logo.PNG", "not really a png")]);
    let config = ScanConfig {
        excluded_extensions: vec![".png".to_string()],
        ..ScanConfig::default()
    };

    let tree = scan(&fixture.root, &config).unwrap();

    assert_eq!(content_of(&tree, "Logo.PNG"), "<!-- Skipped -->");
}

#[test]
fn test_custom_sentinel_and_minify_set() {
    let fixture = Fixture::new(
        "root",
        &[
            ("style.css", "a {\n  color: red; /* c */\n}\n"),
            ("app.js", "// x\nrun();\n"),
        ],
    );
    let config = ScanConfig {
        minify_extensions: vec![".css".to_string()],
        excluded_extensions: vec![".js".to_string()],
        skipped_content: "[omitted]".to_string(),
        ..ScanConfig::default()
    };

    let tree = scan(&fixture.root, &config).unwrap();

    assert_eq!(content_of(&tree, "style.css"), "a { color: red; }");
    assert_eq!(content_of(&tree, "app.js"), "[omitted]");
}
