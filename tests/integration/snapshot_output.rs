//! Integration tests for snapshot persistence and the CLI run context

use super::test_utils::Fixture;
use treesnap::cli::{Commands, RunContext, ScanArgs};
use treesnap::config::{ScanConfig, SnapshotConfig};
use treesnap::output::{read_snapshot, to_json, write_snapshot, SnapshotStats};
use treesnap::scan;

#[test]
fn test_snapshot_json_has_only_schema_fields() {
    let fixture = Fixture::new("root", &[("dir/file.txt", "text")]);
    let tree = scan(&fixture.root, &ScanConfig::default()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&to_json(&tree, true).unwrap()).unwrap();

    fn check(value: &serde_json::Value) {
        let obj = value.as_object().unwrap();
        match obj["type"].as_str().unwrap() {
            "d" => {
                let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
                keys.sort();
                assert_eq!(keys, vec!["children", "name", "type"]);
                obj["children"].as_array().unwrap().iter().for_each(check);
            }
            "f" => {
                let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
                keys.sort();
                assert_eq!(keys, vec!["content", "name", "type"]);
            }
            other => panic!("unexpected type {other}"),
        }
    }
    check(&value);
}

#[test]
fn test_written_snapshot_reads_back_identically() {
    let fixture = Fixture::new(
        "root",
        &[("a.ts", "// c\nlet a = 1;"), ("b/c.txt", "c"), ("b/d.png", "img")],
    );
    let config = ScanConfig {
        excluded_extensions: vec![".png".to_string()],
        ..ScanConfig::default()
    };
    let tree = scan(&fixture.root, &config).unwrap();
    let out = fixture.scratch().join("snapshot.json");

    write_snapshot(&tree, &out, false).unwrap();

    assert_eq!(read_snapshot(&out).unwrap(), tree);
    let stats = SnapshotStats::collect(&tree, &config.skipped_content);
    assert_eq!(stats.directories, 1);
    assert_eq!(stats.files, 2);
    assert_eq!(stats.skipped, 1);
}

#[test]
fn test_run_context_scan_writes_configured_file() {
    let fixture = Fixture::new("proj", &[("keep.txt", "keep"), ("secret.txt", "no")]);
    let out = fixture.scratch().join("out").join("tree.json");

    let mut config = SnapshotConfig::default();
    config.output.file = out.clone();
    config.scan.skipped_files = vec!["secret.txt".to_string()];
    let ctx = RunContext::from_config(config);

    let args = ScanArgs {
        root: Some(fixture.root.clone()),
        ..ScanArgs::default()
    };
    ctx.execute(&Commands::Scan(args)).unwrap();

    let snapshot = read_snapshot(&out).unwrap();
    assert_eq!(snapshot.name, "proj");
    assert!(snapshot.child("keep.txt").is_some());
    assert!(snapshot.child("secret.txt").is_none());
}

#[test]
fn test_run_context_cli_flags_extend_config() {
    let fixture = Fixture::new("proj", &[("a.js", "// x\ngo();"), ("b.txt", "b")]);
    let ctx = RunContext::from_config(SnapshotConfig::default());

    let args = ScanArgs {
        root: Some(fixture.root.clone()),
        stdout: true,
        exclude_extensions: vec!["js".to_string()],
        ..ScanArgs::default()
    };
    let json = ctx.execute(&Commands::Scan(args)).unwrap();

    let tree: treesnap::FileNode = serde_json::from_str(&json).unwrap();
    assert_eq!(tree.child("a.js").and_then(|n| n.content()), Some("<!-- Skipped -->"));
    assert_eq!(tree.child("b.txt").and_then(|n| n.content()), Some("b"));
}
