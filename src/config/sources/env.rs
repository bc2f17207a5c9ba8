//! Environment source: TREESNAP_SCAN__EXCLUDED_EXTENSIONS=.png,.jpg and friends.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Keys parsed as comma-separated lists
const LIST_KEYS: &[&str] = &[
    "scan.excluded_paths",
    "scan.included_extensions",
    "scan.excluded_extensions",
    "scan.skipped_files",
    "scan.minify_extensions",
];

/// Environment source with the `TREESNAP_` prefix and `__` nesting separator.
pub fn source() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::with_prefix("TREESNAP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}

/// Add the environment source to builder
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(source())
}
