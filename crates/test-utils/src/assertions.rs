//! Snapshot formatting helpers.
//!
//! Fixtures and emitted modules are formatted consistently so snapshots
//! stay readable.

use graphql_fixtures::{emit::PluginOutput, Value};

/// Format a fixture as pretty JSON, resolving fields down to `depth` levels.
///
/// # Example
///
/// ```ignore
/// use graphql_fixtures_test_utils::format_fixture;
///
/// let user = registry.instantiate("User").unwrap();
/// insta::assert_snapshot!(format_fixture(&user, 1));
/// ```
pub fn format_fixture(value: &Value, depth: usize) -> String {
    serde_json::to_string_pretty(&value.materialize(depth))
        .unwrap_or_else(|err| format!("(unserializable fixture: {err})"))
}

/// Format an emitted module with its parts marked.
pub fn format_output(output: &PluginOutput) -> String {
    format!(
        "// prepend\n{}\n// content\n{}\n// append\n{}",
        output.prepend.join("\n"),
        output.content,
        output.append.join("\n"),
    )
}
