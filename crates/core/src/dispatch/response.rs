use crate::config::RunIdExtraction;
use modfind_api::RunId;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static RUN_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"((?-u:\w)+)"\}"#).expect("run id pattern is valid"));

/// Pull the run identifier out of a `runRecipe` response body.
///
/// A missing identifier is not an error: malformed, empty, or error responses simply yield `None`.
pub fn extract_run_id(body: &str, extraction: RunIdExtraction) -> Option<RunId> {
    match extraction {
        RunIdExtraction::Pattern => extract_by_pattern(body),
        RunIdExtraction::Schema => extract_by_schema(body),
    }
}

fn extract_by_pattern(body: &str) -> Option<RunId> {
    if !body.contains("id") {
        return None;
    }
    RUN_ID_PATTERN
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| RunId::new(m.as_str()))
}

fn extract_by_schema(body: &str) -> Option<RunId> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/data/runRecipe/id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(RunId::new)
}
