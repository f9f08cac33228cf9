//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Rendering is split from printing so output can be checked in tests.

use crate::api::{self, ClassifyResponse, ErrorResponse, StageJson, StagesResponse};
use crate::config::ServerConfig;
use crate::{present, repl};
use giraffe_core::{GiraffeError, StageId, StageRecord, classify_input, matching_rule, stage_table, validate};
use std::path::Path;

// =============================================================================
// CLASSIFY COMMAND
// =============================================================================

/// Render the outcome of classifying `input`.
#[must_use]
pub fn render_classification(
    input: &str,
    result: &Result<&'static StageRecord, GiraffeError>,
    json_mode: bool,
    verbose: bool,
) -> String {
    if json_mode {
        let response = match result {
            Ok(record) => ClassifyResponse::success(record),
            Err(e) => ClassifyResponse::failure(e),
        };
        return serde_json::to_string_pretty(&response).unwrap_or_default();
    }

    match result {
        Ok(record) => {
            let mut out = present::stage_card(record);
            if verbose {
                let rule = validate(input)
                    .ok()
                    .and_then(|length| matching_rule(length.value()));
                if let Some(rule) = rule {
                    out.push_str(&format!("\nMatched rule: {} -> {}\n", rule.guard, rule.stage));
                }
            }
            out
        }
        Err(e) => present::error_message(e),
    }
}

/// Classify one measurement and print the stage card.
pub fn cmd_classify(input: &str, json_mode: bool, verbose: bool) -> Result<(), GiraffeError> {
    let result = classify_input(input);
    let output = render_classification(input, &result, json_mode, verbose);

    match result {
        Ok(record) => {
            tracing::debug!(input, stage = %record.id, "Classified foot length");
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            if let GiraffeError::Classification(_) = e {
                tracing::error!(input, "Validated foot length matched no stage rule: {}", e);
            }
            if json_mode {
                println!("{}", output);
            } else {
                eprintln!("{}", output);
            }
            Err(e)
        }
    }
}

// =============================================================================
// STAGES COMMAND
// =============================================================================

/// Render the stage listing.
#[must_use]
pub fn render_stages(json_mode: bool) -> String {
    if json_mode {
        let response = StagesResponse {
            stages: stage_table().iter().map(StageJson::from).collect(),
        };
        return serde_json::to_string_pretty(&response).unwrap_or_default();
    }

    let mut out = String::new();
    out.push_str("Giraffe Growth Stages\n");
    out.push_str("=====================\n");
    for record in stage_table() {
        out.push_str(&present::stage_summary(record));
        out.push('\n');
    }
    out
}

/// List all stages.
pub fn cmd_stages(json_mode: bool) -> Result<(), GiraffeError> {
    println!("{}", render_stages(json_mode));
    Ok(())
}

// =============================================================================
// STAGE COMMAND
// =============================================================================

/// Render one stage by key.
pub fn render_stage(key: &str, json_mode: bool) -> Result<String, GiraffeError> {
    let record = key.parse::<StageId>()?.record();

    if json_mode {
        return Ok(serde_json::to_string_pretty(&StageJson::from(record)).unwrap_or_default());
    }
    Ok(present::stage_card(record))
}

/// Render the message shown when a stage lookup fails.
#[must_use]
pub fn render_stage_error(err: &GiraffeError, json_mode: bool) -> String {
    if json_mode {
        return serde_json::to_string_pretty(&ErrorResponse::from(err)).unwrap_or_default();
    }
    present::error_message(err)
}

/// Show one stage card.
pub fn cmd_stage(key: &str, json_mode: bool) -> Result<(), GiraffeError> {
    match render_stage(key, json_mode) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            let output = render_stage_error(&e, json_mode);
            if json_mode {
                println!("{}", output);
            } else {
                eprintln!("{}", output);
            }
            Err(e)
        }
    }
}

// =============================================================================
// INTERACTIVE COMMAND
// =============================================================================

/// Run the prompt loop.
pub fn cmd_interactive(json_mode: bool) -> Result<(), GiraffeError> {
    repl::run_repl(json_mode)
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), GiraffeError> {
    let mut config = ServerConfig::load(config_path)?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    println!("Giraffe Stage Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:       {}", config.host);
    println!("  Port:       {}", config.port);
    println!("  Rate limit: {} req/s", config.rate_limit);
    println!();
    println!("Endpoints:");
    println!("  POST /classify    - Classify a foot length");
    println!("  GET  /stages      - List all stages");
    println!("  GET  /stages/{{id}} - Show one stage");
    println!("  GET  /health      - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&config).await
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn classification_card() {
        let result = classify_input("16.5");
        let out = render_classification("16.5", &result, false, false);
        assert!(out.starts_with("You're like a Subadult Giraffe!"));
        assert!(!out.contains("Matched rule"));
    }

    #[test]
    fn verbose_shows_matched_rule() {
        let result = classify_input("17.1");
        let out = render_classification("17.1", &result, false, true);
        assert!(out.contains("Matched rule: value >= 17.1 -> adult"));
    }

    #[test]
    fn rejected_input_renders_message() {
        let result = classify_input("abc");
        let out = render_classification("abc", &result, false, false);
        assert_eq!(out, present::MSG_NOT_A_NUMBER);
    }

    #[test]
    fn json_failure_carries_kind() {
        let result = classify_input("24.9");
        let out = render_classification("24.9", &result, true, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error_kind"], "out_of_bounds");
    }

    #[test]
    fn json_success_carries_stage() {
        let result = classify_input("12.1");
        let out = render_classification("12.1", &result, true, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["stage"]["id"], "juvenile");
    }

    #[test]
    fn stages_listing_has_all_keys() {
        let out = render_stages(false);
        for id in StageId::ALL {
            assert!(out.contains(id.key()));
        }
    }

    #[test]
    fn stages_json_is_age_ordered() {
        let out = render_stages(true);
        let parsed: StagesResponse = serde_json::from_str(&out).unwrap();
        let ids: Vec<&str> = parsed.stages.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["newborn", "juvenile", "subadult", "adult"]);
    }

    #[test]
    fn unknown_stage_is_error() {
        let err = render_stage("calf", false).unwrap_err();
        assert_eq!(err.kind(), "unknown_stage");
        assert_eq!(render_stage_error(&err, false), "Unknown stage: calf");
    }

    #[test]
    fn unknown_stage_json_error() {
        let err = render_stage("calf", true).unwrap_err();
        let value: serde_json::Value =
            serde_json::from_str(&render_stage_error(&err, true)).unwrap();
        assert_eq!(value["error_kind"], "unknown_stage");
    }

    #[test]
    fn stage_card_by_key() {
        let out = render_stage("Newborn", false).unwrap();
        assert!(out.contains("Newborn/Calf"));
    }
}
