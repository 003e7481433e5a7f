#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One parameter record per option, in the order values were first set
//! 2. One argument record per leftover argument, in command-line order
//! 3. One summary record

use crate::params::ParameterSet;
use serde::Serialize;
use serde_json::Value;

/// JSONL output formatter
///
/// Formats a parameter set as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the parameter set as JSONL
    pub fn format(&self, params: &ParameterSet) -> String {
        let mut output = String::new();

        for (name, value) in params.parameters() {
            let position = params.position(name);
            push_record(
                &mut output,
                &ParameterRecord {
                    record_type: "parameter",
                    name,
                    value,
                    source: if position.is_some() {
                        "command_line"
                    } else {
                        "default"
                    },
                    position,
                },
            );
        }

        for (index, value) in params.arguments().iter().enumerate() {
            push_record(
                &mut output,
                &ArgumentRecord {
                    record_type: "argument",
                    index,
                    value,
                },
            );
        }

        push_record(
            &mut output,
            &SummaryRecord {
                record_type: "summary",
                parameters: params.parameters().len(),
                arguments: params.arguments().len(),
                raw_arguments: params.raw_arguments(),
                command: params.command(),
            },
        );

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Parameter record for JSONL output
#[derive(Debug, Serialize)]
struct ParameterRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: &'a str,
    value: &'a Value,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
}

/// Argument record for JSONL output
#[derive(Debug, Serialize)]
struct ArgumentRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    index: usize,
    value: &'a str,
}

/// Summary record for JSONL output
#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    parameters: usize,
    arguments: usize,
    raw_arguments: &'a [String],
    command: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CmdConf;
    use serde_json::json;

    fn analyse(argv: &[&str], config: Value) -> ParameterSet {
        let mut cmd = CmdConf::new(argv.iter().copied());
        cmd.configure(config);
        cmd.get_parameters().clone()
    }

    fn records(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_format_empty_result() {
        let formatter = JsonlFormatter::new();
        let params = analyse(&["node", "script"], json!({}));

        let output = formatter.format(&params);
        let records = records(&output);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "summary");
        assert_eq!(records[0]["parameters"], 0);
        assert_eq!(records[0]["arguments"], 0);
        assert_eq!(records[0]["raw_arguments"], json!([]));
        assert_eq!(records[0]["command"], "node script");
    }

    #[test]
    fn test_record_order() {
        let formatter = JsonlFormatter::new();
        let params = analyse(
            &["node", "script", "a", "--files", "x", "y", "b"],
            json!({
                "level": {"action": "get", "number": 1, "defaultValue": 1},
                "files": {"action": "get", "number": 2}
            }),
        );

        let output = formatter.format(&params);
        let types: Vec<String> = records(&output)
            .iter()
            .map(|r| r["type"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(
            types,
            vec!["parameter", "parameter", "argument", "argument", "summary"]
        );
    }

    #[test]
    fn test_parameter_records() {
        let formatter = JsonlFormatter::new();
        let params = analyse(
            &["node", "script", "--files", "x", "2.5"],
            json!({
                "level": {"action": "get", "number": 1, "defaultValue": 1},
                "files": {"action": "get", "number": 2}
            }),
        );

        let records = records(&formatter.format(&params));

        assert_eq!(records[0]["name"], "level");
        assert_eq!(records[0]["value"], 1);
        assert_eq!(records[0]["source"], "default");
        assert!(records[0].get("position").is_none());

        assert_eq!(records[1]["name"], "files");
        assert_eq!(records[1]["value"], json!(["x", 2.5]));
        assert_eq!(records[1]["source"], "command_line");
        assert_eq!(records[1]["position"], 0);
    }

    #[test]
    fn test_argument_records() {
        let formatter = JsonlFormatter::new();
        let params = analyse(&["node", "script", "first", "second"], json!({}));

        let records = records(&formatter.format(&params));

        assert_eq!(records[0], json!({"type": "argument", "index": 0, "value": "first"}));
        assert_eq!(records[1], json!({"type": "argument", "index": 1, "value": "second"}));
        assert_eq!(records[2]["arguments"], 2);
    }

    #[test]
    fn test_special_characters_in_arguments() {
        let formatter = JsonlFormatter::new();
        let params = analyse(&["node", "script", "say \"hi\"\n", "tab\there"], json!({}));

        let records = records(&formatter.format(&params));

        assert_eq!(records[0]["value"], "say \"hi\"\n");
        assert_eq!(records[1]["value"], "tab\there");
    }

    #[test]
    fn test_deterministic_output() {
        let formatter = JsonlFormatter::default();
        let params = analyse(
            &["node", "script", "-v", "--count", "3", "rest"],
            json!({
                "verbose": {"action": "set", "shortKey": "v"},
                "count": {"action": "get", "number": 1}
            }),
        );

        assert_eq!(formatter.format(&params), formatter.format(&params));
    }
}
