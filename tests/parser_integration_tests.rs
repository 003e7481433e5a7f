//! Integration tests for command-line analysis
//!
//! This test suite verifies that the analyser:
//! - Matches short and long flags against configured options
//! - Captures values for get options and coerces numbers
//! - Assigns configured values for set options
//! - Reports defaults, leftover arguments and the command string
//! - Loads JSON and TOML configuration files

use cmdconf::CmdConf;
use serde_json::{Value, json};

const BASIC_JSON: &str = "tests/fixtures/configs/basic.json";
const BASIC_TOML: &str = "tests/fixtures/configs/basic.toml";

/// Helper to build the argv of a node-style invocation
fn argv(args: &[&str]) -> Vec<String> {
    ["node", "script"]
        .iter()
        .chain(args.iter())
        .map(|s| s.to_string())
        .collect()
}

fn analyse(args: &[&str], config: Value) -> cmdconf::ParameterSet {
    let mut cmd = CmdConf::new(argv(args));
    cmd.configure(config);
    cmd.get_parameters().clone()
}

mod scenarios {
    use super::*;

    #[test]
    fn test_short_set_flag() {
        let params = analyse(
            &["-v"],
            json!({"verbose": {"action": "set", "key": "verbose", "shortKey": "v"}}),
        );

        assert_eq!(params.get("verbose"), Some(&json!(true)));
    }

    #[test]
    fn test_get_single_number() {
        let params = analyse(
            &["--count", "5", "extra"],
            json!({"count": {"action": "get", "key": "count", "number": 1}}),
        );

        assert_eq!(params.get("count"), Some(&json!(5)));
        assert!(params.get("count").unwrap().is_u64());
        assert_eq!(params.arguments(), &["extra"]);
    }

    #[test]
    fn test_get_stops_at_next_flag() {
        let params = analyse(
            &["--files", "a.txt", "-v"],
            json!({"files": {"action": "get", "key": "files", "number": 2}}),
        );

        assert_eq!(params.get("files"), Some(&json!(["a.txt"])));
    }

    #[test]
    fn test_unknown_flag_is_dropped() {
        let params = analyse(
            &["--unknown", "value"],
            json!({"count": {"action": "get", "key": "count", "number": 1}}),
        );

        assert!(!params.arguments().iter().any(|a| a == "--unknown"));
        assert!(!params.contains("unknown"));
        assert_eq!(params.arguments(), &["value"]);
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_default_reported_when_flag_absent() {
        let params = analyse(
            &["positional"],
            json!({
                "level": {"action": "get", "key": "level", "number": 1, "defaultValue": 3},
                "mode": {"action": "set", "key": "fast", "value": "speed", "defaultValue": "normal"}
            }),
        );

        assert_eq!(params.get("level"), Some(&json!(3)));
        assert_eq!(params.get("mode"), Some(&json!("normal")));
    }

    #[test]
    fn test_command_line_overrides_default() {
        let params = analyse(
            &["--level", "7", "--fast"],
            json!({
                "level": {"action": "get", "key": "level", "number": 1, "defaultValue": 3},
                "mode": {"action": "set", "key": "fast", "value": "speed", "defaultValue": "normal"}
            }),
        );

        assert_eq!(params.get("level"), Some(&json!(7)));
        assert_eq!(params.get("mode"), Some(&json!("speed")));
    }

    #[test]
    fn test_get_length_is_bounded_by_available_values() {
        let config = json!({
            "values": {"action": "get", "key": "values", "number": 3},
            "stop": {"action": "set", "key": "stop"}
        });

        let cases: Vec<(Vec<&str>, usize)> = vec![
            (vec!["--values"], 0),
            (vec!["--values", "a"], 1),
            (vec!["--values", "a", "b", "--stop"], 2),
            (vec!["--values", "a", "b", "c"], 3),
            (vec!["--values", "a", "b", "c", "d"], 3),
            (vec!["--values", "--stop", "a"], 0),
            (vec!["--values", "a", "--unknown", "b"], 1),
        ];

        for (args, expected) in cases {
            let params = analyse(&args, config.clone());
            let values = params.get("values").and_then(Value::as_array).unwrap();
            assert_eq!(values.len(), expected, "args {:?}", args);
        }
    }

    #[test]
    fn test_set_does_not_consume_tokens() {
        let params = analyse(
            &["a", "--force", "b", "c"],
            json!({"force": {"action": "set", "key": "force"}}),
        );

        assert!(params.is_set("force"));
        assert_eq!(params.arguments(), &["a", "b", "c"]);
    }

    #[test]
    fn test_numeric_coercion() {
        let params = analyse(
            &["--values", "42", "3.14", "abc"],
            json!({"values": {"action": "get", "key": "values", "number": 3}}),
        );

        let values = params.get("values").and_then(Value::as_array).unwrap();
        assert!(values[0].is_u64());
        assert_eq!(values[0], json!(42));
        assert!(values[1].is_f64());
        assert_eq!(values[1], json!(3.14));
        assert_eq!(values[2], json!("abc"));
    }

    #[test]
    fn test_get_parameters_is_idempotent() {
        let mut cmd = CmdConf::new(argv(&["--count", "5", "x", "-v"]));
        cmd.configure(json!({
            "count": {"action": "get", "key": "count", "number": 1},
            "verbose": {"action": "set", "shortKey": "v"}
        }));

        let first = cmd.get_parameters().clone();
        let second = cmd.get_parameters().clone();

        assert_eq!(first, second);
        assert_eq!(second.arguments(), &["x"]);
    }

    #[test]
    fn test_single_get_without_value_is_null() {
        let params = analyse(
            &["--count", "--verbose"],
            json!({
                "count": {"action": "get", "key": "count", "number": 1, "defaultValue": 9},
                "verbose": {"action": "set"}
            }),
        );

        assert_eq!(params.get("count"), Some(&Value::Null));
        assert!(params.is_set("verbose"));
    }

    #[test]
    fn test_flag_shaped_values_are_never_positionals() {
        let params = analyse(&["-", "--", "-5", "--dry-run", "--x=1", "-abc"], json!({}));

        assert_eq!(params.arguments(), &["-", "--", "-5", "--dry-run", "--x=1"]);
    }

    #[test]
    fn test_command_echo() {
        let params = analyse(&["--count", "5"], json!({}));

        assert_eq!(params.command(), "node script --count 5");
        assert_eq!(params.raw_arguments(), &["--count", "5"]);
    }
}

mod config_files {
    use super::*;

    fn analyse_file(path: &str, args: &[&str]) -> cmdconf::ParameterSet {
        let mut cmd = CmdConf::new(argv(args));
        cmd.configure(path);
        assert!(cmd.is_configured(), "failed to load {}", path);
        cmd.get_parameters().clone()
    }

    #[test]
    fn test_json_file() {
        let params = analyse_file(BASIC_JSON, &["-f", "a", "2", "--fast", "rest", "-v"]);

        assert_eq!(params.get("files"), Some(&json!(["a", 2])));
        assert_eq!(params.get("mode"), Some(&json!("speed")));
        assert_eq!(params.get("count"), Some(&json!(1)));
        assert!(params.is_set("verbose"));
        assert_eq!(params.arguments(), &["rest"]);
    }

    #[test]
    fn test_toml_file_matches_json_file() {
        let args = ["-c", "4", "--files", "x", "-v", "tail"];

        let from_json = analyse_file(BASIC_JSON, &args);
        let from_toml = analyse_file(BASIC_TOML, &args);

        assert_eq!(from_json, from_toml);
        assert_eq!(from_toml.get_i64("count"), Some(4));
    }

    #[test]
    fn test_invalid_entries_are_skipped() {
        let mut cmd = CmdConf::new(argv(&["--files", "a", "--quiet", "--mystery"]));
        cmd.configure("tests/fixtures/configs/invalid_entries.json");

        let rejected: Vec<&str> = cmd.rejected_entries().iter().map(|e| e.name()).collect();
        assert_eq!(rejected, vec!["files", "mystery"]);

        let params = cmd.get_parameters();
        assert!(params.is_set("quiet"));
        assert!(!params.contains("files"));
        assert!(!params.contains("mystery"));
        assert_eq!(params.arguments(), &["a"]);
    }

    #[test]
    fn test_malformed_file_leaves_analyser_unconfigured() {
        let mut cmd = CmdConf::new(argv(&["-v", "a"]));
        cmd.configure("tests/fixtures/configs/malformed.json");

        assert!(!cmd.is_configured());
        assert!(cmd.source_error().unwrap().contains("isn't correctly formed"));
        assert_eq!(cmd.get_parameters().arguments(), &["a"]);
        assert!(cmd.get_parameters().parameters().is_empty());
    }

    #[test]
    fn test_non_object_file_leaves_analyser_unconfigured() {
        let mut cmd = CmdConf::new(argv(&[]));

        let result = cmd.try_configure("tests/fixtures/configs/not_an_object.json");

        assert!(matches!(
            result,
            Err(cmdconf::ConfigSourceError::NotAnObject { .. })
        ));
    }
}
