//! Fix-and-warn scenarios.

use std::sync::Arc;

use save::config::PluginKind;
use save::domain::entities::Verdict;
use save::domain::ports::ExecutionOutput;

use crate::common::*;

const EXPECTED: &str = "\
// ;warn:3:1: Class name should be in PascalCase
package a
class example {}
";

const FIXED: &str = "package a\nclass example {}\n";

#[test]
fn fix_then_warn_on_fixed_copy() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX_AND_WARN])
        .file("Test1Test.java", "package a\nclass  example{}\n")
        .file("Test1Expected.java", EXPECTED);
    let executor = Arc::new(ScriptedExecutor::new(|command| {
        if command[0] == "fixer" {
            for file in file_arguments(command, ", ") {
                std::fs::write(file, FIXED).unwrap();
            }
        }
        Ok(ExecutionOutput::default())
    }));

    let report = suite.run("", executor.clone()).unwrap();

    let plugin = &report.nodes[0].plugins[0];
    assert_eq!(plugin.kind, PluginKind::FixAndWarn);
    assert_eq!(plugin.results.len(), 2);
    // Annotations were stripped from the expected file while diffing.
    assert_eq!(plugin.results[0].verdict, Verdict::Pass(None));
    assert_eq!(plugin.results[0].resources.len(), 2);
    // Warnings are checked on the fixed copy.
    let fixed_copy = &plugin.results[1].resources[0];
    assert!(fixed_copy.starts_with(suite.scratch.path()));
    assert!(fixed_copy.ends_with("FixAndWarnPlugin/FixPlugin/Test1Test.java"));
    assert_eq!(plugin.results[1].verdict, Verdict::Pass(None));
    assert_eq!(suite.read("Test1Expected.java"), EXPECTED);

    let commands = executor.commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0][0], "fixer");
    assert_eq!(commands[1], ["linter".to_string(), fixed_copy.display().to_string()]);
}

#[test]
fn warnings_reported_on_fixed_copy_are_matched() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX_AND_WARN])
        .file("Test1Test.java", "// ;warn:2:1: Bad name\nclass example {}\n")
        .file("Test1Expected.java", "class example {}\n");
    let executor = Arc::new(ScriptedExecutor::new(|command| {
        if command[0] == "fixer" {
            return Ok(ExecutionOutput::default());
        }
        Ok(ExecutionOutput {
            exit_code: 0,
            stdout: vec!["/tmp/anywhere/Test1Test.java:2:1: Bad name".to_string()],
            stderr: Vec::new(),
        })
    }));

    let report = suite.run("", executor).unwrap();

    let results = &report.nodes[0].plugins[0].results;
    // The untouched copy still carries its annotation, so the diff fails.
    assert!(matches!(results[0].verdict, Verdict::Fail(_)));
    assert_eq!(results[1].verdict, Verdict::Pass(None));
}

#[test]
fn expected_file_restored_after_tool_failure() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX_AND_WARN])
        .file("Test1Test.java", "package a\n")
        .file("Test1Expected.java", EXPECTED);

    let report = suite.run("", Arc::new(ScriptedExecutor::failing(1))).unwrap();

    assert!(report.results().all(|r| matches!(r.verdict, Verdict::Crash(_))));
    assert_eq!(suite.read("Test1Expected.java"), EXPECTED);
}
