//! Warn plugin scenarios.

use std::sync::Arc;

use save::domain::entities::Verdict;

use crate::common::*;

const SOURCE: &str = "\
package org.cqfn.save

// ;warn:4:6: Class name should be in PascalCase
class example {}
";

const REPORTED: &str = "Test1Test.java:4:6: Class name should be in PascalCase";
const EXTRA: &str = "Test1Test.java:5:1: Trailing newline";

#[test]
fn reported_warnings_match_annotations() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, WARN])
        .file("Test1Test.java", SOURCE);

    let report = suite
        .run("", Arc::new(ScriptedExecutor::printing(&[REPORTED])))
        .unwrap();

    assert_eq!(report.results().next().unwrap().verdict, Verdict::Pass(None));
}

#[test]
fn exact_match_fails_on_extra_warning() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, WARN])
        .file("Test1Test.java", SOURCE);

    let report = suite
        .run("", Arc::new(ScriptedExecutor::printing(&[REPORTED, EXTRA])))
        .unwrap();

    match &report.results().next().unwrap().verdict {
        Verdict::Fail(message) => {
            assert!(message.starts_with("Some warnings were unexpected"));
            assert!(message.contains("Trailing newline"));
        }
        other => panic!("expected failure, got {:?}", other),
    };
}

#[test]
fn subset_match_tolerates_extra_warning() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, "[warn]\nexecCmd = \"linter\"\nexactWarningsMatch = false\n"])
        .file("Test1Test.java", SOURCE);

    let report = suite
        .run("", Arc::new(ScriptedExecutor::printing(&[REPORTED, EXTRA])))
        .unwrap();

    match &report.results().next().unwrap().verdict {
        Verdict::Pass(Some(message)) => assert!(message.contains("Trailing newline")),
        other => panic!("expected pass with message, got {:?}", other),
    }
    assert!(report.is_success());
}

#[test]
fn missing_warning_fails() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, WARN])
        .file("Test1Test.java", SOURCE);

    let report = suite.run("", Arc::new(ScriptedExecutor::silent())).unwrap();

    match &report.results().next().unwrap().verdict {
        Verdict::Fail(message) => {
            assert!(message.starts_with("Some warnings were expected but not received"))
        }
        other => panic!("expected failure, got {:?}", other),
    };
}

#[test]
fn placeholder_lines_resolve_relative_to_annotation() {
    let suite = Suite::new();
    suite
        .config(
            "",
            &[GENERAL, "[warn]\nexecCmd = \"linter\"\nlinePlaceholder = \"$l\"\n"],
        )
        .file(
            "Test1Test.kt",
            "package a\n\n\n\n// ;warn:$l+1:1: Class name shouldn't have a number\nclass Test1 {}\n",
        );

    let report = suite
        .run(
            "",
            Arc::new(ScriptedExecutor::printing(&[
                "Test1Test.kt:6:1: Class name shouldn't have a number",
            ])),
        )
        .unwrap();

    assert_eq!(report.results().next().unwrap().verdict, Verdict::Pass(None));
}

#[test]
fn tool_output_with_paths_is_matched_by_file_name() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, WARN])
        .file("nested/Test1Test.java", SOURCE);
    let reported = format!(
        "{}:4:6: Class name should be in PascalCase",
        suite.path("nested/Test1Test.java").display()
    );

    let report = suite
        .run("", Arc::new(ScriptedExecutor::printing(&[reported.as_str()])))
        .unwrap();

    assert_eq!(report.results().next().unwrap().verdict, Verdict::Pass(None));
}
