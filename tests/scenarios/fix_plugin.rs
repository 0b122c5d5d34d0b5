//! Fix plugin scenarios.

use std::sync::Arc;

use save::domain::entities::Verdict;

use crate::common::*;

#[test]
fn fixed_copy_matching_expected_passes() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .file("Test1Test.java", "Original file")
        .file("Test1Expected.java", "Expected file");

    let report = suite
        .run("", Arc::new(ScriptedExecutor::overwriting(", ", "Expected file")))
        .unwrap();

    let results: Vec<_> = report.results().collect();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].verdict, Verdict::Pass(None));
    assert_eq!(
        results[0].resources,
        [suite.path("Test1Expected.java"), suite.path("Test1Test.java")]
    );
    assert!(report.is_success());
}

#[test]
fn unpaired_resources_are_not_units() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .file("Test1Test.java", "a")
        .file("Test1Expected.java", "a")
        .file("Something.java", "b")
        .file("SomethingExpected.java", "b");
    let executor = Arc::new(ScriptedExecutor::silent());

    let report = suite.run("", executor.clone()).unwrap();

    assert_eq!(report.summary().total(), 1);
    assert_eq!(executor.commands().len(), 1);
    assert!(executor.commands()[0][1].ends_with("Test1Test.java"));
}

#[test]
fn diverging_fix_fails_with_rendered_delta() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .file("Test1Test.java", "Original file")
        .file("Test1Expected.java", "Expected file");

    let report = suite.run("", Arc::new(ScriptedExecutor::silent())).unwrap();

    let result = report.results().next().unwrap();
    assert_eq!(
        result.verdict,
        Verdict::Fail(
            "ChangeDelta, position 0, lines:\n-[Expected file]\n+<Original file>".to_string()
        )
    );
    assert!(!report.is_success());
}

#[test]
fn tool_failure_crashes_units_without_aborting() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .file("ATest.java", "x")
        .file("AExpected.java", "x")
        .file("BTest.java", "x")
        .file("BExpected.java", "x");
    let executor = Arc::new(ScriptedExecutor::failing(2));

    let report = suite.run("", executor.clone()).unwrap();

    assert_eq!(report.summary().crashed, 2);
    // Batch size 1: the second unit still ran after the first crashed.
    assert_eq!(executor.commands().len(), 2);
    let crash = report.results().next().unwrap();
    assert_eq!(crash.debug_info.stdout.as_deref(), Some("tool crashed"));
}

#[test]
fn batch_size_groups_arguments() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, "[fix]\nexecCmd = \"fixer\"\nbatchSize = 3\nbatchSeparator = \";\"\n"])
        .file("ATest.kt", "x")
        .file("AExpected.kt", "x")
        .file("BTest.kt", "x")
        .file("BExpected.kt", "x");
    let executor = Arc::new(ScriptedExecutor::silent());

    let report = suite.run("", executor.clone()).unwrap();

    let commands = executor.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(file_arguments(&commands[0], ";").len(), 2);
    assert_eq!(report.summary().passed, 2);
}

#[test]
fn malformed_group_aborts_the_run() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .file("ATest.java", "x")
        .file("ATest.kt", "x")
        .file("AExpected.java", "x");

    let err = suite.run("", Arc::new(ScriptedExecutor::silent())).unwrap_err();

    assert!(matches!(err, save::SaveError::MalformedResourceGroup { .. }));
}
