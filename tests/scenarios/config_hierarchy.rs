//! Config hierarchy scenarios.

use std::sync::Arc;

use save::config::PluginKind;
use save::domain::entities::Verdict;
use save::SaveError;

use crate::common::*;

#[test]
fn nested_scope_resources_stay_with_their_config() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .file("RootTest.txt", "x")
        .file("RootExpected.txt", "x")
        .config("sub", &["[general]\nsuiteName = \"Sub\"\n"])
        .file("sub/ResourceTest.txt", "x")
        .file("sub/ResourceExpected.txt", "x");

    let report = suite.run("", Arc::new(ScriptedExecutor::silent())).unwrap();

    assert_eq!(report.nodes.len(), 2);
    let root_files: Vec<_> = report.nodes[0]
        .plugins
        .iter()
        .flat_map(|p| p.results.iter())
        .flat_map(|r| r.resources.iter())
        .collect();
    assert!(root_files.iter().all(|f| !f.starts_with(suite.path("sub"))));
    assert_eq!(root_files.len(), 2);
}

#[test]
fn child_sections_override_inherited_ones() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .config("sub", &["[fix]\nexecCmd = \"other-fixer\"\n"])
        .file("sub/ATest.txt", "x")
        .file("sub/AExpected.txt", "x");
    let executor = Arc::new(ScriptedExecutor::silent());

    suite.run("sub", executor.clone()).unwrap();

    let commands = executor.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0][0], "other-fixer");
}

#[test]
fn plugins_run_in_kind_order() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, WARN, FIX])
        .file("ATest.java", "x")
        .file("AExpected.java", "x");

    let report = suite.run("", Arc::new(ScriptedExecutor::silent())).unwrap();

    let kinds: Vec<PluginKind> = report.nodes[0].plugins.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, [PluginKind::Fix, PluginKind::Warn]);
    // Warn picks up ATest.java only; it has no annotations and the tool is silent.
    assert_eq!(report.nodes[0].plugins[1].results[0].verdict, Verdict::Pass(None));
}

#[test]
fn resource_entry_runs_only_its_own_unit() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .config("sub", &["[general]\nsuiteName = \"Sub\"\n"])
        .file("sub/ATest.txt", "x")
        .file("sub/AExpected.txt", "x")
        .file("sub/BTest.txt", "x")
        .file("sub/BExpected.txt", "x")
        .config("sub/deeper", &[])
        .file("sub/deeper/CTest.txt", "x")
        .file("sub/deeper/CExpected.txt", "x");
    let executor = Arc::new(ScriptedExecutor::silent());

    let report = suite
        .run_filtered("sub/ATest.txt", executor.clone(), &["BTest"])
        .unwrap();

    assert_eq!(report.nodes.len(), 1);
    assert_eq!(report.nodes[0].suite_name, "Sub");
    let results: Vec<_> = report.results().collect();
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].resources,
        [suite.path("sub/AExpected.txt"), suite.path("sub/ATest.txt")]
    );
    assert_eq!(executor.commands().len(), 1);
}

#[test]
fn relative_segments_in_entry_keep_parent_configs() {
    let suite = Suite::new();
    suite
        .config("", &[GENERAL, FIX])
        .config("sub", &["[general]\nsuiteName = \"Sub\"\n"])
        .file("sub/ATest.txt", "x")
        .file("sub/AExpected.txt", "x");

    let report = suite
        .run("sub/../sub/.", Arc::new(ScriptedExecutor::silent()))
        .unwrap();

    assert_eq!(report.nodes.len(), 1);
    assert_eq!(report.nodes[0].location, suite.path("sub/save.toml"));
    assert!(report.is_success());
}

#[test]
fn directory_without_config_is_an_error() {
    let suite = Suite::new();
    suite.file("plain/ATest.txt", "x");

    let err = suite.run("plain", Arc::new(ScriptedExecutor::silent())).unwrap_err();

    assert!(matches!(err, SaveError::ConfigNotFound { .. }));
}

#[test]
fn unknown_keys_are_reported_not_fatal() {
    let suite = Suite::new();
    suite.config("", &[GENERAL, "colour = \"blue\"\n", FIX]);

    let report = suite.run("", Arc::new(ScriptedExecutor::silent())).unwrap();

    assert_eq!(report.config_warnings.len(), 1);
    assert_eq!(report.config_warnings[0].key, "general.colour");
}
