//! End-to-end tests for analysis and edit application.
//!
//! These drive the public API only: parse, run every rule for the file
//! kind, apply the resulting edits and analyze again.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;
use tvlint_core::{
    AnalysisResult, FileKind, Linter, LinterConfig, LinterError, Severity, analyze, apply_edits,
};

fn messages(result: &AnalysisResult) -> Vec<(&str, &str)> {
    result
        .diagnostics
        .iter()
        .map(|d| (d.rule_id.as_str(), d.message.as_str()))
        .collect()
}

const SAMPLE_TS: &str = r#"import { helper } from "../utils/helper";
import { parse } from "./lib/parser.ts";

function load(input: any): any {
    return helper(input);
}

const onHandleClick = () => {};

switch (load(1)) {
    case "a":
        break;
    case "a":
        break;
}
"#;

#[test]
fn analyze_is_pure() {
    let first = analyze(SAMPLE_TS, FileKind::Ts);
    let second = analyze(SAMPLE_TS, FileKind::Ts);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn sample_reports_every_rule_in_order() {
    let result = analyze(SAMPLE_TS, FileKind::Ts);

    assert_eq!(
        messages(&result),
        vec![
            ("no-any-type", "use of type 'any' is forbidden"),
            ("no-any-return-type", "return type 'any' is forbidden"),
            (
                "import-folder-path",
                "import must reference a folder, not a file: ./lib/parser.ts"
            ),
            ("handler-naming", "handler name must start with 'handle'"),
            ("switch-duplicate-case", "duplicate case condition: '\"a\"'"),
            ("switch-duplicate-case", "duplicate case condition: '\"a\"'"),
            ("switch-default", "switch statement is missing a default case"),
        ]
    );
    assert_eq!(result.edits.len(), 1);
    assert_eq!(result.edits[0].new_text, "./../utils/helper");
}

#[test]
fn annotated_function_has_no_return_type_diagnostic() {
    let without = analyze("function one() { return 1; }", FileKind::Ts);
    assert_eq!(without.diagnostics.len(), 1);
    assert_eq!(
        without.diagnostics[0].span.slice("function one() { return 1; }"),
        Some("one")
    );

    let with = analyze("function one(): number { return 1; }", FileKind::Ts);
    assert!(with.diagnostics.is_empty());
}

#[test]
fn any_parameter_is_flagged_but_any_array_is_not() {
    let flagged = analyze("function f(x: any) {}", FileKind::Ts);
    assert_eq!(messages(&flagged), vec![("no-any-type", "use of type 'any' is forbidden")]);

    let clean = analyze("function f(x: any[]) {}", FileKind::Ts);
    assert!(clean.is_empty());
}

#[test]
fn constructors_and_accessors_have_no_return_type_diagnostics() {
    let source = "class A {\n  constructor(x: number) { if (!x) return; }\n  set v(x: number) { if (!x) return; }\n  get w() { return 1; }\n  get z(): any { return 1; }\n  run() { return 1; }\n}";
    let result = analyze(source, FileKind::Ts);

    let flagged: Vec<_> = result
        .diagnostics
        .iter()
        .map(|d| (d.rule_id.as_str(), d.span.slice(source).unwrap()))
        .collect();
    assert_eq!(flagged, vec![("explicit-return-type", "run")]);
}

#[rstest]
#[case(FileKind::Ts)]
#[case(FileKind::Tsx)]
fn switch_default_warning(#[case] kind: FileKind) {
    let missing = analyze("switch(x){case 1: break;}", kind);
    assert_eq!(missing.diagnostics.len(), 1);
    assert_eq!(missing.diagnostics[0].severity, Severity::Warning);
    assert_eq!(missing.diagnostics[0].span.slice("switch(x){case 1: break;}"), Some("switch"));

    let present = analyze("switch(x){case 1: break; default: break;}", kind);
    assert!(present.diagnostics.is_empty());
}

#[test]
fn duplicate_cases_reference_condition_text() {
    let source = "switch(x){case 1: break; case 1: break; case 2: break;}";
    let result = analyze(source, FileKind::Ts);

    let duplicates: Vec<_> = result
        .diagnostics
        .iter()
        .filter(|d| d.rule_id == "switch-duplicate-case")
        .collect();
    assert_eq!(duplicates.len(), 2);
    for diagnostic in duplicates {
        assert_eq!(diagnostic.span.slice(source), Some("1"));
        assert_eq!(diagnostic.message, "duplicate case condition: '1'");
    }
}

#[test]
fn components_import_produces_nothing() {
    let result = analyze("import Button from \"./components/Button\";", FileKind::Ts);
    assert!(result.is_empty());
}

#[test]
fn map_key_highlights_only_in_tsx() {
    let keyed = analyze("items.map(i => <li key={i.id}>{i.name}</li>);", FileKind::Tsx);
    assert!(keyed.highlights.is_empty());

    let source = "items.map(i => { return <li>{i.name}</li>; });";
    let unkeyed = analyze(source, FileKind::Tsx);
    assert!(unkeyed.diagnostics.is_empty());
    assert_eq!(unkeyed.highlights.len(), 1);
    assert_eq!(unkeyed.highlights[0].span.slice(source), Some("map"));
}

#[test]
fn ts_only_rules_skip_tsx() {
    let source = "function f(x: any): any { return x; }";
    assert_eq!(analyze(source, FileKind::Ts).diagnostics.len(), 2);
    assert!(analyze(source, FileKind::Tsx).is_empty());
}

#[test]
fn edits_are_idempotent_after_application() {
    let source = "import a from '../x';\nimport b from '../y/z';\n";
    let first = analyze(source, FileKind::Ts);
    assert_eq!(first.edits.len(), 2);

    let fixed = apply_edits(source, &first.edits).unwrap();
    assert_eq!(fixed, "import a from './../x';\nimport b from './../y/z';\n");

    let second = analyze(&fixed, FileKind::Ts);
    assert!(second.edits.is_empty());
}

#[test]
fn parse_failure_yields_empty_result() {
    let broken = "function (: {";
    assert!(analyze(broken, FileKind::Ts).is_empty());

    let linter = Linter::new(LinterConfig::default()).unwrap();
    assert!(matches!(
        linter.try_analyze(broken, FileKind::Ts),
        Err(LinterError::Parse(_))
    ));
}

#[test]
fn diagnostics_are_located_on_the_same_text() {
    let source = "const x = 1;\r\nconst y = 2;\nswitch (x) {}";
    let result = analyze(source, FileKind::Ts);

    let loc = result.diagnostics[0].loc.unwrap();
    assert_eq!((loc.start.line, loc.start.column), (2, 0));
    assert_eq!((loc.end.line, loc.end.column), (2, 6));
}

#[test]
fn diagnostic_lookup_by_offset() {
    let source = "let value: any = 1;";
    let result = analyze(source, FileKind::Ts);

    let offset = source.find("any").unwrap() as u32;
    assert_eq!(
        result.diagnostic_at(offset).map(|d| d.rule_id.as_str()),
        Some("no-any-type")
    );
    assert!(result.diagnostic_at(0).is_none());
}

#[test]
fn analysis_result_serializes_for_hosts() {
    let result = analyze("switch (x) {}", FileKind::Ts);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["diagnostics"][0]["rule_id"], "switch-default");
    assert_eq!(json["diagnostics"][0]["severity"], "warning");
    assert_eq!(json["diagnostics"][0]["span"]["start"], 0);
    assert_eq!(json["diagnostics"][0]["loc"]["end"]["column"], 6);
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn analyze_file_infers_kind_from_extension() {
    let dir = TempDir::new().unwrap();
    let linter = Linter::new(LinterConfig::default()).unwrap();

    let ts = write(&dir, "a.ts", "let a: any = 1;");
    let tsx = write(&dir, "b.tsx", "let a: any = 1;");

    assert_eq!(linter.analyze_file(&ts).unwrap().diagnostics.len(), 1);
    assert!(linter.analyze_file(&tsx).unwrap().is_empty());
}

#[test]
fn analyze_file_rejects_unsupported_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let linter = Linter::new(LinterConfig::default()).unwrap();

    let md = write(&dir, "notes.md", "# notes");
    assert!(matches!(linter.analyze_file(&md), Err(LinterError::File(_))));

    let missing = dir.path().join("missing.ts");
    assert!(matches!(linter.analyze_file(&missing), Err(LinterError::File(_))));

    let folder = dir.path().join("folder.ts");
    fs::create_dir(&folder).unwrap();
    assert!(matches!(linter.analyze_file(&folder), Err(LinterError::File(_))));
}

#[test]
fn analyze_files_keeps_input_order() {
    let dir = TempDir::new().unwrap();
    let linter = Linter::new(LinterConfig::default()).unwrap();

    let paths: Vec<PathBuf> = (0..8)
        .map(|i| {
            let body = if i % 2 == 0 { "switch (x) {}" } else { "const x = 1;" };
            write(&dir, &format!("file{i}.ts"), body)
        })
        .chain(std::iter::once(dir.path().join("missing.ts")))
        .collect();

    let results = linter.analyze_files(&paths);
    assert_eq!(results.len(), paths.len());

    for (i, (path, result)) in results.iter().enumerate() {
        assert_eq!(path, &paths[i]);
        if i == 8 {
            assert!(result.is_err());
        } else {
            let expected = if i % 2 == 0 { 1 } else { 0 };
            assert_eq!(result.as_ref().unwrap().diagnostics.len(), expected);
        }
    }
}

#[test]
fn analyze_files_empty_list() {
    let linter = Linter::new(LinterConfig::default()).unwrap();
    assert!(linter.analyze_files(&[]).is_empty());
}

#[test]
fn config_file_drives_the_linter() {
    let dir = TempDir::new().unwrap();
    let config_path = write(
        &dir,
        "tvlint.jsonc",
        r#"{
            // quieter setup
            "options": {
                "switch-default": "off",
                "handler-naming": "warning",
            },
        }"#,
    );

    let linter = Linter::new(LinterConfig::from_file(&config_path).unwrap()).unwrap();
    let result = linter.analyze("switch (x) {}\nclickHandler();", FileKind::Ts);

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].rule_id, "handler-naming");
    assert_eq!(result.diagnostics[0].severity, Severity::Warning);
}
