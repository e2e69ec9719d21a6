use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CLEAN_CATALOG, CliTest};

const BROKEN_CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ka_GE">
<context>
    <name>QMessageBox</name>
    <message>
        <source>Save changes to %1?</source>
        <translation>შევინახო ცვლილებები?</translation>
    </message>
    <message>
        <source>Discard</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Save changes to %1?</source>
        <translation>შევინახო ცვლილებები %1-ში?</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;

    let run = test.run(&["check"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "✓ Checked 1 catalog - no issues found\n");
    assert_eq!(run.stderr, "");

    Ok(())
}

#[test]
fn test_no_catalogs() -> Result<()> {
    let test = CliTest::with_file("src/main.ts", "export const answer = 42;\n")?;

    let run = test.run(&["check"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "✓ Checked 0 catalogs - no issues found\n");

    Ok(())
}

#[test]
fn test_reports_all_rules() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", BROKEN_CATALOG)?;

    let run = test.run(&["check"])?;

    assert_eq!(run.code, Some(1));
    assert!(
        run.stdout
            .contains("error: \"Save changes to %1?\"  placeholder\n  --> ./nls/qt_ka.ts:6:1\n"),
        "{}",
        run.stdout
    );
    assert!(run.stdout.contains("= note: in QMessageBox, missing %1"));
    assert!(
        run.stdout
            .contains("warning: \"Discard\"  unfinished\n  --> ./nls/qt_ka.ts:10:1\n")
    );
    assert!(
        run.stdout
            .contains("error: \"Save changes to %1?\"  duplicate\n  --> ./nls/qt_ka.ts:6:1\n")
    );
    assert!(
        run.stdout
            .contains("= note: in QMessageBox, redefined at line 14")
    );
    assert!(run.stdout.contains("= hint: lookups use the last definition"));
    assert!(
        run.stdout
            .ends_with("✘ 3 problems (2 errors, 1 warning)\n")
    );

    Ok(())
}

#[test]
fn test_selected_rules_only() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", BROKEN_CATALOG)?;

    let run = test.run(&["check", "unfinished", "unfinished"])?;

    // Only a warning remains, so the run succeeds
    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("warning: \"Discard\"  unfinished"));
    assert!(!run.stdout.contains("placeholder"));
    assert!(run.stdout.ends_with("✘ 1 problem (0 errors, 1 warning)\n"));

    Ok(())
}

#[test]
fn test_unknown_rule_is_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let run = test.run(&["check", "spelling"])?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("invalid value 'spelling'"));

    Ok(())
}

#[test]
fn test_numerus_count() -> Result<()> {
    let test = CliTest::with_file(
        "nls/qt_ka.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="ka_GE">
<context>
    <name>QFileDialog</name>
    <message numerus="yes">
        <source>%n file(s)</source>
        <translation>
            <numerusform>%n ფაილი</numerusform>
            <numerusform>%n ფაილი</numerusform>
            <numerusform>%n ფაილი</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let run = test.run(&["check", "numerus-count"])?;

    assert_eq!(run.code, Some(1));
    assert!(
        run.stdout
            .contains("= note: in QFileDialog, ka_GE expects 2 numerus form(s), found 3")
    );

    Ok(())
}

#[test]
fn test_config_ignore_contexts() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", BROKEN_CATALOG)?;
    test.write_file(".tslingrc.json", r#"{ "ignoreContexts": ["QMessageBox"] }"#)?;

    let run = test.run(&["check"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "✓ Checked 1 catalog - no issues found\n");

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;
    test.write_file("third_party/qt_ka.ts", BROKEN_CATALOG)?;
    test.write_file(".tslingrc.json", r#"{ "ignores": ["third_party/**"] }"#)?;

    let run = test.run(&["check"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "✓ Checked 1 catalog - no issues found\n");

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;
    test.write_file(
        "nls/qt_de.ts",
        "<!DOCTYPE TS>\n<TS version=\"2.1\" language=\"de\">\n<context>\n",
    )?;

    let run = test.run(&["check"])?;

    assert_eq!(run.code, Some(1));
    assert!(run.stdout.contains("parse-error"), "{}", run.stdout);
    assert!(run.stdout.contains("--> ./nls/qt_de.ts"));
    assert!(run.stdout.ends_with("✘ 1 problem (1 error, 0 warnings)\n"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".tslingrc.json", "{ \"includes\": ")?;

    let run = test.run(&["check"])?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.starts_with("Error: "), "{}", run.stderr);
    assert_eq!(run.stdout, "");

    Ok(())
}

#[test]
fn test_path_argument() -> Result<()> {
    let test = CliTest::with_file("app/nls/qt_ka.ts", BROKEN_CATALOG)?;

    let run = test.run(&["check", "--path", "app", "unfinished"])?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("--> app/nls/qt_ka.ts:10:1"));

    Ok(())
}
