use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CLEAN_CATALOG, CliTest};

#[test]
fn test_finished_translation() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;

    let run = test.run(&[
        "lookup",
        "nls/qt_ka.ts",
        "--context",
        "MAC_APPLICATION_MENU",
        "--source",
        "Services",
    ])?;

    assert_eq!(run.code, Some(0));
    assert_snapshot!(run.stdout.trim_end(), @"სერვისები");

    Ok(())
}

#[test]
fn test_missing_message_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;

    let run = test.run(&[
        "lookup",
        "nls/qt_ka.ts",
        "--context",
        "MAC_APPLICATION_MENU",
        "--source",
        "Quit %1",
    ])?;

    // A fallback is not an error
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "Quit %1\n");

    Ok(())
}

#[test]
fn test_wrong_context_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;

    let run = test.run(&[
        "lookup",
        "nls/qt_ka.ts",
        "--context",
        "QFileDialog",
        "--source",
        "Services",
    ])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "Services\n");

    Ok(())
}

#[test]
fn test_numerus_lookup() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;

    let run = test.run(&[
        "lookup",
        "nls/qt_ka.ts",
        "--context",
        "QFileDialog",
        "--source",
        "%n file(s)",
        "-n",
        "5",
    ])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "5 ფაილი\n");

    Ok(())
}

#[test]
fn test_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let run = test.run(&[
        "lookup",
        "nls/qt_ka.ts",
        "--context",
        "QFileDialog",
        "--source",
        "Open",
    ])?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.starts_with("Error: "), "{}", run.stderr);

    Ok(())
}

#[test]
fn test_source_is_required() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;

    let run = test.run(&["lookup", "nls/qt_ka.ts", "--context", "QFileDialog"])?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("--source <SOURCE>"));

    Ok(())
}
