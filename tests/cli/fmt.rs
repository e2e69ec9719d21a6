use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CLEAN_CATALOG, CliTest};

/// Same content as the clean catalog with attribute quotes and indentation
/// a hand editor might leave behind.
const MESSY_CATALOG: &str = r#"<?xml version='1.0' encoding='utf-8'?>
<!DOCTYPE TS>
<TS version='2.1' language='ka_GE'>
<context>
  <name>MAC_APPLICATION_MENU</name>
  <message>
    <source>Services</source>
    <translation>სერვისები</translation>
  </message>
  <message>
    <source>Hide %1</source>
    <translation>%1-ის დამალვა</translation>
  </message>
</context>
<context>
  <name>QFileDialog</name>
  <message numerus='yes'>
    <source>%n file(s)</source>
    <translation>
      <numerusform>%n ფაილი</numerusform>
      <numerusform>%n ფაილი</numerusform>
    </translation>
  </message>
</context>
</TS>
"#;

#[test]
fn test_fmt_already_formatted() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;

    let run = test.run(&["fmt"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "✓ 1 catalog already formatted\n");

    Ok(())
}

#[test]
fn test_fmt_dry_run() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", MESSY_CATALOG)?;

    let run = test.run(&["fmt"])?;

    assert_eq!(run.code, Some(1));
    assert_eq!(
        run.stdout,
        "Would reformat 1 file:\n  ./nls/qt_ka.ts\nRun with --apply to rewrite them.\n"
    );
    // Dry run leaves the file alone
    assert_eq!(test.read_file("nls/qt_ka.ts")?, MESSY_CATALOG);

    Ok(())
}

#[test]
fn test_fmt_apply() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", MESSY_CATALOG)?;

    let run = test.run(&["fmt", "--apply"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "Reformatted 1 file:\n  ./nls/qt_ka.ts\n");
    assert_eq!(test.read_file("nls/qt_ka.ts")?, CLEAN_CATALOG);

    // Second run has nothing left to do
    let run = test.run(&["fmt"])?;
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "✓ 1 catalog already formatted\n");

    Ok(())
}

#[test]
fn test_fmt_apply_keeps_extras_and_length_variants() -> Result<()> {
    let test = CliTest::with_file(
        "nls/qt_de.ts",
        r#"<?xml version='1.0' encoding='utf-8'?>
<!DOCTYPE TS>
<TS version='2.1' language='de_DE'>
<context>
  <name>QFileDialog</name>
  <message>
    <source>Long text</source>
    <translation variants='yes'><lengthvariant>Langer Text</lengthvariant><lengthvariant>Lang</lengthvariant></translation>
    <userdata>keep me</userdata>
    <extra-po-flags>c-format</extra-po-flags>
  </message>
</context>
</TS>
"#,
    )?;

    let run = test.run(&["fmt", "--apply"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(
        test.read_file("nls/qt_de.ts")?,
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE">
<context>
    <name>QFileDialog</name>
    <message>
        <source>Long text</source>
        <translation variants="yes">
            <lengthvariant>Langer Text</lengthvariant>
            <lengthvariant>Lang</lengthvariant>
        </translation>
        <userdata>keep me</userdata>
        <extra-po-flags>c-format</extra-po-flags>
    </message>
</context>
</TS>
"#
    );

    // Lookup sees the primary variant
    let run = test.run(&[
        "lookup",
        "nls/qt_de.ts",
        "--context",
        "QFileDialog",
        "--source",
        "Long text",
    ])?;
    assert_eq!(run.stdout, "Langer Text\n");

    Ok(())
}
