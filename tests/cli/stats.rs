use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CLEAN_CATALOG, CliTest};

#[test]
fn test_stats_table() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;
    test.write_file(
        "nls/qt_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE">
<context>
    <name>QFileDialog</name>
    <message>
        <source>Open</source>
        <translation>Öffnen</translation>
    </message>
    <message>
        <source>Save</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Detail View</source>
        <translation type="vanished">Detailansicht</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let run = test.run(&["stats"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(
        run.stdout,
        "File            Language  Messages  Finished  Unfinished  Obsolete    Done\n\
         ./nls/qt_de.ts  de_DE            3         1           1         1   50.0%\n\
         ./nls/qt_ka.ts  ka_GE            3         3           0         0  100.0%\n\
         \n\
         6 messages in 2 catalogs\n"
    );

    Ok(())
}

#[test]
fn test_stats_without_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let run = test.run(&["stats"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "No catalogs found\n");

    Ok(())
}

#[test]
fn test_stats_default_language() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", &CLEAN_CATALOG.replace(" language=\"ka_GE\"", ""))?;
    test.write_file(".tslingrc.json", r#"{ "defaultLanguage": "ka" }"#)?;

    let run = test.run(&["stats"])?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("./nls/qt_ka.ts  ka  "), "{}", run.stdout);

    Ok(())
}
