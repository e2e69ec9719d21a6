use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CLEAN_CATALOG, CliTest};

#[test]
fn test_dump_json() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", CLEAN_CATALOG)?;

    let run = test.run(&["dump", "nls/qt_ka.ts"])?;
    assert_eq!(run.code, Some(0));

    let parsed: Value = serde_json::from_str(&run.stdout).context("dump should print JSON")?;
    assert_eq!(parsed["version"], "2.1");
    assert_eq!(parsed["language"], "ka_GE");
    assert!(parsed.get("sourceLanguage").is_none());

    let contexts = parsed["contexts"].as_array().context("contexts array")?;
    assert_eq!(contexts.len(), 2);
    assert_eq!(contexts[0]["name"], "MAC_APPLICATION_MENU");
    assert_eq!(
        contexts[0]["messages"][0],
        json!({
            "source": "Services",
            "translation": { "status": "finished", "value": "სერვისები" }
        })
    );
    assert_eq!(
        contexts[1]["messages"][0],
        json!({
            "source": "%n file(s)",
            "numerus": true,
            "translation": {
                "status": "finished",
                "value": ["%n ფაილი", "%n ფაილი"]
            }
        })
    );

    Ok(())
}

#[test]
fn test_dump_invalid_catalog() -> Result<()> {
    let test = CliTest::with_file("nls/qt_ka.ts", "<TS version=\"2.1\"><context>")?;

    let run = test.run(&["dump", "nls/qt_ka.ts"])?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.starts_with("Error: "), "{}", run.stderr);
    assert!(run.stderr.contains("nls/qt_ka.ts"), "{}", run.stderr);
    assert_eq!(run.stdout, "");

    Ok(())
}
