use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("includes").is_some(),
        "Config should have 'includes' field"
    );
    assert!(
        parsed.get("ignoreContexts").is_some(),
        "Config should have 'ignoreContexts' field"
    );
    assert_eq!(parsed["checkPlaceholders"], Value::Bool(true));

    // 2-space indentation
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let run = test.run(&["init"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "✓ Created .tslingrc.json\n");
    assert!(test.root().join(".tslingrc.json").exists());

    let content = test.read_file(".tslingrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tslingrc.json", "{}")?;

    let run = test.run(&["init"])?;

    assert_eq!(run.code, Some(1));
    assert_eq!(run.stdout, "");
    assert_eq!(run.stderr, "Error: .tslingrc.json already exists\n");
    // Existing config is untouched
    assert_eq!(test.read_file(".tslingrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let run = test.run(&["--help"])?;

    assert_eq!(run.code, Some(0));
    for command in ["check", "lookup", "stats", "dump", "fmt", "init"] {
        assert!(run.stdout.contains(command), "missing {command} in help");
    }

    Ok(())
}
