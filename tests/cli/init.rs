use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["localesDir"], "public/locales");
    assert_eq!(parsed["sourceDir"], "src");
    assert!(parsed["ignores"].is_array());
    assert!(parsed["dynamicKeys"].is_array());
    assert!(parsed["translations"]["submit"]["jp"].is_string());

    assert!(content.contains("\n  \"localesDir\""), "2-space indentation");
    assert!(content.ends_with('\n'));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created"));
    assert!(test.root().join(".i18nsweeprc.json").exists());

    let content = test.read_file(".i18nsweeprc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsweeprc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 1
    ----- stdout -----
    error: .i18nsweeprc.json already exists

    ----- stderr -----
    ");

    assert_eq!(test.read_file(".i18nsweeprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_usable() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a":"A"}"#)])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (_, code) = run(cmd)?;
    assert_eq!(code, 0);

    let (stdout, code) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}
