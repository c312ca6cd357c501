use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run, run_stderr};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"nav": {"home": "Home"}}"#),
        ("jp", r#"{"nav": {"home": "ホーム"}}"#),
    ])?;
    test.write_file("src/app.tsx", r#"export const Nav = () => <a>{t("nav.home")}</a>;"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 source file, 2 locale files - no issues found

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_reports_unused_and_inconsistent() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"nav": {"home": "Home", "old": "Old"}}"#),
        ("jp", r#"{"nav": {"home": "ホーム"}}"#),
    ])?;
    test.write_file("src/app.tsx", r#"t("nav.home")"#)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "nav.old"  inconsistent-key
      --> ./public/locales/en.json
      = note: missing in: jp (present in: en)

    warning: "nav.old"  unused-key
      --> ./public/locales/en.json
      = note: defined in: en

    ✘ 2 problems (1 error, 1 warning)

    Missing translations by language:
      jp: 1 key(s)

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_check_unused_key_alone_fails() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A", "b": "B"}"#)])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let (stdout, code) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("warning: \"b\"  unused-key"));
    Ok(())
}

#[test]
fn test_check_ignores_dynamic_templates() -> Result<()> {
    let test = CliTest::with_locales(&[(
        "en",
        r#"{"about": {"genres": {"idol": {"title": "Idol"}}}}"#,
    )])?;
    test.write_file(
        "src/genres.tsx",
        "genres.map((g) => t(`about.genres.${g}.title`))",
    )?;

    let (stdout, code) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("warning: \"about.genres.idol.title\"  unused-key"));
    Ok(())
}

#[test]
fn test_check_alias() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#)])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let mut cmd = test.command();
    cmd.arg("check-i18n");
    let (_, code) = run(cmd)?;

    assert_eq!(code, 0);
    Ok(())
}

#[test]
fn test_check_malformed_locale_is_reported() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#), ("zh", "{ not json")])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let (stdout, code) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("zh.json"));
    assert!(stdout.contains("analyzed as empty; this file will not be written"));
    // The degraded file is analyzed as `{}`.
    assert!(stdout.contains("error: \"a\"  inconsistent-key"));
    Ok(())
}

#[test]
fn test_check_missing_locales_dir_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Locales directory './public/locales' does not exist.
    Hint: Check the 'localesDir' setting or pass --locales-dir.
    ");
    Ok(())
}

#[test]
fn test_check_missing_source_dir_is_fatal() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#)])?;

    let mut cmd = test.check_command();
    cmd.args(["--source-dir", "app"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Source directory 'app' does not exist.
    Hint: Check the 'sourceDir' setting or pass --source-dir.
    ");
    Ok(())
}

#[test]
fn test_check_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsweeprc.json",
        r#"{ "localesDir": "i18n", "sourceDir": "app" }"#,
    )?;
    test.write_file("i18n/en.json", r#"{"title": "Title"}"#)?;
    test.write_file("app/page.tsx", r#"t("title")"#)?;

    let (stdout, code) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 source file, 1 locale file"));
    Ok(())
}

#[test]
fn test_check_cli_flags_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsweeprc.json", r#"{ "localesDir": "missing" }"#)?;
    test.write_file("locales/en.json", r#"{"title": "Title"}"#)?;
    test.write_file("src/page.tsx", r#"t("title")"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--locales-dir", "locales"]);
    let (_, code) = run(cmd)?;
    assert_eq!(code, 0);

    let mut cmd = test.check_command();
    cmd.env("I18N_SWEEP_LOCALES_DIR", "locales");
    let (_, code) = run(cmd)?;
    assert_eq!(code, 0);

    Ok(())
}

#[test]
fn test_check_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::with_locales(&[("en", "{}")])?;
    test.write_file(".i18nsweeprc.json", r#"{ "ignores": ["**/[oops"] }"#)?;

    let (stderr, code) = run_stderr(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Invalid config file"));
    Ok(())
}

#[test]
fn test_check_respects_ignores() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#)])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;
    test.write_file("src/node_modules/lib/index.js", r#"t("lib.only")"#)?;

    let (stdout, code) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 1 source file"));
    Ok(())
}
