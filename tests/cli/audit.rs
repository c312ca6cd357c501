use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_audit_reports_missing_key() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"nav": {"home": "Home"}}"#)])?;
    test.write_file(
        "src/hero.tsx",
        r#"<h1>{t("hero.title")}</h1><a>{t("nav.home")}</a>"#,
    )?;

    assert_cmd_snapshot!(test.audit_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    Scanned 1 source file(s): 2 key(s) used (0 from dynamic templates), 1 defined across 1 language(s) [en]

    error: "hero.title"  missing-key
      --> ./src/hero.tsx
      = note: used in source, but defined in no locale file

    ✘ 1 problems (1 error, 0 warnings)

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_audit_expands_dynamic_templates() -> Result<()> {
    let test = CliTest::with_locales(&[("en", "{}")])?;
    test.write_file(
        "src/genres.tsx",
        "genres.map((g) => t(`about.genres.${g}.title`))",
    )?;

    let (stdout, code) = run(test.audit_command())?;

    assert_eq!(code, 1);
    for genre in ["idol", "jrock", "jpop", "orchestra", "edm", "bgm"] {
        assert!(stdout.contains(&format!("\"about.genres.{}.title\"  missing-key", genre)));
    }
    assert!(stdout.contains("generated from a dynamic key template"));
    assert!(stdout.contains("6 key(s) used (6 from dynamic templates)"));
    Ok(())
}

#[test]
fn test_audit_unused_keys_are_warnings_only() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "A", "legacy": {"banner": "Old"}}"#),
        ("jp", r#"{"a": "エー", "legacy": {"banner": "古い"}}"#),
    ])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let (stdout, code) = run(test.audit_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"legacy.banner\"  unused-key"));
    assert!(stdout.contains("= note: defined in: en, jp"));
    assert!(stdout.contains("defined across 2 language(s) [en, jp]"));
    Ok(())
}

#[test]
fn test_audit_dynamic_keys_are_not_unused() -> Result<()> {
    let test = CliTest::with_locales(&[(
        "en",
        r#"{"about": {"genres": {
            "idol": {"title": "Idol"}, "jrock": {"title": "J-Rock"},
            "jpop": {"title": "J-Pop"}, "orchestra": {"title": "Orchestra"},
            "edm": {"title": "EDM"}, "bgm": {"title": "BGM"}
        }}}"#,
    )])?;
    test.write_file(
        "src/genres.tsx",
        "genres.map((g) => t(`about.genres.${g}.title`))",
    )?;

    let (stdout, code) = run(test.audit_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));
    Ok(())
}

#[test]
fn test_audit_alias() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a": "A"}"#), ("zh", "{}")])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let mut cmd = test.command();
    cmd.arg("professional-i18n-check");
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"a\"  inconsistent-key"));
    assert!(stdout.contains("missing in: zh (present in: en)"));
    Ok(())
}
