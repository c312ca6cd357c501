use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_translate_inconsistent_execute() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a":"Hello"}"#), ("jp", "{}")])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let mut cmd = test.translate_command();
    cmd.args(["--inconsistent", "--execute"]);
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Added 1 value(s) for 1 key(s) in 1 locale file(s)."));
    assert!(stdout.contains("saved jp.json"));

    insta::assert_snapshot!(test.read_locale("jp")?.trim_end(), @r#"
    {
      "a": "[JP] Hello"
    }
    "#);
    // Files with nothing to add are left untouched.
    assert_eq!(test.read_locale("en")?, r#"{"a":"Hello"}"#);
    Ok(())
}

#[test]
fn test_translate_dry_run_does_not_write() -> Result<()> {
    let en = r#"{"a":"Hello"}"#;
    let test = CliTest::with_locales(&[("en", en), ("jp", "{}")])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let mut cmd = test.translate_command();
    cmd.arg("--inconsistent");
    assert_cmd_snapshot!(cmd, @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    a
      + jp: "[JP] Hello"

    Would add 1 value(s) for 1 key(s) in 1 locale file(s).
    Run with --execute to write these values.

    ----- stderr -----
    "#);

    assert_eq!(test.read_locale("en")?, en);
    assert_eq!(test.read_locale("jp")?, "{}");
    Ok(())
}

#[test]
fn test_translate_missing_keys_uses_table_and_skips_dynamic_content() -> Result<()> {
    let test = CliTest::with_locales(&[("en", "{}"), ("jp", "{}"), ("zh", "{}")])?;
    test.write_file(
        "src/form.tsx",
        r#"<button>{t("form.submit")}</button><a>{t("contact.email@studio")}</a><p>{t("hero.headline")}</p>"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["auto-translate-i18n", "--execute"]);
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("skipped 1 key(s) that look like dynamic content: contact.email@studio"));

    insta::assert_snapshot!(test.read_locale("en")?.trim_end(), @r#"
    {
      "form": {
        "submit": "Submit"
      },
      "hero": {
        "headline": "[EN] hero.headline"
      }
    }
    "#);
    insta::assert_snapshot!(test.read_locale("jp")?.trim_end(), @r#"
    {
      "form": {
        "submit": "送信"
      },
      "hero": {
        "headline": "[JP] hero.headline"
      }
    }
    "#);
    Ok(())
}

#[test]
fn test_translate_nothing_to_do() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a":"A"}"#)])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let mut cmd = test.translate_command();
    cmd.arg("--execute");
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} No missing keys to translate\n");
    assert_eq!(test.read_locale("en")?, r#"{"a":"A"}"#);
    Ok(())
}

#[test]
fn test_translate_never_overwrites_malformed_locale() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a":"Hello"}"#), ("jp", "{ broken")])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let mut cmd = test.translate_command();
    cmd.args(["--inconsistent", "--execute"]);
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("skipped jp.json"));
    assert!(stdout.contains("1 of 1 locale file(s) could not be written"));
    assert_eq!(test.read_locale("jp")?, "{ broken");
    Ok(())
}

#[test]
fn test_translate_never_swaps_strings_and_sections() -> Result<()> {
    let en = r#"{"a":"A"}"#;
    let jp = r#"{"a":{"b":"B"}}"#;
    let test = CliTest::with_locales(&[("en", en), ("jp", jp)])?;
    test.write_file("src/app.tsx", r#"t("a"); t("a.b")"#)?;

    let mut cmd = test.translate_command();
    cmd.args(["--inconsistent", "--execute"]);
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains(
        "left 2 value(s) alone where a key is a string in one language and a section in another: a (jp), a.b (en)"
    ));
    assert!(stdout.contains("No inconsistent keys to translate"));
    assert_eq!(test.read_locale("en")?, en);
    assert_eq!(test.read_locale("jp")?, jp);
    Ok(())
}
