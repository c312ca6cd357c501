use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const EN: &str = r#"{
  "nav": {
    "home": "Home"
  },
  "legacy": {
    "banner": {
      "title": "Old banner"
    }
  }
}
"#;

const JP: &str = r#"{
  "nav": {
    "home": "ホーム"
  },
  "legacy": {
    "banner": {
      "title": "古いバナー"
    }
  }
}
"#;

#[test]
fn test_clean_dry_run_does_not_write() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("jp", JP)])?;
    test.write_file("src/nav.tsx", r#"t("nav.home")"#)?;

    assert_cmd_snapshot!(test.clean_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      - legacy.banner.title

    Would delete 1 key(s) in 2 file(s).
    Run with --execute to delete these keys.

    ----- stderr -----
    ");

    assert_eq!(test.read_locale("en")?, EN);
    assert_eq!(test.read_locale("jp")?, JP);
    Ok(())
}

#[test]
fn test_clean_execute_prunes_empty_parents() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("jp", JP)])?;
    test.write_file("src/nav.tsx", r#"t("nav.home")"#)?;

    let mut cmd = test.clean_command();
    cmd.arg("--execute");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Deleted 2 key(s) in 2 file(s) (processed 1 unused key(s)).
      - en: 1 deleted, 0 not found
      - jp: 1 deleted, 0 not found
      ✓ saved en.json
      ✓ saved jp.json

    ----- stderr -----
    ");

    insta::assert_snapshot!(test.read_locale("en")?.trim_end(), @r#"
    {
      "nav": {
        "home": "Home"
      }
    }
    "#);
    insta::assert_snapshot!(test.read_locale("jp")?.trim_end(), @r#"
    {
      "nav": {
        "home": "ホーム"
      }
    }
    "#);
    Ok(())
}

#[test]
fn test_clean_keeps_dynamic_template_keys() -> Result<()> {
    let en = r#"{"about": {"genres": {"idol": {"title": "Idol"}}}, "old": "Old"}"#;
    let test = CliTest::with_locales(&[("en", en)])?;
    test.write_file(
        "src/genres.tsx",
        "genres.map((g) => t(`about.genres.${g}.title`))",
    )?;

    let mut cmd = test.command();
    cmd.args(["delete-unused-i18n", "--execute"]);
    let (_, code) = run(cmd)?;

    assert_eq!(code, 0);
    insta::assert_snapshot!(test.read_locale("en")?.trim_end(), @r#"
    {
      "about": {
        "genres": {
          "idol": {
            "title": "Idol"
          }
        }
      }
    }
    "#);
    Ok(())
}

#[test]
fn test_clean_nothing_to_delete() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"a":"A"}"#)])?;
    test.write_file("src/app.tsx", r#"t("a")"#)?;

    let mut cmd = test.clean_command();
    cmd.arg("--execute");
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} No unused keys to delete\n");
    assert_eq!(test.read_locale("en")?, r#"{"a":"A"}"#);
    Ok(())
}

#[test]
fn test_clean_missing_source_dir_leaves_locales_alone() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("jp", JP)])?;
    test.write_file("src/nav.tsx", r#"t("nav.home")"#)?;

    let mut cmd = test.clean_command();
    cmd.args(["--source-dir", "srcc", "--execute"]);
    assert_cmd_snapshot!(cmd, @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Source directory 'srcc' does not exist.
    Hint: Check the 'sourceDir' setting or pass --source-dir.
    ");

    assert_eq!(test.read_locale("en")?, EN);
    assert_eq!(test.read_locale("jp")?, JP);
    Ok(())
}

#[test]
fn test_clean_keeps_section_named_by_unused_key() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", r#"{"a": "A"}"#),
        ("jp", r#"{"a": {"b": "B"}}"#),
    ])?;
    test.write_file("src/app.tsx", r#"t("a.b")"#)?;

    let mut cmd = test.clean_command();
    cmd.arg("--execute");
    let (stdout, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("  - jp: 0 deleted, 0 not found, 1 kept (section in this language)"));
    assert_eq!(test.read_locale("en")?, "{}\n");
    assert_eq!(test.read_locale("jp")?, r#"{"a": {"b": "B"}}"#);
    Ok(())
}
