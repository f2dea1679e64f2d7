use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, MARKER_FILE, stderr, stdout};

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("--regenerate"));
    assert!(help.contains("--allow-failed-rebuild"));

    Ok(())
}

#[test]
fn test_missing_config_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("lit-localize.json"));

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lit-localize.json", r#"{ "sourceLocale": "en" }"#)?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_config_from_parent_directory() -> Result<()> {
    let test = CliTest::with_locales(&["de"])?;
    test.write_file_at("xliff/de.xlf", 0)?;
    test.write_file_at("src/locales/de.ts", 5)?;

    let output = test
        .command()
        .current_dir(test.root().join("src"))
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Locale ./src/locales is up-to-date\n");

    Ok(())
}

#[test]
fn test_config_directories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "web/localize.json",
        r#"{
          "targetLocales": ["pt-BR"],
          "interchange": { "format": "xliff", "xliffDir": "./translations/" },
          "output": { "mode": "runtime", "outputDir": "./generated" }
        }"#,
    )?;
    test.write_file_at("web/translations/pt-BR.xlf", 10)?;
    test.write_file_at("web/generated/pt-BR.ts", 0)?;
    test.write_regen_script(&["pt-BR message 9 not translated"], "", 0)?;

    assert_cmd_snapshot!(test.sync_command().args(["--config", "web/localize.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Translation tables rebuilt.
    Locale 'pt-BR' has 1 missing translations

    Locale ./generated is up-to-date

    ----- stderr -----
    ");
    assert!(test.exists(MARKER_FILE));

    Ok(())
}

#[test]
fn test_directory_overrides() -> Result<()> {
    let test = CliTest::with_locales(&["de"])?;
    test.write_file_at("i18n/de.xlf", 0)?;
    test.write_file_at("out/de.ts", 5)?;

    assert_cmd_snapshot!(test.command().args(["--xliff-dir", "i18n", "--output-dir", "out"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Locale out is up-to-date

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_regenerate_from_environment() -> Result<()> {
    let test = CliTest::with_locales(&["de"])?;
    test.write_file_at("xliff/de.xlf", 0)?;
    test.write_regen_script(&[], "", 0)?;

    let output = test
        .command()
        .env("LOCALE_SYNC_REGENERATE", "/bin/sh regen.sh")
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists(MARKER_FILE));

    Ok(())
}
