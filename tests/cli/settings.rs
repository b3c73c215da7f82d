use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn settings_show_prints_defaults() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("public_folder            = public"))
        .stdout(predicate::str::contains("public_attachment_folder = public/attachments"));

    assert!(!ctx.exists(".divat/settings.toml"), "showing settings must not persist them");
}

#[test]
fn settings_set_public_folder_resets_attachment_folder() {
    let ctx = TestContext::new();
    ctx.write_settings("public", "public/img");

    ctx.cli()
        .args(["settings", "set", "--public-folder", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));

    let settings = ctx.read_settings();
    assert_eq!(settings["public_folder"].as_str(), Some("site"));
    assert_eq!(settings["public_attachment_folder"].as_str(), Some("site/attachments"));
}

#[test]
fn settings_set_both_folders_keeps_custom_attachment_folder() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["s", "set", "-p", "site", "-a", "/assets/images/"])
        .assert()
        .success();

    let settings = ctx.read_settings();
    assert_eq!(settings["public_folder"].as_str(), Some("site"));
    assert_eq!(settings["public_attachment_folder"].as_str(), Some("assets/images"));
}

#[test]
fn settings_set_requires_a_change() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["settings", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn settings_set_rejects_vault_root_as_public_folder() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["settings", "set", "--public-folder", "/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must name a folder inside the vault"));

    assert!(!ctx.exists(".divat/settings.toml"));
}

#[test]
fn settings_reports_malformed_file() {
    let ctx = TestContext::new();
    ctx.write(".divat/settings.toml", "public_folder = [");

    ctx.cli()
        .args(["settings", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn vault_flag_targets_another_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .current_dir(ctx.outside())
        .arg("--vault")
        .arg(ctx.vault())
        .args(["settings", "set", "-p", "site"])
        .assert()
        .success();

    assert!(ctx.exists(".divat/settings.toml"));
}
