use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn relocate_moves_attachment_pasted_into_public_note() {
    let ctx = TestContext::new();
    ctx.write("attachments-inbox/img1.png", "png-bytes");
    ctx.write("public/post.md", "# Post\n\n![[attachments-inbox/img1.png]]\n");
    ctx.set_active_note("public/post.md");

    ctx.cli()
        .args(["relocate", "attachments-inbox/img1.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved attachment img1.png to public/attachments"));

    assert!(!ctx.exists("attachments-inbox/img1.png"));
    assert_eq!(ctx.read("public/attachments/img1.png"), "png-bytes");
    assert_eq!(ctx.read("public/post.md"), "# Post\n\n![[public/attachments/img1.png]]\n");
}

#[test]
fn relocate_leaves_attachment_for_non_public_note() {
    let ctx = TestContext::new();
    ctx.write("attachments-inbox/img1.png", "png-bytes");
    ctx.set_active_note("drafts/post.md");

    ctx.cli()
        .args(["relocate", "attachments-inbox/img1.png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No relocation rule applies"));

    assert!(ctx.exists("attachments-inbox/img1.png"));
    assert!(!ctx.exists("public/attachments"));
}

#[test]
fn relocate_ignores_attachment_already_in_target() {
    let ctx = TestContext::new();
    ctx.write("public/attachments/img1.png", "png-bytes");

    ctx.cli()
        .args(["relocate", "public/attachments/img1.png", "--active", "public/post.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No relocation rule applies"));

    assert!(ctx.exists("public/attachments/img1.png"));
}

#[test]
fn relocate_ignores_unmanaged_file_types() {
    let ctx = TestContext::new();
    ctx.write("inbox/paper.pdf", "%PDF");

    ctx.cli()
        .args(["relocate", "inbox/paper.pdf", "--active", "public/post.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No relocation rule applies"));

    assert!(ctx.exists("inbox/paper.pdf"));
}

#[test]
fn relocate_reports_conflict_and_keeps_source() {
    let ctx = TestContext::new();
    ctx.write("inbox/img1.png", "new");
    ctx.write("public/attachments/img1.png", "existing");

    ctx.cli()
        .args(["r", "inbox/img1.png", "-a", "public/post.md"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to move attachment img1.png"))
        .stderr(predicate::str::contains("A file already exists at public/attachments/img1.png"));

    assert_eq!(ctx.read("inbox/img1.png"), "new");
    assert_eq!(ctx.read("public/attachments/img1.png"), "existing");
}

#[test]
fn relocate_without_active_note_leaves_file() {
    let ctx = TestContext::new();
    ctx.write("inbox/img1.png", "png-bytes");

    ctx.cli().args(["relocate", "inbox/img1.png"]).assert().success();

    assert!(ctx.exists("inbox/img1.png"));
}

#[test]
fn relocate_uses_configured_folders() {
    let ctx = TestContext::new();
    ctx.write_settings("site", "site/assets");
    ctx.write("inbox/shot.webp", "webp");
    ctx.write("site/index.md", "![shot](../inbox/shot.webp)\n");
    ctx.set_active_note("site/index.md");

    ctx.cli().args(["relocate", "inbox/shot.webp"]).assert().success();

    assert_eq!(ctx.read("site/assets/shot.webp"), "webp");
    assert_eq!(ctx.read("site/index.md"), "![shot](assets/shot.webp)\n");
}

#[test]
fn relocate_accepts_absolute_paths_inside_vault() {
    let ctx = TestContext::new();
    ctx.write("inbox/img1.png", "png-bytes");
    let absolute = ctx.vault().join("inbox/img1.png");

    ctx.cli()
        .arg("relocate")
        .arg(&absolute)
        .args(["--active", "public/post.md"])
        .assert()
        .success();

    assert!(ctx.exists("public/attachments/img1.png"));
}

#[test]
fn relocate_rejects_missing_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["relocate", "inbox/ghost.png", "--active", "public/post.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source file not found: inbox/ghost.png"));
}

#[test]
fn relocate_rejects_paths_outside_vault() {
    let ctx = TestContext::new();
    let outside = ctx.outside().join("img1.png");
    std::fs::write(&outside, "png-bytes").unwrap();

    ctx.cli()
        .arg("relocate")
        .arg(&outside)
        .assert()
        .failure()
        .stderr(predicate::str::contains("escapes the vault root"));

    assert!(outside.exists());
}
