//! Patch input: file hunks, commit message trailers and sign-offs.

use crate::prelude::*;

fn fixture(name: &str) -> String {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures/patches")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

// =============================================================================
// FILE HUNKS
// =============================================================================

#[test]
fn clean_patch_has_no_problems() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .args(&[&fixture("clean.patch")])
        .passes()
        .stdout_has("no obvious problems found")
        .stdout_lacks("WARNING")
        .stdout_lacks("ERROR");
}

#[test]
fn style_errors_are_reported_with_new_line_numbers() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .args(&[&fixture("style-errors.patch")])
        .fails()
        .stdout_has("lib/util.c:11: ERROR: Inappropriate spacing in pointer declaration")
        .stdout_has("lib/util.c:11: ERROR: Inappropriate spacing around cast")
        .stdout_has("lib/util.c:12: ERROR: Inappropriate spacing around cast")
        .stdout_has("lib/util.c:13: ERROR: Improper whitespace around control block")
        .stdout_has("    long x = (long)y;\n");
}

#[test]
fn trailing_whitespace_is_reported_once() {
    let temp = Project::empty();
    let patch = mail_patch("util: Add x.", "", "lib/util.c", &["int x; "]);
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .passes()
        .stdout_has("lib/util.c:1: WARNING: Line has trailing whitespace\nint x; \n")
        .stdout_has(format!(
            "Lines checked: {}, Warnings: 1, Errors: 0",
            patch.lines().count()
        ).as_str());
}

#[test]
fn skip_trailing_whitespace_flag() {
    let temp = Project::empty();
    let patch = mail_patch("util: Add x.", "", "lib/util.c", &["int x; "]);
    cli()
        .pwd(temp.path())
        .args(&["-t"])
        .stdin(&patch)
        .passes()
        .stdout_has("no obvious problems found");
}

#[test]
fn makefile_fragments_are_whitespace_exempt() {
    let temp = Project::empty();
    let patch = mail_patch("build: Add flags.", "", "lib/automake.mk", &["CFLAGS += -O2 "]);
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .passes()
        .stdout_lacks("trailing whitespace");
}

#[test]
fn several_patches_get_headings() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .args(&[&fixture("clean.patch"), &fixture("style-errors.patch")])
        .fails()
        .stdout_has("clean.patch ==")
        .stdout_has("style-errors.patch ==");
}

#[test]
fn missing_patch_file_fails_but_others_run() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .args(&["missing.patch", &fixture("clean.patch")])
        .fails()
        .stdout_has("ERROR: io error: missing.patch")
        .stdout_has("no obvious problems found");
}

#[test]
fn malformed_hunk_fails_the_unit() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .stdin("--- a/x.c\n+++ b/x.c\n@@ garbage @@\n")
        .fails()
        .stdout_has("bad hunk header");
}

// =============================================================================
// COMMIT MESSAGE
// =============================================================================

#[test]
fn well_formed_fixes_passes() {
    let temp = Project::empty();
    let body = "Fixes: abc123def456 (\"subject\")\n\n";
    let patch = mail_patch("util: Fix x.", body, "lib/util.c", &["int x;"]);
    cli().pwd(temp.path()).stdin(&patch).passes();
}

#[test]
fn short_fixes_hash_is_malformed() {
    let temp = Project::empty();
    let body = "Fixes: abc123 (\"x\")\n\n";
    let patch = mail_patch("util: Fix x.", body, "lib/util.c", &["int x;"]);
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .fails()
        .stdout_has("ERROR: \"Fixes\" tag is malformed.\nUse the following format:")
        .stdout_has("4: Fixes: abc123 (\"x\")");
}

#[test]
fn mistyped_acked_by_is_malformed() {
    let temp = Project::empty();
    let patch = mail_patch("util: Fix x.", "Acked by: Jane Doe\n\n", "lib/util.c", &["int x;"]);
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .fails()
        .stdout_has("ERROR: Acked-by tag is malformed.");
}

#[test]
fn hyphenated_acked_by_passes() {
    let temp = Project::empty();
    let patch = mail_patch("util: Fix x.", "Acked-by: Jane Doe\n\n", "lib/util.c", &["int x;"]);
    cli().pwd(temp.path()).stdin(&patch).passes();
}

#[test]
fn change_id_is_flagged_unless_skipped() {
    let temp = Project::empty();
    let body = "Change-Id: I0123456789abcdef0123456789abcdef01234567\n";
    let patch = mail_patch("util: Fix x.", body, "lib/util.c", &["int x;"]);
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .fails()
        .stdout_has("Remove Gerrit Change-Id's before submitting upstream.");
    cli()
        .pwd(temp.path())
        .args(&["--skip-gerrit-change-id"])
        .stdin(&patch)
        .passes();
}

#[test]
fn missing_signoff_fails_unless_skipped() {
    let temp = Project::empty();
    let patch = mail_patch("util: Fix x.", "", "lib/util.c", &["int x;"])
        .replace("Signed-off-by: Jane Doe <jane@example.com>\n", "");
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .fails()
        .stdout_has("ERROR: Author Jane Doe <jane@example.com> needs to sign off.");
    cli()
        .pwd(temp.path())
        .args(&["-s"])
        .stdin(&patch)
        .passes();
}

#[test]
fn subject_style_warnings() {
    let temp = Project::empty();
    let patch = mail_patch("util: fix x", "", "lib/util.c", &["int x;"]);
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .passes()
        .stdout_has("WARNING: The subject summary should start with a capital.")
        .stdout_has("WARNING: The subject summary should end with a dot.");
}

// =============================================================================
// IDEMPOTENCE
// =============================================================================

#[test]
fn repeated_runs_are_identical() {
    let temp = Project::empty();
    let path = fixture("style-errors.patch");
    let first = cli().pwd(temp.path()).args(&[&path]).fails().stdout();
    let second = cli().pwd(temp.path()).args(&[&path]).fails().stdout();
    similar_asserts::assert_eq!(first, second);
}
