//! Recent commits (`-N`/`--recent N`) from the enclosing git repository.

use crate::prelude::*;

const SIGNOFF: &str = "Signed-off-by: Test User <test@example.com>";

#[test]
fn recent_commit_is_checked_with_heading() {
    let temp = Project::empty();
    git_init(&temp);
    git_commit_file(
        &temp,
        "lib/a.c",
        "int a;\n",
        &format!("lib: Add a.\n\n{}", SIGNOFF),
    );
    cli()
        .pwd(temp.path())
        .args(&["-1"])
        .passes()
        .stdout_has("(\"lib: Add a.\") ==")
        .stdout_has("no obvious problems found");
}

#[test]
fn recent_commits_oldest_first() {
    let temp = Project::empty();
    git_init(&temp);
    git_commit_file(&temp, "lib/a.c", "int a;\n", &format!("lib: Add a.\n\n{}", SIGNOFF));
    git_commit_file(&temp, "lib/b.c", "int b;\n", &format!("lib: Add b.\n\n{}", SIGNOFF));
    let stdout = cli()
        .pwd(temp.path())
        .args(&["--recent", "2"])
        .passes()
        .stdout();
    let a = stdout.find("lib: Add a.").unwrap();
    let b = stdout.find("lib: Add b.").unwrap();
    assert!(a < b, "expected oldest commit first:\n{}", stdout);
}

#[test]
fn unsigned_commit_fails() {
    let temp = Project::empty();
    git_init(&temp);
    git_commit_file(&temp, "lib/a.c", "int a;\n", "lib: Add a.");
    cli()
        .pwd(temp.path())
        .args(&["-1"])
        .fails()
        .stdout_has("ERROR: Author Test User <test@example.com> needs to sign off.");
}

#[test]
fn commit_diff_is_checked() {
    let temp = Project::empty();
    git_init(&temp);
    git_commit_file(
        &temp,
        "lib/a.c",
        "int a;\nlong x = (long)y;\n",
        &format!("lib: Add a.\n\n{}", SIGNOFF),
    );
    cli()
        .pwd(temp.path())
        .args(&["-1"])
        .fails()
        .stdout_has("lib/a.c:2: ERROR: Inappropriate spacing around cast");
}

#[test]
fn recent_outside_repository_fails() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .args(&["-1"])
        .fails()
        .stdout_has("HEAD~1..HEAD");
}

#[test]
fn zero_recent_commits_is_argument_error() {
    let temp = Project::empty();
    cli().pwd(temp.path()).args(&["--recent", "0"]).exits(2);
}
