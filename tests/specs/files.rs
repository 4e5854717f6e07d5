//! Source file input (`-f`/`--check-file`).

use crate::prelude::*;

#[test]
fn checks_a_single_source_file() {
    let temp = Project::empty();
    temp.file("lib/a.c", "int x; \nint y;\n");
    cli()
        .pwd(temp.path())
        .args(&["-f", "lib/a.c"])
        .passes()
        .stdout_eq(
            "lib/a.c:1: WARNING: Line has trailing whitespace\n\
             int x; \n\
             \n\
             Lines checked: 2, Warnings: 1, Errors: 0\n\
             \n",
        );
}

#[test]
fn source_file_errors_fail() {
    let temp = Project::empty();
    temp.file("lib/a.c", "void\nf(void)\n{\n    if(x) {\n    }\n}\n");
    cli()
        .pwd(temp.path())
        .args(&["-f", "lib/a.c"])
        .fails()
        .stdout_has("lib/a.c:4: ERROR: Improper whitespace around control block");
}

#[test]
fn directory_is_walked_in_path_order() {
    let temp = Project::empty();
    temp.file("lib/b.c", "int b;\n");
    temp.file("lib/a.c", "int a;\n");
    let stdout = cli()
        .pwd(temp.path())
        .args(&["-f", "lib"])
        .passes()
        .stdout();
    let a = stdout.find("== Checking lib/a.c ==").unwrap();
    let b = stdout.find("== Checking lib/b.c ==").unwrap();
    assert!(a < b, "expected lib/a.c first:\n{}", stdout);
}

#[test]
fn missing_source_file_fails() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .args(&["-f", "nope.c"])
        .fails()
        .stdout_has("ERROR: io error: nope.c");
}

#[test]
fn skip_paths_only_check_line_length() {
    let temp = Project::empty();
    temp.config("[check]\nskip_paths = [\"third-party/**\"]\n");
    temp.file("third-party/x.c", "int* p = (int)q;\n");
    cli()
        .pwd(temp.path())
        .args(&["-f", "third-party/x.c"])
        .passes()
        .stdout_has("no obvious problems found");
}

#[test]
fn skip_leading_whitespace_flag() {
    let temp = Project::empty();
    temp.file("lib/a.c", "\tint x;\n");
    cli()
        .pwd(temp.path())
        .args(&["-f", "lib/a.c"])
        .passes()
        .stdout_has("WARNING: Line has non-spaces leading whitespace");
    cli()
        .pwd(temp.path())
        .args(&["-l", "-f", "lib/a.c"])
        .passes()
        .stdout_has("no obvious problems found");
}

#[test]
fn skip_block_whitespace_flag() {
    let temp = Project::empty();
    temp.file("lib/a.c", "    while(x) {\n");
    cli()
        .pwd(temp.path())
        .args(&["-b", "-f", "lib/a.c"])
        .passes()
        .stdout_lacks("control block");
}

#[test]
fn comment_spelling_with_dictionary() {
    let temp = Project::empty();
    temp.file("words.txt", "the\nquick\nfox\n");
    temp.config("[spelling]\ndictionary = \"words.txt\"\n");
    temp.file("lib/a.c", "/* the quikc fox v2 */\nint x;\n");
    cli()
        .pwd(temp.path())
        .args(&["-S", "-f", "lib/a.c"])
        .passes()
        .stdout_has("lib/a.c:1: WARNING: Possible misspelled word: \"quikc\"")
        .stdout_lacks("\"v2\"");
}

#[test]
fn spelling_is_off_by_default() {
    let temp = Project::empty();
    temp.file("words.txt", "the\n");
    temp.config("[spelling]\ndictionary = \"words.txt\"\n");
    temp.file("lib/a.c", "/* the quikc fox */\n");
    cli()
        .pwd(temp.path())
        .args(&["-f", "lib/a.c"])
        .passes()
        .stdout_lacks("misspelled");
}
