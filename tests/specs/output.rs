//! Output formats, quiet mode and color.

use crate::prelude::*;

fn cast_patch() -> String {
    mail_patch("util: Add x.", "", "lib/util.c", &["long x = (long)y;"])
}

#[test]
fn json_output_shape() {
    let temp = Project::empty();
    let report = cli().pwd(temp.path()).json().stdin(&cast_patch()).fails();
    let value = report.value();

    assert_eq!(value["passed"], false);
    assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));

    let units = report.units();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0]["name"], "-");
    assert_eq!(units[0]["passed"], false);
    assert_eq!(units[0]["errors"], 1);
    assert_eq!(units[0]["warnings"], 0);

    let diagnostic = &units[0]["diagnostics"][0];
    assert_eq!(diagnostic["file"], "lib/util.c");
    assert_eq!(diagnostic["line"], 1);
    assert_eq!(diagnostic["severity"], "error");
    assert_eq!(diagnostic["source"], "long x = (long)y;");
    assert_eq!(report.messages(), vec!["Inappropriate spacing around cast"]);
}

#[test]
fn json_clean_run_passes() {
    let temp = Project::empty();
    let patch = mail_patch("util: Add x.", "", "lib/util.c", &["int x;"]);
    let report = cli().pwd(temp.path()).json().stdin(&patch).passes();
    assert_eq!(report.value()["passed"], true);
    assert!(report.messages().is_empty());
}

#[test]
fn json_message_diagnostics_omit_file() {
    let temp = Project::empty();
    let patch = mail_patch("util: Add x.", "Acked by: Jane\n\n", "lib/util.c", &["int x;"]);
    let report = cli().pwd(temp.path()).json().stdin(&patch).fails();
    let diagnostic = &report.units()[0]["diagnostics"][0];
    assert!(diagnostic.get("file").is_none());
    assert_eq!(diagnostic["line"], 4);
    assert_eq!(diagnostic["message"], "Acked-by tag is malformed.");
}

#[test]
fn quiet_prints_only_diagnostics() {
    let temp = Project::empty();
    let patch = mail_patch("util: Add x.", "", "lib/util.c", &["int x; "]);
    cli()
        .pwd(temp.path())
        .args(&["-q"])
        .stdin(&patch)
        .passes()
        .stdout_eq("lib/util.c:1: WARNING: Line has trailing whitespace\nint x; \n\n");
}

#[test]
fn quiet_clean_run_is_silent() {
    let temp = Project::empty();
    let patch = mail_patch("util: Add x.", "", "lib/util.c", &["int x;"]);
    cli()
        .pwd(temp.path())
        .args(&["-q"])
        .stdin(&patch)
        .passes()
        .stdout_eq("");
}

#[test]
fn no_color_by_default_when_piped() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .stdin(&cast_patch())
        .fails()
        .stdout_lacks("\x1b[");
}

#[test]
fn color_flag_forces_color() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .args(&["--color"])
        .stdin(&cast_patch())
        .fails()
        .stdout_has("\x1b[");
}

#[test]
fn no_color_flag_and_env_disable_color() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .env("COLOR", "1")
        .args(&["--no-color"])
        .stdin(&cast_patch())
        .fails()
        .stdout_lacks("\x1b[");
    cli()
        .pwd(temp.path())
        .env("NO_COLOR", "1")
        .stdin(&cast_patch())
        .fails()
        .stdout_lacks("\x1b[");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp = Project::empty();
    let run = cli()
        .pwd(temp.path())
        .env("CHECKPATCH_LOG", "debug")
        .stdin(&cast_patch())
        .fails()
        .stderr_has("registered");
    assert!(!run.stdout().contains("registered"));
}
