//! Configuration file discovery and validation.

use crate::prelude::*;

fn trailing_space_patch() -> String {
    mail_patch("util: Add x.", "", "lib/util.c", &["int x; "])
}

#[test]
fn discovered_config_applies() {
    let temp = Project::empty();
    temp.config("[check]\nskip_trailing_whitespace = true\n");
    cli()
        .pwd(temp.path())
        .stdin(&trailing_space_patch())
        .passes()
        .stdout_has("no obvious problems found");
}

#[test]
fn config_flag_selects_file() {
    let temp = Project::empty();
    temp.file(
        "other.toml",
        "version = 1\n[check]\nskip_trailing_whitespace = true\n",
    );
    cli()
        .pwd(temp.path())
        .args(&["-C", "other.toml"])
        .stdin(&trailing_space_patch())
        .passes()
        .stdout_has("no obvious problems found");
}

#[test]
fn config_env_var_selects_file() {
    let temp = Project::empty();
    temp.file(
        "other.toml",
        "version = 1\n[check]\nskip_trailing_whitespace = true\n",
    );
    let path = temp.path().join("other.toml");
    cli()
        .pwd(temp.path())
        .env("CHECKPATCH_CONFIG", path.to_str().unwrap())
        .stdin(&trailing_space_patch())
        .passes()
        .stdout_has("no obvious problems found");
}

#[test]
fn missing_explicit_config_is_config_error() {
    let temp = Project::empty();
    cli()
        .pwd(temp.path())
        .args(&["-C", "absent.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_is_config_error() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    cli()
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn invalid_toml_is_config_error() {
    let temp = Project::empty();
    temp.config("[check\n");
    cli().pwd(temp.path()).exits(2).stderr_has("config error");
}

#[test]
fn unknown_keys_warn_but_run() {
    let temp = Project::empty();
    temp.config("[check]\nbogus = 1\n");
    cli()
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `check.bogus`");
}

#[test]
fn config_skip_signoff() {
    let temp = Project::empty();
    temp.config("[check]\nskip_signoff = true\n");
    let patch = trailing_space_patch().replace("Signed-off-by: Jane Doe <jane@example.com>\n", "");
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .passes()
        .stdout_lacks("sign off");
}

#[test]
fn configured_line_length() {
    let temp = Project::empty();
    temp.config("[check]\nline_length = 10\n");
    let patch = mail_patch("util: Add x.", "", "lib/util.c", &["int abcdefghij;"]);
    cli()
        .pwd(temp.path())
        .stdin(&patch)
        .passes()
        .stdout_has("Line is 15 characters long (recommended limit is 10)");
}

#[test]
fn configured_misuse_api_warns_outside_its_file() {
    let temp = Project::empty();
    temp.config(
        "[[misuse]]\n\
         function = \"pool_drain\"\n\
         location = \"lib/pool.c\"\n\
         warning = \"pool_drain() blocks; prefer pool_release()\"\n",
    );
    let outside = mail_patch("util: Drain.", "", "lib/util.c", &["    pool_drain(p);"]);
    cli()
        .pwd(temp.path())
        .stdin(&outside)
        .passes()
        .stdout_has("WARNING: pool_drain() blocks; prefer pool_release()");

    let home = mail_patch("pool: Drain.", "", "lib/pool.c", &["    pool_drain(p);"]);
    cli()
        .pwd(temp.path())
        .stdin(&home)
        .passes()
        .stdout_lacks("pool_drain() blocks");
}
