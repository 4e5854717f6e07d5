// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::IsTerminal;

use checkpatch::checker::{FileChecker, build_skip_paths};
use checkpatch::cli::{Cli, OutputFormat};
use checkpatch::color::resolve_color;
use checkpatch::commit::MessageOptions;
use checkpatch::config::{self, Config};
use checkpatch::diagnostic::Report;
use checkpatch::discovery;
use checkpatch::error::ExitCode;
use checkpatch::output::FormatOptions;
use checkpatch::output::json::{self, JsonFormatter};
use checkpatch::output::text::TextFormatter;
use checkpatch::rules::{Registry, RuleOptions, default_misuse_apis};
use checkpatch::runner::CheckRunner;
use checkpatch::sources::{self, Target};
use checkpatch::spell::{self, DictionarySource, SpellChecker};

/// Spell checking settings after combining flags and config.
struct Spelling {
    enabled: bool,
    comments_only: bool,
}

impl Spelling {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        let comments_only = cli.spellcheck_comments
            || (config.spelling.comments_only && !cli.spellcheck);
        Self {
            enabled: cli.spellcheck || comments_only || config.spelling.enabled,
            comments_only,
        }
    }
}

/// Run the check command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let location = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    tracing::debug!("config: {:?}", location);
    let config = match location.path() {
        Some(path) => config::load_with_warnings(path)?,
        None => Config::default(),
    };

    let spelling = Spelling::resolve(cli, &config);
    let dictionary = if spelling.enabled {
        let source = DictionarySource {
            path: config.spelling.dictionary.clone(),
            words: config.spelling.words.clone(),
        };
        let dictionary = spell::global(&source);
        if dictionary.is_none() {
            eprintln!(
                "checkpatch: warning: no dictionary could be loaded; spell checking disabled"
            );
        }
        dictionary
    } else {
        None
    };

    let mut misuse = default_misuse_apis();
    misuse.extend(config.misuse.iter().cloned());

    let rule_options = RuleOptions {
        skip_trailing_whitespace: cli.skip_trailing_whitespace
            || config.check.skip_trailing_whitespace,
        skip_leading_whitespace: cli.skip_leading_whitespace
            || config.check.skip_leading_whitespace,
        skip_block_whitespace: cli.skip_block_whitespace || config.check.skip_block_whitespace,
        line_length: config.check.line_length,
        spell: SpellChecker::from_option(dictionary),
        misuse,
    };
    let message_options = MessageOptions {
        skip_signoff: cli.skip_signoff || config.check.skip_signoff,
        skip_gerrit_change_id: cli.skip_gerrit_change_id || config.check.skip_gerrit_change_id,
        subject_length: config.check.subject_length,
        spell: if spelling.comments_only {
            SpellChecker::disabled()
        } else {
            SpellChecker::from_option(dictionary)
        },
    };

    let registry = Registry::builtin(&rule_options)?;
    let skip_paths = build_skip_paths(&config.check.skip_paths)?;
    let files = FileChecker::new(&registry).with_skip_paths(skip_paths);
    let runner = CheckRunner::new(files, message_options);

    let stdin = std::io::stdin();
    let target = Target::select(cli.recent, cli.check_file, &cli.paths, stdin.is_terminal())?;
    tracing::debug!("checking {:?}", target);
    let inputs = sources::resolve(&target, &cwd, &mut stdin.lock());

    let reports = runner.run(&inputs);

    match cli.output {
        OutputFormat::Text => {
            let options = if cli.quiet {
                FormatOptions::quiet()
            } else {
                FormatOptions::default()
                    .with_headings(inputs.len() > 1 || matches!(target, Target::Recent(_)))
            };
            let mut formatter =
                TextFormatter::stdout(resolve_color(cli.color, cli.no_color), options);
            for report in &reports {
                formatter.write_report(report)?;
            }
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout().lock());
            formatter.write(&json::create_output(&reports))?;
        }
    }

    if reports.iter().all(Report::passed) {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::CheckFailed)
    }
}
