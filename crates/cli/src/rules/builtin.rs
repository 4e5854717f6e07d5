// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in rule table and the line predicates behind it.

use std::sync::LazyLock;

use regex::Regex;

use super::misuse::{MisuseApi, STD_FUNCTIONS, call_pattern, default_misuse_apis};
use super::tracker::{BlankRunTracker, EmptyReturnTracker};
use super::{LineContext, Registry, Rule, RuleKind};
use crate::classify::{LineKind, is_comment_line};
use crate::diagnostic::Severity;
use crate::error::{Error, Result};
use crate::spell::{SpellChecker, describe_misspellings};

/// Default maximum line length.
pub const DEFAULT_LINE_LENGTH: usize = 79;

/// Knobs that change which built-in rules are registered.
#[derive(Debug, Clone)]
pub struct RuleOptions {
    pub skip_trailing_whitespace: bool,
    pub skip_leading_whitespace: bool,
    pub skip_block_whitespace: bool,
    pub line_length: usize,
    /// Comment spelling is registered only when this has a dictionary.
    pub spell: SpellChecker<'static>,
    pub misuse: Vec<MisuseApi>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            skip_trailing_whitespace: false,
            skip_leading_whitespace: false,
            skip_block_whitespace: false,
            line_length: DEFAULT_LINE_LENGTH,
            spell: SpellChecker::disabled(),
            misuse: default_misuse_apis(),
        }
    }
}

// =============================================================================
// FILE SELECTORS
// =============================================================================

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        #[allow(clippy::expect_used)]
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("valid regex"));
    };
}

static_regex!(C_SOURCES, r"(\.c|\.h)(\.in)?$");
static_regex!(C_FILES, r"(\.c)(\.in)?$");
static_regex!(SHELL_TESTS, r"(\.at|\.sh)$");
static_regex!(LENGTH_EXEMPT, r"\.(am|at|etc|in|m4|mk|patch|py)$|^debian/.*$");
static_regex!(WHITESPACE_EXEMPT, r"\.(mk|am|at)$|^debian/.*$");

/// Files exempt from the line-length rule.
pub fn is_length_exempt(filename: &str) -> bool {
    LENGTH_EXEMPT.is_match(filename)
}

/// Files exempt from the leading/trailing whitespace rules.
pub fn is_whitespace_exempt(filename: &str) -> bool {
    WHITESPACE_EXEMPT.is_match(filename)
}

// =============================================================================
// LINE PREDICATES
// =============================================================================

const BLOCK_KEYWORDS: &str = r"if|for|while|switch|[_A-Z]+FOR_*EACH[_A-Z0-9]*";

static_regex!(TRAILING_WHITESPACE, r"\s+$");
static_regex!(LEADING_SPACES, r"^ +\S");
static_regex!(NON_ASCII, r"[^\x00-\x7f]");
static_regex!(CAST_MISSING_WHITESPACE, r"\)[a-zA-Z0-9]");
static_regex!(POINTER_MISSING_WHITESPACE, r"[a-zA-Z0-9]\*[^*]");
static_regex!(XXX_MARKER, r"(?i)xxx");
static_regex!(EFGREP, r"[ef]grep");
static_regex!(HASH_DEFINE_FOR_EACH, r"#define [_A-Z]+FOR_*EACH[_A-Z0-9]*\(");
static_regex!(
    BLOCK_MISSING_WHITESPACE,
    &format!(r" +({})\(", BLOCK_KEYWORDS)
);
static_regex!(
    BLOCK_TOO_MUCH_WHITESPACE,
    &format!(r" +({})  +\(", BLOCK_KEYWORDS)
);
static_regex!(
    BLOCK_PARENS_WHITESPACE,
    &format!(r" +({}) \( +\s", BLOCK_KEYWORDS)
);
static_regex!(SINGLE_LINE_BLOCK, &format!(r"^ +({}) \(.*\)", BLOCK_KEYWORDS));
static_regex!(
    ENDS_WITH_BRACKET,
    r"[^\s]\) \{(\s+/\*[\s\Sa-zA-Z0-9.,?*/+-]*)?$"
);
static_regex!(
    BLOCK_MACRO,
    &format!(r"^ +({}) \(\S([\s\S]+\S)*\) \{{ +\\", BLOCK_KEYWORDS)
);
static_regex!(ELSE_ON_OWN_LINE, r"^\s*else\s*\{?$");
static_regex!(ELSE_WITHOUT_BRACE, r"^\s*\}\selse\s*$");

/// Length of the line in characters.
pub fn line_length(line: &str) -> usize {
    line.chars().count()
}

/// True unless the line is indented with something other than spaces.
pub fn leading_whitespace_is_spaces(line: &str) -> bool {
    if !line.starts_with(char::is_whitespace) || line.trim().is_empty() {
        return true;
    }
    LEADING_SPACES.is_match(line)
}

pub fn has_trailing_whitespace(line: &str) -> bool {
    TRAILING_WHITESPACE.is_match(line)
}

/// Whitespace around `if`/`for`/`while`/`switch` and FOR_EACH macros.
pub fn block_whitespace_ok(line: &str) -> bool {
    if BLOCK_MISSING_WHITESPACE.is_match(line) && !HASH_DEFINE_FOR_EACH.is_match(line) {
        return false;
    }
    !(BLOCK_TOO_MUCH_WHITESPACE.is_match(line) || BLOCK_PARENS_WHITESPACE.is_match(line))
}

/// Parentheses balance, ignoring quoting.
fn balanced_parens(line: &str) -> bool {
    let mut balance = 0i32;
    for c in line.chars() {
        match c {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
    }
    balance == 0
}

/// Control statements open their brace on the same line; `else` shares a
/// line with both braces.
pub fn block_bracing_ok(line: &str) -> bool {
    if SINGLE_LINE_BLOCK.is_match(line) {
        if !balanced_parens(line) {
            return true;
        }
        if !ENDS_WITH_BRACKET.is_match(line) && !BLOCK_MACRO.is_match(line) {
            return false;
        }
    }
    !(ELSE_ON_OWN_LINE.is_match(line) || ELSE_WITHOUT_BRACE.is_match(line))
}

/// `type* name` instead of `type *name`.
pub fn pointer_spacing_bad(code: &str) -> bool {
    POINTER_MISSING_WHITESPACE.is_match(code)
}

pub fn has_nonascii(line: &str) -> bool {
    NON_ASCII.is_match(line)
}

/// `(type)value` instead of `(type) value`.
pub fn cast_spacing_bad(code: &str) -> bool {
    CAST_MISSING_WHITESPACE.is_match(code)
}

/// A ternary split after `?` or `:` instead of before.
pub fn ends_with_ternary_operator(code: &str) -> bool {
    let trimmed = code.trim_end();
    if trimmed.ends_with('?') {
        return true;
    }
    trimmed.ends_with(':') && !trimmed.ends_with("::") && trimmed.contains('?')
}

pub fn has_xxx_marker(line: &str) -> bool {
    XXX_MARKER.is_match(line)
}

pub fn has_efgrep(line: &str) -> bool {
    EFGREP.is_match(line)
}

/// Operators that need a space on each side.
fn infix_operator_patterns() -> Vec<String> {
    const PLAIN: &[&str] = &[
        "%", "<<", ">>", "<=", ">=", "==", "!=", "^", "|", "&&", "||", "?:", "=", "+=", "-=",
        "*=", "/=", "%=", "&=", "^=", "|=", "<<=", ">>=",
    ];
    const CONTEXTUAL: &[&str] = &[
        r#"[^<" ]<[^=" ]"#,
        r#"[^\->" ]>[^=" ]"#,
        r#"[^ !()/"]\*[^/]"#,
        r#"[^ !&()"]&"#,
        r#"[^" +(]\+[^"+;]"#,
        r#"[^" \-(]\-[^"\->;]"#,
        r#"[^" <>=!^|+\-*/%&]=[^"=]"#,
        r"[^* ]/[^* ]",
    ];
    PLAIN
        .iter()
        .map(|op| regex::escape(op))
        .chain(CONTEXTUAL.iter().map(|p| (*p).to_string()))
        .collect()
}

/// Regex flagging `operator` written without surrounding spaces.
pub fn operator_pattern(operator: &str) -> Result<Regex> {
    let pattern = format!(r#"^[^#][^"']*[^ "]{}[^ "'][^"]*"#, operator);
    Regex::new(&pattern).map_err(|e| Error::Internal(format!("operator pattern: {}", e)))
}

// =============================================================================
// PREREQUISITES
// =============================================================================

/// The line carries code rather than only comment text.
fn is_code(ctx: &LineContext<'_>) -> bool {
    !is_comment_line(ctx.line) && !matches!(ctx.classified.kind, LineKind::Comment)
}

fn in_comment(ctx: &LineContext<'_>) -> bool {
    ctx.classified.has_comment()
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Register every built-in rule, in reporting order.
pub(super) fn register_all(registry: &mut Registry, options: &RuleOptions) -> Result<()> {
    let limit = options.line_length;
    registry.register(
        Rule::line(
            RuleKind::LineLength,
            Severity::Warning,
            "Line is too long",
            move |ctx| line_length(ctx.line) > limit,
        )
        .when_name(|name| !is_length_exempt(name))
        .with_message(move |ctx| {
            format!(
                "Line is {} characters long (recommended limit is {})",
                line_length(ctx.line),
                limit
            )
        }),
    );

    if !options.skip_leading_whitespace {
        registry.register(
            Rule::line(
                RuleKind::LeadingWhitespace,
                Severity::Warning,
                "Line has non-spaces leading whitespace",
                |ctx| !leading_whitespace_is_spaces(ctx.line),
            )
            .when_name(|name| !is_whitespace_exempt(name)),
        );
    }

    if !options.skip_trailing_whitespace {
        registry.register(
            Rule::line(
                RuleKind::TrailingWhitespace,
                Severity::Warning,
                "Line has trailing whitespace",
                |ctx| has_trailing_whitespace(ctx.line),
            )
            .when_name(|name| !is_whitespace_exempt(name)),
        );
    }

    if !options.skip_block_whitespace {
        registry.register(
            Rule::line(
                RuleKind::BlockWhitespace,
                Severity::Error,
                "Improper whitespace around control block",
                |ctx| !block_whitespace_ok(ctx.code()),
            )
            .for_files(&C_SOURCES)
            .requires(is_code),
        );
    }

    registry.register(
        Rule::line(
            RuleKind::StatementBracing,
            Severity::Error,
            "Inappropriate bracing around statement",
            |ctx| !block_bracing_ok(ctx.line),
        )
        .for_files(&C_SOURCES)
        .requires(is_code),
    );

    registry.register(
        Rule::line(
            RuleKind::PointerSpacing,
            Severity::Error,
            "Inappropriate spacing in pointer declaration",
            |ctx| pointer_spacing_bad(ctx.code()),
        )
        .for_files(&C_SOURCES)
        .requires(is_code),
    );

    registry.register(
        Rule::line(
            RuleKind::NonAscii,
            Severity::Error,
            "Inappropriate non-ascii characters detected.",
            |ctx| has_nonascii(ctx.code()),
        )
        .for_files(&C_SOURCES)
        .requires(is_code),
    );

    registry.register(
        Rule::line(
            RuleKind::CastSpacing,
            Severity::Error,
            "Inappropriate spacing around cast",
            |ctx| cast_spacing_bad(ctx.code()),
        )
        .for_files(&C_SOURCES)
        .requires(is_code),
    );

    registry.register(
        Rule::line(
            RuleKind::TrailingOperator,
            Severity::Error,
            "Line has '?' or ':' operator at end of line",
            |ctx| ends_with_ternary_operator(ctx.code()),
        )
        .for_files(&C_SOURCES)
        .requires(is_code),
    );

    registry.register(
        Rule::line(
            RuleKind::XxxMarker,
            Severity::Warning,
            "Comment with 'xxx' marker",
            |ctx| has_xxx_marker(ctx.comment()),
        )
        .for_files(&C_SOURCES)
        .requires(in_comment),
    );

    registry.register(
        Rule::line(
            RuleKind::C99Comment,
            Severity::Error,
            "C99 style comment",
            |ctx| ctx.classified.line_comment,
        )
        .for_files(&C_SOURCES)
        .requires(in_comment),
    );

    if options.spell.is_enabled() {
        let spell = options.spell;
        registry.register(
            Rule::line(
                RuleKind::CommentSpelling,
                Severity::Warning,
                "Possible misspelled word",
                move |ctx| !spell.check_words(ctx.comment(), false).is_empty(),
            )
            .for_files(&C_SOURCES)
            .requires(in_comment)
            .with_message(move |ctx| {
                let words = spell.check_words(ctx.comment(), false);
                describe_misspellings(&words, spell.dictionary())
            }),
        );
    }

    registry.register(
        Rule::line(
            RuleKind::Efgrep,
            Severity::Warning,
            "grep -E/-F should be used instead of egrep/fgrep",
            |ctx| has_efgrep(ctx.line),
        )
        .for_files(&SHELL_TESTS),
    );

    for (function, advice) in STD_FUNCTIONS {
        let call = call_pattern(function)?;
        registry.register(
            Rule::line(RuleKind::StdFunction, Severity::Error, *advice, move |ctx| {
                call.is_match(ctx.code())
            })
            .for_files(&C_SOURCES)
            .requires(is_code),
        );
    }

    for api in &options.misuse {
        let call = call_pattern(&api.function)?;
        let location = api.location.clone();
        registry.register(
            Rule::line(
                RuleKind::MisuseApi,
                Severity::Warning,
                api.warning.clone(),
                move |ctx| call.is_match(ctx.code()),
            )
            .for_files(&C_FILES)
            .when_name(move |name| name != location)
            .requires(is_code),
        );
    }

    for operator in infix_operator_patterns() {
        let pattern = operator_pattern(&operator)?;
        registry.register(
            Rule::line(
                RuleKind::OperatorWhitespace,
                Severity::Warning,
                "Line lacks whitespace around operator",
                move |ctx| pattern.is_match(ctx.code()),
            )
            .for_files(&C_SOURCES)
            .requires(is_code),
        );
    }

    registry.register(
        Rule::tracked(
            RuleKind::EmptyReturnBrace,
            Severity::Warning,
            "Empty return followed by brace, consider omitting",
            EmptyReturnTracker::boxed,
        )
        .for_files(&C_SOURCES),
    );

    registry.register(
        Rule::tracked(
            RuleKind::BlankLineRun,
            Severity::Warning,
            "Multiple consecutive blank lines",
            BlankRunTracker::boxed,
        )
        .for_files(&C_SOURCES),
    );

    tracing::debug!("registered {} rules", registry.len());
    Ok(())
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
