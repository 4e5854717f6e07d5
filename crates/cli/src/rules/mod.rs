// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule registry.
//!
//! A rule binds a file selector (name regex and/or name predicate) and an
//! optional prerequisite to a detector and a reporter. Rules are kept in
//! registration order and never change once the registry is built; per-file
//! state lives in [`LineTracker`]s that each file traversal creates afresh.

pub mod builtin;
pub mod misuse;
pub mod tracker;

use std::fmt;

use regex::Regex;

use crate::classify::ClassifiedLine;
use crate::diagnostic::Severity;

pub use builtin::RuleOptions;
pub use misuse::{MisuseApi, STD_FUNCTIONS, default_misuse_apis};
pub use tracker::LineTracker;

/// Everything a rule may look at for one line.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Path of the file being checked, relative to the patch root.
    pub filename: &'a str,
    /// The line exactly as it appears in the file.
    pub line: &'a str,
    /// 1-based line number in the new version of the file.
    pub number: u32,
    pub classified: &'a ClassifiedLine,
}

impl LineContext<'_> {
    /// The line with comments removed.
    pub fn code(&self) -> &str {
        &self.classified.code
    }

    /// Comment text of the line, without delimiters.
    pub fn comment(&self) -> &str {
        &self.classified.comment
    }
}

/// Predicate over a single line. Must not have side effects.
pub type LinePredicate = Box<dyn Fn(&LineContext<'_>) -> bool + Send + Sync>;

/// Predicate over a file name.
pub type NamePredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Produces the message text for a violation.
pub type MessageFn = Box<dyn Fn(&LineContext<'_>) -> String + Send + Sync>;

/// Creates the per-file state of a tracked rule.
pub type TrackerFactory = fn() -> Box<dyn LineTracker>;

/// Identifies what a rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    LineLength,
    LeadingWhitespace,
    TrailingWhitespace,
    BlockWhitespace,
    StatementBracing,
    PointerSpacing,
    NonAscii,
    CastSpacing,
    TrailingOperator,
    XxxMarker,
    C99Comment,
    CommentSpelling,
    Efgrep,
    OperatorWhitespace,
    StdFunction,
    MisuseApi,
    EmptyReturnBrace,
    BlankLineRun,
}

impl RuleKind {
    pub fn name(self) -> &'static str {
        match self {
            RuleKind::LineLength => "line-length",
            RuleKind::LeadingWhitespace => "leading-whitespace",
            RuleKind::TrailingWhitespace => "trailing-whitespace",
            RuleKind::BlockWhitespace => "block-whitespace",
            RuleKind::StatementBracing => "statement-bracing",
            RuleKind::PointerSpacing => "pointer-spacing",
            RuleKind::NonAscii => "non-ascii",
            RuleKind::CastSpacing => "cast-spacing",
            RuleKind::TrailingOperator => "trailing-operator",
            RuleKind::XxxMarker => "xxx-marker",
            RuleKind::C99Comment => "c99-comment",
            RuleKind::CommentSpelling => "comment-spelling",
            RuleKind::Efgrep => "efgrep",
            RuleKind::OperatorWhitespace => "operator-whitespace",
            RuleKind::StdFunction => "std-function",
            RuleKind::MisuseApi => "misuse-api",
            RuleKind::EmptyReturnBrace => "empty-return",
            RuleKind::BlankLineRun => "blank-lines",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a rule decides a line is a violation.
pub enum Detector {
    /// Stateless, pure predicate.
    Line(LinePredicate),
    /// Needs preceding-line context; state is created per file.
    Tracked(TrackerFactory),
}

/// How a rule describes a violation.
pub enum Message {
    Fixed(String),
    Dynamic(MessageFn),
}

impl Message {
    pub fn render(&self, ctx: &LineContext<'_>) -> String {
        match self {
            Message::Fixed(text) => text.clone(),
            Message::Dynamic(f) => f(ctx),
        }
    }
}

/// A single registered rule.
pub struct Rule {
    pub kind: RuleKind,
    pub severity: Severity,
    file_pattern: Option<Regex>,
    name_filter: Option<NamePredicate>,
    prereq: Option<LinePredicate>,
    detector: Detector,
    message: Message,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("severity", &self.severity)
            .field("file_pattern", &self.file_pattern.as_ref().map(Regex::as_str))
            .field("name_filter", &self.name_filter.is_some())
            .field("prereq", &self.prereq.is_some())
            .finish()
    }
}

impl Rule {
    /// A rule with a stateless check and a fixed message.
    pub fn line(
        kind: RuleKind,
        severity: Severity,
        message: impl Into<String>,
        check: impl Fn(&LineContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            severity,
            file_pattern: None,
            name_filter: None,
            prereq: None,
            detector: Detector::Line(Box::new(check)),
            message: Message::Fixed(message.into()),
        }
    }

    /// A rule whose detection needs per-file state.
    pub fn tracked(
        kind: RuleKind,
        severity: Severity,
        message: impl Into<String>,
        factory: TrackerFactory,
    ) -> Self {
        Self {
            kind,
            severity,
            file_pattern: None,
            name_filter: None,
            prereq: None,
            detector: Detector::Tracked(factory),
            message: Message::Fixed(message.into()),
        }
    }

    /// Restrict the rule to file names matching `pattern`.
    pub fn for_files(mut self, pattern: &Regex) -> Self {
        self.file_pattern = Some(pattern.clone());
        self
    }

    /// Restrict the rule to file names accepted by `filter`.
    pub fn when_name(mut self, filter: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.name_filter = Some(Box::new(filter));
        self
    }

    /// Only evaluate the rule on lines accepted by `prereq`.
    pub fn requires(
        mut self,
        prereq: impl Fn(&LineContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.prereq = Some(Box::new(prereq));
        self
    }

    /// Compute the message from the offending line.
    pub fn with_message(
        mut self,
        message: impl Fn(&LineContext<'_>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.message = Message::Dynamic(Box::new(message));
        self
    }

    /// Whether the rule applies to `filename`.
    ///
    /// Both selectors must accept the name; a missing selector accepts
    /// everything.
    pub fn matches_name(&self, filename: &str) -> bool {
        let pattern_ok = self
            .file_pattern
            .as_ref()
            .is_none_or(|re| re.is_match(filename));
        let name_ok = self.name_filter.as_ref().is_none_or(|f| f(filename));
        pattern_ok && name_ok
    }

    /// Whether the prerequisite (if any) holds for this line.
    pub fn applies_to(&self, ctx: &LineContext<'_>) -> bool {
        self.prereq.as_ref().is_none_or(|p| p(ctx))
    }

    /// Fresh per-file state, for tracked rules.
    pub fn new_tracker(&self) -> Option<Box<dyn LineTracker>> {
        match &self.detector {
            Detector::Line(_) => None,
            Detector::Tracked(factory) => Some(factory()),
        }
    }

    /// Run detection on a line that passed [`Rule::applies_to`].
    ///
    /// `tracker` must be the state created by [`Rule::new_tracker`] for the
    /// current file; stateless rules ignore it.
    pub fn detect(
        &self,
        ctx: &LineContext<'_>,
        tracker: Option<&mut Box<dyn LineTracker>>,
    ) -> bool {
        match (&self.detector, tracker) {
            (Detector::Line(check), _) => check(ctx),
            (Detector::Tracked(_), Some(state)) => state.observe(ctx),
            (Detector::Tracked(_), None) => false,
        }
    }

    pub fn message(&self, ctx: &LineContext<'_>) -> String {
        self.message.render(ctx)
    }
}

/// Ordered, read-only-after-construction list of rules.
#[derive(Debug, Default)]
pub struct Registry {
    rules: Vec<Rule>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry with every built-in rule.
    pub fn builtin(options: &RuleOptions) -> crate::Result<Self> {
        let mut registry = Self::new();
        builtin::register_all(&mut registry, options)?;
        Ok(registry)
    }

    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Rules applicable to `filename`, in registration order.
    pub fn matching(&self, filename: &str) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.matches_name(filename))
            .collect()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
