//! Denylist classifier for free-text search input.
//!
//! A candidate search term is checked against a fixed, ordered list of rules
//! and rejected on the first rule that matches:
//!
//! 1. blank input (empty, whitespace only, or absent)
//! 2. known XSS vectors, matched against a lower-cased copy
//! 3. SQL injection indicators, matched against the same lower-cased copy
//! 4. a character denylist, checked against the original input
//!
//! Anything that survives all four steps is accepted. The classifier never
//! rewrites its input; escaping for display lives in [`crate::escape`] and
//! runs regardless of what happened here.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::error::StartupError;

/// Known XSS vectors, in evaluation order.
const XSS_PATTERNS: &[(&str, &str)] = &[
    ("script-tag", r"<script.*?>"),
    ("javascript-scheme", r"javascript:"),
    ("event-handler", r"on\w+\s*="),
    ("iframe-tag", r"<iframe"),
    ("object-tag", r"<object"),
    ("embed-tag", r"<embed"),
    ("link-tag", r"<link"),
    ("meta-tag", r"<meta"),
    ("vbscript-scheme", r"vbscript:"),
    ("html-data-uri", r"data:text/html"),
];

/// SQL injection indicators, in evaluation order.
const SQL_PATTERNS: &[(&str, &str)] = &[
    ("union-select", r"union\s+select"),
    ("drop-table", r"drop\s+table"),
    ("delete-from", r"delete\s+from"),
    ("insert-into", r"insert\s+into"),
    ("update-set", r"update\s+set"),
    ("exec-call", r"exec\s*\("),
    ("execute-call", r"execute\s*\("),
    ("stored-procedure", r"sp_\w+"),
    ("extended-procedure", r"xp_\w+"),
    ("line-comment", r"--"),
    ("block-comment", r"/\*.*?\*/"),
    ("single-quoted", r"'.*?'"),
    ("double-quoted", r#"".*?""#),
    ("statement-chain", r";\s*\w+"),
];

/// Characters that reject a search term wherever they appear.
pub const DISALLOWED_CHARACTERS: [char; 9] = ['<', '>', '"', '\'', ';', '(', ')', '{', '}'];

/// Unicode `White_Space` plus the ASCII separator controls U+001C..=U+001F,
/// which form submissions treat as blank too.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strips leading and trailing whitespace from a submitted term.
pub fn trim_term(term: &str) -> &str {
    term.trim_matches(is_space)
}

fn is_blank(term: &str) -> bool {
    trim_term(term).is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleClass {
    Xss,
    Sql,
}

/// Why a search term was rejected.
///
/// Only the accept/reject decision is part of the public contract; the
/// variant and rule name exist for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("search term is blank")]
    Blank,
    #[error("search term matches XSS rule `{rule}`")]
    XssPattern { rule: &'static str },
    #[error("search term matches SQL injection rule `{rule}`")]
    SqlPattern { rule: &'static str },
    #[error("search term contains disallowed character {character:?}")]
    DisallowedCharacter { character: char },
}

impl Rejection {
    /// Stable label for the reason class, suitable as a log field.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::XssPattern { .. } => "xss-pattern",
            Self::SqlPattern { .. } => "sql-pattern",
            Self::DisallowedCharacter { .. } => "disallowed-character",
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    name: &'static str,
    class: RuleClass,
    pattern: Regex,
}

impl Rule {
    fn compile(name: &'static str, class: RuleClass, source: &str) -> Result<Self, StartupError> {
        let pattern = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|source| StartupError::InvalidRule { rule: name, source })?;
        Ok(Self {
            name,
            class,
            pattern,
        })
    }

    const fn rejection(&self) -> Rejection {
        match self.class {
            RuleClass::Xss => Rejection::XssPattern { rule: self.name },
            RuleClass::Sql => Rejection::SqlPattern { rule: self.name },
        }
    }
}

/// Compiled denylist. Build once and share; classification takes `&self`.
#[derive(Debug, Clone)]
pub struct SearchValidator {
    rules: Vec<Rule>,
}

impl SearchValidator {
    /// Compiles the XSS rules followed by the SQL rules.
    pub fn new() -> Result<Self, StartupError> {
        let xss = XSS_PATTERNS
            .iter()
            .map(|&(name, source)| Rule::compile(name, RuleClass::Xss, source));
        let sql = SQL_PATTERNS
            .iter()
            .map(|&(name, source)| Rule::compile(name, RuleClass::Sql, source));
        let rules = xss.chain(sql).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Classifies a candidate search term, reporting the first rule that fired.
    pub fn classify(&self, input: Option<&str>) -> Result<(), Rejection> {
        let Some(candidate) = input.filter(|s| !is_blank(s)) else {
            return Err(Rejection::Blank);
        };

        let lowered = candidate.to_lowercase();
        if let Some(rule) = self.rules.iter().find(|rule| rule.pattern.is_match(&lowered)) {
            return Err(rule.rejection());
        }

        // Checked on the original input, not the lower-cased copy.
        if let Some(character) = candidate
            .chars()
            .find(|c| DISALLOWED_CHARACTERS.contains(c))
        {
            return Err(Rejection::DisallowedCharacter { character });
        }

        Ok(())
    }

    /// Returns `true` when the term is safe to echo back and forward.
    pub fn validate(&self, input: Option<&str>) -> bool {
        self.classify(input).is_ok()
    }

    /// Rule names and classes in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = (&'static str, RuleClass)> + '_ {
        self.rules.iter().map(|rule| (rule.name, rule.class))
    }
}
