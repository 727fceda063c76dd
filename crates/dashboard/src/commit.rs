//! Rendering of "introduced by" commit references.
//!
//! The dataset's `introduced_by` value is usually a commit hash, but it can
//! also be a version tag, a free-text note, or junk. How it is displayed is
//! decided by [`RULES`]: the first rule whose predicate holds picks the
//! outcome, so the order of the list is the contract.

use data_loader::ChangeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Number of characters shown for a commit reference
pub const SHORT_LEN: usize = 7;

static GITHUB_REPO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^/]+/[^/]+)").expect("static regex"));

/// How a commit reference is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitLink {
    /// Nothing usable; shown as `-`
    Missing,
    /// Shortened text without a link
    Inert(String),
    /// Shortened hash linking to the commit on GitHub
    Link { label: String, href: String },
}

impl CommitLink {
    pub fn href(&self) -> Option<&str> {
        match self {
            CommitLink::Link { href, .. } => Some(href),
            _ => None,
        }
    }
}

impl fmt::Display for CommitLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitLink::Missing => f.write_str("-"),
            CommitLink::Inert(text) => f.write_str(text),
            CommitLink::Link { label, .. } => f.write_str(label),
        }
    }
}

/// What a rule gets to look at
#[derive(Debug, Clone, Copy)]
pub struct CommitInput<'a> {
    /// The reference if it is a string; `None` when absent or not text
    pub hash: Option<&'a str>,
    /// Issue URL of the dataset entry
    pub url: &'a str,
}

impl<'a> CommitInput<'a> {
    fn short(&self) -> String {
        self.hash.unwrap_or_default().chars().take(SHORT_LEN).collect()
    }
}

/// One step of the fallback chain
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&CommitInput<'_>) -> bool,
    pub outcome: fn(&CommitInput<'_>) -> CommitLink,
}

fn missing(_: &CommitInput<'_>) -> CommitLink {
    CommitLink::Missing
}

fn inert(input: &CommitInput<'_>) -> CommitLink {
    CommitLink::Inert(input.short())
}

fn link(input: &CommitInput<'_>) -> CommitLink {
    match (repo_path(input.url), input.hash) {
        (Some(repo), Some(hash)) => CommitLink::Link {
            label: input.short(),
            href: format!("https://github.com/{repo}/commit/{hash}"),
        },
        _ => inert(input),
    }
}

fn is_missing(input: &CommitInput<'_>) -> bool {
    matches!(input.hash, None | Some("") | Some("null"))
}

fn is_stdlib_note(input: &CommitInput<'_>) -> bool {
    input.hash.is_some_and(|h| h.contains("change in python stdlib"))
}

fn is_forever(input: &CommitInput<'_>) -> bool {
    input.hash == Some("forever")
}

fn is_version_tag(input: &CommitInput<'_>) -> bool {
    input.hash.is_some_and(|h| h.starts_with('v'))
}

fn is_not_github(input: &CommitInput<'_>) -> bool {
    repo_path(input.url).is_none()
}

fn always(_: &CommitInput<'_>) -> bool {
    true
}

/// The fallback chain, evaluated top to bottom
pub static RULES: &[Rule] = &[
    Rule {
        name: "missing",
        applies: is_missing,
        outcome: missing,
    },
    Rule {
        name: "python-stdlib-note",
        applies: is_stdlib_note,
        outcome: inert,
    },
    Rule {
        name: "forever",
        applies: is_forever,
        outcome: inert,
    },
    Rule {
        name: "version-tag",
        applies: is_version_tag,
        outcome: inert,
    },
    Rule {
        name: "not-github",
        applies: is_not_github,
        outcome: inert,
    },
    Rule {
        name: "github-commit",
        applies: always,
        outcome: link,
    },
];

/// `owner/repo` of a GitHub URL
pub fn repo_path(url: &str) -> Option<&str> {
    GITHUB_REPO
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Name of the rule that decides `input`
pub fn matching_rule(input: &CommitInput<'_>) -> &'static str {
    RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map_or("missing", |rule| rule.name)
}

/// Render a raw reference from a dataset entry
pub fn render(introduced_by: Option<&ChangeRef>, url: &str) -> CommitLink {
    let input = CommitInput {
        hash: introduced_by.and_then(ChangeRef::as_text),
        url,
    };
    render_input(&input)
}

pub fn render_input(input: &CommitInput<'_>) -> CommitLink {
    RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map_or(CommitLink::Missing, |rule| (rule.outcome)(input))
}
