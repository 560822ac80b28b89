//! Claim parsing: splitting raw claim strings and extracting back-references.

use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

/// One numbered patent claim: its number and verbatim body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub number: u32,
    pub text: String,
}

/// Matches the stereotyped claim format: leading integer, period, whitespace, body.
fn claim_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)^(\d+)\.\s+(.*)$").unwrap())
}

/// Matches back-references like "claim 1", "Claim 12". Word boundaries keep
/// "claims 1" and "subclaim 1" from matching.
fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bclaim\s+(\d+)\b").unwrap())
}

/// Marks the start of a new claim within a blob of claims text.
fn claim_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d+\.\s+").unwrap())
}

impl Claim {
    /// Single-line rendering of the body for labels and listings.
    pub fn summary(&self) -> String {
        self.text.split_whitespace().join(" ")
    }

    /// Parse one raw claim string of the form `"<digits>. <text>"`.
    ///
    /// Returns `None` for anything else (section headers, boilerplate,
    /// numbers that overflow `u32`). Malformed lines must not abort
    /// processing of the remaining claims, so there is no error here.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = claim_regex().captures(raw.trim())?;
        let number = caps.get(1)?.as_str().parse::<u32>().ok()?;
        let text = caps.get(2)?.as_str().to_string();
        Some(Self { number, text })
    }
}

/// Extract every claim number referenced in `text`, in order of first
/// occurrence. Duplicates are preserved; whether they produce duplicate
/// child edges is decided by the forest builder.
///
/// Does not check that the referenced claims exist.
pub fn find_references(text: &str) -> Vec<u32> {
    reference_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .collect()
}

/// Split a blob of claims text into the ordered sequence of claim strings.
///
/// A new claim starts at a line matching `N. `; continuation lines belong to
/// the preceding claim. Lines before the first claim are boilerplate and
/// dropped.
pub fn segment_claims(text: &str) -> Vec<String> {
    let mut claims: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if claim_start_regex().is_match(line) {
            if let Some(claim) = current.take() {
                claims.push(claim);
            }
            current = Some(line.trim().to_string());
        } else if let Some(claim) = current.as_mut() {
            if !line.trim().is_empty() {
                claim.push('\n');
                claim.push_str(line.trim_end());
            }
        }
    }
    if let Some(claim) = current {
        claims.push(claim);
    }
    claims
}
