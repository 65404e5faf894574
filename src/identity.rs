//! Contributor identities as they appear in `git log` / `git shortlog`
//! output, plus the order-preserving deduplication used by every ordering.

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^<]*@.*>$").expect("email pattern is valid"))
}

fn count_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*\d+\s+").expect("count pattern is valid"))
}

/// A contributor as written in history: `Name<email>`.
///
/// Two identities are the same only when their full text is identical;
/// nothing is case-folded or trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Split a `Name<email>` line. The trailing `<...@...>` token is the
    /// email and everything before it is the name, untouched.
    ///
    /// A line without an email token is accepted as a bare name with an
    /// empty email.
    pub fn parse(line: &str) -> Self {
        match email_pattern().find(line) {
            Some(m) => {
                let token = m.as_str();
                Self {
                    name: line.replacen(token, "", 1),
                    email: token[1..token.len() - 1].to_string(),
                }
            }
            None => Self {
                name: line.to_string(),
                email: String::new(),
            },
        }
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_email() {
            write!(f, "{}<{}>", self.name, self.email)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// An identity together with its modified-line total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedIdentity {
    pub identity: Identity,
    pub metric: u64,
}

/// Drop the leading commit count of a `git shortlog --summary` line:
/// `"     5\tJane Doe <jane@example.com>"` becomes `"Jane Doe <jane@example.com>"`.
pub fn strip_count(line: &str) -> &str {
    match count_prefix().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Non-empty lines of command output, carriage returns removed.
pub fn lines(output: &str) -> impl Iterator<Item = &str> {
    output
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
}

/// Remove repeated entries, keeping each first occurrence in place.
pub fn dedup<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
