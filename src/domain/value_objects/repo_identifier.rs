use regex::Regex;
use std::fmt;
use thiserror::Error;
use url::Url;

/// Allowed characters for a single owner or repository segment.
const SEGMENT_PATTERN: &str = r"^[A-Za-z0-9._-]+$";

/// Errors produced while parsing an `owner/repo` identifier
#[derive(Debug, Error, PartialEq)]
pub enum RepoIdentifierError {
    #[error("Missing '/' separator in repository identifier: {0}")]
    MissingSeparator(String),

    #[error("Too many '/' separators in repository identifier: {0}")]
    TooManySeparators(String),

    #[error("Empty {0} segment in repository identifier")]
    EmptySegment(&'static str),

    #[error("Invalid characters in {segment} segment: {value}")]
    InvalidCharacters {
        segment: &'static str,
        value: String,
    },

    #[error("Invalid clone URL host: {0}")]
    InvalidHost(String),

    #[error("Segment pattern failed to compile: {0}")]
    Pattern(String),
}

/// A repository on the hosting service, written `owner/repo`.
///
/// The `repo` segment doubles as the local application name, so both segments
/// are restricted to characters that are safe in a URL path and a directory
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoIdentifier {
    owner: String,
    name: String,
}

impl RepoIdentifier {
    /// Parse an `owner/repo` identifier
    pub fn parse(identifier: &str) -> Result<Self, RepoIdentifierError> {
        let trimmed = identifier.trim();

        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| RepoIdentifierError::MissingSeparator(trimmed.to_string()))?;

        if name.contains('/') {
            return Err(RepoIdentifierError::TooManySeparators(trimmed.to_string()));
        }

        let pattern =
            Regex::new(SEGMENT_PATTERN).map_err(|e| RepoIdentifierError::Pattern(e.to_string()))?;
        Self::validate_segment("owner", owner, &pattern)?;
        Self::validate_segment("repository", name, &pattern)?;

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    fn validate_segment(
        segment: &'static str,
        value: &str,
        pattern: &Regex,
    ) -> Result<(), RepoIdentifierError> {
        if value.is_empty() {
            return Err(RepoIdentifierError::EmptySegment(segment));
        }

        if value == "." || value == ".." || !pattern.is_match(value) {
            return Err(RepoIdentifierError::InvalidCharacters {
                segment,
                value: value.to_string(),
            });
        }

        Ok(())
    }

    /// Owner (user or organisation) segment
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository segment, also used as the local application name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTTPS clone URL on `host`, e.g. `https://github.com/owner/repo.git`
    pub fn clone_url(&self, host: &str) -> Result<Url, RepoIdentifierError> {
        let host = host.trim().trim_end_matches('/');
        if host.is_empty() || host.contains('/') {
            return Err(RepoIdentifierError::InvalidHost(host.to_string()));
        }

        let raw = format!("https://{}/{}/{}.git", host, self.owner, self.name);
        let url = Url::parse(&raw).map_err(|_| RepoIdentifierError::InvalidHost(host.to_string()))?;

        if url.host_str().is_none() {
            return Err(RepoIdentifierError::InvalidHost(host.to_string()));
        }

        Ok(url)
    }
}

impl fmt::Display for RepoIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
