//! The canonical version value and its ordering.

use crate::normalize::{normalize, parse_group};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A normalized `major.minor.patch[-label]` version.
///
/// Values are produced by [`normalize`](crate::normalize()) or the
/// constructors below and are immutable afterwards. All three numeric
/// components are always present; the label is an opaque tag kept exactly as
/// it appeared in the input.
///
/// Ordering follows semantic-version precedence as far as an opaque label
/// allows: numeric components first, then a labelled version sorts before the
/// same unlabelled one (`v1.22.0-rc1 < v1.22.0`), and two labels compare by
/// their dot-separated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalVersion {
    major: u64,
    minor: u64,
    patch: u64,
    label: Option<String>,
}

impl CanonicalVersion {
    /// Create an unlabelled version.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            label: None,
        }
    }

    /// Attach a label. An empty label is the same as no label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    pub(crate) fn from_parts(major: u64, minor: u64, patch: u64, label: Option<String>) -> Self {
        Self {
            major,
            minor,
            patch,
            label,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The label without its `-` separator.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the version carries a pre-release/build label.
    pub fn is_prerelease(&self) -> bool {
        self.label.is_some()
    }

    /// Rendering without the leading `v`, e.g. `1.22.3-rc1`.
    pub fn standard(&self) -> String {
        let mut out = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if let Some(label) = &self.label {
            out.push('-');
            out.push_str(label);
        }
        out
    }

    /// The `vX.Y.0` release this version belongs to, with the label dropped.
    pub fn major_minor(&self) -> Self {
        Self::new(self.major, self.minor, 0)
    }

    pub fn is_older_than(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_newer_than(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_at_least(&self, other: &Self) -> bool {
        self >= other
    }

    pub fn is_at_most(&self, other: &Self) -> bool {
        self <= other
    }
}

impl fmt::Display for CanonicalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(label) = &self.label {
            write!(f, "-{}", label)?;
        }
        Ok(())
    }
}

impl Ord for CanonicalVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_labels(self.label(), other.label()))
    }
}

impl PartialOrd for CanonicalVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One dot-separated piece of a label.
///
/// Variant order is significant: numeric identifiers sort below alphanumeric
/// ones.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LabelIdentifier<'a> {
    Numeric(u64),
    Alpha(&'a str),
}

impl<'a> LabelIdentifier<'a> {
    fn parse(s: &'a str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            LabelIdentifier::Numeric(parse_group(s.as_bytes()))
        } else {
            LabelIdentifier::Alpha(s)
        }
    }
}

fn compare_labels(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // A release outranks any labelled build of the same triple
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a
            .split('.')
            .map(LabelIdentifier::parse)
            .cmp(b.split('.').map(LabelIdentifier::parse))
            // "rc01" vs "rc1" style ties still need a total order consistent with Eq
            .then_with(|| a.cmp(b)),
    }
}

/// Errors raised where a version is required rather than optional.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// The input was the empty string, i.e. no version was supplied.
    #[error("no version supplied")]
    Empty,
}

impl FromStr for CanonicalVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s).ok_or(VersionError::Empty)
    }
}

impl TryFrom<&str> for CanonicalVersion {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for CanonicalVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        value.parse().map_err(de::Error::custom)
    }
}
