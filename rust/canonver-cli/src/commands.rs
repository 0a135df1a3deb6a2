//! Implementations of the `canonver` subcommands.
//!
//! Every command renders its result into a `String`; the binary only decides
//! where that string goes and which exit code to use.

use crate::colors::{gray, green, paint_if, red};
use crate::config::{CanonverConfig, OutputFormat};
use crate::error::CliError;
use canonver_core::{normalize, CanonicalVersion};
use serde::Serialize;
use std::cmp::Ordering;
use std::io::BufRead;
use tracing::{debug, warn};

/// Text printed for an input that carried no version.
pub const ABSENT: &str = "absent";

// =============================================================================
// Render options
// =============================================================================

/// How versions are printed, after merging config and command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub standard: bool,
    pub color: bool,
}

impl RenderOptions {
    pub fn from_config(config: &CanonverConfig) -> Self {
        Self {
            format: config.output.format,
            standard: config.output.standard,
            color: config.output.color,
        }
    }

    /// Plain text without escape codes; handy for tests and pipes.
    pub fn plain() -> Self {
        Self {
            format: OutputFormat::Text,
            standard: false,
            color: false,
        }
    }

    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            ..Self::plain()
        }
    }

    fn render(&self, version: &CanonicalVersion) -> String {
        if self.standard {
            version.standard()
        } else {
            version.to_string()
        }
    }

    fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Parse an input that must carry a version.
pub fn require_version(argument: &str, input: &str) -> Result<CanonicalVersion, CliError> {
    input
        .parse()
        .map_err(|source| CliError::MissingVersion {
            argument: argument.to_string(),
            source,
        })
}

/// Read newline separated inputs, keeping blank lines as empty inputs.
pub fn read_inputs(reader: impl BufRead) -> Result<Vec<String>, CliError> {
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::Stdin)
}

// =============================================================================
// normalize
// =============================================================================

#[derive(Debug, Serialize)]
struct NormalizedEntry<'a> {
    input: &'a str,
    version: Option<String>,
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    label: Option<String>,
}

/// Normalize each input, one result per line (or one JSON array).
pub fn normalize_all<S: AsRef<str>>(inputs: &[S], opts: &RenderOptions) -> Result<String, CliError> {
    let results: Vec<(&str, Option<CanonicalVersion>)> = inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            (input, normalize(input))
        })
        .collect();
    debug!(count = results.len(), "normalized inputs");

    if opts.is_json() {
        let entries: Vec<NormalizedEntry<'_>> = results
            .iter()
            .map(|(input, version)| NormalizedEntry {
                input: *input,
                version: version.as_ref().map(|v| opts.render(v)),
                major: version.as_ref().map(CanonicalVersion::major),
                minor: version.as_ref().map(CanonicalVersion::minor),
                patch: version.as_ref().map(CanonicalVersion::patch),
                label: version
                    .as_ref()
                    .and_then(|v| v.label().map(str::to_string)),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let lines: Vec<String> = results
        .iter()
        .map(|(_, version)| match version {
            Some(v) => opts.render(v),
            None => paint_if(opts.color, ABSENT, gray),
        })
        .collect();
    Ok(lines.join("\n"))
}

// =============================================================================
// compare
// =============================================================================

#[derive(Debug, Serialize)]
struct Comparison {
    left: String,
    right: String,
    ordering: &'static str,
}

/// Compare two versions and print `<`, `=` or `>`.
pub fn compare(left: &str, right: &str, opts: &RenderOptions) -> Result<String, CliError> {
    let a = require_version("left", left)?;
    let b = require_version("right", right)?;
    let ordering = a.cmp(&b);

    if opts.is_json() {
        let comparison = Comparison {
            left: opts.render(&a),
            right: opts.render(&b),
            ordering: match ordering {
                Ordering::Less => "less",
                Ordering::Equal => "equal",
                Ordering::Greater => "greater",
            },
        };
        return Ok(serde_json::to_string_pretty(&comparison)?);
    }

    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(symbol.to_string())
}

// =============================================================================
// sort
// =============================================================================

/// Sort the inputs by version precedence. Empty inputs are skipped.
pub fn sort<S: AsRef<str>>(
    inputs: &[S],
    reverse: bool,
    opts: &RenderOptions,
) -> Result<String, CliError> {
    let mut versions: Vec<CanonicalVersion> = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        match normalize(input.as_ref()) {
            Some(version) => versions.push(version),
            None => warn!(index, "skipping empty version"),
        }
    }

    versions.sort();
    if reverse {
        versions.reverse();
    }

    let rendered: Vec<String> = versions.iter().map(|v| opts.render(v)).collect();
    if opts.is_json() {
        return Ok(serde_json::to_string_pretty(&rendered)?);
    }
    Ok(rendered.join("\n"))
}

// =============================================================================
// check
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub satisfied: bool,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    version: String,
    minimum: String,
    satisfied: bool,
}

/// Check that `input` is at least `minimum`.
pub fn check(input: &str, minimum: &str, opts: &RenderOptions) -> Result<CheckOutcome, CliError> {
    let version = require_version("version", input)?;
    let minimum = require_version("--at-least", minimum)?;
    let satisfied = version.is_at_least(&minimum);

    let output = if opts.is_json() {
        serde_json::to_string_pretty(&CheckReport {
            version: opts.render(&version),
            minimum: opts.render(&minimum),
            satisfied,
        })?
    } else if satisfied {
        format!(
            "{} {} >= {}",
            paint_if(opts.color, "ok", green),
            opts.render(&version),
            opts.render(&minimum)
        )
    } else {
        format!(
            "{} {} < {}",
            paint_if(opts.color, "too old", red),
            opts.render(&version),
            opts.render(&minimum)
        )
    };

    Ok(CheckOutcome { satisfied, output })
}
