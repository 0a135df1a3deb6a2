//! Parsing of loosely formatted version strings.
//!
//! The grammar accepted here is deliberately forgiving:
//!
//! ```text
//! input  := prefix numbers label
//! prefix := <any run of non-digits>           (discarded)
//! numbers:= digits ("." digits ("." digits)?)?
//! label  := "-"? <anything>                   (kept verbatim)
//! ```
//!
//! Nothing is ever rejected except the empty string, which means "no version
//! was supplied" and yields `None`.

use crate::version::CanonicalVersion;
use tracing::trace;

/// Maximum number of dot-separated numeric groups read as major/minor/patch.
const NUMERIC_GROUPS: usize = 3;

/// Normalize a raw version string into its canonical form.
///
/// Returns `None` only for the empty string. Every other input produces a
/// [`CanonicalVersion`]:
///
/// - a leading run of non-digit characters (`go`, `v`, `toolchain-`) is dropped;
/// - up to three dot-separated digit runs become major, minor and patch,
///   missing ones default to `0`;
/// - whatever follows is the label, with a single leading `-` consumed as its
///   separator.
///
/// ```
/// use canonver_core::normalize;
///
/// assert_eq!(normalize("1.20").unwrap().to_string(), "v1.20.0");
/// assert_eq!(normalize("go1.22.3").unwrap().to_string(), "v1.22.3");
/// assert_eq!(normalize("1.0rc1"), normalize("v1.0-rc1"));
/// ```
pub fn normalize(input: &str) -> Option<CanonicalVersion> {
    if input.is_empty() {
        return None;
    }

    let bytes = input.as_bytes();
    let mut pos = bytes
        .iter()
        .position(u8::is_ascii_digit)
        .unwrap_or(bytes.len());

    let mut numbers = [0u64; NUMERIC_GROUPS];
    for (index, slot) in numbers.iter_mut().enumerate() {
        let start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        if pos == start {
            break;
        }
        *slot = parse_group(&bytes[start..pos]);

        if index + 1 < NUMERIC_GROUPS && bytes.get(pos) == Some(&b'.') {
            pos += 1;
        } else {
            break;
        }
    }

    // `pos` only ever advances over ASCII bytes, so it is a char boundary.
    let rest = &input[pos..];
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    let label = (!rest.is_empty()).then(|| rest.to_owned());

    let [major, minor, patch] = numbers;
    let version = CanonicalVersion::from_parts(major, minor, patch, label);
    trace!(input, version = %version, "normalized version");

    Some(version)
}

/// Decimal value of a run of ASCII digits, saturating at `u64::MAX`.
pub(crate) fn parse_group(digits: &[u8]) -> u64 {
    digits.iter().fold(0u64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'))
    })
}
