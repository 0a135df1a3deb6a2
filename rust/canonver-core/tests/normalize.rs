//! Integration tests for version normalization.

use canonver_core::{normalize, CanonicalVersion};
use std::cmp::Ordering;

// =============================================================================
// Fixtures
// =============================================================================

/// Raw numeric sequences and their canonical rendering.
const CASES: &[(&str, &str)] = &[
    ("0", "v0.0.0"),
    ("1.0", "v1.0.0"),
    ("1.0.2", "v1.0.2"),
    ("1.20", "v1.20.0"),
    ("1.22.3", "v1.22.3"),
];

const PREFIXES: &[&str] = &["", "go", "v"];
const SUFFIXES: &[&str] = &["", "rc1", "-rc1"];

fn render(input: &str) -> String {
    normalize(input)
        .unwrap_or_else(|| panic!("expected a version for {input:?}"))
        .to_string()
}

// =============================================================================
// Absent
// =============================================================================

#[test]
fn empty_input_is_absent() {
    assert_eq!(normalize(""), None);
}

#[test]
fn whitespace_is_not_empty() {
    assert_eq!(render(" "), "v0.0.0");
}

// =============================================================================
// Prefix and suffix tolerance
// =============================================================================

#[test]
fn prefixes_and_suffixes() {
    for (input, expected) in CASES {
        for prefix in PREFIXES {
            for suffix in SUFFIXES {
                let raw = format!("{prefix}{input}{suffix}");
                let mut want = expected.to_string();
                if !suffix.is_empty() {
                    want.push_str("-rc1");
                }
                assert_eq!(render(&raw), want, "normalizing {raw:?}");
            }
        }
    }
}

#[test]
fn prefix_insensitive() {
    let plain = normalize("1.22.3");
    assert_eq!(normalize("go1.22.3"), plain);
    assert_eq!(normalize("v1.22.3"), plain);
}

#[test]
fn suffix_separator_normalized() {
    assert_eq!(normalize("1.0rc1"), normalize("1.0-rc1"));
    assert_eq!(render("1.0rc1"), "v1.0.0-rc1");
}

#[test]
fn missing_components_render_as_zero() {
    let v = normalize("go1").unwrap();
    assert_eq!(v, CanonicalVersion::new(1, 0, 0));

    let v = normalize("1.20").unwrap();
    assert_eq!(v.patch(), 0);
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn renormalizing_canonical_form_is_stable() {
    let inputs = [
        "0",
        "go1.22rc1",
        "v1.0.2",
        "1.2.3.4",
        "1.0--rc1",
        "1..2",
        "1.2.3+build.5",
        "toolchain go1.21.0-X:nocoverageredesign",
        "go",
        "v0.0.0-20240101000000-abcdef123456",
    ];

    for input in inputs {
        let first = normalize(input).unwrap();
        let second = normalize(&first.to_string()).unwrap();
        assert_eq!(first, second, "re-normalizing {input:?}");
        assert_eq!(first.to_string(), second.to_string());
    }
}

#[test]
fn standard_form_renormalizes_to_same_value() {
    let v = normalize("go1.21rc2").unwrap();
    assert_eq!(normalize(&v.standard()), Some(v));
}

// =============================================================================
// Generated inputs
// =============================================================================

/// Simple deterministic LCG pseudo-random number generator.
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = ((self.next() >> 33) as usize) % items.len();
        &items[idx]
    }
}

/// Digits dominate so most inputs exercise the numeric groups.
const ALPHABET: &[&str] = &[
    "0", "1", "2", "9", "0", "1", "3", "7", ".", ".", "-", "-", "v", "g", "o", "r", "c", "+",
    "x", "β", "é", " ",
];

fn random_input(rng: &mut Rng) -> String {
    let len = (rng.next() >> 40) % 14;
    (0..len).map(|_| *rng.choose(ALPHABET)).collect()
}

#[test]
fn generated_inputs_renormalize_to_same_value() {
    let mut rng = Rng::new(0x5eed_cafe);

    for _ in 0..20_000 {
        let input = random_input(&mut rng);
        let Some(version) = normalize(&input) else {
            assert!(input.is_empty(), "only the empty string is absent");
            continue;
        };

        let canonical = normalize(&version.to_string());
        assert_eq!(canonical.as_ref(), Some(&version), "canonical form of {input:?}");

        let standard = normalize(&version.standard());
        assert_eq!(standard.as_ref(), Some(&version), "standard form of {input:?}");
    }
}

#[test]
fn generated_versions_order_consistently_with_eq() {
    let mut rng = Rng::new(42);
    let versions: Vec<CanonicalVersion> = (0..2_000)
        .filter_map(|_| normalize(&random_input(&mut rng)))
        .collect();

    for pair in versions.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!(a.cmp(b) == Ordering::Equal, a == b, "{a} vs {b}");
        assert_eq!(a.cmp(b), b.cmp(a).reverse(), "{a} vs {b}");
        assert_eq!(a.cmp(a), Ordering::Equal);

        let same = normalize(&a.to_string()).unwrap();
        assert_eq!(a.cmp(&same), Ordering::Equal, "{a}");
    }

    let mut sorted = versions.clone();
    sorted.sort();
    for pair in sorted.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn toolchain_versions_order_as_released() {
    let older = normalize("go1.22rc1").unwrap();
    let release = normalize("go1.22").unwrap();
    let patch = normalize("go1.22.3").unwrap();
    let next = normalize("go1.23").unwrap();

    assert!(older < release);
    assert!(release < patch);
    assert!(patch < next);
    assert!(next.is_newer_than(&older));
    assert!(release.is_at_least(&normalize("1.22.0").unwrap()));
}

#[test]
fn major_minor_collapses_patch_releases() {
    let a = normalize("go1.21.0").unwrap();
    let b = normalize("go1.21.13").unwrap();
    assert_eq!(a.major_minor(), b.major_minor());
    assert_eq!(b.major_minor().to_string(), "v1.21.0");
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn normalize_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("go1.{i}.3");
                normalize(&input).map(|v| v.to_string())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(format!("v1.{i}.3")));
    }
}
