//! Post-hoc validation of a finished sort: length, element multiset, and
//! ordering. Runs once per completed trace, purely for reporting; playback
//! behavior never depends on it.

use std::fmt::Write as _;

/// Outcome of the three independent checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCheck {
    pub length_preserved: bool,
    pub non_decreasing: bool,
    pub elements_preserved: bool,
}

impl SortCheck {
    pub fn passed(&self) -> bool {
        self.length_preserved && self.non_decreasing && self.elements_preserved
    }
}

/// Whether `values` is sorted non-decreasing. Empty and single-element
/// slices count as sorted.
pub fn is_sorted(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Check a candidate result against the original input.
pub fn validate(original: &[i32], candidate: &[i32]) -> SortCheck {
    let length_preserved = original.len() == candidate.len();

    let mut original_sorted = original.to_vec();
    let mut candidate_sorted = candidate.to_vec();
    original_sorted.sort_unstable();
    candidate_sorted.sort_unstable();

    SortCheck {
        length_preserved,
        non_decreasing: is_sorted(candidate),
        elements_preserved: original_sorted == candidate_sorted,
    }
}

/// Human-readable validation report for CLI output and logs.
pub fn report(original: &[i32], candidate: &[i32]) -> String {
    let check = validate(original, candidate);

    let mut out = String::new();
    let _ = writeln!(out, "=== Sort Validation Report ===");
    let _ = writeln!(out, "Original array length: {}", original.len());
    let _ = writeln!(out, "Sorted array length:   {}", candidate.len());
    let _ = writeln!(out, "Length preserved:   {}", yes_no(check.length_preserved));
    let _ = writeln!(out, "Array is sorted:    {}", yes_no(check.non_decreasing));
    let _ = writeln!(
        out,
        "Elements preserved: {}",
        yes_no(check.elements_preserved)
    );
    let _ = writeln!(
        out,
        "OVERALL: {}",
        if check.passed() { "PASS" } else { "FAIL" }
    );
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}
