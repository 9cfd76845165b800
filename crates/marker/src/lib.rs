//! Translation-exclusion marker.
//!
//! `#[no_transpile]` tags a declaration so that an external
//! source-to-source translator omits it from its output, as if the
//! declaration were never written. The attribute is inert metadata: in
//! the running program a marked item compiles and behaves exactly like
//! an unmarked one. An optional free-text reason may be given; reasons
//! are documentation only and any number of them may be stacked on one
//! declaration.
//!
//! Translators recognize the attribute by its **simple name only**,
//! regardless of the path it is invoked through. Because only the name
//! matters, independent libraries may ship their own private copy of
//! this attribute instead of taking a compile-time dependency on shared
//! translation tooling. [`is_exclusion_marker`] implements that
//! recognition rule for tool authors.
//!
//! Warning: excluding a declaration may have surprising effects when
//! combined with method overloading via traits or with inheritance-like
//! impl chains, since callers of the excluded item are not rewritten.

pub use crosscore_marker_macros::no_transpile;

/// Simple name translators match against, irrespective of path prefix.
pub const MARKER_NAME: &str = "no_transpile";

/// Whether an attribute path names the exclusion marker.
///
/// The rule is string equality of the last `::` segment of `path`
/// against [`MARKER_NAME`]: `no_transpile`, `marker::no_transpile` and
/// `crosscore_marker::no_transpile` all match. The comparison is exact;
/// case variants and longer names do not match.
pub fn is_exclusion_marker(path: &str) -> bool {
    match path.rsplit("::").next() {
        Some(segment) => segment.trim() == MARKER_NAME,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_marker_by_simple_name() {
        assert!(is_exclusion_marker("no_transpile"));
        assert!(is_exclusion_marker("marker::no_transpile"));
        assert!(is_exclusion_marker("crosscore_marker::no_transpile"));
        assert!(is_exclusion_marker("a::b::c::no_transpile"));
    }

    #[test]
    fn rejects_other_names() {
        assert!(!is_exclusion_marker(""));
        assert!(!is_exclusion_marker("transpile"));
        assert!(!is_exclusion_marker("no_transpile_ever"));
        assert!(!is_exclusion_marker("some_no_transpile"));
        assert!(!is_exclusion_marker("marker::No_Transpile"));
        assert!(!is_exclusion_marker("no_transpile::marker"));
    }
}
