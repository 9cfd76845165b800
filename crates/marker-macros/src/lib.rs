//! Proc-macro half of `crosscore-marker`.
//!
//! The attribute is pure metadata for an external translation tool; its
//! expansion must leave the marked item untouched. The contract is
//! documented on the re-export in `crosscore-marker`.

use proc_macro::TokenStream;

/// Marks a declaration for exclusion from translated output.
///
/// Arguments are free-text documentation for the reader and are ignored
/// without validation, so any spelling is accepted:
///
/// ```ignore
/// #[no_transpile]
/// #[no_transpile("relies on native file io")]
/// #[no_transpile(reason = "host-only")]
/// ```
#[proc_macro_attribute]
pub fn no_transpile(args: TokenStream, item: TokenStream) -> TokenStream {
    // Reasons carry no semantics; the item passes through unchanged.
    let _ = args;
    item
}
