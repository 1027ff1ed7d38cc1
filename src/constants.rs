// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Base address of the notes API.
///
/// The backend is a fixed local endpoint; there is no environment-based
/// configuration. The `--base-url` flag overrides this per invocation.
///
/// Used in: `lib.rs`
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Maximum number of characters of a note's body shown in a list row.
///
/// List rows show the first line of the body only; longer lines are cut at
/// this width and marked with an ellipsis.
///
/// Used in: `ports/text.rs`
pub const LIST_PREVIEW_MAX_CHARS: usize = 80;
