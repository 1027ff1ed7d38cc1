// src/domain/tags.rs

/// Parse raw comma-separated tag input into an ordered tag list.
///
/// Splits on `,`, trims whitespace from each segment and drops segments that
/// are empty after trimming. The order of the remaining segments is
/// preserved; duplicates are kept.
///
/// # Examples
///
/// ```
/// use notecli::domain::tags::parse_tags;
///
/// assert_eq!(parse_tags("a, b ,, c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_tags(""), Vec::<String>::new());
/// ```
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse direction for form display: the tag list joined with `", "`.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
