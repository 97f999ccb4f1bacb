/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same
/// output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use farecast_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/results/5/1/30/12.00"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("homePost")); // Missing leading /
/// assert!(!is_valid_path("/homePost/")); // Trailing /
/// assert!(!is_valid_path("/results//5")); // Double //
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    if !path.starts_with('/') {
        return false;
    }
    if path.contains("//") || path.contains('\\') {
        return false;
    }
    if path == "/" {
        return true;
    }
    !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Zero-copy when the input is already valid: returns `Cow::Borrowed`
/// with no allocation. Otherwise collapses duplicate separators,
/// converts backslashes, and strips the trailing slash.
///
/// # Examples
///
/// ```
/// use farecast_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// // Valid paths: zero allocations
/// let path = normalize_path("/homePost");
/// assert!(matches!(path, Cow::Borrowed("/homePost")));
///
/// // Trailing slash stripped
/// assert_eq!(normalize_path("/homePost/"), "/homePost");
///
/// // Duplicate separators collapsed
/// assert_eq!(normalize_path("/results//5/"), "/results/5");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/homePost"));
        assert!(is_valid_path("/results/5/1/30/12.00"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("homePost"));
        assert!(!is_valid_path("/homePost/"));
        assert!(!is_valid_path("/results//5"));
        assert!(!is_valid_path("/results\\5"));
    }

    #[test]
    fn test_normalize_valid_is_borrowed() {
        let path = normalize_path("/homePost");
        assert!(matches!(path, Cow::Borrowed("/homePost")));

        let path = normalize_path("/");
        assert!(matches!(path, Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(normalize_path("/homePost/"), "/homePost");
        assert_eq!(normalize_path("/results/5/"), "/results/5");
    }

    #[test]
    fn test_normalize_duplicate_and_backslash() {
        assert_eq!(normalize_path("/results//5"), "/results/5");
        assert_eq!(normalize_path("\\results\\5"), "/results/5");
    }

    #[test]
    fn test_normalize_empty_is_root() {
        assert_eq!(normalize_path(""), "/");
    }
}
