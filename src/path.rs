/// Reduces a URL path to the prefix stored in the subdirectory set.
///
/// Without a depth the path is kept untouched. With a depth, one leading and
/// one trailing slash are stripped, the first `depth` segments are kept and
/// rejoined under a leading `/`. A path whose first segment is empty maps to
/// `/`.
pub fn path_prefix(path: &str, depth: Option<usize>) -> String {
    let Some(depth) = depth else {
        return path.to_string();
    };

    let stripped = path.strip_prefix('/').unwrap_or(path);
    let stripped = stripped.strip_suffix('/').unwrap_or(stripped);

    let segments: Vec<&str> = stripped.split('/').take(depth).collect();
    match segments.first() {
        Some(first) if !first.is_empty() => format!("/{}", segments.join("/")),
        _ => "/".to_string(),
    }
}
