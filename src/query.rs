use std::collections::BTreeSet;
use url::form_urlencoded;

/// Distinct parameter names present in a query string.
///
/// The query is decoded as `application/x-www-form-urlencoded`. Pairs with an
/// empty value (`a=` or a bare `a`) are skipped unless `keep_blank_values` is
/// set, so a name only shows up if at least one of its values is non-empty.
pub fn parameter_names(query: &str, keep_blank_values: bool) -> BTreeSet<String> {
    form_urlencoded::parse(query.as_bytes())
        .filter(|(_, value)| keep_blank_values || !value.is_empty())
        .map(|(name, _)| name.into_owned())
        .collect()
}
