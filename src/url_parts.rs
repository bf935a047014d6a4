/// The pieces of a URL that feed the aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// host[:port] as written, empty when the URL has no authority
    pub authority: String,
    /// path as written, possibly empty
    pub path: String,
    pub query: Option<String>,
}

impl UrlParts {
    /// Splits a line along `scheme://authority/path?query#fragment`.
    ///
    /// Nothing is normalized: host case, explicit ports, dot-segments and
    /// unescaped characters are kept exactly as they appear. Lines without a
    /// `//` authority get an empty authority and keep the rest as the path, so
    /// this never fails.
    pub fn parse(line: &str) -> Self {
        let line = line.split_once('#').map_or(line, |(before, _)| before);
        let (rest, query) = match line.split_once('?') {
            Some((rest, query)) => (rest, Some(query.to_string())),
            None => (line, None),
        };

        let rest = strip_scheme(rest);
        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                let netloc = &after[..end];
                // user-info is not part of the authority we report
                let host = netloc.rsplit_once('@').map_or(netloc, |(_, host)| host);
                (host, &after[end..])
            }
            None => ("", rest),
        };

        Self {
            authority: authority.to_string(),
            path: path.to_string(),
            query,
        }
    }
}

fn strip_scheme(s: &str) -> &str {
    let Some((scheme, rest)) = s.split_once(':') else {
        return s;
    };

    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if valid {
        rest
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_standard_url() {
        let parts = UrlParts::parse("https://user:pw@sub.example.com:8443/a/b?x=1#frag");
        assert_eq!(parts.authority, "sub.example.com:8443");
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.query.as_deref(), Some("x=1"));
    }

    #[test]
    fn no_query_is_none() {
        assert_eq!(UrlParts::parse("http://example.com/").query, None);
    }

    #[test]
    fn empty_query_is_kept() {
        assert_eq!(UrlParts::parse("http://example.com/?").query.as_deref(), Some(""));
    }

    #[rstest]
    #[case("http://Example.COM:80/a", "Example.COM:80", "/a")]
    #[case("https://example.com:443/", "example.com:443", "/")]
    #[case("http://b.com", "b.com", "")]
    #[case("http://a.com?x=1", "a.com", "")]
    #[case("http://a.com/x/../y/./z", "a.com", "/x/../y/./z")]
    #[case("http://a.com/a b", "a.com", "/a b")]
    #[case("http://a.com/%7Euser/", "a.com", "/%7Euser/")]
    #[case("http://[::1]:8080/v6", "[::1]:8080", "/v6")]
    fn components_kept_verbatim(#[case] line: &str, #[case] authority: &str, #[case] path: &str) {
        let parts = UrlParts::parse(line);
        assert_eq!(parts.authority, authority);
        assert_eq!(parts.path, path);
    }

    #[rstest]
    #[case("example.com/foo/bar", "", "example.com/foo/bar", None)]
    #[case("/relative/path?q=1", "", "/relative/path", Some("q=1"))]
    #[case("//cdn.example.com/lib.js", "cdn.example.com", "/lib.js", None)]
    #[case("http://bad host/x?y=2#top", "bad host", "/x", Some("y=2"))]
    #[case("not a url", "", "not a url", None)]
    #[case("mailto:someone@example.com", "", "someone@example.com", None)]
    fn unusual_lines_split_without_error(
        #[case] line: &str,
        #[case] authority: &str,
        #[case] path: &str,
        #[case] query: Option<&str>,
    ) {
        let parts = UrlParts::parse(line);
        assert_eq!(parts.authority, authority);
        assert_eq!(parts.path, path);
        assert_eq!(parts.query.as_deref(), query);
    }

    #[test]
    fn user_info_dropped() {
        let parts = UrlParts::parse("http://me@bad host/");
        assert_eq!(parts.authority, "bad host");
    }
}
