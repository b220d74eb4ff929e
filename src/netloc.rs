//! Network-location splitting
//!
//! `url::Url` normalises hosts and drops default ports, which would merge or
//! split domains differently from what the page author wrote. The netloc here
//! is the raw `//userinfo@host:port` component, taken verbatim.

/// Return the network location of `url`, or an empty string when it has none.
///
/// ```
/// use blogroll_opml::netloc::netloc;
///
/// assert_eq!(netloc("https://user@Blog.Example.com:8443/feed?x=1"), "user@Blog.Example.com:8443");
/// assert_eq!(netloc("mailto:someone@example.com"), "");
/// ```
pub fn netloc(url: &str) -> String {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let rest = match cleaned.find(':') {
        Some(idx) if is_scheme(&cleaned[..idx]) => &cleaned[idx + 1..],
        _ => cleaned.as_str(),
    };

    match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            after[..end].to_string()
        }
        None => String::new(),
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_host() {
        assert_eq!(netloc("http://a.com/1"), "a.com");
        assert_eq!(netloc("https://b.com"), "b.com");
    }

    #[test]
    fn test_userinfo_and_port_are_kept() {
        assert_eq!(netloc("http://me:pw@a.com:8080/x"), "me:pw@a.com:8080");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(netloc("http://A.com"), "A.com");
        assert_ne!(netloc("http://A.com"), netloc("http://a.com"));
    }

    #[test]
    fn test_query_and_fragment_end_netloc() {
        assert_eq!(netloc("http://a.com?q=1"), "a.com");
        assert_eq!(netloc("http://a.com#top"), "a.com");
    }

    #[test]
    fn test_missing_netloc() {
        assert_eq!(netloc("http:/a.com"), "");
        assert_eq!(netloc("http:"), "");
        assert_eq!(netloc("httpish"), "");
        assert_eq!(netloc(""), "");
    }

    #[test]
    fn test_non_http_scheme() {
        assert_eq!(netloc("httpfoo://weird/path"), "weird");
    }

    #[test]
    fn test_control_characters_are_stripped() {
        assert_eq!(netloc("  http://a.\tcom/x"), "a.com");
    }

    #[test]
    fn test_invalid_scheme_chars() {
        // "http_x" is not a valid scheme, so nothing is stripped and the
        // remainder does not start with "//".
        assert_eq!(netloc("http_x://a.com"), "");
    }
}
