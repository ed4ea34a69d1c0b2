//! Escaping helpers.

use std::borrow::Cow;

/// Escape text for HTML content and quoted attribute values.
///
/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_html("normal"), "normal");
    }

    #[test]
    fn test_escape_url_untouched() {
        assert_eq!(escape_html("https://google.com/a/b"), "https://google.com/a/b");
    }

    #[test]
    fn test_escape_query_string() {
        assert_eq!(escape_html("/search?a=1&b=2"), "/search?a=1&amp;b=2");
    }
}
