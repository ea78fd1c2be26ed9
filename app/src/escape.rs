//! Output escaping for values embedded in rendered pages.

/// Escapes HTML-significant characters so `input` can be placed in element
/// content or a quoted attribute value.
///
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
///
/// # Examples
///
/// ```
/// use app::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert(1)</script>"), "&lt;script&gt;alert(1)&lt;/script&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("python programming"), "python programming");
    }

    #[test]
    fn test_escape_html_escapes_ampersand_first() {
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_escapes_markup() {
        assert_eq!(escape_html("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_escape_html_script_payload() {
        let escaped = escape_html(r#"<img src="x" onerror='alert(1)'>"#);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(escaped.starts_with("&lt;img"));
    }

    #[test]
    fn test_escape_html_leaves_other_characters() {
        assert_eq!(escape_html("a/b `c` 100%"), "a/b `c` 100%");
        assert_eq!(escape_html("Hello 世界 🚀"), "Hello 世界 🚀");
    }
}
