//! Input validation and sanitization for user-supplied text.
//!
//! Free text from customers and staff is stored HTML-encoded with script content
//! stripped, so any frontend can render it without further escaping.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum stored length of sanitized complaint text, in characters.
pub const MAX_COMPLAINT_TEXT_CHARS: usize = 5000;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone regex"));
static ALPHANUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s._-]+$").expect("valid alphanumeric regex"));
static SCRIPT_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script regex"));
static JAVASCRIPT_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<[^>]*?javascript:[^>]*?>").expect("valid js tag regex"));
static EVENT_HANDLER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on\w+\s*=").expect("valid event handler regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s").expect("valid ws regex"));

/// Trims the input and HTML-encodes `& < > " '`.
pub fn sanitize_html(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Removes `<script>` blocks, tags containing `javascript:` and `on*=` handlers.
pub fn remove_script_tags(input: &str) -> String {
    let without_scripts = SCRIPT_BLOCK_RE.replace_all(input, "");
    let without_js_tags = JAVASCRIPT_TAG_RE.replace_all(&without_scripts, "");
    EVENT_HANDLER_RE
        .replace_all(&without_js_tags, "")
        .into_owned()
}

/// Strips scripts, HTML-encodes and truncates to `MAX_COMPLAINT_TEXT_CHARS`.
pub fn sanitize_complaint_text(text: &str) -> String {
    let encoded = sanitize_html(&remove_script_tags(text));
    match encoded.char_indices().nth(MAX_COMPLAINT_TEXT_CHARS) {
        Some((byte_index, _)) => encoded[..byte_index].to_string(),
        None => encoded,
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 10 to 15 digits with an optional leading `+`. Whitespace is ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&WHITESPACE_RE.replace_all(phone, ""))
}

pub fn is_valid_alphanumeric(input: &str) -> bool {
    ALPHANUMERIC_RE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests HTML encoding of markup characters.
    ///
    /// Expected: every special character replaced by its entity, input trimmed
    #[test]
    fn encodes_html_characters() {
        assert_eq!(
            sanitize_html("  <b>\"Tom\" & 'Jerry'</b> "),
            "&lt;b&gt;&#34;Tom&#34; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    /// Tests script block removal across lines and letter case.
    ///
    /// Expected: script element and its body removed
    #[test]
    fn removes_script_blocks() {
        let input = "before<SCRIPT type=\"text/javascript\">\nalert(1)\n</script>after";
        assert_eq!(remove_script_tags(input), "beforeafter");
    }

    /// Tests removal of javascript: tags and inline event handlers.
    ///
    /// Expected: link tag dropped and onclick assignment removed
    #[test]
    fn removes_javascript_urls_and_handlers() {
        assert_eq!(
            remove_script_tags("<a href=\"javascript:evil()\">x</a>"),
            "x</a>"
        );
        assert_eq!(remove_script_tags("<img onerror=alert(1)>"), "<img alert(1)>");
    }

    /// Tests that complaint text is truncated to the character limit.
    ///
    /// Expected: exactly MAX_COMPLAINT_TEXT_CHARS characters kept
    #[test]
    fn truncates_complaint_text() {
        let long = "é".repeat(MAX_COMPLAINT_TEXT_CHARS + 10);
        let sanitized = sanitize_complaint_text(&long);
        assert_eq!(sanitized.chars().count(), MAX_COMPLAINT_TEXT_CHARS);
    }

    /// Tests complaint text sanitization order.
    ///
    /// Expected: script removed before encoding so no encoded script remains
    #[test]
    fn sanitizes_complaint_text() {
        assert_eq!(
            sanitize_complaint_text("Broken <script>steal()</script>item & box"),
            "Broken item &amp; box"
        );
    }

    /// Tests email format validation.
    ///
    /// Expected: well-formed addresses accepted, malformed rejected
    #[test]
    fn validates_email() {
        assert!(is_valid_email("jane.doe+test@example.co.uk"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("not an email"));
        assert!(!is_valid_email("jane@example.c"));
    }

    /// Tests phone validation with whitespace and country prefix.
    ///
    /// Expected: 10-15 digits accepted with optional plus sign
    #[test]
    fn validates_phone() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("+44 7700 900123"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("123-456-7890"));
    }

    /// Tests alphanumeric validation.
    ///
    /// Expected: letters, digits, whitespace, dot, underscore and dash allowed
    #[test]
    fn validates_alphanumeric() {
        assert!(is_valid_alphanumeric("ORD-123_a.b c"));
        assert!(!is_valid_alphanumeric("ORD<1>"));
        assert!(!is_valid_alphanumeric(""));
    }
}
