//! Utility functions and constants for XML loading, saving and comparison.

use quick_xml::escape::partial_escape;

/// XML declaration written at the top of every saved document.
pub const XML_DECLARATION_VERSION: &str = "1.0";
pub const XML_DECLARATION_ENCODING: &str = "utf-8";

/// Indentation unit: one tab per depth level.
pub const INDENT_CHAR: u8 = b'\t';

/// Maximum absolute difference for two numeric attribute values to be considered equal.
pub const NUMERIC_TOLERANCE: f64 = 1e-4;

/// UTF-8 byte-order mark, tolerated on input and never written.
pub const UTF8_BOM: char = '\u{feff}';

/// Escapes an attribute value the way the game tooling writes them.
///
/// Besides the markup characters, tab, CR and LF are written as character references
/// so that attribute-value normalization on reload gives back the same string.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes character content with quick-xml's partial escaping. Quotes are left as-is;
/// CR becomes a character reference so it survives end-of-line normalization on reload.
pub fn escape_text(value: &str) -> String {
    let escaped = partial_escape(value);
    if escaped.contains('\r') {
        escaped.replace('\r', "&#xD;")
    } else {
        escaped.into_owned()
    }
}

/// Comment bodies cannot contain `--`; a space is inserted between the dashes.
pub fn sanitize_comment(value: &str) -> String {
    let mut sanitized = value.replace("--", "- -");
    if sanitized.ends_with('-') {
        sanitized.push(' ');
    }
    sanitized
}

/// Parses a value as a finite number, ignoring surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Compares two attribute values: exact string equality, or numeric equality within
/// [`NUMERIC_TOLERANCE`] when both parse as numbers.
pub fn values_equal(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => (x - y).abs() < NUMERIC_TOLERANCE,
        _ => false,
    }
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Converts a byte offset into a 1-based line and column.
pub fn line_and_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let prefix = &source.as_bytes()[..offset];
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |position| position + 1);
    let column = String::from_utf8_lossy(&prefix[line_start..]).chars().count() + 1;
    (line, column)
}

/// Strips a leading byte-order mark.
pub fn strip_bom(source: &str) -> &str {
    source.strip_prefix(UTF8_BOM).unwrap_or(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("a & b"), "a &amp; b");
        assert_eq!(escape_attribute("\"<x>\""), "&quot;&lt;x&gt;&quot;");
        assert_eq!(escape_attribute("line\nbreak\t"), "line&#xA;break&#x9;");
        assert_eq!(escape_attribute("it's"), "it's");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & \"c\""), "a &lt; b &amp; \"c\"");
        assert_eq!(escape_text("keep\nnewline"), "keep\nnewline");
        assert_eq!(escape_text("crlf\r\n & more"), "crlf&#xD;\n &amp; more");
        assert_eq!(escape_text("it's > it"), "it's &gt; it");
    }

    #[test]
    fn test_sanitize_comment() {
        assert_eq!(sanitize_comment(" ok "), " ok ");
        assert_eq!(sanitize_comment("a--b"), "a- -b");
        assert_eq!(sanitize_comment("tail-"), "tail- ");
    }

    #[test]
    fn test_values_equal_numeric_tolerance() {
        assert!(values_equal("1.0", "1"));
        assert!(values_equal("0.10000", "0.1"));
        assert!(values_equal(" 2 ", "2.00001"));
        assert!(!values_equal("1.01", "1.00"));
        assert!(!values_equal("abc", "ABC"));
        assert!(!values_equal("NaN", "NaN "));
        assert!(values_equal("true", "true"));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_line_and_column() {
        let source = "<a>\n  <b>\n</a>";
        assert_eq!(line_and_column(source, 0), (1, 1));
        assert_eq!(line_and_column(source, 6), (2, 3));
        assert_eq!(line_and_column(source, 100), (3, 5));
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}<a/>"), "<a/>");
        assert_eq!(strip_bom("<a/>"), "<a/>");
    }
}
