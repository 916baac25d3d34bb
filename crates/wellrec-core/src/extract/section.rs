//! Locating the well section inside a document.

use super::patterns::SECTION_HEADER;

/// Return the text following the first well-section header.
///
/// Headers are matched case-insensitively. A document without either header
/// is returned unchanged.
pub fn isolate_section(text: &str) -> &str {
    match SECTION_HEADER.find(text) {
        Some(header) => &text[header.end()..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_before_header_is_dropped() {
        let text = "Operator: Boilerplate Co API #: 00-000\nWell Information\nOperator: Real Co API #: 33-053";
        let section = isolate_section(text);

        assert_eq!(section, "\nOperator: Real Co API #: 33-053");
        assert!(!section.contains("Boilerplate"));
    }

    #[test]
    fn test_summary_header_case_insensitive() {
        let text = "cover page\nWell Data Summary\nDatum: NAD83";
        assert_eq!(isolate_section(text), "\nDatum: NAD83");
    }

    #[test]
    fn test_first_header_wins() {
        let text = "a WELL INFORMATION b WELL DATA SUMMARY c";
        assert_eq!(isolate_section(text), " b WELL DATA SUMMARY c");
    }

    #[test]
    fn test_no_header_returns_input() {
        let text = "Operator: Somebody API #: 1\nDatum: NAD27";
        assert_eq!(isolate_section(text), text);
        assert_eq!(isolate_section(""), "");
    }
}
