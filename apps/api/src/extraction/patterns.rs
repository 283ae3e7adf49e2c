//! Contact-pattern rules — fixed regexes for email, phone, and LinkedIn URL.
//!
//! Each rule is evaluated independently over the full text; the first match
//! in text order wins. A miss is `None`, never an error. Matching is purely
//! syntactic — a version string that looks like an email is accepted as a
//! known false positive.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w.-]+?@[\w.-]+?\.\w{2,4}\b").expect("email pattern is valid"));

// At least 10 digits total, allowing interleaved spaces/hyphens and an
// optional leading '+'.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d\s\-]{8,}\d").expect("phone pattern is valid"));

static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://(www\.)?linkedin\.com/in/[\w\-]+").expect("linkedin pattern is valid")
});

/// Single-value contact fields pulled from resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
}

/// Applies the three pattern rules to the text.
///
/// Deterministic and order-insensitive: the rules do not affect each other,
/// and identical text always yields identical matches.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: first_match(&EMAIL_RE, text),
        phone: first_match(&PHONE_RE, text),
        linkedin: first_match(&LINKEDIN_RE, text),
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTACT_BLOCK: &str =
        "Contact: jane.doe@example.com or +1 415-555-0100, https://linkedin.com/in/jane-doe";

    #[test]
    fn test_email_first_match_wins() {
        let info = extract_contact_info("a@b.com then c@d.org");
        assert_eq!(info.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_email_with_dots_and_hyphens() {
        let info = extract_contact_info(CONTACT_BLOCK);
        assert_eq!(info.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_no_email_is_none() {
        let info = extract_contact_info("no contact details here");
        assert_eq!(info.email, None);
    }

    #[test]
    fn test_phone_with_plus_and_separators() {
        let info = extract_contact_info(CONTACT_BLOCK);
        assert_eq!(info.phone.as_deref(), Some("+1 415-555-0100"));
    }

    #[test]
    fn test_phone_plain_digits() {
        let info = extract_contact_info("Call 4155550100 today");
        assert_eq!(info.phone.as_deref(), Some("4155550100"));
    }

    #[test]
    fn test_short_digit_run_is_not_a_phone() {
        let info = extract_contact_info("room 12345");
        assert_eq!(info.phone, None);
    }

    #[test]
    fn test_linkedin_with_and_without_www() {
        let info = extract_contact_info(CONTACT_BLOCK);
        assert_eq!(info.linkedin.as_deref(), Some("https://linkedin.com/in/jane-doe"));

        let info = extract_contact_info("see http://www.linkedin.com/in/jdoe for details");
        assert_eq!(info.linkedin.as_deref(), Some("http://www.linkedin.com/in/jdoe"));
    }

    #[test]
    fn test_non_linkedin_url_is_none() {
        let info = extract_contact_info("https://github.com/jane-doe");
        assert_eq!(info.linkedin, None);
    }

    #[test]
    fn test_rules_are_independent() {
        // A text matching only one rule leaves the other two untouched.
        let info = extract_contact_info("reach me at jane@works.io");
        assert_eq!(info.email.as_deref(), Some("jane@works.io"));
        assert_eq!(info.phone, None);
        assert_eq!(info.linkedin, None);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(
            extract_contact_info(CONTACT_BLOCK),
            extract_contact_info(CONTACT_BLOCK)
        );
    }
}
