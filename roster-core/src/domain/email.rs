//! Email shape validation
//!
//! A syntactic sanity check only: one `@` separating a local part from a
//! domain part that contains at least one `.`, with no whitespace anywhere.
//! Not RFC-compliant validation; anything stricter is up to the repository
//! or the mail transport behind the notifier.

use regex::Regex;

/// Check whether a candidate string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    let shape_re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    shape_re.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("bob.smith@mail.example.org"));
        assert!(is_valid_email("x+tag@y.co"));
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("\t\n"));
    }

    #[test]
    fn test_rejects_missing_or_extra_at() {
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo.example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_rejects_incomplete_domain() {
        assert!(!is_valid_email("bar@"));
        assert!(!is_valid_email("bar@example"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_rejects_whitespace_anywhere() {
        assert!(!is_valid_email("a lice@example.com"));
        assert!(!is_valid_email("alice@exa mple.com"));
        assert!(!is_valid_email(" alice@example.com"));
        assert!(!is_valid_email("alice@example.com "));
    }
}
