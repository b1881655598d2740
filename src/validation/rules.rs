//! Static rule table for the contact form

use crate::state::FieldName;
use email_address::EmailAddress;

/// A single predicate a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Value must not be empty
    Required,
    /// Value must be at least this many characters long
    MinChars(usize),
    /// Value must be a plain ASCII email address with an alphabetic top-level domain
    Email,
}

impl Check {
    pub fn passes(self, value: &str) -> bool {
        match self {
            Check::Required => !value.is_empty(),
            Check::MinChars(min) => value.chars().count() >= min,
            Check::Email => is_email(value),
        }
    }
}

/// A check paired with the message reported when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

const fn rule(check: Check, message: &'static str) -> Rule {
    Rule { check, message }
}

const NAME_RULES: &[Rule] = &[
    rule(Check::Required, "Name is required"),
    rule(Check::MinChars(2), "Name must be at least 2 characters"),
];

const EMAIL_RULES: &[Rule] = &[
    rule(Check::Required, "Email is required"),
    rule(Check::Email, "Invalid email address"),
];

const SUBJECT_RULES: &[Rule] = &[
    rule(Check::Required, "Subject is required"),
    rule(Check::MinChars(5), "Subject must be at least 5 characters"),
];

const MESSAGE_RULES: &[Rule] = &[
    rule(Check::Required, "Message is required"),
    rule(Check::MinChars(10), "Message must be at least 10 characters"),
];

/// Rules for a field, in evaluation order
pub fn rules_for(field: FieldName) -> &'static [Rule] {
    match field {
        FieldName::Name => NAME_RULES,
        FieldName::Email => EMAIL_RULES,
        FieldName::Subject => SUBJECT_RULES,
        FieldName::Message => MESSAGE_RULES,
    }
}

/// Characters allowed in the local part besides ASCII letters and digits
const LOCAL_PART_SYMBOLS: &str = "_'+-.";

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    is_local_part(local) && is_domain(domain) && EmailAddress::is_valid(value)
}

/// Plain ASCII local part: no quoting, no leading, trailing or doubled dots
fn is_local_part(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with(['.', '\''])
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
}

/// Dotted hostname ending in an alphabetic top-level label of two or more letters
fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };

    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    let hosts_ok = !hosts.is_empty()
        && hosts.iter().all(|label| {
            label.starts_with(|c: char| c.is_ascii_alphanumeric())
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    tld_ok && hosts_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_starts_with_required() {
        for field in FieldName::ALL {
            let rules = rules_for(field);
            assert_eq!(rules.len(), 2);
            assert_eq!(rules[0].check, Check::Required);
        }
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        assert!(Check::MinChars(2).passes("Zé"));
        assert!(!Check::MinChars(3).passes("Zé"));
    }

    #[test]
    fn test_required_rejects_empty() {
        assert!(!Check::Required.passes(""));
        assert!(Check::Required.passes("x"));
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(Check::Email.passes("a@b.com"));
        assert!(Check::Email.passes("alice@example.com"));
        assert!(Check::Email.passes("first.last+tag@mail.example.co.uk"));
        assert!(Check::Email.passes("o'neil@my-host.example.org"));
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        for bad in [
            "bad",
            "a@b",
            "@example.com",
            "alice@",
            "alice@@example.com",
            "alice@example.",
            "alice @example.com",
            "Alice <alice@example.com>",
            "a@b.c",
            "\"quoted\"@example.com",
            "a@example.123",
            "é@example.com",
            ".alice@example.com",
            "alice.@example.com",
            "al..ice@example.com",
            "alice@-example.com",
            "alice@[127.0.0.1]",
            "",
        ] {
            assert!(!Check::Email.passes(bad), "{bad:?} should be rejected");
        }
    }
}
