//! Generation and validation of unique identifiers.

use uuid::Uuid;

/// The maximum length of a UID.
pub const MAX_UID_LENGTH: usize = 64;

/// Generate a new UID under the `2.25` root,
/// derived from a random UUID as per the standard, part 5, section B.2.
pub fn generate_uid() -> String {
    format!("2.25.{}", Uuid::new_v4().as_u128())
}

/// Check whether `uid` is a syntactically valid UID:
/// at most 64 characters of dot separated numeric components,
/// none of which is empty or has a leading zero.
pub fn is_valid_uid(uid: &str) -> bool {
    !uid.is_empty()
        && uid.len() <= MAX_UID_LENGTH
        && uid.split('.').all(|component| {
            !component.is_empty()
                && component.bytes().all(|c| c.is_ascii_digit())
                && (component == "0" || !component.starts_with('0'))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_uids_are_valid_and_distinct() {
        let a = generate_uid();
        let b = generate_uid();
        assert!(a.starts_with("2.25."));
        assert!(is_valid_uid(&a), "{} is not valid", a);
        assert!(is_valid_uid(&b), "{} is not valid", b);
        assert_ne!(a, b);
    }

    #[test]
    fn uid_syntax() {
        assert!(is_valid_uid("1.2.840.10008.1.2.1"));
        assert!(is_valid_uid("1.0.3"));
        assert!(!is_valid_uid(""));
        assert!(!is_valid_uid("1..2"));
        assert!(!is_valid_uid("1.02"));
        assert!(!is_valid_uid("1.2."));
        assert!(!is_valid_uid("1.2a"));
        assert!(!is_valid_uid(&format!("{}1", "1.".repeat(40))));
    }
}
