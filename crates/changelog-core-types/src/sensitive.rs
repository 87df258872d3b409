//! Sensitive data marker for automatic redaction
//!
//! User photo payloads (inline images and remote avatar URLs) identify a
//! person and can be megabytes long. `Sensitive<T>` keeps them out of log
//! output while still recording whether a value was present.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use changelog_core_types::Sensitive;
///
/// let photo = Sensitive::new("https://cdn.example.com/u/42.png");
/// assert_eq!(format!("{:?}", photo), "***REDACTED***");
/// assert_eq!(photo.expose(), &"https://cdn.example.com/u/42.png");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<str>> Sensitive<T> {
    /// Presence marker suitable for logging: `"[present]"` or `"[absent]"`
    pub fn presence(&self) -> &'static str {
        if self.0.as_ref().is_empty() {
            "[absent]"
        } else {
            "[present]"
        }
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_debug_redaction() {
        let photo = Sensitive::new("data:image/png;base64,iVBORw0KGgo=");
        let debug_str = format!("{:?}", photo);
        assert_eq!(debug_str, "***REDACTED***");
        assert!(!debug_str.contains("base64"));
    }

    #[test]
    fn test_sensitive_display_redaction() {
        let photo = Sensitive::new("https://cdn.example.com/avatar.png");
        assert_eq!(format!("{}", photo), "***REDACTED***");
    }

    #[test]
    fn test_presence_marker() {
        assert_eq!(Sensitive::new("x").presence(), "[present]");
        assert_eq!(Sensitive::new(String::new()).presence(), "[absent]");
    }

    #[test]
    fn test_sensitive_into_inner() {
        let photo = Sensitive::new(String::from("payload"));
        assert_eq!(photo.clone().expose(), "payload");
        assert_eq!(photo.into_inner(), "payload");
    }

    #[test]
    fn test_sensitive_with_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct User {
            name: String,
            photo_url: Sensitive<String>,
        }

        let user = User {
            name: "Alice".to_string(),
            photo_url: Sensitive::new("https://cdn.example.com/alice.png".to_string()),
        };

        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("Alice"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("alice.png"));
    }
}
