//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the reconciler,
//! the router and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Document identifiers
pub const FIELD_PAGE_ID: &str = "page_id";
pub const FIELD_CONTAINER_ID: &str = "container_id";
pub const FIELD_ENTRY_ID: &str = "entry_id";

// Counters and flags
pub const FIELD_ENTRY_COUNT: &str = "entry_count";
pub const FIELD_WAS_CREATED: &str = "was_created";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_FALLBACK: &str = "fallback";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_PAGE_ID.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        let events = [EVENT_START, EVENT_END, EVENT_END_ERROR, EVENT_FALLBACK];
        for (i, a) in events.iter().enumerate() {
            for b in events.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
