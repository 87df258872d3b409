//! Primary/fallback result of a recoverable build step

/// Outcome of a step that degrades instead of failing
///
/// `Fallback` carries the substituted value and the reason the primary path
/// was abandoned.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<T> {
    Primary(T),
    Fallback { value: T, reason: String },
}

impl<T> Rendered<T> {
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Rendered::Fallback {
            value,
            reason: reason.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Rendered::Fallback { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            Rendered::Primary(value) | Rendered::Fallback { value, .. } => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Rendered::Primary(value) | Rendered::Fallback { value, .. } => value,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Rendered::Primary(_) => None,
            Rendered::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Rendered<U> {
        match self {
            Rendered::Primary(value) => Rendered::Primary(f(value)),
            Rendered::Fallback { value, reason } => Rendered::Fallback {
                value: f(value),
                reason,
            },
        }
    }
}
