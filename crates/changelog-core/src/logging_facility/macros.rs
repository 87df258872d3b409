//! Canonical logging macros

/// Log the start of an operation
///
/// ```
/// # use changelog_core::log_op_start;
/// log_op_start!("submit_entry");
/// log_op_start!("submit_entry", page_id = "0:1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::changelog_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::changelog_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use changelog_core::log_op_end;
/// log_op_end!("submit_entry", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::changelog_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::changelog_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into an `ExError` for its kind and code.
///
/// ```
/// # use changelog_core::{log_op_error, errors::ChangelogError};
/// let err = ChangelogError::NoActivePage;
/// log_op_error!("submit_entry", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::changelog_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::changelog_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            message = ex_err.message(),
            $($field)*
        );
    }};
}

/// Log a degraded-but-recovered condition
///
/// ```
/// # use changelog_core::log_op_fallback;
/// log_op_fallback!("synthesize_avatar", reason = "photo decode failed");
/// ```
#[macro_export]
macro_rules! log_op_fallback {
    ($op:expr, reason = $reason:expr) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::changelog_core_types::schema::EVENT_FALLBACK,
            reason = %$reason,
        );
    };
    ($op:expr, reason = $reason:expr, $($field:tt)*) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::changelog_core_types::schema::EVENT_FALLBACK,
            reason = %$reason,
            $($field)*
        );
    };
}
