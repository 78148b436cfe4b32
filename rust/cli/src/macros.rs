//! Macros for common CLI error handling patterns.

/// Write a line to a stream and return the error exit code if writing fails.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

/// Report a failed command on `err` and evaluate to the error exit code.
///
/// # Examples
///
/// ```ignore
/// Err(e) => report_failure!(err, e),
/// ```
#[macro_export]
macro_rules! report_failure {
    ($err:expr, $error:expr) => {{
        $crate::write_or_exit!($err, "Error: {}", $error);
        $crate::exit_code::ERROR
    }};
}
