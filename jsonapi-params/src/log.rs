//! Structured JSON logging to stderr.
//!
//! Every line is one JSON object:
//!
//! ```json
//! {"level":"warn","msg":"query param decode failed","dropped":"2","ts":"2025-01-16T10:30:00.000Z"}
//! ```
//!
//! # Usage
//!
//! ```no_run
//! # use jsonapi_params::log;
//! let fields = "bogus";
//!
//! // Structured logging with key-value pairs
//! log!(warn, "sort rejected", fields: fields, count: 1);
//!
//! // Format string style
//! log::error!("failed to load config: {}", "MAX_PAGE_SIZE");
//! log::debug!("parsed {} filters", 3); // only in debug builds
//! ```
//!
//! The level macros are defined as `log_info!`, `log_warn!`, `log_error!` and
//! `log_debug!` and re-exported here under their short names.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
#[doc(hidden)]
#[must_use]
pub fn __format_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    __format_timestamp_from_duration(now.as_secs(), now.subsec_millis())
}

/// Format seconds since the Unix epoch plus milliseconds as ISO 8601.
///
/// Date conversion is Howard Hinnant's `civil_from_days`
/// (<https://howardhinnant.github.io/date_algorithms.html#civil_from_days>).
#[doc(hidden)]
#[must_use]
#[allow(clippy::similar_names)] // doe/doy are the algorithm's names
pub fn __format_timestamp_from_duration(secs: u64, millis: u32) -> String {
    use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

    let days = secs / SECONDS_PER_DAY;
    let time_of_day = secs % SECONDS_PER_DAY;
    let hours = time_of_day / SECONDS_PER_HOUR;
    let minutes = (time_of_day % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = time_of_day % SECONDS_PER_MINUTE;

    // Epoch shifted to 0000-03-01 so leap days fall at the end of the year.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);

    format!("{year:04}-{month:02}-{day:02}T{hours:02}:{minutes:02}:{seconds:02}.{millis:03}Z")
}

/// Escape a string for JSON output per RFC 7159.
#[doc(hidden)]
#[must_use]
pub fn __escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(result, "\\u{:04x}", c as u32);
            },
            c => result.push(c),
        }
    }
    result
}

/// Build one JSON log line from level, message and key-value fields.
#[doc(hidden)]
#[must_use]
pub fn __build_structured_log(level: &str, msg: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(64 + msg.len() + fields.len() * 24);

    output.push_str(r#"{"level":""#);
    output.push_str(level);
    output.push_str(r#"","msg":""#);
    output.push_str(&__escape_json(msg));
    output.push('"');

    for (key, value) in fields {
        output.push_str(r#",""#);
        output.push_str(&__escape_json(key));
        output.push_str(r#"":""#);
        output.push_str(&__escape_json(value));
        output.push('"');
    }

    output.push_str(r#","ts":""#);
    output.push_str(&__format_timestamp());
    output.push_str(r#""}"#);

    output
}

/// Write a finished log line to stderr, ignoring write failures.
#[doc(hidden)]
pub fn __emit(line: &str) {
    use std::io::Write;
    let _ = writeln!(std::io::stderr(), "{line}");
}

/// Log an informational message to stderr.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        $crate::log::__emit(&$crate::log::__build_structured_log("info", &format!($($arg)*), &[]));
    }};
}

/// Log a warning message to stderr.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        $crate::log::__emit(&$crate::log::__build_structured_log("warn", &format!($($arg)*), &[]));
    }};
}

/// Log an error message to stderr.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        $crate::log::__emit(&$crate::log::__build_structured_log("error", &format!($($arg)*), &[]));
    }};
}

/// Log a debug message to stderr. Compiled out in release builds.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            $crate::log::__emit(&$crate::log::__build_structured_log("debug", &format!($($arg)*), &[]));
        }
        #[cfg(not(debug_assertions))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub use log_debug as debug;
pub use log_error as error;
pub use log_info as info;
pub use log_warn as warn;

/// Structured logging macro with key-value pairs.
///
/// ```no_run
/// # use jsonapi_params::log;
/// log!(info, "config loaded", min: 1, max: 100);
/// log!(warn, "page size rejected");
/// ```
///
/// Unlike `log::debug!`, `log!(debug, ...)` is emitted in release builds too.
#[macro_export]
macro_rules! log {
    ($level:ident, $msg:expr $(, $key:ident : $value:expr)* $(,)?) => {{
        let fields: &[(&str, &str)] = &[
            $( (stringify!($key), &format!("{}", $value)) ),*
        ];
        $crate::log::__emit(&$crate::log::__build_structured_log(stringify!($level), $msg, fields));
    }};
}
