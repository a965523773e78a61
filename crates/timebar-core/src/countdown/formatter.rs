//! Countdown text rendering.

const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_MINUTE: i64 = 60;

fn split(seconds: i64) -> (i64, i64, i64) {
    let seconds = seconds.max(0);
    (
        seconds / SECS_PER_HOUR,
        (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE,
        seconds % SECS_PER_MINUTE,
    )
}

/// Render remaining seconds as `H:MM:SS`, or `M:SS` below one hour.
///
/// Negative input renders as `0:00`.
pub fn format(seconds: i64) -> String {
    match split(seconds) {
        (0, minutes, secs) => format!("{}:{:02}", minutes, secs),
        (hours, minutes, secs) => format!("{}:{:02}:{:02}", hours, minutes, secs),
    }
}

/// Status-bar variant of [`format`]: drops seconds once hours are present
/// (`H:MM`) so the title keeps a fixed width.
pub fn format_compact(seconds: i64) -> String {
    match split(seconds) {
        (0, minutes, secs) => format!("{}:{:02}", minutes, secs),
        (hours, minutes, _) => format!("{}:{:02}", hours, minutes),
    }
}
