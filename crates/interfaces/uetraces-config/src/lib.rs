//! Central configuration constants for file names, window geometry and the
//! fixed parts of the trace command line.

/// Title shown on the main window and on informational dialogs.
pub const APP_TITLE: &str = "UE Traces Recorder";

/// Name of the file (next to the launcher executable) that remembers the last
/// launched build.
pub const SETTINGS_FILE_NAME: &str = "UETracesRecorder.settings";

/// Name of the system-wide lock that keeps a second launcher from starting.
pub const SINGLE_INSTANCE_LOCK_NAME: &str = "UETracesRecorder.SingleInstanceMutex";

/// Prefix of every trace file handed to the launched build.
pub const TRACE_FILE_PREFIX: &str = "UETrace_";

/// Extension of trace files, without the dot.
pub const TRACE_FILE_EXTENSION: &str = "utrace";

/// `strftime`-style pattern used to stamp trace files.
pub const TRACE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Flag always appended after `-tracefile=`.
pub const STAT_NAMED_EVENTS_FLAG: &str = "-statnamedevents";

/// Fixed window size in logical points.
pub const WINDOW_SIZE: [f32; 2] = [760.0, 520.0];

/// Number of columns in the trace channel checkbox grid.
pub const CHANNEL_GRID_COLUMNS: usize = 3;

/// Exit code used when the launcher cannot start (lock or window creation).
pub const STARTUP_FAILURE_EXIT_CODE: i32 = -1;

/// Trace file name for a given timestamp, e.g. `UETrace_2024-01-31_12-00-00.utrace`.
pub fn trace_file_name(timestamp: &str) -> String {
    format!("{TRACE_FILE_PREFIX}{timestamp}.{TRACE_FILE_EXTENSION}")
}
