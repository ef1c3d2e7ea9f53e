//! Builds the command line that makes a packaged build record a trace.
//!
//! The produced string is consumed by the engine's own command-line parser, so
//! token order and flag spelling are fixed:
//!
//! ```text
//! <exe> -trace=<tokens> -tracefile=<path> -statnamedevents
//! ```

use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use uetraces_config::{trace_file_name, STAT_NAMED_EVENTS_FLAG, TRACE_TIMESTAMP_FORMAT};

use crate::channels::ChannelSelection;

/// Comma-joined tokens of the selected channels, in registry order.
///
/// Empty when nothing is selected; callers must reject that instead of
/// launching without tracing.
pub fn build_channel_argument(selection: &ChannelSelection) -> String {
    selection
        .selected()
        .map(|c| c.arg_token)
        .collect::<Vec<_>>()
        .join(",")
}

/// Wraps `value` in double quotes when it contains a space.
///
/// Embedded quotes are not escaped.
pub fn quote_if_needed(value: &str) -> String {
    if value.contains(' ') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

pub fn build_command_line(exe_path: &str, channel_arg: &str, trace_file_path: &str) -> String {
    format!(
        "{} -trace={} -tracefile={} {}",
        quote_if_needed(exe_path),
        channel_arg,
        quote_if_needed(trace_file_path),
        STAT_NAMED_EVENTS_FLAG
    )
}

pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TRACE_TIMESTAMP_FORMAT).to_string()
}

/// Current local time as `YYYY-MM-DD_HH-MM-SS`.
///
/// Two launches within the same second get the same name.
pub fn build_timestamp() -> String {
    format_timestamp(&Local::now())
}

pub fn build_trace_file_path(launcher_dir: &Path, timestamp: &str) -> PathBuf {
    launcher_dir.join(trace_file_name(timestamp))
}

/// Everything needed to start one traced run of a packaged build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub exe_path: String,
    pub channel_arg: String,
    pub trace_file: PathBuf,
}

impl LaunchCommand {
    pub fn new(
        exe_path: impl Into<String>,
        channel_arg: impl Into<String>,
        trace_file: PathBuf,
    ) -> Self {
        Self {
            exe_path: exe_path.into(),
            channel_arg: channel_arg.into(),
            trace_file,
        }
    }

    pub fn command_line(&self) -> String {
        build_command_line(
            &self.exe_path,
            &self.channel_arg,
            &self.trace_file.to_string_lossy(),
        )
    }
}
