pub mod channels;
pub mod command;

pub use channels::{ChannelId, ChannelSelection, TraceChannel, CHANNELS, CHANNEL_COUNT};
pub use command::{
    build_channel_argument, build_command_line, build_timestamp, build_trace_file_path,
    format_timestamp, quote_if_needed, LaunchCommand,
};
