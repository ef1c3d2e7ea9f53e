//! The fixed registry of trace channels a packaged build understands.

/// Stable identifier of a channel, used as the widget id of its checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceChannel {
    pub display_name: &'static str,
    /// Token passed to `-trace=`. Always lowercase.
    pub arg_token: &'static str,
    pub id: ChannelId,
    pub default_enabled: bool,
}

const fn channel(
    display_name: &'static str,
    arg_token: &'static str,
    id: u16,
    default_enabled: bool,
) -> TraceChannel {
    TraceChannel {
        display_name,
        arg_token,
        id: ChannelId(id),
        default_enabled,
    }
}

pub const CHANNEL_COUNT: usize = 25;

/// All channels in display and argument order.
pub static CHANNELS: [TraceChannel; CHANNEL_COUNT] = [
    channel("CPU", "cpu", 2001, true),
    channel("GPU", "gpu", 2002, true),
    channel("Frame", "frame", 2003, true),
    channel("Log", "log", 2004, true),
    channel("Bookmark", "bookmark", 2005, true),
    channel("Screenshot", "screenshot", 2006, true),
    channel("Task", "task", 2007, false),
    channel("TaskGraph", "taskgraph", 2008, false),
    channel("Counter", "counter", 2009, false),
    channel("Stats", "stats", 2010, false),
    channel("Memory", "memory", 2011, false),
    channel("Module", "module", 2012, false),
    channel("Metadata", "metadata", 2013, false),
    channel("LoadTime", "loadtime", 2014, false),
    channel("AssetLoadTime", "assetloadtime", 2015, false),
    channel("Cook", "cook", 2016, false),
    channel("File", "file", 2017, false),
    channel("Net", "net", 2018, false),
    channel("Object", "object", 2019, false),
    channel("Animation", "animation", 2020, false),
    channel("Audio", "audio", 2021, false),
    channel("Niagara", "niagara", 2022, false),
    channel("RenderCommands", "rendercommands", 2023, false),
    channel("RHICommands", "rhicommands", 2024, false),
    channel("RDG", "rdg", 2025, false),
];

pub fn default_channel_count() -> usize {
    CHANNELS.iter().filter(|c| c.default_enabled).count()
}

/// Checked state of every channel, indexed in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSelection {
    enabled: [bool; CHANNEL_COUNT],
}

impl Default for ChannelSelection {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ChannelSelection {
    pub fn defaults() -> Self {
        let mut enabled = [false; CHANNEL_COUNT];
        for (slot, channel) in enabled.iter_mut().zip(CHANNELS.iter()) {
            *slot = channel.default_enabled;
        }
        Self { enabled }
    }

    pub fn none() -> Self {
        Self {
            enabled: [false; CHANNEL_COUNT],
        }
    }

    /// Selection with exactly the given channels checked.
    pub fn from_ids(ids: &[ChannelId]) -> Self {
        let mut selection = Self::none();
        for id in ids {
            selection.set(*id, true);
        }
        selection
    }

    pub fn is_enabled(&self, id: ChannelId) -> bool {
        index_of(id).is_some_and(|ix| self.enabled[ix])
    }

    /// Returns `false` when `id` is not a registered channel.
    pub fn set(&mut self, id: ChannelId, enabled: bool) -> bool {
        match index_of(id) {
            Some(ix) => {
                self.enabled[ix] = enabled;
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &'static TraceChannel> + '_ {
        CHANNELS
            .iter()
            .zip(self.enabled.iter())
            .filter_map(|(channel, on)| on.then_some(channel))
    }
}

fn index_of(id: ChannelId) -> Option<usize> {
    CHANNELS.iter().position(|c| c.id == id)
}
