use ringlog::Level;

/// Logging settings for the demonstration binary. Nothing is read from the
/// environment, the defaults are the configuration.
#[derive(Copy, Clone, Debug)]
pub struct LogConfig {
    level: Level,
    queue_depth: usize,
    single_message_size: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            queue_depth: 4096,
            single_message_size: 1024,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the most verbose level which will be logged.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the number of log messages which may be buffered before they are
    /// written to the output.
    pub fn queue_depth(mut self, messages: usize) -> Self {
        self.queue_depth = std::cmp::max(1, messages);
        self
    }

    /// Set the maximum size, in bytes, of a single log message.
    pub fn single_message_size(mut self, bytes: usize) -> Self {
        self.single_message_size = std::cmp::max(64, bytes);
        self
    }

    pub fn log_level(&self) -> Level {
        self.level
    }

    pub fn log_queue_depth(&self) -> usize {
        self.queue_depth
    }

    pub fn log_single_message_size(&self) -> usize {
        self.single_message_size
    }
}
