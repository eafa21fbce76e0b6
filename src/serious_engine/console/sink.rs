//log sink for the WLD reader
//
//the reader narrates its progress through an injected sink so a console
//view can replay the parse in visit order; the sink never steers parsing

/// Severity of one reader diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Success,
}

/// Receives pre-formatted reader diagnostics, in decoder-visit order.
pub trait LogSink {
    fn log(&mut self, level: LogLevel, message: &str);
}

/// Discards every event. The default when no console is attached.
#[derive(Debug, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&mut self, _level: LogLevel, _message: &str) {}
}

/// Forwards events to the `log` facade, so `RUST_LOG` filtering and the
/// process-wide logger apply.
#[derive(Debug, Default)]
pub struct StdLogSink;

impl LogSink for StdLogSink {
    fn log(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info | LogLevel::Success => log::info!("{}", message),
            LogLevel::Warn => log::warn!("{}", message),
            LogLevel::Error => log::error!("{}", message),
        }
    }
}

/// Buffers events for later display or inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<(LogLevel, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.events.iter().filter(|(l, _)| *l == level).count()
    }
}

impl LogSink for MemorySink {
    fn log(&mut self, level: LogLevel, message: &str) {
        self.events.push((level, message.to_string()));
    }
}

impl<F: FnMut(LogLevel, &str)> LogSink for F {
    fn log(&mut self, level: LogLevel, message: &str) {
        self(level, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.log(LogLevel::Info, "first");
        sink.log(LogLevel::Warn, "second");
        assert_eq!(sink.events[0], (LogLevel::Info, "first".to_string()));
        assert_eq!(sink.events[1], (LogLevel::Warn, "second".to_string()));
        assert_eq!(sink.count(LogLevel::Warn), 1);
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |level: LogLevel, message: &str| {
                seen.push((level, message.to_string()));
            };
            LogSink::log(&mut sink, LogLevel::Success, "done");
        }
        assert_eq!(seen, vec![(LogLevel::Success, "done".to_string())]);
    }
}
