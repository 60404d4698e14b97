use std::fmt;

pub use log::Level;

/// Target used by [LogCrateSink] for every record it forwards
pub const LOG_TARGET: &str = "gl_program";

/// Leveled message sink the rendering objects write their diagnostics to.
///
/// Objects receive a sink when they are created instead of writing to a global
/// logger, so callers decide where the messages go (the `log` facade, a test
/// buffer, an in-game console...)
pub trait LogSink {
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    #[inline]
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    #[inline]
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }
}

/// Default sink, forwards everything to the `log` facade.
/// Install any `log` implementation in your binary to see the output.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        log::log!(target: LOG_TARGET, level, "{}", args);
    }
}
