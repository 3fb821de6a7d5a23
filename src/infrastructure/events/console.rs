//! Console Event Sink
//!
//! Human-readable resolve progress on stderr, filtered by verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{ResolveEvent, ResolveEventSink, Severity};

pub struct ConsoleEventSink {
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl ResolveEventSink for ConsoleEventSink {
    fn on_event(&self, event: ResolveEvent) {
        let prefix = match event.severity() {
            Severity::Warn => "warning: ",
            Severity::Info => "",
            Severity::Debug => "debug: ",
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}{}", prefix, event);
        }
    }

    fn enabled(&self, severity: Severity) -> bool {
        match self.verbosity {
            Verbosity::Quiet => false,
            Verbosity::Normal => severity >= Severity::Warn,
            Verbosity::Verbose => severity >= Severity::Info,
            Verbosity::Debug => true,
        }
    }
}
