use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use super::{LogRing, RenderLogEntry, RenderLogLevel, RenderLogSink, RenderLoggerConfig};

/// Timing handle returned by [`RenderLogger::span`].
///
/// Holds no clock reading when the level was filtered out.
#[derive(Debug)]
#[must_use = "pass the span to RenderLogger::finish"]
pub struct CommandSpan {
    level: RenderLogLevel,
    command: &'static str,
    start: Option<Instant>,
}

impl CommandSpan {
    /// Whether `finish` will record this span.
    #[inline]
    pub fn is_recording(&self) -> bool {
        self.start.is_some()
    }
}

/// Per-backend instrumentation sink.
///
/// Records command name, parameters and duration for backend calls. Filtered
/// calls cost a comparison and nothing else.
///
/// Resources (log file, ring) are released by [`cleanup`](Self::cleanup),
/// which may be called any number of times.
#[derive(Debug)]
pub struct RenderLogger {
    backend_id: Arc<str>,
    sink: RenderLogSink,
    level: RenderLogLevel,
    file: Option<LineWriter<File>>,
    ring: Option<LogRing>,
}

impl RenderLogger {
    /// A logger that accepts nothing. Backends start with one until `init`.
    pub fn disabled(backend_id: &str) -> Self {
        Self {
            backend_id: Arc::from(backend_id),
            sink: RenderLogSink::Stdout,
            level: RenderLogLevel::Off,
            file: None,
            ring: None,
        }
    }

    /// Builds a logger from `config`.
    ///
    /// Never fails: an unopenable log file or an unallocatable ring is logged
    /// and the corresponding output is dropped.
    pub fn new(config: &RenderLoggerConfig, backend_id: &str) -> Self {
        let mut logger = Self::disabled(backend_id);
        logger.sink = config.sink;
        logger.level = config.effective_level();

        if logger.level == RenderLogLevel::Off {
            return logger;
        }

        if config.sink == RenderLogSink::File {
            logger.file = match config.sink_target.as_deref() {
                Some(path) => open_log_file(path, backend_id),
                None => {
                    log::warn!("render logger '{backend_id}': file sink without a target, file output dropped");
                    None
                }
            };
        }

        if config.ring_capacity > 0 {
            logger.ring = match LogRing::new(config.ring_capacity) {
                Ok(ring) => Some(ring),
                Err(err) => {
                    log::warn!("render logger '{backend_id}': ring allocation failed: {err}");
                    None
                }
            };
        }

        logger
    }

    #[inline]
    pub fn backend_id(&self) -> &str {
        &self.backend_id
    }

    #[inline]
    pub fn sink(&self) -> RenderLogSink {
        self.sink
    }

    #[inline]
    pub fn level(&self) -> RenderLogLevel {
        self.level
    }

    #[inline]
    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    #[inline]
    pub fn ring(&self) -> Option<&LogRing> {
        self.ring.as_ref()
    }

    /// Whether an entry at `level` would be recorded.
    ///
    /// A logger whose threshold is `Off` accepts nothing. Otherwise entries
    /// pass unless they are chattier than the threshold.
    #[inline]
    pub fn enabled_for(&self, level: RenderLogLevel) -> bool {
        self.level != RenderLogLevel::Off && level <= self.level
    }

    /// Records one command. `parameters` of `None` renders as empty.
    pub fn log(&mut self, level: RenderLogLevel, command: &str, parameters: Option<&str>, duration_ms: f64) {
        if !self.enabled_for(level) {
            return;
        }
        let mut stdout = std::io::stdout().lock();
        self.log_to(&mut stdout, level, command, parameters, duration_ms);
    }

    /// [`log`](Self::log) with the stdout sink redirected to `stdout`.
    fn log_to(
        &mut self,
        stdout: &mut impl Write,
        level: RenderLogLevel,
        command: &str,
        parameters: Option<&str>,
        duration_ms: f64,
    ) {
        if !self.enabled_for(level) {
            return;
        }
        let parameters = parameters.unwrap_or("");

        let written = match self.sink {
            RenderLogSink::Stdout => {
                write_line(stdout, Some(level.prefix()), &self.backend_id, command, parameters, duration_ms)
            }
            RenderLogSink::File => match self.file.as_mut() {
                Some(file) => write_line(file, None, &self.backend_id, command, parameters, duration_ms),
                None => Ok(()),
            },
            RenderLogSink::RingBuffer => Ok(()),
        };
        if let Err(err) = written {
            log::debug!("render logger '{}': {:?} write failed: {err}", self.backend_id, self.sink);
        }

        if let Some(ring) = self.ring.as_mut() {
            ring.push(RenderLogEntry {
                backend_id: Arc::clone(&self.backend_id),
                command: command.to_owned(),
                parameters: parameters.to_owned(),
                duration_ms,
            });
        }
    }

    /// Starts timing `command`. The clock is only read if `level` passes.
    #[inline]
    pub fn span(&self, level: RenderLogLevel, command: &'static str) -> CommandSpan {
        CommandSpan {
            level,
            command,
            start: self.enabled_for(level).then(Instant::now),
        }
    }

    /// Logs a span started with [`span`](Self::span) with its elapsed time.
    pub fn finish(&mut self, span: CommandSpan, parameters: Option<&str>) {
        if let Some(start) = span.start {
            let ms = start.elapsed().as_secs_f64() * 1000.0;
            self.log(span.level, span.command, parameters, ms);
        }
    }

    /// Closes the log file and frees the ring. Idempotent.
    pub fn cleanup(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(err) = file.flush() {
                log::debug!("render logger '{}': flush on close failed: {err}", self.backend_id);
            }
        }
        self.ring = None;
        self.level = RenderLogLevel::Off;
    }
}

/// `[prefix ][backend] command (parameters) N.NNNms`
fn write_line(
    out: &mut impl Write,
    prefix: Option<&str>,
    backend_id: &str,
    command: &str,
    parameters: &str,
    duration_ms: f64,
) -> std::io::Result<()> {
    if let Some(prefix) = prefix {
        write!(out, "{prefix} ")?;
    }
    writeln!(out, "[{backend_id}] {command} ({parameters}) {duration_ms:.3}ms")
}

fn open_log_file(path: &Path, backend_id: &str) -> Option<LineWriter<File>> {
    match File::create(path) {
        Ok(file) => Some(LineWriter::new(file)),
        Err(err) => {
            log::warn!(
                "render logger '{backend_id}': cannot open '{}': {err}, file output dropped",
                path.display()
            );
            None
        }
    }
}
