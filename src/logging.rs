//! Logging infrastructure: tracing-backed console and file output.
//!
//! Command code logs through [`Logger`], whose methods emit [`tracing`]
//! events. A custom console layer renders them in the codeforge output
//! style (warnings and errors to stderr, everything else to stdout) and a
//! file layer appends every event, ANSI-stripped and timestamped, to
//! `$XDG_CACHE_HOME/codeforge/<command>.log`.
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Mutex;

/// Strip ANSI escape sequences from a string.
///
/// Handles SGR sequences (ending in `m`) and other CSI sequences (ending
/// in any letter in the `@`..`~` range).
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if let Some(next) = chars.next()
                && next == '['
            {
                for inner in chars.by_ref() {
                    if ('@'..='~').contains(&inner) {
                        break;
                    }
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Return the `$XDG_CACHE_HOME/codeforge/` directory, creating it if needed.
fn cache_dir() -> Option<PathBuf> {
    let cache_dir = std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| {
            std::env::var("HOME")
                .or_else(|_| std::env::var("USERPROFILE"))
                .map_or_else(|_| PathBuf::from("."), PathBuf::from)
                .join(".cache")
        },
        PathBuf::from,
    );
    let dir = cache_dir.join("codeforge");
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Return the log file path under the cache directory.
fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(cache_dir()?.join(format!("{command}.log")))
}

/// Format the current UTC time as `YYYY-MM-DD HH:MM:SS`.
fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format the current UTC time as `HH:MM:SS`.
fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::Layer`] that appends all events to the
/// persistent log file with timestamps and ANSI codes stripped.
///
/// Always captures events at `DEBUG` level and above regardless of the
/// console verbosity setting.
#[derive(Debug)]
struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Open (or create) the log file for `command`, write a run header,
    /// and return a new `FileLayer` ready to receive events.
    ///
    /// Returns `None` if the cache directory cannot be created or the file
    /// cannot be opened.
    fn new(command: &str) -> Option<Self> {
        let path = log_file_path(command)?;
        let version =
            option_env!("CODEFORGE_VERSION").unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
        let header = format!(
            "==========================================\n\
             CodeForge {version} {}\n\
             ==========================================\n",
            format_utc_datetime(),
        );
        fs::write(&path, header).ok()?;
        let file = fs::OpenOptions::new().append(true).open(&path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = strip_ansi(&extractor.message);
        let ts = format_utc_time();

        let line = match (level, target) {
            (tracing::Level::INFO, "codeforge::stage") => format!("[{ts}] ==> {msg}"),
            (tracing::Level::ERROR, _) => format!("[{ts}]     [error] {msg}"),
            (tracing::Level::WARN, _) => format!("[{ts}]     [warn] {msg}"),
            (tracing::Level::DEBUG, _) => format!("[{ts}]     [debug] {msg}"),
            _ => format!("[{ts}]     {msg}"),
        };

        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{line}").ok();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits codeforge-style
/// console output.
struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => writeln!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO if target == "codeforge::stage" => {
                writeln!(writer, "\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m")
            }
            tracing::Level::INFO => writeln!(writer, "  {msg}"),
            _ => writeln!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Sets up a console subscriber matching the codeforge output style and a
/// file subscriber that writes all events (including `debug`) to
/// `$XDG_CACHE_HOME/codeforge/<command>.log`. Must be called once at
/// program startup, before any logging.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let default_level = if verbose { "debug" } else { "info" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let make_writer = std::io::stderr
        .with_max_level(tracing::Level::WARN)
        .and(std::io::stdout.with_min_level(tracing::Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_writer(make_writer)
        .with_filter(console_filter);

    let file_layer = FileLayer::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Logger handle used by command code.
///
/// Methods emit [`tracing`] events; the installed subscriber decides how
/// they are rendered on the console and in the log file.
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger for `command`.
    ///
    /// Stores the log file path for later display. The file itself is
    /// created by [`init_subscriber`].
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: "codeforge::stage", "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }
}
