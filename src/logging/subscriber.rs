//! Routing of `tracing` events to the console and to the per-command log file.
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use super::utils::{format_utc_datetime, format_utc_time, log_file_path};

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
pub(super) struct MessageExtractor {
    pub(super) message: String,
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

fn message_of(event: &tracing::Event<'_>) -> String {
    let mut extractor = MessageExtractor::default();
    event.record(&mut extractor);
    extractor.message
}

/// One log-file line. Info lines carry no level tag.
fn file_line(level: Level, ts: &str, msg: &str) -> String {
    let tag = match level {
        Level::ERROR => "[error] ",
        Level::WARN => "[warn] ",
        Level::INFO => "",
        _ => "[debug] ",
    };
    format!("[{ts}] {tag}{msg}")
}

/// One console line, colored by level.
fn console_line(level: Level, msg: &str) -> String {
    match level {
        Level::ERROR => format!("\x1b[31merror:\x1b[0m {msg}"),
        Level::WARN => format!("\x1b[33mwarning:\x1b[0m {msg}"),
        Level::INFO => msg.to_string(),
        _ => format!("\x1b[2m{msg}\x1b[0m"),
    }
}

/// Appends every event to the command's log file.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Layer for `command` under the dotgo cache directory.
    ///
    /// Returns `None` if the cache directory or the file cannot be created.
    pub(super) fn new(command: &str) -> Option<Self> {
        let path = log_file_path(command)?;
        Self::create(&path, command).ok()
    }

    /// Truncate `path`, write the run banner, and keep it open for appending.
    pub(super) fn create(path: &Path, command: &str) -> io::Result<Self> {
        let version =
            option_env!("DOTGO_VERSION").unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
        let mut file = fs::File::create(path)?;
        writeln!(
            file,
            "# dotgo {version} {command} started {} UTC",
            format_utc_datetime()
        )?;
        Ok(Self {
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
        let line = file_line(
            *event.metadata().level(),
            &format_utc_time(),
            &message_of(event),
        );
        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{line}").ok();
        }
    }
}

/// Console formatter for dotgo output.
struct DotgoFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for DotgoFormatter
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
        writeln!(
            writer,
            "{}",
            console_line(*event.metadata().level(), &message_of(event))
        )
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, info to stdout; `debug` reaches the
/// console only when `verbose` is set. The log file always records `debug`
/// and above. Must be called once at startup.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let make_writer = io::stderr
        .with_max_level(Level::WARN)
        .and(io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(DotgoFormatter)
        .with_writer(make_writer)
        .with_filter(console_level);

    let file_layer = FileLayer::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
