use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Compact one-line event format: a colored level glyph, then the fields.
pub struct SixgrepFormatter;

impl<S, N> FormatEvent<S, N> for SixgrepFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (glyph, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match *event.metadata().level() {
                Level::TRACE => ("[.]", |s| s.dimmed()),
                Level::DEBUG => ("[d]", |s| s.cyan()),
                Level::INFO => ("[i]", |s| s.green()),
                Level::WARN => ("[!]", |s| s.yellow().bold()),
                Level::ERROR => ("[x]", |s| s.red().bold()),
            };

        write!(writer, "{} ", color_func(glyph.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the subscriber; diagnostics go to stderr so scan output stays
/// pipeable. `RUST_LOG` overrides the default `warn` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(SixgrepFormatter)
        .with_writer(std::io::stderr)
        .init();
}
