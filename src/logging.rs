// Tracing event formatter for console output

use chrono::Local;
use console::style;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();
        let timestamp = Local::now().format("%H:%M:%S");

        let level_str = match level {
            tracing::Level::TRACE => style("TRACE").magenta(),
            tracing::Level::DEBUG => style("DEBUG").cyan(),
            tracing::Level::INFO => style(" INFO").green(),
            tracing::Level::WARN => style(" WARN").yellow(),
            tracing::Level::ERROR => style("ERROR").red(),
        };

        write!(writer, "{} [{}] ", level_str, timestamp)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
