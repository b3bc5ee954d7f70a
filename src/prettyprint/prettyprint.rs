use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{
        self,
        format::{Format, FormatEvent, FormatFields, Full, Writer},
        FmtContext,
    },
    registry::LookupSpan,
};

/// Stderr event format for a short-lived CLI run: no timestamps, and each event is
/// indented under the span it was emitted in, e.g.
///
/// ```text
///   └─ fetch_exchange_balances:  WARN ...
/// ```
pub struct PrettyFormatter {
    inner: Format<Full, ()>,
}

impl PrettyFormatter {
    pub fn new(ansi: bool) -> Self {
        Self {
            inner: fmt::format()
                .without_time()
                .with_ansi(ansi)
                .with_target(false)
                .with_level(true)
                .with_source_location(false),
        }
    }
}

impl<S, N> FormatEvent<S, N> for PrettyFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let spans: Vec<&'static str> = ctx
            .event_scope()
            .map(|scope| scope.from_root().map(|span| span.name()).collect())
            .unwrap_or_default();

        if let Some((innermost, outer)) = spans.split_last() {
            write!(writer, "{}└─ {innermost}: ", "  ".repeat(outer.len()))?;
        }

        self.inner.format_event(ctx, writer, event)
    }
}
