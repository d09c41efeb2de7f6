//! Tracing support for graph operations.
//!
//! With the `tracing` feature enabled, the span and event macros used across
//! the crate are `tracing`'s own, and [`init_tracing`] installs a layer that
//! accumulates per-span timings.  With the feature disabled, the macros
//! expand to no-ops and the timing functions do nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs the timing layer as the global subscriber.  Safe to call
    /// repeatedly; only the first call has an effect, and an already
    /// installed subscriber is left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Returns the accumulated `(span name, total time, count)` entries
    /// recorded on the current thread, sorted by name.
    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        SPAN_TIMINGS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(name, (duration, count))| (*name, *duration, *count))
                .collect()
        })
    }

    #[doc(hidden)]
    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        let mut entries = span_timings();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        eprintln!("span timings (desc):");
        for (name, duration, count) in entries {
            eprintln!("  {name}: {:?} ({}x)", duration, count);
        }
    }

    pub use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    #[doc(hidden)]
    pub fn reset_span_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
