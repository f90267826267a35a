//! Web-vitals reporting.
//!
//! Forwards an optional caller-supplied callback to the five standard
//! web-performance measurements (CLS, FID, FCP, LCP, TTFB). The
//! measurement library itself is an external collaborator: acquiring it is
//! an asynchronous, fallible operation, and a failed acquisition is logged
//! and swallowed: registration is simply skipped for that render, with no
//! retry and no error surfaced to the caller.

use std::future::Future;
use std::rc::Rc;

use dioxus::logger::tracing::error;

use crate::error::VitalsError;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// A single performance metric entry delivered by the measurement library.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    /// Metric name as reported by the library (e.g. "CLS", "TTFB")
    pub name: String,
    /// Current metric value
    pub value: f64,
    /// Change since the last report of this metric
    pub delta: f64,
    /// Unique id for this metric instance
    pub id: String,
}

/// Shared callback invoked with each metric entry as it becomes available.
pub type MetricHandler = Rc<dyn Fn(Metric)>;

/// A source of the five standard web-vitals registrations.
///
/// Each method hands the callback to one measurement; the library invokes
/// it asynchronously whenever that metric is (re)computed.
pub trait VitalsProvider {
    /// Cumulative Layout Shift
    fn on_cls(&self, handler: MetricHandler);
    /// First Input Delay
    fn on_fid(&self, handler: MetricHandler);
    /// First Contentful Paint
    fn on_fcp(&self, handler: MetricHandler);
    /// Largest Contentful Paint
    fn on_lcp(&self, handler: MetricHandler);
    /// Time To First Byte
    fn on_ttfb(&self, handler: MetricHandler);
}

/// Report web vitals through the browser's measurement library.
///
/// With no handler this is a no-op. Otherwise all five measurements are
/// registered with (clones of) the same handler, unless the library fails
/// to load, in which case the failure is logged and nothing is registered.
#[cfg(target_arch = "wasm32")]
pub async fn report_web_vitals(on_perf_entry: Option<MetricHandler>) {
    report_with(on_perf_entry, web::load()).await;
}

/// Generic reporting core, parameterized over the library acquisition.
///
/// Without a handler the acquisition future is never polled, so an absent
/// callback costs nothing. The handler is only ever passed downstream; this
/// function never invokes it itself.
pub async fn report_with<P, Fut>(on_perf_entry: Option<MetricHandler>, acquire: Fut)
where
    P: VitalsProvider,
    Fut: Future<Output = Result<P, VitalsError>>,
{
    let Some(handler) = on_perf_entry else {
        return;
    };

    match acquire.await {
        Ok(vitals) => {
            vitals.on_cls(Rc::clone(&handler));
            vitals.on_fid(Rc::clone(&handler));
            vitals.on_fcp(Rc::clone(&handler));
            vitals.on_lcp(Rc::clone(&handler));
            vitals.on_ttfb(handler);
        }
        // Swallow and log: a missing measurement library must never take
        // the application down or reach the caller.
        Err(err) => error!(?err, "web-vitals unavailable, skipping registration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::logger::tracing::field::{Field, Visit};
    use dioxus::logger::tracing::{span, Event, Level, Metadata, Subscriber};
    use std::cell::{Cell, RefCell};
    use std::sync::{Arc, Mutex};

    /// Provider that records every handler passed to it.
    struct RecordingProvider {
        registered: Rc<RefCell<Vec<MetricHandler>>>,
    }

    impl RecordingProvider {
        fn new() -> (Self, Rc<RefCell<Vec<MetricHandler>>>) {
            let registered = Rc::new(RefCell::new(Vec::new()));
            (
                Self {
                    registered: Rc::clone(&registered),
                },
                registered,
            )
        }

        fn record(&self, handler: MetricHandler) {
            self.registered.borrow_mut().push(handler);
        }
    }

    impl VitalsProvider for RecordingProvider {
        fn on_cls(&self, handler: MetricHandler) {
            self.record(handler);
        }
        fn on_fid(&self, handler: MetricHandler) {
            self.record(handler);
        }
        fn on_fcp(&self, handler: MetricHandler) {
            self.record(handler);
        }
        fn on_lcp(&self, handler: MetricHandler) {
            self.record(handler);
        }
        fn on_ttfb(&self, handler: MetricHandler) {
            self.record(handler);
        }
    }

    #[tokio::test]
    async fn test_valid_handler_registers_all_five_measurements() {
        let (provider, registered) = RecordingProvider::new();
        let handler: MetricHandler = Rc::new(|_metric| {});

        report_with(
            Some(Rc::clone(&handler)),
            async move { Ok::<_, VitalsError>(provider) },
        )
        .await;

        let registered = registered.borrow();
        assert_eq!(registered.len(), 5);
        // Every measurement received the same handler, not a rewrapped one
        for downstream in registered.iter() {
            assert!(Rc::ptr_eq(downstream, &handler));
        }
    }

    #[tokio::test]
    async fn test_missing_handler_skips_acquisition_entirely() {
        let acquired = Rc::new(Cell::new(false));
        let acquire = {
            let acquired = Rc::clone(&acquired);
            async move {
                acquired.set(true);
                let (provider, _) = RecordingProvider::new();
                Ok::<_, VitalsError>(provider)
            }
        };

        report_with(None, acquire).await;

        assert!(!acquired.get(), "acquisition future was polled without a handler");
    }

    #[tokio::test]
    async fn test_failed_acquisition_registers_nothing() {
        let invocations = Rc::new(Cell::new(0u32));
        let handler: MetricHandler = {
            let invocations = Rc::clone(&invocations);
            Rc::new(move |_metric| invocations.set(invocations.get() + 1))
        };

        report_with(Some(handler), async {
            Err::<RecordingProvider, _>(VitalsError::LibraryLoad("import failed".to_string()))
        })
        .await;

        // The handler is only ever invoked by the measurement library, so a
        // failed load must leave it untouched
        assert_eq!(invocations.get(), 0);
    }

    /// Minimal subscriber that records the fields of every ERROR event.
    struct ErrorLogCapture {
        errors: Arc<Mutex<Vec<String>>>,
    }

    impl Subscriber for ErrorLogCapture {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            if *event.metadata().level() == Level::ERROR {
                struct Collector<'a>(&'a mut String);

                impl Visit for Collector<'_> {
                    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
                        use std::fmt::Write;
                        let _ = write!(self.0, "{} = {:?}; ", field.name(), value);
                    }
                }

                let mut fields = String::new();
                event.record(&mut Collector(&mut fields));
                self.errors.lock().unwrap().push(fields);
            }
        }

        fn enter(&self, _span: &span::Id) {}

        fn exit(&self, _span: &span::Id) {}
    }

    #[test]
    fn test_failed_acquisition_logs_the_error_value_once() {
        let errors = Arc::new(Mutex::new(Vec::new()));
        let capture = ErrorLogCapture {
            errors: Arc::clone(&errors),
        };

        dioxus::logger::tracing::subscriber::with_default(capture, || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .expect("runtime");
            runtime.block_on(async {
                let handler: MetricHandler = Rc::new(|_metric| {});
                report_with(Some(handler), async {
                    Err::<RecordingProvider, _>(VitalsError::LibraryLoad(
                        "import failed".to_string(),
                    ))
                })
                .await;
            });
        });

        let errors = errors.lock().unwrap();
        assert_eq!(errors.len(), 1, "expected exactly one diagnostic log");
        // The log carries the error value itself, not a derived message
        assert!(errors[0].contains(r#"LibraryLoad("import failed")"#));
    }

    #[tokio::test]
    async fn test_successful_registration_does_not_invoke_handler_directly() {
        let invocations = Rc::new(Cell::new(0u32));
        let handler: MetricHandler = {
            let invocations = Rc::clone(&invocations);
            Rc::new(move |_metric| invocations.set(invocations.get() + 1))
        };
        let (provider, registered) = RecordingProvider::new();

        report_with(Some(handler), async move { Ok::<_, VitalsError>(provider) }).await;

        assert_eq!(registered.borrow().len(), 5);
        assert_eq!(invocations.get(), 0);
    }
}
