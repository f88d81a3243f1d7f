//! Shared test utilities for the sccbench crates.

pub mod tracing {
    //! A layer that captures spans and events so tests can assert on
    //! instrumentation.
    use std::{
        collections::BTreeMap,
        fmt,
        sync::{Arc, Mutex, PoisonError},
    };

    use tracing::{
        Event, Level, Subscriber,
        field::{Field, Visit},
        span::{Attributes, Id, Record},
    };
    use tracing_subscriber::{Layer, Registry, layer::Context, prelude::*, registry::LookupSpan};

    /// Field name under which `tracing` stores an event's message.
    pub const MESSAGE_FIELD: &str = "message";

    /// Captures closed spans and emitted events in order.
    #[derive(Clone, Debug, Default)]
    pub struct RecordingLayer {
        captured: Arc<Mutex<Captured>>,
    }

    #[derive(Debug, Default)]
    struct Captured {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    /// A span with the fields recorded on it before it closed.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct SpanRecord {
        /// Span name from its metadata.
        pub name: String,
        /// Field values rendered as strings.
        pub fields: BTreeMap<String, String>,
    }

    /// An event with its level and fields.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Field values rendered as strings, including [`MESSAGE_FIELD`].
        pub fields: BTreeMap<String, String>,
    }

    impl EventRecord {
        /// The event's message, if it has one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get(MESSAGE_FIELD).map(String::as_str)
        }
    }

    impl RecordingLayer {
        /// Closed spans in closing order.
        ///
        /// # Examples
        /// ```
        /// use sccbench_test_support::tracing::RecordingLayer;
        ///
        /// assert!(RecordingLayer::default().spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.with_captured(|captured| captured.spans.clone())
        }

        /// Events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.with_captured(|captured| captured.events.clone())
        }

        /// The first closed span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            self.with_captured(|captured| {
                captured
                    .spans
                    .iter()
                    .find(|span| span.name == name)
                    .cloned()
            })
        }

        /// Events at exactly `level` whose message equals `message`.
        #[must_use]
        pub fn events_with_message(&self, level: Level, message: &str) -> Vec<EventRecord> {
            self.with_captured(|captured| {
                captured
                    .events
                    .iter()
                    .filter(|event| event.level == level && event.message() == Some(message))
                    .cloned()
                    .collect()
            })
        }

        fn with_captured<T>(&self, read: impl FnOnce(&Captured) -> T) -> T {
            let captured = self.captured.lock().unwrap_or_else(PoisonError::into_inner);
            read(&captured)
        }

        fn push(&self, write: impl FnOnce(&mut Captured)) {
            let mut captured = self.captured.lock().unwrap_or_else(PoisonError::into_inner);
            write(&mut captured);
        }
    }

    /// Runs `body` with a thread-local subscriber that records into a fresh
    /// layer, returning the body's value and the layer.
    ///
    /// # Examples
    /// ```
    /// use sccbench_test_support::tracing::capture;
    ///
    /// let ((), layer) = capture(|| tracing::info!(answer = 42, "hello"));
    /// let events = layer.events();
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(events[0].message(), Some("hello"));
    /// assert_eq!(events[0].fields.get("answer").map(String::as_str), Some("42"));
    /// ```
    pub fn capture<T>(body: impl FnOnce() -> T) -> (T, RecordingLayer) {
        let layer = RecordingLayer::default();
        let subscriber = Registry::default().with(layer.clone());
        let value = tracing::subscriber::with_default(subscriber, body);
        (value, layer)
    }

    /// Fields accumulated on an open span.
    struct OpenSpan {
        name: String,
        fields: BTreeMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut open = OpenSpan {
                name: attrs.metadata().name().to_owned(),
                fields: BTreeMap::new(),
            };
            attrs.record(&mut FieldVisitor(&mut open.fields));
            span.extensions_mut().insert(open);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldVisitor(&mut open.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            self.push(|captured| {
                captured.spans.push(SpanRecord {
                    name: open.name,
                    fields: open.fields,
                });
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = BTreeMap::new();
            event.record(&mut FieldVisitor(&mut fields));
            self.push(|captured| {
                captured.events.push(EventRecord {
                    level: *event.metadata().level(),
                    fields,
                });
            });
        }
    }

    struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }
    }
}

pub mod memory {
    //! Deterministic [`MemorySampler`] doubles.
    use std::cell::Cell;

    use sccbench_core::{MemorySampler, ProfilingError};

    /// Returns fixed readings and counts how often it was asked.
    #[derive(Debug, Default)]
    pub struct ScriptedSampler {
        current: u64,
        peak: u64,
        samples: Cell<usize>,
    }

    impl ScriptedSampler {
        /// A sampler reporting `current` as the baseline and `peak` as the
        /// high-water mark.
        #[must_use]
        pub const fn new(current: u64, peak: u64) -> Self {
            Self {
                current,
                peak,
                samples: Cell::new(0),
            }
        }

        /// Number of readings taken so far.
        #[must_use]
        pub fn samples(&self) -> usize {
            self.samples.get()
        }

        fn sample(&self, value: u64) -> Result<u64, ProfilingError> {
            self.samples.set(self.samples.get().saturating_add(1));
            Ok(value)
        }
    }

    impl MemorySampler for ScriptedSampler {
        fn current_resident_bytes(&self) -> Result<u64, ProfilingError> {
            self.sample(self.current)
        }

        fn peak_resident_bytes(&self) -> Result<u64, ProfilingError> {
            self.sample(self.peak)
        }
    }

    /// Fails every reading as an unsupported platform would.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct UnavailableSampler;

    impl MemorySampler for UnavailableSampler {
        fn current_resident_bytes(&self) -> Result<u64, ProfilingError> {
            Err(ProfilingError::UnsupportedPlatform { os: "test" })
        }

        fn peak_resident_bytes(&self) -> Result<u64, ProfilingError> {
            Err(ProfilingError::UnsupportedPlatform { os: "test" })
        }
    }
}

pub mod graphs {
    //! Small graphs with known component structure.
    use sccbench_core::DirectedGraph;

    #[expect(clippy::expect_used, reason = "fixture edges are in range by construction")]
    fn build(vertex_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> DirectedGraph {
        DirectedGraph::from_edges(vertex_count, edges).expect("fixture edge out of range")
    }

    /// A single directed cycle `0 -> 1 -> ... -> n-1 -> 0`; one component
    /// for any `n >= 1`.
    #[must_use]
    pub fn cycle(vertex_count: usize) -> DirectedGraph {
        build(
            vertex_count,
            (0..vertex_count).map(|source| {
                let next = source.saturating_add(1);
                (source, if next == vertex_count { 0 } else { next })
            }),
        )
    }

    /// `vertex_count` isolated vertices; `vertex_count` components.
    #[must_use]
    pub fn edgeless(vertex_count: usize) -> DirectedGraph {
        DirectedGraph::with_vertices(vertex_count)
    }

    /// Two three-cycles `{0,1,2}` and `{3,4,5}` joined by `2 -> 3`.
    #[must_use]
    pub fn bridged_triangles() -> DirectedGraph {
        build(6, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)])
    }
}

pub mod algorithms {
    //! [`SccAlgorithm`] doubles that misbehave in controlled ways.
    use sccbench_core::{AlgorithmError, DirectedGraph, SccAlgorithm, SccOutcome, Tarjan};

    /// Tarjan's partition with component ids reversed: the same partition
    /// under different labels.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ReversedIds;

    impl SccAlgorithm for ReversedIds {
        #[expect(
            clippy::unnecessary_literal_bound,
            reason = "SccAlgorithm constrains the return type to &str"
        )]
        fn name(&self) -> &str {
            "reversed-ids"
        }

        fn compute(&self, graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
            let outcome = Tarjan.compute(graph)?;
            let last = outcome.component_count.saturating_sub(1);
            let ids: Vec<usize> = outcome
                .assignment
                .as_slice()
                .iter()
                .map(|&id| last.saturating_sub(id))
                .collect();
            Ok(SccOutcome::new(outcome.component_count, ids))
        }
    }

    /// Reports every vertex as its own component.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Singletons;

    impl SccAlgorithm for Singletons {
        #[expect(
            clippy::unnecessary_literal_bound,
            reason = "SccAlgorithm constrains the return type to &str"
        )]
        fn name(&self) -> &str {
            "singletons"
        }

        fn compute(&self, graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
            Ok(SccOutcome::new(
                graph.vertex_count(),
                graph.vertices().collect::<Vec<_>>(),
            ))
        }
    }

    /// Always fails.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Refusing;

    impl SccAlgorithm for Refusing {
        #[expect(
            clippy::unnecessary_literal_bound,
            reason = "SccAlgorithm constrains the return type to &str"
        )]
        fn name(&self) -> &str {
            "refusing"
        }

        fn compute(&self, _graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
            Err(AlgorithmError::failed("refused"))
        }
    }
}
