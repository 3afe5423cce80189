//! Incremental stroke tracer
//!
//! Turns a list of stipples into closed circle-like toolpaths a few at a time,
//! driven by the host render loop calling [`StippleTracer::step`] once per frame.
use crate::{
    Canvas, HostSettings, LayerKind, Palette, PathData, PathRole, StatusSink, Stipple,
    StippleError, TraceOverrides, TraceSettings, TracedPath,
};
use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::mpsc,
};

/// Cursor state of the current trace run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleState {
    /// Number of stipples in the run
    pub total: usize,
    /// Index of the next stipple to process
    pub cursor: usize,
    /// Whether frame steps do any work
    pub active: bool,
}

/// Statistics of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Paths left in the canvas
    pub traced: usize,
    /// Stipples dropped by the color filter
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOutcome {
    Completed(TraceSummary),
    /// Run was shut down before reaching the end of the list
    Cancelled,
}

/// One-shot notification of the end of a trace run
#[derive(Debug)]
pub struct Completion {
    receiver: mpsc::Receiver<TraceSummary>,
    outcome: Option<TraceOutcome>,
}

impl Completion {
    fn new() -> (mpsc::Sender<TraceSummary>, Self) {
        let (sender, receiver) = mpsc::channel();
        let completion = Self {
            receiver,
            outcome: None,
        };
        (sender, completion)
    }

    /// Outcome of the run, `None` while it is still in progress
    pub fn poll(&mut self) -> Option<TraceOutcome> {
        if self.outcome.is_none() {
            self.outcome = match self.receiver.try_recv() {
                Ok(summary) => Some(TraceOutcome::Completed(summary)),
                Err(mpsc::TryRecvError::Empty) => None,
                Err(mpsc::TryRecvError::Disconnected) => Some(TraceOutcome::Cancelled),
            };
        }
        self.outcome
    }

    pub fn is_done(&mut self) -> bool {
        self.poll().is_some()
    }
}

type OnComplete = Box<dyn FnOnce()>;

/// Frame driven stipple tracer
///
/// Owns the cursor of a single run. Canvas and status sink are borrowed on each
/// call, so the host keeps ownership of its scene.
pub struct StippleTracer {
    defaults: TraceSettings,
    host: HostSettings,
    palette: Palette,
    settings: TraceSettings,
    stipples: Vec<Stipple>,
    state: ScheduleState,
    summary: TraceSummary,
    completion: Option<mpsc::Sender<TraceSummary>>,
    on_complete: Option<OnComplete>,
}

impl fmt::Debug for StippleTracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StippleTracer")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("summary", &self.summary)
            .finish()
    }
}

impl Default for StippleTracer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl StippleTracer {
    pub fn new(palette: Palette) -> Self {
        let defaults = TraceSettings {
            ignore_colors: vec![palette.background()],
            ..TraceSettings::default()
        };
        Self {
            settings: defaults.clone(),
            defaults,
            host: HostSettings::default(),
            palette,
            stipples: Vec::new(),
            state: ScheduleState::default(),
            summary: TraceSummary::default(),
            completion: None,
            on_complete: None,
        }
    }

    /// Replace component defaults
    pub fn with_defaults(self, defaults: TraceSettings) -> Self {
        Self { defaults, ..self }
    }

    /// Replace host-wide settings, applied on the next setup
    pub fn with_host_settings(self, host: HostSettings) -> Self {
        Self { host, ..self }
    }

    pub fn state(&self) -> ScheduleState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Settings of the current (or last) run
    pub fn settings(&self) -> &TraceSettings {
        &self.settings
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Prepare a new trace run
    ///
    /// Everything is validated before any state is touched, a rejected setup
    /// leaves the tracer and the canvas as they were.
    pub fn setup<C, S>(
        &mut self,
        overrides: TraceOverrides,
        canvas: &mut C,
        status: &mut S,
    ) -> Result<Completion, TraceError>
    where
        C: Canvas + ?Sized,
        S: StatusSink + ?Sized,
    {
        if self.state.active {
            tracing::warn!("[setup] rejected: trace run is already active");
            return Err(TraceError::AlreadyActive);
        }
        let settings = self.defaults.merge(&self.host, &overrides);
        if settings.iteration_multiplier == 0 {
            return Err(TraceError::InvalidConfig(
                "iteration multiplier must be at least 1",
            ));
        }
        let stipples = resolve_stipples(&overrides)?;

        let total = stipples.len();
        let _span = tracing::debug_span!("[setup]", total).entered();

        canvas.activate(LayerKind::Scratch);
        canvas.clear_scratch();

        let (sender, completion) = Completion::new();
        self.completion = Some(sender);
        self.settings = settings;
        self.stipples = stipples;
        self.summary = TraceSummary::default();
        self.state = ScheduleState {
            total,
            cursor: 0,
            active: true,
        };

        status.status(&self.settings.template.render(0, total), true);
        status.progress(0, Some(total));

        canvas.activate(LayerKind::Action);
        tracing::debug!(
            "[setup] iteration_multiplier={} ignore={:?}",
            self.settings.iteration_multiplier,
            self.settings.ignore_colors
        );
        Ok(completion)
    }

    /// Same as [`setup`](Self::setup) with a callback invoked once the run completes
    ///
    /// A panic inside the callback is logged and swallowed.
    pub fn setup_with<C, S>(
        &mut self,
        overrides: TraceOverrides,
        on_complete: impl FnOnce() + 'static,
        canvas: &mut C,
        status: &mut S,
    ) -> Result<Completion, TraceError>
    where
        C: Canvas + ?Sized,
        S: StatusSink + ?Sized,
    {
        let completion = self.setup(overrides, canvas, status)?;
        self.on_complete = Some(Box::new(on_complete));
        Ok(completion)
    }

    /// Advance the run by up to `iteration_multiplier` stipples
    pub fn step<C, S>(&mut self, canvas: &mut C, status: &mut S)
    where
        C: Canvas + ?Sized,
        S: StatusSink + ?Sized,
    {
        for _ in 0..self.settings.iteration_multiplier {
            if !self.state.active {
                break;
            }
            if !self.trace_next(canvas, status) || self.state.cursor >= self.state.total {
                self.complete();
            }
        }
    }

    /// Stop the run, already created geometry stays in the canvas
    ///
    /// Safe to call at any time. A pending [`Completion`] observes the run as cancelled.
    pub fn shutdown(&mut self) {
        if self.state.active {
            tracing::debug!(
                "[shutdown] at {}/{}",
                self.state.cursor,
                self.state.total
            );
        }
        self.state = ScheduleState::default();
        self.stipples.clear();
        self.completion = None;
        self.on_complete = None;
    }

    fn complete(&mut self) {
        let sender = self.completion.take();
        let on_complete = self.on_complete.take();
        let summary = self.summary;
        self.shutdown();

        tracing::info!(
            "[complete] traced={} skipped={}",
            summary.traced,
            summary.skipped
        );
        if let Some(sender) = sender {
            // receiver might be gone, nobody is waiting then
            let _ = sender.send(summary);
        }
        if let Some(on_complete) = on_complete {
            if panic::catch_unwind(AssertUnwindSafe(on_complete)).is_err() {
                tracing::error!("[complete] completion callback panicked");
            }
        }
    }

    /// Trace stipple under the cursor, returns `false` once the list is exhausted
    fn trace_next<C, S>(&mut self, canvas: &mut C, status: &mut S) -> bool
    where
        C: Canvas + ?Sized,
        S: StatusSink + ?Sized,
    {
        let ScheduleState { total, cursor, .. } = self.state;
        if cursor >= total {
            return false;
        }
        let stipple = self.stipples[cursor];

        let color_id = self.palette.snap_color_id(stipple.color);
        let stroke_color = self.palette.snap_color(stipple.color);
        let path = TracedPath {
            points: stipple.cardinal_points().to_vec(),
            stroke_color,
            stroke_width: self.settings.line_width,
            fill_color: TracedPath::PREVIEW_FILL,
            data: PathData {
                color: color_id,
                name: format!("stipple{}", cursor),
                role: PathRole::Stroke,
            },
        };
        let id = canvas.insert(path);

        if self.settings.is_ignored(color_id) {
            canvas.remove(id);
            self.summary.skipped += 1;
            self.state.cursor += 1;
            return true;
        }

        tracing::trace!("[trace] stipple{} {}", cursor, color_id);
        status.status(&self.settings.template.render(cursor + 1, total), true);
        status.progress(cursor, None);

        self.summary.traced += 1;
        self.state.cursor += 1;
        true
    }
}

fn resolve_stipples(overrides: &TraceOverrides) -> Result<Vec<Stipple>, TraceError> {
    let mut stipples = Vec::with_capacity(overrides.stipples.len());
    let mut invalid = Vec::new();
    for (index, desc) in overrides.stipples.iter().enumerate() {
        match desc.resolve() {
            Ok(stipple) => stipples.push(stipple),
            Err(error) => invalid.push((index, error)),
        }
    }
    if invalid.is_empty() {
        Ok(stipples)
    } else {
        tracing::warn!("[setup] rejected: {} invalid stipples", invalid.len());
        Err(TraceError::InvalidInput(invalid))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TraceError {
    /// Setup was called while a run is in progress
    AlreadyActive,
    /// Offending stipples with their indices in the input list
    InvalidInput(Vec<(usize, StippleError)>),
    /// Settings can not drive a run
    InvalidConfig(&'static str),
}

impl TraceError {
    /// Indices of the invalid stipples
    pub fn invalid_indices(&self) -> Vec<usize> {
        match self {
            TraceError::InvalidInput(invalid) => invalid.iter().map(|(index, _)| *index).collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::AlreadyActive => write!(f, "A trace run is already active"),
            TraceError::InvalidInput(invalid) => {
                write!(f, "Invalid stipples:")?;
                for (index, error) in invalid {
                    write!(f, " [{}] {};", index, error)?;
                }
                Ok(())
            }
            TraceError::InvalidConfig(reason) => write!(f, "Invalid trace settings: {}", reason),
        }
    }
}

impl std::error::Error for TraceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LayeredCanvas, PaletteId, Point, StatusEvent, StatusTemplate, StippleDescriptor};
    use std::{cell::Cell, rc::Rc};

    const BLACK: &str = "#000000";
    const WHITE: &str = "#ffffff";

    fn stipples(colors: &[&str]) -> Vec<StippleDescriptor> {
        colors
            .iter()
            .enumerate()
            .map(|(index, color)| {
                StippleDescriptor::new(10.0 * index as f64, 5.0, 1.0, *color)
            })
            .collect()
    }

    fn progress(events: &[StatusEvent]) -> Vec<usize> {
        events
            .iter()
            .filter_map(|event| match event {
                StatusEvent::Progress { current, max: None } => Some(*current),
                _ => None,
            })
            .collect()
    }

    fn action_names(canvas: &LayeredCanvas) -> Vec<String> {
        canvas
            .layer(LayerKind::Action)
            .paths()
            .map(|path| path.data.name.clone())
            .collect()
    }

    #[test]
    fn test_geometry_shape() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        let overrides = TraceOverrides::new(vec![StippleDescriptor::new(10.0, 10.0, 5.0, BLACK)])
            .line_width(2.0);
        tracer.setup(overrides, &mut canvas, &mut events)?;
        tracer.step(&mut canvas, &mut events);

        let path = canvas
            .layer(LayerKind::Action)
            .paths()
            .next()
            .expect("path expected");
        let expected = [(10.0, 5.0), (15.0, 10.0), (10.0, 15.0), (5.0, 10.0), (10.0, 5.0)];
        assert_eq!(path.points.len(), expected.len());
        for (point, expected) in path.points.iter().zip(expected) {
            assert!(point.is_close_to(Point::from(expected)), "{:?}", point);
        }
        assert_eq!(path.data.name, "stipple0");
        assert_eq!(path.data.color, PaletteId(0));
        assert_eq!(path.data.role, PathRole::Stroke);
        assert_eq!(path.stroke_width, 2.0);
        assert_eq!(path.fill_color, TracedPath::PREVIEW_FILL);
        Ok(())
    }

    #[test]
    fn test_setup_events() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        canvas.insert(TracedPath {
            points: vec![Point::new(0.0, 0.0)],
            stroke_color: Default::default(),
            stroke_width: 1.0,
            fill_color: Default::default(),
            data: PathData {
                color: PaletteId(0),
                name: "leftover".to_string(),
                role: PathRole::Fill,
            },
        });
        let mut events = Vec::new();
        let overrides = TraceOverrides::new(stipples(&[BLACK, BLACK, BLACK]))
            .template(StatusTemplate::new("stroke {id}"));
        tracer.setup(overrides, &mut canvas, &mut events)?;

        assert!(canvas.layer(LayerKind::Scratch).is_empty());
        assert_eq!(canvas.active(), LayerKind::Action);
        assert_eq!(
            tracer.state(),
            ScheduleState {
                total: 3,
                cursor: 0,
                active: true
            }
        );
        assert_eq!(
            events,
            vec![
                StatusEvent::Status {
                    message: "stroke 0/3".to_string(),
                    coalesce: true
                },
                StatusEvent::Progress {
                    current: 0,
                    max: Some(3)
                },
            ]
        );

        events.clear();
        tracer.step(&mut canvas, &mut events);
        assert_eq!(
            events[0],
            StatusEvent::Status {
                message: "stroke 1/3".to_string(),
                coalesce: true
            }
        );
        Ok(())
    }

    #[test]
    fn test_progress_monotonic() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        let colors = [BLACK, "#ff0000", WHITE, BLACK, WHITE, "#0000ff", BLACK];
        let mut completion = tracer.setup(
            TraceOverrides::new(stipples(&colors)).iteration_multiplier(3),
            &mut canvas,
            &mut events,
        )?;
        while tracer.is_active() {
            tracer.step(&mut canvas, &mut events);
        }
        assert_eq!(progress(&events), vec![0, 1, 3, 5, 6]);
        assert_eq!(
            completion.poll(),
            Some(TraceOutcome::Completed(TraceSummary {
                traced: 5,
                skipped: 2
            }))
        );
        Ok(())
    }

    #[test]
    fn test_single_completion() -> Result<(), TraceError> {
        for (count, multiplier) in [(0, 1), (1, 1), (5, 1), (5, 2), (6, 3), (7, 10)] {
            let mut tracer = StippleTracer::default();
            let mut canvas = LayeredCanvas::new();
            let mut events = Vec::new();
            let fired = Rc::new(Cell::new(0));
            let fired_cb = fired.clone();
            let mut completion = tracer.setup_with(
                TraceOverrides::new(stipples(&vec![BLACK; count])).iteration_multiplier(multiplier),
                move || fired_cb.set(fired_cb.get() + 1),
                &mut canvas,
                &mut events,
            )?;

            let mut ticks = 0;
            while tracer.is_active() {
                assert_eq!(fired.get(), 0);
                assert_eq!(completion.poll(), None);
                tracer.step(&mut canvas, &mut events);
                ticks += 1;
            }
            let max_ticks = count.div_ceil(multiplier).max(1);
            assert!(ticks <= max_ticks, "{} > {}", ticks, max_ticks);
            assert_eq!(fired.get(), 1);
            assert_eq!(canvas.layer(LayerKind::Action).len(), count);

            for _ in 0..3 {
                tracer.step(&mut canvas, &mut events);
            }
            assert_eq!(fired.get(), 1);
            assert!(matches!(completion.poll(), Some(TraceOutcome::Completed(_))));
        }
        Ok(())
    }

    #[test]
    fn test_filter() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        tracer.setup(
            TraceOverrides::new(stipples(&[BLACK, "#fdfdfd", BLACK])).iteration_multiplier(1),
            &mut canvas,
            &mut events,
        )?;
        events.clear();

        tracer.step(&mut canvas, &mut events);
        assert_eq!(events.len(), 2);
        tracer.step(&mut canvas, &mut events);
        assert_eq!(events.len(), 2);
        assert_eq!(tracer.state().cursor, 2);
        assert_eq!(action_names(&canvas), vec!["stipple0"]);

        tracer.step(&mut canvas, &mut events);
        assert_eq!(action_names(&canvas), vec!["stipple0", "stipple2"]);
        Ok(())
    }

    #[test]
    fn test_filtered_tail() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        let mut completion = tracer.setup(
            TraceOverrides::new(stipples(&[BLACK, WHITE, WHITE])).iteration_multiplier(3),
            &mut canvas,
            &mut events,
        )?;
        events.clear();

        // filtered tail is consumed in the same tick as the last accepted stipple
        tracer.step(&mut canvas, &mut events);
        assert!(!tracer.is_active());
        assert_eq!(
            completion.poll(),
            Some(TraceOutcome::Completed(TraceSummary {
                traced: 1,
                skipped: 2
            }))
        );
        assert_eq!(
            events,
            vec![
                StatusEvent::Status {
                    message: "Spooling stroke: 1/3".to_string(),
                    coalesce: true
                },
                StatusEvent::Progress {
                    current: 0,
                    max: None
                },
            ]
        );
        assert_eq!(action_names(&canvas), vec!["stipple0"]);

        // nothing but filtered stipples
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut completion = tracer.setup(
            TraceOverrides::new(stipples(&[WHITE; 4])).iteration_multiplier(2),
            &mut canvas,
            &mut events,
        )?;
        events.clear();
        let mut ticks = 0;
        while tracer.is_active() {
            tracer.step(&mut canvas, &mut events);
            ticks += 1;
        }
        assert_eq!(ticks, 2);
        assert!(events.is_empty());
        assert!(canvas.layer(LayerKind::Action).is_empty());
        assert_eq!(
            completion.poll(),
            Some(TraceOutcome::Completed(TraceSummary {
                traced: 0,
                skipped: 4
            }))
        );
        Ok(())
    }

    #[test]
    fn test_custom_ignore_list() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        let overrides = TraceOverrides::new(stipples(&[BLACK, WHITE, "#ff0000"]))
            .ignore_colors(vec![PaletteId(0)])
            .iteration_multiplier(10);
        tracer.setup(overrides, &mut canvas, &mut events)?;
        tracer.step(&mut canvas, &mut events);
        assert_eq!(action_names(&canvas), vec!["stipple1", "stipple2"]);
        assert!(!tracer.is_active());
        Ok(())
    }

    #[test]
    fn test_shutdown_idempotent() {
        let mut tracer = StippleTracer::default();
        tracer.shutdown();
        assert_eq!(tracer.state(), ScheduleState::default());
        tracer.shutdown();
        assert_eq!(
            tracer.state(),
            ScheduleState {
                total: 0,
                cursor: 0,
                active: false
            }
        );
    }

    #[test]
    fn test_cancellation() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        let fired = Rc::new(Cell::new(false));
        let fired_cb = fired.clone();
        let mut completion = tracer.setup_with(
            TraceOverrides::new(stipples(&[BLACK; 10])).iteration_multiplier(1),
            move || fired_cb.set(true),
            &mut canvas,
            &mut events,
        )?;
        for _ in 0..4 {
            tracer.step(&mut canvas, &mut events);
        }
        assert_eq!(tracer.state().cursor, 4);
        tracer.shutdown();
        assert!(!tracer.is_active());

        for _ in 0..4 {
            tracer.step(&mut canvas, &mut events);
        }
        assert_eq!(canvas.layer(LayerKind::Action).len(), 4);
        assert!(!tracer.is_active());
        assert!(!fired.get());
        assert_eq!(completion.poll(), Some(TraceOutcome::Cancelled));
        Ok(())
    }

    #[test]
    fn test_reentrant_setup() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        tracer.setup(TraceOverrides::new(stipples(&[BLACK; 4])), &mut canvas, &mut events)?;
        tracer.step(&mut canvas, &mut events);

        let result = tracer.setup(TraceOverrides::new(stipples(&[BLACK])), &mut canvas, &mut events);
        assert_eq!(result.err(), Some(TraceError::AlreadyActive));
        assert_eq!(
            tracer.state(),
            ScheduleState {
                total: 4,
                cursor: 2,
                active: true
            }
        );

        tracer.shutdown();
        tracer.setup(TraceOverrides::new(stipples(&[BLACK])), &mut canvas, &mut events)?;
        assert_eq!(tracer.state().total, 1);
        Ok(())
    }

    #[test]
    fn test_invalid_input() {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        let mut descs = stipples(&[BLACK, BLACK, BLACK, BLACK]);
        descs[1].x = f64::NAN;
        descs[3].c = "not a color".to_string();
        let error = tracer
            .setup(TraceOverrides::new(descs), &mut canvas, &mut events)
            .unwrap_err();
        assert_eq!(error.invalid_indices(), vec![1, 3]);
        assert!(error.to_string().starts_with("Invalid stipples: [1]"));
        assert!(!tracer.is_active());
        assert!(events.is_empty());

        let error = tracer
            .setup(
                TraceOverrides::new(stipples(&[BLACK])).iteration_multiplier(0),
                &mut canvas,
                &mut events,
            )
            .unwrap_err();
        assert!(matches!(error, TraceError::InvalidConfig(_)));
    }

    #[test]
    fn test_panicking_callback() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default();
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        let mut completion = tracer.setup_with(
            TraceOverrides::new(stipples(&[BLACK])),
            || panic!("callback failure"),
            &mut canvas,
            &mut events,
        )?;
        tracer.step(&mut canvas, &mut events);
        assert!(!tracer.is_active());
        assert!(completion.is_done());

        tracer.setup(TraceOverrides::new(stipples(&[BLACK])), &mut canvas, &mut events)?;
        tracer.step(&mut canvas, &mut events);
        assert_eq!(canvas.layer(LayerKind::Action).len(), 2);
        Ok(())
    }

    #[test]
    fn test_host_settings() -> Result<(), TraceError> {
        let mut tracer = StippleTracer::default().with_host_settings(HostSettings {
            autostrokeiteration: Some(5),
            autostrokewidth: Some(4.0),
            strokeprecision: None,
        });
        let mut canvas = LayeredCanvas::new();
        let mut events = Vec::new();
        tracer.setup(TraceOverrides::new(stipples(&[BLACK; 6])), &mut canvas, &mut events)?;
        assert_eq!(tracer.settings().iteration_multiplier, 5);
        tracer.step(&mut canvas, &mut events);
        assert_eq!(tracer.state().cursor, 5);
        let widths: Vec<_> = canvas
            .layer(LayerKind::Action)
            .paths()
            .map(|path| path.stroke_width)
            .collect();
        assert_eq!(widths, vec![4.0; 5]);
        Ok(())
    }
}
