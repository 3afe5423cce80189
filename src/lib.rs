//! Incremental stipple tracing for robotic drawing.
//!
//! Turns stipples (weighted colored points produced by a voronoi stippler) into
//! small closed toolpaths, a few per animation frame.
//!
//! Main features:
//!  - Frame driven, cancellable trace scheduler with one-shot completion
//!  - Pen palette snapping with configurable ignored (background) pens
//!  - Stippler argument building and SVG output parsing
//!

mod canvas;
mod color;
mod config;
mod geometry;
mod palette;
mod status;
mod stipple;
mod stippler;
mod trace;
mod utils;

pub use canvas::{
    Canvas, Layer, LayerKind, LayeredCanvas, PathData, PathId, PathRole, SvgLayer, SvgPathData,
    TracedPath,
};
pub use color::{ColorError, RGBA, srgb_to_linear};
pub use config::{HostSettings, TraceOverrides, TraceSettings};
pub use geometry::{BBox, EPSILON, Point, Scalar, scalar_fmt};
pub use palette::{Palette, PaletteError, PaletteId};
pub use status::{NullSink, StatusEvent, StatusSink, StatusTemplate, TracingSink};
pub use stipple::{Stipple, StippleDescriptor, StippleError};
pub use stippler::{ParseError, StipplerOptions, parse_progress, parse_stipples};
pub use trace::{
    Completion, ScheduleState, StippleTracer, TraceError, TraceOutcome, TraceSummary,
};
