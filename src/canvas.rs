//! Drawing scope the tracer emits geometry into
use crate::{BBox, PaletteId, Point, RGBA, Scalar, scalar_fmt};
use std::fmt;

/// Role of a traced path in the toolpath pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PathRole {
    Stroke,
    Fill,
}

/// Metadata attached to a traced path
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathData {
    /// Palette slot (pen) used to draw the path
    pub color: PaletteId,
    /// Positional name, `stipple<index>`
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub role: PathRole,
}

/// Closed polygon ready to be spooled to the machine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TracedPath {
    pub points: Vec<Point>,
    pub stroke_color: RGBA,
    pub stroke_width: Scalar,
    pub fill_color: RGBA,
    pub data: PathData,
}

impl TracedPath {
    /// Debug fill color of preview paths
    pub const PREVIEW_FILL: RGBA = RGBA::new(255, 0, 0, 255);

    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(self.points.iter().copied())
    }

    /// Display path vertices as SVG path data
    pub fn svg_path(&self) -> SvgPathData<'_> {
        SvgPathData { points: &self.points }
    }
}

/// SVG path data (`d` attribute) formatter for a polyline
pub struct SvgPathData<'a> {
    points: &'a [Point],
}

impl fmt::Display for SvgPathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, point) in self.points.iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", if index == 0 { "M" } else { "L" })?;
            scalar_fmt(f, point.x())?;
            write!(f, ",")?;
            scalar_fmt(f, point.y())?;
        }
        Ok(())
    }
}

/// Layer selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerKind {
    /// Transient scratch space (previews, image staging)
    Scratch,
    /// Layer holding the toolpaths that will be spooled
    Action,
}

/// Handle to a path inserted into a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId {
    pub layer: LayerKind,
    pub index: usize,
}

/// Drawing scope consumed by the tracer
///
/// Newly inserted paths land in the currently active layer.
pub trait Canvas {
    /// Remove all children of the scratch layer
    fn clear_scratch(&mut self);

    /// Make layer the target for subsequent inserts
    fn activate(&mut self, layer: LayerKind);

    /// Add path to the active layer
    fn insert(&mut self, path: TracedPath) -> PathId;

    /// Remove previously inserted path
    fn remove(&mut self, id: PathId) -> Option<TracedPath>;
}

/// Single layer of paths
///
/// Removed entries leave a hole so handles stay valid, and holes are never
/// reused. Each filtered stipple therefore costs one empty slot until the
/// layer is cleared with [`Layer::remove_children`].
#[derive(Debug, Clone, Default)]
pub struct Layer {
    children: Vec<Option<TracedPath>>,
}

impl Layer {
    pub fn paths(&self) -> impl Iterator<Item = &TracedPath> + '_ {
        self.children.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.paths().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn remove_children(&mut self) {
        self.children.clear();
    }

    pub fn bbox(&self) -> Option<BBox> {
        self.paths()
            .fold(None, |bbox, path| match bbox {
                None => path.bbox(),
                Some(bbox) => Some(bbox.union_opt(path.bbox())),
            })
    }

    /// Display layer as a standalone SVG document
    pub fn svg(&self) -> SvgLayer<'_> {
        SvgLayer { layer: self }
    }

    pub fn to_svg(&self) -> String {
        self.svg().to_string()
    }

    /// Number of slots including holes left by removed paths
    pub fn slots(&self) -> usize {
        self.children.len()
    }

    fn insert(&mut self, path: TracedPath) -> usize {
        self.children.push(Some(path));
        self.children.len() - 1
    }

    fn remove(&mut self, index: usize) -> Option<TracedPath> {
        self.children.get_mut(index).and_then(Option::take)
    }
}

/// SVG document formatter for a layer
pub struct SvgLayer<'a> {
    layer: &'a Layer,
}

impl fmt::Display for SvgLayer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, width, height) = match self.layer.bbox() {
            Some(bbox) => (bbox.x(), bbox.y(), bbox.width(), bbox.height()),
            None => (0.0, 0.0, 0.0, 0.0),
        };
        write!(f, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox=""#)?;
        for (index, value) in [x, y, width, height].into_iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }
            scalar_fmt(f, value)?;
        }
        writeln!(f, r#"">"#)?;
        for path in self.layer.paths() {
            write!(
                f,
                r#"  <path id="{}" d="{}" fill="none" stroke="{}" stroke-width=""#,
                path.data.name,
                path.svg_path(),
                path.stroke_color,
            )?;
            scalar_fmt(f, path.stroke_width)?;
            writeln!(f, r#""/>"#)?;
        }
        writeln!(f, "</svg>")
    }
}

/// In-memory canvas with a scratch and an action layer
#[derive(Debug, Clone)]
pub struct LayeredCanvas {
    scratch: Layer,
    action: Layer,
    active: LayerKind,
}

impl Default for LayeredCanvas {
    fn default() -> Self {
        Self {
            scratch: Layer::default(),
            action: Layer::default(),
            active: LayerKind::Scratch,
        }
    }
}

impl LayeredCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> LayerKind {
        self.active
    }

    pub fn layer(&self, kind: LayerKind) -> &Layer {
        match kind {
            LayerKind::Scratch => &self.scratch,
            LayerKind::Action => &self.action,
        }
    }

    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut Layer {
        match kind {
            LayerKind::Scratch => &mut self.scratch,
            LayerKind::Action => &mut self.action,
        }
    }

    /// Clear both layers (host side "reset all")
    pub fn reset(&mut self) {
        self.scratch.remove_children();
        self.action.remove_children();
    }
}

impl Canvas for LayeredCanvas {
    fn clear_scratch(&mut self) {
        self.scratch.remove_children();
    }

    fn activate(&mut self, layer: LayerKind) {
        self.active = layer;
    }

    fn insert(&mut self, path: TracedPath) -> PathId {
        let layer = self.active;
        let index = self.layer_mut(layer).insert(path);
        PathId { layer, index }
    }

    fn remove(&mut self, id: PathId) -> Option<TracedPath> {
        self.layer_mut(id.layer).remove(id.index)
    }
}
