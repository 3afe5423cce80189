//! Tracer configuration
//!
//! Settings are merged from three sources, highest priority first: call-site
//! overrides, host-wide settings and component defaults.
use crate::{PaletteId, Scalar, StatusTemplate, StippleDescriptor};

/// Effective tracer settings for one run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TraceSettings {
    /// Number of stipples attempted per frame step
    pub iteration_multiplier: usize,
    /// Stroke width of the preview paths
    pub line_width: Scalar,
    /// Polygonal flattening resolution, unused by the circle approximation
    pub flatten_resolution: Scalar,
    /// Palette slots that are never drawn
    pub ignore_colors: Vec<PaletteId>,
    /// Status message template
    pub template: StatusTemplate,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            iteration_multiplier: 2,
            line_width: 10.0,
            flatten_resolution: 15.0,
            ignore_colors: vec![PaletteId::BACKGROUND],
            template: StatusTemplate::default(),
        }
    }
}

impl TraceSettings {
    /// Merge host-wide settings and call-site overrides on top of self
    pub fn merge(&self, host: &HostSettings, overrides: &TraceOverrides) -> Self {
        let mut settings = self.clone();
        if let Some(iteration) = host.autostrokeiteration {
            settings.iteration_multiplier = iteration;
        }
        if let Some(width) = host.autostrokewidth {
            settings.line_width = width;
        }
        if let Some(precision) = host.strokeprecision {
            settings.flatten_resolution = precision * 4.0;
        }

        if let Some(iteration) = overrides.iteration_multiplier {
            settings.iteration_multiplier = iteration;
        }
        if let Some(width) = overrides.line_width {
            settings.line_width = width;
        }
        if let Some(resolution) = overrides.flatten_resolution {
            settings.flatten_resolution = resolution;
        }
        if let Some(ignore) = &overrides.ignore_colors {
            settings.ignore_colors = ignore.clone();
        }
        if let Some(template) = &overrides.template {
            settings.template = template.clone();
        }
        settings
    }

    pub fn is_ignored(&self, id: PaletteId) -> bool {
        self.ignore_colors.contains(&id)
    }
}

/// Host-wide settings shared by all auto-stroke components
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostSettings {
    /// Maps to the iteration multiplier
    pub autostrokeiteration: Option<usize>,
    /// Maps to the line width
    pub autostrokewidth: Option<Scalar>,
    /// Flatten resolution is four times the stroke precision
    pub strokeprecision: Option<Scalar>,
}

/// Call-site overrides, including the stipples to trace
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraceOverrides {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "traceIterationMultiplier", alias = "iterationMultiplier")
    )]
    pub iteration_multiplier: Option<usize>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "lineWidth", alias = "strokeVisualWidth")
    )]
    pub line_width: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(rename = "flattenResolution"))]
    pub flatten_resolution: Option<Scalar>,
    #[cfg_attr(feature = "serde", serde(rename = "ignoreColors"))]
    pub ignore_colors: Option<Vec<PaletteId>>,
    pub template: Option<StatusTemplate>,
    pub stipples: Vec<StippleDescriptor>,
    /// Unrecognized keys, retained but not interpreted
    #[cfg(feature = "serde")]
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TraceOverrides {
    pub fn new(stipples: Vec<StippleDescriptor>) -> Self {
        Self {
            stipples,
            ..Default::default()
        }
    }

    pub fn iteration_multiplier(self, iteration_multiplier: usize) -> Self {
        Self {
            iteration_multiplier: Some(iteration_multiplier),
            ..self
        }
    }

    pub fn line_width(self, line_width: Scalar) -> Self {
        Self {
            line_width: Some(line_width),
            ..self
        }
    }

    pub fn ignore_colors(self, ignore_colors: Vec<PaletteId>) -> Self {
        Self {
            ignore_colors: Some(ignore_colors),
            ..self
        }
    }

    pub fn template(self, template: StatusTemplate) -> Self {
        Self {
            template: Some(template),
            ..self
        }
    }

    /// Parse overrides from JSON object
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
