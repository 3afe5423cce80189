use crate::{ColorError, Point, RGBA, Scalar};

/// Single stipple as produced by the stippler: a weighted point with a color.
///
/// Field names follow the stippler output (`x`, `y`, `r`, `c`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StippleDescriptor {
    pub x: Scalar,
    pub y: Scalar,
    pub r: Scalar,
    /// Source color in any notation accepted by [`RGBA`]
    pub c: String,
}

impl StippleDescriptor {
    pub fn new(x: Scalar, y: Scalar, r: Scalar, c: impl Into<String>) -> Self {
        Self {
            x,
            y,
            r,
            c: c.into(),
        }
    }

    /// Validate descriptor and resolve its color
    pub fn resolve(&self) -> Result<Stipple, StippleError> {
        let center = Point::new(self.x, self.y);
        if !center.is_finite() {
            return Err(StippleError::InvalidCenter);
        }
        if !self.r.is_finite() || self.r <= 0.0 {
            return Err(StippleError::InvalidRadius);
        }
        let color = self.c.parse()?;
        Ok(Stipple {
            center,
            radius: self.r,
            color,
        })
    }
}

/// Validated stipple with its color already parsed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stipple {
    pub center: Point,
    pub radius: Scalar,
    pub color: RGBA,
}

impl Stipple {
    /// Circle approximated by its four cardinal points, closed back to the north point
    pub fn cardinal_points(&self) -> [Point; 5] {
        let Point([x, y]) = self.center;
        let r = self.radius;
        [
            Point::new(x, y - r), // N
            Point::new(x + r, y), // E
            Point::new(x, y + r), // S
            Point::new(x - r, y), // W
            Point::new(x, y - r), // N
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StippleError {
    /// `x` or `y` is not a finite number
    InvalidCenter,
    /// `r` is not a finite positive number
    InvalidRadius,
    /// `c` is not a recognized color
    InvalidColor(ColorError),
}

impl From<ColorError> for StippleError {
    fn from(error: ColorError) -> Self {
        Self::InvalidColor(error)
    }
}

impl std::fmt::Display for StippleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StippleError::InvalidCenter => write!(f, "Stipple center must be finite"),
            StippleError::InvalidRadius => write!(f, "Stipple radius must be finite and positive"),
            StippleError::InvalidColor(error) => write!(f, "Stipple color: {}", error),
        }
    }
}

impl std::error::Error for StippleError {}
