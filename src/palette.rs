//! Pen palette: maps arbitrary colors onto the fixed set of drawing implements
use crate::RGBA;
use std::{fmt, str::FromStr};

/// Pen slot in a palette, displayed as `color<n>`
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaletteId(pub usize);

impl PaletteId {
    /// Reserved background (paper) slot of the default 8 pen palette
    pub const BACKGROUND: PaletteId = PaletteId(8);
}

impl fmt::Debug for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color{}", self.0)
    }
}

impl FromStr for PaletteId {
    type Err = PaletteError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        id.strip_prefix("color")
            .and_then(|index| index.parse().ok())
            .map(PaletteId)
            .ok_or(PaletteError::InvalidId)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PaletteId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PaletteId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered list of pen colors followed by the background color.
///
/// Identifiers are assigned by position, the background always takes the slot
/// right after the last pen.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<RGBA>,
}

impl Default for Palette {
    /// Default paint set: eight pens on white paper
    fn default() -> Self {
        Self::new(
            [
                RGBA::new(0, 0, 0, 255),
                RGBA::new(255, 0, 0, 255),
                RGBA::new(255, 165, 0, 255),
                RGBA::new(255, 255, 0, 255),
                RGBA::new(0, 128, 0, 255),
                RGBA::new(0, 0, 255, 255),
                RGBA::new(128, 0, 128, 255),
                RGBA::new(139, 69, 19, 255),
            ],
            RGBA::new(255, 255, 255, 255),
        )
    }
}

impl Palette {
    /// Create palette from the pen colors and the background color
    pub fn new(pens: impl IntoIterator<Item = RGBA>, background: RGBA) -> Self {
        let mut colors: Vec<_> = pens.into_iter().collect();
        colors.push(background);
        Self { colors }
    }

    /// Identifier of the background slot
    pub fn background(&self) -> PaletteId {
        PaletteId(self.colors.len() - 1)
    }

    /// Number of slots including background
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Palette always contains at least background slot
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color assigned to the slot
    pub fn color(&self, id: PaletteId) -> Option<RGBA> {
        self.colors.get(id.0).copied()
    }

    /// Identifier of the closest palette color
    pub fn snap_color_id(&self, color: RGBA) -> PaletteId {
        let (index, _) = self.colors.iter().enumerate().fold(
            (0, f32::INFINITY),
            |(best, best_dist), (index, entry)| {
                let dist = entry.distance(color);
                if dist < best_dist {
                    (index, dist)
                } else {
                    (best, best_dist)
                }
            },
        );
        PaletteId(index)
    }

    /// Closest palette color
    pub fn snap_color(&self, color: RGBA) -> RGBA {
        self.colors[self.snap_color_id(color).0]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    InvalidId,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidId => write!(f, "Palette id expected to be color<N>"),
        }
    }
}

impl std::error::Error for PaletteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 9);
        assert_eq!(palette.background(), PaletteId::BACKGROUND);
        assert_eq!(
            palette.color(PaletteId::BACKGROUND),
            Some(RGBA::new(255, 255, 255, 255))
        );
        assert_eq!(palette.color(PaletteId(9)), None);
    }

    #[test]
    fn test_snap() -> Result<(), Box<dyn std::error::Error>> {
        let palette = Palette::default();
        assert_eq!(palette.snap_color_id("#fefefe".parse()?), PaletteId(8));
        assert_eq!(palette.snap_color_id("#101010".parse()?), PaletteId(0));
        assert_eq!(palette.snap_color_id("rgb(230, 10, 20)".parse()?), PaletteId(1));
        assert_eq!(palette.snap_color_id("#0a0aee".parse()?), PaletteId(5));
        assert_eq!(
            palette.snap_color("#f01010".parse()?),
            RGBA::new(255, 0, 0, 255)
        );
        Ok(())
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette::new([RGBA::new(0, 0, 0, 255)], RGBA::new(250, 240, 200, 255));
        assert_eq!(palette.background(), PaletteId(1));
        assert_eq!(palette.snap_color_id(RGBA::new(255, 250, 210, 255)), PaletteId(1));
        assert_eq!(palette.snap_color_id(RGBA::new(40, 40, 40, 255)), PaletteId(0));
    }

    #[test]
    fn test_id_parse() -> Result<(), PaletteError> {
        assert_eq!("color8".parse::<PaletteId>()?, PaletteId(8));
        assert_eq!(PaletteId(3).to_string(), "color3");
        assert_eq!("pen8".parse::<PaletteId>(), Err(PaletteError::InvalidId));
        assert_eq!("color".parse::<PaletteId>(), Err(PaletteError::InvalidId));
        Ok(())
    }
}
