use std::{fmt, str::FromStr};

/// ABGR color packed as u32 value (most of the platforms are little-endian)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RGBA(u32);

impl RGBA {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }

    /// Convert color to sRGBA list
    pub fn to_rgba(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Convert color to sRGB list (alpha is discarded)
    pub fn to_rgb(self) -> [u8; 3] {
        let [r, g, b, _] = self.to_rgba();
        [r, g, b]
    }

    /// Calculate LUMA of the color.
    pub fn luma(self) -> f32 {
        let [r, g, b] = self.to_rgb();
        0.2126 * (r as f32 / 255.0) + 0.7152 * (g as f32 / 255.0) + 0.0722 * (b as f32 / 255.0)
    }

    /// Pick color that produces the best contrast with self
    pub fn best_contrast(self, c0: Self, c1: Self) -> Self {
        let luma = self.luma();
        if (luma - c0.luma()).abs() < (luma - c1.luma()).abs() {
            c1
        } else {
            c0
        }
    }

    /// Color components in the linear RGB color space (alpha is discarded)
    pub fn to_linear(self) -> [f32; 3] {
        let [r, g, b] = self.to_rgb();
        [
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
        ]
    }

    /// Euclidean distance between two colors in the linear RGB color space
    pub fn distance(self, other: Self) -> f32 {
        let [r0, g0, b0] = self.to_linear();
        let [r1, g1, b1] = other.to_linear();
        let (dr, dg, db) = (r0 - r1, g0 - g1, b0 - b1);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl fmt::Debug for RGBA {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [bg_r, bg_g, bg_b] = self.to_rgb();
        let [fg_r, fg_g, fg_b] = self
            .best_contrast(RGBA::new(255, 255, 255, 255), RGBA::new(0, 0, 0, 255))
            .to_rgb();
        write!(
            fmt,
            "\x1b[38;2;{};{};{};48;2;{};{};{}m",
            fg_r, fg_g, fg_b, bg_r, bg_g, bg_b
        )?;
        write!(fmt, "{}", self)?;
        write!(fmt, "\x1b[m")
    }
}

impl fmt::Display for RGBA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)?;
        if a != 255 {
            write!(f, "{:02x}", a)?;
        }
        Ok(())
    }
}

/// SVG named colors, sorted by name
const SVG_COLORS: &[(&str, RGBA)] = &[
    ("aliceblue", RGBA::new(240, 248, 255, 255)),
    ("antiquewhite", RGBA::new(250, 235, 215, 255)),
    ("aqua", RGBA::new(0, 255, 255, 255)),
    ("aquamarine", RGBA::new(127, 255, 212, 255)),
    ("azure", RGBA::new(240, 255, 255, 255)),
    ("beige", RGBA::new(245, 245, 220, 255)),
    ("bisque", RGBA::new(255, 228, 196, 255)),
    ("black", RGBA::new(0, 0, 0, 255)),
    ("blanchedalmond", RGBA::new(255, 235, 205, 255)),
    ("blue", RGBA::new(0, 0, 255, 255)),
    ("blueviolet", RGBA::new(138, 43, 226, 255)),
    ("brown", RGBA::new(165, 42, 42, 255)),
    ("burlywood", RGBA::new(222, 184, 135, 255)),
    ("cadetblue", RGBA::new(95, 158, 160, 255)),
    ("chartreuse", RGBA::new(127, 255, 0, 255)),
    ("chocolate", RGBA::new(210, 105, 30, 255)),
    ("coral", RGBA::new(255, 127, 80, 255)),
    ("cornflowerblue", RGBA::new(100, 149, 237, 255)),
    ("cornsilk", RGBA::new(255, 248, 220, 255)),
    ("crimson", RGBA::new(220, 20, 60, 255)),
    ("cyan", RGBA::new(0, 255, 255, 255)),
    ("darkblue", RGBA::new(0, 0, 139, 255)),
    ("darkcyan", RGBA::new(0, 139, 139, 255)),
    ("darkgoldenrod", RGBA::new(184, 134, 11, 255)),
    ("darkgray", RGBA::new(169, 169, 169, 255)),
    ("darkgreen", RGBA::new(0, 100, 0, 255)),
    ("darkgrey", RGBA::new(169, 169, 169, 255)),
    ("darkkhaki", RGBA::new(189, 183, 107, 255)),
    ("darkmagenta", RGBA::new(139, 0, 139, 255)),
    ("darkolivegreen", RGBA::new(85, 107, 47, 255)),
    ("darkorange", RGBA::new(255, 140, 0, 255)),
    ("darkorchid", RGBA::new(153, 50, 204, 255)),
    ("darkred", RGBA::new(139, 0, 0, 255)),
    ("darksalmon", RGBA::new(233, 150, 122, 255)),
    ("darkseagreen", RGBA::new(143, 188, 143, 255)),
    ("darkslateblue", RGBA::new(72, 61, 139, 255)),
    ("darkslategray", RGBA::new(47, 79, 79, 255)),
    ("darkslategrey", RGBA::new(47, 79, 79, 255)),
    ("darkturquoise", RGBA::new(0, 206, 209, 255)),
    ("darkviolet", RGBA::new(148, 0, 211, 255)),
    ("deeppink", RGBA::new(255, 20, 147, 255)),
    ("deepskyblue", RGBA::new(0, 191, 255, 255)),
    ("dimgray", RGBA::new(105, 105, 105, 255)),
    ("dimgrey", RGBA::new(105, 105, 105, 255)),
    ("dodgerblue", RGBA::new(30, 144, 255, 255)),
    ("firebrick", RGBA::new(178, 34, 34, 255)),
    ("floralwhite", RGBA::new(255, 250, 240, 255)),
    ("forestgreen", RGBA::new(34, 139, 34, 255)),
    ("fuchsia", RGBA::new(255, 0, 255, 255)),
    ("gainsboro", RGBA::new(220, 220, 220, 255)),
    ("ghostwhite", RGBA::new(248, 248, 255, 255)),
    ("gold", RGBA::new(255, 215, 0, 255)),
    ("goldenrod", RGBA::new(218, 165, 32, 255)),
    ("gray", RGBA::new(128, 128, 128, 255)),
    ("green", RGBA::new(0, 128, 0, 255)),
    ("greenyellow", RGBA::new(173, 255, 47, 255)),
    ("grey", RGBA::new(128, 128, 128, 255)),
    ("honeydew", RGBA::new(240, 255, 240, 255)),
    ("hotpink", RGBA::new(255, 105, 180, 255)),
    ("indianred", RGBA::new(205, 92, 92, 255)),
    ("indigo", RGBA::new(75, 0, 130, 255)),
    ("ivory", RGBA::new(255, 255, 240, 255)),
    ("khaki", RGBA::new(240, 230, 140, 255)),
    ("lavender", RGBA::new(230, 230, 250, 255)),
    ("lavenderblush", RGBA::new(255, 240, 245, 255)),
    ("lawngreen", RGBA::new(124, 252, 0, 255)),
    ("lemonchiffon", RGBA::new(255, 250, 205, 255)),
    ("lightblue", RGBA::new(173, 216, 230, 255)),
    ("lightcoral", RGBA::new(240, 128, 128, 255)),
    ("lightcyan", RGBA::new(224, 255, 255, 255)),
    ("lightgoldenrodyellow", RGBA::new(250, 250, 210, 255)),
    ("lightgray", RGBA::new(211, 211, 211, 255)),
    ("lightgreen", RGBA::new(144, 238, 144, 255)),
    ("lightgrey", RGBA::new(211, 211, 211, 255)),
    ("lightpink", RGBA::new(255, 182, 193, 255)),
    ("lightsalmon", RGBA::new(255, 160, 122, 255)),
    ("lightseagreen", RGBA::new(32, 178, 170, 255)),
    ("lightskyblue", RGBA::new(135, 206, 250, 255)),
    ("lightslategray", RGBA::new(119, 136, 153, 255)),
    ("lightslategrey", RGBA::new(119, 136, 153, 255)),
    ("lightsteelblue", RGBA::new(176, 196, 222, 255)),
    ("lightyellow", RGBA::new(255, 255, 224, 255)),
    ("lime", RGBA::new(0, 255, 0, 255)),
    ("limegreen", RGBA::new(50, 205, 50, 255)),
    ("linen", RGBA::new(250, 240, 230, 255)),
    ("magenta", RGBA::new(255, 0, 255, 255)),
    ("maroon", RGBA::new(128, 0, 0, 255)),
    ("mediumaquamarine", RGBA::new(102, 205, 170, 255)),
    ("mediumblue", RGBA::new(0, 0, 205, 255)),
    ("mediumorchid", RGBA::new(186, 85, 211, 255)),
    ("mediumpurple", RGBA::new(147, 112, 219, 255)),
    ("mediumseagreen", RGBA::new(60, 179, 113, 255)),
    ("mediumslateblue", RGBA::new(123, 104, 238, 255)),
    ("mediumspringgreen", RGBA::new(0, 250, 154, 255)),
    ("mediumturquoise", RGBA::new(72, 209, 204, 255)),
    ("mediumvioletred", RGBA::new(199, 21, 133, 255)),
    ("midnightblue", RGBA::new(25, 25, 112, 255)),
    ("mintcream", RGBA::new(245, 255, 250, 255)),
    ("mistyrose", RGBA::new(255, 228, 225, 255)),
    ("moccasin", RGBA::new(255, 228, 181, 255)),
    ("navajowhite", RGBA::new(255, 222, 173, 255)),
    ("navy", RGBA::new(0, 0, 128, 255)),
    ("oldlace", RGBA::new(253, 245, 230, 255)),
    ("olive", RGBA::new(128, 128, 0, 255)),
    ("olivedrab", RGBA::new(107, 142, 35, 255)),
    ("orange", RGBA::new(255, 165, 0, 255)),
    ("orangered", RGBA::new(255, 69, 0, 255)),
    ("orchid", RGBA::new(218, 112, 214, 255)),
    ("palegoldenrod", RGBA::new(238, 232, 170, 255)),
    ("palegreen", RGBA::new(152, 251, 152, 255)),
    ("paleturquoise", RGBA::new(175, 238, 238, 255)),
    ("palevioletred", RGBA::new(219, 112, 147, 255)),
    ("papayawhip", RGBA::new(255, 239, 213, 255)),
    ("peachpuff", RGBA::new(255, 218, 185, 255)),
    ("peru", RGBA::new(205, 133, 63, 255)),
    ("pink", RGBA::new(255, 192, 203, 255)),
    ("plum", RGBA::new(221, 160, 221, 255)),
    ("powderblue", RGBA::new(176, 224, 230, 255)),
    ("purple", RGBA::new(128, 0, 128, 255)),
    ("rebeccapurple", RGBA::new(102, 51, 153, 255)),
    ("red", RGBA::new(255, 0, 0, 255)),
    ("rosybrown", RGBA::new(188, 143, 143, 255)),
    ("royalblue", RGBA::new(65, 105, 225, 255)),
    ("saddlebrown", RGBA::new(139, 69, 19, 255)),
    ("salmon", RGBA::new(250, 128, 114, 255)),
    ("sandybrown", RGBA::new(244, 164, 96, 255)),
    ("seagreen", RGBA::new(46, 139, 87, 255)),
    ("seashell", RGBA::new(255, 245, 238, 255)),
    ("sienna", RGBA::new(160, 82, 45, 255)),
    ("silver", RGBA::new(192, 192, 192, 255)),
    ("skyblue", RGBA::new(135, 206, 235, 255)),
    ("slateblue", RGBA::new(106, 90, 205, 255)),
    ("slategray", RGBA::new(112, 128, 144, 255)),
    ("slategrey", RGBA::new(112, 128, 144, 255)),
    ("snow", RGBA::new(255, 250, 250, 255)),
    ("springgreen", RGBA::new(0, 255, 127, 255)),
    ("steelblue", RGBA::new(70, 130, 180, 255)),
    ("tan", RGBA::new(210, 180, 140, 255)),
    ("teal", RGBA::new(0, 128, 128, 255)),
    ("thistle", RGBA::new(216, 191, 216, 255)),
    ("tomato", RGBA::new(255, 99, 71, 255)),
    ("turquoise", RGBA::new(64, 224, 208, 255)),
    ("violet", RGBA::new(238, 130, 238, 255)),
    ("wheat", RGBA::new(245, 222, 179, 255)),
    ("white", RGBA::new(255, 255, 255, 255)),
    ("whitesmoke", RGBA::new(245, 245, 245, 255)),
    ("yellow", RGBA::new(255, 255, 0, 255)),
    ("yellowgreen", RGBA::new(154, 205, 50, 255)),
];

impl FromStr for RGBA {
    type Err = ColorError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        let color = color.trim();
        if let Some(hex) = color.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(args) = color
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let mut channels = args.split(',').map(|channel| {
                channel
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| ColorError::InvalidComponent)
            });
            let mut next = || channels.next().unwrap_or(Err(ColorError::InvalidComponent));
            let (r, g, b) = (next()?, next()?, next()?);
            if channels.next().is_some() {
                return Err(ColorError::InvalidComponent);
            }
            Ok(RGBA::new(r, g, b, 255))
        } else {
            let name = color.to_ascii_lowercase();
            SVG_COLORS
                .binary_search_by(|(entry, _)| (*entry).cmp(name.as_str()))
                .map(|index| SVG_COLORS[index].1)
                .map_err(|_| ColorError::UnknownColor)
        }
    }
}

fn parse_hex(hex: &str) -> Result<RGBA, ColorError> {
    let bytes = hex.as_bytes();
    let digit = |byte| match byte {
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'0'..=b'9' => Ok(byte - b'0'),
        _ => Err(ColorError::HexExpected),
    };
    match bytes.len() {
        // #RGB
        3 => {
            let r = digit(bytes[0])?;
            let g = digit(bytes[1])?;
            let b = digit(bytes[2])?;
            Ok(RGBA::new(r << 4 | r, g << 4 | g, b << 4 | b, 255))
        }
        // #RRGGBB(AA)
        6 | 8 => {
            let mut hex = bytes
                .chunks(2)
                .map(|pair| Ok(digit(pair[0])? << 4 | digit(pair[1])?));
            Ok(RGBA::new(
                hex.next().unwrap_or(Ok(0))?,
                hex.next().unwrap_or(Ok(0))?,
                hex.next().unwrap_or(Ok(0))?,
                hex.next().unwrap_or(Ok(255))?,
            ))
        }
        _ => Err(ColorError::HexExpected),
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RGBA {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RGBA {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let color = std::borrow::Cow::<'de, str>::deserialize(deserializer)?;
        color.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert SRGB color component into a linear RGB color component
#[inline]
pub fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    HexExpected,
    InvalidComponent,
    UnknownColor,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::HexExpected => {
                write!(f, "Color expected to be #RGB or #RRGGBB(AA) in hexidemical format")
            }
            ColorError::InvalidComponent => {
                write!(f, "Color expected to be rgb(r, g, b) with components in 0..=255")
            }
            ColorError::UnknownColor => write!(f, "Unknown color name"),
        }
    }
}

impl std::error::Error for ColorError {}
