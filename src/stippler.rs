//! Helpers around the external voronoi stippler binary: argument building,
//! progress output and SVG output parsing. Nothing here spawns processes or
//! touches the file system.
use crate::{Scalar, StippleDescriptor};
use std::fmt;

/// Options passed to the stippler binary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StipplerOptions {
    /// Number of stipples to generate
    pub stipples: usize,
    /// Colored stipples
    pub color: bool,
    /// Convergence threshold
    pub threshold: Scalar,
    /// Allow overlapping stipples
    pub overlap: bool,
    /// Fixed stipple size
    pub fixed: bool,
    /// Stipple size multiplier
    pub size: Scalar,
    /// Subpixel density
    pub subpixels: usize,
}

impl Default for StipplerOptions {
    fn default() -> Self {
        Self {
            stipples: 500,
            color: true,
            threshold: 0.1,
            overlap: true,
            fixed: false,
            size: 1.0,
            subpixels: 5,
        }
    }
}

impl StipplerOptions {
    /// Command line arguments for converting `input` image into `output` SVG
    pub fn args(&self, input: &str, output: &str) -> Vec<String> {
        let mut args = vec![
            "-s".to_string(),
            self.stipples.to_string(),
            "-t".to_string(),
            self.threshold.to_string(),
            "-z".to_string(),
            self.size.to_string(),
            "-p".to_string(),
            self.subpixels.to_string(),
        ];
        if self.color {
            args.push("-c".to_string());
        }
        if !self.overlap {
            args.push("-n".to_string());
        }
        if self.fixed {
            args.push("-f".to_string());
        }
        args.push(input.to_string());
        args.push(output.to_string());
        args
    }
}

/// Extract completion percentage from a stippler output chunk like `"42% Complete"`
pub fn parse_progress(output: &str) -> Option<u8> {
    if !output.contains("% Complete") {
        return None;
    }
    let (value, _) = output.split_once('%')?;
    let value = value.split_whitespace().last()?;
    let value: u64 = value.parse().ok()?;
    Some(value.min(100) as u8)
}

/// Parse stippler SVG output into stipple descriptors
///
/// Output is expected to contain one `<circle>` element per line. Coordinates
/// and radius are multiplied by `scale`, a missing `fill` means black.
pub fn parse_stipples(svg: &str, scale: Scalar) -> Result<Vec<StippleDescriptor>, ParseError> {
    let mut stipples = Vec::new();
    for (index, line) in svg.lines().enumerate() {
        if !line.contains("circle") {
            continue;
        }
        let line_no = index + 1;
        let mut cx = None;
        let mut cy = None;
        let mut r = None;
        let mut fill = None;
        for (name, value) in attributes(line) {
            match name {
                "cx" => cx = Some(value),
                "cy" => cy = Some(value),
                "r" => r = Some(value),
                "fill" => fill = Some(value),
                _ => {}
            }
        }
        let scalar = |name: &'static str, value: Option<&str>| -> Result<Scalar, ParseError> {
            let value = value.ok_or(ParseError::MissingAttribute {
                line: line_no,
                name,
            })?;
            lexical_core::parse::<Scalar>(value.trim().as_bytes())
                .map_err(|_| ParseError::InvalidNumber {
                    line: line_no,
                    name,
                })
        };
        stipples.push(StippleDescriptor {
            x: scalar("cx", cx)? * scale,
            y: scalar("cy", cy)? * scale,
            r: scalar("r", r)? * scale,
            c: fill.unwrap_or("black").to_string(),
        });
    }
    tracing::debug!("[parse_stipples] {} stipples", stipples.len());
    Ok(stipples)
}

/// Iterate over `name="value"` pairs of a single line element
fn attributes(line: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
    let mut parts = line.split('"');
    std::iter::from_fn(move || {
        let name = parts.next()?;
        let value = parts.next()?;
        let name = name.trim_end().strip_suffix('=')?.trim_end();
        let name = name.rsplit(char::is_whitespace).next()?;
        Some((name, value))
    })
}

/// Error while parsing stippler output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Circle element lacks a required attribute
    MissingAttribute { line: usize, name: &'static str },
    /// Attribute is not a number
    InvalidNumber { line: usize, name: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingAttribute { line, name } => {
                write!(f, "line {}: circle is missing `{}` attribute", line, name)
            }
            ParseError::InvalidNumber { line, name } => {
                write!(f, "line {}: attribute `{}` is not a number", line, name)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for std::io::Error {
    fn from(error: ParseError) -> Self {
        Self::new(std::io::ErrorKind::InvalidData, error)
    }
}
