use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A theme color.
///
/// Parses from and prints to the same text forms: `#rrggbb`,
/// `rgb(r, g, b)` and `oklch(l, c, h)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Oklch { l, c, h } => format!("oklch({l}, {c}, {h})"),
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dsl())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = |reason| Error::InvalidColor {
            input: input.to_string(),
            reason,
        };

        if let Some(hex) = input.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid("expected six hex digits"));
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| invalid("bad hex digit"))
            };
            return Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let (name, args) = input
            .strip_suffix(')')
            .and_then(|rest| rest.split_once('('))
            .ok_or_else(|| invalid("expected #rrggbb, rgb(..) or oklch(..)"))?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(invalid("expected three components"));
        }

        match name.trim() {
            "rgb" => {
                let mut channels = [0u8; 3];
                for (slot, part) in channels.iter_mut().zip(&parts) {
                    *slot = part.parse().map_err(|_| invalid("rgb components are 0-255"))?;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            "oklch" => {
                let mut values = [0f32; 3];
                for (slot, part) in values.iter_mut().zip(&parts) {
                    *slot = part.parse().map_err(|_| invalid("oklch components are numbers"))?;
                }
                Ok(Self::oklch(values[0], values[1], values[2]))
            }
            _ => Err(invalid("unknown color function")),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_dsl()
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
