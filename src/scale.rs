use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSize(pub u32);

impl IconSize {
    pub fn pixels(self, scale: Scale) -> Result<u32, PixelSizeError> {
        self.0.checked_mul(scale.0)
            .ok_or(PixelSizeError::Overflow { base: self.0, scale: scale.0 })
    }
}

impl FromStr for IconSize {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('x');
        let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(SizeParseError::InvalidInput(s.to_owned()));
        };

        let width = u32::from_str(width)
            .map_err(|_| SizeParseError::InvalidInput(s.to_owned()))?;
        let height = u32::from_str(height)
            .map_err(|_| SizeParseError::InvalidInput(s.to_owned()))?;

        if width != height {
            return Err(SizeParseError::NotSquare { width, height });
        }

        Ok(IconSize(width))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale(pub u32);

impl FromStr for Scale {
    type Err = ScaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(factor) = s.strip_suffix('x') else {
            return Err(ScaleParseError::InvalidInput(s.to_owned()));
        };

        let factor = u32::from_str(factor)
            .map_err(|_| ScaleParseError::InvalidInput(s.to_owned()))?;

        if factor == 0 {
            return Err(ScaleParseError::InvalidInput(s.to_owned()));
        }

        Ok(Scale(factor))
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SizeParseError {
    #[error("Size {0:?} is not of the form <int>x<int>!")]
    InvalidInput(String),
    #[error("Size {width}x{height} is not square!")]
    NotSquare { width: u32, height: u32 },
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ScaleParseError {
    #[error("Scale {0:?} is not of the form <int>x!")]
    InvalidInput(String),
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelSizeError {
    #[error("Size {base}x{base} at scale {scale}x overflows the pixel size!")]
    Overflow { base: u32, scale: u32 },
}
