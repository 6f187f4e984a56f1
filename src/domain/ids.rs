//! Domain identifier types with validation
//!
//! Newtype wrappers for the two values that end up inside output paths: the
//! short source token and the pixel width.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest width accepted for a single export
pub const MAX_PIXEL_WIDTH: u32 = 16_384;

/// Short identifier used in output file names
///
/// A token is non-empty and made only of lowercase ASCII letters, digits and
/// `-`, so it can be embedded in a file name without escaping.
///
/// # Examples
///
/// ```
/// use brandpack::domain::ids::SourceToken;
/// use std::str::FromStr;
///
/// let token = SourceToken::from_str("icon").unwrap();
/// assert_eq!(token.as_str(), "icon");
/// assert!(SourceToken::from_str("Icon Mark").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceToken(String);

impl SourceToken {
    /// Creates a new SourceToken from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(SourceToken)` if the token is valid, `Err` otherwise
    pub fn new(token: impl Into<String>) -> Result<Self, String> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err("Source token cannot be empty".to_string());
        }

        if let Some(bad) = token
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(format!(
                "Invalid character '{bad}' in source token '{token}'. Allowed: a-z, 0-9, '-'"
            ));
        }

        Ok(Self(token))
    }

    /// Returns the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SourceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SourceToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SourceToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Target raster width in pixels
///
/// # Examples
///
/// ```
/// use brandpack::domain::ids::PixelWidth;
///
/// let width = PixelWidth::new(128).unwrap();
/// assert_eq!(width.dir_name(), "128px");
/// assert_eq!(width.resize_spec(), "128x128");
/// assert!(PixelWidth::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PixelWidth(u32);

impl PixelWidth {
    /// Creates a new PixelWidth, rejecting zero and anything above [`MAX_PIXEL_WIDTH`]
    pub fn new(width: u32) -> Result<Self, String> {
        if width == 0 || width > MAX_PIXEL_WIDTH {
            return Err(format!(
                "Pixel width {width} out of range. Must be between 1 and {MAX_PIXEL_WIDTH}"
            ));
        }
        Ok(Self(width))
    }

    /// Returns the raw width
    pub fn get(self) -> u32 {
        self.0
    }

    /// Name of the size-keyed output directory, e.g. `256px`
    pub fn dir_name(self) -> String {
        format!("{}px", self.0)
    }

    /// Square geometry for resize-style tools, e.g. `256x256`
    pub fn resize_spec(self) -> String {
        format!("{0}x{0}", self.0)
    }
}

impl fmt::Display for PixelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PixelWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width: u32 = s
            .trim()
            .trim_end_matches("px")
            .parse()
            .map_err(|_| format!("Invalid pixel width: '{s}'"))?;
        Self::new(width)
    }
}

impl TryFrom<u32> for PixelWidth {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
