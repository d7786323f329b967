//! Gradients as sequences of color stops.
//!
//! A [`Gradient`] has a type such as `linear-gradient` or `radial-gradient`, a
//! direction that only is meaningful for linear gradients, and two or more
//! [`GradientStop`]s. Each stop pairs a color with an optional position
//! `0%..=100%`. A stop without position sits at 0%, which is also why
//! serialization omits a position of 0%.
//!
//! ```
//! # use huebox::gradient::{Gradient, GradientError};
//! # fn main() -> Result<(), GradientError> {
//! let mut gradient = Gradient::parse("linear-gradient(90deg, #fff 0%, #000 100%)")?;
//! assert_eq!(gradient.add_step(50)?, 1);
//! assert_eq!(
//!     gradient.to_string(),
//!     "linear-gradient(90deg, #fff, #808080 50%, #000 100%)"
//! );
//!
//! // Gradients always keep two stops.
//! assert!(gradient.remove_step(1));
//! assert!(!gradient.remove_step(0));
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorFormatError;
use crate::{from_string, Color, Float};

pub use crate::error::GradientError;

/// The type of gradients with a direction.
pub const LINEAR_GRADIENT: &str = "linear-gradient";

/// The direction of gradients without explicit direction.
pub const DEFAULT_DIRECTION: &str = "90deg";

// ====================================================================================================================
// Gradient Stop
// ====================================================================================================================

/// A color stop.
///
/// A stop keeps the color string as written next to the parsed color. Both
/// always denote the same color: Updating the string reparses it, and updating
/// the parsed color reserializes it.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    color: String,
    parsed: Color,
    position: Option<u8>,
}

impl GradientStop {
    /// Create a new gradient stop.
    pub fn new(color: &str, position: Option<u8>) -> Result<Self, GradientError> {
        if position.is_some_and(|p| 100 < p) {
            return Err(GradientError::PositionOutOfRange);
        }

        let color = color.trim();
        Ok(Self {
            color: color.to_owned(),
            parsed: from_string(color)?,
            position,
        })
    }

    /// Create a new gradient stop from a parsed color.
    fn with_color(color: Color, position: u8) -> Self {
        Self {
            color: color.to_string(),
            parsed: color,
            position: Some(position),
        }
    }

    /// Get the color as written.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Get the parsed color.
    pub fn parsed_color(&self) -> &Color {
        &self.parsed
    }

    /// Get the position, which is 0 for stops without explicit position.
    pub fn position(&self) -> u8 {
        self.position.unwrap_or(0)
    }

    /// Determine whether this stop has an explicit position.
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Update the color string. If the string does not parse, this method
    /// leaves the stop unchanged.
    pub fn set_color(&mut self, color: &str) -> Result<(), ColorFormatError> {
        let color = color.trim();
        self.parsed = from_string(color)?;
        color.clone_into(&mut self.color);
        Ok(())
    }

    /// Update the parsed color, which also rewrites the color string.
    pub fn set_parsed_color(&mut self, color: Color) {
        self.color = color.to_string();
        self.parsed = color;
    }
}

impl std::str::FromStr for GradientStop {
    type Err = GradientError;

    /// Parse a gradient stop `<color> [<integer>%]`.
    ///
    /// A trailing integer percentage separated by white space is the position.
    /// Everything before it is the color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let split = s.rsplit_once(char::is_whitespace).and_then(|(color, position)| {
            let digits = position.strip_suffix('%')?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Some((color, digits))
        });

        match split {
            Some((color, digits)) => {
                let position = digits
                    .parse::<u8>()
                    .map_err(|_| GradientError::PositionOutOfRange)?;
                Self::new(color, Some(position))
            }
            None => Self::new(s, None),
        }
    }
}

impl std::fmt::Display for GradientStop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            0 => f.write_str(&self.color),
            position => f.write_fmt(format_args!("{} {}%", self.color, position)),
        }
    }
}

// ====================================================================================================================
// Gradient
// ====================================================================================================================

/// Split the string on commas that are not nested inside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;

    for (index, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                tokens.push(s[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }

    tokens.push(s[start..].trim());
    tokens
}

/// Linearly interpolate between two 24-bit colors.
fn mix(start: [u8; 3], end: [u8; 3], t: Float) -> [u8; 3] {
    let channel = |index: usize| {
        let (a, b) = (Float::from(start[index]), Float::from(end[index]));
        (b - a).mul_add(t, a).round().clamp(0.0, 255.0) as u8
    };

    [channel(0), channel(1), channel(2)]
}

/// A gradient.
///
/// A gradient maintains at least two stops. After [`Gradient::add_step`], the
/// stops are sorted by position and share the format of the first stop.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    kind: String,
    direction: String,
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a new gradient. This function fails if there are fewer than two
    /// stops.
    pub fn new(
        kind: &str,
        direction: &str,
        stops: Vec<GradientStop>,
    ) -> Result<Self, GradientError> {
        if stops.len() < 2 {
            return Err(GradientError::TooFewStops);
        }

        Ok(Self {
            kind: kind.to_owned(),
            direction: direction.to_owned(),
            stops,
        })
    }

    /// Parse a gradient `type(stop, stop, ...)`.
    ///
    /// For `linear-gradient`, the first argument is the direction. For other
    /// types, all arguments are stops and the direction is
    /// [`DEFAULT_DIRECTION`].
    pub fn parse(s: &str) -> Result<Self, GradientError> {
        let s = s.trim();
        let (kind, rest) = s.split_once('(').ok_or(GradientError::MalformedGradient)?;
        let body = rest
            .strip_suffix(')')
            .ok_or(GradientError::MalformedGradient)?;
        if kind.is_empty()
            || !kind
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            return Err(GradientError::MalformedGradient);
        }

        let mut tokens = split_top_level(body).into_iter();
        let direction = if kind.eq_ignore_ascii_case(LINEAR_GRADIENT) {
            tokens.next().ok_or(GradientError::TooFewStops)?
        } else {
            DEFAULT_DIRECTION
        };

        let stops = tokens
            .map(str::parse)
            .collect::<Result<Vec<GradientStop>, _>>()?;

        Self::new(kind, direction, stops)
    }

    /// Get the gradient's type.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Get the gradient's direction.
    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Get the gradient's stops.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Determine whether this gradient's type has a direction.
    pub fn has_direction(&self) -> bool {
        self.kind.eq_ignore_ascii_case(LINEAR_GRADIENT)
    }

    /// Determine whether a stop can be removed without falling below two
    /// stops.
    pub fn can_remove_steps(&self) -> bool {
        2 < self.stops.len()
    }

    /// Interpolate the color at the position.
    ///
    /// This method uses the first pair of consecutive stops bracketing the
    /// position, treating omitted positions as 0. If there is none, it falls
    /// back on opaque black, just like `transparent` does.
    fn interpolate(&self, position: u8) -> [u8; 3] {
        for pair in self.stops.windows(2) {
            let (p0, p1) = (pair[0].position(), pair[1].position());
            if p0 <= position && position <= p1 {
                let t = if p0 == p1 {
                    0.0
                } else {
                    Float::from(position - p0) / Float::from(p1 - p0)
                };
                return mix(pair[0].parsed.to_24bit(), pair[1].parsed.to_24bit(), t);
            }
        }

        tracing::debug!(position, "No gradient stops bracket position");
        [0, 0, 0]
    }

    /// Get the interpolated color at the position.
    ///
    /// ```
    /// # use huebox::{gradient::Gradient, Color};
    /// # fn main() -> Result<(), huebox::gradient::GradientError> {
    /// let gradient = Gradient::parse("radial-gradient(red 0%, lime 50%, blue 100%)")?;
    /// assert_eq!(gradient.color_at(50), Color::rgb(0, 255, 0));
    /// assert_eq!(gradient.color_at(75), Color::rgb(0, 128, 128));
    ///
    /// // Without positions, all stops sit at 0%.
    /// let gradient = Gradient::parse("radial-gradient(red, blue)")?;
    /// assert_eq!(gradient.color_at(0), Color::rgb(255, 0, 0));
    /// assert_eq!(gradient.color_at(50), Color::rgb(0, 0, 0));
    /// # Ok(())
    /// # }
    /// ```
    pub fn color_at(&self, position: u8) -> Color {
        let [r, g, b] = self.interpolate(position.min(100));
        Color::rgb(r, g, b)
    }

    /// Add a stop at the position.
    ///
    /// This method interpolates the color at the position, inserts a new stop
    /// with that color after all stops with the same or smaller position, and
    /// normalizes the stops' formats. Existing stops keep their positions,
    /// including omitted ones. It returns the index of the new stop.
    pub fn add_step(&mut self, position: u8) -> Result<usize, GradientError> {
        if 100 < position {
            tracing::debug!(position, "Refusing to add gradient stop beyond 100%");
            return Err(GradientError::PositionOutOfRange);
        }

        let [r, g, b] = self.interpolate(position);
        self.stops.sort_by_key(GradientStop::position);
        let index = self.stops.partition_point(|stop| stop.position() <= position);
        self.stops
            .insert(index, GradientStop::with_color(Color::rgb(r, g, b), position));

        self.normalize_colors();
        Ok(index)
    }

    /// Remove the stop at the index.
    ///
    /// This method refuses to remove a stop if that would leave fewer than two
    /// stops or if the index is out of bounds. It returns whether it removed
    /// the stop.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if !self.can_remove_steps() {
            tracing::debug!(stops = self.stops.len(), "Refusing to remove gradient stop");
            return false;
        } else if self.stops.len() <= index {
            tracing::debug!(index, stops = self.stops.len(), "No gradient stop to remove");
            return false;
        }

        self.stops.remove(index);
        true
    }

    /// Convert all stops to the format of the first stop. Stops already in
    /// that format keep their color string as written.
    pub fn normalize_colors(&mut self) {
        let Some(format) = self.stops.first().map(|stop| stop.parsed.format()) else {
            return;
        };

        let mut count = 0;
        for stop in self.stops.iter_mut() {
            if stop.parsed.format() != format {
                let color = stop.parsed.to(format);
                stop.set_parsed_color(color);
                count += 1;
            }
        }

        tracing::debug!(%format, count, "Normalized gradient stops");
    }

    /// Render this gradient as a horizontal linear gradient, whatever its
    /// type and direction.
    pub fn preview(&self) -> String {
        format!("{}({}, {})", LINEAR_GRADIENT, DEFAULT_DIRECTION, StopList(&self.stops))
    }
}

/// A helper for displaying comma-separated stops.
struct StopList<'a>(&'a [GradientStop]);

impl std::fmt::Display for StopList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, stop) in self.0.iter().enumerate() {
            if 0 < index {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!("{}", stop))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Gradient {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Gradient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_direction() {
            f.write_fmt(format_args!(
                "{}({}, {})",
                self.kind,
                self.direction,
                StopList(&self.stops)
            ))
        } else {
            f.write_fmt(format_args!("{}({})", self.kind, StopList(&self.stops)))
        }
    }
}

/// Parse the gradient, add a stop at the position, and serialize the result.
/// <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn add_gradient_step(s: &str, position: u8) -> PyResult<String> {
    let mut gradient = Gradient::parse(s)?;
    gradient.add_step(position)?;
    Ok(gradient.to_string())
}

/// Parse the gradient and render its horizontal linear preview. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn gradient_preview(s: &str) -> PyResult<String> {
    Ok(Gradient::parse(s)?.preview())
}

// ====================================================================================================================
