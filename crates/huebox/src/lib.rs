//! # Huebox
//!
//! Huebox parses, converts, and serializes the color notations of the web and
//! composes them into gradients.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Huebox's main abstractions are:
//!
//!   * [`Color`] is a **color in one of seven formats**, i.e., `#rrggbb`,
//!     `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()`, `hsla()`, and `hsv()`, as
//!     enumerated by [`ColorFormat`]. [`Color::to`] converts between formats,
//!     [`Color::add_alpha`] adds transparency, and the `Display`
//!     implementation produces the canonical serialization for each format.
//!     [`Hsl`] and [`Hsv`] hold the coordinates of the polar formats.
//!   * [`from_string`] and [`is_valid_color`] **parse color strings** in any
//!     of the seven formats as well as the CSS color keywords. The [`detect`]
//!     module offers predicates recognizing the individual formats.
//!   * The [`gradient`] module implements **gradients** as sequences of
//!     [`GradientStop`](gradient::GradientStop)s that can grow by
//!     interpolation and shrink down to two stops.
//!
//!
//! ## 2. Parse, Convert, Serialize
//!
//! ```
//! # use huebox::{from_string, ColorFormat};
//! # use huebox::error::ColorFormatError;
//! # fn main() -> Result<(), ColorFormatError> {
//! let orange = from_string("hsl(30, 100%, 50%)")?;
//! assert_eq!(orange.to(ColorFormat::Hex).to_string(), "#ff8000");
//! assert_eq!(orange.to(ColorFormat::Rgb).to_string(), "rgb(255,128,0)");
//!
//! let faded = orange.add_alpha(0.5);
//! assert_eq!(faded.to_string(), "hsla(30,100%,50%,0.5)");
//! assert_eq!(faded.to(ColorFormat::Hexa).to_string(), "#ff800080");
//! # Ok(())
//! # }
//! ```
//!
//! Parsing is lenient about white space around separators and ASCII case,
//! while serialization always uses the canonical form. Parse errors are
//! reported as [`ColorFormatError`](error::ColorFormatError)s.
//!
//!
//! ## 3. Optional Features
//!
//! Huebox supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!   - **`pyffi`** controls huebox's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Huebox logs through the [tracing](https://docs.rs/tracing) facade but
//! never installs a subscriber itself.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod core;
pub mod error;
mod factory;
mod format;
pub mod gradient;
mod object;

pub mod detect {
    //! Predicates recognizing the individual color formats.
    //!
    //! Each predicate checks both the grammar and the ranges of the numeric
    //! fields. Predicates trim their input and never fail.
    pub use crate::core::{is_hex, is_hexa, is_hsl, is_hsla, is_hsv, is_named, is_rgb, is_rgba};
}

pub use factory::{from_string, is_valid_color};
pub use format::ColorFormat;
pub use object::{Color, Hsl, HslCoordinate, Hsv};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // -------------------------------------------------------------------------- color
    m.add_class::<ColorFormat>()?;
    m.add_function(wrap_pyfunction!(is_valid_color, m)?)?;
    m.add_function(wrap_pyfunction!(factory::convert_color, m)?)?;
    m.add_function(wrap_pyfunction!(factory::normalize_color, m)?)?;

    // ----------------------------------------------------------------------- gradient
    m.add_function(wrap_pyfunction!(gradient::add_gradient_step, m)?)?;
    m.add_function(wrap_pyfunction!(gradient::gradient_preview, m)?)?;

    Ok(())
}
