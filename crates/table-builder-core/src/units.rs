//! Conversion from table size units to screen pixels
//!
//! Column widths are in character units and row heights in points. Pixel
//! sizes depend on the screen DPI, which is decided once per process:
//! an explicit [`init_dpi`] call made before first use, else the
//! `TABLE_BUILDER_DPI` environment variable (`"120"` or `"120x144"`), else
//! [`Dpi::STANDARD`].

use once_cell::sync::OnceCell;

use crate::error::{Error, Result};

/// Environment variable read on first DPI use
pub const DPI_ENV_VAR: &str = "TABLE_BUILDER_DPI";

/// DPI at which one point is 4/3 pixels
pub const STANDARD_DPI: f64 = 96.0;

static SCREEN_DPI: OnceCell<Dpi> = OnceCell::new();

/// Horizontal and vertical screen resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dpi {
    /// Horizontal dots per inch
    pub x: f64,
    /// Vertical dots per inch
    pub y: f64,
}

impl Dpi {
    /// 96x96
    pub const STANDARD: Dpi = Dpi {
        x: STANDARD_DPI,
        y: STANDARD_DPI,
    };

    /// Create a resolution; both values must be positive
    pub fn new(x: f64, y: f64) -> Result<Self> {
        for (name, value) in [("x", x), ("y", y)] {
            if value <= 0.0 || !value.is_finite() {
                return Err(Error::invalid_argument(
                    name,
                    format!("DPI must be a positive number, got {}", value),
                ));
            }
        }
        Ok(Self { x, y })
    }

    /// Parse `"120"` (both axes) or `"120x144"`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (x, y) = match s.split_once(|c| c == 'x' || c == 'X') {
            Some((x, y)) => (x.trim().parse().ok()?, y.trim().parse().ok()?),
            None => {
                let both = s.parse().ok()?;
                (both, both)
            }
        };
        Self::new(x, y).ok()
    }

    /// Column width (character units) to pixels
    pub fn width_to_pixels(&self, width: f64) -> f64 {
        (width * 7.0 + 5.0) / (STANDARD_DPI / self.x)
    }

    /// Row height (points) to pixels
    pub fn height_to_pixels(&self, height: f64) -> f64 {
        height / 0.75 / (STANDARD_DPI / self.y)
    }
}

impl Default for Dpi {
    fn default() -> Self {
        Dpi::STANDARD
    }
}

/// Fix the process-wide DPI before anything reads it
///
/// Fails with [`Error::DpiAlreadyInitialized`] once the value is decided.
pub fn init_dpi(dpi: Dpi) -> Result<()> {
    SCREEN_DPI
        .set(dpi)
        .map_err(|_| Error::DpiAlreadyInitialized)
}

/// The process-wide DPI, decided on first call
pub fn screen_dpi() -> Dpi {
    *SCREEN_DPI.get_or_init(dpi_from_env)
}

/// Column width (character units) to pixels at the screen DPI
pub fn width_units_to_pixels(width: f64) -> f64 {
    screen_dpi().width_to_pixels(width)
}

/// Row height (points) to pixels at the screen DPI
pub fn height_units_to_pixels(height: f64) -> f64 {
    screen_dpi().height_to_pixels(height)
}

fn dpi_from_env() -> Dpi {
    match std::env::var(DPI_ENV_VAR) {
        Ok(value) => Dpi::parse(&value).unwrap_or_else(|| {
            log::warn!(
                "ignoring {}={:?}: expected \"<dpi>\" or \"<x>x<y>\"",
                DPI_ENV_VAR,
                value
            );
            Dpi::STANDARD
        }),
        Err(_) => Dpi::STANDARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_conversions() {
        let dpi = Dpi::STANDARD;
        assert_eq!(dpi.width_to_pixels(10.0), 75.0);
        assert_eq!(dpi.height_to_pixels(15.0), 20.0);
    }

    #[test]
    fn test_high_dpi_scales_pixels() {
        let dpi = Dpi::new(192.0, 144.0).unwrap();
        assert!((dpi.width_to_pixels(10.0) - 150.0).abs() < 1e-9);
        assert!((dpi.height_to_pixels(15.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Dpi::parse("120"), Some(Dpi { x: 120.0, y: 120.0 }));
        assert_eq!(Dpi::parse(" 120x144 "), Some(Dpi { x: 120.0, y: 144.0 }));
        assert_eq!(Dpi::parse("0"), None);
        assert_eq!(Dpi::parse("wide"), None);
        assert!(Dpi::new(-1.0, 96.0).is_err());
    }

    #[test]
    fn test_screen_dpi_is_decided_once() {
        let first = screen_dpi();
        assert_eq!(screen_dpi(), first);
        assert!(matches!(
            init_dpi(Dpi::STANDARD),
            Err(Error::DpiAlreadyInitialized)
        ));
        assert_eq!(width_units_to_pixels(1.0), first.width_to_pixels(1.0));
        assert_eq!(height_units_to_pixels(1.0), first.height_to_pixels(1.0));
    }
}
