//! Sky coordinates and angular separation.
//!
//! A [`SkyCoord`] is an (RA, DEC) pair resolved to decimal degrees. It can
//! be built from decimal degrees directly or from a colon-normalized
//! sexagesimal pair (RA as hour angle, DEC as degrees), which is the form
//! produced by [`crate::input::parse_input`].

use crate::input::ParsedCoords;

/// Arcseconds per degree.
pub const ARCSEC_PER_DEG: f64 = 3600.0;

/// A sexagesimal coordinate string could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    /// Not three colon-separated components.
    #[error("expected three colon-separated components, got {0:?}")]
    BadComponentCount(String),

    /// A component did not parse as a number.
    #[error("non-numeric sexagesimal component in {0:?}")]
    NonNumericComponent(String),
}

/// A sky position in decimal degrees (ICRS-style RA/DEC pair).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyCoord {
    ra_deg: f64,
    dec_deg: f64,
}

impl SkyCoord {
    /// Build from decimal degrees.
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    /// Build from a colon-separated sexagesimal pair: RA as "HH:MM:SS"
    /// (hour angle), DEC as "DD:MM:SS".
    ///
    /// A DEC carrying neither '+' nor '-' is treated as positive.
    pub fn from_sexagesimal(ra_hms: &str, dec_dms: &str) -> Result<Self, CoordError> {
        let ra_hours = parse_component(ra_hms)?;
        let dec_deg = parse_component(dec_dms)?;
        Ok(Self {
            ra_deg: ra_hours * 15.0,
            dec_deg,
        })
    }

    /// Resolve a parsed coordinate pair to decimal degrees.
    pub fn from_parsed(coords: &ParsedCoords) -> Result<Self, CoordError> {
        match coords {
            ParsedCoords::Sexagesimal { ra, dec } => Self::from_sexagesimal(ra, dec),
            ParsedCoords::Decimal { ra, dec } => Ok(Self::from_degrees(*ra, *dec)),
        }
    }

    /// Right ascension in degrees.
    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    /// Declination in degrees.
    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    /// Great-circle separation to `other`, in arcseconds.
    ///
    /// Uses the Vincenty formula, which stays accurate at the small angles
    /// cross-matching cares about (where the plain spherical law of cosines
    /// loses precision).
    pub fn separation_arcsec(&self, other: &SkyCoord) -> f64 {
        let ra1 = self.ra_deg.to_radians();
        let dec1 = self.dec_deg.to_radians();
        let ra2 = other.ra_deg.to_radians();
        let dec2 = other.dec_deg.to_radians();
        let dra = ra2 - ra1;

        let num = ((dec2.cos() * dra.sin()).powi(2)
            + (dec1.cos() * dec2.sin() - dec1.sin() * dec2.cos() * dra.cos()).powi(2))
        .sqrt();
        let den = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * dra.cos();

        num.atan2(den).to_degrees() * ARCSEC_PER_DEG
    }
}

/// Parse one "A:B:C" sexagesimal component into a signed decimal value.
///
/// The sign, read from the leading character (absent means positive),
/// applies to the value as a whole.
fn parse_component(value: &str) -> Result<f64, CoordError> {
    let trimmed = value.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let parts: Vec<&str> = rest.split(':').collect();
    if parts.len() != 3 {
        return Err(CoordError::BadComponentCount(value.to_string()));
    }

    let mut fields = [0.0f64; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| CoordError::NonNumericComponent(value.to_string()))?;
    }

    Ok(sign * (fields[0] + fields[1] / 60.0 + fields[2] / 3600.0))
}
