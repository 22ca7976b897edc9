//! Validation and normalization of user-supplied search parameters.
//!
//! The search boundary hands over raw strings: a sexagesimal coordinate
//! pair, a decimal-degree coordinate pair, a matching radius and an object
//! identifier. This module turns them into typed values or rejects them
//! with a user-facing [`InvalidInput`] message.

/// A user-supplied search parameter failed validation.
///
/// These are boundary errors: they are reported to the user and never abort
/// the process. The messages are the ones shown verbatim at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// Every input field was left empty.
    #[error("Please provide coordinates and a matching radius.")]
    AllEmpty,

    /// Neither a valid sexagesimal pair nor a decimal pair was supplied.
    #[error(
        "Please provide RA and DEC coordinates either as \
         (01 15 22.14, 03 14 03.13) or (01:15:22.14, 03:14:03.13)."
    )]
    MalformedCoordinates,

    /// The matching radius did not parse as a number.
    #[error("The matching radius should be a number (unit: arcsec).")]
    BadTolerance,

    /// Exactly one component of a coordinate pair was supplied.
    #[error("Please provide both RA and DEC.")]
    IncompletePair,

    /// The object identifier did not parse as an integer.
    #[error("The object identifier should be an integer.")]
    BadIdentifier,
}

/// A validated coordinate pair, in exactly one representation family.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCoords {
    /// Colon-normalized sexagesimal strings: RA as "HH:MM:SS", DEC as
    /// "DD:MM:SS" (sign optional).
    Sexagesimal {
        /// Right ascension, hour angle.
        ra: String,
        /// Declination, degrees.
        dec: String,
    },
    /// Decimal degrees for both components.
    Decimal {
        /// Right ascension in degrees.
        ra: f64,
        /// Declination in degrees.
        dec: f64,
    },
}

/// Validate the five raw search fields and return the coordinate pair plus
/// the matching radius in arcseconds.
///
/// Rules, in order:
/// - all five fields empty is an error;
/// - at least one representation family must be well-formed (a sexagesimal
///   value counts only if it contains a ':' or ' ' separator);
/// - the radius must parse as a float;
/// - a pair with only one component present is an error.
///
/// When the decimal RA is numeric the decimal pair wins; otherwise the
/// sexagesimal pair is returned with spaces normalized to colons.
pub fn parse_input(
    ra_hms: &str,
    dec_dms: &str,
    ra_deg: &str,
    dec_deg: &str,
    tolerance: &str,
) -> Result<(ParsedCoords, f64), InvalidInput> {
    if [ra_hms, dec_dms, ra_deg, dec_deg, tolerance]
        .iter()
        .all(|f| f.is_empty())
    {
        return Err(InvalidInput::AllEmpty);
    }

    if !(is_sexagesimal(ra_hms) && is_sexagesimal(dec_dms))
        && ra_deg.is_empty()
        && dec_deg.is_empty()
    {
        return Err(InvalidInput::MalformedCoordinates);
    }

    let tol: f64 = tolerance
        .trim()
        .parse()
        .map_err(|_| InvalidInput::BadTolerance)?;

    if !valid_pair(ra_hms, dec_dms) && !valid_pair(ra_deg, dec_deg) {
        return Err(InvalidInput::IncompletePair);
    }

    if is_number(ra_deg) {
        let ra = parse_float(ra_deg)?;
        let dec = parse_float(dec_deg)?;
        Ok((ParsedCoords::Decimal { ra, dec }, tol))
    } else {
        Ok((
            ParsedCoords::Sexagesimal {
                ra: ra_hms.replace(' ', ":"),
                dec: dec_dms.replace(' ', ":"),
            },
            tol,
        ))
    }
}

/// Parse an object identifier field.
pub fn parse_qid(qid: &str) -> Result<u64, InvalidInput> {
    qid.trim().parse().map_err(|_| InvalidInput::BadIdentifier)
}

/// A sexagesimal field is usable only if it carries a separator.
fn is_sexagesimal(value: &str) -> bool {
    value.contains(':') || value.contains(' ')
}

fn is_number(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

fn valid_pair(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty()
}

fn parse_float(value: &str) -> Result<f64, InvalidInput> {
    value
        .trim()
        .parse()
        .map_err(|_| InvalidInput::MalformedCoordinates)
}
