//! Location strings.
//!
//! Accepted forms:
//! - `auto`: use the country of the system locale
//! - decimal degrees: `40.4168, -3.7038`, `40.4168 -3.7038`, `40.4168,-3.7038`
//! - sexagesimal degrees: `40°25'0.48" N, 3°42'13.68" W` (minutes and seconds optional)
//!
//! Decimal numbers are `-?digits(.digits)?`; a leading `+`, a bare `.5` or
//! an exponent are not accepted.

use std::fmt::{Display, Formatter};

use nom::branch::alt;
use nom::character::complete::{char, digit1, multispace0, multispace1, one_of, space0};
use nom::combinator::{all_consuming, map_res, opt, recognize};
use nom::sequence::{preceded, terminated};
use nom::{IResult, Parser};
use sunsync_base::GeographicCoordinate;

use crate::error::{ConfigError, Result};
use crate::regions::RegionTable;

/// Keyword selecting the system locale's country.
pub const AUTO: &str = "auto";

/// Parsed form of a location setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationSetting {
    /// Resolve from the system locale when used.
    Auto,
    Coordinates(GeographicCoordinate),
}

impl LocationSetting {
    /// Parse a location string.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text == AUTO {
            return Ok(Self::Auto);
        }
        if let Ok((_, (lat, lon))) = all_consuming(decimal_pair).parse(text) {
            return Ok(Self::Coordinates(GeographicCoordinate::from_decimal_degrees(
                lat, lon,
            )?));
        }
        if let Ok((_, (lat, lon))) = all_consuming(sexagesimal_pair).parse(text) {
            return Ok(Self::Coordinates(GeographicCoordinate::from_sexagesimal(
                lat.degrees,
                lat.arcmin,
                lat.arcsec,
                lon.degrees,
                lon.arcmin,
                lon.arcsec,
            )?));
        }
        Err(ConfigError::InvalidLocation(text.to_string()))
    }

    /// The coordinate to use, looking up the locale country for `Auto`.
    ///
    /// Falls back to `(0°, 0°)` when the country is unknown.
    pub fn resolve(&self, regions: &RegionTable) -> GeographicCoordinate {
        match self {
            Self::Coordinates(c) => *c,
            Self::Auto => system_country()
                .and_then(|code| regions.get(&code))
                .unwrap_or_default(),
        }
    }
}

impl Display for LocationSetting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => f.write_str(AUTO),
            Self::Coordinates(c) => write!(f, "{c}"),
        }
    }
}

/// Parse and resolve a location string in one step.
pub fn parse_location(text: &str, regions: &RegionTable) -> Result<GeographicCoordinate> {
    Ok(LocationSetting::parse(text)?.resolve(regions))
}

/// Country code of the process locale, from `LC_ALL`, `LC_MESSAGES` or `LANG`.
pub fn system_country() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| country_from_locale(&value))
}

/// Extract the territory from a POSIX locale name: `es_ES.UTF-8` → `ES`.
///
/// Returns `None` for locales without a two-letter territory (`C`, `POSIX`).
pub fn country_from_locale(locale: &str) -> Option<String> {
    let name = locale.split(['.', '@']).next()?;
    let (_, territory) = name.split_once('_')?;
    if territory.len() == 2 && territory.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(territory.to_ascii_uppercase())
    } else {
        None
    }
}

/// `-?digits(.digits)?`
pub(crate) fn decimal_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize((opt(char('-')), digit1, opt((char('.'), digit1)))),
        |s: &str| s.parse::<f64>(),
    )
    .parse(input)
}

fn unsigned_integer(input: &str) -> IResult<&str, f64> {
    map_res(digit1, |s: &str| s.parse::<f64>()).parse(input)
}

fn unsigned_decimal(input: &str) -> IResult<&str, f64> {
    map_res(recognize((digit1, opt((char('.'), digit1)))), |s: &str| {
        s.parse::<f64>()
    })
    .parse(input)
}

/// `,` optionally followed by whitespace, or whitespace alone.
fn decimal_separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize((opt(char(',')), multispace1)),
        recognize(char(',')),
    ))
    .parse(input)
}

fn decimal_pair(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, lat) = decimal_number(input)?;
    let (input, _) = decimal_separator(input)?;
    let (input, lon) = decimal_number(input)?;
    Ok((input, (lat, lon)))
}

/// One signed sexagesimal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Dms {
    degrees: f64,
    arcmin: f64,
    arcsec: f64,
}

/// `D°[ M'][ S"] H` where `H` is one of `hemispheres`; the second
/// hemisphere letter negates every component.
fn dms_axis<'a>(input: &'a str, hemispheres: &str) -> IResult<&'a str, Dms> {
    let (input, degrees) = terminated(unsigned_integer, char('°')).parse(input)?;
    let (input, arcmin) =
        opt(preceded(space0, terminated(unsigned_integer, char('\'')))).parse(input)?;
    let (input, arcsec) =
        opt(preceded(space0, terminated(unsigned_decimal, char('"')))).parse(input)?;
    let (input, hemisphere) = hemisphere_letter(input, hemispheres)?;

    let sign = if hemisphere == 'S' || hemisphere == 'W' {
        -1.0
    } else {
        1.0
    };
    Ok((
        input,
        Dms {
            degrees: sign * degrees,
            arcmin: sign * arcmin.unwrap_or(0.0),
            arcsec: sign * arcsec.unwrap_or(0.0),
        },
    ))
}

fn hemisphere_letter<'a>(input: &'a str, letters: &str) -> IResult<&'a str, char> {
    preceded(space0, one_of(letters)).parse(input)
}

/// Optional comma with optional whitespace around it.
fn axis_separator(input: &str) -> IResult<&str, &str> {
    recognize((multispace0, opt(char(',')), multispace0)).parse(input)
}

fn sexagesimal_pair(input: &str) -> IResult<&str, (Dms, Dms)> {
    let (input, lat) = dms_axis(input, "NS")?;
    let (input, _) = axis_separator(input)?;
    let (input, lon) = dms_axis(input, "EW")?;
    Ok((input, (lat, lon)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(text: &str) -> (f64, f64) {
        match LocationSetting::parse(text).unwrap() {
            LocationSetting::Coordinates(c) => (c.latitude_deg(), c.longitude_deg()),
            LocationSetting::Auto => panic!("unexpected auto"),
        }
    }

    #[test]
    fn number_forms() {
        assert_eq!(decimal_number("12"), Ok(("", 12.0)));
        assert_eq!(decimal_number("-0.25 rest"), Ok((" rest", -0.25)));
        assert!(decimal_number("+1").is_err());
        assert!(decimal_number(".5").is_err());
    }

    #[test]
    fn auto_keyword() {
        assert_eq!(LocationSetting::parse("auto").unwrap(), LocationSetting::Auto);
        assert_eq!(LocationSetting::parse("  auto ").unwrap(), LocationSetting::Auto);
        assert!(LocationSetting::parse("AUTO").is_err());
    }

    #[test]
    fn decimal_separators() {
        assert_eq!(coords("73.2, 92.34"), (73.2, 92.34));
        assert_eq!(coords("10 10.23"), (10.0, 10.23));
        assert_eq!(coords("0.2      0.23"), (0.2, 0.23));
        assert_eq!(coords("50,50"), (50.0, 50.0));
        assert_eq!(coords("-33.8688,151.2093"), (-33.8688, 151.2093));
    }

    #[test]
    fn sexagesimal_full() {
        let (lat, lon) = coords("40°25'0.48\" N, 3°42'13.68\" W");
        assert!((lat - 40.4168).abs() < 1e-9, "{lat}");
        assert!((lon + 3.7038).abs() < 1e-9, "{lon}");
    }

    #[test]
    fn sexagesimal_degrees_only() {
        assert_eq!(coords("33° S 151° E"), (-33.0, 151.0));
        assert_eq!(coords("51°N,0°W"), (51.0, 0.0));
    }

    #[test]
    fn sexagesimal_minutes_without_seconds() {
        let (lat, lon) = coords("33° 52' S, 151° 12' E");
        assert!((lat + (33.0 + 52.0 / 60.0)).abs() < 1e-12);
        assert!((lon - (151.0 + 12.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn sexagesimal_rejects_wrong_hemisphere_letter() {
        assert!(LocationSetting::parse("40° E, 3° N").is_err());
        assert!(LocationSetting::parse("40° n, 3° w").is_err());
    }

    #[test]
    fn out_of_range_is_coordinate_error() {
        assert!(matches!(
            LocationSetting::parse("91, 0"),
            Err(ConfigError::Coordinate(_))
        ));
        assert!(matches!(
            LocationSetting::parse("90° 30' N, 0° E"),
            Err(ConfigError::Coordinate(_))
        ));
    }

    #[test]
    fn malformed_is_invalid_location() {
        for text in ["11", "1.11.1", "abc", "", "10, 20, 30"] {
            assert!(
                matches!(LocationSetting::parse(text), Err(ConfigError::InvalidLocation(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn locale_territory() {
        assert_eq!(country_from_locale("es_ES.UTF-8").as_deref(), Some("ES"));
        assert_eq!(country_from_locale("en_gb").as_deref(), Some("GB"));
        assert_eq!(country_from_locale("de_DE@euro").as_deref(), Some("DE"));
        assert_eq!(country_from_locale("C.UTF-8"), None);
        assert_eq!(country_from_locale("POSIX"), None);
        assert_eq!(country_from_locale("sr_RS_latin"), None);
    }

    #[test]
    fn coordinates_resolve_to_themselves() {
        let setting = LocationSetting::parse("10 20").unwrap();
        let c = setting.resolve(&RegionTable::default());
        assert_eq!((c.latitude_deg(), c.longitude_deg()), (10.0, 20.0));
    }

    #[test]
    fn display_round_trip() {
        let setting = LocationSetting::parse("40.4168, -3.7038").unwrap();
        assert_eq!(setting.to_string(), "40.4168, -3.7038");
        assert_eq!(LocationSetting::parse(&setting.to_string()).unwrap(), setting);
        assert_eq!(LocationSetting::Auto.to_string(), "auto");
    }
}
