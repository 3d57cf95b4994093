//! Country code → representative coordinate lookup.
//!
//! One region per line: `CODE,Point(<longitude> <latitude>)`. Note the
//! WKT order, longitude first. Lines that do not have this shape (headers,
//! comments, blanks) are skipped.

use std::collections::HashMap;

use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::char;
use nom::sequence::{delimited, separated_pair};
use nom::{IResult, Parser};
use sunsync_base::GeographicCoordinate;
use tracing::{info, warn};

use crate::location::decimal_number;

/// Bundled table of ISO 3166-1 alpha-2 codes and capital coordinates.
pub const BUNDLED_REGIONS: &str = include_str!("../data/regions.csv");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionTable {
    regions: HashMap<String, GeographicCoordinate>,
}

impl RegionTable {
    /// The table shipped with the crate.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_REGIONS)
    }

    /// Parse region lines.
    pub fn parse(text: &str) -> Self {
        let mut regions = HashMap::new();
        for line in text.lines() {
            let Ok((_, (code, lon, lat))) = region_line(line.trim()) else {
                continue;
            };
            match GeographicCoordinate::from_decimal_degrees(lat, lon) {
                Ok(c) => {
                    regions.insert(code.to_ascii_uppercase(), c);
                }
                Err(e) => warn!(region = code, "skipping region: {e}"),
            }
        }
        info!(count = regions.len(), "loaded regions");
        Self { regions }
    }

    /// Coordinate for a country code, case-insensitive.
    pub fn get(&self, code: &str) -> Option<GeographicCoordinate> {
        self.regions.get(&code.to_ascii_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn region_line(input: &str) -> IResult<&str, (&str, f64, f64)> {
    (
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        delimited(
            tag(",Point("),
            separated_pair(decimal_number, char(' '), decimal_number),
            char(')'),
        ),
    )
        .map(|(code, (lon, lat))| (code, lon, lat))
        .parse(input)
}
