// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Heuristic search for coordinates and radii in free text.
//!
//! Any numeric sequence that looks like a coordinate is taken as one. This
//! includes the occasional date or frequency, which is why geometries found
//! here are tagged with their source.

use std::fmt;

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;
use crate::nm_to_km;

static_regex!(
    /// `DDMMSS[NS] DDDMMSS[EW]` with optional space or `DDMM[NS] DDDMM[EW]`.
    POINT_RE = concat!(
        r"(\d{2})(\d{2})(\d{2})([NS])\s*(\d{3})(\d{2})(\d{2})([EW])",
        r"|(\d{2})(\d{2})([NS])\s*(\d{3})(\d{2})([EW])",
    )
);

static_regex!(
    /// `RADIUS 5NM`
    RADIUS_BEFORE_RE = r"(?i)\bRADIUS\s+(\d+(?:\.\d+)?)\s*(NM|KM|M)\b"
);

static_regex!(
    /// `5NM RADIUS`
    RADIUS_AFTER_RE = r"(?i)\b(\d+(?:\.\d+)?)\s*(NM|KM|M)\s+RADIUS\b"
);

/// Adds the point unless a point within the tolerance was added before.
pub fn push_unique(points: &mut Vec<Coordinate>, point: Coordinate, tolerance: f64) -> bool {
    if points.iter().any(|p| p.is_near(&point, tolerance)) {
        false
    } else {
        points.push(point);
        true
    }
}

/// Returns all coordinates of the text in the order they appear.
///
/// Points within `tolerance` degrees of an earlier point are dropped.
/// Matches that start within a longer number or are out of range are
/// skipped.
pub fn extract_points(text: &str, tolerance: f64) -> Vec<Coordinate> {
    let mut points = Vec::new();

    for caps in POINT_RE.captures_iter(text) {
        let Some(m) = caps.get(0) else {
            continue;
        };

        if text[..m.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit())
        {
            continue;
        }

        let number = |i: usize| caps.get(i).and_then(|g| g.as_str().parse::<u16>().ok());
        let hemisphere = |i: usize| caps.get(i).and_then(|g| g.as_str().chars().next());

        let point = if caps.get(1).is_some() {
            dms(
                (number(1), number(2), number(3), hemisphere(4)),
                (number(5), number(6), number(7), hemisphere(8)),
            )
        } else {
            dms(
                (number(9), number(10), Some(0), hemisphere(11)),
                (number(12), number(13), Some(0), hemisphere(14)),
            )
        };

        match point {
            Some(point) => {
                if push_unique(&mut points, point, tolerance) {
                    trace!("found {point} as \"{}\"", m.as_str());
                }
            }
            None => trace!("skipping \"{}\" out of range", m.as_str()),
        }
    }

    points
}

type Dms = (Option<u16>, Option<u16>, Option<u16>, Option<char>);

fn dms(latitude: Dms, longitude: Dms) -> Option<Coordinate> {
    let (lat_deg, lat_min, lat_sec, lat_hem) = latitude;
    let (lon_deg, lon_min, lon_sec, lon_hem) = longitude;

    Coordinate::try_from_dms(
        (
            u8::try_from(lat_deg?).ok()?,
            u8::try_from(lat_min?).ok()?,
            u8::try_from(lat_sec?).ok()?,
            lat_hem?,
        ),
        (
            lon_deg?,
            u8::try_from(lon_min?).ok()?,
            u8::try_from(lon_sec?).ok()?,
            lon_hem?,
        ),
    )
    .ok()
}

/// Unit of a radius phrase.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RadiusUnit {
    NauticalMiles,
    Kilometers,
    Meters,
}

impl fmt::Display for RadiusUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NauticalMiles => write!(f, "NM"),
            Self::Kilometers => write!(f, "KM"),
            Self::Meters => write!(f, "M"),
        }
    }
}

/// A radius as written in the text.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Radius {
    pub value: f64,
    pub unit: RadiusUnit,
}

impl Radius {
    pub fn to_km(&self) -> f64 {
        match self.unit {
            RadiusUnit::NauticalMiles => nm_to_km(self.value),
            RadiusUnit::Kilometers => self.value,
            RadiusUnit::Meters => self.value / 1000.0,
        }
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Returns the first radius phrase of the text.
///
/// Both `RADIUS 5NM` and `5NM RADIUS` are recognized, the former is
/// preferred.
pub fn extract_radius(text: &str) -> Option<Radius> {
    [&RADIUS_BEFORE_RE, &RADIUS_AFTER_RE]
        .into_iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| {
            let value = caps[1].parse().ok()?;
            let unit = match caps[2].to_uppercase().as_str() {
                "NM" => RadiusUnit::NauticalMiles,
                "KM" => RadiusUnit::Kilometers,
                _ => RadiusUnit::Meters,
            };
            Some(Radius { value, unit })
        })
}
