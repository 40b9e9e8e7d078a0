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

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Distance, Geodesic};

use crate::Error;

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

/// Converts an angle from degree minutes and seconds to decimal.
fn dms_to_decimal(degree: u16, minutes: u8, seconds: u8) -> f64 {
    degree as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate from degree, minutes and seconds with the
    /// hemisphere as `N`/`S` and `E`/`W`.
    ///
    /// # Errors
    ///
    /// Returns an error if a hemisphere is invalid or a value is out of range,
    /// e.g. minutes of 60 or more.
    pub fn try_from_dms(
        latitude: (u8, u8, u8, char),
        longitude: (u16, u8, u8, char),
    ) -> Result<Self, Error> {
        let (lat_deg, lat_min, lat_sec, lat_hem) = latitude;
        let (lon_deg, lon_min, lon_sec, lon_hem) = longitude;

        let invalid = || {
            Error::InvalidCoordinate(format!(
                "{lat_deg:02}{lat_min:02}{lat_sec:02}{lat_hem} {lon_deg:03}{lon_min:02}{lon_sec:02}{lon_hem}"
            ))
        };

        if lat_min >= 60 || lat_sec >= 60 || lon_min >= 60 || lon_sec >= 60 {
            return Err(invalid());
        }

        let lat = dms_to_decimal(lat_deg.into(), lat_min, lat_sec);
        let lon = dms_to_decimal(lon_deg, lon_min, lon_sec);

        if lat > 90.0 || lon > 180.0 {
            return Err(invalid());
        }

        let latitude = match lat_hem {
            'N' => lat,
            'S' => -lat,
            _ => return Err(invalid()),
        };

        let longitude = match lon_hem {
            'E' => lon,
            'W' => -lon,
            _ => return Err(invalid()),
        };

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the distance from this point to the `other` in kilometers.
    ///
    /// Uses geodesic calculation on the WGS84 ellipsoid.
    pub fn dist_km(&self, other: &Coordinate) -> f64 {
        Geodesic.distance((*self).into(), (*other).into()) / 1000.0
    }

    /// Returns `true` if both latitude and longitude differ less than the
    /// `tolerance` in degrees.
    pub fn is_near(&self, other: &Coordinate, tolerance: f64) -> bool {
        (self.latitude - other.latitude).abs() < tolerance
            && (self.longitude - other.longitude).abs() < tolerance
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}
