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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{BoundingRect, Closest, ClosestPoint, Contains, Destination, Geodesic};

use super::Coordinate;
use crate::{km_to_nm, nm_to_km, NM_TO_DEG};

/// Returns an approximate degree-based bounding box of the radius around the
/// center.
pub(crate) fn degree_envelope(center: &Coordinate, radius_nm: f64) -> geo::Rect<f64> {
    let radius_deg = radius_nm * NM_TO_DEG;

    // degrees of longitude shrink towards the poles
    let lat_rad = center.latitude.to_radians();
    let lon_expansion = if lat_rad.cos().abs() > 0.01 {
        radius_deg / lat_rad.cos()
    } else {
        radius_deg * 100.0
    };

    geo::Rect::new(
        geo::Coord {
            x: center.longitude - lon_expansion,
            y: center.latitude - radius_deg,
        },
        geo::Coord {
            x: center.longitude + lon_expansion,
            y: center.latitude + radius_deg,
        },
    )
}

/// How a geometry was obtained.
///
/// The source is kept with every geometry since the strategies differ a lot
/// in their precision.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometrySource {
    /// Coordinate and radius of the Q-line.
    QLine,
    /// Coordinate and radius of the legacy Q-code field.
    QCodeField,
    /// Coordinates found in the body text.
    EText,
    /// A single coordinate in the body text without a radius.
    ETextSinglePointDefault,
    /// Center of the Flight Information Region.
    FirFallback,
    /// Coordinate of the aerodrome.
    AirportLocationFallback,
}

impl fmt::Display for GeometrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QLine => write!(f, "Q-line"),
            Self::QCodeField => write!(f, "qcode-field"),
            Self::EText => write!(f, "E-text"),
            Self::ETextSinglePointDefault => write!(f, "E-text-single-point-default"),
            Self::FirFallback => write!(f, "FIR-fallback"),
            Self::AirportLocationFallback => write!(f, "airport-location-fallback"),
        }
    }
}

/// A circular area around a center.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    pub center: Coordinate,
    pub radius_km: f64,
    pub radius_nm: f64,
    pub source: GeometrySource,
}

impl Circle {
    /// Creates a circle with a radius in nautical miles.
    pub fn from_nm(center: Coordinate, radius_nm: f64, source: GeometrySource) -> Self {
        Self {
            center,
            radius_km: nm_to_km(radius_nm),
            radius_nm,
            source,
        }
    }

    /// Creates a circle with a radius in kilometers.
    pub fn from_km(center: Coordinate, radius_km: f64, source: GeometrySource) -> Self {
        Self {
            center,
            radius_km,
            radius_nm: km_to_nm(radius_km),
            source,
        }
    }

    /// Returns `true` if the point's geodesic distance to the center is
    /// within the radius.
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.center.dist_km(point) <= self.radius_km
    }

    /// Returns an approximate bounding box of the circle.
    pub fn envelope(&self) -> geo::Rect<f64> {
        degree_envelope(&self.center, self.radius_nm)
    }

    /// Approximates the circle as polygon with `n` vertices.
    ///
    /// The vertices are geodesic destinations from the center, starting
    /// north and going clockwise. At least three vertices are created.
    pub fn to_polygon(&self, n: usize) -> Polygon {
        let n = n.max(3);
        let center: geo::Point<f64> = self.center.into();
        let radius_m = self.radius_km * 1000.0;

        let vertices: Vec<Coordinate> = (0..n)
            .map(|i| {
                let bearing = 360.0 * i as f64 / n as f64;
                Coordinate::from(Geodesic.destination(center, bearing, radius_m))
            })
            .collect();

        Polygon {
            vertices,
            source: self.source,
        }
    }
}

/// An area enclosed by vertices.
///
/// The vertices are in the order they were listed and the ring is not
/// necessarily closed.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub vertices: Vec<Coordinate>,
    pub source: GeometrySource,
}

impl Polygon {
    /// Returns the polygon as [`geo::Polygon`] with a closed exterior.
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        let exterior: Vec<geo::Coord<f64>> = self.vertices.iter().map(|&c| c.into()).collect();
        geo::Polygon::new(geo::LineString::from(exterior), vec![])
    }

    /// Returns `true` if the point is within the polygon.
    ///
    /// The test is planar in degrees which is good enough for the small areas
    /// published in NOTAMs.
    pub fn contains(&self, point: &Coordinate) -> bool {
        let point: geo::Point<f64> = (*point).into();
        self.vertices.len() >= 3 && self.to_geo().contains(&point)
    }

    pub fn envelope(&self) -> Option<geo::Rect<f64>> {
        self.to_geo().bounding_rect()
    }

    /// Returns the distance of the point to the boundary in kilometers or
    /// zero if the point is inside.
    ///
    /// The closest boundary point is found in the plane, the distance to it
    /// is geodesic.
    pub fn distance_km(&self, point: &Coordinate) -> Option<f64> {
        if self.contains(point) {
            return Some(0.0);
        }

        let p: geo::Point<f64> = (*point).into();
        match self.to_geo().exterior().closest_point(&p) {
            Closest::Intersection(c) | Closest::SinglePoint(c) => {
                Some(point.dist_km(&Coordinate::from(c)))
            }
            Closest::Indeterminate => None,
        }
    }
}

/// The area affected by a NOTAM.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    Circle(Circle),
    Polygon(Polygon),
}

impl Geometry {
    /// Returns how the geometry was obtained.
    pub fn source(&self) -> GeometrySource {
        match self {
            Self::Circle(circle) => circle.source,
            Self::Polygon(polygon) => polygon.source,
        }
    }

    pub fn contains(&self, point: &Coordinate) -> bool {
        match self {
            Self::Circle(circle) => circle.contains(point),
            Self::Polygon(polygon) => polygon.contains(point),
        }
    }

    /// Returns the bounding box or `None` for a polygon without vertices.
    pub fn envelope(&self) -> Option<geo::Rect<f64>> {
        match self {
            Self::Circle(circle) => Some(circle.envelope()),
            Self::Polygon(polygon) => polygon.envelope(),
        }
    }

    /// Returns the distance of the point to the geometry in kilometers or
    /// zero if the geometry contains the point.
    pub fn distance_km(&self, point: &Coordinate) -> Option<f64> {
        match self {
            Self::Circle(circle) => Some((circle.center.dist_km(point) - circle.radius_km).max(0.0)),
            Self::Polygon(polygon) => polygon.distance_km(point),
        }
    }
}

impl From<Circle> for Geometry {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}
