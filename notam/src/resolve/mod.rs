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

//! Coordinate resolution.
//!
//! A NOTAM is mapped to a single [`Geometry`] by trying five strategies in
//! order. The first one that yields a geometry wins:
//!
//! 1. the coordinate and radius at the end of the Q-line,
//! 2. the same in the legacy Q-code field,
//! 3. coordinates and radius phrases found in the body text,
//! 4. the center of the FIR named in the Q-line,
//! 5. the location of the aerodrome.
//!
//! The strategies trade precision for coverage. The [`GeometrySource`] of
//! the result tells which one was used.

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::{Circle, Geometry, GeometrySource, Polygon};
use crate::qline::{parse_q_line, CoordinateRadius};
use crate::sections::SectionMap;
use crate::tables::Tables;
use crate::RawNotam;

pub mod scan;

/// Tunables of the [`Resolver`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolverOptions {
    /// Radius around a single point of the body text without radius phrase.
    pub single_point_radius_nm: f64,

    /// Radius around the center of a FIR.
    pub fir_radius_nm: f64,

    /// Radius around an aerodrome.
    pub aerodrome_radius_nm: f64,

    /// Points of the body text closer than this in degrees are merged.
    pub dedup_tolerance_deg: f64,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            single_point_radius_nm: 5.0,
            fir_radius_nm: 100.0,
            aerodrome_radius_nm: 5.0,
            dedup_tolerance_deg: 0.001,
        }
    }
}

/// Resolves the geometry of NOTAMs.
///
/// The resolver holds no state besides its lookup tables and options and
/// can be shared between threads.
#[derive(Copy, Clone, Debug)]
pub struct Resolver<'a> {
    tables: &'a Tables,
    options: ResolverOptions,
}

impl Default for Resolver<'static> {
    /// Returns a resolver with the [builtin](Tables::builtin) tables.
    fn default() -> Self {
        Self::new(Tables::builtin(), ResolverOptions::default())
    }
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a Tables, options: ResolverOptions) -> Self {
        Self { tables, options }
    }

    pub fn tables(&self) -> &'a Tables {
        self.tables
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Returns the geometry of the NOTAM or `None` if no strategy applies.
    pub fn resolve(&self, raw: &RawNotam) -> Option<Geometry> {
        self.resolve_sections(raw, &raw.sections())
    }

    /// Returns the geometry of the NOTAM whose full text is already split.
    pub fn resolve_sections(&self, raw: &RawNotam, sections: &SectionMap) -> Option<Geometry> {
        let tiers: [&dyn Fn() -> Option<Geometry>; 5] = [
            &|| self.from_q_line(sections),
            &|| self.from_qcode_field(raw),
            &|| self.from_free_text(raw),
            &|| self.from_fir(sections),
            &|| self.from_aerodrome(raw, sections),
        ];

        let geometry = tiers.iter().find_map(|tier| tier());

        match &geometry {
            Some(geometry) => debug!(
                "{}: geometry from {}",
                raw.id.as_deref().unwrap_or("NOTAM"),
                geometry.source()
            ),
            None => debug!("{}: no geometry", raw.id.as_deref().unwrap_or("NOTAM")),
        }

        geometry
    }

    /// Returns a circle from the coordinate and radius of the Q-line.
    pub fn from_q_line(&self, sections: &SectionMap) -> Option<Geometry> {
        let CoordinateRadius {
            coordinate,
            radius_nm,
        } = sections.q_line()?.parse::<CoordinateRadius>().ok()?;

        Some(Circle::from_nm(coordinate, radius_nm.into(), GeometrySource::QLine).into())
    }

    /// Returns a circle from the coordinate and radius of the legacy Q-code
    /// field.
    pub fn from_qcode_field(&self, raw: &RawNotam) -> Option<Geometry> {
        let CoordinateRadius {
            coordinate,
            radius_nm,
        } = raw.legacy_qcode()?.parse::<CoordinateRadius>().ok()?;

        Some(Circle::from_nm(coordinate, radius_nm.into(), GeometrySource::QCodeField).into())
    }

    /// Returns a geometry from the coordinates of the body text.
    ///
    /// A single point with a radius phrase is a circle with this radius and
    /// without phrase a circle with the default radius. Three or more points
    /// are a polygon in the order they are listed. Two points are neither.
    pub fn from_free_text(&self, raw: &RawNotam) -> Option<Geometry> {
        let text = raw.coordinate_text();
        let mut points = scan::extract_points(text, self.options.dedup_tolerance_deg);

        match points.len() {
            0 | 2 => None,
            1 => {
                let center = points.remove(0);
                let circle = match scan::extract_radius(text) {
                    Some(radius) => Circle::from_km(center, radius.to_km(), GeometrySource::EText),
                    None => Circle::from_nm(
                        center,
                        self.options.single_point_radius_nm,
                        GeometrySource::ETextSinglePointDefault,
                    ),
                };
                Some(circle.into())
            }
            _ => Some(
                Polygon {
                    vertices: points,
                    source: GeometrySource::EText,
                }
                .into(),
            ),
        }
    }

    /// Returns a circle around the center of the FIR named in the Q-line.
    pub fn from_fir(&self, sections: &SectionMap) -> Option<Geometry> {
        let q_line = parse_q_line(sections.q_line()?)?;
        let fir = self.tables.fir(&q_line.fir)?;

        Some(
            Circle::from_nm(
                fir.coordinate,
                self.options.fir_radius_nm,
                GeometrySource::FirFallback,
            )
            .into(),
        )
    }

    /// Returns a circle around the aerodrome of the NOTAM.
    pub fn from_aerodrome(&self, raw: &RawNotam, sections: &SectionMap) -> Option<Geometry> {
        let aerodrome = self.tables.aerodrome(&raw.aerodrome(sections)?)?;

        Some(
            Circle::from_nm(
                aerodrome.coordinate,
                self.options.aerodrome_radius_nm,
                GeometrySource::AirportLocationFallback,
            )
            .into(),
        )
    }
}

/// Resolves the geometry of the NOTAM with the builtin tables and default
/// options.
pub fn resolve(raw: &RawNotam) -> Option<Geometry> {
    Resolver::default().resolve(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TablesBuilder;

    fn full_text(text: &str) -> RawNotam {
        RawNotam {
            full_text: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn circle(geometry: Option<Geometry>) -> Circle {
        match geometry {
            Some(Geometry::Circle(circle)) => circle,
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn q_line_coordinate() {
        let raw = full_text(
            "Q) RKRR/QMRLC/IV/NBO/A/000/999/3728N12653E010\n\
             A) RKSS B) 2401010600 C) 2401311800\n\
             E) RWY 14R/32L CLSD",
        );

        let circle = circle(resolve(&raw));
        assert_eq!(circle.source, GeometrySource::QLine);
        assert!((circle.center.latitude - 37.4667).abs() < 1e-4);
        assert!((circle.center.longitude - 126.8833).abs() < 1e-4);
        assert_eq!(circle.radius_nm, 10.0);
        assert!((circle.radius_km - 18.52).abs() < 1e-9);
    }

    #[test]
    fn q_line_coordinate_with_seconds() {
        let raw = full_text("Q) RKRR/QWPLW/IV/BO/W/000/050/372818N1265330E005");

        let circle = circle(resolve(&raw));
        assert_eq!(circle.source, GeometrySource::QLine);
        assert!((circle.center.latitude - 37.471_667).abs() < 1e-5);
        assert_eq!(circle.radius_nm, 5.0);
    }

    #[test]
    fn q_line_wins_over_free_text() {
        let raw = RawNotam {
            full_text: Some("Q) RKRR/QOBCE/IV/M/A/000/005/3728N12653E001".to_string()),
            e_text: Some("CRANE ERECTED PSN 350000N1290000E RADIUS 1NM".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve(&raw).map(|g| g.source()),
            Some(GeometrySource::QLine)
        );
    }

    #[test]
    fn legacy_qcode_field() {
        let raw = RawNotam {
            qcode: Some("RKRR/QMRLC/IV/NBO/A/000/999/3728N12653E010".to_string()),
            e_text: Some("PSN 350000N1290000E".to_string()),
            ..Default::default()
        };

        let circle = circle(resolve(&raw));
        assert_eq!(circle.source, GeometrySource::QCodeField);
        assert_eq!(circle.radius_nm, 10.0);
    }

    #[test]
    fn single_point_with_radius() {
        let raw = RawNotam {
            e_text: Some("UAS OPS WI 2KM RADIUS OF 372818N1265330E".to_string()),
            ..Default::default()
        };

        let circle = circle(resolve(&raw));
        assert_eq!(circle.source, GeometrySource::EText);
        assert_eq!(circle.radius_km, 2.0);
        assert!((circle.radius_nm - 2.0 / 1.852).abs() < 1e-9);
    }

    #[test]
    fn single_point_without_radius() {
        let raw = RawNotam {
            e_text: Some("OBST LGT U/S PSN 372818N1265330E".to_string()),
            ..Default::default()
        };

        let circle = circle(resolve(&raw));
        assert_eq!(circle.source, GeometrySource::ETextSinglePointDefault);
        assert_eq!(circle.radius_nm, 5.0);
    }

    #[test]
    fn polygon_keeps_listed_order() {
        let raw = RawNotam {
            e_text: Some(
                "TEMP RESTRICTED AREA 370000N1270000E - 370000N1280000E - \
                 360000N1280000E - 360000N1270000E"
                    .to_string(),
            ),
            ..Default::default()
        };

        match resolve(&raw) {
            Some(Geometry::Polygon(polygon)) => {
                assert_eq!(polygon.source, GeometrySource::EText);
                assert_eq!(
                    polygon.vertices,
                    vec![
                        coord!(37.0, 127.0),
                        coord!(37.0, 128.0),
                        coord!(36.0, 128.0),
                        coord!(36.0, 127.0),
                    ]
                );
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn two_points_fall_through() {
        let raw = RawNotam {
            full_text: Some("Q) RKRR/QXXXX/IV/NBO/E".to_string()),
            e_text: Some("BTN 370000N1270000E AND 360000N1280000E".to_string()),
            ..Default::default()
        };

        let circle = circle(resolve(&raw));
        assert_eq!(circle.source, GeometrySource::FirFallback);
        assert_eq!(circle.center, coord!(37.5, 127.0));
        assert_eq!(circle.radius_nm, 100.0);
    }

    #[test]
    fn aerodrome_fallback() {
        let raw = full_text("A) RKSI B) 2401010600 C) PERM E) TWY A CLSD");

        let circle = circle(resolve(&raw));
        assert_eq!(circle.source, GeometrySource::AirportLocationFallback);
        assert_eq!(circle.center, coord!(37.4691, 126.4505));
        assert_eq!(circle.radius_nm, 5.0);
    }

    #[test]
    fn unknown_fir_falls_back_to_aerodrome() {
        let raw = RawNotam {
            location: Some("RKSS".to_string()),
            full_text: Some("Q) EDWW/QMRLC/IV/NBO/A/000/999".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve(&raw).map(|g| g.source()),
            Some(GeometrySource::AirportLocationFallback)
        );
    }

    #[test]
    fn nothing_to_resolve() {
        assert_eq!(resolve(&RawNotam::default()), None);
        assert_eq!(resolve(&full_text("")), None);
        assert_eq!(resolve(&full_text("E) NO COORDINATES HERE")), None);
    }

    #[test]
    fn custom_tables_and_options() {
        let mut builder = TablesBuilder::new();
        builder.add_aerodrome("EDDH", coord!(53.6304, 9.9882));
        let tables = builder.build();
        let options = ResolverOptions {
            aerodrome_radius_nm: 3.0,
            ..Default::default()
        };
        let resolver = Resolver::new(&tables, options);

        let raw = RawNotam {
            location: Some("EDDH".to_string()),
            ..Default::default()
        };
        let circle = circle(resolver.resolve(&raw));
        assert_eq!(circle.radius_nm, 3.0);

        let raw = RawNotam {
            location: Some("RKSI".to_string()),
            ..Default::default()
        };
        assert_eq!(resolver.resolve(&raw), None);
    }

    #[test]
    fn compact_coordinates_are_recovered() {
        for lat in [0u8, 12, 37, 89] {
            for lon in [0u16, 45, 126, 179] {
                for min in [0u8, 1, 30, 59] {
                    let text = format!("Q) RKRR/QMRLC/IV/NBO/A/000/999/{lat:02}{min:02}N{lon:03}{min:02}W025");
                    let circle = circle(resolve(&full_text(&text)));
                    let expected_lat = lat as f64 + min as f64 / 60.0;
                    let expected_lon = -(lon as f64 + min as f64 / 60.0);
                    assert!((circle.center.latitude - expected_lat).abs() < 1e-6);
                    assert!((circle.center.longitude - expected_lon).abs() < 1e-6);
                    assert!((circle.radius_nm - 25.0).abs() < 0.01);
                    assert!((crate::km_to_nm(circle.radius_km) - circle.radius_nm).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn resolving_is_idempotent() {
        let raw = RawNotam {
            e_text: Some("370000N1270000E 370000N1280000E 360000N1280000E".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&raw), resolve(&raw));
    }
}
