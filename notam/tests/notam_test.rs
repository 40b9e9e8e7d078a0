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


use chrono::{DateTime, TimeZone, Utc};
use notam::altitude::{AltitudeTier, VerticalLimit, UNLIMITED_FT};
use notam::classify::{Category, PriorityLevel};
use notam::geom::{Geometry, GeometrySource};
use notam::index::NotamIndex;
use notam::qcode::NotamKind;
use notam::tables::TablesBuilder;
use notam::time::{DaysRemaining, ValidityStatus};
use notam::{enrich_all, Notam, RawNotam, Resolver, ResolverOptions};

const RUNWAY_CLOSURE: &str = "A0123/24 NOTAMN
Q) RKRR/QMRLC/IV/NBO/A/000/999/3728N12653E010
A) RKSS B) 2401010600 C) 2401311800
E) RWY 14R/32L CLSD DUE TO MAINT";

const RESTRICTED_AREA: &str = "A0456/24 NOTAMN
Q) RKRR/QRTCA/IV/BO/W/000/150
A) RKRR B) 2402010000 C) 2402292359EST
E) TEMPO RESTRICTED AREA ESTABLISHED WI 373000N1264200E 373000N1264800E
373600N1264800E 373600N1264200E
F) GND G) FL150";

const NEW_OBSTACLE: &str = "A0789/24 NOTAMN
Q) RKRR/QOBCE/IV/M/A/000/005
A) RKSI B) 2403010000 C) PERM
E) TEMPORARY OBST CRANE ERECTED";

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0)
        .single()
        .expect("reference should be valid")
}

fn enrich(text: &str) -> Notam {
    let raw = RawNotam {
        full_text: Some(text.to_string()),
        ..Default::default()
    };
    Notam::enrich(raw, reference(), &Resolver::default())
}

#[test]
fn runway_closure_from_q_line() {
    let notam = enrich(RUNWAY_CLOSURE);

    let Some(Geometry::Circle(circle)) = &notam.geometry else {
        panic!("runway closure should be a circle");
    };
    assert_eq!(circle.source, GeometrySource::QLine);
    assert!((circle.center.latitude - 37.4667).abs() < 1e-4);
    assert!((circle.center.longitude - 126.8833).abs() < 1e-4);
    assert!((circle.radius_km - 18.52).abs() < 1e-6);

    let altitude = notam.altitude.as_ref().expect("Q-line has limits");
    assert_eq!(altitude.lower_display, "GND");
    assert_eq!(altitude.upper_display, "UNL");
    assert_eq!(altitude.upper, Some(UNLIMITED_FT));
    assert_eq!(altitude.tier(), AltitudeTier::Unlimited);

    assert_eq!(notam.interpretation.subject, "Runway");
    assert_eq!(notam.interpretation.condition, "Closed");
    assert_eq!(notam.interpretation.summary, "Runway Closed");
    assert_eq!(notam.kind, NotamKind::Runway);

    // ended two weeks before the reference
    assert_eq!(notam.validity.status, ValidityStatus::Expired);
    assert_eq!(notam.validity.days_remaining, Some(DaysRemaining::Days(0)));

    assert_eq!(notam.category, Category::Runway);
    assert_eq!(notam.priority_level(), PriorityLevel::Critical);
}

#[test]
fn restricted_area_from_body_polygon() {
    let notam = enrich(RESTRICTED_AREA);

    let Some(Geometry::Polygon(polygon)) = &notam.geometry else {
        panic!("restricted area should be a polygon");
    };
    assert_eq!(polygon.source, GeometrySource::EText);
    assert_eq!(polygon.vertices.len(), 4);
    assert_eq!(polygon.vertices[0].latitude, 37.5);
    assert!((polygon.vertices[2].latitude - 37.6).abs() < 1e-9);
    assert!(notam.affects(&notam::geom::Coordinate::new(37.55, 126.75)));

    assert_eq!(notam.lower_limit, Some(VerticalLimit::Gnd));
    assert_eq!(notam.upper_limit, Some(VerticalLimit::Fl(150)));

    let altitude = notam.altitude.as_ref().expect("Q-line has limits");
    assert_eq!(altitude.lower, Some(0));
    assert_eq!(altitude.upper, Some(15_000));
    assert_eq!(altitude.upper_display, "FL150 (15000 ft)");
    assert!(altitude.overlaps(10_000, 12_000));
    assert!(!altitude.overlaps(20_000, 30_000));

    assert_eq!(notam.validity.status, ValidityStatus::Active);
    assert_eq!(notam.validity.days_remaining, Some(DaysRemaining::Days(15)));
    assert!(notam.validity.estimated);

    assert_eq!(notam.interpretation.summary, "Temporary restriction Activated");
    assert_eq!(notam.category, Category::Airspace);
    assert_eq!(notam.priority, 7);
    assert_eq!(notam.priority_level(), PriorityLevel::High);
}

#[test]
fn permanent_obstacle_at_aerodrome() {
    let notam = enrich(NEW_OBSTACLE);

    assert_eq!(notam.validity.status, ValidityStatus::Permanent);
    assert_eq!(notam.validity.days_remaining, Some(DaysRemaining::Unbounded));

    // the Q-line carries no coordinate and RKRR is a known FIR
    assert_eq!(
        notam.geometry.as_ref().map(Geometry::source),
        Some(GeometrySource::FirFallback)
    );

    assert_eq!(notam.aerodrome().as_deref(), Some("RKSI"));
    assert_eq!(notam.kind, NotamKind::Obstacle);
    assert_eq!(notam.category, Category::Obstacle);
    assert_eq!(notam.advisory().title, "Obstacle Erected");
}

#[test]
fn record_without_full_text() {
    let raw = RawNotam {
        id: Some("Z0001/24".to_string()),
        location: Some("KJFK".to_string()),
        e_text: Some("ILS RWY 04L U/S".to_string()),
        q_code: Some("QICAS".to_string()),
        start: Some("2024-02-10T00:00:00Z".to_string()),
        end: Some("2024-02-20T12:00:00Z".to_string()),
        ..Default::default()
    };

    let notam = Notam::enrich(raw, reference(), &Resolver::default());

    assert_eq!(notam.validity.status, ValidityStatus::Active);
    assert_eq!(notam.validity.days_remaining, Some(DaysRemaining::Days(6)));
    assert_eq!(
        notam.geometry.as_ref().map(Geometry::source),
        Some(GeometrySource::AirportLocationFallback)
    );
    assert_eq!(notam.interpretation.summary, "Air traffic control service Unserviceable");
    assert_eq!(notam.category, Category::Runway);
    assert_eq!(notam.priority, 8);
}

#[test]
fn trigger_notam_without_geometry() {
    let raw = RawNotam {
        e_text: Some("TRIGGER NOTAM - AIRAC AMDT 02/24 WEF 21 MAR 2024".to_string()),
        ..Default::default()
    };

    let notam = Notam::enrich(raw, reference(), &Resolver::default());

    assert_eq!(notam.validity.status, ValidityStatus::Trigger);
    assert_eq!(notam.validity.days_remaining, None);
    assert_eq!(notam.geometry, None);
    assert_eq!(notam.altitude, None);
    assert_eq!(notam.category, Category::Other);
}

#[test]
fn custom_tables() {
    let mut builder = TablesBuilder::new();
    builder.add_fir("EDWW", "Bremen FIR", notam::geom::Coordinate::new(53.0, 9.0));
    let tables = builder.build();
    let resolver = Resolver::new(
        &tables,
        ResolverOptions {
            fir_radius_nm: 50.0,
            ..Default::default()
        },
    );

    let raw = RawNotam {
        full_text: Some("Q) EDWW/QWPLW/IV/BO/W/000/100\nE) PJE".to_string()),
        ..Default::default()
    };
    let notam = Notam::enrich(raw, reference(), &resolver);

    let Some(Geometry::Circle(circle)) = &notam.geometry else {
        panic!("FIR fallback should be a circle");
    };
    assert_eq!(circle.source, GeometrySource::FirFallback);
    assert_eq!(circle.radius_nm, 50.0);
    assert_eq!(notam.kind, NotamKind::General);
}

#[test]
fn batch_and_index() {
    let raw: Vec<RawNotam> = [RUNWAY_CLOSURE, RESTRICTED_AREA, NEW_OBSTACLE]
        .into_iter()
        .map(|text| RawNotam {
            full_text: Some(text.to_string()),
            ..Default::default()
        })
        .collect();

    let notams = enrich_all(&raw, reference(), &Resolver::default());
    assert_eq!(notams.len(), 3);
    assert_eq!(notams[0].raw, raw[0]);
    assert_eq!(notams[2].raw, raw[2]);

    let index = NotamIndex::new(notams);

    // inside the restricted area, the runway closure circle and the FIR
    let at: Vec<&Notam> = index
        .at(&notam::geom::Coordinate::new(37.55, 126.75))
        .collect();
    assert_eq!(at.len(), 3);

    // Jeju is outside of all of them
    let at: Vec<&Notam> = index
        .at(&notam::geom::Coordinate::new(33.5067, 126.4926))
        .collect();
    assert!(at.is_empty());
}
