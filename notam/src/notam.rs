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

use chrono::{DateTime, Utc};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::altitude::{parse_altitude, parse_vertical_limits, AltitudeBand, VerticalLimit};
use crate::classify::{self, Advisory, Category, PriorityLevel};
use crate::geom::{Coordinate, Geometry};
use crate::qcode::{self, NotamKind, QCodeInterpretation};
use crate::qline::{parse_q_line, QLine};
use crate::resolve::Resolver;
use crate::sections::SectionMap;
use crate::time::{compute_validity, Validity, ValidityStatus};
use crate::RawNotam;

/// A NOTAM with all data derived from its raw record.
///
/// The derived data is computed once at a reference time. Enrich the raw
/// NOTAM again to get the validity at another time.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Notam {
    pub raw: RawNotam,
    pub sections: SectionMap,
    pub q_line: Option<QLine>,
    pub validity: Validity,
    pub geometry: Option<Geometry>,
    pub interpretation: QCodeInterpretation,
    pub kind: NotamKind,
    pub altitude: Option<AltitudeBand>,
    /// Lower limit of the F) section.
    pub lower_limit: Option<VerticalLimit>,
    /// Upper limit of the G) section.
    pub upper_limit: Option<VerticalLimit>,
    pub category: Category,
    pub priority: u32,
}

impl Notam {
    /// Derives all data of the raw NOTAM.
    ///
    /// The validity is computed relative to the `reference` time and the
    /// geometry with the `resolver`.
    pub fn enrich(raw: RawNotam, reference: DateTime<Utc>, resolver: &Resolver<'_>) -> Self {
        let sections = raw.sections();

        let q_line = sections.q_line().and_then(parse_q_line);
        // the legacy field may carry the complete Q-line or only the code
        let legacy_q_line = raw
            .legacy_qcode()
            .filter(|field| field.contains('/'))
            .and_then(parse_q_line);

        let code = q_line
            .as_ref()
            .or(legacy_q_line.as_ref())
            .map(|q| q.qcode.as_str())
            .or(raw.legacy_qcode());

        let interpretation = code.map(qcode::interpret).unwrap_or_default();
        let kind = NotamKind::from_qcode(code);

        let altitude = sections.q_line().and_then(parse_altitude).or_else(|| {
            raw.legacy_qcode()
                .filter(|field| field.contains('/'))
                .and_then(parse_altitude)
        });

        let (lower_limit, upper_limit) = parse_vertical_limits(&sections);

        let validity = compute_validity(
            raw.raw_start(&sections),
            raw.raw_end(&sections),
            reference,
        );

        let geometry = resolver.resolve_sections(&raw, &sections);

        let body = raw.body();
        let category = classify::categorize(&body);
        let priority = classify::priority(&body);

        Self {
            raw,
            sections,
            q_line,
            validity,
            geometry,
            interpretation,
            kind,
            altitude,
            lower_limit,
            upper_limit,
            category,
            priority,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.raw.id.as_deref()
    }

    /// Returns the location indicator of the aerodrome.
    pub fn aerodrome(&self) -> Option<String> {
        self.raw.aerodrome(&self.sections)
    }

    /// Returns the FIR of the Q-line.
    pub fn fir(&self) -> Option<&str> {
        self.q_line.as_ref().map(|q| q.fir.as_str())
    }

    pub fn body(&self) -> String {
        self.raw.body()
    }

    pub fn priority_level(&self) -> PriorityLevel {
        PriorityLevel::from_score(self.priority)
    }

    pub fn advisory(&self) -> Advisory {
        classify::advise(&self.interpretation.summary, self.kind, &self.body())
    }

    /// Returns `true` if the NOTAM is in effect at the reference time.
    pub fn is_in_effect(&self) -> bool {
        matches!(
            self.validity.status,
            ValidityStatus::Active | ValidityStatus::Permanent
        )
    }

    /// Returns `true` if the geometry of the NOTAM contains the point.
    pub fn affects(&self, point: &Coordinate) -> bool {
        self.geometry.as_ref().is_some_and(|g| g.contains(point))
    }
}

/// Enriches all NOTAMs keeping their order.
///
/// With the `rayon` feature the NOTAMs are enriched in parallel.
pub fn enrich_all(raw: &[RawNotam], reference: DateTime<Utc>, resolver: &Resolver<'_>) -> Vec<Notam> {
    #[cfg(feature = "rayon")]
    let iter = raw.par_iter();

    #[cfg(not(feature = "rayon"))]
    let iter = raw.iter();

    iter.cloned()
        .map(|raw| Notam::enrich(raw, reference, resolver))
        .collect()
}
