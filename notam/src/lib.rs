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

//! ICAO NOTAM decoder.
//!
//! This crate turns raw NOTAM bulletins into typed records. A [`RawNotam`] is
//! split into its labeled [sections], and each facet is derived
//! independently:
//!
//! - [validity] of the notice relative to a reference instant,
//! - the affected [geometry] as circle or polygon,
//! - the [altitude] band from the Q-line,
//! - a human readable [interpretation] of the Q-code,
//! - a keyword based [category] and priority score.
//!
//! Real world bulletins are often malformed. None of the facets fail on bad
//! input; they degrade to `None` or a default instead.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use notam::{Notam, RawNotam, Resolver};
//! use notam::geom::GeometrySource;
//!
//! let raw = RawNotam {
//!     full_text: Some(
//!         "Q) RKRR/QMRLC/IV/NBO/A/000/999/3728N12653E010\n\
//!          A) RKSS B) 2401010600 C) 2401311800\n\
//!          E) RWY 14R/32L CLSD DUE TO MAINT"
//!             .to_string(),
//!     ),
//!     ..Default::default()
//! };
//!
//! let reference = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
//! let notam = Notam::enrich(raw, reference, &Resolver::default());
//!
//! let geometry = notam.geometry.expect("Q-line carries a coordinate");
//! assert_eq!(geometry.source(), GeometrySource::QLine);
//! assert_eq!(notam.interpretation.summary, "Runway Closed");
//! ```
//!
//! [sections]: crate::sections
//! [validity]: crate::time
//! [geometry]: crate::resolve
//! [altitude]: crate::altitude
//! [interpretation]: crate::qcode
//! [category]: crate::classify

#[macro_use]
mod macros;

mod error;
mod notam;
mod raw;

pub mod altitude;
pub mod classify;
pub mod geom;
pub mod index;
pub mod qcode;
pub mod qline;
pub mod resolve;
pub mod sections;
pub mod tables;
pub mod time;

pub use error::Error;
pub use notam::{enrich_all, Notam};
pub use raw::RawNotam;
pub use resolve::{resolve, Resolver, ResolverOptions};

/// Conversion factor of nautical miles to kilometers.
pub const KM_PER_NM: f64 = 1.852;

/// Approximate conversion factor: 1 nautical mile ≈ 1/60 degree.
pub(crate) const NM_TO_DEG: f64 = 1.0 / 60.0;

/// Converts nautical miles to kilometers.
#[inline]
pub fn nm_to_km(nm: f64) -> f64 {
    nm * KM_PER_NM
}

/// Converts kilometers to nautical miles.
#[inline]
pub fn km_to_nm(km: f64) -> f64 {
    km / KM_PER_NM
}
