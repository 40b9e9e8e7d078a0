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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sections::{self, Section, SectionMap};

/// A NOTAM as delivered by a data source.
///
/// Every field is optional since data sources differ in what they provide.
/// The record is never modified by this crate; all derived data is computed
/// from it on demand.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawNotam {
    /// Identifier, e.g. `A0123/24`.
    pub id: Option<String>,

    /// ICAO location indicator of the aerodrome or FIR.
    pub location: Option<String>,

    /// Location indicator as some sources name the A) field.
    pub a_location: Option<String>,

    /// The complete bulletin text including all sections.
    pub full_text: Option<String>,

    /// The body (E section) if the source splits it already.
    pub e_text: Option<String>,

    /// Legacy field carrying the Q-line or parts of it.
    pub q_code: Option<String>,

    /// Alternate spelling of the legacy [`q_code`](Self::q_code) field.
    pub qcode: Option<String>,

    /// Start of validity as raw string.
    pub start: Option<String>,
    pub effective_start: Option<String>,
    pub b_start_time: Option<String>,

    /// End of validity as raw string, possibly `PERM` or `UFN`.
    pub end: Option<String>,
    pub effective_end: Option<String>,
    pub c_end_time: Option<String>,

    pub created_date: Option<String>,
    pub series: Option<String>,
    pub number: Option<String>,
}

/// Returns the trimmed string if it's not blank.
fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl RawNotam {
    /// Splits the full text into its sections.
    pub fn sections(&self) -> SectionMap {
        sections::split(self.full_text.as_deref().unwrap_or_default())
    }

    /// Returns the full text or an empty string.
    pub fn full_text(&self) -> &str {
        self.full_text.as_deref().unwrap_or_default()
    }

    /// Returns the text that is searched for coordinates, which is the
    /// `e_text` if present or the full text.
    pub fn coordinate_text(&self) -> &str {
        non_blank(&self.e_text).unwrap_or(self.full_text())
    }

    /// Returns the legacy Q-code field, preferring `qcode` over `q_code`.
    pub fn legacy_qcode(&self) -> Option<&str> {
        non_blank(&self.qcode).or(non_blank(&self.q_code))
    }

    /// Returns the body of the NOTAM.
    ///
    /// This is the `e_text` if present, the E) section of the full text or
    /// the full text itself, in that order.
    pub fn body(&self) -> String {
        if let Some(e) = non_blank(&self.e_text) {
            return e.to_string();
        }

        let sections = self.sections();
        match sections.get(Section::E) {
            Some(e) => e.to_string(),
            None => self.full_text().trim().to_string(),
        }
    }

    /// Returns the location indicator of the aerodrome.
    ///
    /// Uses `location`, then `a_location` and falls back to the first four
    /// letter indicator of the A) section.
    pub fn aerodrome(&self, sections: &SectionMap) -> Option<String> {
        non_blank(&self.location)
            .or(non_blank(&self.a_location))
            .map(str::to_uppercase)
            .or_else(|| {
                sections.get(Section::A).and_then(|a| {
                    a.split_whitespace()
                        .find(|w| w.len() == 4 && w.chars().all(|c| c.is_ascii_alphabetic()))
                        .map(str::to_uppercase)
                })
            })
    }

    /// Returns the raw start of validity.
    ///
    /// The first non-blank of `start`, `effective_start` and `b_start_time`
    /// is used, falling back to the B) section.
    pub fn raw_start<'a>(&'a self, sections: &'a SectionMap) -> Option<&'a str> {
        non_blank(&self.start)
            .or(non_blank(&self.effective_start))
            .or(non_blank(&self.b_start_time))
            .or(sections.get(Section::B))
    }

    /// Returns the raw end of validity like [`raw_start`](Self::raw_start)
    /// from `end`, `effective_end`, `c_end_time` or the C) section.
    pub fn raw_end<'a>(&'a self, sections: &'a SectionMap) -> Option<&'a str> {
        non_blank(&self.end)
            .or(non_blank(&self.effective_end))
            .or(non_blank(&self.c_end_time))
            .or(sections.get(Section::C))
    }
}
