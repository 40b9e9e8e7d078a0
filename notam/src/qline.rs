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

//! Q-line (qualifier line) parsing.
//!
//! The Q-line holds slash separated, fixed format qualifiers:
//!
//! ```text
//! RKRR/QMRLC/IV/NBO/A/000/999/3728N12653E010
//! FIR /CODE /TRAFFIC/PURPOSE/SCOPE/LOWER/UPPER/COORDINATE+RADIUS
//! ```

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;
use crate::Error;

/// The qualifiers of a Q-line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QLine {
    /// Flight Information Region, e.g. `RKRR`.
    pub fir: String,

    /// The raw Q-code, e.g. `QMRLC`.
    pub qcode: String,

    pub traffic: Option<String>,
    pub purpose: Option<String>,
    pub scope: Option<String>,

    /// Lower limit in feet.
    pub lower_altitude: Option<u32>,

    /// Upper limit in feet.
    pub upper_altitude: Option<u32>,

    /// The raw coordinate and radius token.
    pub coordinate: Option<String>,
}

/// Converts a three digit flight level to feet.
fn flight_level_ft(token: &str) -> Option<u32> {
    if token.len() == 3 && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse::<u32>().ok().map(|fl| fl * 100)
    } else {
        None
    }
}

/// Returns the trimmed token if it's not blank.
fn token(tokens: &[&str], i: usize) -> Option<String> {
    tokens
        .get(i)
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

impl FromStr for QLine {
    type Err = Error;

    /// Parses the Q-line with or without the leading `Q)` marker.
    ///
    /// At least the FIR and the Q-code are required. The limits are read
    /// only if the line has seven or more qualifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("Q)").unwrap_or(s);
        let tokens: Vec<&str> = s.split('/').collect();

        if tokens.len() < 2 {
            return Err(Error::UnexpectedString);
        }

        let (lower_altitude, upper_altitude) = if tokens.len() >= 7 {
            (
                flight_level_ft(tokens[5].trim()),
                flight_level_ft(tokens[6].trim()),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            fir: tokens[0].trim().to_string(),
            qcode: tokens[1].trim().to_string(),
            traffic: token(&tokens, 2),
            purpose: token(&tokens, 3),
            scope: token(&tokens, 4),
            lower_altitude,
            upper_altitude,
            coordinate: token(&tokens, 7),
        })
    }
}

/// Parses the Q-line or returns `None` if it has less than two qualifiers.
pub fn parse_q_line(q_line: &str) -> Option<QLine> {
    q_line.parse().ok()
}

/// A coordinate with radius in nautical miles as found at the end of the
/// Q-line.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinateRadius {
    pub coordinate: Coordinate,
    pub radius_nm: u16,
}

static_regex!(
    /// `DDMM[NS]DDDMM[EW]RRR`
    COMPACT_RE = r"(\d{2})(\d{2})([NS])(\d{3})(\d{2})([EW])(\d{3})"
);

static_regex!(
    /// `DDMMSS[NS]DDDMMSS[EW]RRR`
    SECONDS_RE = r"(\d{2})(\d{2})(\d{2})([NS])(\d{3})(\d{2})(\d{2})([EW])(\d{3})"
);

impl FromStr for CoordinateRadius {
    type Err = Error;

    /// Searches the string for a coordinate with radius.
    ///
    /// The compact form with minutes precision is tried first and the form
    /// with seconds precision second.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        macro_rules! number {
            ($caps:expr, $i:expr) => {
                $caps[$i].parse().map_err(|_| Error::UnexpectedString)
            };
        }

        macro_rules! hemisphere {
            ($caps:expr, $i:expr) => {
                $caps[$i].chars().next().ok_or(Error::UnexpectedString)
            };
        }

        let compact = COMPACT_RE.captures_iter(s).find_map(|caps| {
            let coordinate = Coordinate::try_from_dms(
                (number!(caps, 1).ok()?, number!(caps, 2).ok()?, 0, hemisphere!(caps, 3).ok()?),
                (number!(caps, 4).ok()?, number!(caps, 5).ok()?, 0, hemisphere!(caps, 6).ok()?),
            )
            .ok()?;
            let radius_nm = number!(caps, 7).ok()?;
            Some(Self {
                coordinate,
                radius_nm,
            })
        });

        if let Some(coordinate_radius) = compact {
            return Ok(coordinate_radius);
        }

        SECONDS_RE
            .captures_iter(s)
            .find_map(|caps| {
                let coordinate = Coordinate::try_from_dms(
                    (
                        number!(caps, 1).ok()?,
                        number!(caps, 2).ok()?,
                        number!(caps, 3).ok()?,
                        hemisphere!(caps, 4).ok()?,
                    ),
                    (
                        number!(caps, 5).ok()?,
                        number!(caps, 6).ok()?,
                        number!(caps, 7).ok()?,
                        hemisphere!(caps, 8).ok()?,
                    ),
                )
                .ok()?;
                let radius_nm = number!(caps, 9).ok()?;
                Some(Self {
                    coordinate,
                    radius_nm,
                })
            })
            .ok_or_else(|| Error::InvalidCoordinate(s.to_string()))
    }
}
