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

//! Altitude band of a NOTAM.
//!
//! The Q-line carries the lower and upper limit as three digit flight levels
//! in its sixth and seventh qualifier, where `000` is the ground and `999` is
//! unlimited. The F) and G) sections may state the limits in plain text,
//! which is parsed into a [`VerticalLimit`].

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sections::{Section, SectionMap};
use crate::Error;

/// Upper limit in feet for an unlimited band.
///
/// A finite value allows to compare bands without special cases.
pub const UNLIMITED_FT: u32 = 99_900;

const GND: &str = "GND";
const UNL: &str = "UNL";
const FEET_IN_METER: f32 = 3.28084;

/// Lower and upper limit of the affected airspace.
///
/// A limit is `None` if it's not specified. The display strings default to
/// `GND` and `UNL` in that case, but an unspecified limit must not be
/// compared as ground or unlimited.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AltitudeBand {
    /// Lower limit in feet.
    pub lower: Option<u32>,
    /// Upper limit in feet.
    pub upper: Option<u32>,
    pub lower_display: String,
    pub upper_display: String,
}

impl AltitudeBand {
    /// Returns `true` if this band overlaps the band from `lower_ft` to
    /// `upper_ft`.
    ///
    /// An unspecified limit is assumed as ground or unlimited respectively.
    pub fn overlaps(&self, lower_ft: u32, upper_ft: u32) -> bool {
        let lower = self.lower.unwrap_or(0);
        let upper = self.upper.unwrap_or(UNLIMITED_FT);
        lower <= upper_ft && lower_ft <= upper
    }

    pub fn tier(&self) -> AltitudeTier {
        AltitudeTier::from_upper(self.upper)
    }
}

impl fmt::Display for AltitudeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.lower_display, self.upper_display)
    }
}

/// Parses a limit token and returns its value in feet and the display string.
fn limit(token: &str, sentinel: (u32, &str)) -> Option<(u32, String)> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: u32 = token.parse().ok()?;
    let (sentinel_value, sentinel_display) = sentinel;

    if value == sentinel_value {
        let ft = if value == 0 { 0 } else { UNLIMITED_FT };
        return Some((ft, sentinel_display.to_string()));
    }

    let ft = value.checked_mul(100)?;
    Some((ft, format!("FL{token} ({ft} ft)")))
}

/// Parses the altitude band from the Q-line.
///
/// Returns `None` if the Q-line has less than seven qualifiers.
pub fn parse_altitude(q_line: &str) -> Option<AltitudeBand> {
    let q_line = q_line.trim();
    let q_line = q_line.strip_prefix("Q)").unwrap_or(q_line);
    let tokens: Vec<&str> = q_line.split('/').collect();

    if tokens.len() < 7 {
        return None;
    }

    let lower = limit(tokens[5].trim(), (0, GND));
    let upper = limit(tokens[6].trim(), (999, UNL));

    Some(AltitudeBand {
        lower: lower.as_ref().map(|(ft, _)| *ft),
        upper: upper.as_ref().map(|(ft, _)| *ft),
        lower_display: lower.map_or_else(|| GND.to_string(), |(_, s)| s),
        upper_display: upper.map_or_else(|| UNL.to_string(), |(_, s)| s),
    })
}

/// Coarse classification of the upper limit.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudeTier {
    Unknown,
    /// Below 5,000 ft.
    NearGround,
    /// From 5,000 ft.
    Low,
    /// From 10,000 ft.
    MediumLow,
    /// From 24,000 ft.
    Medium,
    /// From 45,000 ft.
    High,
    Unlimited,
}

impl AltitudeTier {
    pub fn from_upper(upper_ft: Option<u32>) -> Self {
        match upper_ft {
            None => Self::Unknown,
            Some(ft) if ft >= UNLIMITED_FT => Self::Unlimited,
            Some(ft) if ft >= 45_000 => Self::High,
            Some(ft) if ft >= 24_000 => Self::Medium,
            Some(ft) if ft >= 10_000 => Self::MediumLow,
            Some(ft) if ft >= 5_000 => Self::Low,
            Some(_) => Self::NearGround,
        }
    }
}

/// A vertical limit as stated in the F) or G) section.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerticalLimit {
    /// Ground level.
    Gnd,

    /// Surface, which is ground or water.
    Sfc,

    /// Flight level in hundreds of feet.
    Fl(u16),

    /// Altitude in feet above mean sea level.
    Amsl(u32),

    /// Height in feet above ground level.
    Agl(u32),

    /// An unlimited vertical limit.
    Unlimited,
}

impl VerticalLimit {
    /// Returns the limit in feet if it refers to sea level or standard
    /// pressure.
    ///
    /// Heights above ground have no common datum and return `None`.
    pub fn feet(&self) -> Option<u32> {
        match self {
            Self::Gnd | Self::Sfc => Some(0),
            Self::Fl(fl) => Some(*fl as u32 * 100),
            Self::Amsl(ft) => Some(*ft),
            Self::Agl(_) => None,
            Self::Unlimited => Some(UNLIMITED_FT),
        }
    }
}

static_regex!(
    HEIGHT_RE = r"^(\d+)\s*(FT|M)\s*(AMSL|MSL|AGL|SFC|GND)?$"
);

impl FromStr for VerticalLimit {
    type Err = Error;

    /// Parses limits like `GND`, `SFC`, `UNL`, `FL100`, `5000FT AMSL`,
    /// `1500 FT AGL` or `300M AMSL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_uppercase();
        let invalid = || Error::InvalidVerticalLimit(s.clone());

        match s.as_str() {
            "GND" => return Ok(Self::Gnd),
            "SFC" => return Ok(Self::Sfc),
            "UNL" | "UNLTD" | "UNLIMITED" => return Ok(Self::Unlimited),
            _ => {}
        }

        if let Some(fl) = s.strip_prefix("FL") {
            return fl.trim().parse().map(Self::Fl).map_err(|_| invalid());
        }

        let caps = HEIGHT_RE.captures(&s).ok_or_else(invalid)?;
        let value: u32 = caps[1].parse().map_err(|_| invalid())?;

        let ft = match &caps[2] {
            "M" => (value as f32 * FEET_IN_METER).round() as u32,
            _ => value,
        };

        match caps.get(3).map(|m| m.as_str()) {
            Some("AGL" | "SFC" | "GND") => Ok(Self::Agl(ft)),
            _ => Ok(Self::Amsl(ft)),
        }
    }
}

impl fmt::Display for VerticalLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gnd => write!(f, "GND"),
            Self::Sfc => write!(f, "SFC"),
            Self::Fl(fl) => write!(f, "FL{fl:03}"),
            Self::Amsl(ft) => write!(f, "{ft} FT AMSL"),
            Self::Agl(ft) => write!(f, "{ft} FT AGL"),
            Self::Unlimited => write!(f, "UNL"),
        }
    }
}

/// Parses the lower (F) and upper (G) limit sections.
pub fn parse_vertical_limits(
    sections: &SectionMap,
) -> (Option<VerticalLimit>, Option<VerticalLimit>) {
    let parse = |section| -> Option<VerticalLimit> {
        sections.get(section).and_then(|s| s.parse().ok())
    };
    (parse(Section::F), parse(Section::G))
}
