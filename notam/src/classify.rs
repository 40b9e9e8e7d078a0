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

//! Keyword heuristics over the body text.
//!
//! The results are meant for sorting and coloring. The priority score is
//! the sum of matched keyword weights and not a calibrated risk measure.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::qcode::NotamKind;
use crate::Error;

/// Category of a NOTAM by the keywords of its body.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Category {
    Runway,
    Taxiway,
    Apron,
    Navigation,
    Airspace,
    Obstacle,
    Facility,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Runway,
        Self::Taxiway,
        Self::Apron,
        Self::Navigation,
        Self::Airspace,
        Self::Obstacle,
        Self::Facility,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Runway => "RUNWAY",
            Self::Taxiway => "TAXIWAY",
            Self::Apron => "APRON",
            Self::Navigation => "NAVIGATION",
            Self::Airspace => "AIRSPACE",
            Self::Obstacle => "OBSTACLE",
            Self::Facility => "FACILITY",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == upper)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keywords of the categories. The first category with a matching keyword
/// wins.
const CATEGORY_KEYWORDS: [(Category, &[&str]); 7] = [
    (Category::Runway, &["rwy", "runway"]),
    (Category::Taxiway, &["twy", "taxiway"]),
    (Category::Apron, &["apron", "parking"]),
    (Category::Navigation, &["vor", "ils", "dme"]),
    (Category::Airspace, &["airspace", "restricted"]),
    (Category::Obstacle, &["obstacle", "crane"]),
    (Category::Facility, &["facility", "terminal"]),
];

const RUNWAY: &[&str] = &["rwy", "runway"];
const CLOSED: &[&str] = &["closed", "clo", "clsd"];
const OUT_OF_SERVICE: &[&str] = &["u/s", "out of service", "unserviceable"];
const RESTRICTED: &[&str] = &["restricted", "prohibited"];
const OBSTACLE: &[&str] = &["obstacle", "crane"];
const LIGHTING: &[&str] = &["light", "lgt"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Categorizes the text by case insensitive keywords.
pub fn categorize(text: &str) -> Category {
    let text = text.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map_or(Category::Other, |(category, _)| *category)
}

/// Scores the text by the severity of its keywords.
///
/// | keywords                     | score |
/// |------------------------------|-------|
/// | runway and closed            | 10    |
/// | out of service               | 8     |
/// | restricted or prohibited     | 7     |
/// | obstacle or crane            | 5     |
pub fn priority(text: &str) -> u32 {
    let text = text.to_lowercase();
    let mut score = 0;

    if contains_any(&text, RUNWAY) && contains_any(&text, CLOSED) {
        score += 10;
    }

    if contains_any(&text, OUT_OF_SERVICE) {
        score += 8;
    }

    if contains_any(&text, RESTRICTED) {
        score += 7;
    }

    if contains_any(&text, OBSTACLE) {
        score += 5;
    }

    score
}

/// Level of a priority score.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PriorityLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl PriorityLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            8.. => Self::Critical,
            5..=7 => Self::High,
            3..=4 => Self::Moderate,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Plain language advice for a NOTAM.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Advisory {
    pub title: String,
    pub description: String,
    pub impact: String,
    pub action: String,
}

static_regex!(
    RUNWAY_RE = r"(?i)RWY\s*(\d{2}[LRC]?)"
);

/// Writes an advisory from the Q-code summary, kind and body of a NOTAM.
pub fn advise(summary: &str, kind: NotamKind, body: &str) -> Advisory {
    let title = if !summary.trim().is_empty() {
        summary.trim().to_string()
    } else if kind != NotamKind::General {
        format!("{kind} notice")
    } else {
        "NOTAM".to_string()
    };

    let text = body.to_lowercase();

    let (description, impact, action) = if contains_any(&text, RUNWAY)
        && contains_any(&text, CLOSED)
    {
        let description = match RUNWAY_RE.captures(body) {
            Some(caps) => format!("Runway {} is closed.", &caps[1]),
            None => "Runway is closed.".to_string(),
        };
        (
            description,
            "The runway is not available for takeoff and landing.",
            "Plan for another runway or an alternate aerodrome.",
        )
    } else if contains_any(&text, OUT_OF_SERVICE) {
        (
            "A navigation or facility service is out of service.".to_string(),
            "Procedures that depend on the service can't be flown.",
            "Use alternate procedures or contact ATC.",
        )
    } else if contains_any(&text, RESTRICTED) {
        (
            "Flights in the airspace are restricted.".to_string(),
            "Entry requires a clearance or is prohibited.",
            "Avoid the area or obtain a clearance in advance.",
        )
    } else if contains_any(&text, OBSTACLE) {
        (
            "An obstacle was erected or its data changed.".to_string(),
            "Mind the obstacle during approach and departure.",
            "Check position and height of the obstacle and keep a safe altitude.",
        )
    } else if contains_any(&text, LIGHTING) {
        (
            "The operation of aerodrome lighting changed.".to_string(),
            "Visual references may be limited at night or in low visibility.",
            "Check the lighting status and prepare alternate procedures.",
        )
    } else {
        (
            "Consider the NOTAM in your flight planning.".to_string(),
            "Mind the stated location, time and conditions.",
            "Read the full text and contact the issuing office if in doubt.",
        )
    };

    Advisory {
        title,
        description,
        impact: impact.to_string(),
        action: action.to_string(),
    }
}
