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

//! Q-code interpretation.
//!
//! A Q-code like `QMRLC` encodes the subject in the second and third letter
//! (`MR` runway) and the condition in the remaining letters (`LC` closed).
//! The condition is decoded from the two letter code if known, and from the
//! single fourth letter otherwise. Unknown codes are kept literally.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SUBJECTS: &[(&str, &str)] = &[
    ("FA", "Aerodrome"),
    ("FT", "Terminal facility"),
    ("FP", "Parking area"),
    ("IC", "Air traffic control service"),
    ("IG", "Landing aid"),
    ("LA", "Aerodrome lighting"),
    ("LC", "Approach lighting"),
    ("LG", "Ground lighting"),
    ("LI", "Runway lighting"),
    ("MA", "Movement area"),
    ("MH", "Heliport"),
    ("MK", "Apron"),
    ("MR", "Runway"),
    ("MT", "Taxiway"),
    ("MX", "Aerodrome operations"),
    ("NA", "NAVAID equipment"),
    ("NB", "NDB"),
    ("NV", "VOR"),
    ("ND", "DME"),
    ("NI", "ILS"),
    ("NM", "Marker"),
    ("NL", "Localizer"),
    ("OA", "Aeronautical obstacle"),
    ("OB", "Obstacle"),
    ("OL", "Obstacle lights"),
    ("PA", "Aeronautical information"),
    ("PI", "Instrument approach procedure"),
    ("PX", "Other procedure"),
    ("RA", "Airspace restriction"),
    ("RC", "Route closure"),
    ("RD", "Danger area"),
    ("RM", "Military exercise"),
    ("RO", "Restricted area"),
    ("RP", "Prohibited area"),
    ("RT", "Temporary restriction"),
    ("RU", "UAS area"),
    ("SA", "Flight service"),
    ("WA", "Aviation warning"),
    ("WC", "Air combat exercise"),
    ("WD", "Danger area"),
    ("WE", "Exercise area"),
    ("WH", "Firing"),
    ("WM", "Missile and artillery exercise"),
    ("WP", "Parachute jumping"),
    ("WU", "UAS activity"),
];

/// Conditions by the fourth and fifth letter (ICAO Doc 8126).
const CONDITIONS: &[(&str, &str)] = &[
    ("AC", "Withdrawn for maintenance"),
    ("AD", "Available for daylight operation"),
    ("AF", "Flight checked and found reliable"),
    ("AG", "Operating but ground checked only"),
    ("AH", "Hours of service changed"),
    ("AK", "Resumed normal operation"),
    ("AL", "Operative subject to limitations"),
    ("AM", "Military operations only"),
    ("AN", "Available for night operation"),
    ("AO", "Operational"),
    ("AP", "Available by prior permission only"),
    ("AR", "Available on request"),
    ("AS", "Unserviceable"),
    ("AU", "Not available"),
    ("AW", "Completely withdrawn"),
    ("AX", "Shutdown cancelled"),
    ("CA", "Activated"),
    ("CC", "Completed"),
    ("CD", "Deactivated"),
    ("CE", "Erected"),
    ("CF", "Frequency changed"),
    ("CG", "Downgraded"),
    ("CH", "Changed"),
    ("CI", "Identification changed"),
    ("CL", "Realigned"),
    ("CM", "Displaced"),
    ("CN", "Cancelled"),
    ("CO", "Operating"),
    ("CP", "Operating on reduced power"),
    ("CR", "Temporarily replaced"),
    ("CS", "Installed"),
    ("CT", "On test"),
    ("HW", "Work in progress"),
    ("HX", "Concentration of birds"),
    ("LB", "Reserved for based aircraft"),
    ("LC", "Closed"),
    ("LH", "Unserviceable for heavy aircraft"),
    ("LP", "Prohibited"),
    ("LR", "Restricted to runways and taxiways"),
    ("LT", "Limited"),
    ("LW", "Will take place"),
    ("XX", "Plain language"),
];

/// Conditions by the fourth letter alone.
const SHORT_CONDITIONS: &[(char, &str)] = &[
    ('A', "Available"),
    ('C', "Closed"),
    ('H', "Hours changed"),
    ('K', "Resumed"),
    ('L', "Limited"),
    ('N', "Cancelled"),
    ('O', "Operational"),
    ('P', "Installed"),
    ('R', "Removed"),
    ('S', "In service"),
    ('T', "Testing"),
    ('U', "Unserviceable"),
    ('W', "Activated"),
    ('X', "Other"),
];

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == code).map(|(_, v)| *v)
}

/// Returns the label of a two letter subject code.
pub fn subject_label(code: &str) -> Option<&'static str> {
    lookup(SUBJECTS, code)
}

/// Returns the label of a two letter condition code.
pub fn condition_label(code: &str) -> Option<&'static str> {
    lookup(CONDITIONS, code)
}

/// The decoded Q-code.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QCodeInterpretation {
    pub subject: String,
    pub condition: String,
    /// Letters following the condition that weren't interpreted.
    ///
    /// This starts after the fifth letter if the two letter condition was
    /// known (`QOBCEXX` keeps `XX`) and after the fourth letter otherwise.
    pub extra: String,
    /// Subject and condition label, or the label that is known if the other
    /// isn't. Falls back to the input if neither is known.
    pub summary: String,
}

/// Interprets the Q-code.
///
/// The leading `Q` is optional. Codes with less than three letters can't be
/// interpreted and result in an empty interpretation whose summary is the
/// input.
pub fn interpret(qcode: &str) -> QCodeInterpretation {
    let upper = qcode.trim().to_uppercase();
    let chars: Vec<char> = upper.strip_prefix('Q').unwrap_or(&upper).chars().collect();

    if chars.len() < 3 {
        return QCodeInterpretation {
            summary: qcode.to_string(),
            ..Default::default()
        };
    }

    let subject_code: String = chars[..2].iter().collect();
    let known_subject = subject_label(&subject_code);

    let two_letter = chars
        .get(2..4)
        .and_then(|c| condition_label(&c.iter().collect::<String>()));

    let (known_condition, extra): (Option<&str>, String) = match two_letter {
        Some(label) => (Some(label), chars[4..].iter().collect()),
        None => {
            let label = SHORT_CONDITIONS
                .iter()
                .find(|(c, _)| *c == chars[2])
                .map(|(_, label)| *label);
            (label, chars[3..].iter().collect())
        }
    };

    let summary = match (known_subject, known_condition) {
        (Some(subject), Some(condition)) => format!("{subject} {condition}"),
        (Some(label), None) | (None, Some(label)) => label.to_string(),
        (None, None) => qcode.to_string(),
    };

    let subject = known_subject.map(str::to_string).unwrap_or(subject_code);
    let condition = known_condition
        .map(str::to_string)
        .unwrap_or_else(|| chars[2].to_string());

    QCodeInterpretation {
        subject,
        condition,
        extra,
        summary,
    }
}

/// Coarse grouping of NOTAMs by their Q-code.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NotamKind {
    Runway,
    DangerArea,
    Obstacle,
    Facility,
    Lighting,
    Communication,
    Navigation,
    General,
}

impl NotamKind {
    /// Groups the NOTAM by its Q-code, e.g. `QMRLC` is a runway NOTAM.
    pub fn from_qcode(qcode: Option<&str>) -> Self {
        let Some(qcode) = qcode.map(str::to_uppercase) else {
            return Self::General;
        };

        if qcode.contains("QMR") {
            Self::Runway
        } else if qcode.contains("QWD") {
            Self::DangerArea
        } else if qcode.contains("QOB") {
            Self::Obstacle
        } else if qcode.contains("QFA") || qcode.contains("QP") {
            Self::Facility
        } else if qcode.contains("QL") {
            Self::Lighting
        } else if qcode.contains("QC") {
            Self::Communication
        } else if qcode.contains("QN") {
            Self::Navigation
        } else {
            Self::General
        }
    }

    /// Display rank from 1 (runway) to 5 (general).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Runway => 1,
            Self::DangerArea => 2,
            Self::Obstacle | Self::Navigation => 3,
            Self::Facility | Self::Lighting | Self::Communication => 4,
            Self::General => 5,
        }
    }
}

impl fmt::Display for NotamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runway => write!(f, "Runway"),
            Self::DangerArea => write!(f, "Danger area"),
            Self::Obstacle => write!(f, "Obstacle"),
            Self::Facility => write!(f, "Facility"),
            Self::Lighting => write!(f, "Lighting"),
            Self::Communication => write!(f, "Communication"),
            Self::Navigation => write!(f, "Navigation aid"),
            Self::General => write!(f, "General"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_table_is_complete() {
        assert_eq!(SUBJECTS.len(), 45);
    }

    #[test]
    fn interprets_runway_closed() {
        let i = interpret("QMRLC");
        assert_eq!(i.subject, "Runway");
        assert_eq!(i.condition, "Closed");
        assert_eq!(i.extra, "");
        assert_eq!(i.summary, "Runway Closed");
    }

    #[test]
    fn interprets_without_leading_q() {
        assert_eq!(interpret("nbas").summary, "NDB Unserviceable");
    }

    #[test]
    fn falls_back_to_single_letter_condition() {
        let i = interpret("QMRC");
        assert_eq!(i.subject, "Runway");
        assert_eq!(i.condition, "Closed");
        assert_eq!(i.extra, "");

        let i = interpret("QFAUZ");
        assert_eq!(i.subject, "Aerodrome");
        assert_eq!(i.condition, "Unserviceable");
        assert_eq!(i.extra, "Z");
    }

    #[test]
    fn interprets_two_letter_condition() {
        let i = interpret("QRTCA");
        assert_eq!(i.subject, "Temporary restriction");
        assert_eq!(i.condition, "Activated");
        assert_eq!(i.summary, "Temporary restriction Activated");
    }

    #[test]
    fn keeps_unknown_codes_literally() {
        let i = interpret("QZZ9");
        assert_eq!(i.subject, "ZZ");
        assert_eq!(i.condition, "9");
        assert_eq!(i.summary, "QZZ9");

        let i = interpret("QZZZZ");
        assert_eq!(i.subject, "ZZ");
        assert_eq!(i.condition, "Z");
        assert_eq!(i.extra, "ZZ");
        assert_eq!(i.summary, "QZZZZ");
    }

    #[test]
    fn summary_of_known_subject_only() {
        let i = interpret("QMRZZ");
        assert_eq!(i.subject, "Runway");
        assert_eq!(i.condition, "Z");
        assert_eq!(i.summary, "Runway");
    }

    #[test]
    fn summary_of_known_condition_only() {
        let i = interpret("QZZLC");
        assert_eq!(i.subject, "ZZ");
        assert_eq!(i.condition, "Closed");
        assert_eq!(i.summary, "Closed");
    }

    #[test]
    fn keeps_extra_letters() {
        let i = interpret("QOBCEXX");
        assert_eq!(i.subject, "Obstacle");
        assert_eq!(i.condition, "Erected");
        assert_eq!(i.extra, "XX");
    }

    #[test]
    fn short_codes_are_not_interpreted() {
        let i = interpret("QMR");
        assert_eq!(i.subject, "");
        assert_eq!(i.condition, "");
        assert_eq!(i.summary, "QMR");

        assert_eq!(interpret("").summary, "");
        assert_eq!(interpret(" q1 ").summary, " q1 ");
    }

    #[test]
    fn kind_from_qcode() {
        assert_eq!(NotamKind::from_qcode(Some("QMRLC")), NotamKind::Runway);
        assert_eq!(NotamKind::from_qcode(Some("QWDLW")), NotamKind::DangerArea);
        assert_eq!(NotamKind::from_qcode(Some("QOBCE")), NotamKind::Obstacle);
        assert_eq!(NotamKind::from_qcode(Some("QPICH")), NotamKind::Facility);
        assert_eq!(NotamKind::from_qcode(Some("QLRAS")), NotamKind::Lighting);
        assert_eq!(NotamKind::from_qcode(Some("QCAAS")), NotamKind::Communication);
        assert_eq!(NotamKind::from_qcode(Some("QNVAS")), NotamKind::Navigation);
        assert_eq!(NotamKind::from_qcode(Some("QXXXX")), NotamKind::General);
        assert_eq!(NotamKind::from_qcode(None), NotamKind::General);
        assert_eq!(NotamKind::Runway.rank(), 1);
        assert_eq!(NotamKind::General.rank(), 5);
    }
}
