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

//! NOTAM section splitting.
//!
//! An ICAO NOTAM labels its fields with a letter followed by a closing
//! parenthesis:
//!
//! ```text
//! Q) RKRR/QMRLC/IV/NBO/A/000/999/3728N12653E010
//! A) RKSS B) 2401010600 C) 2401311800
//! D) DAILY 0600-1200
//! E) RWY 14R/32L CLSD
//!    DUE TO MAINT
//! F) SFC G) UNL
//! ```
//!
//! Markers are recognized case-insensitively at the start of a line or after
//! whitespace. Most sections end at the next marker or the end of their line.
//! The schedule (D) spans lines until the next marker, and the body (E) spans
//! everything up to the next F) or G) marker, so that enumerations like
//! `A) ... B) ...` within the body are kept intact.

use std::collections::BTreeMap;
use std::fmt;

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Section letter of a NOTAM.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Section {
    /// Qualifier line.
    Q,
    /// Location indicator.
    A,
    /// Start of validity.
    B,
    /// End of validity.
    C,
    /// Schedule.
    D,
    /// Body.
    E,
    /// Lower limit.
    F,
    /// Upper limit.
    G,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Self::Q,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    /// Returns the section's letter.
    pub fn letter(&self) -> char {
        match self {
            Self::Q => 'Q',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }

    /// Returns `true` if the section may continue on the following lines.
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::D | Self::E)
    }
}

impl TryFrom<char> for Section {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'Q' => Ok(Self::Q),
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'E' => Ok(Self::E),
            'F' => Ok(Self::F),
            'G' => Ok(Self::G),
            _ => Err(Error::InvalidSection(c)),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{})", self.letter())
    }
}

/// The sections of a NOTAM with their trimmed content.
///
/// Sections that are missing in the text are missing in the map, too. A
/// section is never stored with empty content.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectionMap {
    sections: BTreeMap<Section, String>,
}

impl SectionMap {
    /// Returns the content of the section.
    pub fn get(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    /// Returns the Q-line without the `Q)` marker.
    pub fn q_line(&self) -> Option<&str> {
        self.get(Section::Q)
    }

    pub fn contains(&self, section: Section) -> bool {
        self.sections.contains_key(&section)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates the sections in the order Q, A, B, C, D, E, F, G.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        self.sections.iter().map(|(s, c)| (*s, c.as_str()))
    }
}

static_regex!(
    /// A section letter followed by `)` at the start or after whitespace.
    MARKER_RE = r"(?i)(?:^|\s)([QABCDEFG])\)"
);

struct Marker {
    section: Section,
    /// Byte offset of the letter.
    start: usize,
    /// Byte offset right after the `)`.
    content: usize,
}

/// Splits the NOTAM text into its sections.
///
/// Returns an empty map if no marker is found. The first occurrence of a
/// section wins.
pub fn split(text: &str) -> SectionMap {
    let markers: Vec<Marker> = MARKER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let letter = caps.get(1)?;
            let section = letter.as_str().chars().next()?.try_into().ok()?;
            Some(Marker {
                section,
                start: letter.start(),
                content: letter.end() + 1,
            })
        })
        .collect();

    let mut sections = BTreeMap::new();
    let mut i = 0;

    while i < markers.len() {
        let marker = &markers[i];

        // the body ignores any marker other than F) and G)
        let next = match marker.section {
            Section::E => markers[i + 1..]
                .iter()
                .position(|m| matches!(m.section, Section::F | Section::G))
                .map(|p| i + 1 + p),
            _ => Some(i + 1).filter(|&n| n < markers.len()),
        };

        let end = next.map_or(text.len(), |n| markers[n].start);
        let mut content = &text[marker.content..end];

        if !marker.section.is_multiline() {
            content = content.lines().next().unwrap_or_default();
        }

        let content = content.trim();
        trace!("section {} spans {} byte(s)", marker.section, content.len());

        if !content.is_empty() {
            sections
                .entry(marker.section)
                .or_insert_with(|| content.to_string());
        }

        i = next.unwrap_or(markers.len());
    }

    SectionMap { sections }
}
