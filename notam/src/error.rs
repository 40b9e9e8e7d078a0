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

use std::error;
use std::fmt;

/// Errors of the strict parsers.
///
/// The resolver functions of this crate never return an error. They use the
/// strict parsers internally and degrade any error to `None` or a default.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The string doesn't have the expected shape.
    UnexpectedString,
    /// The character is not a NOTAM section letter.
    InvalidSection(char),
    /// The coordinate is malformed or out of range.
    InvalidCoordinate(String),
    /// The timestamp is neither ISO 8601 nor `YYMMDDHHMM`.
    InvalidTimestamp(String),
    /// The F) or G) value is not a known vertical limit.
    InvalidVerticalLimit(String),
    /// The category name is unknown.
    UnknownCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedString => write!(f, "unexpected string"),
            Self::InvalidSection(c) => write!(f, "\"{c}\" is not a NOTAM section"),
            Self::InvalidCoordinate(s) => write!(f, "invalid coordinate \"{s}\""),
            Self::InvalidTimestamp(s) => write!(f, "invalid timestamp \"{s}\""),
            Self::InvalidVerticalLimit(s) => write!(f, "invalid vertical limit \"{s}\""),
            Self::UnknownCategory(s) => write!(f, "unknown category \"{s}\""),
        }
    }
}

impl error::Error for Error {}
