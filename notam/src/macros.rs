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

/// Creates a [`Coordinate`] from latitude and longitude in decimal degrees.
///
/// The macro is usable in constant contexts, which is how the lookup tables
/// are written.
///
/// [`Coordinate`]: crate::geom::Coordinate
macro_rules! coord {
    ($latitude:expr, $longitude:expr) => {
        $crate::geom::Coordinate {
            latitude: $latitude,
            longitude: $longitude,
        }
    };
}

/// Declares a lazily compiled, process wide [`Regex`].
///
/// [`Regex`]: regex::Regex
macro_rules! static_regex {
    ($(#[$meta:meta])* $name:ident = $pattern:expr) => {
        $(#[$meta])*
        static $name: std::sync::LazyLock<regex::Regex> =
            std::sync::LazyLock::new(|| regex::Regex::new($pattern).expect("valid regex"));
    };
}
