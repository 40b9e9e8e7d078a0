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

//! Lookup tables for the fallback tiers of the coordinate resolution.
//!
//! The built-in tables cover the FIRs and aerodromes of the regions the
//! decoder was first used for. Use a [`TablesBuilder`] to resolve NOTAMs
//! of other regions.

use std::collections::HashMap;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;

/// Approximate center of a Flight Information Region.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FirCenter {
    pub ident: String,
    pub name: String,
    pub coordinate: Coordinate,
}

/// Reference point of an aerodrome.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aerodrome {
    pub ident: String,
    pub coordinate: Coordinate,
}

/// FIR centers and aerodrome locations keyed by their ICAO identifier.
#[derive(Clone, Default, Debug)]
pub struct Tables {
    firs: HashMap<String, FirCenter>,
    aerodromes: HashMap<String, Aerodrome>,
}

impl Tables {
    pub fn builder() -> TablesBuilder {
        TablesBuilder::new()
    }

    /// Returns the built-in tables.
    pub fn builtin() -> &'static Tables {
        &BUILTIN
    }

    /// Returns the FIR with the identifier.
    pub fn fir(&self, ident: &str) -> Option<&FirCenter> {
        self.firs.get(&ident.trim().to_uppercase())
    }

    /// Returns the aerodrome with the location indicator.
    pub fn aerodrome(&self, ident: &str) -> Option<&Aerodrome> {
        self.aerodromes.get(&ident.trim().to_uppercase())
    }

    pub fn firs(&self) -> impl Iterator<Item = &FirCenter> {
        self.firs.values()
    }

    pub fn aerodromes(&self) -> impl Iterator<Item = &Aerodrome> {
        self.aerodromes.values()
    }
}

/// Factory of [`Tables`].
///
/// Entries added later replace entries with the same identifier.
#[derive(Clone, Default, Debug)]
pub struct TablesBuilder {
    firs: HashMap<String, FirCenter>,
    aerodromes: HashMap<String, Aerodrome>,
}

impl TablesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the built-in tables.
    pub fn with_builtin() -> Self {
        let builtin = Tables::builtin();
        Self {
            firs: builtin.firs.clone(),
            aerodromes: builtin.aerodromes.clone(),
        }
    }

    pub fn add_fir(&mut self, ident: &str, name: &str, coordinate: Coordinate) -> &mut Self {
        let ident = ident.trim().to_uppercase();
        self.firs.insert(
            ident.clone(),
            FirCenter {
                ident,
                name: name.to_string(),
                coordinate,
            },
        );
        self
    }

    pub fn add_aerodrome(&mut self, ident: &str, coordinate: Coordinate) -> &mut Self {
        let ident = ident.trim().to_uppercase();
        self.aerodromes
            .insert(ident.clone(), Aerodrome { ident, coordinate });
        self
    }

    pub fn build(self) -> Tables {
        Tables {
            firs: self.firs,
            aerodromes: self.aerodromes,
        }
    }
}

const FIRS: [(&str, &str, Coordinate); 18] = [
    ("RKRR", "Incheon FIR", coord!(37.5, 127.0)),
    ("RJJJ", "Tokyo FIR", coord!(35.7, 139.7)),
    ("RJTG", "Tokyo FIR", coord!(35.7, 139.7)),
    ("PAZA", "Anchorage FIR", coord!(64.8, -147.7)),
    ("KZAK", "Oakland Oceanic FIR", coord!(21.3, -157.9)),
    ("KZWY", "New York Oceanic FIR", coord!(40.6, -73.8)),
    ("KZAB", "Albuquerque FIR", coord!(33.4, -112.0)),
    ("KZDC", "Washington FIR", coord!(38.9, -77.0)),
    ("KZLA", "Los Angeles FIR", coord!(34.0, -118.2)),
    ("KZNY", "New York FIR", coord!(40.7, -74.0)),
    ("ZBPE", "Beijing FIR", coord!(39.9, 116.4)),
    ("ZSHA", "Shanghai FIR", coord!(31.2, 121.5)),
    ("ZGZU", "Guangzhou FIR", coord!(23.1, 113.3)),
    ("ZYSH", "Shenyang FIR", coord!(45.8, 126.5)),
    ("YBBB", "Brisbane FIR", coord!(-27.5, 153.0)),
    ("YMMM", "Melbourne FIR", coord!(-37.8, 144.9)),
    ("MMFR", "Mexico FIR", coord!(19.4, -99.1)),
    ("SEQM", "Quito FIR", coord!(-0.2, -78.5)),
];

const AERODROMES: [(&str, Coordinate); 28] = [
    // Korea
    ("RKSI", coord!(37.4691, 126.4505)),
    ("RKSS", coord!(37.5583, 126.7906)),
    ("RKPK", coord!(35.1795, 128.9382)),
    ("RKPC", coord!(33.5067, 126.4926)),
    ("RKJJ", coord!(35.1261, 126.8089)),
    ("RKTU", coord!(36.7167, 127.4986)),
    ("RKTN", coord!(35.8941, 128.6589)),
    ("RKNY", coord!(37.7529, 128.9445)),
    ("RKNW", coord!(37.4412, 126.6897)),
    ("RKPU", coord!(35.9879, 129.4206)),
    ("RKPS", coord!(34.8424, 128.0700)),
    ("RKJB", coord!(34.9914, 126.3828)),
    ("RKJY", coord!(35.4931, 127.1174)),
    // Japan
    ("RJTT", coord!(35.5533, 139.7811)),
    ("RJAA", coord!(35.7647, 140.3864)),
    ("RJBB", coord!(34.4347, 135.2441)),
    ("RJCC", coord!(42.7752, 141.6924)),
    ("RJFF", coord!(33.5859, 130.4511)),
    // United States
    ("KJFK", coord!(40.6413, -73.7781)),
    ("KLAX", coord!(33.9425, -118.4081)),
    ("KORD", coord!(41.9742, -87.9073)),
    ("KSFO", coord!(37.6213, -122.3790)),
    ("KEWR", coord!(40.6895, -74.1745)),
    ("PAFA", coord!(64.8151, -147.8561)),
    ("PANC", coord!(61.1744, -149.9964)),
    // China
    ("ZBAA", coord!(40.0799, 116.6031)),
    ("ZSPD", coord!(31.1434, 121.8052)),
    ("ZGGG", coord!(23.3924, 113.2988)),
];

static BUILTIN: LazyLock<Tables> = LazyLock::new(|| {
    let mut builder = TablesBuilder::new();

    FIRS.iter().for_each(|(ident, name, coordinate)| {
        builder.add_fir(ident, name, *coordinate);
    });

    AERODROMES.iter().for_each(|(ident, coordinate)| {
        builder.add_aerodrome(ident, *coordinate);
    });

    builder.build()
});
