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

//! Spatial index for location queries over enriched NOTAMs.

use geo::Point;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};

use crate::geom::{degree_envelope, Coordinate};
use crate::{nm_to_km, Notam};

/// R-tree over the bounding boxes of NOTAM geometries.
///
/// The tree filters candidates, which are checked precisely against their
/// geometry afterwards. NOTAMs without geometry are kept but never found by
/// a location query.
#[derive(Clone, Debug, Default)]
pub struct NotamIndex {
    notams: Vec<Notam>,
    tree: RTree<GeomWithData<Rectangle<Point<f64>>, usize>>,
}

impl NotamIndex {
    pub fn new(notams: Vec<Notam>) -> Self {
        let entries = notams
            .iter()
            .enumerate()
            .filter_map(|(i, notam)| {
                let envelope = notam.geometry.as_ref()?.envelope()?;
                let rect = Rectangle::from_corners(Point::from(envelope.min()), Point::from(envelope.max()));
                Some(GeomWithData::new(rect, i))
            })
            .collect();

        Self {
            notams,
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.notams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notam> {
        self.notams.iter()
    }

    pub fn into_inner(self) -> Vec<Notam> {
        self.notams
    }

    /// Returns the NOTAMs whose geometry contains the point.
    pub fn at(&self, coord: &Coordinate) -> impl Iterator<Item = &Notam> + '_ {
        let point = *coord;
        let envelope = AABB::from_point(Point::from(point));

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| &self.notams[entry.data])
            .filter(move |notam| notam.affects(&point))
    }

    /// Returns the NOTAMs whose geometry is within the radius of the point.
    ///
    /// The radius is converted to an approximate degree-based bounding box
    /// for the R-tree query. Results are then filtered by the actual
    /// geodesic distance.
    pub fn within_radius(
        &self,
        coord: &Coordinate,
        radius_nm: f64,
    ) -> impl Iterator<Item = &Notam> + '_ {
        let rect = degree_envelope(coord, radius_nm);
        let envelope = AABB::from_corners(Point::from(rect.min()), Point::from(rect.max()));

        let center = *coord;
        let radius_km = nm_to_km(radius_nm);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| &self.notams[entry.data])
            .filter(move |notam| {
                notam
                    .geometry
                    .as_ref()
                    .and_then(|g| g.distance_km(&center))
                    .is_some_and(|d| d <= radius_km)
            })
    }
}

impl FromIterator<Notam> for NotamIndex {
    fn from_iter<T: IntoIterator<Item = Notam>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{RawNotam, Resolver};

    fn notam(id: &str, e_text: &str) -> Notam {
        let raw = RawNotam {
            id: Some(id.to_string()),
            e_text: Some(e_text.to_string()),
            ..Default::default()
        };
        Notam::enrich(raw, Utc::now(), &Resolver::default())
    }

    fn ids<'a>(notams: impl Iterator<Item = &'a Notam>) -> Vec<&'a str> {
        let mut ids: Vec<&str> = notams.filter_map(Notam::id).collect();
        ids.sort();
        ids
    }

    fn index() -> NotamIndex {
        //  37.6  +--------+
        //        |  AREA  |        CRANE (37.55, 127.3)
        //  37.5  +--------+
        //      126.7    126.8
        //
        //  35.0                    LIGHT (35.0, 129.0)
        NotamIndex::new(vec![
            notam(
                "AREA",
                "373000N1264200E 373000N1264800E 373600N1264800E 373600N1264200E",
            ),
            notam("CRANE", "CRANE PSN 373300N1271800E RADIUS 1NM"),
            notam("LIGHT", "OBST LGT U/S 350000N1290000E"),
            notam("NONE", "NO GEOMETRY"),
        ])
    }

    #[test]
    fn finds_notams_at_point() {
        let index = index();
        assert_eq!(index.len(), 4);

        assert_eq!(ids(index.at(&coord!(37.55, 126.75))), vec!["AREA"]);
        assert_eq!(ids(index.at(&coord!(37.55, 127.3))), vec!["CRANE"]);
        assert!(ids(index.at(&coord!(36.0, 128.0))).is_empty());
    }

    #[test]
    fn finds_notams_within_radius() {
        let index = index();
        let center = coord!(37.55, 127.0);

        // AREA is about 10 NM west and CRANE 14 NM east of the center
        assert!(ids(index.within_radius(&center, 5.0)).is_empty());
        assert_eq!(ids(index.within_radius(&center, 11.0)), vec!["AREA"]);
        assert_eq!(ids(index.within_radius(&center, 20.0)), vec!["AREA", "CRANE"]);
        assert_eq!(
            ids(index.within_radius(&center, 200.0)),
            vec!["AREA", "CRANE", "LIGHT"]
        );
    }

    #[test]
    fn collects_into_index() {
        let index: NotamIndex = ["ONE 350000N1290000E", "TWO", "THREE 370000N1270000E"]
            .iter()
            .enumerate()
            .map(|(i, text)| notam(&i.to_string(), text))
            .collect();

        assert_eq!(index.len(), 3);
        assert_eq!(ids(index.iter()), vec!["0", "1", "2"]);
        assert_eq!(ids(index.at(&coord!(37.0, 127.0))), vec!["2"]);

        let notams = index.into_inner();
        assert_eq!(notams.len(), 3);
        assert_eq!(notams[1].id(), Some("1"));
        assert!(notams[1].geometry.is_none());
    }
}
