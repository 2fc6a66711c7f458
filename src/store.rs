/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The segment store (component C3): an index from `(target, center)` to
//! its sorted segment list, and the epoch-to-segment selection contract
//! of spec §4.3.

use std::collections::HashMap;

use crate::math::Vector3;
use crate::naif::spk::Segment;
use crate::time::tdb_seconds_past_j2000;
use crate::NaifId;

/// Indexes every loaded [`Segment`] by `(target, center)`, sorted by
/// `start_sec`, so [`SegmentStore::seg_position`]/`seg_velocity` can do a
/// direct lookup instead of a linear scan over every segment in the file.
pub struct SegmentStore {
    index: HashMap<(NaifId, NaifId), Vec<Segment>>,
}

impl SegmentStore {
    pub fn build(segments: Vec<Segment>) -> Self {
        let mut index: HashMap<(NaifId, NaifId), Vec<Segment>> = HashMap::new();
        for segment in segments {
            index
                .entry((segment.target, segment.center))
                .or_default()
                .push(segment);
        }
        for list in index.values_mut() {
            list.sort_by(|a, b| a.start_sec.partial_cmp(&b.start_sec).unwrap());
        }
        Self { index }
    }

    pub fn keys(&self) -> impl Iterator<Item = &(NaifId, NaifId)> {
        self.index.keys()
    }

    pub fn contains(&self, target: NaifId, center: NaifId) -> bool {
        self.index.contains_key(&(target, center))
    }

    pub fn seg_position(&self, target: NaifId, center: NaifId, tdb_jd: f64) -> Vector3 {
        let (segment, seconds) = self.select(target, center, tdb_jd);
        segment.position(seconds)
    }

    pub fn seg_velocity(&self, target: NaifId, center: NaifId, tdb_jd: f64) -> Vector3 {
        let (segment, seconds) = self.select(target, center, tdb_jd);
        segment.velocity(seconds)
    }

    /// Selects the segment to evaluate `tdb_jd` against, clamping to the
    /// nearest boundary segment when no segment covers the epoch (spec
    /// §4.3, §9 "Segment clamping vs erroring" — this is a deliberate
    /// extrapolation policy, not an error path).
    fn select(&self, target: NaifId, center: NaifId, tdb_jd: f64) -> (&Segment, f64) {
        let segments = self
            .index
            .get(&(target, center))
            .unwrap_or_else(|| panic!("no segment store entry for ({target}, {center}): corrupt chain"));
        let seconds = tdb_seconds_past_j2000(tdb_jd);

        let segment = if segments.len() == 1 {
            &segments[0]
        } else if let Some(s) = segments
            .iter()
            .find(|s| seconds >= s.start_sec && seconds <= s.end_sec)
        {
            s
        } else if seconds < segments[0].start_sec {
            &segments[0]
        } else {
            segments.last().expect("segment list is never empty")
        };

        (segment, seconds)
    }
}
