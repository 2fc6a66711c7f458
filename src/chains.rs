/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Builds the target→solar-system-barycenter hop chains (component C4)
//! that [`crate::ephemeris::Ephemeris`] sums over for every position and
//! velocity query (spec §4.4).

use std::collections::{HashMap, HashSet};

use crate::errors::OpenError;
use crate::store::SegmentStore;
use crate::NaifId;

/// `body → [(hop_target, hop_center), ...]` from `body` down to the solar
/// system barycenter (`center == 0` on the final hop). Built once at
/// [`crate::ephemeris::Ephemeris::open`] and consulted read-only after
/// that (spec §4.4 "State").
pub struct ChainTable {
    chains: HashMap<NaifId, Vec<(NaifId, NaifId)>>,
}

impl ChainTable {
    pub fn build(store: &SegmentStore) -> Result<Self, OpenError> {
        let mut target_to_center: HashMap<NaifId, NaifId> = HashMap::new();
        for &(target, center) in store.keys() {
            target_to_center.entry(target).or_insert(center);
        }

        let mut chains: HashMap<NaifId, Vec<(NaifId, NaifId)>> = HashMap::new();
        let targets: Vec<NaifId> = target_to_center.keys().copied().collect();

        for body in targets {
            if chains.contains_key(&body) {
                continue;
            }

            let mut path = Vec::new();
            let mut visited = HashSet::new();
            let mut current = body;
            loop {
                if !visited.insert(current) {
                    return Err(OpenError::ChainCycle { body });
                }
                let center = *target_to_center
                    .get(&current)
                    .ok_or(OpenError::ChainBroken { body: current })?;
                path.push((current, center));
                if center == 0 {
                    break;
                }
                current = center;
            }

            // Register the suffix chain for every intermediate body: it
            // shares the remaining tail of this walk (spec §4.4).
            for i in 0..path.len() {
                let intermediate = path[i].0;
                chains.entry(intermediate).or_insert_with(|| path[i..].to_vec());
            }
        }

        Ok(Self { chains })
    }

    /// The hop chain from `body` to the solar system barycenter, or
    /// `None` if `body` was never indexed (fatal at the query boundary
    /// per spec §4.4 "Failure").
    pub fn chain_for(&self, body: NaifId) -> Option<&[(NaifId, NaifId)]> {
        if body == 0 {
            return Some(&[]);
        }
        self.chains.get(&body).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naif::spk::{DataType, Segment};

    fn direct_segment(target: NaifId, center: NaifId) -> Segment {
        Segment::new(
            target,
            center,
            DataType::PositionOnly,
            -1.0,
            1.0,
            -1.0,
            2.0,
            5.0,
            1.0,
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
        )
    }

    #[test]
    fn simple_two_hop_chain_to_ssb() {
        // 399 (Earth) -> 3 (Earth barycenter) -> 0 (SSB).
        let store = SegmentStore::build(vec![direct_segment(399, 3), direct_segment(3, 0)]);
        let chains = ChainTable::build(&store).unwrap();
        assert_eq!(chains.chain_for(399).unwrap(), &[(399, 3), (3, 0)]);
        // Suffix chain registered for the intermediate body too.
        assert_eq!(chains.chain_for(3).unwrap(), &[(3, 0)]);
    }

    #[test]
    fn ssb_has_empty_chain() {
        let store = SegmentStore::build(vec![direct_segment(399, 3), direct_segment(3, 0)]);
        let chains = ChainTable::build(&store).unwrap();
        assert_eq!(chains.chain_for(0).unwrap(), &[] as &[(NaifId, NaifId)]);
    }

    #[test]
    fn cycle_is_detected() {
        let store = SegmentStore::build(vec![direct_segment(10, 20), direct_segment(20, 10)]);
        let err = ChainTable::build(&store).unwrap_err();
        assert!(matches!(err, OpenError::ChainCycle { .. }));
    }

    #[test]
    fn broken_intermediate_is_detected() {
        // 501 points at center 499, but 499 has no segment of its own.
        let store = SegmentStore::build(vec![direct_segment(501, 499)]);
        let err = ChainTable::build(&store).unwrap_err();
        assert!(matches!(err, OpenError::ChainBroken { body: 499 }));
    }
}
