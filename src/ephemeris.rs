/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The position/velocity engine (component C5): sums chain hops into
//! barycentric vectors and iterates light-time between an observer and a
//! target (spec §4.5).

use log::debug;

use crate::chains::ChainTable;
use crate::config::EphemeraConfig;
use crate::constants::{bodies, SPEED_OF_LIGHT_KM_DAY};
use crate::math::Vector3;
use crate::naif::spk::SpkFile;
use crate::store::SegmentStore;
use crate::time::tdb_seconds_past_j2000;
use crate::NaifId;

/// A loaded SPK ephemeris: the segment store and chain table built once at
/// [`Ephemeris::open`], queried read-only afterward (spec §4.4 "State",
/// §5 concurrency model).
pub struct Ephemeris {
    store: SegmentStore,
    chains: ChainTable,
    pub crc32: u32,
    pub comments: Option<String>,
}

impl Ephemeris {
    pub fn open(path: &str) -> Result<Self, crate::errors::OpenError> {
        let spk = SpkFile::open(path)?;
        Self::from_spk(spk)
    }

    fn from_spk(spk: SpkFile) -> Result<Self, crate::errors::OpenError> {
        let store = SegmentStore::build(spk.segments);
        let chains = ChainTable::build(&store)?;
        debug!("loaded ephemeris with {} chained bodies", store.keys().count());
        Ok(Self {
            store,
            chains,
            crc32: spk.crc32,
            comments: spk.comments,
        })
    }

    /// Test-only constructor for assembling an `Ephemeris` from
    /// already-built parts, bypassing `open`/`SpkFile` parsing.
    #[cfg(test)]
    pub(crate) fn from_spk_parts(store: SegmentStore, chains: ChainTable, crc32: u32, comments: Option<String>) -> Self {
        Self { store, chains, crc32, comments }
    }

    fn chain(&self, body: NaifId) -> &[(NaifId, NaifId)] {
        self.chains
            .chain_for(body)
            .unwrap_or_else(|| panic!("body {body} is not chained to the solar system barycenter"))
    }

    pub fn body_pos_wrt_ssb(&self, body: NaifId, tdb_jd: f64) -> Vector3 {
        self.chain(body)
            .iter()
            .fold(Vector3::zeros(), |acc, &(target, center)| {
                acc + self.store.seg_position(target, center, tdb_jd)
            })
    }

    pub fn body_vel_wrt_ssb(&self, body: NaifId, tdb_jd: f64) -> Vector3 {
        self.chain(body)
            .iter()
            .fold(Vector3::zeros(), |acc, &(target, center)| {
                acc + self.store.seg_velocity(target, center, tdb_jd)
            })
    }

    pub fn geocentric_position(&self, body: NaifId, tdb_jd: f64) -> Vector3 {
        self.body_pos_wrt_ssb(body, tdb_jd) - self.body_pos_wrt_ssb(bodies::EARTH, tdb_jd)
    }

    /// Light-time-corrected position of `target` as seen from `observer`,
    /// plus the converged light-time in days (spec §4.5 "Light-time
    /// iteration"). Observer position is always evaluated at the
    /// unshifted `tdb_jd`. `config` supplies the iteration cap and
    /// convergence tolerance (spec §9 "process-wide nutation mode" design
    /// note — threaded explicitly rather than hardcoded or global).
    pub fn observe(&self, observer: NaifId, target: NaifId, tdb_jd: f64, config: &EphemeraConfig) -> (Vector3, f64) {
        let observer_pos = self.body_pos_wrt_ssb(observer, tdb_jd);
        let mut light_time = 0.0_f64;
        let mut p = self.body_pos_wrt_ssb(target, tdb_jd) - observer_pos;

        for _ in 0..config.light_time_max_iter {
            let new_lt = p.norm() / SPEED_OF_LIGHT_KM_DAY;
            if (new_lt - light_time).abs() < config.light_time_tolerance_days {
                light_time = new_lt;
                break;
            }
            light_time = new_lt;
            p = self.body_pos_wrt_ssb(target, tdb_jd - light_time) - observer_pos;
        }

        (p, light_time)
    }

    /// Light-time-corrected geocentric position of `target` (spec §4.5).
    pub fn observe_from_earth(&self, target: NaifId, tdb_jd: f64, config: &EphemeraConfig) -> Vector3 {
        self.observe(bodies::EARTH, target, tdb_jd, config).0
    }

    pub fn tdb_seconds(&self, tdb_jd: f64) -> f64 {
        tdb_seconds_past_j2000(tdb_jd)
    }
}
