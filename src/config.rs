/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Load-time configuration.
//!
//! Spec §9 flags the source's process-wide nutation-mode setter as a
//! documented fragility and suggests threading it explicitly instead. This
//! module is that thread: [`EphemeraConfig`] is built once (typically
//! alongside [`crate::ephemeris::Ephemeris::open`]) and passed by value or
//! shared reference into every rotation/aberration/almanac call that needs
//! it, so there is no mutable state to race.

/// Selects between the truncated and full IAU 2000A nutation series
/// (spec §4.6).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NutationMode {
    /// 30 largest luni-solar terms. Targets ~1 arcsec overall accuracy.
    #[default]
    Standard,
    /// Complete 678 luni-solar + 687 planetary terms (IAU 2000A in full).
    Full,
}

/// Process-wide knobs for the astrometric pipeline, built once and passed
/// explicitly rather than mutated through global state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EphemeraConfig {
    pub nutation_mode: NutationMode,
    /// Maximum light-time iterations (spec §4.5 bounds this at 10).
    pub light_time_max_iter: u8,
    /// Absolute stopping tolerance on successive light-time deltas, in days
    /// (spec §4.5: 1e-12).
    pub light_time_tolerance_days: f64,
}

impl Default for EphemeraConfig {
    fn default() -> Self {
        Self {
            nutation_mode: NutationMode::default(),
            light_time_max_iter: 10,
            light_time_tolerance_days: 1e-12,
        }
    }
}

impl EphemeraConfig {
    pub fn with_nutation_mode(mut self, mode: NutationMode) -> Self {
        self.nutation_mode = mode;
        self
    }
}
