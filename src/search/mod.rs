/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The generic event-search kernel (component C8): bisection refinement
//! of a sampled discrete-valued function, and golden-section refinement
//! of a sampled continuous function (spec §4.8).

pub mod discrete;
pub mod extrema;

use snafu::prelude::*;

pub use discrete::{find_discrete, DiscreteEvent};
pub use extrema::{find_maxima, find_minima, Extremum};

/// Default bisection tolerance for [`find_discrete`]: one millisecond
/// expressed in days.
pub const DEFAULT_DISCRETE_EPSILON_DAYS: f64 = 0.001 / 86_400.0;

/// Default golden-section tolerance for [`find_maxima`]/[`find_minima`]:
/// one second expressed in days.
pub const DEFAULT_EXTREMUM_EPSILON_DAYS: f64 = 1.0 / 86_400.0;

/// Search-kernel precondition violations (spec §4.8 "Failure"), the one
/// recoverable-at-query-time error kind in this crate.
#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum SearchError {
    #[snafu(display("invalid search range: start_jd ({start_jd}) must be < end_jd ({end_jd})"))]
    InvalidRange { start_jd: f64, end_jd: f64 },

    #[snafu(display("invalid step: step_days ({step_days}) must be > 0"))]
    InvalidStep { step_days: f64 },
}

pub(crate) fn validate_range(start_jd: f64, end_jd: f64, step_days: f64) -> Result<(), SearchError> {
    ensure!(step_days > 0.0, InvalidStepSnafu { step_days });
    ensure!(start_jd < end_jd, InvalidRangeSnafu { start_jd, end_jd });
    Ok(())
}
