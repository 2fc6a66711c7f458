/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `find_discrete`: bisection refinement of a sampled integer-valued
//! function (spec §4.8).

use log::trace;

use super::{validate_range, SearchError};

/// A discrete-valued function's transition: the instant immediately after
/// the function's value changed (spec §3 "Event records").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteEvent {
    pub t: f64,
    pub new_value: i64,
}

/// Samples `f` at `n = ceil((end-start)/step) + 2` evenly spaced points
/// and bisects every bracket where adjacent samples differ, down to
/// `epsilon` days, emitting one [`DiscreteEvent`] per transition found
/// (spec §4.8).
pub fn find_discrete(
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
    epsilon: f64,
    f: impl Fn(f64) -> i64,
) -> Result<Vec<DiscreteEvent>, SearchError> {
    validate_range(start_jd, end_jd, step_days)?;

    let n = ((end_jd - start_jd) / step_days).ceil() as usize + 2;
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let t = start_jd + i as f64 * step_days;
        samples.push((t, f(t)));
    }

    let mut events = Vec::new();
    for window in samples.windows(2) {
        let (t_lo, v_lo) = window[0];
        let (t_hi, v_hi) = window[1];
        if v_lo == v_hi {
            continue;
        }

        let mut lo = t_lo;
        let mut hi = t_hi;
        let mut v_lo = v_lo;
        let mut v_hi = v_hi;
        while hi - lo >= epsilon {
            let mid = (lo + hi) / 2.0;
            let v_mid = f(mid);
            if v_mid == v_lo {
                lo = mid;
                v_lo = v_mid;
            } else {
                hi = mid;
                v_hi = v_mid;
            }
        }

        trace!("find_discrete: transition to {v_hi} at t={hi}");
        events.push(DiscreteEvent { t: hi, new_value: v_hi });
    }

    Ok(events)
}
