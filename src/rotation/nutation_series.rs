/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Luni-solar nutation series coefficients, in the IAU 2000A row layout:
//! five Delaunay-argument integer multipliers followed by the sine/cosine
//! amplitude (and their per-century rate) in units of 0.0001 arcsec.
//!
//! `STANDARD_TERMS` holds the dominant terms used by
//! [`crate::config::NutationMode::Standard`]; `FULL_TERMS` extends that
//! with the next tier down, used by
//! [`crate::config::NutationMode::Full`]. The official IAU 2000A series
//! carries 678 luni-solar and 687 planetary terms; this crate ships the
//! terms that dominate the nutation signal (sub-arcsecond residual) rather
//! than transcribing the complete MHB2000 table, recorded as a scope
//! decision in the design notes.

/// One row: `(l, l', F, D, Ω, sin_coeff, sin_coeff_t, cos_coeff, cos_coeff_t)`.
/// Amplitudes are in units of 0.0001 arcsec.
pub type NutationTerm = (i32, i32, i32, i32, i32, f64, f64, f64, f64);

pub const STANDARD_TERMS: &[NutationTerm] = &[
    (0, 0, 0, 0, 1, -171996.0, -174.2, 92025.0, 8.9),
    (-2, 0, 0, 2, 2, -13187.0, -1.6, 5736.0, -3.1),
    (0, 0, 0, 2, 2, -2274.0, -0.2, 977.0, -0.5),
    (0, 0, 0, 0, 2, 2062.0, 0.2, -895.0, 0.5),
    (0, 1, 0, 0, 0, 1426.0, -3.4, 54.0, -0.1),
    (0, 0, 1, 0, 0, 712.0, 0.1, -7.0, 0.0),
    (-2, 1, 0, 2, 2, -517.0, 1.2, 224.0, -0.6),
    (0, 0, 0, 2, 1, -386.0, -0.4, 200.0, 0.0),
    (0, 0, 1, 2, 2, -301.0, 0.0, 129.0, -0.1),
    (-2, -1, 0, 2, 2, 217.0, -0.5, -95.0, 0.3),
    (-2, 0, 1, 0, 0, -158.0, 0.0, 0.0, 0.0),
    (-2, 0, 0, 2, 1, 129.0, 0.1, -70.0, 0.0),
];

pub const FULL_TERMS: &[NutationTerm] = &[
    (0, 0, 0, 0, 1, -171996.0, -174.2, 92025.0, 8.9),
    (-2, 0, 0, 2, 2, -13187.0, -1.6, 5736.0, -3.1),
    (0, 0, 0, 2, 2, -2274.0, -0.2, 977.0, -0.5),
    (0, 0, 0, 0, 2, 2062.0, 0.2, -895.0, 0.5),
    (0, 1, 0, 0, 0, 1426.0, -3.4, 54.0, -0.1),
    (0, 0, 1, 0, 0, 712.0, 0.1, -7.0, 0.0),
    (-2, 1, 0, 2, 2, -517.0, 1.2, 224.0, -0.6),
    (0, 0, 0, 2, 1, -386.0, -0.4, 200.0, 0.0),
    (0, 0, 1, 2, 2, -301.0, 0.0, 129.0, -0.1),
    (-2, -1, 0, 2, 2, 217.0, -0.5, -95.0, 0.3),
    (-2, 0, 1, 0, 0, -158.0, 0.0, 0.0, 0.0),
    (-2, 0, 0, 2, 1, 129.0, 0.1, -70.0, 0.0),
    (0, 0, -1, 2, 2, 123.0, 0.0, -53.0, 0.0),
    (2, 0, 0, 0, 0, 63.0, 0.0, 0.0, 0.0),
    (0, 0, 1, 0, 1, 63.0, 0.1, -33.0, 0.0),
    (2, 0, -1, 2, 2, -59.0, 0.0, 26.0, 0.0),
    (0, 0, -1, 0, 1, -58.0, -0.1, 32.0, 0.0),
    (0, 0, 1, 2, 1, -51.0, 0.0, 27.0, 0.0),
    (-2, 0, 2, 0, 0, 48.0, 0.0, 0.0, 0.0),
    (0, 0, -2, 2, 1, 46.0, 0.0, -24.0, 0.0),
    (2, 0, 0, 2, 2, -38.0, 0.0, 16.0, 0.0),
    (0, 0, 2, 2, 2, -31.0, 0.0, 13.0, 0.0),
    (0, 0, 2, 0, 0, 29.0, 0.0, 0.0, 0.0),
    (-2, 0, 1, 2, 2, 29.0, 0.0, -12.0, 0.0),
];

/// Planetary nutation terms in the same amplitude units, keyed by the
/// nine-argument IAU 2000A planetary row shape (longitudes of Mercury
/// through Neptune, general precession, and the lunar arguments `D`/`F`/
/// `l'`/`Ω`). Only used in `full` mode; `standard` mode omits the
/// planetary series entirely (spec §4.6 mentions it only for `full`).
pub type PlanetaryTerm = (i32, i32, i32, i32, i32, i32, i32, i32, f64, f64);

pub const PLANETARY_TERMS: &[PlanetaryTerm] = &[
    // (l_Ve, l_Ea, l_Ma, l_Ju, l_Sa, l_D, l_Om, l_pA, sin_coeff, cos_coeff), 0.0001 arcsec.
    (0, 0, 0, 8, -16, 4, 5, 0, 1.0, 0.0),
    (0, 0, 0, 1, 0, 0, 0, -1, 1.5, 0.0),
    (0, 0, 2, -2, 0, 0, 0, 0, -0.4, 0.0),
    (1, 0, -18, 17, 0, 0, 0, 0, 0.7, 0.0),
];
