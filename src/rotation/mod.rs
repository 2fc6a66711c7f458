/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The rotation pipeline (component C6): frame bias, IAU 2006 precession,
//! IAU 2000A nutation, GMST/GAST/ERA, and the topocentric legs (altaz,
//! hour angle/declination).

pub mod bias;
pub mod earth_rotation;
pub mod nutation;
pub mod nutation_series;
pub mod precession;
pub mod topocentric;

pub use bias::frame_bias_matrix;
pub use earth_rotation::{earth_rotation_angle, gast, gmst};
pub use nutation::{fundamental_arguments, mean_obliquity, nutation_angles, nutation_matrix_transpose};
pub use precession::precession_matrix_inverse;
pub use topocentric::{altaz, hour_angle_dec};
