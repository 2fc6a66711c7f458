/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Small math building blocks: Chebyshev evaluation (C1) and the
//! elementary-rotation helpers the rotation pipeline (C6) composes.

pub mod chebyshev;
pub mod rotation;

/// A position, velocity, or generic three-vector in kilometres (or km/day).
pub type Vector3 = nalgebra::Vector3<f64>;
/// A 3x3 direction-cosine matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;
