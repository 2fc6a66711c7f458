/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A parsed SPK segment: one (target, center) pair's coefficient records
//! over `[start_sec, end_sec]`, and the Chebyshev evaluation that turns a
//! query epoch into a position (and, for type 3, velocity) vector
//! (spec §3, §4.3).

use crate::math::chebyshev;
use crate::math::Vector3;
use crate::NaifId;

/// The two segment shapes spec §3/§6 accept. Each variant owns the
/// coefficient-count invariant its record layout requires, rather than a
/// single struct switching on a raw integer tag (spec §9 design note).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Position-only Chebyshev records (`rsize == 2 + 3*n_coeffs`).
    PositionOnly,
    /// Position+velocity Chebyshev records (`rsize == 2 + 6*n_coeffs`,
    /// velocity coefficients stored in km/s).
    PositionVelocity,
}

impl DataType {
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            2 => Some(Self::PositionOnly),
            3 => Some(Self::PositionVelocity),
            _ => None,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::PositionOnly => 2,
            Self::PositionVelocity => 3,
        }
    }
}

/// One loaded SPK segment. Owns its coefficient block for the lifetime of
/// the loaded ephemeris (spec §3).
#[derive(Debug, Clone)]
pub struct Segment {
    pub target: NaifId,
    pub center: NaifId,
    pub data_type: DataType,
    pub start_sec: f64,
    pub end_sec: f64,
    pub init: f64,
    pub int_len: f64,
    pub rsize: usize,
    pub n: usize,
    pub n_coeffs: usize,
    /// `n * rsize` doubles: for each record, two descriptive doubles
    /// (unused) followed by the position (and, for type 3, velocity)
    /// coefficient vectors.
    pub data: Vec<f64>,
}

impl Segment {
    /// Builds a segment from the `n*rsize` coefficient doubles plus the
    /// trailing `(init, int_len, rsize, n)` quartet, per spec §3.
    pub fn new(
        target: NaifId,
        center: NaifId,
        data_type: DataType,
        start_sec: f64,
        end_sec: f64,
        init: f64,
        int_len: f64,
        rsize: f64,
        n: f64,
        data: Vec<f64>,
    ) -> Self {
        let rsize = rsize.round() as usize;
        let n = n.round() as usize;
        let n_coeffs = match data_type {
            DataType::PositionOnly => (rsize - 2) / 3,
            DataType::PositionVelocity => (rsize - 2) / 6,
        };
        Self {
            target,
            center,
            data_type,
            start_sec,
            end_sec,
            init,
            int_len,
            rsize,
            n,
            n_coeffs,
            data,
        }
    }

    /// Record index and normalized Chebyshev time `tc` for `seconds`
    /// (TDB seconds past J2000). `idx` is clamped to `[0, n-1]`; `tc` may
    /// lie outside `[-1, 1]` for a clamped, out-of-range epoch — this is
    /// accepted extrapolation, not an error (spec §4.3).
    fn locate(&self, seconds: f64) -> (usize, f64) {
        let raw_idx = ((seconds - self.init) / self.int_len).floor();
        let idx = raw_idx.clamp(0.0, (self.n - 1) as f64) as usize;
        let tc = 2.0 * (seconds - self.init - idx as f64 * self.int_len) / self.int_len - 1.0;
        (idx, tc)
    }

    fn record(&self, idx: usize) -> &[f64] {
        &self.data[idx * self.rsize..(idx + 1) * self.rsize]
    }

    /// Coefficient vector for component `component` (0=X,1=Y,2=Z and, for
    /// type 3, 3=Vx,4=Vy,5=Vz) of record `idx`.
    fn coeffs<'a>(&self, record: &'a [f64], component: usize) -> &'a [f64] {
        let start = 2 + component * self.n_coeffs;
        &record[start..start + self.n_coeffs]
    }

    pub fn position(&self, seconds: f64) -> Vector3 {
        let (idx, tc) = self.locate(seconds);
        let record = self.record(idx);
        Vector3::new(
            chebyshev::eval(self.coeffs(record, 0), tc),
            chebyshev::eval(self.coeffs(record, 1), tc),
            chebyshev::eval(self.coeffs(record, 2), tc),
        )
    }

    /// Velocity in km/day (spec §4.3 "Velocity semantics").
    pub fn velocity(&self, seconds: f64) -> Vector3 {
        let (idx, tc) = self.locate(seconds);
        let record = self.record(idx);
        match self.data_type {
            DataType::PositionOnly => {
                // Analytic derivative of the position series; chain rule
                // through the [-1,1] <-> seconds mapping yields a factor
                // of (2*86400)/int_len to land in km/day.
                let unit_factor = (2.0 * 86_400.0) / self.int_len;
                Vector3::new(
                    chebyshev::eval_derivative(self.coeffs(record, 0), tc) * unit_factor,
                    chebyshev::eval_derivative(self.coeffs(record, 1), tc) * unit_factor,
                    chebyshev::eval_derivative(self.coeffs(record, 2), tc) * unit_factor,
                )
            }
            DataType::PositionVelocity => {
                // Stored velocity coefficients are in km/s; convert to km/day.
                Vector3::new(
                    chebyshev::eval(self.coeffs(record, 3), tc) * 86_400.0,
                    chebyshev::eval(self.coeffs(record, 4), tc) * 86_400.0,
                    chebyshev::eval(self.coeffs(record, 5), tc) * 86_400.0,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_record_position_segment() -> Segment {
        // One record, n_coeffs=2 per axis: X = [1,0], Y = [0,1], Z = [2,0]
        // (i.e. X constant 1, Y = T1(s) = s, Z constant 2), spanning one
        // day centered at t=0.
        let rsize = 2 + 3 * 2;
        let mut data = vec![0.0; rsize];
        data[2] = 1.0; // X c0
        data[3] = 0.0; // X c1
        data[4] = 0.0; // Y c0
        data[5] = 1.0; // Y c1
        data[6] = 2.0; // Z c0
        data[7] = 0.0; // Z c1
        Segment::new(
            199,
            1,
            DataType::PositionOnly,
            -43_200.0,
            43_200.0,
            0.0,
            86_400.0,
            rsize as f64,
            1.0,
            data,
        )
    }

    #[test]
    fn position_at_record_center() {
        let seg = single_record_position_segment();
        let p = seg.position(0.0);
        assert_eq!(p, Vector3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn velocity_is_derivative_in_km_per_day() {
        let seg = single_record_position_segment();
        // d/ds Y = d/ds T1(s) = 1; unit factor = (2*86400)/86400 = 2.
        let v = seg.velocity(0.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn out_of_range_epoch_clamps_instead_of_erroring() {
        let seg = single_record_position_segment();
        // Far outside [start_sec, end_sec]; locate() must still clamp idx.
        let p = seg.position(10_000_000.0);
        assert_eq!(p.x, 1.0);
    }
}
