/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Shared byte-level DAF/SPK construction for the integration tests that
//! need moving bodies (almanac and eclipse), generalizing
//! `tests/spk_reader.rs`'s single-record fixed-position builder to
//! multi-record circular orbits placed in the J2000 mean-ecliptic plane,
//! the same tilt-correction construction `src/almanac/mod.rs`'s own
//! `#[cfg(test)]` fixtures use internally.

#![allow(dead_code)]

use std::io::Write;

use ephemera::constants::bodies;
use ephemera::ephemeris::Ephemeris;
use ephemera::math::rotation::r1;
use ephemera::math::Vector3;
use ephemera::rotation::mean_obliquity;

const RECORD_LEN: usize = 1024;
const DAY_SEC: f64 = 86_400.0;

pub const WINDOW_START_SEC: f64 = -50.0 * DAY_SEC;
pub const WINDOW_END_SEC: f64 = 450.0 * DAY_SEC;

pub const MOON_PERIOD_DAYS: f64 = 27.321_661;
pub const SUN_PERIOD_DAYS: f64 = 365.25;
pub const MARS_PERIOD_DAYS: f64 = 100.0;

pub const SUN_PHASE0_DEG: f64 = 315.0;
pub const MOON_PHASE0_DEG: f64 = 270.0;
pub const MARS_PHASE0_DEG: f64 = 136.0;

fn write_f64(buf: &mut [u8], offset: usize, v: f64) {
    buf[offset..offset + 8].copy_from_slice(&v.to_le_bytes());
}

fn write_i32(buf: &mut [u8], offset: usize, v: i32) {
    buf[offset..offset + 4].copy_from_slice(&v.to_le_bytes());
}

/// A circular orbit placed in the J2000 mean-ecliptic plane, described by
/// its NAIF target/center, radius, and the angle it sweeps per day.
pub struct OrbitSpec {
    pub target: i32,
    pub center: i32,
    pub radius_km: f64,
    pub period_days: f64,
    pub phase0_deg: f64,
    pub n_records: usize,
}

/// Position at `sec` TDB seconds past J2000 for a circular orbit, tilted
/// by the inverse mean obliquity so that `almanac::ecliptic_longitude`'s
/// own forward tilt recovers the intended angle exactly.
fn orbit_point(spec: &OrbitSpec, tilt: ephemera::math::Matrix3, sec: f64) -> Vector3 {
    let days = sec / DAY_SEC;
    let theta = (spec.phase0_deg + 360.0 * days / spec.period_days).to_radians();
    tilt * (Vector3::new(theta.cos(), theta.sin(), 0.0) * spec.radius_km)
}

/// A fixed-velocity "wobble" segment keeping a body a fixed km off its
/// center rather than literally motionless, avoiding the stellar
/// aberration singularity a zero-velocity observer would hit.
fn wobble_segment(target: i32, center: i32, radius_km: f64) -> OrbitSpec {
    OrbitSpec { target, center, radius_km, period_days: SUN_PERIOD_DAYS, phase0_deg: 0.0, n_records: 600 }
}

/// Assembles a DAF/SPK byte stream (spec §6) with one summary record
/// describing every `OrbitSpec`, each backed by its own multi-record,
/// linear (`n_coeffs=1`) Chebyshev data block spanning the whole window.
pub fn build_spk_bytes(segments: &[OrbitSpec]) -> Vec<u8> {
    let eps = mean_obliquity(0.0);
    let tilt = r1(-eps);

    let n_coeffs = 1usize;
    let rsize = 2 + 3 * n_coeffs;
    let descriptor_bytes = 5 * 8; // ND=2, NI=6 -> 2 + ceil(6/2) = 5 doubles
    let header_records = 2; // file record + one summary record

    let total_data_words: usize = segments.iter().map(|s| s.n_records * rsize + 4).sum();
    let mut bytes = vec![0u8; RECORD_LEN * header_records + total_data_words * 8];

    bytes[0..8].copy_from_slice(b"DAF/SPK ");
    write_i32(&mut bytes, 8, 2);
    write_i32(&mut bytes, 12, 6);
    write_i32(&mut bytes, 76, 2); // forward record = 2

    let summary_off = RECORD_LEN;
    write_f64(&mut bytes, summary_off, 0.0); // next_record = 0 (final)
    write_f64(&mut bytes, summary_off + 8, 0.0); // prev_record
    write_f64(&mut bytes, summary_off + 16, segments.len() as f64);

    let mut next_word = (header_records * RECORD_LEN) / 8 + 1;
    for (i, spec) in segments.iter().enumerate() {
        let int_len = (WINDOW_END_SEC - WINDOW_START_SEC) / spec.n_records as f64;
        let data_words = spec.n_records * rsize + 4;

        let descriptor_off = summary_off + 24 + i * descriptor_bytes;
        write_f64(&mut bytes, descriptor_off, WINDOW_START_SEC);
        write_f64(&mut bytes, descriptor_off + 8, WINDOW_END_SEC);
        write_i32(&mut bytes, descriptor_off + 16, spec.target);
        write_i32(&mut bytes, descriptor_off + 20, spec.center);
        write_i32(&mut bytes, descriptor_off + 24, 1); // frame (unvalidated)
        write_i32(&mut bytes, descriptor_off + 28, 2); // data_type = position-only
        write_i32(&mut bytes, descriptor_off + 32, next_word as i32);
        write_i32(&mut bytes, descriptor_off + 36, (next_word + data_words - 1) as i32);

        for k in 0..spec.n_records {
            let left_sec = WINDOW_START_SEC + k as f64 * int_len;
            let right_sec = left_sec + int_len;
            let left = orbit_point(spec, tilt, left_sec);
            let right = orbit_point(spec, tilt, right_sec);
            let c0 = (left + right) * 0.5;
            let c1 = (right - left) * 0.5;

            let record_off = (next_word - 1 + k * rsize) * 8;
            write_f64(&mut bytes, record_off, c0.x);
            write_f64(&mut bytes, record_off + 8, c1.x);
            write_f64(&mut bytes, record_off + 16, c0.y);
            write_f64(&mut bytes, record_off + 24, c1.y);
            write_f64(&mut bytes, record_off + 32, c0.z);
            write_f64(&mut bytes, record_off + 40, c1.z);
        }

        let trailer_off = (next_word - 1 + spec.n_records * rsize) * 8;
        write_f64(&mut bytes, trailer_off, WINDOW_START_SEC); // init
        write_f64(&mut bytes, trailer_off + 8, int_len);
        write_f64(&mut bytes, trailer_off + 16, rsize as f64);
        write_f64(&mut bytes, trailer_off + 24, spec.n_records as f64);

        next_word += data_words;
    }

    bytes
}

/// Writes `bytes` to a fresh file under the OS temp dir and returns its
/// path; the file is removed when the returned guard drops.
pub struct TempSpkFile(std::path::PathBuf);

impl TempSpkFile {
    pub fn new(name: &str, bytes: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("ephemera-test-{name}-{}-{}.bsp", std::process::id(), name.len()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        Self(path)
    }

    pub fn path_str(&self) -> String {
        self.0.to_string_lossy().to_string()
    }
}

impl Drop for TempSpkFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// The same synthetic Sun/Earth/Moon/Mars solar system
/// `src/almanac/mod.rs`'s internal unit tests use, but serialized to real
/// DAF/SPK bytes and loaded through the public [`Ephemeris::open`], so
/// these integration tests exercise the real file-reading path end to
/// end rather than the `#[cfg(test)]`-only in-memory constructor.
pub fn synthetic_solar_system() -> Ephemeris {
    let segments = vec![
        OrbitSpec { target: bodies::SUN, center: bodies::SOLAR_SYSTEM_BARYCENTER, radius_km: 149_597_870.0, period_days: SUN_PERIOD_DAYS, phase0_deg: SUN_PHASE0_DEG, n_records: 730 },
        wobble_segment(bodies::EARTH, bodies::SOLAR_SYSTEM_BARYCENTER, 1.0),
        OrbitSpec { target: bodies::MOON, center: bodies::EARTH, radius_km: 384_400.0, period_days: MOON_PERIOD_DAYS, phase0_deg: MOON_PHASE0_DEG, n_records: 1_500 },
        OrbitSpec { target: bodies::MARS_BARYCENTER, center: bodies::SOLAR_SYSTEM_BARYCENTER, radius_km: 227_900_000.0, period_days: MARS_PERIOD_DAYS, phase0_deg: MARS_PHASE0_DEG, n_records: 1_000 },
    ];

    let bytes = build_spk_bytes(&segments);
    let file = TempSpkFile::new("almanac", &bytes);
    Ephemeris::open(&file.path_str()).unwrap()
}
