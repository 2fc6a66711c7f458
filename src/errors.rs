/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Error types shared across subsystems.
//!
//! Per spec §7: failures that can occur while loading a kernel (bad magic,
//! unsupported segment type, I/O, a broken or cyclic body chain) are
//! returned from [`crate::ephemeris::Ephemeris::open`] as [`OpenError`].
//! Failures that can only occur if `open` already succeeded but the caller
//! queries a body/segment that was never chained are programming errors:
//! the spec calls for them to "surface as fatal panics/aborts with a
//! descriptive message", so they are not modeled as `Result` at the query
//! API (see [`crate::ephemeris::Ephemeris::body_pos_wrt_ssb`]).
//! Search-kernel precondition violations (spec §4.8) are the one
//! recoverable-at-query-time error kind, [`crate::search::SearchError`].

use snafu::prelude::*;
use std::io;

use crate::NaifId;

/// Failures that can occur while parsing an SPK/DAF file or building the
/// body→SSB chain table at load time. All are fatal to
/// [`crate::ephemeris::Ephemeris::open`] (spec §7).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum OpenError {
    #[snafu(display("not an SPK file: expected magic `DAF/SPK `, got {found:?}"))]
    FileMagicMismatch { found: [u8; 8] },

    #[snafu(display(
        "unsupported SPK segment type {data_type} for target {target} / center {center}: \
         only position-Chebyshev (2) and position+velocity-Chebyshev (3) are accepted"
    ))]
    UnsupportedSegmentType {
        data_type: i32,
        target: NaifId,
        center: NaifId,
    },

    #[snafu(display("I/O error while {action}: {source}"))]
    Io { action: String, source: io::Error },

    #[snafu(display(
        "cycle detected while building the chain to the solar system barycenter for body {body}"
    ))]
    ChainCycle { body: NaifId },

    #[snafu(display(
        "body {body} is referenced as an intermediate center but has no segment of its own"
    ))]
    ChainBroken { body: NaifId },
}

/// Top-level error aggregate, used where a caller wants to handle every
/// fallible entry point of the crate uniformly (the CLI, mainly).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EphemeraError {
    #[snafu(display("{source}"))]
    Open { source: OpenError },
    #[snafu(display("{source}"))]
    Search { source: crate::search::SearchError },
}

impl From<OpenError> for EphemeraError {
    fn from(source: OpenError) -> Self {
        Self::Open { source }
    }
}

impl From<crate::search::SearchError> for EphemeraError {
    fn from(source: crate::search::SearchError) -> Self {
        Self::Search { source }
    }
}
