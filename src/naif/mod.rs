/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The NAIF DAF/SPK binary reader (component C2).
//!
//! This module narrows the teacher's generic, multi-format DAF reader
//! (which also serves PCK orientation kernels and several Hermite/
//! Lagrange/Chebyshev segment encodings) down to exactly what spec §6
//! names as the wire contract: little-endian DAF files with ND=2, NI=6
//! descriptors (the SPK layout) and segment data types 2 and 3
//! (position-only and position+velocity Chebyshev records).

pub mod daf;
pub mod spk;

/// Bytes per DAF record (file record, summary record, or one physical
/// data record), fixed by the DAF format.
pub(crate) const RECORD_LEN: usize = 1024;

pub(crate) fn load_file_bytes(path: &str) -> std::io::Result<bytes::Bytes> {
    let file = std::fs::File::open(path)?;
    // Safety: the mapped file is treated as immutable for the lifetime of
    // the loaded ephemeris (spec §5); we never write through this mapping.
    let mmap = unsafe { memmap2::Mmap::map(&file)? };
    Ok(bytes::Bytes::copy_from_slice(&mmap[..]))
}
