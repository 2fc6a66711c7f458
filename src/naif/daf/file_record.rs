/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// The 1024-byte file record at the head of every DAF file (spec §6).
///
/// Field layout follows the DAF format exactly: `id_str` carries the
/// `"DAF/SPK "` magic, `nd`/`ni` the summary-descriptor shape, `forward`
/// the record number of the first summary record.
#[derive(Debug, Clone, FromBytes, KnownLayout, Immutable, IntoBytes, PartialEq)]
#[repr(C)]
pub struct FileRecord {
    pub id_str: [u8; 8],
    pub nd: u32,
    pub ni: u32,
    pub internal_filename: [u8; 60],
    pub forward: u32,
    pub backward: u32,
    pub free_addr: u32,
    pub endian_str: [u8; 8],
    pub pre_null: [u8; 603],
    pub ftp_str: [u8; 28],
    pub pst_null: [u8; 297],
}

const MAGIC: &[u8; 8] = b"DAF/SPK ";

impl FileRecord {
    pub fn is_spk(&self) -> bool {
        &self.id_str == MAGIC
    }

    /// Summary-descriptor width in doubles: `ND + ceil(NI/2)`.
    pub fn summary_width_doubles(&self) -> usize {
        self.nd as usize + (self.ni as usize + 1) / 2
    }

    pub fn forward_record(&self) -> usize {
        self.forward as usize
    }
}
