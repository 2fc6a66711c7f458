/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Loads a DAF/SPK file into a flat list of [`Segment`]s, per the byte-exact
//! contract of spec §4.2.

pub mod segment;

use bytes::Bytes;
use snafu::prelude::*;
use zerocopy::FromBytes;

use crate::errors::{self, OpenError};
use crate::naif::daf::{FileRecord, SpkDescriptor, SummaryRecord};
use crate::naif::{load_file_bytes, RECORD_LEN};
pub use segment::{DataType, Segment};

/// A fully parsed SPK file: every accepted segment, plus the diagnostic
/// checksum and optional comment text the teacher's reader also surfaces
/// (spec §4.2 "(added detail)").
pub struct SpkFile {
    pub segments: Vec<Segment>,
    pub crc32: u32,
    pub comments: Option<String>,
}

impl SpkFile {
    pub fn open(path: &str) -> Result<Self, OpenError> {
        let bytes = load_file_bytes(path).context(errors::IoSnafu {
            action: format!("mapping {path}"),
        })?;
        Self::parse(&bytes)
    }

    fn parse(bytes: &Bytes) -> Result<Self, OpenError> {
        let record0 = &bytes[0..RECORD_LEN];
        let file_record = FileRecord::read_from_bytes(record0).map_err(|_| {
            errors::FileMagicMismatchSnafu {
                found: {
                    let mut found = [0u8; 8];
                    found.copy_from_slice(&record0[0..8]);
                    found
                },
            }
            .build()
        })?;
        ensure!(
            file_record.is_spk(),
            errors::FileMagicMismatchSnafu {
                found: file_record.id_str,
            }
        );

        let descriptor_width_doubles = file_record.summary_width_doubles();
        let descriptor_bytes = descriptor_width_doubles * 8;

        let mut segments = Vec::new();
        let mut record_num = file_record.forward_record();
        while record_num != 0 {
            let start = (record_num - 1) * RECORD_LEN;
            let record_bytes = &bytes[start..start + RECORD_LEN];
            let summary = SummaryRecord::read_from_bytes(&record_bytes[0..24])
                .expect("a fixed 24-byte prefix always parses");

            for i in 0..summary.count() {
                let off = 24 + i * descriptor_bytes;
                let raw = &record_bytes[off..off + descriptor_bytes];
                segments.push(Self::load_segment(bytes, raw)?);
            }

            record_num = summary.next_record();
        }

        let crc32 = crc32fast::hash(bytes);
        let comments = Self::parse_comments(bytes, &file_record);

        Ok(Self {
            segments,
            crc32,
            comments,
        })
    }

    /// Parses one 40-byte SPK descriptor and loads its coefficient block,
    /// rejecting unsupported segment data types (spec §4.2).
    fn load_segment(bytes: &Bytes, raw: &[u8]) -> Result<Segment, OpenError> {
        let descriptor = SpkDescriptor::read_from_bytes(raw).expect("raw is exactly SpkDescriptor::WIDTH_BYTES");

        let data_type = DataType::from_raw(descriptor.data_type).context(errors::UnsupportedSegmentTypeSnafu {
            data_type: descriptor.data_type,
            target: descriptor.target,
            center: descriptor.center,
        })?;

        let word_count = (descriptor.last_word - descriptor.first_word + 1) as usize;
        let block_start = (descriptor.first_word as usize - 1) * 8;
        let block_bytes = &bytes[block_start..block_start + word_count * 8];

        let mut doubles = Vec::with_capacity(word_count);
        for chunk in block_bytes.chunks_exact(8) {
            doubles.push(f64::from_le_bytes(chunk.try_into().unwrap()));
        }

        let n = doubles[word_count - 1];
        let rsize = doubles[word_count - 2];
        let int_len = doubles[word_count - 3];
        let init = doubles[word_count - 4];
        let coeff_block = doubles[..word_count - 4].to_vec();

        Ok(Segment::new(
            descriptor.target,
            descriptor.center,
            data_type,
            descriptor.start_sec,
            descriptor.end_sec,
            init,
            int_len,
            rsize,
            n,
            coeff_block,
        ))
    }

    /// The comment area between the file record and the first summary
    /// record: NAIF packs free-text ASCII there, records separated by
    /// nulls and terminated by a form-feed (0x04) byte.
    fn parse_comments(bytes: &Bytes, file_record: &FileRecord) -> Option<String> {
        let forward = file_record.forward_record();
        if forward <= 1 {
            return None;
        }
        let start = RECORD_LEN;
        let end = (forward - 1) * RECORD_LEN;
        if end <= start || end > bytes.len() {
            return None;
        }
        let region = &bytes[start..end];
        let text_bytes: Vec<u8> = region
            .iter()
            .take_while(|&&b| b != 0x04)
            .map(|&b| if b == 0 { b'\n' } else { b })
            .collect();
        let text = String::from_utf8_lossy(&text_bytes).trim().to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
