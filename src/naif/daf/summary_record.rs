/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Header of a 1024-byte summary record: a next/previous record pointer
/// (1-based, 0 means "none") and the number of descriptors packed after
/// this header in the same physical record (spec §6).
#[derive(Debug, Clone, Copy, Default, FromBytes, KnownLayout, Immutable, IntoBytes, PartialEq)]
#[repr(C)]
pub struct SummaryRecord {
    next_record: f64,
    prev_record: f64,
    count: f64,
}

impl SummaryRecord {
    pub fn next_record(&self) -> usize {
        self.next_record as usize
    }

    pub fn count(&self) -> usize {
        self.count.round() as usize
    }

    pub fn is_final(&self) -> bool {
        self.next_record() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_size_is_three_doubles() {
        assert_eq!(std::mem::size_of::<SummaryRecord>(), 24);
    }
}
