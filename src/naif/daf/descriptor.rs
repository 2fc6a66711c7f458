/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::NaifId;

/// One SPK summary descriptor: ND=2 doubles (epoch bounds) followed by
/// NI=6 packed 32-bit integers, for a total width of 5 doubles / 40 bytes
/// (spec §6).
#[derive(Debug, Clone, Copy, FromBytes, KnownLayout, Immutable, IntoBytes, PartialEq)]
#[repr(C)]
pub struct SpkDescriptor {
    pub start_sec: f64,
    pub end_sec: f64,
    pub target: i32,
    pub center: i32,
    pub frame: i32,
    pub data_type: i32,
    pub first_word: i32,
    pub last_word: i32,
}

impl SpkDescriptor {
    pub const WIDTH_BYTES: usize = std::mem::size_of::<Self>();

    pub fn target_id(&self) -> NaifId {
        self.target
    }

    pub fn center_id(&self) -> NaifId {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_forty_bytes() {
        assert_eq!(SpkDescriptor::WIDTH_BYTES, 40);
    }
}
