/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Fixed-layout DAF record types, read by reference out of the mapped
//! file bytes via `zerocopy` (spec §6, bit-exact).

pub mod descriptor;
pub mod file_record;
pub mod summary_record;

pub use descriptor::SpkDescriptor;
pub use file_record::FileRecord;
pub use summary_record::SummaryRecord;
