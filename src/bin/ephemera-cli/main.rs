/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `ephemera-cli`: inspect a loaded SPK kernel, query an apparent body
//! position, or list season transitions over a date range (spec §1
//! "(added) CLI tooling").

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hifitime::{Epoch, TimeScale};
use tabled::{Style, Table, Tabled};

use ephemera::aberration::apparent;
use ephemera::almanac::seasons;
use ephemera::config::EphemeraConfig;
use ephemera::constants::{bodies, J2000_JD, SECONDS_PER_DAY};
use ephemera::ephemeris::Ephemeris;
use ephemera::errors::EphemeraError;
use ephemera::naif::spk::SpkFile;

#[derive(Parser, Debug)]
#[command(name = "ephemera", author, version, about = "Inspect SPK kernels and query astronomical events", long_about = None)]
struct Args {
    #[command(subcommand)]
    action: Actions,
}

#[derive(Subcommand, Debug)]
enum Actions {
    /// Summarizes every segment in an SPK kernel.
    Inspect {
        file: PathBuf,
    },
    /// Prints the apparent geocentric position of a body at a TDB Julian
    /// date.
    Position {
        file: PathBuf,
        #[arg(long)]
        body: i32,
        #[arg(long)]
        tdb_jd: f64,
    },
    /// Lists equinox/solstice transitions over a TDB Julian date window.
    Seasons {
        file: PathBuf,
        #[arg(long)]
        start_jd: f64,
        #[arg(long)]
        end_jd: f64,
    },
}

#[derive(Tabled)]
struct SegmentRow {
    #[tabled(rename = "Target")]
    target: i32,
    #[tabled(rename = "Center")]
    center: i32,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Start (TDB)")]
    start: String,
    #[tabled(rename = "End (TDB)")]
    end: String,
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), EphemeraError> {
    match args.action {
        Actions::Inspect { file } => inspect(&file),
        Actions::Position { file, body, tdb_jd } => position(&file, body, tdb_jd),
        Actions::Seasons { file, start_jd, end_jd } => list_seasons(&file, start_jd, end_jd),
    }
}

fn tdb_seconds_to_gregorian(seconds: f64) -> String {
    let jd = J2000_JD + seconds / SECONDS_PER_DAY;
    Epoch::from_jde_tdb(jd).to_gregorian_str(TimeScale::TDB)
}

fn inspect(file: &PathBuf) -> Result<(), EphemeraError> {
    let path = file.to_string_lossy().to_string();
    let spk = SpkFile::open(&path)?;

    println!("CRC32: {:08x}", spk.crc32);
    if let Some(comments) = &spk.comments {
        println!("Comments:\n{comments}");
    }

    let rows: Vec<SegmentRow> = spk
        .segments
        .iter()
        .map(|seg| SegmentRow {
            target: seg.target,
            center: seg.center,
            kind: format!("{:?}", seg.data_type),
            start: tdb_seconds_to_gregorian(seg.start_sec),
            end: tdb_seconds_to_gregorian(seg.end_sec),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{table}");
    Ok(())
}

fn position(file: &PathBuf, body: i32, tdb_jd: f64) -> Result<(), EphemeraError> {
    let eph = Ephemeris::open(&file.to_string_lossy())?;
    let config = EphemeraConfig::default();
    let pos = apparent(&eph, bodies::EARTH, body, tdb_jd, &config);
    println!("apparent position of body {body} at JD {tdb_jd} (TDB): [{:.6}, {:.6}, {:.6}] km", pos.x, pos.y, pos.z);
    Ok(())
}

fn list_seasons(file: &PathBuf, start_jd: f64, end_jd: f64) -> Result<(), EphemeraError> {
    let eph = Ephemeris::open(&file.to_string_lossy())?;
    let config = EphemeraConfig::default();
    let events = seasons(&eph, &config, start_jd, end_jd)?;

    for event in events {
        let label = match event.new_value {
            0 => "spring equinox",
            1 => "summer solstice",
            2 => "autumn equinox",
            _ => "winter solstice",
        };
        println!("{:.6}  {label}", event.t);
    }
    Ok(())
}
