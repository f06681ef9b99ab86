//! Companion tooling for wagner simulation results folders.
//!
//! A run seeded with `42` leaves `w-42.xml` (the run info), extant-species
//! snapshots `w-species-42-t<step>.xml` and `w-network-42.graphml` behind
//! in its working folder. [`grab_seeds`] returns the seeds that have an
//! info file in a folder, which is how finished runs are told apart from
//! seeds still to be launched; [`scan_runs`] lists everything each run
//! left behind.

pub mod collect;
pub mod convention;
pub mod error;

pub use collect::{RunInventory, grab_seeds, grab_seeds_with, scan_runs};
pub use convention::{Convention, RunFile};
pub use error::ScanError;
