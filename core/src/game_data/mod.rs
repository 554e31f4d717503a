//! Static game data tables

mod boons;

pub use boons::{BOONS, BoonInfo, boon_info};
