//! Tracked boon table.
//!
//! Only buffs listed here take part in stack attribution; anything else in a
//! player's buff states is skipped.

use phf::phf_map;
use warclaw_types::BuffId;

/// Attribution rules for one tracked boon.
#[derive(Debug, Clone, Copy)]
pub struct BoonInfo {
    pub name: &'static str,
    /// Highest stack bucket damage is attributed to. 25 for Might, 1 for
    /// on/off boons.
    pub damage_cap: u32,
    /// Whether per-stack uptime durations are tracked (Might, Stability).
    pub stack_uptime: bool,
}

pub static BOONS: phf::Map<u32, BoonInfo> = phf_map! {
    740_u32 => BoonInfo { name: "Might", damage_cap: 25, stack_uptime: true },
    725_u32 => BoonInfo { name: "Fury", damage_cap: 1, stack_uptime: false },
    1187_u32 => BoonInfo { name: "Quickness", damage_cap: 1, stack_uptime: false },
    30328_u32 => BoonInfo { name: "Alacrity", damage_cap: 1, stack_uptime: false },
    717_u32 => BoonInfo { name: "Protection", damage_cap: 1, stack_uptime: false },
    718_u32 => BoonInfo { name: "Regeneration", damage_cap: 1, stack_uptime: false },
    726_u32 => BoonInfo { name: "Vigor", damage_cap: 1, stack_uptime: false },
    743_u32 => BoonInfo { name: "Aegis", damage_cap: 1, stack_uptime: false },
    1122_u32 => BoonInfo { name: "Stability", damage_cap: 1, stack_uptime: true },
    719_u32 => BoonInfo { name: "Swiftness", damage_cap: 1, stack_uptime: false },
    26980_u32 => BoonInfo { name: "Resistance", damage_cap: 1, stack_uptime: false },
    873_u32 => BoonInfo { name: "Resolution", damage_cap: 1, stack_uptime: false },
};

/// Look up the attribution rules for a buff, if it is a tracked boon.
pub fn boon_info(buff: BuffId) -> Option<&'static BoonInfo> {
    BOONS.get(&buff.0)
}
