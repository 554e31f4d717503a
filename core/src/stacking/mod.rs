//! Buff-stack damage attribution
//!
//! Splits a player's damage across the stack levels of a boon that were
//! active while the damage happened. Spans come combat-clipped from the
//! interval splitter; sub-second span boundaries attribute the boundary
//! tick's damage fractionally.

mod attributor;


pub use attributor::{BuffStacking, STACK_BUCKETS, attribute_stack_damage};
