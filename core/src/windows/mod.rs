//! Sliding-window damage metrics
//!
//! Burst, chunk, carrion, and coordination damage over the per-tick damage
//! series, plus the synthetic "damage that helped secure a kill" series that
//! feeds the Ch5Ca burst metric.

mod aggregator;


pub use aggregator::{
    MAX_WINDOW_SECS, PlayerWindowCtx, WINDOW_BUCKETS, WindowStats, aggregate, moving_average,
};
