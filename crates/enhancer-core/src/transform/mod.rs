//! Transform pipeline — parameter layout, stage evaluation, and orchestration.

pub mod evaluate;
pub mod params;
pub mod pipeline;
