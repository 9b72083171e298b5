//! Serializable render reports and stage timings.
pub mod report;
pub mod timing;

pub use report::{InputDescriptor, RenderReport};
pub use timing::{StageClock, StageTiming, TimingBreakdown};
