use crate::diagnostics::TimingBreakdown;
use serde::Serialize;

/// Summary of one render, suitable for JSON output.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub input: InputDescriptor,
    pub resolution: usize,
    pub rows: usize,
    pub cols: usize,
    pub charset: String,
    /// `true` when the brightness grid came from the cache.
    pub brightness_cached: bool,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub padded_width: usize,
    pub padded_height: usize,
}
