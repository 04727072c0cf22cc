//! Rendering metrics.

/// Counters accumulated by a [`MapView`](crate::view::MapView) across
/// its lifetime.
///
/// Purely diagnostic; nothing in the engine branches on these.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderMetrics {
    /// Full rebuilds performed (initial render included).
    pub rebuilds: u64,
    /// Overlay creations scheduled onto the timer queue.
    pub scheduled: u64,
    /// Overlays actually created on the surface.
    pub created: u64,
    /// Entities skipped because latitude or longitude was missing.
    pub skipped_missing_coords: u64,
    /// Pending timers cancelled by rebuilds and unmount.
    pub cancelled_timers: u64,
}
