//! The `MapBackend` trait.

use relmap_core::{MapError, OverlayId, SurfaceId};

use crate::spec::{CircleSpec, MarkerSpec, PopupAnchor, PopupContent, SurfaceOptions};

/// The surface of the third-party mapping SDK consumed by relmap.
///
/// Implementations wrap a real SDK (or a test double). All calls happen
/// on the single UI thread; implementations hold no locks. Errors are
/// not recovered by the rendering core — a failed call aborts the
/// render pass in progress.
pub trait MapBackend {
    /// Create a rendering surface.
    ///
    /// Called at most once per mounted view. The options — center,
    /// zoom, controls, theme — apply only at creation; the surface is
    /// never re-initialised from later option changes.
    fn create_surface(&mut self, options: SurfaceOptions) -> Result<SurfaceId, MapError>;

    /// Tear down a surface and everything attached to it.
    fn destroy_surface(&mut self, surface: SurfaceId);

    /// Consume the surface's one-shot idle signal.
    ///
    /// Returns `true` exactly once, after the surface has finished its
    /// initial load. Callers poll this from their pump loop.
    fn take_idle(&mut self, surface: SurfaceId) -> bool;

    /// Attach a point marker overlay.
    fn create_marker(&mut self, surface: SurfaceId, spec: MarkerSpec)
        -> Result<OverlayId, MapError>;

    /// Attach a circle overlay.
    fn create_circle(&mut self, surface: SurfaceId, spec: CircleSpec)
        -> Result<OverlayId, MapError>;

    /// Detach an overlay from its surface.
    ///
    /// Detaching an overlay that is already gone is a no-op: teardown
    /// paths must be able to run unconditionally.
    fn remove_overlay(&mut self, overlay: OverlayId);

    /// Open the surface's shared popup with `content`, anchored per
    /// `anchor`. Replaces whatever the popup showed before.
    fn open_popup(&mut self, surface: SurfaceId, content: PopupContent, anchor: PopupAnchor);
}
