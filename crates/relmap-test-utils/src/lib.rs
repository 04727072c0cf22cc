//! Test utilities and mock types for relmap development.
//!
//! Provides [`FakeMapBackend`], an in-memory [`MapBackend`] that records
//! every SDK call for assertion, and the [`fixtures`] module of
//! ready-made backend records.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use relmap_core::{MapError, OverlayId, SurfaceId};
use relmap_surface::backend::MapBackend;
use relmap_surface::spec::{CircleSpec, MarkerSpec, PopupAnchor, PopupContent, SurfaceOptions};

pub mod fixtures;

/// A recorded overlay on the fake backend, with its creation spec.
#[derive(Clone, Debug, PartialEq)]
pub enum FakeOverlay {
    Marker(MarkerSpec),
    Circle(CircleSpec),
}

struct FakeSurface {
    options: SurfaceOptions,
    idle_pending: bool,
}

/// One recorded popup-open call.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupOpen {
    pub surface: SurfaceId,
    pub content: PopupContent,
    pub anchor: PopupAnchor,
}

/// In-memory [`MapBackend`] that records every call.
///
/// Surfaces deliver their one-shot idle signal on the first
/// [`take_idle`](MapBackend::take_idle) by default; call
/// [`defer_idle`](FakeMapBackend::defer_idle) to hold the signal until
/// the test releases it with [`signal_idle`](FakeMapBackend::signal_idle).
pub struct FakeMapBackend {
    surfaces: HashMap<u64, FakeSurface>,
    overlays: HashMap<u64, FakeOverlay>,
    creation_order: Vec<OverlayId>,
    removed: Vec<OverlayId>,
    popups: Vec<PopupOpen>,
    next_surface: u64,
    next_overlay: u64,
    auto_idle: bool,
    fail_next: Option<String>,
}

impl FakeMapBackend {
    pub fn new() -> Self {
        Self {
            surfaces: HashMap::new(),
            overlays: HashMap::new(),
            creation_order: Vec::new(),
            removed: Vec::new(),
            popups: Vec::new(),
            next_surface: 0,
            next_overlay: 0,
            auto_idle: true,
            fail_next: None,
        }
    }

    /// Hold idle signals until [`signal_idle`](Self::signal_idle).
    ///
    /// Affects surfaces created after this call.
    pub fn defer_idle(&mut self) {
        self.auto_idle = false;
    }

    /// Deliver the one-shot idle signal for `surface`.
    pub fn signal_idle(&mut self, surface: SurfaceId) {
        if let Some(s) = self.surfaces.get_mut(&surface.0) {
            s.idle_pending = true;
        }
    }

    /// Make the next marker or circle creation fail with
    /// [`MapError::SdkFailure`].
    pub fn fail_next_creation(&mut self, reason: &str) {
        self.fail_next = Some(reason.to_string());
    }

    /// Number of surfaces currently alive.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// The options the given surface was created with.
    pub fn surface_options(&self, surface: SurfaceId) -> Option<&SurfaceOptions> {
        self.surfaces.get(&surface.0).map(|s| &s.options)
    }

    /// Number of overlays currently attached.
    pub fn live_overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Live overlays in creation order.
    pub fn live_overlays(&self) -> Vec<OverlayId> {
        self.creation_order
            .iter()
            .copied()
            .filter(|id| self.overlays.contains_key(&id.0))
            .collect()
    }

    /// The recorded spec for a live overlay.
    pub fn overlay(&self, id: OverlayId) -> Option<&FakeOverlay> {
        self.overlays.get(&id.0)
    }

    /// The marker spec for a live overlay, if it is a marker.
    pub fn marker_spec(&self, id: OverlayId) -> Option<&MarkerSpec> {
        match self.overlays.get(&id.0) {
            Some(FakeOverlay::Marker(spec)) => Some(spec),
            _ => None,
        }
    }

    /// The circle spec for a live overlay, if it is a circle.
    pub fn circle_spec(&self, id: OverlayId) -> Option<&CircleSpec> {
        match self.overlays.get(&id.0) {
            Some(FakeOverlay::Circle(spec)) => Some(spec),
            _ => None,
        }
    }

    /// Every overlay id passed to `remove_overlay`, in call order.
    pub fn removed_overlays(&self) -> &[OverlayId] {
        &self.removed
    }

    /// Number of popup-open calls recorded.
    pub fn popup_open_count(&self) -> usize {
        self.popups.len()
    }

    /// The most recent popup-open call.
    pub fn last_popup(&self) -> Option<&PopupOpen> {
        self.popups.last()
    }

    /// Anchor of the most recent popup-open call.
    pub fn last_popup_anchor(&self) -> Option<PopupAnchor> {
        self.popups.last().map(|p| p.anchor)
    }

    fn next_overlay_id(&mut self) -> Result<OverlayId, MapError> {
        if let Some(reason) = self.fail_next.take() {
            return Err(MapError::SdkFailure { reason });
        }
        let id = OverlayId(self.next_overlay);
        self.next_overlay += 1;
        Ok(id)
    }
}

impl Default for FakeMapBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MapBackend for FakeMapBackend {
    fn create_surface(&mut self, options: SurfaceOptions) -> Result<SurfaceId, MapError> {
        let id = SurfaceId(self.next_surface);
        self.next_surface += 1;
        self.surfaces.insert(
            id.0,
            FakeSurface {
                options,
                idle_pending: self.auto_idle,
            },
        );
        Ok(id)
    }

    fn destroy_surface(&mut self, surface: SurfaceId) {
        self.surfaces.remove(&surface.0);
    }

    fn take_idle(&mut self, surface: SurfaceId) -> bool {
        match self.surfaces.get_mut(&surface.0) {
            Some(s) if s.idle_pending => {
                s.idle_pending = false;
                true
            }
            _ => false,
        }
    }

    fn create_marker(
        &mut self,
        surface: SurfaceId,
        spec: MarkerSpec,
    ) -> Result<OverlayId, MapError> {
        if !self.surfaces.contains_key(&surface.0) {
            return Err(MapError::UnknownSurface { id: surface });
        }
        let id = self.next_overlay_id()?;
        self.overlays.insert(id.0, FakeOverlay::Marker(spec));
        self.creation_order.push(id);
        Ok(id)
    }

    fn create_circle(
        &mut self,
        surface: SurfaceId,
        spec: CircleSpec,
    ) -> Result<OverlayId, MapError> {
        if !self.surfaces.contains_key(&surface.0) {
            return Err(MapError::UnknownSurface { id: surface });
        }
        let id = self.next_overlay_id()?;
        self.overlays.insert(id.0, FakeOverlay::Circle(spec));
        self.creation_order.push(id);
        Ok(id)
    }

    fn remove_overlay(&mut self, overlay: OverlayId) {
        self.overlays.remove(&overlay.0);
        self.removed.push(overlay);
    }

    fn open_popup(&mut self, surface: SurfaceId, content: PopupContent, anchor: PopupAnchor) {
        self.popups.push(PopupOpen {
            surface,
            content,
            anchor,
        });
    }
}
