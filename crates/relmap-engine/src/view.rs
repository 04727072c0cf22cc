//! Map view lifecycle manager.
//!
//! [`MapView`] owns one map surface and the overlay set attached to it.
//! It is the single owner of the overlay handles, the click-handler
//! table, and the shared popup's use; no other component mutates them.
//! Safety is single-threaded execution plus discard-before-rebuild —
//! there are no locks anywhere in this module.
//!
//! # State machine
//!
//! ```text
//! Uninitialized --mount--> Loading --surface idle--> Ready --unmount--> Unmounted
//! ```
//!
//! The surface is created exactly once per view, from the mount-time
//! options. Entity-list changes while `Ready` discard the full overlay
//! set synchronously — cancel pending timers, detach every overlay,
//! clear the handler table — before the new batch is scheduled, so no
//! overlay from a superseded batch can attach afterwards.

use indexmap::IndexMap;

use relmap_core::entity::{Disaster, PointEntity, Resource};
use relmap_core::zone::{RiskZone, RISK_ZONES};
use relmap_core::style::MarkerStyle;
use relmap_core::{MapError, OverlayId, SurfaceId};
use relmap_sched::{TimeMs, TimerQueue};
use relmap_surface::backend::MapBackend;
use relmap_surface::spec::{CircleSpec, MarkerSpec, PopupAnchor, PopupContent, SurfaceOptions};

use crate::metrics::RenderMetrics;
use crate::render::{
    disaster_popup, resource_popup, schedule_batches, zone_popup, OverlayJob, RenderInput,
};

// ── ViewPhase ───────────────────────────────────────────────────

/// Lifecycle phase of a [`MapView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    /// No surface yet; waiting for [`MapView::mount`].
    Uninitialized,
    /// Surface created, waiting for its one-shot idle signal.
    Loading,
    /// Surface live; overlay set tracks the latest input.
    Ready,
    /// Torn down. Terminal.
    Unmounted,
}

// ── ClickTarget ─────────────────────────────────────────────────

/// The source record behind a clicked overlay.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickTarget {
    /// A point marker was clicked.
    Point(PointEntity),
    /// A zone circle was clicked.
    Zone(RiskZone),
}

/// Entry in the view's registered-handler table.
///
/// Holds a copy of the popup block and the full source record; the
/// overlay-to-entity association lives only here.
struct ClickHandler {
    popup: PopupContent,
    anchor: PopupAnchor,
    target: ClickTarget,
}

type DisasterCallback = Box<dyn FnMut(&Disaster)>;
type ResourceCallback = Box<dyn FnMut(&Resource)>;

// ── MapView ─────────────────────────────────────────────────────

/// Owner of one map surface, its overlay set, and its click handlers.
///
/// All methods take the backend explicitly; the view holds no reference
/// to it, mirroring the single-UI-thread calling convention.
pub struct MapView {
    phase: ViewPhase,
    options: SurfaceOptions,
    surface: Option<SurfaceId>,
    input: RenderInput,
    zones: &'static [RiskZone],
    timers: TimerQueue<OverlayJob>,
    markers: Vec<OverlayId>,
    circles: Vec<OverlayId>,
    handlers: IndexMap<OverlayId, ClickHandler>,
    on_disaster_click: Option<DisasterCallback>,
    on_resource_click: Option<ResourceCallback>,
    metrics: RenderMetrics,
}

impl MapView {
    /// Create an unmounted view that will initialise its surface from
    /// `options`.
    ///
    /// The options apply at mount only; the surface is never re-centred
    /// or re-zoomed from later changes.
    pub fn new(options: SurfaceOptions) -> Self {
        Self {
            phase: ViewPhase::Uninitialized,
            options,
            surface: None,
            input: RenderInput::default(),
            zones: &RISK_ZONES,
            timers: TimerQueue::new(),
            markers: Vec::new(),
            circles: Vec::new(),
            handlers: IndexMap::new(),
            on_disaster_click: None,
            on_resource_click: None,
            metrics: RenderMetrics::default(),
        }
    }

    /// Register the host callback invoked after a disaster marker's
    /// popup opens.
    pub fn on_disaster_click(&mut self, callback: impl FnMut(&Disaster) + 'static) {
        self.on_disaster_click = Some(Box::new(callback));
    }

    /// Register the host callback invoked after a resource marker's
    /// popup opens.
    pub fn on_resource_click(&mut self, callback: impl FnMut(&Resource) + 'static) {
        self.on_resource_click = Some(Box::new(callback));
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// The mounted surface, once one exists.
    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    /// Number of overlays currently attached to the surface.
    pub fn overlay_count(&self) -> usize {
        self.markers.len() + self.circles.len()
    }

    /// Number of overlay creations still pending on the timer queue.
    pub fn pending_creations(&self) -> usize {
        self.timers.len()
    }

    /// Lifetime rendering counters.
    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Create the map surface from the mount-time options.
    ///
    /// Allowed exactly once, from `Uninitialized`. The view moves to
    /// `Loading` until the surface's one-shot idle signal is observed
    /// by [`pump`](MapView::pump).
    pub fn mount(&mut self, backend: &mut dyn MapBackend) -> Result<SurfaceId, MapError> {
        match self.phase {
            ViewPhase::Uninitialized => {}
            ViewPhase::Unmounted => return Err(MapError::Unmounted),
            ViewPhase::Loading | ViewPhase::Ready => return Err(MapError::AlreadyMounted),
        }
        let surface = backend.create_surface(self.options.clone())?;
        self.surface = Some(surface);
        self.phase = ViewPhase::Loading;
        Ok(surface)
    }

    /// Replace the entity lists (and zone flag) the view renders from.
    ///
    /// Before the surface is ready the input is only stored; the first
    /// render happens when [`pump`](MapView::pump) observes the idle
    /// signal. While `Ready`, the current overlay set is discarded
    /// synchronously and a fresh staggered batch is scheduled from
    /// `now`.
    pub fn set_input(
        &mut self,
        backend: &mut dyn MapBackend,
        now: TimeMs,
        input: RenderInput,
    ) -> Result<(), MapError> {
        match self.phase {
            ViewPhase::Unmounted => return Err(MapError::Unmounted),
            ViewPhase::Uninitialized | ViewPhase::Loading => {
                self.input = input;
                Ok(())
            }
            ViewPhase::Ready => {
                self.input = input;
                self.rebuild(backend, now);
                Ok(())
            }
        }
    }

    /// Advance virtual time: consume the idle signal and create any
    /// overlays whose stagger delay has elapsed.
    ///
    /// A backend failure aborts the remainder of this render pass and
    /// propagates; already-created overlays stay tracked so teardown
    /// still detaches them.
    pub fn pump(&mut self, backend: &mut dyn MapBackend, now: TimeMs) -> Result<(), MapError> {
        let surface = match self.phase {
            ViewPhase::Uninitialized => return Err(MapError::NotMounted),
            ViewPhase::Unmounted => return Err(MapError::Unmounted),
            ViewPhase::Loading | ViewPhase::Ready => {
                self.surface.ok_or(MapError::NotMounted)?
            }
        };

        if self.phase == ViewPhase::Loading {
            if !backend.take_idle(surface) {
                return Ok(());
            }
            self.phase = ViewPhase::Ready;
            self.rebuild(backend, now);
        }

        for fired in self.timers.pop_due(now) {
            self.create_overlay(backend, surface, fired.payload)?;
        }
        Ok(())
    }

    /// Dispatch a click on an overlay.
    ///
    /// Opens the shared popup with the overlay's content block, then
    /// invokes the matching host callback with the full source record.
    /// Returns the click target, or `None` for an overlay this view
    /// does not own (e.g. one already discarded by a rebuild).
    pub fn click(
        &mut self,
        backend: &mut dyn MapBackend,
        overlay: OverlayId,
    ) -> Result<Option<ClickTarget>, MapError> {
        let surface = match self.phase {
            ViewPhase::Ready => self.surface.ok_or(MapError::NotMounted)?,
            ViewPhase::Uninitialized => return Err(MapError::NotMounted),
            ViewPhase::Loading => return Ok(None),
            ViewPhase::Unmounted => return Err(MapError::Unmounted),
        };

        let Some(handler) = self.handlers.get(&overlay) else {
            return Ok(None);
        };
        let target = handler.target.clone();
        backend.open_popup(surface, handler.popup.clone(), handler.anchor);

        match &target {
            ClickTarget::Point(PointEntity::Disaster(d)) => {
                if let Some(callback) = self.on_disaster_click.as_mut() {
                    callback(d);
                }
            }
            ClickTarget::Point(PointEntity::Resource(r)) => {
                if let Some(callback) = self.on_resource_click.as_mut() {
                    callback(r);
                }
            }
            ClickTarget::Zone(_) => {}
        }
        Ok(Some(target))
    }

    /// Tear the view down: cancel every pending creation, detach every
    /// overlay, destroy the surface. Terminal; further calls on the
    /// view return [`MapError::Unmounted`].
    pub fn unmount(&mut self, backend: &mut dyn MapBackend) {
        if self.phase == ViewPhase::Unmounted {
            return;
        }
        self.discard_overlays(backend);
        if let Some(surface) = self.surface.take() {
            backend.destroy_surface(surface);
        }
        self.phase = ViewPhase::Unmounted;
    }

    /// Discard the current overlay set and schedule a fresh batch.
    ///
    /// Cancellation must precede scheduling: timers still pending from
    /// the previous batch would otherwise attach stale overlays after
    /// this rebuild completed.
    fn rebuild(&mut self, backend: &mut dyn MapBackend, now: TimeMs) {
        self.discard_overlays(backend);
        let stats = schedule_batches(&mut self.timers, now, &self.input, self.zones);
        self.metrics.rebuilds += 1;
        self.metrics.scheduled += stats.scheduled;
        self.metrics.skipped_missing_coords += stats.skipped;
    }

    /// Synchronously cancel pending timers and detach all live overlays.
    fn discard_overlays(&mut self, backend: &mut dyn MapBackend) {
        self.metrics.cancelled_timers += self.timers.cancel_all() as u64;
        for overlay in self.markers.drain(..).chain(self.circles.drain(..)) {
            backend.remove_overlay(overlay);
        }
        self.handlers.clear();
    }

    /// Create one overlay and register its click handler.
    fn create_overlay(
        &mut self,
        backend: &mut dyn MapBackend,
        surface: SurfaceId,
        job: OverlayJob,
    ) -> Result<(), MapError> {
        match job {
            OverlayJob::Zone(zone) => {
                let spec = CircleSpec {
                    center: zone.center,
                    radius_m: zone.radius_m,
                    style: relmap_core::style::zone_circle_style(zone.risk.as_str()),
                };
                let id = backend.create_circle(surface, spec)?;
                self.circles.push(id);
                self.handlers.insert(
                    id,
                    ClickHandler {
                        popup: zone_popup(&zone),
                        anchor: PopupAnchor::Position(zone.center),
                        target: ClickTarget::Zone(zone),
                    },
                );
                self.metrics.created += 1;
            }
            OverlayJob::Disaster(disaster) => {
                let popup = disaster_popup(&disaster);
                let entity = PointEntity::Disaster(disaster);
                let style = relmap_core::style::disaster_marker_style(entity.style_code());
                self.create_point(backend, surface, entity, style, popup)?;
            }
            OverlayJob::Resource(resource) => {
                let popup = resource_popup(&resource);
                let entity = PointEntity::Resource(resource);
                let style = relmap_core::style::resource_marker_style(entity.style_code());
                self.create_point(backend, surface, entity, style, popup)?;
            }
        }
        Ok(())
    }

    /// Create one point marker from its entity projection.
    fn create_point(
        &mut self,
        backend: &mut dyn MapBackend,
        surface: SurfaceId,
        entity: PointEntity,
        style: MarkerStyle,
        popup: PopupContent,
    ) -> Result<(), MapError> {
        // Jobs are only scheduled for geocoded records.
        let Some(position) = entity.position() else {
            return Ok(());
        };
        let spec = MarkerSpec {
            position,
            title: entity.label().to_string(),
            style,
        };
        let id = backend.create_marker(surface, spec)?;
        self.markers.push(id);
        self.handlers.insert(
            id,
            ClickHandler {
                popup,
                anchor: PopupAnchor::Overlay(id),
                target: ClickTarget::Point(entity),
            },
        );
        self.metrics.created += 1;
        Ok(())
    }
}
