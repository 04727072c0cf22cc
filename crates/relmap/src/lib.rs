//! Relmap: map-overlay composition and interaction batching for
//! disaster-response dashboards.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all relmap sub-crates. For most users, adding `relmap` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use relmap::prelude::*;
//! use relmap::sched::TimeMs;
//!
//! // A view needs a backend wrapping the real mapping SDK; tests use
//! // the fake from `relmap-test-utils`.
//! # use relmap_test_utils::{fixtures::disaster_at, FakeMapBackend};
//! # let mut backend = FakeMapBackend::new();
//! let mut view = MapView::new(SurfaceOptions::new(INDIA_CENTER, 5));
//! view.mount(&mut backend).unwrap();
//!
//! // Pump virtual time: the first pump past the surface's idle signal
//! // renders the current input as staggered overlay batches.
//! view.pump(&mut backend, TimeMs(0)).unwrap();
//! view.set_input(&mut backend, TimeMs(0), RenderInput {
//!     disasters: vec![disaster_at("d-0", 40.7128, -74.0060)],
//!     resources: Vec::new(),
//!     show_zones: true,
//! }).unwrap();
//! view.pump(&mut backend, TimeMs(1_000)).unwrap();
//! assert_eq!(view.overlay_count(), 9);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `relmap-core` | Record shapes, risk zones, styling, IDs, errors |
//! | [`sched`] | `relmap-sched` | Virtual-time cancelable timer queue |
//! | [`surface`] | `relmap-surface` | The `MapBackend` SDK trait and overlay specs |
//! | [`engine`] | `relmap-engine` | `MapView` lifecycle and the batched renderer |
//! | [`host`] | `relmap-host` | Backend client, dashboard state, forms, feed, legend |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Record shapes, risk zones, styling policy, IDs, and errors
/// (`relmap-core`).
pub use relmap_core as types;

/// Virtual-time cancelable timer queue (`relmap-sched`).
pub use relmap_sched as sched;

/// The mapping SDK boundary (`relmap-surface`).
///
/// Implement [`surface::MapBackend`] to drive a real SDK.
pub use relmap_surface as surface;

/// Map view lifecycle and batched overlay rendering (`relmap-engine`).
///
/// [`engine::MapView`] is the main entry point.
pub use relmap_engine as engine;

/// Host shell: backend client, dashboard state, credential store,
/// forms, feed helpers, and the legend model (`relmap-host`).
pub use relmap_host as host;

/// Common imports for typical relmap usage.
///
/// ```rust
/// use relmap::prelude::*;
/// ```
pub mod prelude {
    pub use relmap_core::{
        BackendError, Disaster, GeoPoint, MapError, NewDisaster, NewReport, OverlayId,
        PointEntity, RecordId, Report, Resource, RiskLevel, RiskZone, SocialPost, SurfaceId,
        INDIA_CENTER, RISK_ZONES,
    };
    pub use relmap_engine::{ClickTarget, MapView, RenderInput, ViewPhase};
    pub use relmap_host::{BackendClient, CredentialStore, Dashboard, MapAccess, MapCredential};
    pub use relmap_surface::{MapBackend, PopupContent, SurfaceOptions};
}
