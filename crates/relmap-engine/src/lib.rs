//! Batched overlay renderer and map view lifecycle for relmap.
//!
//! [`MapView`](view::MapView) owns one map surface's full lifecycle and
//! keeps its overlay set consistent with the latest entity lists; the
//! renderer in [`render`] staggers overlay creation over virtual time so
//! no single scheduling tick does more than create one overlay.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod metrics;
pub mod render;
pub mod view;

pub use metrics::RenderMetrics;
pub use render::{OverlayJob, RenderInput, DISASTER_STEP_MS, RESOURCE_STEP_MS, ZONE_STEP_MS};
pub use view::{ClickTarget, MapView, ViewPhase};
