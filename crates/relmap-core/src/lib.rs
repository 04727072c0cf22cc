//! Core types for the relmap disaster-response mapping stack.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the record shapes fetched from the hosted backend, the static risk
//! zone table, the overlay styling policy, identifier newtypes, and
//! the error enums shared across the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod entity;
pub mod error;
pub mod id;
pub mod style;
pub mod zone;

pub use entity::{Disaster, GeoPoint, NewDisaster, NewReport, PointEntity, Report, Resource, SocialPost, Tags};
pub use error::{BackendError, MapError};
pub use id::{OverlayId, RecordId, SurfaceId};
pub use style::{
    disaster_color, disaster_marker_style, resource_color, resource_marker_style, zone_circle_style,
    zone_color, CircleStyle, MarkerGlyph, MarkerStyle, DEFAULT_GRAY,
};
pub use zone::{RiskLevel, RiskZone, INDIA_CENTER, RISK_ZONES};
