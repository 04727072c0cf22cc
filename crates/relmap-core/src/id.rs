//! Strongly-typed identifiers for surfaces, overlays, and backend rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one mounted map surface.
///
/// Allocated by the map backend when a surface is created. A view
/// holds at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SurfaceId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies one visual overlay (marker or circle) attached to a surface.
///
/// Allocated by the backend on creation and retained by the owning view
/// so every overlay can be detached on rebuild or unmount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OverlayId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Opaque identity of a backend row.
///
/// The hosted backend assigns these; the client never inspects the
/// contents beyond equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        Self(v)
    }
}
