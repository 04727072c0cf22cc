//! Error types shared across the relmap workspace.
//!
//! Organised by subsystem: map surface/SDK errors and backend data
//! errors. Subsystem-local errors (e.g. form validation) live next to
//! the code that raises them.

use std::error::Error;
use std::fmt;

use crate::id::{OverlayId, SurfaceId};

/// Errors from the mapping SDK boundary.
///
/// The rendering core does not recover from these: a failure aborts the
/// current render pass and propagates to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The SDK rejected the supplied credential.
    CredentialRejected {
        /// SDK-supplied rejection detail.
        reason: String,
    },
    /// An SDK call failed (e.g. malformed style object).
    SdkFailure {
        /// SDK-supplied failure detail.
        reason: String,
    },
    /// The surface id is not known to the backend.
    UnknownSurface {
        /// The offending id.
        id: SurfaceId,
    },
    /// The overlay id is not known to the backend.
    UnknownOverlay {
        /// The offending id.
        id: OverlayId,
    },
    /// The view has already mounted a surface; a view mounts at most once.
    AlreadyMounted,
    /// The view was asked to render before a surface exists.
    NotMounted,
    /// The view has been unmounted. Terminal.
    Unmounted,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CredentialRejected { reason } => {
                write!(f, "mapping credential rejected: {reason}")
            }
            Self::SdkFailure { reason } => write!(f, "mapping SDK call failed: {reason}"),
            Self::UnknownSurface { id } => write!(f, "unknown surface {id}"),
            Self::UnknownOverlay { id } => write!(f, "unknown overlay {id}"),
            Self::AlreadyMounted => write!(f, "surface already mounted"),
            Self::NotMounted => write!(f, "no surface mounted"),
            Self::Unmounted => write!(f, "view has been unmounted"),
        }
    }
}

impl Error for MapError {}

/// Errors from the hosted backend client.
///
/// Caught at the host-shell boundary; the shell keeps its prior
/// in-memory lists unchanged and surfaces a notice. No retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendError {
    /// Transport-level failure reaching the backend.
    Unavailable {
        /// Failure detail for the notice.
        reason: String,
    },
    /// A row could not be decoded into its record shape.
    Decode {
        /// Decode failure detail.
        reason: String,
    },
    /// The backend rejected an insert.
    Rejected {
        /// Rejection detail.
        reason: String,
    },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "backend unavailable: {reason}"),
            Self::Decode { reason } => write!(f, "row decode failed: {reason}"),
            Self::Rejected { reason } => write!(f, "insert rejected: {reason}"),
        }
    }
}

impl Error for BackendError {}
