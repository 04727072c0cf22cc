//! Mapping SDK boundary for relmap.
//!
//! The third-party mapping SDK is an external collaborator: this crate
//! specifies only the surface the rendering core drives — surface
//! creation, point and circle overlay creation, a shared popup, and the
//! one-shot idle signal — as the [`MapBackend`] trait plus plain data
//! specs. The SDK's own rendering engine is out of scope.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod spec;

pub use backend::MapBackend;
pub use spec::{CircleSpec, MarkerSpec, PopupAnchor, PopupContent, PopupLine, SurfaceOptions, SurfaceTheme};
