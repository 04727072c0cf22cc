//! Deterministic cancelable timer queue for staggered overlay creation.
//!
//! The UI event loop is modelled as virtual time: the host advances a
//! millisecond clock and pumps due entries. There are no threads and no
//! wall-clock reads, so scheduling order is fully deterministic and
//! testable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod timer;

pub use timer::{Fired, TimeMs, TimerId, TimerQueue};
