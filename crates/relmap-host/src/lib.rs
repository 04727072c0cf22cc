//! Host shell for the relmap mapping stack.
//!
//! Everything the dashboard application needs around the rendering
//! core: the [`BackendClient`] trait over the hosted data backend, the
//! stale-on-error [`Dashboard`] state holder with its change feed, the
//! map credential store, resource filtering, report/disaster form
//! drafts, feed presentation helpers, and the map legend model.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod client;
pub mod credential;
pub mod dashboard;
pub mod feed;
pub mod filter;
pub mod form;
pub mod legend;
pub mod sample;

pub use client::{BackendClient, ChangeEvent, ChangeKind};
pub use credential::{resolve, CredentialStore, FileCredentialStore, MapAccess, MapCredential};
pub use dashboard::{Dashboard, DashboardStats, Notice};
pub use feed::{format_time_ago, is_urgent, priority_badge, BadgeKind};
pub use filter::ResourceFilter;
pub use form::{DisasterDraft, ReportDraft, ValidationError, COMMON_TAGS};
pub use legend::{legend_sections, LegendEntry, LegendSection};
pub use sample::sample_resources;
