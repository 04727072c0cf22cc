//! The `BackendClient` trait and change-feed events.

use crossbeam_channel::Receiver;

use relmap_core::entity::{Disaster, NewDisaster, NewReport, Report, Resource, SocialPost};
use relmap_core::BackendError;

/// Kind of a row change pushed over a table subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    /// A row was inserted.
    Insert,
    /// A row was updated.
    Update,
    /// A row was deleted.
    Delete,
}

/// One change pushed over a table subscription.
///
/// The row payload is kept as raw JSON: the shell only peeks at
/// individual keys (e.g. the title for an alert notice) and refetches
/// the full list rather than patching state from the event.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeEvent {
    /// Source table name.
    pub table: String,
    /// What happened to the row.
    pub kind: ChangeKind,
    /// The new row, for inserts and updates.
    pub row: Option<serde_json::Value>,
}

/// Client surface of the hosted data backend.
///
/// Fetches return full table contents ordered newest first. Errors are
/// not retried here; callers decide what to do with stale state.
pub trait BackendClient {
    /// Fetch all disaster records, newest first.
    fn fetch_disasters(&mut self) -> Result<Vec<Disaster>, BackendError>;

    /// Fetch all resource records, newest first.
    fn fetch_resources(&mut self) -> Result<Vec<Resource>, BackendError>;

    /// Fetch all field reports, newest first.
    fn fetch_reports(&mut self) -> Result<Vec<Report>, BackendError>;

    /// Fetch all social-media signals, newest first.
    fn fetch_posts(&mut self) -> Result<Vec<SocialPost>, BackendError>;

    /// Insert a disaster record, returning the stored row.
    fn insert_disaster(&mut self, record: NewDisaster) -> Result<Disaster, BackendError>;

    /// Insert a field report, returning the stored row.
    fn insert_report(&mut self, record: NewReport) -> Result<Report, BackendError>;

    /// Subscribe to row changes on `table`.
    ///
    /// Events accumulate in the channel until drained; the shell drains
    /// from its poll loop.
    fn subscribe(&mut self, table: &str) -> Receiver<ChangeEvent>;
}
