//! Dashboard state holder with stale-on-error refresh and change feed.

use crossbeam_channel::Receiver;

use relmap_core::entity::{Disaster, NewDisaster, NewReport, Report, Resource, SocialPost};
use relmap_core::BackendError;

use crate::client::{BackendClient, ChangeEvent, ChangeKind};
use crate::sample::sample_resources;

/// A user-facing notice raised by the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Short heading, e.g. `New Disaster Alert`.
    pub title: String,
    /// One-line detail text.
    pub detail: String,
}

/// Headline counts shown above the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    /// All disaster records.
    pub total: usize,
    /// Records with status `active`.
    pub active: usize,
    /// Records with status `monitoring`.
    pub monitoring: usize,
}

/// In-memory dashboard state over a [`BackendClient`].
///
/// Refreshes replace a list wholesale on success. On failure the prior
/// list stays untouched and a notice is queued instead; there are no
/// retries. Change events only trigger a refetch, never an in-place
/// patch.
pub struct Dashboard<C: BackendClient> {
    client: C,
    disasters: Vec<Disaster>,
    resources: Vec<Resource>,
    reports: Vec<Report>,
    posts: Vec<SocialPost>,
    notices: Vec<Notice>,
    disaster_changes: Receiver<ChangeEvent>,
}

impl<C: BackendClient> Dashboard<C> {
    /// Wrap a client and subscribe to the disaster change feed.
    pub fn new(mut client: C) -> Self {
        let disaster_changes = client.subscribe("disasters");
        Self {
            client,
            disasters: Vec::new(),
            resources: Vec::new(),
            reports: Vec::new(),
            posts: Vec::new(),
            notices: Vec::new(),
            disaster_changes,
        }
    }

    /// Current disaster list, newest first.
    pub fn disasters(&self) -> &[Disaster] {
        &self.disasters
    }

    /// Current resource list, newest first.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Current report list, newest first.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Current social-signal list, newest first.
    pub fn posts(&self) -> &[SocialPost] {
        &self.posts
    }

    /// Headline disaster counts.
    pub fn stats(&self) -> DashboardStats {
        let count = |status: &str| {
            self.disasters.iter().filter(|d| d.status == status).count()
        };
        DashboardStats {
            total: self.disasters.len(),
            active: count("active"),
            monitoring: count("monitoring"),
        }
    }

    /// Drain queued notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Refresh every list.
    pub fn refresh_all(&mut self) {
        self.refresh_disasters();
        self.refresh_resources();
        self.refresh_reports();
        self.refresh_posts();
    }

    /// Refetch the disaster list; stale state survives failure.
    pub fn refresh_disasters(&mut self) {
        match self.client.fetch_disasters() {
            Ok(rows) => self.disasters = rows,
            Err(err) => self.notice_error("disasters", &err),
        }
    }

    /// Refetch the resource list; stale state survives failure.
    ///
    /// An empty backend table falls back to the built-in samples so a
    /// fresh deployment still shows a populated map.
    pub fn refresh_resources(&mut self) {
        match self.client.fetch_resources() {
            Ok(rows) if rows.is_empty() => self.resources = sample_resources(),
            Ok(rows) => self.resources = rows,
            Err(err) => self.notice_error("resources", &err),
        }
    }

    /// Refetch the report list; stale state survives failure.
    pub fn refresh_reports(&mut self) {
        match self.client.fetch_reports() {
            Ok(rows) => self.reports = rows,
            Err(err) => self.notice_error("reports", &err),
        }
    }

    /// Refetch the social-signal list; stale state survives failure.
    pub fn refresh_posts(&mut self) {
        match self.client.fetch_posts() {
            Ok(rows) => self.posts = rows,
            Err(err) => self.notice_error("social signals", &err),
        }
    }

    /// Insert a disaster and refresh the list on success.
    pub fn submit_disaster(&mut self, record: NewDisaster) -> Result<Disaster, BackendError> {
        let stored = self.client.insert_disaster(record)?;
        self.refresh_disasters();
        Ok(stored)
    }

    /// Insert a field report and refresh the list on success.
    pub fn submit_report(&mut self, record: NewReport) -> Result<Report, BackendError> {
        let stored = self.client.insert_report(record)?;
        self.refresh_reports();
        Ok(stored)
    }

    /// Drain the disaster change feed.
    ///
    /// Each insert queues a `New Disaster Alert` notice built from the
    /// raw row; any drained event triggers one refetch at the end.
    pub fn poll_changes(&mut self) {
        let mut saw_change = false;
        while let Ok(event) = self.disaster_changes.try_recv() {
            saw_change = true;
            if event.kind == ChangeKind::Insert {
                self.notices.push(insert_alert(&event));
            }
        }
        if saw_change {
            self.refresh_disasters();
        }
    }

    fn notice_error(&mut self, what: &str, err: &BackendError) {
        self.notices.push(Notice {
            title: "Error".to_string(),
            detail: format!("Failed to fetch {what}: {err}"),
        });
    }
}

/// Alert notice for an inserted disaster row.
fn insert_alert(event: &ChangeEvent) -> Notice {
    let field = |key: &str| -> Option<&str> {
        event.row.as_ref()?.get(key)?.as_str()
    };
    let title = field("title").unwrap_or("Unknown disaster");
    let location = field("location_name").unwrap_or("unknown location");
    Notice {
        title: "New Disaster Alert".to_string(),
        detail: format!("{title} reported in {location}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{unbounded, Sender};
    use relmap_test_utils::fixtures::{disaster_at, resource_at};

    /// Canned client: preloaded rows, per-table failure injection, and
    /// a handle to push change events.
    struct CannedClient {
        disasters: Vec<Disaster>,
        resources: Vec<Resource>,
        fail_disasters: bool,
        changes_rx: Option<Receiver<ChangeEvent>>,
    }

    impl CannedClient {
        fn new() -> (Self, Sender<ChangeEvent>) {
            let (tx, rx) = unbounded();
            let client = Self {
                disasters: Vec::new(),
                resources: Vec::new(),
                fail_disasters: false,
                changes_rx: Some(rx),
            };
            (client, tx)
        }
    }

    impl BackendClient for CannedClient {
        fn fetch_disasters(&mut self) -> Result<Vec<Disaster>, BackendError> {
            if self.fail_disasters {
                return Err(BackendError::Unavailable {
                    reason: "connection refused".to_string(),
                });
            }
            Ok(self.disasters.clone())
        }

        fn fetch_resources(&mut self) -> Result<Vec<Resource>, BackendError> {
            Ok(self.resources.clone())
        }

        fn fetch_reports(&mut self) -> Result<Vec<Report>, BackendError> {
            Ok(Vec::new())
        }

        fn fetch_posts(&mut self) -> Result<Vec<SocialPost>, BackendError> {
            Ok(Vec::new())
        }

        fn insert_disaster(&mut self, record: NewDisaster) -> Result<Disaster, BackendError> {
            let mut stored = disaster_at("inserted", 0.0, 0.0);
            stored.title = record.title;
            self.disasters.insert(0, stored.clone());
            Ok(stored)
        }

        fn insert_report(&mut self, _record: NewReport) -> Result<Report, BackendError> {
            Err(BackendError::Rejected {
                reason: "reports disabled".to_string(),
            })
        }

        fn subscribe(&mut self, _table: &str) -> Receiver<ChangeEvent> {
            self.changes_rx.take().expect("subscribe called twice")
        }
    }

    #[test]
    fn failed_refresh_keeps_stale_list_and_queues_notice() {
        let (mut client, _tx) = CannedClient::new();
        client.disasters = vec![disaster_at("d-0", 1.0, 1.0)];
        let mut dash = Dashboard::new(client);
        dash.refresh_disasters();
        assert_eq!(dash.disasters().len(), 1);

        dash.client.fail_disasters = true;
        dash.refresh_disasters();
        assert_eq!(dash.disasters().len(), 1);
        let notices = dash.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].detail.contains("connection refused"));
    }

    #[test]
    fn empty_resource_table_falls_back_to_samples() {
        let (client, _tx) = CannedClient::new();
        let mut dash = Dashboard::new(client);
        dash.refresh_resources();
        assert_eq!(dash.resources().len(), 3);
        assert_eq!(dash.resources()[0].name, "Red Cross Emergency Shelter");

        dash.client.resources = vec![resource_at("r-0", 1.0, 1.0, "food")];
        dash.refresh_resources();
        assert_eq!(dash.resources().len(), 1);
    }

    #[test]
    fn stats_count_by_status() {
        let (mut client, _tx) = CannedClient::new();
        let mut monitoring = disaster_at("d-1", 1.0, 1.0);
        monitoring.status = "monitoring".to_string();
        client.disasters = vec![disaster_at("d-0", 1.0, 1.0), monitoring];
        let mut dash = Dashboard::new(client);
        dash.refresh_disasters();

        let stats = dash.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.monitoring, 1);
    }

    #[test]
    fn insert_event_queues_alert_and_refetches() {
        let (client, tx) = CannedClient::new();
        let mut dash = Dashboard::new(client);

        dash.client.disasters = vec![disaster_at("d-0", 1.0, 1.0)];
        tx.send(ChangeEvent {
            table: "disasters".to_string(),
            kind: ChangeKind::Insert,
            row: Some(serde_json::json!({
                "title": "NYC Flood",
                "location_name": "Manhattan, NYC"
            })),
        })
        .unwrap();

        dash.poll_changes();
        assert_eq!(dash.disasters().len(), 1);
        let notices = dash.take_notices();
        assert_eq!(notices[0].title, "New Disaster Alert");
        assert_eq!(notices[0].detail, "NYC Flood reported in Manhattan, NYC");
    }

    #[test]
    fn update_event_refetches_without_alert() {
        let (client, tx) = CannedClient::new();
        let mut dash = Dashboard::new(client);
        dash.client.disasters = vec![disaster_at("d-0", 1.0, 1.0)];

        tx.send(ChangeEvent {
            table: "disasters".to_string(),
            kind: ChangeKind::Update,
            row: None,
        })
        .unwrap();
        dash.poll_changes();

        assert_eq!(dash.disasters().len(), 1);
        assert!(dash.take_notices().is_empty());
    }
}
