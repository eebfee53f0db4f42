use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use dashboard_core::{
    CalendarEvent, DashboardConfig, EVENTS_LOAD_FAILED, EVENTS_RESOURCE, FILES_LOAD_FAILED,
    FILES_RESOURCE, FileRecord, Notifier, RESULTS_LOAD_FAILED, RESULTS_RESOURCE, ResultRecord,
};
use dashboard_loader::{DataLoader, DataSource, RecordLoader};

use crate::collection_service::CollectionService;
use crate::error::ServiceError;

/// The three views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Results,
    Files,
    Events,
}

impl Collection {
    pub const ALL: [Self; 3] = [Self::Results, Self::Files, Self::Events];

    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Results => "results",
            Self::Files => "files",
            Self::Events => "events",
        }
    }

    pub const fn resource(&self) -> &'static str {
        match *self {
            Self::Results => RESULTS_RESOURCE,
            Self::Files => FILES_RESOURCE,
            Self::Events => EVENTS_RESOURCE,
        }
    }

    pub const fn failure_message(&self) -> &'static str {
        match *self {
            Self::Results => RESULTS_LOAD_FAILED,
            Self::Files => FILES_LOAD_FAILED,
            Self::Events => EVENTS_LOAD_FAILED,
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "results" => Ok(Self::Results),
            "files" => Ok(Self::Files),
            "events" => Ok(Self::Events),
            _ => Err(ServiceError::InvalidInput(format!("unknown collection: {s}"))),
        }
    }
}

/// Per-collection outcome of [`Dashboard::reload_all`].
#[derive(Debug)]
pub struct ReloadReport {
    pub results: Result<usize, ServiceError>,
    pub files: Result<usize, ServiceError>,
    pub events: Result<usize, ServiceError>,
}

impl ReloadReport {
    pub fn failures(&self) -> usize {
        [self.results.is_err(), self.files.is_err(), self.events.is_err()]
            .into_iter()
            .filter(|failed| *failed)
            .count()
    }
}

/// Results list, file gallery and calendar events, each loaded from its own
/// JSON document under one data source.
pub struct Dashboard {
    pub results: CollectionService<ResultRecord>,
    pub files: CollectionService<FileRecord>,
    pub events: CollectionService<CalendarEvent>,
}

impl Dashboard {
    pub fn new(
        data: &DataSource,
        config: &DashboardConfig,
        loader: Arc<dyn RecordLoader>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let service = |collection: Collection| {
            (collection.as_str(), data.resolve(collection.resource()), collection.failure_message())
        };

        let (name, source, failure) = service(Collection::Results);
        let results = CollectionService::new(
            name,
            source,
            failure,
            Arc::clone(&loader),
            Arc::clone(&notifier),
            config.page_size,
        );

        let (name, source, failure) = service(Collection::Files);
        let files = CollectionService::new(
            name,
            source,
            failure,
            Arc::clone(&loader),
            Arc::clone(&notifier),
            config.page_size,
        );

        let (name, source, failure) = service(Collection::Events);
        let events =
            CollectionService::new(name, source, failure, loader, notifier, config.page_size)
                .with_transform(CalendarEvent::normalize);

        Self { results, files, events }
    }

    /// Builds the HTTP/file loader from `config` and wires all three collections.
    pub fn from_config(
        config: &DashboardConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ServiceError> {
        let loader = DataLoader::new(Duration::from_secs(config.http_timeout_secs))?;
        let data = DataSource::parse(&config.data);
        Ok(Self::new(&data, config, Arc::new(loader), notifier))
    }

    /// Loads every collection concurrently; each failure is notified on its own.
    pub async fn reload_all(&self) -> ReloadReport {
        let (results, files, events) =
            tokio::join!(self.results.reload(), self.files.reload(), self.events.reload());
        let report = ReloadReport {
            results: results.map(|page| page.total_items),
            files: files.map(|page| page.total_items),
            events: events.map(|page| page.total_items),
        };
        tracing::info!(failures = report.failures(), "dashboard reload finished");
        report
    }

    /// Normalized events touching any day in `from..=to`, in load order.
    pub async fn events_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CalendarEvent>, ServiceError> {
        if from > to {
            return Err(ServiceError::InvalidInput(format!(
                "range start {from} is after range end {to}"
            )));
        }
        let events = self.events.all().await;
        tracing::debug!(%from, %to, total = events.len(), "filtering events by range");
        Ok(events.into_iter().filter(|event| event.overlaps(from, to)).collect())
    }
}
