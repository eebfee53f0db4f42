use std::sync::Arc;

use dashboard_core::{
    Notification, NotificationLevel, Notifier, PAGE_SIZE_OPTIONS, Page, PageSizeOption,
    PaginationEngine, PaginationError,
};
use dashboard_loader::{DataSource, RecordLoader, parse_records};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::error::ServiceError;

fn offered_page_size(size: usize) -> Result<PageSizeOption, ServiceError> {
    PageSizeOption::parse(size).ok_or_else(|| {
        ServiceError::InvalidInput(format!("page size {size} is not one of {PAGE_SIZE_OPTIONS:?}"))
    })
}

/// Record bounds shared by every paginated collection.
pub trait CollectionRecord: DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> CollectionRecord for T where T: DeserializeOwned + Clone + Send + Sync + 'static {}

/// One dashboard view: a JSON document, its pagination state and the
/// notification shown when loading fails.
///
/// All mutations go through the write half of one `RwLock`, so page requests
/// are applied one at a time and readers always see the last completed write.
pub struct CollectionService<T> {
    name: &'static str,
    source: DataSource,
    failure_message: &'static str,
    loader: Arc<dyn RecordLoader>,
    notifier: Arc<dyn Notifier>,
    transform: Option<fn(T) -> T>,
    engine: RwLock<PaginationEngine<T>>,
}

impl<T: CollectionRecord> CollectionService<T> {
    pub fn new(
        name: &'static str,
        source: DataSource,
        failure_message: &'static str,
        loader: Arc<dyn RecordLoader>,
        notifier: Arc<dyn Notifier>,
        page_size: PageSizeOption,
    ) -> Self {
        let engine = PaginationEngine::new(page_size.get()).unwrap_or_default();
        Self {
            name,
            source,
            failure_message,
            loader,
            notifier,
            transform: None,
            engine: RwLock::new(engine),
        }
    }

    /// Applies `transform` to every record after a successful load.
    #[must_use]
    pub fn with_transform(mut self, transform: fn(T) -> T) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Fetches the document and replaces the collection, returning page 1.
    ///
    /// On failure the user is notified exactly once, the collection is left
    /// empty and the load error is returned.
    pub async fn reload(&self) -> Result<Page<T>, ServiceError> {
        let loaded = match self.loader.fetch_text(&self.source).await {
            Ok(body) => parse_records::<T>(&body, &self.source.to_string()),
            Err(e) => Err(e),
        };

        let mut engine = self.engine.write().await;
        match loaded {
            Ok(records) => {
                let records = match self.transform {
                    Some(transform) => records.into_iter().map(transform).collect(),
                    None => records,
                };
                engine.load(records);
                tracing::info!(
                    collection = self.name,
                    source = %self.source,
                    items = engine.len(),
                    total_pages = engine.total_pages(),
                    "collection loaded"
                );
                Ok(engine.current().to_owned_page())
            },
            Err(e) => {
                engine.load(Vec::new());
                drop(engine);
                tracing::error!(
                    collection = self.name,
                    source = %self.source,
                    malformed = e.is_malformed(),
                    error = %e,
                    "failed to load collection"
                );
                self.notifier.notify(Notification::error(self.failure_message));
                Err(e.into())
            },
        }
    }

    pub async fn current(&self) -> Page<T> {
        self.engine.read().await.current().to_owned_page()
    }

    pub async fn go_to_page(&self, page: usize) -> Result<Page<T>, ServiceError> {
        let mut engine = self.engine.write().await;
        Ok(engine.go_to_page(page)?.to_owned_page())
    }

    pub async fn next_page(&self) -> Result<Page<T>, ServiceError> {
        let mut engine = self.engine.write().await;
        Ok(engine.next_page()?.to_owned_page())
    }

    pub async fn previous_page(&self) -> Result<Page<T>, ServiceError> {
        let mut engine = self.engine.write().await;
        Ok(engine.previous_page()?.to_owned_page())
    }

    /// Only the sizes offered by the page-size selector are accepted here.
    pub async fn set_page_size(&self, size: usize) -> Result<Page<T>, ServiceError> {
        let option = offered_page_size(size)?;
        let mut engine = self.engine.write().await;
        let previous_size = engine.page_size();
        let current = engine.set_page_size(option.get())?.to_owned_page();
        drop(engine);

        self.announce_page_size(previous_size, current.page_size);
        Ok(current)
    }

    fn announce_page_size(&self, previous: usize, current: usize) {
        if previous != current {
            tracing::debug!(collection = self.name, previous, current, "page size changed");
            self.notifier.notify(Notification::new(
                NotificationLevel::Info,
                format!("Showing {current} items per page"),
            ));
        }
    }

    /// Applies an optional page size, then an optional page, under one write lock.
    ///
    /// The page is checked against the page count of the requested size before
    /// anything changes, so a rejected request leaves both untouched.
    pub async fn view(
        &self,
        page: Option<usize>,
        page_size: Option<usize>,
    ) -> Result<Page<T>, ServiceError> {
        let option = page_size.map(offered_page_size).transpose()?;

        let mut engine = self.engine.write().await;
        if let Some(page) = page {
            let size = option.map_or(engine.page_size(), PageSizeOption::get);
            let total_pages = engine.len().div_ceil(size);
            if page < 1 || page > total_pages {
                tracing::warn!(
                    collection = self.name,
                    page,
                    page_size = size,
                    total_pages,
                    "page request out of range"
                );
                return Err(PaginationError::OutOfRange { page, total_pages }.into());
            }
        }
        let previous_size = engine.page_size();
        if let Some(option) = option {
            engine.set_page_size(option.get())?;
        }
        if let Some(page) = page {
            engine.go_to_page(page)?;
        }
        let current = engine.current().to_owned_page();
        drop(engine);

        self.announce_page_size(previous_size, current.page_size);
        Ok(current)
    }

    /// Clone of every loaded record, in load order.
    pub async fn all(&self) -> Vec<T> {
        self.engine.read().await.items().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.engine.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.engine.read().await.is_empty()
    }
}
