use super::{LOAD_ERROR_FALLBACK, ListView, LoadState};
use crate::query::{QueryParams, QueryRequest, QueryResponse};
use crate::{ListViewError, Record, RecordSet, ServiceError};
use log::{debug, error, info};
use tokio::time::Instant;

/// Handle for one issued fetch. Only the most recently issued ticket may
/// update the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    request: QueryRequest,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn request(&self) -> &QueryRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { records: usize, total: u64 },

    /// A newer fetch was issued before this one completed; its result was
    /// dropped.
    Stale,

    /// Nothing changed, so no fetch was issued.
    Skipped,
}

impl ListView {
    pub fn query_params(&self) -> QueryParams {
        QueryParams {
            search_term: self.search_term.clone(),
            sort_field: self.sort.field().map(str::to_string),
            sort_direction: self.sort.direction(),
            page: self.pagination.current_page(),
            page_size: self.pagination.page_size(),
            filters: self.filters.active().clone(),
            scope_record_id: self.scope_record_id.clone(),
            bypass_sharing: self.config.bypass_sharing,
        }
    }

    /// Issue a fetch for the current parameters and mark the view loading.
    ///
    /// Fails with [`ListViewError::MissingQuery`] when no query is configured;
    /// the error is also shown in the view and nothing is fetched.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, ListViewError> {
        if !self.config.has_query() {
            let err = ListViewError::MissingQuery;
            self.load_state = LoadState::Error(err.to_string());
            return Err(err);
        }

        self.latest_fetch += 1;
        self.load_state = LoadState::Loading;

        let request = self.query_params().into_request(self.config.query.clone());
        debug!(
            "Fetch #{} page {} (size {}), sort {:?} {}",
            self.latest_fetch,
            request.page_number,
            request.page_size,
            self.sort.field(),
            request.sort_direction.as_str()
        );

        Ok(FetchTicket {
            seq: self.latest_fetch,
            request,
        })
    }

    /// Apply the result of `ticket`. Results of superseded tickets are ignored
    /// and leave records, error and loading state untouched.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<QueryResponse, ServiceError>,
    ) -> Result<FetchOutcome, ListViewError> {
        if ticket.seq != self.latest_fetch {
            debug!(
                "Ignoring stale fetch #{} (latest is #{})",
                ticket.seq, self.latest_fetch
            );
            return Ok(FetchOutcome::Stale);
        }

        match result {
            Ok(response) if response.success => {
                let records = response.records.len();
                let total = response.total_count;

                self.records = RecordSet::from(response.records);
                self.field_metadata = response.field_metadata;
                self.pagination.set_total_records(total);
                self.selection.refresh_page_state(&self.records);
                self.load_state = LoadState::Idle;

                info!("Loaded {} of {} records", records, total);
                Ok(FetchOutcome::Loaded { records, total })
            }
            Ok(response) => {
                let message = response
                    .error_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| LOAD_ERROR_FALLBACK.to_string());

                error!("Query service rejected the query: {}", message);
                self.fail(message.clone());
                Err(ListViewError::Service(message))
            }
            Err(err) => {
                error!("Query service call failed: {}", err);
                self.fail(err.user_message());
                Err(ListViewError::Transport(err))
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.records = RecordSet::from(Vec::new());
        self.pagination.set_total_records(0);
        self.selection.refresh_page_state(&self.records);
        self.load_state = LoadState::Error(message);
    }

    /// Fetch the current parameters and apply the result.
    pub async fn refresh(&mut self) -> Result<FetchOutcome, ListViewError> {
        let ticket = self.begin_fetch()?;
        let query = self.services.query.clone();
        let result = query.execute_query(ticket.request().clone()).await;
        self.finish_fetch(ticket, result)
    }

    /// Record a search keystroke; the term is committed once typing settles.
    pub fn on_search_input(&mut self, value: &str) {
        self.search_input.schedule(value.to_string());
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_input.deadline()
    }

    /// Wait out the search debounce and commit the last keystroke.
    pub async fn settle_search(&mut self) -> Result<FetchOutcome, ListViewError> {
        match self.search_input.settled().await {
            Some(value) => self.commit_search(value).await,
            None => Ok(FetchOutcome::Skipped),
        }
    }

    /// Commit the pending search only if its quiet period already elapsed.
    pub async fn poll_search(&mut self) -> Result<FetchOutcome, ListViewError> {
        match self.search_input.take_if_due() {
            Some(value) => self.commit_search(value).await,
            None => Ok(FetchOutcome::Skipped),
        }
    }

    async fn commit_search(&mut self, value: String) -> Result<FetchOutcome, ListViewError> {
        if value == self.search_term {
            debug!("Search term unchanged, skipping fetch");
            return Ok(FetchOutcome::Skipped);
        }

        debug!("Committing search term '{}'", value);
        self.search_term = value;
        self.pagination.reset();
        self.refresh().await
    }

    /// Sort by `field`, or flip the direction if it is already the sort field.
    pub async fn sort_by(&mut self, field: &str) -> Result<FetchOutcome, ListViewError> {
        if !self.config.allow_user_sort {
            debug!("User sorting is disabled, ignoring sort on '{}'", field);
            return Ok(FetchOutcome::Skipped);
        }

        if self
            .field_metadata
            .get(field)
            .is_some_and(|m| !m.is_sortable())
        {
            debug!("Field '{}' is not sortable", field);
            return Ok(FetchOutcome::Skipped);
        }

        self.sort.toggle(field);
        self.pagination.reset();
        self.refresh().await
    }

    /// Replace the selected values for one quick filter.
    pub async fn set_filter(
        &mut self,
        field: &str,
        values: Vec<String>,
    ) -> Result<FetchOutcome, ListViewError> {
        self.filters.set_filter(field, values)?;
        self.pagination.reset();
        self.refresh().await
    }

    pub async fn set_filter_option(
        &mut self,
        field: &str,
        value: &str,
        checked: bool,
    ) -> Result<FetchOutcome, ListViewError> {
        if field.is_empty() || value.is_empty() {
            return Ok(FetchOutcome::Skipped);
        }

        self.filters.set_option(field, value, checked)?;
        self.pagination.reset();
        self.refresh().await
    }

    pub async fn clear_filter(&mut self, field: &str) -> Result<FetchOutcome, ListViewError> {
        self.set_filter(field, Vec::new()).await
    }

    pub async fn clear_all_filters(&mut self) -> Result<FetchOutcome, ListViewError> {
        self.filters.clear_all();
        self.pagination.reset();
        self.refresh().await
    }

    pub async fn first_page(&mut self) -> Result<FetchOutcome, ListViewError> {
        self.pagination.first();
        self.refresh().await
    }

    pub async fn previous_page(&mut self) -> Result<FetchOutcome, ListViewError> {
        if !self.pagination.previous() {
            return Ok(FetchOutcome::Skipped);
        }
        self.refresh().await
    }

    pub async fn next_page(&mut self) -> Result<FetchOutcome, ListViewError> {
        if !self.pagination.next() {
            return Ok(FetchOutcome::Skipped);
        }
        self.refresh().await
    }

    pub async fn last_page(&mut self) -> Result<FetchOutcome, ListViewError> {
        self.pagination.last();
        self.refresh().await
    }

    /// Fetch every record matching the current parameters in one page, for
    /// export. Returns an empty list when there is nothing to fetch or the
    /// service rejects the query.
    pub async fn fetch_full_result(&mut self) -> Result<Vec<Record>, ListViewError> {
        let total = self.pagination.total_records();
        if total == 0 {
            return Ok(Vec::new());
        }

        if !self.config.has_query() {
            return Err(ListViewError::MissingQuery);
        }

        let mut params = self.query_params();
        params.page = 1;
        params.page_size = u32::try_from(total).unwrap_or(u32::MAX);
        let request = params.into_request(self.config.query.clone());

        info!("Fetching all {} records for export", total);

        let previous = std::mem::replace(&mut self.load_state, LoadState::Loading);
        let query = self.services.query.clone();
        let result = query.execute_query(request).await;
        self.load_state = previous;

        match result {
            Ok(response) if response.success => Ok(response.records),
            Ok(response) => {
                log::warn!(
                    "Full export fetch rejected: {}",
                    response.error_message.as_deref().unwrap_or("no message")
                );
                Ok(Vec::new())
            }
            Err(err) => {
                error!("Full export fetch failed: {}", err);
                Err(ListViewError::Transport(err))
            }
        }
    }
}
