use async_trait::async_trait;
use listview_core::{
    DirectoryUser, OwnerChangeRequest, OwnerChangeResponse, OwnerChangeService, QueryRequest,
    QueryResponse, Record, RecordQueryService, ServiceError, UserDirectory,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub enum FakeQueryOutcome {
    Success(QueryResponse),
    /// The service answers with `success: false`.
    Rejected(String),
    /// The call itself fails.
    Transport(ServiceError),
}

impl FakeQueryOutcome {
    fn into_result(self) -> Result<QueryResponse, ServiceError> {
        match self {
            Self::Success(response) => Ok(response),
            Self::Rejected(message) => Ok(QueryResponse::failure(message)),
            Self::Transport(err) => Err(err),
        }
    }
}

#[derive(Default)]
struct FakeQueryState {
    scripted: Mutex<VecDeque<FakeQueryOutcome>>,
    default_outcome: Mutex<Option<FakeQueryOutcome>>,
    dataset: Mutex<Option<Vec<Record>>>,
    executed_requests: Mutex<Vec<QueryRequest>>,
}

/// Query service double.
///
/// Answers come from, in order: the scripted queue, the default outcome, the
/// paged dataset, and finally an empty successful response.
#[derive(Clone, Default)]
pub struct FakeQueryService {
    state: Arc<FakeQueryState>,
}

impl FakeQueryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `records` a page at a time according to each request.
    pub fn with_dataset(self, records: Vec<Record>) -> Self {
        *mutex_lock(&self.state.dataset) = Some(records);
        self
    }

    pub fn with_default_outcome(self, outcome: FakeQueryOutcome) -> Self {
        *mutex_lock(&self.state.default_outcome) = Some(outcome);
        self
    }

    pub fn push_outcome(&self, outcome: FakeQueryOutcome) {
        mutex_lock(&self.state.scripted).push_back(outcome);
    }

    pub fn push_response(&self, response: QueryResponse) {
        self.push_outcome(FakeQueryOutcome::Success(response));
    }

    pub fn executed_requests(&self) -> Vec<QueryRequest> {
        mutex_lock(&self.state.executed_requests).clone()
    }

    pub fn request_count(&self) -> usize {
        mutex_lock(&self.state.executed_requests).len()
    }

    pub fn last_request(&self) -> Option<QueryRequest> {
        mutex_lock(&self.state.executed_requests).last().cloned()
    }

    pub fn as_service_arc(&self) -> Arc<dyn RecordQueryService> {
        Arc::new(self.clone())
    }

    fn page_of_dataset(&self, request: &QueryRequest) -> Option<QueryResponse> {
        let dataset = mutex_lock(&self.state.dataset);
        let records = dataset.as_ref()?;

        let size = request.page_size.max(1) as usize;
        let start = (request.page_number.max(1) as usize - 1) * size;
        let page = records.iter().skip(start).take(size).cloned().collect();

        Some(QueryResponse::ok(page, records.len() as u64))
    }
}

#[async_trait]
impl RecordQueryService for FakeQueryService {
    async fn execute_query(&self, request: QueryRequest) -> Result<QueryResponse, ServiceError> {
        mutex_lock(&self.state.executed_requests).push(request.clone());

        if let Some(outcome) = mutex_lock(&self.state.scripted).pop_front() {
            return outcome.into_result();
        }

        if let Some(outcome) = mutex_lock(&self.state.default_outcome).clone() {
            return outcome.into_result();
        }

        Ok(self
            .page_of_dataset(&request)
            .unwrap_or_else(|| QueryResponse::ok(Vec::new(), 0)))
    }
}

#[derive(Default)]
struct FakeDirectoryState {
    users: Mutex<Vec<DirectoryUser>>,
    error: Mutex<Option<ServiceError>>,
    searches: Mutex<Vec<String>>,
}

/// Directory double matching names case-insensitively.
#[derive(Clone, Default)]
pub struct FakeDirectory {
    state: Arc<FakeDirectoryState>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(self, users: Vec<DirectoryUser>) -> Self {
        *mutex_lock(&self.state.users) = users;
        self
    }

    pub fn with_error(self, err: ServiceError) -> Self {
        *mutex_lock(&self.state.error) = Some(err);
        self
    }

    pub fn searches(&self) -> Vec<String> {
        mutex_lock(&self.state.searches).clone()
    }

    pub fn as_directory_arc(&self) -> Arc<dyn UserDirectory> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl UserDirectory for FakeDirectory {
    async fn search_users(&self, search_term: &str) -> Result<Vec<DirectoryUser>, ServiceError> {
        mutex_lock(&self.state.searches).push(search_term.to_string());

        if let Some(err) = mutex_lock(&self.state.error).clone() {
            return Err(err);
        }

        let needle = search_term.to_lowercase();
        Ok(mutex_lock(&self.state.users)
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[derive(Debug, Clone, Default)]
pub enum FakeOwnerChangeOutcome {
    /// Every requested record is reassigned.
    #[default]
    Success,
    Rejected(Option<String>),
    Transport(ServiceError),
}

#[derive(Default)]
struct FakeOwnerChangeState {
    outcome: Mutex<FakeOwnerChangeOutcome>,
    requests: Mutex<Vec<OwnerChangeRequest>>,
}

#[derive(Clone, Default)]
pub struct FakeOwnerChange {
    state: Arc<FakeOwnerChangeState>,
}

impl FakeOwnerChange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, outcome: FakeOwnerChangeOutcome) -> Self {
        *mutex_lock(&self.state.outcome) = outcome;
        self
    }

    pub fn requests(&self) -> Vec<OwnerChangeRequest> {
        mutex_lock(&self.state.requests).clone()
    }

    pub fn as_service_arc(&self) -> Arc<dyn OwnerChangeService> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl OwnerChangeService for FakeOwnerChange {
    async fn change_owner(
        &self,
        request: OwnerChangeRequest,
    ) -> Result<OwnerChangeResponse, ServiceError> {
        let count = request.record_ids.len() as u32;
        mutex_lock(&self.state.requests).push(request);

        match mutex_lock(&self.state.outcome).clone() {
            FakeOwnerChangeOutcome::Success => Ok(OwnerChangeResponse {
                success: true,
                success_count: count,
                error_message: None,
            }),
            FakeOwnerChangeOutcome::Rejected(message) => Ok(OwnerChangeResponse {
                success: false,
                success_count: 0,
                error_message: message,
            }),
            FakeOwnerChangeOutcome::Transport(err) => Err(err),
        }
    }
}

fn mutex_lock<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    match lock.lock() {
        Ok(guard) => guard,
        Err(poison_error) => poison_error.into_inner(),
    }
}
