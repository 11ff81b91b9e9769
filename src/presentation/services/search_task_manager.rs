use crate::application::SearchTicket;
use crate::application::use_cases::RunSearchRequest;
use crate::domain::entities::SongList;
use crate::domain::errors::SearchError;
use crate::presentation::services::AsyncExecutor;
use std::sync::{Arc, Mutex, TryLockError};
use std::thread;
use std::time::{Duration, Instant};

type ResultSlot = Arc<Mutex<Option<Result<SongList, SearchError>>>>;

struct PendingSearch {
    sequence: u64,
    result: ResultSlot,
    started_at: Instant,
}

pub struct CompletedSearch {
    pub sequence: u64,
    pub result: Result<SongList, SearchError>,
    pub elapsed: Duration,
}

/// Tracks searches running on worker threads.
///
/// Superseded requests are left to finish; their results still come out of
/// `poll` and are filtered by sequence number upstream.
pub struct SearchTaskManager {
    pending: Vec<PendingSearch>,
}

impl SearchTaskManager {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn dispatch(
        &mut self,
        ticket: SearchTicket,
        use_case: Arc<RunSearchRequest>,
        executor: AsyncExecutor,
    ) {
        let result: ResultSlot = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&result);
        let sequence = ticket.sequence;
        self.track(sequence, result);

        thread::spawn(move || {
            tracing::debug!("Search worker started for request #{}", sequence);
            let outcome = executor.execute(async move { use_case.execute(&ticket.request).await });

            match slot.lock() {
                Ok(mut guard) => *guard = Some(outcome),
                Err(e) => tracing::error!("Failed to store search result #{}: {}", sequence, e),
            }
        });
    }

    pub fn track(&mut self, sequence: u64, result: ResultSlot) {
        self.pending.push(PendingSearch {
            sequence,
            result,
            started_at: Instant::now(),
        });
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn poll(&mut self) -> Vec<CompletedSearch> {
        let mut completed = Vec::new();
        let mut still_pending = Vec::new();

        for task in self.pending.drain(..) {
            let finished = match task.result.try_lock() {
                Ok(mut guard) => guard.take(),
                Err(TryLockError::Poisoned(poisoned)) => {
                    tracing::warn!("Result slot for search #{} was poisoned", task.sequence);
                    poisoned.into_inner().take()
                }
                Err(TryLockError::WouldBlock) => None,
            };

            match finished {
                Some(result) => {
                    let elapsed = task.started_at.elapsed();
                    tracing::debug!("Search #{} finished in {:?}", task.sequence, elapsed);
                    completed.push(CompletedSearch {
                        sequence: task.sequence,
                        result,
                        elapsed,
                    });
                }
                None => still_pending.push(task),
            }
        }

        self.pending = still_pending;
        completed.sort_by_key(|search| search.sequence);
        completed
    }
}

impl Default for SearchTaskManager {
    fn default() -> Self {
        Self::new()
    }
}
