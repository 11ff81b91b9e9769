pub mod async_executor;
pub mod event_bus;
pub mod log_capture;
mod search_task_manager;

pub use async_executor::AsyncExecutor;
pub use event_bus::{AppEvent, EventBus};
pub use search_task_manager::{CompletedSearch, SearchTaskManager};
