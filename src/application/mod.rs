pub mod search_session;
pub mod use_case_container;
pub mod use_cases;

pub use search_session::{SearchRequest, SearchSession, SearchTicket};
pub use use_case_container::UseCaseContainer;
