pub mod search_operations;
pub mod song_list_operations;

pub use search_operations::*;
pub use song_list_operations::*;
