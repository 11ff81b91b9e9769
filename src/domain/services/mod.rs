pub mod change_detector;
pub mod download_name;
pub mod ranked_time;
pub mod request_builder;

pub use change_detector::ChangeDetector;
pub use download_name::{INITIAL_DOWNLOAD_NAME, download_file_name};
pub use ranked_time::{RankedRegion, RankedStatus, check_ranked_time};
pub use request_builder::{SearchMode, build_request_body};
