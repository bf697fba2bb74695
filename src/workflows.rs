pub mod history;
pub mod presenter;
pub mod render;

pub use history::{DeleteOutcome, delete_detection};
pub use presenter::{CONFIDENCE_THRESHOLD, ResultPresenter};
pub use render::{RequestToken, ResultPanel, View};
