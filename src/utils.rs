pub mod helpers;
pub mod logger;
pub mod macros;

pub use helpers::{get_content_type, to_data_url};
pub use logger::init_tracing;
