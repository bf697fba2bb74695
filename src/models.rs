pub mod chatbot_info;
pub mod delete_response;
pub mod detection;
pub mod image_input;
pub mod panel;
pub mod prediction;
pub mod scan_client;
pub mod server_config;

pub use chatbot_info::{ChatbotInfo, LOW_CONFIDENCE_ADVICE};
pub use delete_response::{DeleteReport, DeleteResponse};
pub use detection::{DetectionEntry, HistoryBoard, HistoryFilter};
pub use image_input::ImageInput;
pub use panel::{AssistantFormat, PanelState, Theme};
pub use prediction::{PredictionResult, ServerErrorBody};
pub use scan_client::LeafScanClient;
pub use server_config::ServerConfig;
