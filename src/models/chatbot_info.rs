use serde::{Deserialize, Serialize};

/// Fallback shown instead of an info request when the model is unsure.
pub const LOW_CONFIDENCE_ADVICE: &str = "The model is not confident in this prediction. This may not be a plant leaf, or the image could be blurry. Please try again with a clearer picture of a single leaf.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChatbotInfo {
    pub gemini_success: bool,
    pub chatbot_response: String,
}

impl ChatbotInfo {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            gemini_success: false,
            chatbot_response: message.into(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct InfoRequest<'a> {
    pub prediction: &'a str,
}
