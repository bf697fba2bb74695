use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::labels::Labels;
use crate::models::{AssistantFormat, ChatbotInfo, LOW_CONFIDENCE_ADVICE, PanelState, Theme};

pub const ERROR_CROP: &str = "Error";
pub const ERROR_DISEASE: &str = "Analysis Failed";
pub const ERROR_CONFIDENCE: &str = "N/A";
pub const LOW_CONFIDENCE_CROP: &str = "Unknown Image";
pub const LOW_CONFIDENCE_DISEASE: &str = "Please use a clearer image.";
pub const LOW_CONFIDENCE_NOTE: &str = "(Low Confidence)";
pub const INFO_PENDING: &str = "Contacting AI assistant for more information...";

/// Identifies one submission. Later submissions get larger tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// What a workflow step wants the panel to show.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Loading { file_name: String },
    Failed { message: String },
    LowConfidence { confidence: f64, image_url: String },
    Matched { labels: Labels, confidence: f64, image_url: String },
    Info(ChatbotInfo),
}

#[derive(Debug, Default)]
struct PanelInner {
    latest: u64,
    state: PanelState,
}

/// The result panel. All writes go through [`ResultPanel::render`], and only
/// views carrying the latest token are applied.
#[derive(Debug, Default)]
pub struct ResultPanel {
    inner: Mutex<PanelInner>,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token and switch the panel to loading.
    pub fn begin(&self, file_name: String) -> RequestToken {
        let mut inner = self.lock();
        inner.latest += 1;
        let token = RequestToken(inner.latest);
        apply(&mut inner.state, View::Loading { file_name });
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.lock().latest == token.0
    }

    /// Apply `view` if `token` is still the latest; returns whether it was.
    pub fn render(&self, token: RequestToken, view: View) -> bool {
        let mut inner = self.lock();
        if inner.latest != token.0 {
            debug!(token = token.0, latest = inner.latest, "Dropping stale render");
            return false;
        }
        apply(&mut inner.state, view);
        true
    }

    pub fn snapshot(&self) -> PanelState {
        self.lock().state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PanelInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Two decimals with exact ties rounded away from zero, so `92.125`
/// reads `92.13%` rather than the ties-to-even `92.12%`.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", round_ties_away(confidence))
}

fn round_ties_away(value: f64) -> f64 {
    let thousandths = (value * 1000.0).round();
    // fused multiply-add is exact here: zero only if value is thousandths/1000 exactly
    let exact = value.mul_add(1000.0, -thousandths) == 0.0;
    if exact && thousandths.rem_euclid(10.0) == 5.0 {
        (thousandths + 5.0 * thousandths.signum()) / 1000.0
    } else {
        value
    }
}

pub(crate) fn apply(state: &mut PanelState, view: View) {
    match view {
        View::Loading { file_name } => {
            *state = PanelState {
                visible: true,
                loading: true,
                file_name: Some(file_name),
                ..PanelState::default()
            };
        }
        View::Failed { message } => {
            state.loading = false;
            state.crop = ERROR_CROP.to_string();
            state.disease = ERROR_DISEASE.to_string();
            state.confidence_text = ERROR_CONFIDENCE.to_string();
            state.low_confidence = false;
            state.confidence_note = None;
            state.set_assistant(message, AssistantFormat::Emphasized, Theme::Negative);
        }
        View::LowConfidence { confidence, image_url } => {
            state.loading = false;
            state.image_url = Some(image_url);
            state.crop = LOW_CONFIDENCE_CROP.to_string();
            state.disease = LOW_CONFIDENCE_DISEASE.to_string();
            state.confidence_text = format_confidence(confidence);
            state.low_confidence = true;
            state.confidence_note = Some(LOW_CONFIDENCE_NOTE.to_string());
            state.set_assistant(LOW_CONFIDENCE_ADVICE, AssistantFormat::Emphasized, Theme::Negative);
        }
        View::Matched { labels, confidence, image_url } => {
            state.loading = false;
            state.image_url = Some(image_url);
            state.crop = labels.crop;
            state.disease = labels.disease;
            state.confidence_text = format_confidence(confidence);
            state.low_confidence = false;
            state.confidence_note = None;
            state.set_assistant(INFO_PENDING, AssistantFormat::Emphasized, Theme::Neutral);
        }
        View::Info(info) => {
            // labels and confidence stay as rendered
            if info.gemini_success {
                state.set_assistant(info.chatbot_response, AssistantFormat::Markdown, Theme::Positive);
            } else {
                state.set_assistant(info.chatbot_response, AssistantFormat::Emphasized, Theme::Negative);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::parse_label;

    #[test]
    fn begin_resets_previous_result() {
        let panel = ResultPanel::new();
        let first = panel.begin("a.jpg".into());
        panel.render(first, View::Failed { message: "boom".into() });

        panel.begin("b.jpg".into());
        let state = panel.snapshot();
        assert!(state.visible && state.loading);
        assert_eq!(state.file_name.as_deref(), Some("b.jpg"));
        assert_eq!(state.crop, "");
        assert_eq!(state.assistant_body, "");
    }

    #[test]
    fn stale_tokens_are_dropped() {
        let panel = ResultPanel::new();
        let first = panel.begin("a.jpg".into());
        let second = panel.begin("b.jpg".into());
        assert!(!panel.is_current(first));

        assert!(!panel.render(first, View::Failed { message: "late".into() }));
        assert!(panel.snapshot().loading);

        assert!(panel.render(
            second,
            View::Matched {
                labels: parse_label("Tomato___Early_blight"),
                confidence: 92.3,
                image_url: "/u/b.jpg".into(),
            }
        ));
        let state = panel.snapshot();
        assert_eq!(state.crop, "Tomato");
        assert_eq!(state.confidence_text, "92.30%");
        assert_eq!(state.assistant_body, INFO_PENDING);
        assert_eq!(state.assistant_theme, Theme::Neutral);
    }

    #[test]
    fn info_only_touches_assistant_box() {
        let panel = ResultPanel::new();
        let token = panel.begin("a.jpg".into());
        panel.render(
            token,
            View::Matched {
                labels: parse_label("Potato___Late_blight"),
                confidence: 77.0,
                image_url: "/u/a.jpg".into(),
            },
        );
        panel.render(token, View::Info(ChatbotInfo::failure("quota exceeded")));

        let state = panel.snapshot();
        assert_eq!(state.crop, "Potato");
        assert_eq!(state.disease, "Late blight");
        assert_eq!(state.confidence_text, "77.00%");
        assert_eq!(state.assistant_body, "quota exceeded");
        assert_eq!(state.assistant_format, AssistantFormat::Emphasized);
        assert_eq!(state.assistant_theme, Theme::Negative);
    }

    #[test]
    fn confidence_has_two_decimals() {
        assert_eq!(format_confidence(92.3), "92.30%");
        assert_eq!(format_confidence(100.0), "100.00%");
        assert_eq!(format_confidence(49.999), "50.00%");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(format_confidence(92.125), "92.13%");
        assert_eq!(format_confidence(0.125), "0.13%");
        assert_eq!(format_confidence(50.375), "50.38%");
        // 1.005 is stored just below the tie
        assert_eq!(format_confidence(1.005), "1.00%");
    }
}
