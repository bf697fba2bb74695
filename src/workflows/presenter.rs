use tracing::{debug, info, warn};

use crate::clients::ScanBackend;
use crate::labels::parse_label;
use crate::models::{ChatbotInfo, ImageInput, PanelState};
use crate::workflows::render::{RequestToken, ResultPanel, View, apply};

/// Predictions below this percentage are not shown as a crop/disease and get
/// no supplementary info request.
pub const CONFIDENCE_THRESHOLD: f64 = 50.0;

/// Drives one submission from upload to the final panel state.
///
/// Each submission takes a [`RequestToken`] from the panel; results of a
/// submission that has since been superseded are not rendered.
pub struct ResultPresenter<B> {
    backend: B,
    panel: ResultPanel,
}

impl<B: ScanBackend> ResultPresenter<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            panel: ResultPanel::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn panel(&self) -> PanelState {
        self.panel.snapshot()
    }

    /// Submit `input`, gate on confidence, fetch supplementary info for a
    /// confident match, and return this submission's own result.
    ///
    /// The returned state describes `input` even when a later submission has
    /// taken over the shared panel in the meantime.
    pub async fn submit_for_prediction(&self, input: ImageInput) -> PanelState {
        let file_name = input.display_name();
        let token = self.panel.begin(file_name.clone());
        let mut own = PanelState::default();
        apply(&mut own, View::Loading { file_name: file_name.clone() });
        info!(
            token = token.value(),
            file_name = file_name.as_str(),
            capture = input.is_capture(),
            "Prediction submitted"
        );

        let result = match self.backend.predict(&input).await {
            Ok(result) => result,
            Err(err) => {
                warn!(token = token.value(), error = %err, transport = err.is_transport(), "Prediction failed");
                self.show(token, &mut own, View::Failed { message: err.to_string() });
                return self.finish(token, own);
            }
        };

        info!(
            token = token.value(),
            prediction = result.prediction.as_str(),
            confidence = result.confidence,
            "Prediction received"
        );

        if result.confidence < CONFIDENCE_THRESHOLD {
            self.show(
                token,
                &mut own,
                View::LowConfidence {
                    confidence: result.confidence,
                    image_url: result.image_url,
                },
            );
            return self.finish(token, own);
        }

        self.show(
            token,
            &mut own,
            View::Matched {
                labels: parse_label(&result.prediction),
                confidence: result.confidence,
                image_url: result.image_url,
            },
        );
        let info = self.fetch_info(token, &result.prediction).await;
        self.show(token, &mut own, View::Info(info));
        self.finish(token, own)
    }

    async fn fetch_info(&self, token: RequestToken, prediction: &str) -> ChatbotInfo {
        let info = match self.backend.fetch_info(prediction).await {
            Ok(info) => info,
            Err(err) => {
                warn!(token = token.value(), error = %err, "Supplementary info failed");
                ChatbotInfo::failure(err.to_string())
            }
        };
        if !info.gemini_success {
            warn!(token = token.value(), "Assistant returned no description");
        }
        info
    }

    // Own copy always advances; the shared panel only while `token` is latest.
    fn show(&self, token: RequestToken, own: &mut PanelState, view: View) {
        apply(own, view.clone());
        self.panel.render(token, view);
    }

    fn finish(&self, token: RequestToken, own: PanelState) -> PanelState {
        if !self.panel.is_current(token) {
            debug!(token = token.value(), "Submission superseded before it finished");
        }
        own
    }
}
