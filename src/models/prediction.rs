use serde::{Deserialize, Deserializer, Serialize};

/// Body of a successful `/predict` or `/capture` call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub prediction: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub confidence: f64,
    pub image_url: String,
}

/// Body of a non-2xx response.
#[derive(Deserialize, Debug, Default)]
pub struct ServerErrorBody {
    pub error: Option<String>,
}

// The server formats confidence as "92.30"; older builds sent a bare number.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Confidence {
        Number(f64),
        Text(String),
    }

    let value = match Confidence::deserialize(deserializer)? {
        Confidence::Number(n) => n,
        Confidence::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("confidence is not a number: '{}'", s))
        })?,
    };
    if !value.is_finite() {
        return Err(serde::de::Error::custom("confidence is not a finite number"));
    }
    Ok(value)
}
