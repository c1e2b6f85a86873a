//! Async client for `POST /predict`

use std::time::Duration;

use url::Url;

use spamscope_core::prelude::*;
use spamscope_core::{PredictRequest, Prediction};

/// Client for the spam classifier's prediction endpoint.
///
/// Cheap to clone; the inner `reqwest::Client` is a shared connection pool.
#[derive(Debug, Clone)]
pub struct PredictClient {
    base: Url,
    http: reqwest::Client,
}

impl PredictClient {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:8000`).
    ///
    /// Fails fast on an unparseable URL so a bad `--endpoint` is reported
    /// at startup rather than on first submit.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|_| Error::invalid_endpoint(base_url))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::invalid_endpoint(base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self { base, http })
    }

    /// The resolved `/predict` URL.
    pub fn predict_url(&self) -> Result<Url> {
        self.base
            .join("/predict")
            .map_err(|_| Error::invalid_endpoint(self.base.as_str()))
    }

    /// Submit text for classification.
    ///
    /// Any non-2xx status is an error; the caller never sees a partial
    /// response. Body parsing failures surface as `Error::Json`.
    pub async fn classify(&self, text: &str) -> Result<Prediction> {
        let url = self.predict_url()?;
        debug!(%url, chars = text.chars().count(), "sending prediction request");

        let response = self
            .http
            .post(url)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(code = status.as_u16(), "prediction service returned error status");
            return Err(Error::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        let prediction: Prediction = serde_json::from_slice(&body)?;

        debug!(
            label = %prediction.prediction,
            confidence = prediction.confidence,
            "prediction received"
        );
        Ok(prediction)
    }
}
