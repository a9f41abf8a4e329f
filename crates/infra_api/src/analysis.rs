//! HTTP adapter for the image-analysis endpoints

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use core_kernel::TransportError;
use domain_claims::{AiAnalysis, AnalysisPort, ImageAttachment};

use crate::client::ApiClient;

/// `AnalysisPort` over the backend `/analyze` endpoints
#[derive(Clone)]
pub struct HttpAnalysisClient {
    api: ApiClient,
}

impl HttpAnalysisClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn upload_one(
        &self,
        path: &str,
        image: &ImageAttachment,
    ) -> Result<AiAnalysis, TransportError> {
        debug!(file = %image.file_name, path = %path, "uploading image for analysis");
        let form = Form::new().part("image", image_part(image)?);
        let builder = self.api.authorize_required(self.api.post(path))?;
        self.api.send_json(builder.multipart(form)).await
    }
}

fn image_part(image: &ImageAttachment) -> Result<Part, TransportError> {
    Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(&image.content_type)
        .map_err(|e| TransportError::network(format!("invalid image media type: {e}")))
}

#[async_trait]
impl AnalysisPort for HttpAnalysisClient {
    async fn analyze_fraud(&self, image: &ImageAttachment) -> Result<AiAnalysis, TransportError> {
        self.upload_one("/analyze/fraud", image).await
    }

    async fn analyze_damage(&self, image: &ImageAttachment) -> Result<AiAnalysis, TransportError> {
        self.upload_one("/analyze/damage", image).await
    }

    async fn analyze_batch(
        &self,
        images: &[ImageAttachment],
    ) -> Result<Vec<AiAnalysis>, TransportError> {
        let mut form = Form::new();
        for image in images {
            form = form.part("images", image_part(image)?);
        }
        let builder = self.api.authorize_required(self.api.post("/analyze/batch"))?;
        self.api.send_json(builder.multipart(form)).await
    }
}
