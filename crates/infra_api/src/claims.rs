//! HTTP adapter for the claim endpoints

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use core_kernel::TransportError;
use domain_claims::{
    Claim, ClaimQuery, ClaimsPort, CreateClaimRequest, ImageAttachment, UpdateClaimRequest,
};

use crate::client::ApiClient;

/// `ClaimsPort` over the backend `/claims` endpoints
#[derive(Clone)]
pub struct HttpClaimsClient {
    api: ApiClient,
}

impl HttpClaimsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

/// Multipart form carrying the full draft snapshot
///
/// Text fields first, then one `images` part per attachment with its file
/// name and declared media type.
fn multipart_form(request: CreateClaimRequest) -> Result<Form, TransportError> {
    let mut form = Form::new()
        .text("claimant_name", request.claimant_name)
        .text("vehicle_make", request.vehicle_make)
        .text("vehicle_model", request.vehicle_model)
        .text("vehicle_year", request.vehicle_year.to_string())
        .text("incident_date", request.incident_date)
        .text("location", request.location)
        .text("description", request.description)
        .text("policy_number", request.policy_number)
        .text("policy_type", request.policy_type);
    if let Some(vin) = request.vehicle_vin {
        form = form.text("vehicle_vin", vin);
    }
    for image in request.images {
        form = form.part("images", image_part(image)?);
    }
    Ok(form)
}

fn image_part(image: ImageAttachment) -> Result<Part, TransportError> {
    Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.content_type)
        .map_err(|e| TransportError::network(format!("invalid image media type: {e}")))
}

/// Query-string pairs for the list endpoint
fn query_pairs(query: &ClaimQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(status) = query.status {
        pairs.push(("status", status.as_str().to_string()));
    }
    if let Some(limit) = query.limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(offset) = query.offset {
        pairs.push(("offset", offset.to_string()));
    }
    pairs
}

#[async_trait]
impl ClaimsPort for HttpClaimsClient {
    async fn create_claim(&self, request: CreateClaimRequest) -> Result<Claim, TransportError> {
        debug!(images = request.images.len(), "POST /claims");
        let form = multipart_form(request)?;
        let builder = self.api.authorize_required(self.api.post("/claims"))?;
        self.api.send_json(builder.multipart(form)).await
    }

    async fn list_claims(&self, query: ClaimQuery) -> Result<Vec<Claim>, TransportError> {
        let builder = self.api.authorize_required(self.api.get("/claims"))?;
        self.api.send_json(builder.query(&query_pairs(&query))).await
    }

    async fn get_claim(&self, id: &str) -> Result<Claim, TransportError> {
        let builder = self
            .api
            .authorize_required(self.api.get(&format!("/claims/{id}")))?;
        self.api.send_json(builder).await
    }

    async fn update_claim(
        &self,
        id: &str,
        patch: UpdateClaimRequest,
    ) -> Result<Claim, TransportError> {
        let builder = self
            .api
            .authorize_required(self.api.put(&format!("/claims/{id}")))?;
        self.api.send_json(builder.json(&patch)).await
    }

    async fn delete_claim(&self, id: &str) -> Result<(), TransportError> {
        let builder = self
            .api
            .authorize_required(self.api.delete(&format!("/claims/{id}")))?;
        self.api.send_no_content(builder).await
    }
}
