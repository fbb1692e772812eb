use crate::models::common::Uri;
use crate::utils::validation::{Validate, ValidationContext};
use axum::http::{header, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

pub const LOCATION_HEADER: &str = "Location";
pub const SBI_TARGET_NF_ID_HEADER: &str = "3gpp-Sbi-Target-Nf-Id";

/// Headers a 307/308 answer carries to point the consumer elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectHeader {
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "3gpp-Sbi-Target-Nf-Id", skip_serializing_if = "Option::is_none")]
    pub target_nf_id: Option<String>,
}

impl RedirectHeader {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            target_nf_id: None,
        }
    }

    pub fn with_target_nf_id(mut self, nf_id: impl Into<String>) -> Self {
        self.target_nf_id = Some(nf_id.into());
        self
    }

    /// Copy the present values into `headers`. Values that are not valid
    /// header text are skipped.
    pub fn bind(&self, headers: &mut HeaderMap) {
        let pairs = [
            (header::LOCATION, &self.location),
            (HeaderName::from_static("3gpp-sbi-target-nf-id"), &self.target_nf_id),
        ];
        for (name, value) in pairs {
            let Some(value) = value else { continue };
            match HeaderValue::from_str(value) {
                Ok(v) => {
                    headers.insert(name, v);
                }
                Err(_) => tracing::warn!(header = %name, "skipping invalid redirect header value"),
            }
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            location: read(LOCATION_HEADER),
            target_nf_id: read(SBI_TARGET_NF_ID_HEADER),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.target_nf_id.is_none()
    }
}

/// Body of a 307/308 answer (TS 29.571 RedirectResponse) together with the
/// header values it is sent with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    #[serde(default)]
    pub redirect_header: RedirectHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_scp: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sepp: Option<Uri>,
}

impl RedirectResponse {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            redirect_header: RedirectHeader::new(location),
            ..Self::default()
        }
    }

    pub fn with_target_nf_id(mut self, nf_id: impl Into<String>) -> Self {
        self.redirect_header = self.redirect_header.with_target_nf_id(nf_id);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

impl Validate for RedirectResponse {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.optional("targetScp", &self.target_scp);
        ctx.optional("targetSepp", &self.target_sepp);
    }
}
