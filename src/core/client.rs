use crate::core::dispatch::OperationSpec;
use crate::models::common::ProblemDetails;
use crate::models::redirect::{RedirectHeader, RedirectResponse};
use crate::models::status::StatusCode;
use crate::utils::error::{Result, SdkError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

pub const DEFAULT_API_ROOT: &str = "https://example.com";

fn default_scheme() -> String {
    "https".to_string()
}

fn default_user_agent() -> String {
    format!("fivegc-sdk/{}", env!("CARGO_PKG_VERSION"))
}

/// A `{name}` placeholder of a server URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerVariable {
    #[serde(default)]
    pub description: String,
    pub default_value: String,
    /// Allowed values; empty means any value.
    #[serde(default)]
    pub enum_values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfiguration {
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub variables: BTreeMap<String, ServerVariable>,
}

impl ServerConfiguration {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.variables.insert(name.into(), variable);
        self
    }

    /// Default server of a service: `{apiRoot}/<service>/v1`.
    pub fn service_default(service: &str) -> Self {
        Self::new(format!("{{apiRoot}}/{}/v1", service)).with_variable(
            "apiRoot",
            ServerVariable {
                description: "apiRoot as defined in clause 4.4 of 3GPP TS 29.501".to_string(),
                default_value: DEFAULT_API_ROOT.to_string(),
                enum_values: Vec::new(),
            },
        )
    }

    /// Substitute every variable with the supplied value or its default.
    pub fn url(&self, values: &BTreeMap<String, String>) -> Result<String> {
        let mut url = self.url.clone();
        for (name, variable) in &self.variables {
            let value = match values.get(name) {
                Some(value) => {
                    if !variable.enum_values.is_empty() && !variable.enum_values.contains(value) {
                        return Err(SdkError::ServerVariableError {
                            name: name.clone(),
                            value: value.clone(),
                            reason: format!("must be one of {}", variable.enum_values.join(", ")),
                        });
                    }
                    value.as_str()
                }
                None => variable.default_value.as_str(),
            };
            url = url.replace(&format!("{{{}}}", name), value);
        }
        Ok(url)
    }
}

/// Client side settings shared by every service client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfiguration {
    /// `host[:port]` replacing the host of the resolved server URL.
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default = "default_scheme")]
    pub scheme: String,
    #[serde(default)]
    pub default_header: BTreeMap<String, String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub servers: Vec<ServerConfiguration>,
    /// Server lists keyed by operation name, e.g. `DetermineLocation`.
    #[serde(default)]
    pub operation_servers: BTreeMap<String, Vec<ServerConfiguration>>,
    /// Values for server URL variables.
    #[serde(default)]
    pub server_variables: BTreeMap<String, String>,
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self {
            host: None,
            scheme: default_scheme(),
            default_header: BTreeMap::new(),
            user_agent: default_user_agent(),
            debug: false,
            servers: Vec::new(),
            operation_servers: BTreeMap::new(),
            server_variables: BTreeMap::new(),
        }
    }
}

impl ClientConfiguration {
    /// Point every request at `scheme://host`.
    pub fn for_host(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            scheme: scheme.into(),
            ..Self::default()
        }
    }

    pub fn add_default_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.default_header.insert(name.into(), value.into());
    }

    /// Base URL for `operation` of `service`: operation servers first, then
    /// the global list, then the service default.
    pub fn server_url(&self, service: &str, operation: &str) -> Result<String> {
        let fallback = ServerConfiguration::service_default(service);
        let server = self
            .operation_servers
            .get(operation)
            .and_then(|servers| servers.first())
            .or_else(|| self.servers.first())
            .unwrap_or(&fallback);

        let resolved = server.url(&self.server_variables)?;
        match self.host.as_deref().filter(|h| !h.is_empty()) {
            Some(host) => {
                let url = Url::parse(&resolved)?;
                Ok(format!(
                    "{}://{}{}",
                    self.scheme,
                    host,
                    url.path().trim_end_matches('/')
                ))
            }
            None => Ok(resolved.trim_end_matches('/').to_string()),
        }
    }

    fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_header {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| SdkError::InvalidConfigValueError {
                    field: "client.default_header".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| SdkError::InvalidConfigValueError {
                    field: format!("client.default_header.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}

/// Outcome of a client call, one variant per response shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { status: StatusCode, body: T },
    NoContent,
    /// 307/308; the `Location` and `3gpp-Sbi-Target-Nf-Id` headers are
    /// folded into the body's header fields.
    Redirect {
        status: StatusCode,
        redirect: RedirectResponse,
    },
    Problem {
        status: StatusCode,
        details: ProblemDetails,
    },
}

impl<T> ApiResponse<T> {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Success { status, .. }
            | ApiResponse::Redirect { status, .. }
            | ApiResponse::Problem { status, .. } => *status,
            ApiResponse::NoContent => StatusCode::NO_CONTENT,
        }
    }

    pub fn into_body(self) -> Option<T> {
        match self {
            ApiResponse::Success { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// HTTP client bound to one NF service.
#[derive(Debug, Clone)]
pub struct SbiClient {
    service: &'static str,
    config: ClientConfiguration,
    http: reqwest::Client,
}

impl SbiClient {
    pub fn new(service: &'static str, config: ClientConfiguration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(config.header_map()?)
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            service,
            config,
            http,
        })
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn config(&self) -> &ClientConfiguration {
        &self.config
    }

    /// Full request URL with path parameters substituted and encoded.
    pub fn operation_url(&self, operation: &OperationSpec, params: &[(&str, &str)]) -> Result<Url> {
        let base = self.config.server_url(self.service, operation.name)?;
        let mut url = Url::parse(&base)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| SdkError::InvalidConfigValueError {
                    field: "client.servers".to_string(),
                    value: base.clone(),
                    reason: "URL cannot be a base".to_string(),
                })?;
            segments.pop_if_empty();
            for segment in operation.path.split('/').filter(|s| !s.is_empty()) {
                let value = match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => params
                        .iter()
                        .find(|(param, _)| *param == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| SdkError::MissingConfigError {
                            field: format!("path parameter '{}'", name),
                        })?,
                    None => segment,
                };
                segments.push(value);
            }
        }
        Ok(url)
    }

    pub async fn call<Req, T>(
        &self,
        operation: &OperationSpec,
        params: &[(&str, &str)],
        body: &Req,
    ) -> Result<ApiResponse<T>>
    where
        Req: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.operation_url(operation, params)?;
        if self.config.debug {
            tracing::debug!(operation = operation.name, %url, "sending request");
        }

        let response = self
            .http
            .request(operation.method.clone(), url)
            .json(body)
            .send()
            .await?;

        let status = StatusCode::from(response.status());
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        if self.config.debug {
            tracing::debug!(operation = operation.name, %status, bytes = bytes.len(), "received response");
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(ApiResponse::NoContent);
        }

        if status == StatusCode::TEMPORARY_REDIRECT || status == StatusCode::PERMANENT_REDIRECT {
            let mut redirect: RedirectResponse = if bytes.is_empty() {
                RedirectResponse::default()
            } else {
                serde_json::from_slice(&bytes)?
            };
            let from_headers = RedirectHeader::from_headers(&headers);
            if from_headers.location.is_some() {
                redirect.redirect_header.location = from_headers.location;
            }
            if from_headers.target_nf_id.is_some() {
                redirect.redirect_header.target_nf_id = from_headers.target_nf_id;
            }
            return Ok(ApiResponse::Redirect { status, redirect });
        }

        if status.is_success() {
            let body = serde_json::from_slice(&bytes)?;
            return Ok(ApiResponse::Success { status, body });
        }

        let details = serde_json::from_slice::<ProblemDetails>(&bytes).unwrap_or_else(|e| {
            tracing::warn!(%status, error = %e, "problem body could not be decoded");
            ProblemDetails::new(status)
        });
        Ok(ApiResponse::Problem { status, details })
    }
}
