//! Request decoding and status-based response dispatch shared by every
//! service's routes.

use crate::models::common::ProblemDetails;
use crate::models::redirect::RedirectResponse;
use crate::models::status::StatusCode;
use crate::services::CommonInterface;
use crate::utils::error::RequestError;
use crate::utils::validation::{Validate, ValidationContext};
use axum::body::Bytes;
use axum::http::{self, header, HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Result of a business operation. The status code alone decides how the
/// response is written; the other fields are read only when the status
/// selects them.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse<T> {
    pub status: StatusCode,
    pub payload: Option<T>,
    pub problem_details: Option<ProblemDetails>,
    pub redirect: Option<RedirectResponse>,
    /// `Location` of a created resource (201 only).
    pub location: Option<String>,
}

impl<T> ServiceResponse<T> {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            payload: None,
            problem_details: None,
            redirect: None,
            location: None,
        }
    }

    pub fn ok(payload: T) -> Self {
        Self {
            payload: Some(payload),
            ..Self::new(StatusCode::OK)
        }
    }

    pub fn created(payload: T, location: impl Into<String>) -> Self {
        Self {
            payload: Some(payload),
            location: Some(location.into()),
            ..Self::new(StatusCode::CREATED)
        }
    }

    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT)
    }

    pub fn temporary_redirect(redirect: RedirectResponse) -> Self {
        Self {
            redirect: Some(redirect),
            ..Self::new(StatusCode::TEMPORARY_REDIRECT)
        }
    }

    pub fn permanent_redirect(redirect: RedirectResponse) -> Self {
        Self {
            redirect: Some(redirect),
            ..Self::new(StatusCode::PERMANENT_REDIRECT)
        }
    }

    /// Problem answer; the status is taken from the problem and falls back
    /// to 500 when it carries none.
    pub fn problem(problem: ProblemDetails) -> Self {
        let status = problem
            .status_code()
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self {
            problem_details: Some(problem),
            ..Self::new(status)
        }
    }
}

/// Response variant an operation declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Success(StatusCode),
    Created,
    NoContent,
    TemporaryRedirect,
    PermanentRedirect,
}

impl ResponseKind {
    pub fn status(self) -> StatusCode {
        match self {
            ResponseKind::Success(status) => status,
            ResponseKind::Created => StatusCode::CREATED,
            ResponseKind::NoContent => StatusCode::NO_CONTENT,
            ResponseKind::TemporaryRedirect => StatusCode::TEMPORARY_REDIRECT,
            ResponseKind::PermanentRedirect => StatusCode::PERMANENT_REDIRECT,
        }
    }
}

/// One row of a service's route table.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    pub name: &'static str,
    pub method: Method,
    /// Path relative to the API root, axum syntax for parameters.
    pub path: &'static str,
    pub responses: &'static [ResponseKind],
}

impl OperationSpec {
    pub fn declares(&self, status: StatusCode) -> Option<ResponseKind> {
        self.responses.iter().copied().find(|k| k.status() == status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Run `validate()` on decoded bodies before the business operation.
    pub validate_requests: bool,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            validate_requests: true,
        }
    }
}

/// Axum state of a service's router.
pub struct ServiceState<S: ?Sized> {
    pub service: Arc<S>,
    pub options: DispatchOptions,
}

impl<S: ?Sized> Clone for ServiceState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            options: self.options,
        }
    }
}

impl<S: ?Sized> ServiceState<S> {
    pub fn new(service: Arc<S>, options: DispatchOptions) -> Self {
        Self { service, options }
    }
}

pub fn decode_request<T>(body: &[u8], validate: bool) -> Result<T, RequestError>
where
    T: DeserializeOwned + Validate,
{
    let request: T = serde_json::from_slice(body)?;
    if validate {
        request.validate()?;
    }
    Ok(request)
}

/// Check a path parameter against its model type.
pub fn check_path_parameter<P: Validate>(name: &'static str, value: &P) -> Result<(), RequestError> {
    let mut ctx = ValidationContext::new();
    value.validate_into(&mut ctx);
    ctx.finish()
        .map_err(|errors| RequestError::PathParameter { name, errors })
}

/// Hand a request failure to the service's error mapping and answer with the
/// status the returned problem carries (400 when it carries none).
pub fn reject<S>(service: &S, operation: &OperationSpec, err: RequestError) -> Response
where
    S: CommonInterface + ?Sized,
{
    tracing::warn!(operation = operation.name, error = %err, "rejecting request");
    let problem = service.error(&err);
    let status = problem.status_code().unwrap_or(StatusCode::BAD_REQUEST);
    json_response(status, APPLICATION_PROBLEM_JSON, &problem)
}

/// Decode, optionally validate, invoke and dispatch one operation.
pub async fn handle<S, Req, T, F, Fut>(
    service: &S,
    options: DispatchOptions,
    operation: &OperationSpec,
    body: Bytes,
    invoke: F,
) -> Response
where
    S: CommonInterface + ?Sized,
    Req: DeserializeOwned + Validate,
    T: Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: Future<Output = ServiceResponse<T>>,
{
    tracing::debug!(
        operation = operation.name,
        bytes = body.len(),
        "handling request"
    );
    match decode_request::<Req>(&body, options.validate_requests) {
        Ok(request) => respond(operation, invoke(request).await),
        Err(err) => reject(service, operation, err),
    }
}

/// Write a business response according to its status code.
pub fn respond<T: Serialize>(operation: &OperationSpec, response: ServiceResponse<T>) -> Response {
    let status = response.status;
    match operation.declares(status) {
        Some(ResponseKind::NoContent) => http::StatusCode::NO_CONTENT.into_response(),
        Some(ResponseKind::TemporaryRedirect) | Some(ResponseKind::PermanentRedirect) => {
            let redirect = response.redirect.unwrap_or_default();
            let mut reply = json_response(status, APPLICATION_JSON, &redirect);
            redirect.redirect_header.bind(reply.headers_mut());
            reply
        }
        Some(ResponseKind::Created) => {
            let mut reply = json_response(status, APPLICATION_JSON, &response.payload);
            if let Some(location) = response.location {
                match HeaderValue::from_str(&location) {
                    Ok(value) => {
                        reply.headers_mut().insert(header::LOCATION, value);
                    }
                    Err(_) => tracing::warn!(
                        operation = operation.name,
                        "skipping invalid Location header"
                    ),
                }
            }
            reply
        }
        Some(ResponseKind::Success(_)) => json_response(status, APPLICATION_JSON, &response.payload),
        None => {
            if !status.is_success() && !status.is_redirect() {
                tracing::debug!(operation = operation.name, %status, "problem response");
            } else {
                tracing::warn!(
                    operation = operation.name,
                    %status,
                    "status not declared by operation, answering with problem details"
                );
            }
            let problem = response
                .problem_details
                .unwrap_or_else(|| ProblemDetails::new(status));
            json_response(status, APPLICATION_PROBLEM_JSON, &problem)
        }
    }
}

pub fn json_response<B: Serialize + ?Sized>(
    status: StatusCode,
    content_type: &'static str,
    body: &B,
) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            http::StatusCode::from(status),
            [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode response body");
            http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
