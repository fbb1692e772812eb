//! Common data types shared by every SBI (3GPP TS 29.571, clause 5.2).

use crate::models::network::PlmnId;
use crate::models::status::StatusCode;
use crate::models::subscription::NfInstanceId;
use crate::utils::validation::{Validate, ValidationContext, ValidationErrors};
use serde::{Deserialize, Serialize};

string_scalar!(
    /// Base64 encoded binary content.
    Binary
);
string_scalar!(
    /// Base64url encoded octets.
    Bytes
);
string_scalar!(
    DiameterIdentity,
    pattern = r"^([A-Za-z0-9]+([-A-Za-z0-9]+)\.)+[a-z]{2,}$"
);
string_scalar!(
    /// Dotted-decimal IPv4 address.
    Ipv4Addr,
    pattern = r"^(([0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])\.){3}([0-9]|[1-9][0-9]|1[0-9][0-9]|2[0-4][0-9]|25[0-5])$"
);
string_scalar!(
    /// IPv6 address in the lowercase, zero-compressed textual form.
    Ipv6Addr,
    pattern = r"^((:|(0?|([1-9a-f][0-9a-f]{0,3}))):)((0?|([1-9a-f][0-9a-f]{0,3})):){0,6}(:|(0?|([1-9a-f][0-9a-f]{0,3})))$",
    r"^((([^:]+:){7}([^:]+))|((([^:]+:)*[^:]+)?::(([^:]+:)*[^:]+)?))$"
);
string_scalar!(
    Ipv6Prefix,
    pattern = r"^((:|(0?|([1-9a-f][0-9a-f]{0,3}))):)((0?|([1-9a-f][0-9a-f]{0,3})):){0,6}(:|(0?|([1-9a-f][0-9a-f]{0,3})))(/(([0-9])|([0-9]{2})|(1[0-1][0-9])|(12[0-8])))$",
    r"^((([^:]+:){7}([^:]+))|((([^:]+:)*[^:]+)?::(([^:]+:)*[^:]+)?))(/.+)$"
);
string_scalar!(
    MacAddr48,
    pattern = r"^([0-9a-fA-F]{2})((-[0-9a-fA-F]{2}){5})$"
);
string_scalar!(
    /// Hex bitmask of optional features; each character covers four features.
    SupportedFeatures,
    pattern = r"^[A-Fa-f0-9]*$"
);
string_scalar!(
    VarUeId,
    pattern = r"^(imsi-[0-9]{5,15}|nai-.+|msisdn-[0-9]{5,15}|extid-[^@]+@[^@]+|.+)$"
);
string_scalar!(
    /// Offset from UTC with an optional daylight-saving adjustment, e.g. `+08:00+1`.
    TimeZone,
    pattern = r"^(-|\+)[0-9]{2}:[0-9]{2}(\+[1-2])?$"
);

string_scalar!(
    @common
    /// RFC 3986 URI. Absolute URIs and absolute paths are accepted.
    Uri
);

impl Validate for Uri {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        if self.0.starts_with('/') && !self.0.starts_with("//") {
            return;
        }
        if let Err(e) = url::Url::parse(&self.0) {
            ctx.report(format!("'{}' is not a valid URI: {}", self.0, e));
        }
    }
}

string_scalar!(
    @common
    /// RFC 3339 full-date, e.g. `2024-02-29`.
    Date
);

impl Validate for Date {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        if chrono::NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").is_err() {
            ctx.report(format!("'{}' is not a valid full-date (YYYY-MM-DD)", self.0));
        }
    }
}

string_scalar!(
    @common
    /// RFC 3339 date-time with a mandatory time zone.
    DateTime
);

impl DateTime {
    pub fn from_chrono<Tz: chrono::TimeZone>(value: &chrono::DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self(value.to_rfc3339())
    }
}

impl Validate for DateTime {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        if chrono::DateTime::parse_from_rfc3339(&self.0).is_err() {
            ctx.report(format!("'{}' is not a valid RFC 3339 date-time", self.0));
        }
    }
}

float_scalar!(Double);
float_scalar!(Float);
integer_scalar!(DurationSec: i64);
integer_scalar!(Int32: i32);
integer_scalar!(Int64: i64);
integer_scalar!(Uint16: u32, range = 0 ..= 65535);
integer_scalar!(Uinteger: u64);
integer_scalar!(Uint32: u64, range = 0 ..= 4294967295);
integer_scalar!(Uint64: u64);

string_enum!(
    PatchOperation {
        Add => "add",
        Remove => "remove",
        Replace => "replace",
        Move => "move",
        Copy => "copy",
        Test => "test",
    }
);

string_enum!(
    UriScheme {
        Http => "http",
        Https => "https",
    }
);

string_enum!(
    ChangeType {
        Add => "ADD",
        Move => "MOVE",
        Remove => "REMOVE",
        Replace => "REPLACE",
    }
);

string_enum!(
    AccessTokenErrorCode {
        InvalidRequest => "invalid_request",
        InvalidClient => "invalid_client",
        InvalidGrant => "invalid_grant",
        UnauthorizedClient => "unauthorized_client",
        UnsupportedGrantType => "unsupported_grant_type",
        InvalidScope => "invalid_scope",
    }
);

string_enum!(
    GrantType {
        ClientCredentials => "client_credentials",
    }
);

string_scalar!(
    /// Space separated list of NF service names.
    Scope,
    pattern = r"^([a-zA-Z0-9_:-]+)( [a-zA-Z0-9_:-]+)*$"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidParam {
    pub param: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Validate for InvalidParam {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        if self.param.is_empty() {
            ctx.at("param", |ctx| ctx.report("cannot be empty"));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenErr {
    pub error: AccessTokenErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

impl Validate for AccessTokenErr {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("error", &self.error);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenReq {
    pub grant_type: GrantType,
    #[serde(rename = "nfInstanceId")]
    pub nf_instance_id: NfInstanceId,
    #[serde(rename = "nfType", skip_serializing_if = "Option::is_none")]
    pub nf_type: Option<String>,
    #[serde(rename = "targetNfType", skip_serializing_if = "Option::is_none")]
    pub target_nf_type: Option<String>,
    pub scope: Scope,
    #[serde(rename = "targetNfInstanceId", skip_serializing_if = "Option::is_none")]
    pub target_nf_instance_id: Option<NfInstanceId>,
    #[serde(rename = "requesterPlmn", skip_serializing_if = "Option::is_none")]
    pub requester_plmn: Option<PlmnId>,
    #[serde(rename = "targetPlmn", skip_serializing_if = "Option::is_none")]
    pub target_plmn: Option<PlmnId>,
}

impl Validate for AccessTokenReq {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("grant_type", &self.grant_type);
        ctx.field("nfInstanceId", &self.nf_instance_id);
        ctx.field("scope", &self.scope);
        ctx.optional("targetNfInstanceId", &self.target_nf_instance_id);
        ctx.optional("requesterPlmn", &self.requester_plmn);
        ctx.optional("targetPlmn", &self.target_plmn);
    }
}

/// RFC 7807 problem details, extended by 3GPP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<Uri>,
    /// Application-specific cause, e.g. `MANDATORY_IE_INCORRECT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_params: Option<Vec<InvalidParam>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_error: Option<AccessTokenErr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token_request: Option<AccessTokenReq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nrf_id: Option<String>,
}

impl ProblemDetails {
    /// Problem with `status` set and the registry reason phrase as title.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status: Some(i32::from(status.as_u16())),
            title: status.reason_phrase().map(str::to_string),
            ..Self::default()
        }
    }

    /// 400 problem listing every validation failure as an invalid parameter.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let invalid_params = errors
            .errors()
            .iter()
            .map(|e| InvalidParam {
                param: if e.path.is_empty() {
                    "/".to_string()
                } else {
                    e.path.clone()
                },
                reason: Some(e.reason.clone()),
            })
            .collect();

        Self::new(StatusCode::BAD_REQUEST)
            .with_cause("MANDATORY_IE_INCORRECT")
            .with_detail(errors.to_string())
            .with_invalid_params(invalid_params)
    }

    /// 400 problem for a body that could not be decoded. JSON that parses
    /// but does not fit the record, such as a broken exclusive group, is
    /// listed as an invalid parameter; unparsable input is an invalid message
    /// format.
    pub fn from_decode(err: &serde_json::Error) -> Self {
        let message = err.to_string();
        match err.classify() {
            serde_json::error::Category::Data => {
                let reason = message
                    .rsplit_once(" at line ")
                    .map_or(message.as_str(), |(reason, _)| reason)
                    .to_string();
                Self::new(StatusCode::BAD_REQUEST)
                    .with_cause("MANDATORY_IE_INCORRECT")
                    .with_detail(message)
                    .with_invalid_params(vec![InvalidParam {
                        param: "/".to_string(),
                        reason: Some(reason),
                    }])
            }
            _ => Self::new(StatusCode::BAD_REQUEST)
                .with_cause("INVALID_MSG_FORMAT")
                .with_detail(message),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_type(mut self, problem_type: impl Into<Uri>) -> Self {
        self.problem_type = Some(problem_type.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<Uri>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn with_invalid_params(mut self, params: Vec<InvalidParam>) -> Self {
        self.invalid_params = Some(params);
        self
    }

    /// The `status` field as a status code, if it holds a usable one.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status
            .and_then(|s| u16::try_from(s).ok())
            .and_then(StatusCode::from_u16)
    }
}

impl Validate for ProblemDetails {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.optional("type", &self.problem_type);
        ctx.optional("instance", &self.instance);
        ctx.optional_each_min("invalidParams", &self.invalid_params, 1);
        ctx.optional("supportedFeatures", &self.supported_features);
        ctx.optional("accessTokenError", &self.access_token_error);
        ctx.optional("accessTokenRequest", &self.access_token_request);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: Uri,
}

impl Validate for Link {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("href", &self.href);
    }
}

/// Value of a `_links` map entry: a single link or a list of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinksValueSchema {
    Links(Vec<Link>),
    Link(Link),
}

impl Validate for LinksValueSchema {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        match self {
            LinksValueSchema::Links(links) => links.validate_into(ctx),
            LinksValueSchema::Link(link) => link.validate_into(ctx),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub self_link: Link,
}

impl Validate for SelfLink {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("self", &self.self_link);
    }
}

/// One JSON Patch (RFC 6902) operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchItem {
    pub op: PatchOperation,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl Validate for PatchItem {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("op", &self.op);
        let moves = matches!(self.op, PatchOperation::Move | PatchOperation::Copy);
        ctx.required_when("from", self.from.is_some(), moves, "op is move or copy");
        let needs_value = matches!(
            self.op,
            PatchOperation::Add | PatchOperation::Replace | PatchOperation::Test
        );
        ctx.required_when(
            "value",
            self.value.is_some(),
            needs_value,
            "op is add, replace or test",
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeItem {
    pub op: ChangeType,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<serde_json::Value>,
}

impl Validate for ChangeItem {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("op", &self.op);
        ctx.required_when(
            "from",
            self.from.is_some(),
            self.op == ChangeType::Move,
            "op=MOVE",
        );
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyItem {
    pub resource_id: Uri,
    pub changes: Vec<ChangeItem>,
}

impl Validate for NotifyItem {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("resourceId", &self.resource_id);
        ctx.each_min("changes", &self.changes, 1);
    }
}
