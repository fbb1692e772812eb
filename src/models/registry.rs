//! Name-indexed "decode + validate" checks, used to validate arbitrary JSON
//! documents against a model chosen at runtime.

use crate::models::{
    auth, barring, broadcast, charging, common, location, network, qos, redirect, subscription,
    trace,
};
use crate::utils::error::{Result, SdkError};
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use serde_json::Value;

type ModelCheck = fn(Value) -> Result<()>;

fn check<T: DeserializeOwned + Validate>(value: Value) -> Result<()> {
    let model: T = serde_json::from_value(value)?;
    model.validate()?;
    Ok(())
}

static MODELS: &[(&str, ModelCheck)] = &[
    ("AccessTokenErr", check::<common::AccessTokenErr>),
    ("AccessTokenReq", check::<common::AccessTokenReq>),
    ("Ambr", check::<qos::Ambr>),
    ("Area", check::<network::Area>),
    ("Arp", check::<qos::Arp>),
    ("AuthenticationInfo", check::<auth::AuthenticationInfo>),
    ("BackupAmfInfo", check::<network::BackupAmfInfo>),
    ("CancelLocData", check::<location::CancelLocData>),
    ("ChangeItem", check::<common::ChangeItem>),
    ("CipherRequestData", check::<broadcast::CipherRequestData>),
    ("CipherResponseData", check::<broadcast::CipherResponseData>),
    ("ConfirmationData", check::<auth::ConfirmationData>),
    ("ConfirmationDataResponse", check::<auth::ConfirmationDataResponse>),
    ("Dynamic5Qi", check::<qos::Dynamic5Qi>),
    ("EapSession", check::<auth::EapSession>),
    ("Ecgi", check::<network::Ecgi>),
    ("GeographicArea", check::<location::GeographicArea>),
    ("GlobalRanNodeId", check::<network::GlobalRanNodeId>),
    ("Guami", check::<subscription::Guami>),
    ("InputData", check::<location::InputData>),
    ("LocContextData", check::<location::LocContextData>),
    ("LocationData", check::<location::LocationData>),
    ("Ncgi", check::<network::Ncgi>),
    ("NgApCause", check::<network::NgApCause>),
    ("NonDynamic5Qi", check::<qos::NonDynamic5Qi>),
    ("OdbData", check::<barring::OdbData>),
    ("PatchItem", check::<common::PatchItem>),
    ("PlmnId", check::<network::PlmnId>),
    ("PresenceInfo", check::<network::PresenceInfo>),
    ("ProblemDetails", check::<common::ProblemDetails>),
    ("QosFlowUsageReport", check::<charging::QosFlowUsageReport>),
    ("RedirectResponse", check::<redirect::RedirectResponse>),
    ("RouteToLocation", check::<network::RouteToLocation>),
    ("SecondaryRatUsageReport", check::<charging::SecondaryRatUsageReport>),
    ("ServiceAreaRestriction", check::<network::ServiceAreaRestriction>),
    ("Snssai", check::<network::Snssai>),
    ("SorInfo", check::<auth::SorInfo>),
    ("SorSecurityInfo", check::<auth::SorSecurityInfo>),
    ("SubscribedDefaultQos", check::<qos::SubscribedDefaultQos>),
    ("Tai", check::<network::Tai>),
    ("TraceData", check::<trace::TraceData>),
    ("UeAuthenticationCtx", check::<auth::UeAuthenticationCtx>),
    ("UpSecurity", check::<network::UpSecurity>),
    ("UpuInfo", check::<auth::UpuInfo>),
    ("UpuSecurityInfo", check::<auth::UpuSecurityInfo>),
    ("UserLocation", check::<network::UserLocation>),
];

/// Names accepted by [`validate_json`], sorted.
pub fn model_names() -> impl Iterator<Item = &'static str> {
    MODELS.iter().map(|(name, _)| *name)
}

pub fn is_known(name: &str) -> bool {
    MODELS.iter().any(|(n, _)| *n == name)
}

/// Decode `value` as the model `name` and validate it.
pub fn validate_json(name: &str, value: Value) -> Result<()> {
    let (_, check) = MODELS
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(|| SdkError::UnknownModel {
            name: name.to_string(),
        })?;
    tracing::debug!(model = name, "validating document");
    check(value)
}

pub fn validate_str(name: &str, text: &str) -> Result<()> {
    let value: Value = serde_json::from_str(text)?;
    validate_json(name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_names_are_sorted_and_unique() {
        let names: Vec<_> = model_names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_unknown_model() {
        let err = validate_json("NoSuchModel", json!({})).unwrap_err();
        assert!(matches!(err, SdkError::UnknownModel { .. }));
    }

    #[test]
    fn test_decode_and_validation_failures() {
        let decode = validate_str("PlmnId", "{\"mcc\": 208}").unwrap_err();
        assert!(matches!(decode, SdkError::SerializationError(_)));

        let invalid = validate_json("PlmnId", json!({"mcc": "20", "mnc": "93"})).unwrap_err();
        match invalid {
            SdkError::ValidationError(errors) => assert!(errors.has_path("mcc")),
            other => panic!("unexpected error: {}", other),
        }

        assert!(validate_json("PlmnId", json!({"mcc": "208", "mnc": "93"})).is_ok());
    }
}
