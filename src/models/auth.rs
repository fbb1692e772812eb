//! Payloads of the Nausf_UEAuthentication, Nausf_SoRProtection and
//! Nausf_UPUProtection services (TS 29.509).

use crate::models::common::{Bytes, LinksValueSchema, SupportedFeatures};
use crate::models::network::{PlmnId, Snssai};
use crate::models::nullable::Nullable;
use crate::models::subscription::{NfGroupId, Pei, Supi};
use crate::models::trace::TraceData;
use crate::utils::validation::{Validate, ValidationContext, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_scalar!(
    /// SUPI or SUCI of the UE.
    SupiOrSuci,
    pattern = r"^(imsi-[0-9]{5,15}|nai-.+|gli-.+|gci-.+|suci-(0-[0-9]{3}-[0-9]{2,3}|[1-7]-.+)-[0-9]{1,4}-(0-0-.+|[a-fA-F1-9]-([1-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])-[a-fA-F0-9]+)|.+)$"
);
string_scalar!(
    ServingNetworkName,
    pattern = r"^(5G:mnc[0-9]{3}[.]mcc[0-9]{3}[.]3gppnetwork[.]org(:[A-F0-9]{11})?)|5G:NSWO$"
);
string_scalar!(RoutingIndicator, pattern = r"^[0-9]{1,4}$");
string_scalar!(Rand, pattern = r"^[A-Fa-f0-9]{32}$");
string_scalar!(Autn, pattern = r"^[A-Fa-f0-9]{32}$");
string_scalar!(Auts, pattern = r"^[A-Fa-f0-9]{28}$");
string_scalar!(HxresStar, pattern = r"^[A-Fa-f0-9]{32}$");
string_scalar!(ResStar, pattern = r"^[A-Fa-f0-9]{32}$");
string_scalar!(Kseaf, pattern = r"^[A-Fa-f0-9]{64}$");
string_scalar!(
    /// Base64 encoded EAP packet.
    EapPayload
);
string_scalar!(SorMac, pattern = r"^[A-Fa-f0-9]{32}$");
string_scalar!(CounterSor, pattern = r"^[A-Fa-f0-9]{4}$");
string_scalar!(UpuMac, pattern = r"^[A-Fa-f0-9]{32}$");
string_scalar!(CounterUpu, pattern = r"^[A-Fa-f0-9]{4}$");
string_scalar!(
    /// Secured packet as defined in TS 31.115, base64 encoded.
    SecuredPacket
);

string_enum!(
    AuthType {
        FiveGAka => "5G_AKA",
        EapAkaPrime => "EAP_AKA_PRIME",
        EapTls => "EAP_TLS",
        EapTtls => "EAP_TTLS",
    }
);

string_enum!(
    AuthResult {
        Success => "AUTHENTICATION_SUCCESS",
        Failure => "AUTHENTICATION_FAILURE",
        Ongoing => "AUTHENTICATION_ONGOING",
    }
);

string_enum!(
    AccessTech {
        Nr => "NR",
        EutranInWbs1ModeAndNbs1Mode => "EUTRAN_IN_WBS1_MODE_AND_NBS1_MODE",
        EutranInNbs1ModeOnly => "EUTRAN_IN_NBS1_MODE_ONLY",
        EutranInWbs1ModeOnly => "EUTRAN_IN_WBS1_MODE_ONLY",
        Utran => "UTRAN",
        GsmAndEcgsmIot => "GSM_AND_ECGSM_IoT",
        GsmWithoutEcgsmIot => "GSM_WITHOUT_ECGSM_IoT",
        EcgsmIotOnly => "ECGSM_IoT_ONLY",
        Cdma1xRtt => "CDMA_1xRTT",
        CdmaHrpd => "CDMA_HRPD",
        GsmCompact => "GSM_COMPACT",
    }
);

/// `_links` map keyed by relation name.
pub type Links = BTreeMap<String, LinksValueSchema>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResynchronizationInfo {
    pub rand: Rand,
    pub auts: Auts,
}

impl Validate for ResynchronizationInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("rand", &self.rand);
        ctx.field("auts", &self.auts);
    }
}

/// Request body of the authenticate operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationInfo {
    pub supi_or_suci: SupiOrSuci,
    pub serving_network_name: ServingNetworkName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resynchronization_info: Option<ResynchronizationInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pei: Option<Pei>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub trace_data: Nullable<TraceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udm_group_id: Option<NfGroupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_indicator: Option<RoutingIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n5gc_ind: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

impl AuthenticationInfo {
    pub fn new(supi_or_suci: impl Into<String>, serving_network_name: impl Into<String>) -> Self {
        Self {
            supi_or_suci: SupiOrSuci::new(supi_or_suci),
            serving_network_name: ServingNetworkName::new(serving_network_name),
            resynchronization_info: None,
            pei: None,
            trace_data: Nullable::Absent,
            udm_group_id: None,
            routing_indicator: None,
            n5gc_ind: None,
            supported_features: None,
        }
    }
}

impl Validate for AuthenticationInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("supiOrSuci", &self.supi_or_suci);
        ctx.field("servingNetworkName", &self.serving_network_name);
        ctx.optional("resynchronizationInfo", &self.resynchronization_info);
        ctx.optional("pei", &self.pei);
        ctx.optional_nullable("traceData", &self.trace_data);
        ctx.optional("udmGroupId", &self.udm_group_id);
        ctx.optional("routingIndicator", &self.routing_indicator);
        ctx.optional("supportedFeatures", &self.supported_features);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Av5gAka {
    pub rand: Rand,
    pub hxres_star: HxresStar,
    pub autn: Autn,
}

impl Validate for Av5gAka {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("rand", &self.rand);
        ctx.field("hxresStar", &self.hxres_star);
        ctx.field("autn", &self.autn);
    }
}

/// Either a 5G AKA vector or the first EAP packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthData {
    Av5gAka(Av5gAka),
    EapPayload(EapPayload),
}

impl Validate for AuthData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        match self {
            AuthData::Av5gAka(av) => av.validate_into(ctx),
            AuthData::EapPayload(payload) => payload.validate_into(ctx),
        }
    }
}

/// Created authentication context returned by authenticate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UeAuthenticationCtx {
    pub auth_type: AuthType,
    #[serde(rename = "5gAuthData")]
    pub five_g_auth_data: AuthData,
    #[serde(rename = "_links")]
    pub links: Links,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_network_name: Option<ServingNetworkName>,
}

impl Validate for UeAuthenticationCtx {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("authType", &self.auth_type);
        ctx.field("5gAuthData", &self.five_g_auth_data);
        if self.links.is_empty() {
            ctx.at("_links", |ctx| ctx.report("must contain at least 1 item(s)"));
        }
        ctx.entries("_links", &self.links);
        ctx.optional("servingNetworkName", &self.serving_network_name);
    }
}

/// Request body of the 5G AKA confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationData {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub res_star: Nullable<ResStar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

impl Validate for ConfirmationData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.required_nullable("resStar", &self.res_star);
        ctx.optional("supportedFeatures", &self.supported_features);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationDataResponse {
    pub auth_result: AuthResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi: Option<Supi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kseaf: Option<Kseaf>,
}

impl Validate for ConfirmationDataResponse {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("authResult", &self.auth_result);
        ctx.optional("supi", &self.supi);
        ctx.optional("kseaf", &self.kseaf);
    }
}

/// EAP exchange in both directions of the eap-session operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EapSession {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub eap_payload: Nullable<EapPayload>,
    #[serde(rename = "kSeaf", skip_serializing_if = "Option::is_none")]
    pub k_seaf: Option<Kseaf>,
    #[serde(rename = "_links", skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_result: Option<AuthResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi: Option<Supi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

impl Validate for EapSession {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.required_nullable("eapPayload", &self.eap_payload);
        ctx.optional("kSeaf", &self.k_seaf);
        if let Some(links) = &self.links {
            ctx.entries("_links", links);
        }
        ctx.optional("authResult", &self.auth_result);
        ctx.optional("supi", &self.supi);
        ctx.optional("supportedFeatures", &self.supported_features);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteeringInfo {
    pub plmn_id: PlmnId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_tech_list: Option<Vec<AccessTech>>,
}

impl Validate for SteeringInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("plmnId", &self.plmn_id);
        ctx.optional_each_min("accessTechList", &self.access_tech_list, 1);
    }
}

/// Preferred PLMN list in clear or already secured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SteeringContainer {
    SteeringInfo(Vec<SteeringInfo>),
    SecuredPacket(SecuredPacket),
}

impl Validate for SteeringContainer {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        match self {
            SteeringContainer::SteeringInfo(list) => {
                if list.is_empty() {
                    ctx.report("must contain at least 1 item(s)");
                }
                list.validate_into(ctx);
            }
            SteeringContainer::SecuredPacket(packet) => packet.validate_into(ctx),
        }
    }
}

/// Request body of the SoR protection operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steering_container: Option<SteeringContainer>,
    pub ack_ind: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sor_header: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sor_transparent_info: Option<Bytes>,
}

impl Validate for SorInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.optional("steeringContainer", &self.steering_container);
        ctx.optional("sorHeader", &self.sor_header);
        ctx.optional("sorTransparentInfo", &self.sor_transparent_info);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SorSecurityInfo {
    pub sor_mac_iausf: SorMac,
    pub counter_sor: CounterSor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sor_xmac_iue: Option<SorMac>,
}

impl Validate for SorSecurityInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("sorMacIausf", &self.sor_mac_iausf);
        ctx.field("counterSor", &self.counter_sor);
        ctx.optional("sorXmacIue", &self.sor_xmac_iue);
    }
}

/// One UE parameter: a secured packet or the default configured NSSAI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UpuDataFields", into = "UpuDataFields")]
pub enum UpuData {
    SecPacket(SecuredPacket),
    DefaultConfNssai(Vec<Snssai>),
}

/// Wire form of [`UpuData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpuDataFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec_packet: Option<SecuredPacket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_conf_nssai: Option<Vec<Snssai>>,
}

impl UpuDataFields {
    fn check_group(&self, ctx: &mut ValidationContext) {
        ctx.exactly_one(&[
            ("secPacket", self.sec_packet.is_some()),
            ("defaultConfNssai", self.default_conf_nssai.is_some()),
        ]);
    }
}

impl Validate for UpuDataFields {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        self.check_group(ctx);
        ctx.optional("secPacket", &self.sec_packet);
        ctx.optional_each_min("defaultConfNssai", &self.default_conf_nssai, 1);
    }
}

impl TryFrom<UpuDataFields> for UpuData {
    type Error = ValidationErrors;

    fn try_from(fields: UpuDataFields) -> Result<Self, Self::Error> {
        match (fields.sec_packet, fields.default_conf_nssai) {
            (Some(packet), None) => Ok(UpuData::SecPacket(packet)),
            (None, Some(nssai)) => Ok(UpuData::DefaultConfNssai(nssai)),
            (sec_packet, default_conf_nssai) => {
                let mut ctx = ValidationContext::new();
                UpuDataFields {
                    sec_packet,
                    default_conf_nssai,
                }
                .check_group(&mut ctx);
                Err(ctx.finish().err().unwrap_or_default())
            }
        }
    }
}

impl From<UpuData> for UpuDataFields {
    fn from(data: UpuData) -> Self {
        match data {
            UpuData::SecPacket(packet) => Self {
                sec_packet: Some(packet),
                default_conf_nssai: None,
            },
            UpuData::DefaultConfNssai(nssai) => Self {
                sec_packet: None,
                default_conf_nssai: Some(nssai),
            },
        }
    }
}

impl Validate for UpuData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        match self {
            UpuData::SecPacket(packet) => ctx.field("secPacket", packet),
            UpuData::DefaultConfNssai(nssai) => ctx.each_min("defaultConfNssai", nssai, 1),
        }
    }
}

/// Request body of the UPU protection operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpuInfo {
    pub upu_data_list: Vec<UpuData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upu_header: Option<Bytes>,
    pub upu_ack_ind: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi_or_suci: Option<SupiOrSuci>,
}

impl Validate for UpuInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.each_min("upuDataList", &self.upu_data_list, 1);
        ctx.optional("upuHeader", &self.upu_header);
        ctx.optional("supiOrSuci", &self.supi_or_suci);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpuSecurityInfo {
    pub upu_mac_iausf: UpuMac,
    pub counter_upu: CounterUpu,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upu_xmac_iue: Option<UpuMac>,
}

impl Validate for UpuSecurityInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("upuMacIausf", &self.upu_mac_iausf);
        ctx.field("counterUpu", &self.counter_upu);
        ctx.optional("upuXmacIue", &self.upu_xmac_iue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::Link;
    use serde_json::json;

    #[test]
    fn test_serving_network_name() {
        assert!(ServingNetworkName::from("5G:mnc093.mcc208.3gppnetwork.org")
            .validate()
            .is_ok());
        assert!(ServingNetworkName::from("5G:NSWO").validate().is_ok());
        assert!(ServingNetworkName::from("mnc093.mcc208").validate().is_err());
    }

    #[test]
    fn test_auth_data_picks_variant() {
        let av: AuthData = serde_json::from_value(json!({
            "rand": "0123456789abcdef0123456789abcdef",
            "hxresStar": "0123456789abcdef0123456789abcdef",
            "autn": "0123456789abcdef0123456789abcdef"
        }))
        .unwrap();
        assert!(matches!(av, AuthData::Av5gAka(_)));

        let eap: AuthData = serde_json::from_value(json!("AgEAAA==")).unwrap();
        assert!(matches!(eap, AuthData::EapPayload(_)));
    }

    #[test]
    fn test_ue_authentication_ctx_wire_names() {
        let mut links = Links::new();
        links.insert(
            "5g-aka".to_string(),
            LinksValueSchema::Link(Link {
                href: "/nausf-auth/v1/ue-authentications/ctx-1/5g-aka-confirmation".into(),
            }),
        );
        let ctx = UeAuthenticationCtx {
            auth_type: AuthType::FiveGAka,
            five_g_auth_data: AuthData::EapPayload(EapPayload::from("AgEAAA==")),
            links,
            serving_network_name: None,
        };
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["authType"], "5G_AKA");
        assert_eq!(json["5gAuthData"], "AgEAAA==");
        assert!(json["_links"]["5g-aka"]["href"].is_string());
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_confirmation_res_star_is_required_but_nullable() {
        let absent: ConfirmationData = serde_json::from_value(json!({})).unwrap();
        assert!(absent.validate().unwrap_err().has_path("resStar"));

        let null: ConfirmationData = serde_json::from_value(json!({"resStar": null})).unwrap();
        assert!(null.validate().is_ok());

        let bad: ConfirmationData = serde_json::from_value(json!({"resStar": "abc"})).unwrap();
        assert!(bad.validate().unwrap_err().has_path("resStar"));
    }

    #[test]
    fn test_upu_data_exclusive_group() {
        let both = UpuDataFields {
            sec_packet: Some(SecuredPacket::from("AQID")),
            default_conf_nssai: Some(vec![]),
        };
        assert!(both.validate().is_err());
        assert!(UpuDataFields::default().validate().is_err());

        assert!(serde_json::from_value::<UpuData>(json!({})).is_err());
        assert!(serde_json::from_value::<UpuData>(json!({
            "secPacket": "AQID",
            "defaultConfNssai": [{"sst": 1}]
        }))
        .is_err());

        let data: UpuData = serde_json::from_value(json!({"defaultConfNssai": [{"sst": 1}]})).unwrap();
        assert!(matches!(data, UpuData::DefaultConfNssai(ref n) if n.len() == 1));
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({"defaultConfNssai": [{"sst": 1}]})
        );
    }

    #[test]
    fn test_steering_container_and_security_info() {
        let info: SorInfo = serde_json::from_value(json!({
            "steeringContainer": [{"plmnId": {"mcc": "208", "mnc": "93"}, "accessTechList": ["NR"]}],
            "ackInd": true
        }))
        .unwrap();
        assert!(matches!(
            info.steering_container,
            Some(SteeringContainer::SteeringInfo(_))
        ));
        assert!(info.validate().is_ok());

        let security = SorSecurityInfo {
            sor_mac_iausf: SorMac::from("0123456789abcdef0123456789abcdef"),
            counter_sor: CounterSor::from("00012"),
            sor_xmac_iue: None,
        };
        assert!(security.validate().unwrap_err().has_path("counterSor"));
    }
}
