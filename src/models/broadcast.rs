//! Ciphering key data of the Nlmf_Broadcast service.

use crate::models::common::{Bytes, DateTime, SupportedFeatures};
use crate::models::network::Tai;
use crate::utils::validation::{Validate, ValidationContext};
use serde::{Deserialize, Serialize};

integer_scalar!(CipheringSetId: u32, range = 0 ..= 65535);
integer_scalar!(
    /// Validity of a ciphering data set in minutes.
    ValidityDuration: u32,
    range = 1 ..= 65535
);
string_scalar!(
    /// 128 bit key in hex.
    CipheringKey,
    pattern = r"^[A-Fa-f0-9]{32}$"
);
string_scalar!(
    /// 128 bit initial counter in hex.
    C0,
    pattern = r"^[A-Fa-f0-9]{32}$"
);

/// Request body of CipheringKeyData.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherRequestData {
    pub tai_list: Vec<Tai>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

impl Validate for CipherRequestData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.each_min("taiList", &self.tai_list, 1);
        ctx.optional("supportedFeatures", &self.supported_features);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipheringDataSet {
    #[serde(rename = "cipheringSetID")]
    pub ciphering_set_id: CipheringSetId,
    pub ciphering_key: CipheringKey,
    pub c0: C0,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte_pos_sib_types: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nr_pos_sib_types: Option<Bytes>,
    pub validity_start_time: DateTime,
    pub validity_duration: ValidityDuration,
}

impl Validate for CipheringDataSet {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("cipheringSetID", &self.ciphering_set_id);
        ctx.field("cipheringKey", &self.ciphering_key);
        ctx.field("c0", &self.c0);
        ctx.field("validityStartTime", &self.validity_start_time);
        ctx.field("validityDuration", &self.validity_duration);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipheringKeyInfo {
    pub ciphering_data_set: Vec<CipheringDataSet>,
    pub tai_list: Vec<Tai>,
}

impl Validate for CipheringKeyInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.each_min("cipheringDataSet", &self.ciphering_data_set, 1);
        ctx.each_min("taiList", &self.tai_list, 1);
    }
}

/// Successful answer of CipheringKeyData.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherResponseData {
    pub ciphering_key_info: Vec<CipheringKeyInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

impl Validate for CipherResponseData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.each_min("cipheringKeyInfo", &self.ciphering_key_info, 1);
        ctx.optional("supportedFeatures", &self.supported_features);
    }
}
