//! Subscription and NF identifiers (TS 29.571 clauses 5.3 and 5.4).

use crate::models::network::{Mcc, Mnc, PlmnId};
use crate::utils::validation::{Validate, ValidationContext};
use serde::{Deserialize, Serialize};

string_scalar!(
    /// Data network name.
    Dnn
);
string_scalar!(
    Gpsi,
    pattern = r"^(msisdn-[0-9]{5,15}|extid-[^@]+@[^@]+|.+)$"
);
string_scalar!(
    GroupId,
    pattern = r"^[A-Fa-f0-9]{8}-[0-9]{3}-[0-9]{2,3}-([A-Fa-f0-9][A-Fa-f0-9]){1,10}$"
);
string_scalar!(
    Pei,
    pattern = r"^(imei-[0-9]{15}|imeisv-[0-9]{16}|mac((-[0-9a-fA-F]{2}){6})(-untrusted)?|eui((-[0-9a-fA-F]{2}){8})|.+)$"
);
string_scalar!(
    Supi,
    pattern = r"^(imsi-[0-9]{5,15}|nai-.+|gci-.+|gli-.+|.+)$"
);
string_scalar!(
    /// UUID of an NF instance.
    NfInstanceId,
    pattern = r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
);
string_scalar!(
    /// AMF region (8 bit), set (10 bit) and pointer (6 bit) in hex.
    AmfId,
    pattern = r"^[A-Fa-f0-9]{6}$"
);
string_scalar!(AmfRegionId, pattern = r"^[A-Fa-f0-9]{2}$");
string_scalar!(AmfSetId, pattern = r"^[0-3][A-Fa-f0-9]{2}$");
string_scalar!(NfGroupId);

integer_scalar!(RfspIndex: u32, range = 1 ..= 256);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guami {
    pub plmn_id: PlmnId,
    pub amf_id: AmfId,
}

impl Validate for Guami {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("plmnId", &self.plmn_id);
        ctx.field("amfId", &self.amf_id);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnc: Option<Mnc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<Mcc>,
}

impl Validate for NetworkId {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.optional("mnc", &self.mnc);
        ctx.optional("mcc", &self.mcc);
    }
}
