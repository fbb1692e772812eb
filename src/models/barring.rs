//! Operator determined barring (TS 29.571 clause 5.7).

use crate::utils::validation::{Validate, ValidationContext};
use serde::{Deserialize, Serialize};

string_enum!(
    RoamingOdb {
        OutsideHomePlmn => "OUTSIDE_HOME_PLMN",
        OutsideHomePlmnCountry => "OUTSIDE_HOME_PLMN_COUNTRY",
    }
);

string_enum!(
    OdbPacketServices {
        AllPacketServices => "ALL_PACKET_SERVICES",
        RoamerAccessHplmnAp => "ROAMER_ACCESS_HPLMN_AP",
        RoamerAccessVplmnAp => "ROAMER_ACCESS_VPLMN_AP",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OdbData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roaming_odb: Option<RoamingOdb>,
}

impl Validate for OdbData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.optional("roamingOdb", &self.roaming_odb);
    }
}
