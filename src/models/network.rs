//! Network identifiers and location types (TS 29.571 clause 5.4).

use crate::models::common::{DateTime, Ipv4Addr, Ipv6Addr, Uinteger};
use crate::models::subscription::Guami;
use crate::utils::validation::{Validate, ValidationContext, ValidationErrors};
use serde::{Deserialize, Serialize};

string_scalar!(ApplicationId);
string_scalar!(
    /// Data network access identifier.
    Dnai
);
string_scalar!(AreaCode);
string_scalar!(
    /// FQDN of an AMF.
    AmfName
);
string_scalar!(Mcc, pattern = r"^[0-9]{3}$");
string_scalar!(Mnc, pattern = r"^[0-9]{2,3}$");
string_scalar!(
    /// Tracking area code, 16 or 24 bit in hex.
    Tac,
    pattern = r"(^[A-Fa-f0-9]{4}$)|(^[A-Fa-f0-9]{6}$)"
);
string_scalar!(EutraCellId, pattern = r"^[A-Fa-f0-9]{7}$");
string_scalar!(NrCellId, pattern = r"^[A-Fa-f0-9]{9}$");
string_scalar!(
    /// Network identifier of a stand-alone non-public network.
    Nid,
    pattern = r"^[A-Fa-f0-9]{11}$"
);
string_scalar!(N3IwfId, pattern = r"^[A-Fa-f0-9]+$");
string_scalar!(
    NgeNbId,
    pattern = r"^(MacroNGeNB-[A-Fa-f0-9]{5}|LMacroNGeNB-[A-Fa-f0-9]{6}|SMacroNGeNB-[A-Fa-f0-9]{5})$"
);
string_scalar!(
    /// Slice differentiator.
    Sd,
    pattern = r"^[A-Fa-f0-9]{6}$"
);
string_scalar!(GnbValue, pattern = r"^[A-Fa-f0-9]{6,8}$");
string_scalar!(GeographicalInformation, pattern = r"^[0-9A-F]{16}$");
string_scalar!(GeodeticInformation, pattern = r"^[0-9A-F]{20}$");

integer_scalar!(PduSessionId: u32, range = 0 ..= 255);
integer_scalar!(FiveGMmCause: u32);
integer_scalar!(
    /// Slice/service type.
    Sst: u32,
    range = 0 ..= 255
);
integer_scalar!(AgeOfLocationInformation: u32, range = 0 ..= 32767);
integer_scalar!(GnbBitLength: u32, range = 22 ..= 32);
integer_scalar!(NgApCauseGroup: u32, range = 0 ..= 4);

string_enum!(
    AccessType {
        ThreeGppAccess => "3GPP_ACCESS",
        NonThreeGppAccess => "NON_3GPP_ACCESS",
    }
);

string_enum!(
    RatType {
        Nr => "NR",
        Eutra => "EUTRA",
        Wlan => "WLAN",
        Virtual => "VIRTUAL",
    }
);

string_enum!(
    PduSessionType {
        Ipv4 => "IPV4",
        Ipv6 => "IPV6",
        Ipv4v6 => "IPV4V6",
        Unstructured => "UNSTRUCTURED",
        Ethernet => "ETHERNET",
    }
);

string_enum!(
    UpIntegrity {
        Required => "REQUIRED",
        Preferred => "PREFERRED",
        NotNeeded => "NOT_NEEDED",
    }
);

string_enum!(
    UpConfidentiality {
        Required => "REQUIRED",
        Preferred => "PREFERRED",
        NotNeeded => "NOT_NEEDED",
    }
);

string_enum!(
    SscMode {
        Mode1 => "SSC_MODE_1",
        Mode2 => "SSC_MODE_2",
        Mode3 => "SSC_MODE_3",
    }
);

string_enum!(
    DnaiChangeType {
        Early => "EARLY",
        EarlyLate => "EARLY_LATE",
        Late => "LATE",
    }
);

string_enum!(
    RestrictionType {
        AllowedAreas => "ALLOWED_AREAS",
        NotAllowedAreas => "NOT_ALLOWED_AREAS",
    }
);

string_enum!(
    CoreNetworkType {
        FiveGc => "5GC",
        Epc => "EPC",
    }
);

string_enum!(
    PresenceState {
        InArea => "IN_AREA",
        OutOfArea => "OUT_OF_AREA",
        Unknown => "UNKNOWN",
        Inactive => "INACTIVE",
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlmnId {
    pub mcc: Mcc,
    pub mnc: Mnc,
}

impl PlmnId {
    pub fn new(mcc: &str, mnc: &str) -> Self {
        Self {
            mcc: Mcc::from(mcc),
            mnc: Mnc::from(mnc),
        }
    }
}

impl Validate for PlmnId {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("mcc", &self.mcc);
        ctx.field("mnc", &self.mnc);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snssai {
    pub sst: Sst,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd: Option<Sd>,
}

impl Validate for Snssai {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("sst", &self.sst);
        ctx.optional("sd", &self.sd);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tai {
    pub plmn_id: PlmnId,
    pub tac: Tac,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nid: Option<Nid>,
}

impl Validate for Tai {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("plmnId", &self.plmn_id);
        ctx.field("tac", &self.tac);
        ctx.optional("nid", &self.nid);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ecgi {
    pub plmn_id: PlmnId,
    pub eutra_cell_id: EutraCellId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nid: Option<Nid>,
}

impl Validate for Ecgi {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("plmnId", &self.plmn_id);
        ctx.field("eutraCellId", &self.eutra_cell_id);
        ctx.optional("nid", &self.nid);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ncgi {
    pub plmn_id: PlmnId,
    pub nr_cell_id: NrCellId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nid: Option<Nid>,
}

impl Validate for Ncgi {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("plmnId", &self.plmn_id);
        ctx.field("nrCellId", &self.nr_cell_id);
        ctx.optional("nid", &self.nid);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnbId {
    #[serde(rename = "bitLength")]
    pub bit_length: GnbBitLength,
    #[serde(rename = "gNBValue")]
    pub gnb_value: GnbValue,
}

impl Validate for GnbId {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("bitLength", &self.bit_length);
        ctx.field("gNBValue", &self.gnb_value);
    }
}

/// The node half of a [`GlobalRanNodeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RanNodeId {
    N3Iwf(N3IwfId),
    Gnb(GnbId),
    NgeNb(NgeNbId),
}

/// Global identity of a RAN node: a PLMN plus at most one node identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GlobalRanNodeIdFields", into = "GlobalRanNodeIdFields")]
pub struct GlobalRanNodeId {
    pub plmn_id: PlmnId,
    pub node: Option<RanNodeId>,
}

/// Wire form of [`GlobalRanNodeId`], one optional field per node kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalRanNodeIdFields {
    pub plmn_id: PlmnId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n3_iwf_id: Option<N3IwfId>,
    #[serde(rename = "gNbId", skip_serializing_if = "Option::is_none")]
    pub gnb_id: Option<GnbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nge_nb_id: Option<NgeNbId>,
}

impl GlobalRanNodeIdFields {
    fn check_group(&self, ctx: &mut ValidationContext) {
        ctx.at_most_one(&[
            ("n3IwfId", self.n3_iwf_id.is_some()),
            ("gNbId", self.gnb_id.is_some()),
            ("ngeNbId", self.nge_nb_id.is_some()),
        ]);
    }
}

impl Validate for GlobalRanNodeIdFields {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        self.check_group(ctx);
        ctx.field("plmnId", &self.plmn_id);
        ctx.optional("n3IwfId", &self.n3_iwf_id);
        ctx.optional("gNbId", &self.gnb_id);
        ctx.optional("ngeNbId", &self.nge_nb_id);
    }
}

impl TryFrom<GlobalRanNodeIdFields> for GlobalRanNodeId {
    type Error = ValidationErrors;

    fn try_from(fields: GlobalRanNodeIdFields) -> Result<Self, Self::Error> {
        let mut ctx = ValidationContext::new();
        fields.check_group(&mut ctx);
        ctx.finish()?;

        let node = match (fields.n3_iwf_id, fields.gnb_id, fields.nge_nb_id) {
            (Some(id), _, _) => Some(RanNodeId::N3Iwf(id)),
            (_, Some(id), _) => Some(RanNodeId::Gnb(id)),
            (_, _, Some(id)) => Some(RanNodeId::NgeNb(id)),
            (None, None, None) => None,
        };
        Ok(Self {
            plmn_id: fields.plmn_id,
            node,
        })
    }
}

impl From<GlobalRanNodeId> for GlobalRanNodeIdFields {
    fn from(id: GlobalRanNodeId) -> Self {
        let mut fields = Self {
            plmn_id: id.plmn_id,
            n3_iwf_id: None,
            gnb_id: None,
            nge_nb_id: None,
        };
        match id.node {
            Some(RanNodeId::N3Iwf(v)) => fields.n3_iwf_id = Some(v),
            Some(RanNodeId::Gnb(v)) => fields.gnb_id = Some(v),
            Some(RanNodeId::NgeNb(v)) => fields.nge_nb_id = Some(v),
            None => {}
        }
        fields
    }
}

impl Validate for GlobalRanNodeId {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("plmnId", &self.plmn_id);
        match &self.node {
            Some(RanNodeId::N3Iwf(id)) => ctx.field("n3IwfId", id),
            Some(RanNodeId::Gnb(id)) => ctx.field("gNbId", id),
            Some(RanNodeId::NgeNb(id)) => ctx.field("ngeNbId", id),
            None => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EutraLocation {
    pub tai: Tai,
    pub ecgi: Ecgi,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_ecgi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_of_location_information: Option<AgeOfLocationInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ue_location_timestamp: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographical_information: Option<GeographicalInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geodetic_information: Option<GeodeticInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_ngenb_id: Option<GlobalRanNodeId>,
}

impl Validate for EutraLocation {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("tai", &self.tai);
        ctx.field("ecgi", &self.ecgi);
        ctx.optional("ageOfLocationInformation", &self.age_of_location_information);
        ctx.optional("ueLocationTimestamp", &self.ue_location_timestamp);
        ctx.optional("geographicalInformation", &self.geographical_information);
        ctx.optional("geodeticInformation", &self.geodetic_information);
        ctx.optional("globalNgenbId", &self.global_ngenb_id);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NrLocation {
    pub tai: Tai,
    pub ncgi: Ncgi,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_ncgi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_of_location_information: Option<AgeOfLocationInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ue_location_timestamp: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographical_information: Option<GeographicalInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geodetic_information: Option<GeodeticInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_gnb_id: Option<GlobalRanNodeId>,
}

impl Validate for NrLocation {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("tai", &self.tai);
        ctx.field("ncgi", &self.ncgi);
        ctx.optional("ageOfLocationInformation", &self.age_of_location_information);
        ctx.optional("ueLocationTimestamp", &self.ue_location_timestamp);
        ctx.optional("geographicalInformation", &self.geographical_information);
        ctx.optional("geodeticInformation", &self.geodetic_information);
        ctx.optional("globalGnbId", &self.global_gnb_id);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct N3gaLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n3gpp_tai: Option<Tai>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n3_iwf_id: Option<N3IwfId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ue_ipv4_addr: Option<Ipv4Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ue_ipv6_addr: Option<Ipv6Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_number: Option<Uinteger>,
}

impl Validate for N3gaLocation {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.at_least_one(&[
            ("ueIpv4Addr", self.ue_ipv4_addr.is_some()),
            ("ueIpv6Addr", self.ue_ipv6_addr.is_some()),
        ]);
        ctx.optional("n3gppTai", &self.n3gpp_tai);
        ctx.optional("n3IwfId", &self.n3_iwf_id);
        ctx.optional("ueIpv4Addr", &self.ue_ipv4_addr);
        ctx.optional("ueIpv6Addr", &self.ue_ipv6_addr);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eutra_location: Option<EutraLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nr_location: Option<NrLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n3ga_location: Option<N3gaLocation>,
}

impl Validate for UserLocation {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.at_least_one(&[
            ("eutraLocation", self.eutra_location.is_some()),
            ("nrLocation", self.nr_location.is_some()),
            ("n3gaLocation", self.n3ga_location.is_some()),
        ]);
        ctx.optional("eutraLocation", &self.eutra_location);
        ctx.optional("nrLocation", &self.nr_location);
        ctx.optional("n3gaLocation", &self.n3ga_location);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpSecurity {
    pub up_integr: UpIntegrity,
    pub up_confid: UpConfidentiality,
}

impl Validate for UpSecurity {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("upIntegr", &self.up_integr);
        ctx.field("upConfid", &self.up_confid);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgApCause {
    pub group: NgApCauseGroup,
    pub value: Uinteger,
}

impl Validate for NgApCause {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("group", &self.group);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupAmfInfo {
    pub backup_amf: AmfName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guami_list: Option<Vec<Guami>>,
}

impl Validate for BackupAmfInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("backupAmf", &self.backup_amf);
        ctx.optional_each_min("guamiList", &self.guami_list, 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefToBinaryData {
    pub content_id: String,
}

impl Validate for RefToBinaryData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        if self.content_id.is_empty() {
            ctx.at("contentId", |ctx| ctx.report("cannot be empty"));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_addr: Option<Ipv4Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_addr: Option<Ipv6Addr>,
    pub port_number: Uinteger,
}

impl Validate for RouteInformation {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.at_least_one(&[
            ("ipv4Addr", self.ipv4_addr.is_some()),
            ("ipv6Addr", self.ipv6_addr.is_some()),
        ]);
        ctx.optional("ipv4Addr", &self.ipv4_addr);
        ctx.optional("ipv6Addr", &self.ipv6_addr);
    }
}

/// Where traffic for a DNAI is routed: explicit route information or a
/// pre-provisioned routing profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    Info(RouteInformation),
    ProfileId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RouteToLocationFields", into = "RouteToLocationFields")]
pub struct RouteToLocation {
    pub dnai: Dnai,
    pub target: RouteTarget,
}

/// Wire form of [`RouteToLocation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteToLocationFields {
    pub dnai: Dnai,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_info: Option<RouteInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_prof_id: Option<String>,
}

impl RouteToLocationFields {
    fn check_group(&self, ctx: &mut ValidationContext) {
        ctx.exactly_one(&[
            ("routeInfo", self.route_info.is_some()),
            ("routeProfId", self.route_prof_id.is_some()),
        ]);
    }
}

impl Validate for RouteToLocationFields {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        self.check_group(ctx);
        ctx.field("dnai", &self.dnai);
        ctx.optional("routeInfo", &self.route_info);
    }
}

impl TryFrom<RouteToLocationFields> for RouteToLocation {
    type Error = ValidationErrors;

    fn try_from(fields: RouteToLocationFields) -> Result<Self, Self::Error> {
        let target = match (fields.route_info, fields.route_prof_id) {
            (Some(info), None) => RouteTarget::Info(info),
            (None, Some(id)) => RouteTarget::ProfileId(id),
            (route_info, route_prof_id) => {
                let mut ctx = ValidationContext::new();
                RouteToLocationFields {
                    dnai: fields.dnai,
                    route_info,
                    route_prof_id,
                }
                .check_group(&mut ctx);
                return Err(ctx.finish().err().unwrap_or_default());
            }
        };
        Ok(Self {
            dnai: fields.dnai,
            target,
        })
    }
}

impl From<RouteToLocation> for RouteToLocationFields {
    fn from(route: RouteToLocation) -> Self {
        let (route_info, route_prof_id) = match route.target {
            RouteTarget::Info(info) => (Some(info), None),
            RouteTarget::ProfileId(id) => (None, Some(id)),
        };
        Self {
            dnai: route.dnai,
            route_info,
            route_prof_id,
        }
    }
}

impl Validate for RouteToLocation {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("dnai", &self.dnai);
        if let RouteTarget::Info(info) = &self.target {
            ctx.field("routeInfo", info);
        }
    }
}

/// Either a list of tracking areas or an operator-defined area code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AreaFields", into = "AreaFields")]
pub enum Area {
    Tacs(Vec<Tac>),
    AreaCode(AreaCode),
}

/// Wire form of [`Area`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tacs: Option<Vec<Tac>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<AreaCode>,
}

impl AreaFields {
    fn check_group(&self, ctx: &mut ValidationContext) {
        ctx.exactly_one(&[
            ("tacs", self.tacs.is_some()),
            ("areaCode", self.area_code.is_some()),
        ]);
    }
}

impl Validate for AreaFields {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        self.check_group(ctx);
        ctx.optional_each_min("tacs", &self.tacs, 1);
        ctx.optional("areaCode", &self.area_code);
    }
}

impl TryFrom<AreaFields> for Area {
    type Error = ValidationErrors;

    fn try_from(fields: AreaFields) -> Result<Self, Self::Error> {
        match (fields.tacs, fields.area_code) {
            (Some(tacs), None) => Ok(Area::Tacs(tacs)),
            (None, Some(code)) => Ok(Area::AreaCode(code)),
            (tacs, area_code) => {
                let mut ctx = ValidationContext::new();
                AreaFields { tacs, area_code }.check_group(&mut ctx);
                Err(ctx.finish().err().unwrap_or_default())
            }
        }
    }
}

impl From<Area> for AreaFields {
    fn from(area: Area) -> Self {
        match area {
            Area::Tacs(tacs) => Self {
                tacs: Some(tacs),
                area_code: None,
            },
            Area::AreaCode(code) => Self {
                tacs: None,
                area_code: Some(code),
            },
        }
    }
}

impl Validate for Area {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        match self {
            Area::Tacs(tacs) => ctx.each_min("tacs", tacs, 1),
            Area::AreaCode(code) => ctx.field("areaCode", code),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAreaRestriction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction_type: Option<RestrictionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<Area>>,
    #[serde(rename = "maxNumOfTAs", skip_serializing_if = "Option::is_none")]
    pub max_num_of_tas: Option<Uinteger>,
    #[serde(
        rename = "maxNumOfTAsForNotAllowedAreas",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_num_of_tas_for_not_allowed_areas: Option<Uinteger>,
}

impl Validate for ServiceAreaRestriction {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.required_when(
            "restrictionType",
            self.restriction_type.is_some(),
            self.areas.is_some(),
            "areas is present",
        );
        ctx.absent_when(
            "maxNumOfTAs",
            self.max_num_of_tas.is_some(),
            self.restriction_type == Some(RestrictionType::NotAllowedAreas),
            "restrictionType=NOT_ALLOWED_AREAS",
        );
        ctx.optional("restrictionType", &self.restriction_type);
        if let Some(areas) = &self.areas {
            ctx.each("areas", areas);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pra_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_state: Option<PresenceState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_area_list: Option<Vec<Tai>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecgi_list: Option<Vec<Ecgi>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncgi_list: Option<Vec<Ncgi>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_ran_node_id_list: Option<Vec<GlobalRanNodeId>>,
}

impl Validate for PresenceInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.optional("presenceState", &self.presence_state);
        ctx.optional_each_min("trackingAreaList", &self.tracking_area_list, 1);
        ctx.optional_each_min("ecgiList", &self.ecgi_list, 1);
        ctx.optional_each_min("ncgiList", &self.ncgi_list, 1);
        ctx.optional_each_min("globalRanNodeIdList", &self.global_ran_node_id_list, 1);
    }
}
