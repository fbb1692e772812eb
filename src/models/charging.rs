//! Charging identifiers and usage reports (TS 29.571 clause 5.8).

use crate::models::common::{DateTime, Uint64};
use crate::models::network::RatType;
use crate::models::qos::Qfi;
use crate::utils::validation::{Validate, ValidationContext};
use serde::{Deserialize, Serialize};

integer_scalar!(ChargingId: u64, range = 0 ..= 4294967295);
integer_scalar!(RatingGroupId: u64, range = 0 ..= 4294967295);
integer_scalar!(ServiceId: u64, range = 0 ..= 4294967295);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QosFlowUsageReport {
    pub qfi: Qfi,
    pub start_time_stamp: DateTime,
    pub end_time_stamp: DateTime,
    pub downlink_volume: Uint64,
    pub uplink_volume: Uint64,
}

impl Validate for QosFlowUsageReport {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("qfi", &self.qfi);
        ctx.field("startTimeStamp", &self.start_time_stamp);
        ctx.field("endTimeStamp", &self.end_time_stamp);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryRatUsageReport {
    pub secondary_rat_type: RatType,
    pub qos_flows_usage_data: Vec<QosFlowUsageReport>,
}

impl Validate for SecondaryRatUsageReport {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("secondaryRatType", &self.secondary_rat_type);
        ctx.each_min("qosFlowsUsageData", &self.qos_flows_usage_data, 1);
    }
}
