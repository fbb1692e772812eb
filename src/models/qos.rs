//! QoS descriptors (TS 29.571 clause 5.5).

use crate::utils::validation::{Validate, ValidationContext};
use serde::{Deserialize, Serialize};

integer_scalar!(
    /// QoS flow identifier.
    Qfi: u32,
    range = 0 ..= 63
);
integer_scalar!(FiveQi: u32, range = 0 ..= 255);
integer_scalar!(ArpPriorityLevel: u32, range = 1 ..= 15);
integer_scalar!(FiveQiPriorityLevel: u32, range = 1 ..= 127);
integer_scalar!(
    /// Packet delay budget in milliseconds.
    PacketDelBudget: u32,
    min = 1
);
integer_scalar!(
    /// Packet loss rate in units of 0.1 percent.
    PacketLossRate: u32,
    range = 0 ..= 1000
);
integer_scalar!(
    /// Averaging window in milliseconds.
    AverWindow: u32,
    range = 1 ..= 4095
);
integer_scalar!(MaxDataBurstVol: u32, range = 1 ..= 4095);

string_scalar!(
    /// e.g. `125 Mbps`.
    BitRate,
    pattern = r"^\d+(\.\d+)? (bps|Kbps|Mbps|Gbps|Tbps)$"
);
string_scalar!(
    /// Scalar and exponent, e.g. `1E-6`.
    PacketErrRate,
    pattern = r"^([0-9]E-[0-9])$"
);

string_enum!(
    PreemptionCapability {
        NotPreempt => "NOT_PREEMPT",
        MayPreempt => "MAY_PREEMPT",
    }
);

string_enum!(
    PreemptionVulnerability {
        NotPreemptable => "NOT_PREEMPTABLE",
        Preemptable => "PREEMPTABLE",
    }
);

string_enum!(
    ReflectiveQosAttribute {
        Rqos => "RQOS",
        NoRqos => "NO_RQOS",
    }
);

string_enum!(
    NotificationControl {
        Requested => "REQUESTED",
        NotRequested => "NOT_REQUESTED",
    }
);

string_enum!(
    QosResourceType {
        NonGbr => "NON_GBR",
        NonCriticalGbr => "NON_CRITICAL_GBR",
        CriticalGbr => "CRITICAL_GBR",
    }
);

string_enum!(
    AdditionalQosFlowInfo {
        MoreLikely => "MORE_LIKELY",
    }
);

/// Allocation and retention priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arp {
    pub priority_level: ArpPriorityLevel,
    pub preempt_cap: PreemptionCapability,
    pub preempt_vuln: PreemptionVulnerability,
}

impl Validate for Arp {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("priorityLevel", &self.priority_level);
        ctx.field("preemptCap", &self.preempt_cap);
        ctx.field("preemptVuln", &self.preempt_vuln);
    }
}

/// Aggregate maximum bit rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ambr {
    pub uplink: BitRate,
    pub downlink: BitRate,
}

impl Validate for Ambr {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("uplink", &self.uplink);
        ctx.field("downlink", &self.downlink);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dynamic5Qi {
    pub resource_type: QosResourceType,
    pub priority_level: FiveQiPriorityLevel,
    pub packet_delay_budget: PacketDelBudget,
    pub packet_err_rate: PacketErrRate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aver_window: Option<AverWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_data_burst_vol: Option<MaxDataBurstVol>,
}

impl Validate for Dynamic5Qi {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("resourceType", &self.resource_type);
        ctx.field("priorityLevel", &self.priority_level);
        ctx.field("packetDelayBudget", &self.packet_delay_budget);
        ctx.field("packetErrRate", &self.packet_err_rate);
        ctx.optional("averWindow", &self.aver_window);
        ctx.optional("maxDataBurstVol", &self.max_data_burst_vol);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonDynamic5Qi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_level: Option<FiveQiPriorityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aver_window: Option<AverWindow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_data_burst_vol: Option<MaxDataBurstVol>,
}

impl Validate for NonDynamic5Qi {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.optional("priorityLevel", &self.priority_level);
        ctx.optional("averWindow", &self.aver_window);
        ctx.optional("maxDataBurstVol", &self.max_data_burst_vol);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribedDefaultQos {
    #[serde(rename = "5qi")]
    pub five_qi: FiveQi,
    pub arp: Arp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_level: Option<FiveQiPriorityLevel>,
}

impl Validate for SubscribedDefaultQos {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("5qi", &self.five_qi);
        ctx.field("arp", &self.arp);
        ctx.optional("priorityLevel", &self.priority_level);
    }
}
