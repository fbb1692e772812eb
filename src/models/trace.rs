//! Trace activation data (TS 29.571 clause 5.6).

use crate::models::common::{Ipv4Addr, Ipv6Addr};
use crate::utils::validation::{Validate, ValidationContext};
use serde::{Deserialize, Serialize};

string_scalar!(
    /// MCC, MNC and a 3 octet trace id, e.g. `20893-abc123`.
    TraceRef,
    pattern = r"^[0-9]{3}[0-9]{2,3}-[A-Fa-f0-9]{6}$"
);
string_scalar!(
    /// Hex bitmap of network element types to trace.
    NeTypeList,
    pattern = r"^[A-Fa-f0-9]+$"
);
string_scalar!(EventList, pattern = r"^[A-Fa-f0-9]+$");
string_scalar!(InterfaceList, pattern = r"^[A-Fa-f0-9]+$");

string_enum!(
    TraceDepth {
        Minimum => "MINIMUM",
        Medium => "MEDIUM",
        Maximum => "MAXIMUM",
        MinimumWoVendorExtension => "MINIMUM_WO_VENDOR_EXTENSION",
        MediumWoVendorExtension => "MEDIUM_WO_VENDOR_EXTENSION",
        MaximumWoVendorExtension => "MAXIMUM_WO_VENDOR_EXTENSION",
    }
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceData {
    pub trace_ref: TraceRef,
    pub trace_depth: TraceDepth,
    pub ne_type_list: NeTypeList,
    pub event_list: EventList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_entity_ipv4_addr: Option<Ipv4Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_entity_ipv6_addr: Option<Ipv6Addr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_list: Option<InterfaceList>,
}

impl Validate for TraceData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.at_least_one(&[
            ("collectionEntityIpv4Addr", self.collection_entity_ipv4_addr.is_some()),
            ("collectionEntityIpv6Addr", self.collection_entity_ipv6_addr.is_some()),
        ]);
        ctx.field("traceRef", &self.trace_ref);
        ctx.field("traceDepth", &self.trace_depth);
        ctx.field("neTypeList", &self.ne_type_list);
        ctx.field("eventList", &self.event_list);
        ctx.optional("collectionEntityIpv4Addr", &self.collection_entity_ipv4_addr);
        ctx.optional("collectionEntityIpv6Addr", &self.collection_entity_ipv6_addr);
        ctx.optional("interfaceList", &self.interface_list);
    }
}
