//! Location service data of the Nlmf_Location service (TS 29.572) and the
//! GAD shapes it reports (TS 23.032).

use crate::models::common::{DateTime, SupportedFeatures, Uri};
use crate::models::network::{Ecgi, Ncgi};
use crate::models::subscription::{Gpsi, NfInstanceId, Pei, Supi};
use crate::utils::validation::{Validate, ValidationContext};
use serde::{Deserialize, Serialize};

float_scalar!(
    /// Uncertainty radius in metres.
    Uncertainty,
    min = 0.0
);
float_scalar!(
    /// Requested accuracy in metres.
    Accuracy,
    min = 0.0
);
float_scalar!(Altitude, range = -32767.0 ..= 32767.0);
float_scalar!(HorizontalSpeed, range = 0.0 ..= 2047.0);
float_scalar!(VerticalSpeed, range = 0.0 ..= 255.0);
float_scalar!(SpeedUncertainty, range = 0.0 ..= 255.0);
integer_scalar!(
    /// Orientation of the major axis in degrees.
    Orientation: u32,
    range = 0 ..= 180
);
integer_scalar!(
    /// Confidence in percent.
    Confidence: u32,
    range = 0 ..= 100
);
integer_scalar!(InnerRadius: u32, range = 0 ..= 327675);
integer_scalar!(Angle: u32, range = 0 ..= 360);
integer_scalar!(AgeOfLocationEstimate: u32, range = 0 ..= 32767);
integer_scalar!(LcsServiceType: u32, range = 0 ..= 127);
integer_scalar!(ReportingAmount: u32, range = 1 ..= 8639999);
integer_scalar!(
    /// Interval between periodic reports in seconds.
    ReportingInterval: u32,
    range = 1 ..= 8639999
);
integer_scalar!(BarometricPressure: u32, range = 30000 ..= 115000);

string_scalar!(LdrReference);
string_scalar!(LmfIdentification);
string_scalar!(CorrelationId, pattern = r"^.{1,255}$");

string_enum!(
    ExternalClientType {
        EmergencyServices => "EMERGENCY_SERVICES",
        ValueAddedServices => "VALUE_ADDED_SERVICES",
        PlmnOperatorServices => "PLMN_OPERATOR_SERVICES",
        LawfulInterceptServices => "LAWFUL_INTERCEPT_SERVICES",
        PlmnOperatorBroadcastServices => "PLMN_OPERATOR_BROADCAST_SERVICES",
        PlmnOperatorOm => "PLMN_OPERATOR_OM",
        PlmnOperatorAnonymousStatistics => "PLMN_OPERATOR_ANONYMOUS_STATISTICS",
        PlmnOperatorTargetMsServiceSupport => "PLMN_OPERATOR_TARGET_MS_SERVICE_SUPPORT",
    }
);

string_enum!(
    SupportedGadShapes {
        Point => "POINT",
        PointUncertaintyCircle => "POINT_UNCERTAINTY_CIRCLE",
        PointUncertaintyEllipse => "POINT_UNCERTAINTY_ELLIPSE",
        Polygon => "POLYGON",
        PointAltitude => "POINT_ALTITUDE",
        PointAltitudeUncertainty => "POINT_ALTITUDE_UNCERTAINTY",
        EllipsoidArc => "ELLIPSOID_ARC",
    }
);

string_enum!(
    ResponseTime {
        Immediate => "IMMEDIATE",
        LowDelay => "LOW_DELAY",
        DelayTolerant => "DELAY_TOLERANT",
        NoDelay => "NO_DELAY",
    }
);

string_enum!(
    LcsQosClass {
        BestEffort => "BEST_EFFORT",
        Assured => "ASSURED",
        MultipleQos => "MULTIPLE_QOS",
    }
);

string_enum!(
    LcsPriority {
        HighestPriority => "HIGHEST_PRIORITY",
        NormalPriority => "NORMAL_PRIORITY",
    }
);

string_enum!(
    VelocityRequested {
        NotRequested => "VELOCITY_IS_NOT_REQUESTED",
        Requested => "VELOCITY_IS_REQUESTED",
    }
);

string_enum!(
    AccuracyFulfilmentIndicator {
        Fulfilled => "REQUESTED_ACCURACY_FULFILLED",
        NotFulfilled => "REQUESTED_ACCURACY_NOT_FULFILLED",
    }
);

string_enum!(
    /// Kind of deferred location request.
    LdrType {
        UeAvailable => "UE_AVAILABLE",
        Periodic => "PERIODIC",
        EnteringIntoArea => "ENTERING_INTO_AREA",
        LeavingFromArea => "LEAVING_FROM_AREA",
        BeingInsideArea => "BEING_INSIDE_AREA",
        Motion => "MOTION",
    }
);

string_enum!(
    VerticalDirection {
        Upward => "UPWARD",
        Downward => "DOWNWARD",
    }
);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicalCoordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Validate for GeographicalCoordinates {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.at("lon", |ctx| ctx.range(self.lon, -180.0, 180.0));
        ctx.at("lat", |ctx| ctx.range(self.lat, -90.0, 90.0));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncertaintyEllipse {
    pub semi_major: Uncertainty,
    pub semi_minor: Uncertainty,
    pub orientation_major: Orientation,
}

impl Validate for UncertaintyEllipse {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("semiMajor", &self.semi_major);
        ctx.field("semiMinor", &self.semi_minor);
        ctx.field("orientationMajor", &self.orientation_major);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub point: GeographicalCoordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointUncertaintyCircle {
    pub point: GeographicalCoordinates,
    pub uncertainty: Uncertainty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointUncertaintyEllipse {
    pub point: GeographicalCoordinates,
    pub uncertainty_ellipse: UncertaintyEllipse,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    pub point_list: Vec<GeographicalCoordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointAltitude {
    pub point: GeographicalCoordinates,
    pub altitude: Altitude,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointAltitudeUncertainty {
    pub point: GeographicalCoordinates,
    pub altitude: Altitude,
    pub uncertainty_ellipse: UncertaintyEllipse,
    pub uncertainty_altitude: Uncertainty,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EllipsoidArc {
    pub point: GeographicalCoordinates,
    pub inner_radius: InnerRadius,
    pub uncertainty_radius: Uncertainty,
    pub offset_angle: Angle,
    pub included_angle: Angle,
    pub confidence: Confidence,
}

/// A location estimate; the `shape` member selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum GeographicArea {
    #[serde(rename = "POINT")]
    Point(Point),
    #[serde(rename = "POINT_UNCERTAINTY_CIRCLE")]
    PointUncertaintyCircle(PointUncertaintyCircle),
    #[serde(rename = "POINT_UNCERTAINTY_ELLIPSE")]
    PointUncertaintyEllipse(PointUncertaintyEllipse),
    #[serde(rename = "POLYGON")]
    Polygon(Polygon),
    #[serde(rename = "POINT_ALTITUDE")]
    PointAltitude(PointAltitude),
    #[serde(rename = "POINT_ALTITUDE_UNCERTAINTY")]
    PointAltitudeUncertainty(PointAltitudeUncertainty),
    #[serde(rename = "ELLIPSOID_ARC")]
    EllipsoidArc(EllipsoidArc),
}

impl GeographicArea {
    pub fn shape(&self) -> SupportedGadShapes {
        match self {
            GeographicArea::Point(_) => SupportedGadShapes::Point,
            GeographicArea::PointUncertaintyCircle(_) => SupportedGadShapes::PointUncertaintyCircle,
            GeographicArea::PointUncertaintyEllipse(_) => {
                SupportedGadShapes::PointUncertaintyEllipse
            }
            GeographicArea::Polygon(_) => SupportedGadShapes::Polygon,
            GeographicArea::PointAltitude(_) => SupportedGadShapes::PointAltitude,
            GeographicArea::PointAltitudeUncertainty(_) => {
                SupportedGadShapes::PointAltitudeUncertainty
            }
            GeographicArea::EllipsoidArc(_) => SupportedGadShapes::EllipsoidArc,
        }
    }
}

impl Validate for GeographicArea {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        match self {
            GeographicArea::Point(p) => ctx.field("point", &p.point),
            GeographicArea::PointUncertaintyCircle(p) => {
                ctx.field("point", &p.point);
                ctx.field("uncertainty", &p.uncertainty);
            }
            GeographicArea::PointUncertaintyEllipse(p) => {
                ctx.field("point", &p.point);
                ctx.field("uncertaintyEllipse", &p.uncertainty_ellipse);
                ctx.field("confidence", &p.confidence);
            }
            GeographicArea::Polygon(p) => ctx.each_between("pointList", &p.point_list, 3, 15),
            GeographicArea::PointAltitude(p) => {
                ctx.field("point", &p.point);
                ctx.field("altitude", &p.altitude);
            }
            GeographicArea::PointAltitudeUncertainty(p) => {
                ctx.field("point", &p.point);
                ctx.field("altitude", &p.altitude);
                ctx.field("uncertaintyEllipse", &p.uncertainty_ellipse);
                ctx.field("uncertaintyAltitude", &p.uncertainty_altitude);
                ctx.field("confidence", &p.confidence);
            }
            GeographicArea::EllipsoidArc(p) => {
                ctx.field("point", &p.point);
                ctx.field("innerRadius", &p.inner_radius);
                ctx.field("uncertaintyRadius", &p.uncertainty_radius);
                ctx.field("offsetAngle", &p.offset_angle);
                ctx.field("includedAngle", &p.included_angle);
                ctx.field("confidence", &p.confidence);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HorizontalVelocity {
    pub h_speed: HorizontalSpeed,
    pub bearing: Angle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HorizontalWithVerticalVelocity {
    pub h_speed: HorizontalSpeed,
    pub bearing: Angle,
    pub v_speed: VerticalSpeed,
    pub v_direction: VerticalDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HorizontalVelocityWithUncertainty {
    pub h_speed: HorizontalSpeed,
    pub bearing: Angle,
    pub h_uncertainty: SpeedUncertainty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HorizontalWithVerticalVelocityAndUncertainty {
    pub h_speed: HorizontalSpeed,
    pub bearing: Angle,
    pub v_speed: VerticalSpeed,
    pub v_direction: VerticalDirection,
    pub h_uncertainty: SpeedUncertainty,
    pub v_uncertainty: SpeedUncertainty,
}

/// Velocity estimate; the variant is picked by which members are present,
/// most specific first. Variants reject unknown members so no shape can
/// swallow a more specific one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VelocityEstimate {
    HorizontalWithVerticalAndUncertainty(HorizontalWithVerticalVelocityAndUncertainty),
    HorizontalWithVertical(HorizontalWithVerticalVelocity),
    HorizontalWithUncertainty(HorizontalVelocityWithUncertainty),
    Horizontal(HorizontalVelocity),
}

impl Validate for VelocityEstimate {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        match self {
            VelocityEstimate::HorizontalWithVerticalAndUncertainty(v) => {
                ctx.field("hSpeed", &v.h_speed);
                ctx.field("bearing", &v.bearing);
                ctx.field("vSpeed", &v.v_speed);
                ctx.field("vDirection", &v.v_direction);
                ctx.field("hUncertainty", &v.h_uncertainty);
                ctx.field("vUncertainty", &v.v_uncertainty);
            }
            VelocityEstimate::HorizontalWithVertical(v) => {
                ctx.field("hSpeed", &v.h_speed);
                ctx.field("bearing", &v.bearing);
                ctx.field("vSpeed", &v.v_speed);
                ctx.field("vDirection", &v.v_direction);
            }
            VelocityEstimate::HorizontalWithUncertainty(v) => {
                ctx.field("hSpeed", &v.h_speed);
                ctx.field("bearing", &v.bearing);
                ctx.field("hUncertainty", &v.h_uncertainty);
            }
            VelocityEstimate::Horizontal(v) => {
                ctx.field("hSpeed", &v.h_speed);
                ctx.field("bearing", &v.bearing);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQoS {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_accuracy: Option<Accuracy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v_accuracy: Option<Accuracy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_requested: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<ResponseTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcs_qos_class: Option<LcsQosClass>,
}

impl Validate for LocationQoS {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.optional("hAccuracy", &self.h_accuracy);
        ctx.optional("vAccuracy", &self.v_accuracy);
        ctx.optional("responseTime", &self.response_time);
        ctx.optional("lcsQosClass", &self.lcs_qos_class);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodicEventInfo {
    pub reporting_amount: ReportingAmount,
    pub reporting_interval: ReportingInterval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_infinite_ind: Option<bool>,
}

impl Validate for PeriodicEventInfo {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("reportingAmount", &self.reporting_amount);
        ctx.field("reportingInterval", &self.reporting_interval);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReportingStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_report_counter: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_report_duration: Option<u32>,
}

impl Validate for EventReportingStatus {
    fn validate_into(&self, _ctx: &mut ValidationContext) {}
}

/// Request body of DetermineLocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputData {
    pub external_client_type: ExternalClientType,
    #[serde(rename = "correlationID", skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<CorrelationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amf_id: Option<NfInstanceId>,
    #[serde(rename = "locationQoS", skip_serializing_if = "Option::is_none")]
    pub location_qos: Option<LocationQoS>,
    #[serde(rename = "supportedGADShapes", skip_serializing_if = "Option::is_none")]
    pub supported_gad_shapes: Option<Vec<SupportedGadShapes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supi: Option<Supi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pei: Option<Pei>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpsi: Option<Gpsi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecgi: Option<Ecgi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncgi: Option<Ncgi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<LcsPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_requested: Option<VelocityRequested>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcs_service_type: Option<LcsServiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldr_type: Option<LdrType>,
    #[serde(rename = "hgmlcCallBackURI", skip_serializing_if = "Option::is_none")]
    pub hgmlc_call_back_uri: Option<Uri>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldr_reference: Option<LdrReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic_event_info: Option<PeriodicEventInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_loc_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

impl InputData {
    pub fn new(external_client_type: ExternalClientType) -> Self {
        Self {
            external_client_type,
            correlation_id: None,
            amf_id: None,
            location_qos: None,
            supported_gad_shapes: None,
            supi: None,
            pei: None,
            gpsi: None,
            ecgi: None,
            ncgi: None,
            priority: None,
            velocity_requested: None,
            lcs_service_type: None,
            ldr_type: None,
            hgmlc_call_back_uri: None,
            ldr_reference: None,
            periodic_event_info: None,
            scheduled_loc_time: None,
            supported_features: None,
        }
    }
}

impl Validate for InputData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("externalClientType", &self.external_client_type);
        ctx.optional("correlationID", &self.correlation_id);
        ctx.optional("amfId", &self.amf_id);
        ctx.optional("locationQoS", &self.location_qos);
        ctx.optional_each_min("supportedGADShapes", &self.supported_gad_shapes, 1);
        ctx.optional("supi", &self.supi);
        ctx.optional("pei", &self.pei);
        ctx.optional("gpsi", &self.gpsi);
        ctx.optional("ecgi", &self.ecgi);
        ctx.optional("ncgi", &self.ncgi);
        ctx.optional("priority", &self.priority);
        ctx.optional("velocityRequested", &self.velocity_requested);
        ctx.optional("lcsServiceType", &self.lcs_service_type);
        ctx.optional("ldrType", &self.ldr_type);
        ctx.optional("hgmlcCallBackURI", &self.hgmlc_call_back_uri);
        ctx.optional("periodicEventInfo", &self.periodic_event_info);
        ctx.optional("scheduledLocTime", &self.scheduled_loc_time);
        ctx.optional("supportedFeatures", &self.supported_features);

        let deferred = self.ldr_type.is_some();
        ctx.required_when(
            "hgmlcCallBackURI",
            self.hgmlc_call_back_uri.is_some(),
            deferred,
            "ldrType is present",
        );
        ctx.required_when(
            "ldrReference",
            self.ldr_reference.is_some(),
            deferred,
            "ldrType is present",
        );
        ctx.required_when(
            "periodicEventInfo",
            self.periodic_event_info.is_some(),
            self.ldr_type == Some(LdrType::Periodic),
            "ldrType=PERIODIC",
        );
    }
}

/// Successful answer of DetermineLocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub location_estimate: GeographicArea,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_fulfilment_indicator: Option<AccuracyFulfilmentIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_of_location_estimate: Option<AgeOfLocationEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_of_location_estimate: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_estimate: Option<VelocityEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecgi: Option<Ecgi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncgi: Option<Ncgi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Altitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barometric_pressure: Option<BarometricPressure>,
    #[serde(rename = "servingLMFIdentification", skip_serializing_if = "Option::is_none")]
    pub serving_lmf_identification: Option<LmfIdentification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

impl LocationData {
    pub fn new(location_estimate: GeographicArea) -> Self {
        Self {
            location_estimate,
            accuracy_fulfilment_indicator: None,
            age_of_location_estimate: None,
            timestamp_of_location_estimate: None,
            velocity_estimate: None,
            ecgi: None,
            ncgi: None,
            altitude: None,
            barometric_pressure: None,
            serving_lmf_identification: None,
            supported_features: None,
        }
    }
}

impl Validate for LocationData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("locationEstimate", &self.location_estimate);
        ctx.optional("accuracyFulfilmentIndicator", &self.accuracy_fulfilment_indicator);
        ctx.optional("ageOfLocationEstimate", &self.age_of_location_estimate);
        ctx.optional("timestampOfLocationEstimate", &self.timestamp_of_location_estimate);
        ctx.optional("velocityEstimate", &self.velocity_estimate);
        ctx.optional("ecgi", &self.ecgi);
        ctx.optional("ncgi", &self.ncgi);
        ctx.optional("altitude", &self.altitude);
        ctx.optional("barometricPressure", &self.barometric_pressure);
        ctx.optional("supportedFeatures", &self.supported_features);
    }
}

/// Request body of CancelLocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelLocData {
    #[serde(rename = "hgmlcCallBackURI")]
    pub hgmlc_call_back_uri: Uri,
    #[serde(rename = "ldrReference")]
    pub ldr_reference: LdrReference,
    #[serde(rename = "servingLMFIdentification", skip_serializing_if = "Option::is_none")]
    pub serving_lmf_identification: Option<LmfIdentification>,
    #[serde(rename = "supportedFeatures", skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
}

impl Validate for CancelLocData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("hgmlcCallBackURI", &self.hgmlc_call_back_uri);
        if self.ldr_reference.as_str().is_empty() {
            ctx.at("ldrReference", |ctx| ctx.report("cannot be empty"));
        }
        ctx.optional("supportedFeatures", &self.supported_features);
    }
}

/// Request body of LocationContextTransfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocContextData {
    pub amf_id: NfInstanceId,
    #[serde(rename = "locationQoS", skip_serializing_if = "Option::is_none")]
    pub location_qos: Option<LocationQoS>,
    #[serde(rename = "supportedGADShapes", skip_serializing_if = "Option::is_none")]
    pub supported_gad_shapes: Option<Vec<SupportedGadShapes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_features: Option<SupportedFeatures>,
    #[serde(rename = "hgmlcCallBackURI")]
    pub hgmlc_call_back_uri: Uri,
    pub ldr_reference: LdrReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldr_type: Option<LdrType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic_event_info: Option<PeriodicEventInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_reporting_status: Option<EventReportingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecgi: Option<Ecgi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ncgi: Option<Ncgi>,
}

impl Validate for LocContextData {
    fn validate_into(&self, ctx: &mut ValidationContext) {
        ctx.field("amfId", &self.amf_id);
        ctx.optional("locationQoS", &self.location_qos);
        ctx.optional_each_min("supportedGADShapes", &self.supported_gad_shapes, 1);
        ctx.optional("supportedFeatures", &self.supported_features);
        ctx.field("hgmlcCallBackURI", &self.hgmlc_call_back_uri);
        ctx.optional("ldrType", &self.ldr_type);
        ctx.optional("periodicEventInfo", &self.periodic_event_info);
        ctx.optional("eventReportingStatus", &self.event_reporting_status);
        ctx.optional("ecgi", &self.ecgi);
        ctx.optional("ncgi", &self.ncgi);
        ctx.required_when(
            "periodicEventInfo",
            self.periodic_event_info.is_some(),
            self.ldr_type == Some(LdrType::Periodic),
            "ldrType=PERIODIC",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_velocity_estimate_rejects_partial_uncertainty() {
        // hUncertainty with vertical members needs vUncertainty too.
        let partial = json!({
            "hSpeed": 10.0, "bearing": 45, "vSpeed": 2.0, "vDirection": "UPWARD",
            "hUncertainty": 1.5
        });
        assert!(serde_json::from_value::<VelocityEstimate>(partial).is_err());
    }

    #[test]
    fn test_geographic_area_shape_tag() {
        let area: GeographicArea = serde_json::from_value(json!({
            "shape": "POINT_UNCERTAINTY_CIRCLE",
            "point": {"lon": 2.35, "lat": 48.85},
            "uncertainty": 12.5
        }))
        .unwrap();
        assert_eq!(area.shape(), SupportedGadShapes::PointUncertaintyCircle);
        assert!(area.validate().is_ok());

        let back = serde_json::to_value(&area).unwrap();
        assert_eq!(back["shape"], "POINT_UNCERTAINTY_CIRCLE");

        assert!(serde_json::from_value::<GeographicArea>(json!({
            "shape": "HEXAGON",
            "point": {"lon": 0.0, "lat": 0.0}
        }))
        .is_err());
    }

    #[test]
    fn test_polygon_point_count_and_paths() {
        let points = vec![
            GeographicalCoordinates { lon: 0.0, lat: 0.0 },
            GeographicalCoordinates { lon: 1.0, lat: 0.0 },
            GeographicalCoordinates { lon: 1.0, lat: 95.0 },
        ];
        let polygon = GeographicArea::Polygon(Polygon {
            point_list: points[..2].to_vec(),
        });
        assert!(polygon.validate().unwrap_err().has_path("pointList"));

        let data = LocationData::new(GeographicArea::Polygon(Polygon { point_list: points }));
        let errors = data.validate().unwrap_err();
        assert!(errors.has_path("locationEstimate.pointList[2].lat"));
    }

    #[test]
    fn test_velocity_estimate_picks_most_specific() {
        let v: VelocityEstimate = serde_json::from_value(json!({
            "hSpeed": 10.0, "bearing": 90, "vSpeed": 1.0, "vDirection": "UPWARD"
        }))
        .unwrap();
        assert!(matches!(v, VelocityEstimate::HorizontalWithVertical(_)));

        let v: VelocityEstimate =
            serde_json::from_value(json!({"hSpeed": 3000.0, "bearing": 10})).unwrap();
        assert!(matches!(v, VelocityEstimate::Horizontal(_)));
        assert!(v.validate().unwrap_err().has_path("hSpeed"));

        let with_uncertainty = json!({"hSpeed": 10.0, "bearing": 45, "hUncertainty": 1.5});
        let v: VelocityEstimate = serde_json::from_value(with_uncertainty.clone()).unwrap();
        assert!(matches!(v, VelocityEstimate::HorizontalWithUncertainty(_)));
        assert_eq!(serde_json::to_value(&v).unwrap(), with_uncertainty);
    }

    #[test]
    fn test_input_data_deferred_request_conditions() {
        let mut input = InputData::new(ExternalClientType::ValueAddedServices);
        input.supi = Some(Supi::from("imsi-208930000000001"));
        assert!(input.validate().is_ok());

        input.ldr_type = Some(LdrType::Periodic);
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.has_path("hgmlcCallBackURI"));
        assert!(errors.has_path("ldrReference"));
        assert!(errors.has_path("periodicEventInfo"));

        input.hgmlc_call_back_uri = Some(Uri::from("https://gmlc.example/cb"));
        input.ldr_reference = Some(LdrReference::from("ldr-1"));
        input.periodic_event_info = Some(PeriodicEventInfo {
            reporting_amount: ReportingAmount(10),
            reporting_interval: ReportingInterval(60),
            reporting_infinite_ind: None,
        });
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_input_data_wire_names() {
        let input: InputData = serde_json::from_value(json!({
            "externalClientType": "EMERGENCY_SERVICES",
            "correlationID": "c-1",
            "locationQoS": {"hAccuracy": 20.0, "responseTime": "LOW_DELAY"},
            "supportedGADShapes": ["POINT", "POLYGON"],
            "hgmlcCallBackURI": "https://gmlc.example/cb"
        }))
        .unwrap();
        assert_eq!(input.external_client_type, ExternalClientType::EmergencyServices);
        assert_eq!(input.supported_gad_shapes.as_ref().map(Vec::len), Some(2));
        assert!(input.validate().is_ok());
    }
}
