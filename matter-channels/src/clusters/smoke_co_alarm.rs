/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Triggering of alarms on smoke and/or carbon monoxide detection.
//!
//! Generated by `pregen` from `sample-clusters.matter`; do not edit by hand.

use core::fmt;

use crate::clusters::{ClusterAddr, ClusterCommand, ClusterEnum, EndpointId, NodeId};
use crate::error::{Error, ErrorCode};

pub const ID: u32 = 92;
pub const NAME: &str = "SmokeCoAlarm";
pub const REVISION: u16 = 1;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    ExpressedState = 0,
    SmokeState = 1,
    CoState = 2,
    BatteryAlert = 3,
    DeviceMuted = 4,
    TestInProgress = 5,
    HardwareFaultAlert = 6,
    EndOfServiceAlert = 7,
    InterconnectSmokeAlarm = 8,
    InterconnectCOAlarm = 9,
    ContaminationState = 10,
    SmokeSensitivityLevel = 11,
    ExpiryDate = 12,
    GeneratedCommandList = 65528,
    AcceptedCommandList = 65529,
    EventList = 65530,
    AttributeList = 65531,
    FeatureMap = 65532,
    ClusterRevision = 65533,
}

impl TryFrom<u32> for AttributeId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_repr(id).ok_or_else(|| ErrorCode::AttributeNotFound.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
#[repr(u32)]
pub enum CommandId {
    SelfTestRequest = 0,
}

impl TryFrom<u32> for CommandId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_repr(id).ok_or_else(|| ErrorCode::CommandNotFound.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
#[repr(u32)]
pub enum EventId {
    SmokeAlarm = 0,
    COAlarm = 1,
    LowBattery = 2,
    HardwareFault = 3,
    EndOfService = 4,
    SelfTestComplete = 5,
    AlarmMuted = 6,
    MuteEnded = 7,
    InterconnectSmokeAlarm = 8,
    InterconnectCOAlarm = 9,
    AllClear = 10,
}

impl TryFrom<u32> for EventId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_repr(id).ok_or_else(|| ErrorCode::EventNotFound.into())
    }
}

bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct Feature: u32 {
        const SMOKE_ALARM = 1;
        const CO_ALARM = 2;
    }
}

impl TryFrom<u32> for Feature {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_bits(value).ok_or_else(|| ErrorCode::InvalidBitmapValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum AlarmStateEnum {
    Normal = 0,
    Warning = 1,
    Critical = 2,
}

impl ClusterEnum for AlarmStateEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

impl TryFrom<u8> for AlarmStateEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum ContaminationStateEnum {
    Normal = 0,
    Low = 1,
    Warning = 2,
    Critical = 3,
}

impl ClusterEnum for ContaminationStateEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Low => "Low",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

impl TryFrom<u8> for ContaminationStateEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum EndOfServiceEnum {
    Expired = 0,
    Normal = 1,
}

impl ClusterEnum for EndOfServiceEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::Normal => "Normal",
        }
    }
}

impl TryFrom<u8> for EndOfServiceEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum ExpressedStateEnum {
    Normal = 0,
    SmokeAlarm = 1,
    COAlarm = 2,
    BatteryAlert = 3,
    Testing = 4,
    HardwareFault = 5,
    EndOfService = 6,
    InterconnectSmoke = 7,
    InterconnectCO = 8,
}

impl ClusterEnum for ExpressedStateEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::SmokeAlarm => "Smoke Alarm",
            Self::COAlarm => "Co Alarm",
            Self::BatteryAlert => "Battery Alert",
            Self::Testing => "Testing",
            Self::HardwareFault => "Hardware Fault",
            Self::EndOfService => "End Of Service",
            Self::InterconnectSmoke => "Interconnect Smoke",
            Self::InterconnectCO => "Interconnect Co",
        }
    }
}

impl TryFrom<u8> for ExpressedStateEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum MuteStateEnum {
    NotMuted = 0,
    Muted = 1,
}

impl ClusterEnum for MuteStateEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::NotMuted => "Not Muted",
            Self::Muted => "Muted",
        }
    }
}

impl TryFrom<u8> for MuteStateEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum SensitivityEnum {
    High = 0,
    Standard = 1,
    Low = 2,
}

impl ClusterEnum for SensitivityEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Standard => "Standard",
            Self::Low => "Low",
        }
    }
}

impl TryFrom<u8> for SensitivityEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct SmokeAlarmEvent {
    pub alarm_severity_level: AlarmStateEnum,
}

impl SmokeAlarmEvent {
    pub const fn new(alarm_severity_level: AlarmStateEnum) -> Self {
        Self {
            alarm_severity_level,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct COAlarmEvent {
    pub alarm_severity_level: AlarmStateEnum,
}

impl COAlarmEvent {
    pub const fn new(alarm_severity_level: AlarmStateEnum) -> Self {
        Self {
            alarm_severity_level,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct LowBatteryEvent {
    pub alarm_severity_level: AlarmStateEnum,
}

impl LowBatteryEvent {
    pub const fn new(alarm_severity_level: AlarmStateEnum) -> Self {
        Self {
            alarm_severity_level,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct HardwareFaultEvent {}

impl HardwareFaultEvent {
    pub const fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct EndOfServiceEvent {}

impl EndOfServiceEvent {
    pub const fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct SelfTestCompleteEvent {}

impl SelfTestCompleteEvent {
    pub const fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct AlarmMutedEvent {}

impl AlarmMutedEvent {
    pub const fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct MuteEndedEvent {}

impl MuteEndedEvent {
    pub const fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct InterconnectSmokeAlarmEvent {
    pub alarm_severity_level: AlarmStateEnum,
}

impl InterconnectSmokeAlarmEvent {
    pub const fn new(alarm_severity_level: AlarmStateEnum) -> Self {
        Self {
            alarm_severity_level,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct InterconnectCOAlarmEvent {
    pub alarm_severity_level: AlarmStateEnum,
}

impl InterconnectCOAlarmEvent {
    pub const fn new(alarm_severity_level: AlarmStateEnum) -> Self {
        Self {
            alarm_severity_level,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct AllClearEvent {}

impl AllClearEvent {
    pub const fn new() -> Self {
        Self {}
    }
}

/// Attribute holder for one SmokeCoAlarm cluster instance. Fields are
/// `None` until the first attribute report arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeCoAlarmCluster {
    pub addr: ClusterAddr,
    pub expressed_state: Option<ExpressedStateEnum>,
    pub smoke_state: Option<AlarmStateEnum>,
    pub co_state: Option<AlarmStateEnum>,
    pub battery_alert: Option<AlarmStateEnum>,
    pub device_muted: Option<MuteStateEnum>,
    pub test_in_progress: Option<bool>,
    pub hardware_fault_alert: Option<bool>,
    pub end_of_service_alert: Option<EndOfServiceEnum>,
    pub interconnect_smoke_alarm: Option<AlarmStateEnum>,
    pub interconnect_co_alarm: Option<AlarmStateEnum>,
    pub contamination_state: Option<ContaminationStateEnum>,
    pub smoke_sensitivity_level: Option<SensitivityEnum>,
    pub expiry_date: Option<u32>,
    pub generated_command_list: Option<Vec<u32>>,
    pub accepted_command_list: Option<Vec<u32>>,
    pub event_list: Option<Vec<u32>>,
    pub attribute_list: Option<Vec<u32>>,
    pub feature_map: Option<u32>,
    pub cluster_revision: Option<u16>,
}

impl SmokeCoAlarmCluster {
    pub fn new(node_id: NodeId, endpoint_id: EndpointId) -> Self {
        Self {
            addr: ClusterAddr::new(node_id, endpoint_id),
            expressed_state: None,
            smoke_state: None,
            co_state: None,
            battery_alert: None,
            device_muted: None,
            test_in_progress: None,
            hardware_fault_alert: None,
            end_of_service_alert: None,
            interconnect_smoke_alarm: None,
            interconnect_co_alarm: None,
            contamination_state: None,
            smoke_sensitivity_level: None,
            expiry_date: None,
            generated_command_list: None,
            accepted_command_list: None,
            event_list: None,
            attribute_list: None,
            feature_map: None,
            cluster_revision: None,
        }
    }

    /// This command SHALL initiate a device self-test.
    pub fn self_test_request() -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::SelfTestRequest as u32, "SelfTestRequest")
    }
}

impl fmt::Display for SmokeCoAlarmCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expressedState: {:?}", self.expressed_state)?;
        write!(f, ", smokeState: {:?}", self.smoke_state)?;
        write!(f, ", coState: {:?}", self.co_state)?;
        write!(f, ", batteryAlert: {:?}", self.battery_alert)?;
        write!(f, ", deviceMuted: {:?}", self.device_muted)?;
        write!(f, ", testInProgress: {:?}", self.test_in_progress)?;
        write!(f, ", hardwareFaultAlert: {:?}", self.hardware_fault_alert)?;
        write!(f, ", endOfServiceAlert: {:?}", self.end_of_service_alert)?;
        write!(f, ", interconnectSmokeAlarm: {:?}", self.interconnect_smoke_alarm)?;
        write!(f, ", interconnectCOAlarm: {:?}", self.interconnect_co_alarm)?;
        write!(f, ", contaminationState: {:?}", self.contamination_state)?;
        write!(f, ", smokeSensitivityLevel: {:?}", self.smoke_sensitivity_level)?;
        write!(f, ", expiryDate: {:?}", self.expiry_date)?;
        write!(f, ", generatedCommandList: {:?}", self.generated_command_list)?;
        write!(f, ", acceptedCommandList: {:?}", self.accepted_command_list)?;
        write!(f, ", eventList: {:?}", self.event_list)?;
        write!(f, ", attributeList: {:?}", self.attribute_list)?;
        write!(f, ", featureMap: {:?}", self.feature_map)?;
        write!(f, ", clusterRevision: {:?}", self.cluster_revision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_id_round_trip() {
        assert_eq!(AttributeId::try_from(1).unwrap(), AttributeId::SmokeState);
        assert_eq!(
            AttributeId::try_from(65533).unwrap(),
            AttributeId::ClusterRevision
        );
        assert_eq!(
            AttributeId::try_from(13).unwrap_err().code(),
            ErrorCode::AttributeNotFound
        );
    }

    #[test]
    fn enum_values_and_labels() {
        assert_eq!(ExpressedStateEnum::Testing.value(), 4);
        assert_eq!(ExpressedStateEnum::Testing.label(), "Testing");
        assert_eq!(EndOfServiceEnum::Expired.value(), 0);
        assert_eq!(EndOfServiceEnum::Expired.label(), "Expired");
        assert_eq!(SensitivityEnum::Standard.label(), "Standard");
        assert_eq!(
            AlarmStateEnum::try_from(3).unwrap_err().code(),
            ErrorCode::InvalidEnumValue
        );
    }

    #[test]
    fn feature_bits() {
        let features = Feature::SMOKE_ALARM | Feature::CO_ALARM;
        assert_eq!(features.bits(), 3);
        assert!(Feature::from_bits(4).is_none());
    }

    #[test]
    fn self_test_command() {
        let cmd = SmokeCoAlarmCluster::self_test_request();
        assert_eq!(cmd.cluster_id, ID);
        assert_eq!(cmd.command_id, CommandId::SelfTestRequest as u32);
        assert!(cmd.fields.is_empty());
    }
}
