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

//! Attributes and commands for switching devices between 'On' and 'Off'
//! states.
//!
//! Generated by `pregen` from `sample-clusters.matter`; do not edit by hand.

use core::fmt;

use crate::clusters::{ClusterAddr, ClusterCommand, ClusterEnum, EndpointId, NodeId};
use crate::error::{Error, ErrorCode};

pub const ID: u32 = 6;
pub const NAME: &str = "OnOff";
pub const REVISION: u16 = 6;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    OnOff = 0,
    GlobalSceneControl = 16384,
    OnTime = 16385,
    OffWaitTime = 16386,
    StartUpOnOff = 16387,
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
    Off = 0,
    On = 1,
    Toggle = 2,
    OffWithEffect = 64,
    OnWithRecallGlobalScene = 65,
    OnWithTimedOff = 66,
}

impl TryFrom<u32> for CommandId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_repr(id).ok_or_else(|| ErrorCode::CommandNotFound.into())
    }
}

bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct Feature: u32 {
        const LIGHTING = 1;
        const DEAD_FRONT_BEHAVIOR = 2;
        const OFF_ONLY = 4;
    }
}

impl TryFrom<u32> for Feature {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_bits(value).ok_or_else(|| ErrorCode::InvalidBitmapValue.into())
    }
}

bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct OnOffControlBitmap: u8 {
        const ACCEPT_ONLY_WHEN_ON = 1;
    }
}

impl TryFrom<u8> for OnOffControlBitmap {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_bits(value).ok_or_else(|| ErrorCode::InvalidBitmapValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum DelayedAllOffEffectVariantEnum {
    DelayedOffFastFade = 0,
    NoFade = 1,
    DelayedOffSlowFade = 2,
}

impl ClusterEnum for DelayedAllOffEffectVariantEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::DelayedOffFastFade => "Delayed Off Fast Fade",
            Self::NoFade => "No Fade",
            Self::DelayedOffSlowFade => "Delayed Off Slow Fade",
        }
    }
}

impl TryFrom<u8> for DelayedAllOffEffectVariantEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum DyingLightEffectVariantEnum {
    DyingLightFadeOff = 0,
}

impl ClusterEnum for DyingLightEffectVariantEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::DyingLightFadeOff => "Dying Light Fade Off",
        }
    }
}

impl TryFrom<u8> for DyingLightEffectVariantEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum EffectIdentifierEnum {
    DelayedAllOff = 0,
    DyingLight = 1,
}

impl ClusterEnum for EffectIdentifierEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::DelayedAllOff => "Delayed All Off",
            Self::DyingLight => "Dying Light",
        }
    }
}

impl TryFrom<u8> for EffectIdentifierEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum StartUpOnOffEnum {
    Off = 0,
    On = 1,
    Toggle = 2,
}

impl ClusterEnum for StartUpOnOffEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
            Self::Toggle => "Toggle",
        }
    }
}

impl TryFrom<u8> for StartUpOnOffEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct OffWithEffectRequest {
    pub effect_identifier: EffectIdentifierEnum,
    pub effect_variant: u8,
}

impl OffWithEffectRequest {
    pub const fn new(effect_identifier: EffectIdentifierEnum, effect_variant: u8) -> Self {
        Self {
            effect_identifier,
            effect_variant,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct OnWithTimedOffRequest {
    pub on_off_control: OnOffControlBitmap,
    pub on_time: u16,
    pub off_wait_time: u16,
}

impl OnWithTimedOffRequest {
    pub const fn new(on_off_control: OnOffControlBitmap, on_time: u16, off_wait_time: u16) -> Self {
        Self {
            on_off_control,
            on_time,
            off_wait_time,
        }
    }
}

/// Attribute holder for one OnOff cluster instance. Fields are `None`
/// until the first attribute report arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct OnOffCluster {
    pub addr: ClusterAddr,
    pub on_off: Option<bool>,
    pub global_scene_control: Option<bool>,
    pub on_time: Option<u16>,
    pub off_wait_time: Option<u16>,
    pub start_up_on_off: Option<StartUpOnOffEnum>,
    pub generated_command_list: Option<Vec<u32>>,
    pub accepted_command_list: Option<Vec<u32>>,
    pub event_list: Option<Vec<u32>>,
    pub attribute_list: Option<Vec<u32>>,
    pub feature_map: Option<u32>,
    pub cluster_revision: Option<u16>,
}

impl OnOffCluster {
    pub fn new(node_id: NodeId, endpoint_id: EndpointId) -> Self {
        Self {
            addr: ClusterAddr::new(node_id, endpoint_id),
            on_off: None,
            global_scene_control: None,
            on_time: None,
            off_wait_time: None,
            start_up_on_off: None,
            generated_command_list: None,
            accepted_command_list: None,
            event_list: None,
            attribute_list: None,
            feature_map: None,
            cluster_revision: None,
        }
    }

    /// On receipt of this command, a device SHALL enter its 'Off' state.
    pub fn off() -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::Off as u32, "Off")
    }

    /// On receipt of this command, a device SHALL enter its 'On' state.
    pub fn on() -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::On as u32, "On")
    }

    /// On receipt of this command, a device SHALL switch between its 'On'
    /// and 'Off' states.
    pub fn toggle() -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::Toggle as u32, "Toggle")
    }

    /// The OffWithEffect command allows devices to be turned off using
    /// enhanced ways of fading.
    pub fn off_with_effect(request: OffWithEffectRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::OffWithEffect as u32, "OffWithEffect")
            .arg("effectIdentifier", request.effect_identifier.value())
            .arg("effectVariant", request.effect_variant)
    }

    /// The OnWithRecallGlobalScene command allows the recall of the
    /// settings when the device was turned off.
    pub fn on_with_recall_global_scene() -> ClusterCommand {
        ClusterCommand::new(
            ID,
            CommandId::OnWithRecallGlobalScene as u32,
            "OnWithRecallGlobalScene",
        )
    }

    /// The OnWithTimedOff command allows devices to be turned on for a
    /// specific duration with a guarded off duration.
    pub fn on_with_timed_off(request: OnWithTimedOffRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::OnWithTimedOff as u32, "OnWithTimedOff")
            .arg("onOffControl", request.on_off_control.bits())
            .arg("onTime", request.on_time)
            .arg("offWaitTime", request.off_wait_time)
    }
}

impl fmt::Display for OnOffCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "onOff: {:?}", self.on_off)?;
        write!(f, ", globalSceneControl: {:?}", self.global_scene_control)?;
        write!(f, ", onTime: {:?}", self.on_time)?;
        write!(f, ", offWaitTime: {:?}", self.off_wait_time)?;
        write!(f, ", startUpOnOff: {:?}", self.start_up_on_off)?;
        write!(f, ", generatedCommandList: {:?}", self.generated_command_list)?;
        write!(f, ", acceptedCommandList: {:?}", self.accepted_command_list)?;
        write!(f, ", eventList: {:?}", self.event_list)?;
        write!(f, ", attributeList: {:?}", self.attribute_list)?;
        write!(f, ", featureMap: {:?}", self.feature_map)?;
        write!(f, ", clusterRevision: {:?}", self.cluster_revision)
    }
}
