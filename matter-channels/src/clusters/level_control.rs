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

//! Attributes and commands for controlling a characteristic of a device
//! that can be set to a level.
//!
//! Generated by `pregen` from `sample-clusters.matter`; do not edit by hand.

use core::fmt;

use crate::clusters::{ClusterAddr, ClusterCommand, ClusterEnum, EndpointId, NodeId};
use crate::error::{Error, ErrorCode};

pub const ID: u32 = 8;
pub const NAME: &str = "LevelControl";
pub const REVISION: u16 = 5;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    CurrentLevel = 0,
    RemainingTime = 1,
    MinLevel = 2,
    MaxLevel = 3,
    CurrentFrequency = 4,
    MinFrequency = 5,
    MaxFrequency = 6,
    Options = 15,
    OnOffTransitionTime = 16,
    OnLevel = 17,
    OnTransitionTime = 18,
    OffTransitionTime = 19,
    DefaultMoveRate = 20,
    StartUpCurrentLevel = 16384,
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
    MoveToLevel = 0,
    Move = 1,
    Step = 2,
    Stop = 3,
    MoveToLevelWithOnOff = 4,
    MoveWithOnOff = 5,
    StepWithOnOff = 6,
    StopWithOnOff = 7,
    MoveToClosestFrequency = 8,
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
        const ON_OFF = 1;
        const LIGHTING = 2;
        const FREQUENCY = 4;
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
    pub struct OptionsBitmap: u8 {
        const EXECUTE_IF_OFF = 1;
        const COUPLE_COLOR_TEMP_TO_LEVEL = 2;
    }
}

impl TryFrom<u8> for OptionsBitmap {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_bits(value).ok_or_else(|| ErrorCode::InvalidBitmapValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum MoveModeEnum {
    Up = 0,
    Down = 1,
}

impl ClusterEnum for MoveModeEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }
}

impl TryFrom<u8> for MoveModeEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
#[repr(u8)]
pub enum StepModeEnum {
    Up = 0,
    Down = 1,
}

impl ClusterEnum for StepModeEnum {
    fn value(&self) -> u16 {
        *self as u16
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
        }
    }
}

impl TryFrom<u8> for StepModeEnum {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct MoveToLevelRequest {
    pub level: u8,
    pub transition_time: Option<u16>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl MoveToLevelRequest {
    pub const fn new(
        level: u8,
        transition_time: Option<u16>,
        options_mask: OptionsBitmap,
        options_override: OptionsBitmap,
    ) -> Self {
        Self {
            level,
            transition_time,
            options_mask,
            options_override,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct MoveRequest {
    pub move_mode: MoveModeEnum,
    pub rate: Option<u8>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl MoveRequest {
    pub const fn new(
        move_mode: MoveModeEnum,
        rate: Option<u8>,
        options_mask: OptionsBitmap,
        options_override: OptionsBitmap,
    ) -> Self {
        Self {
            move_mode,
            rate,
            options_mask,
            options_override,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct StepRequest {
    pub step_mode: StepModeEnum,
    pub step_size: u8,
    pub transition_time: Option<u16>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl StepRequest {
    pub const fn new(
        step_mode: StepModeEnum,
        step_size: u8,
        transition_time: Option<u16>,
        options_mask: OptionsBitmap,
        options_override: OptionsBitmap,
    ) -> Self {
        Self {
            step_mode,
            step_size,
            transition_time,
            options_mask,
            options_override,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct StopRequest {
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl StopRequest {
    pub const fn new(options_mask: OptionsBitmap, options_override: OptionsBitmap) -> Self {
        Self {
            options_mask,
            options_override,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct MoveToLevelWithOnOffRequest {
    pub level: u8,
    pub transition_time: Option<u16>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl MoveToLevelWithOnOffRequest {
    pub const fn new(
        level: u8,
        transition_time: Option<u16>,
        options_mask: OptionsBitmap,
        options_override: OptionsBitmap,
    ) -> Self {
        Self {
            level,
            transition_time,
            options_mask,
            options_override,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct MoveWithOnOffRequest {
    pub move_mode: MoveModeEnum,
    pub rate: Option<u8>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl MoveWithOnOffRequest {
    pub const fn new(
        move_mode: MoveModeEnum,
        rate: Option<u8>,
        options_mask: OptionsBitmap,
        options_override: OptionsBitmap,
    ) -> Self {
        Self {
            move_mode,
            rate,
            options_mask,
            options_override,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct StepWithOnOffRequest {
    pub step_mode: StepModeEnum,
    pub step_size: u8,
    pub transition_time: Option<u16>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl StepWithOnOffRequest {
    pub const fn new(
        step_mode: StepModeEnum,
        step_size: u8,
        transition_time: Option<u16>,
        options_mask: OptionsBitmap,
        options_override: OptionsBitmap,
    ) -> Self {
        Self {
            step_mode,
            step_size,
            transition_time,
            options_mask,
            options_override,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct StopWithOnOffRequest {
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl StopWithOnOffRequest {
    pub const fn new(options_mask: OptionsBitmap, options_override: OptionsBitmap) -> Self {
        Self {
            options_mask,
            options_override,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct MoveToClosestFrequencyRequest {
    pub frequency: u16,
}

impl MoveToClosestFrequencyRequest {
    pub const fn new(frequency: u16) -> Self {
        Self { frequency }
    }
}

/// Attribute holder for one LevelControl cluster instance. Fields are
/// `None` until the first attribute report arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelControlCluster {
    pub addr: ClusterAddr,
    pub current_level: Option<u8>,
    pub remaining_time: Option<u16>,
    pub min_level: Option<u8>,
    pub max_level: Option<u8>,
    pub current_frequency: Option<u16>,
    pub min_frequency: Option<u16>,
    pub max_frequency: Option<u16>,
    pub options: Option<OptionsBitmap>,
    pub on_off_transition_time: Option<u16>,
    pub on_level: Option<u8>,
    pub on_transition_time: Option<u16>,
    pub off_transition_time: Option<u16>,
    pub default_move_rate: Option<u8>,
    pub start_up_current_level: Option<u8>,
    pub generated_command_list: Option<Vec<u32>>,
    pub accepted_command_list: Option<Vec<u32>>,
    pub event_list: Option<Vec<u32>>,
    pub attribute_list: Option<Vec<u32>>,
    pub feature_map: Option<u32>,
    pub cluster_revision: Option<u16>,
}

impl LevelControlCluster {
    pub fn new(node_id: NodeId, endpoint_id: EndpointId) -> Self {
        Self {
            addr: ClusterAddr::new(node_id, endpoint_id),
            current_level: None,
            remaining_time: None,
            min_level: None,
            max_level: None,
            current_frequency: None,
            min_frequency: None,
            max_frequency: None,
            options: None,
            on_off_transition_time: None,
            on_level: None,
            on_transition_time: None,
            off_transition_time: None,
            default_move_rate: None,
            start_up_current_level: None,
            generated_command_list: None,
            accepted_command_list: None,
            event_list: None,
            attribute_list: None,
            feature_map: None,
            cluster_revision: None,
        }
    }

    pub fn move_to_level(request: MoveToLevelRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::MoveToLevel as u32, "MoveToLevel")
            .arg("level", request.level)
            .arg("transitionTime", request.transition_time)
            .arg("optionsMask", request.options_mask.bits())
            .arg("optionsOverride", request.options_override.bits())
    }

    pub fn move_(request: MoveRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::Move as u32, "Move")
            .arg("moveMode", request.move_mode.value())
            .arg("rate", request.rate)
            .arg("optionsMask", request.options_mask.bits())
            .arg("optionsOverride", request.options_override.bits())
    }

    pub fn step(request: StepRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::Step as u32, "Step")
            .arg("stepMode", request.step_mode.value())
            .arg("stepSize", request.step_size)
            .arg("transitionTime", request.transition_time)
            .arg("optionsMask", request.options_mask.bits())
            .arg("optionsOverride", request.options_override.bits())
    }

    pub fn stop(request: StopRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::Stop as u32, "Stop")
            .arg("optionsMask", request.options_mask.bits())
            .arg("optionsOverride", request.options_override.bits())
    }

    pub fn move_to_level_with_on_off(request: MoveToLevelWithOnOffRequest) -> ClusterCommand {
        ClusterCommand::new(
            ID,
            CommandId::MoveToLevelWithOnOff as u32,
            "MoveToLevelWithOnOff",
        )
        .arg("level", request.level)
        .arg("transitionTime", request.transition_time)
        .arg("optionsMask", request.options_mask.bits())
        .arg("optionsOverride", request.options_override.bits())
    }

    pub fn move_with_on_off(request: MoveWithOnOffRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::MoveWithOnOff as u32, "MoveWithOnOff")
            .arg("moveMode", request.move_mode.value())
            .arg("rate", request.rate)
            .arg("optionsMask", request.options_mask.bits())
            .arg("optionsOverride", request.options_override.bits())
    }

    pub fn step_with_on_off(request: StepWithOnOffRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::StepWithOnOff as u32, "StepWithOnOff")
            .arg("stepMode", request.step_mode.value())
            .arg("stepSize", request.step_size)
            .arg("transitionTime", request.transition_time)
            .arg("optionsMask", request.options_mask.bits())
            .arg("optionsOverride", request.options_override.bits())
    }

    pub fn stop_with_on_off(request: StopWithOnOffRequest) -> ClusterCommand {
        ClusterCommand::new(ID, CommandId::StopWithOnOff as u32, "StopWithOnOff")
            .arg("optionsMask", request.options_mask.bits())
            .arg("optionsOverride", request.options_override.bits())
    }

    pub fn move_to_closest_frequency(request: MoveToClosestFrequencyRequest) -> ClusterCommand {
        ClusterCommand::new(
            ID,
            CommandId::MoveToClosestFrequency as u32,
            "MoveToClosestFrequency",
        )
        .arg("frequency", request.frequency)
    }
}

impl fmt::Display for LevelControlCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "currentLevel: {:?}", self.current_level)?;
        write!(f, ", remainingTime: {:?}", self.remaining_time)?;
        write!(f, ", minLevel: {:?}", self.min_level)?;
        write!(f, ", maxLevel: {:?}", self.max_level)?;
        write!(f, ", currentFrequency: {:?}", self.current_frequency)?;
        write!(f, ", minFrequency: {:?}", self.min_frequency)?;
        write!(f, ", maxFrequency: {:?}", self.max_frequency)?;
        write!(f, ", options: {:?}", self.options)?;
        write!(f, ", onOffTransitionTime: {:?}", self.on_off_transition_time)?;
        write!(f, ", onLevel: {:?}", self.on_level)?;
        write!(f, ", onTransitionTime: {:?}", self.on_transition_time)?;
        write!(f, ", offTransitionTime: {:?}", self.off_transition_time)?;
        write!(f, ", defaultMoveRate: {:?}", self.default_move_rate)?;
        write!(f, ", startUpCurrentLevel: {:?}", self.start_up_current_level)?;
        write!(f, ", generatedCommandList: {:?}", self.generated_command_list)?;
        write!(f, ", acceptedCommandList: {:?}", self.accepted_command_list)?;
        write!(f, ", eventList: {:?}", self.event_list)?;
        write!(f, ", attributeList: {:?}", self.attribute_list)?;
        write!(f, ", featureMap: {:?}", self.feature_map)?;
        write!(f, ", clusterRevision: {:?}", self.cluster_revision)
    }
}
