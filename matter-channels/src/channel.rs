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

//! The channel registry: one metadata tuple per cluster attribute exposed
//! as a binding channel.
//!
//! The constant tables are generated by `pregen` from
//! `sample-clusters.matter`; do not edit them by hand. For every
//! attribute the channel id is `lowercase(cluster)-lowercase(attribute)`
//! and the channel-type UID is the fixed binding prefix plus that id.

use core::fmt;

use log::debug;

use crate::clusters::ClusterId;

/// A channel-type UID: the fixed binding prefix plus the channel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelTypeUid {
    binding: &'static str,
    id: &'static str,
}

impl ChannelTypeUid {
    /// The binding prefix every channel-type UID starts with.
    pub const BINDING: &'static str = "matter";

    pub const fn new(id: &'static str) -> Self {
        Self {
            binding: Self::BINDING,
            id,
        }
    }

    pub const fn id(&self) -> &'static str {
        self.id
    }
}

impl fmt::Display for ChannelTypeUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.binding, self.id)
    }
}

/// Channel metadata for one cluster attribute: the spec attribute name,
/// the human-facing label, the channel id and the channel-type UID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub name: &'static str,
    pub label: &'static str,
    pub id: &'static str,
    pub uid: ChannelTypeUid,
}

impl Channel {
    pub const fn new(name: &'static str, label: &'static str, id: &'static str) -> Self {
        Self {
            name,
            label,
            id,
            uid: ChannelTypeUid::new(id),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.uid, self.label)
    }
}

/// The channels of one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterChannels {
    pub cluster: &'static str,
    pub cluster_id: ClusterId,
    pub channels: &'static [Channel],
}

pub const CHANNEL_ON_OFF_ON_OFF: Channel = Channel::new("OnOff", "On Off", "onoff-onoff");
pub const CHANNEL_ON_OFF_GLOBAL_SCENE_CONTROL: Channel = Channel::new(
    "GlobalSceneControl",
    "Global Scene Control",
    "onoff-globalscenecontrol",
);
pub const CHANNEL_ON_OFF_ON_TIME: Channel = Channel::new("OnTime", "On Time", "onoff-ontime");
pub const CHANNEL_ON_OFF_OFF_WAIT_TIME: Channel =
    Channel::new("OffWaitTime", "Off Wait Time", "onoff-offwaittime");
pub const CHANNEL_ON_OFF_START_UP_ON_OFF: Channel =
    Channel::new("StartUpOnOff", "Start Up On Off", "onoff-startuponoff");

pub const ON_OFF: ClusterChannels = ClusterChannels {
    cluster: "OnOff",
    cluster_id: 6,
    channels: &[
        CHANNEL_ON_OFF_ON_OFF,
        CHANNEL_ON_OFF_GLOBAL_SCENE_CONTROL,
        CHANNEL_ON_OFF_ON_TIME,
        CHANNEL_ON_OFF_OFF_WAIT_TIME,
        CHANNEL_ON_OFF_START_UP_ON_OFF,
    ],
};

pub const CHANNEL_LEVEL_CONTROL_CURRENT_LEVEL: Channel = Channel::new(
    "CurrentLevel",
    "Current Level",
    "levelcontrol-currentlevel",
);
pub const CHANNEL_LEVEL_CONTROL_REMAINING_TIME: Channel = Channel::new(
    "RemainingTime",
    "Remaining Time",
    "levelcontrol-remainingtime",
);
pub const CHANNEL_LEVEL_CONTROL_MIN_LEVEL: Channel =
    Channel::new("MinLevel", "Min Level", "levelcontrol-minlevel");
pub const CHANNEL_LEVEL_CONTROL_MAX_LEVEL: Channel =
    Channel::new("MaxLevel", "Max Level", "levelcontrol-maxlevel");
pub const CHANNEL_LEVEL_CONTROL_CURRENT_FREQUENCY: Channel = Channel::new(
    "CurrentFrequency",
    "Current Frequency",
    "levelcontrol-currentfrequency",
);
pub const CHANNEL_LEVEL_CONTROL_MIN_FREQUENCY: Channel = Channel::new(
    "MinFrequency",
    "Min Frequency",
    "levelcontrol-minfrequency",
);
pub const CHANNEL_LEVEL_CONTROL_MAX_FREQUENCY: Channel = Channel::new(
    "MaxFrequency",
    "Max Frequency",
    "levelcontrol-maxfrequency",
);
pub const CHANNEL_LEVEL_CONTROL_OPTIONS: Channel =
    Channel::new("Options", "Options", "levelcontrol-options");
pub const CHANNEL_LEVEL_CONTROL_ON_OFF_TRANSITION_TIME: Channel = Channel::new(
    "OnOffTransitionTime",
    "On Off Transition Time",
    "levelcontrol-onofftransitiontime",
);
pub const CHANNEL_LEVEL_CONTROL_ON_LEVEL: Channel =
    Channel::new("OnLevel", "On Level", "levelcontrol-onlevel");
pub const CHANNEL_LEVEL_CONTROL_ON_TRANSITION_TIME: Channel = Channel::new(
    "OnTransitionTime",
    "On Transition Time",
    "levelcontrol-ontransitiontime",
);
pub const CHANNEL_LEVEL_CONTROL_OFF_TRANSITION_TIME: Channel = Channel::new(
    "OffTransitionTime",
    "Off Transition Time",
    "levelcontrol-offtransitiontime",
);
pub const CHANNEL_LEVEL_CONTROL_DEFAULT_MOVE_RATE: Channel = Channel::new(
    "DefaultMoveRate",
    "Default Move Rate",
    "levelcontrol-defaultmoverate",
);
pub const CHANNEL_LEVEL_CONTROL_START_UP_CURRENT_LEVEL: Channel = Channel::new(
    "StartUpCurrentLevel",
    "Start Up Current Level",
    "levelcontrol-startupcurrentlevel",
);

pub const LEVEL_CONTROL: ClusterChannels = ClusterChannels {
    cluster: "LevelControl",
    cluster_id: 8,
    channels: &[
        CHANNEL_LEVEL_CONTROL_CURRENT_LEVEL,
        CHANNEL_LEVEL_CONTROL_REMAINING_TIME,
        CHANNEL_LEVEL_CONTROL_MIN_LEVEL,
        CHANNEL_LEVEL_CONTROL_MAX_LEVEL,
        CHANNEL_LEVEL_CONTROL_CURRENT_FREQUENCY,
        CHANNEL_LEVEL_CONTROL_MIN_FREQUENCY,
        CHANNEL_LEVEL_CONTROL_MAX_FREQUENCY,
        CHANNEL_LEVEL_CONTROL_OPTIONS,
        CHANNEL_LEVEL_CONTROL_ON_OFF_TRANSITION_TIME,
        CHANNEL_LEVEL_CONTROL_ON_LEVEL,
        CHANNEL_LEVEL_CONTROL_ON_TRANSITION_TIME,
        CHANNEL_LEVEL_CONTROL_OFF_TRANSITION_TIME,
        CHANNEL_LEVEL_CONTROL_DEFAULT_MOVE_RATE,
        CHANNEL_LEVEL_CONTROL_START_UP_CURRENT_LEVEL,
    ],
};

pub const CHANNEL_BOOLEAN_STATE_STATE_VALUE: Channel =
    Channel::new("StateValue", "State Value", "booleanstate-statevalue");

pub const BOOLEAN_STATE: ClusterChannels = ClusterChannels {
    cluster: "BooleanState",
    cluster_id: 69,
    channels: &[CHANNEL_BOOLEAN_STATE_STATE_VALUE],
};

pub const CHANNEL_SMOKE_CO_ALARM_EXPRESSED_STATE: Channel = Channel::new(
    "ExpressedState",
    "Expressed State",
    "smokecoalarm-expressedstate",
);
pub const CHANNEL_SMOKE_CO_ALARM_SMOKE_STATE: Channel = Channel::new(
    "SmokeState",
    "Smoke State",
    "smokecoalarm-smokestate",
);
pub const CHANNEL_SMOKE_CO_ALARM_CO_STATE: Channel =
    Channel::new("CoState", "Co State", "smokecoalarm-costate");
pub const CHANNEL_SMOKE_CO_ALARM_BATTERY_ALERT: Channel = Channel::new(
    "BatteryAlert",
    "Battery Alert",
    "smokecoalarm-batteryalert",
);
pub const CHANNEL_SMOKE_CO_ALARM_DEVICE_MUTED: Channel = Channel::new(
    "DeviceMuted",
    "Device Muted",
    "smokecoalarm-devicemuted",
);
pub const CHANNEL_SMOKE_CO_ALARM_TEST_IN_PROGRESS: Channel = Channel::new(
    "TestInProgress",
    "Test In Progress",
    "smokecoalarm-testinprogress",
);
pub const CHANNEL_SMOKE_CO_ALARM_HARDWARE_FAULT_ALERT: Channel = Channel::new(
    "HardwareFaultAlert",
    "Hardware Fault Alert",
    "smokecoalarm-hardwarefaultalert",
);
pub const CHANNEL_SMOKE_CO_ALARM_END_OF_SERVICE_ALERT: Channel = Channel::new(
    "EndOfServiceAlert",
    "End Of Service Alert",
    "smokecoalarm-endofservicealert",
);
pub const CHANNEL_SMOKE_CO_ALARM_INTERCONNECT_SMOKE_ALARM: Channel = Channel::new(
    "InterconnectSmokeAlarm",
    "Interconnect Smoke Alarm",
    "smokecoalarm-interconnectsmokealarm",
);
pub const CHANNEL_SMOKE_CO_ALARM_INTERCONNECT_CO_ALARM: Channel = Channel::new(
    "InterconnectCOAlarm",
    "Interconnect Co Alarm",
    "smokecoalarm-interconnectcoalarm",
);
pub const CHANNEL_SMOKE_CO_ALARM_CONTAMINATION_STATE: Channel = Channel::new(
    "ContaminationState",
    "Contamination State",
    "smokecoalarm-contaminationstate",
);
pub const CHANNEL_SMOKE_CO_ALARM_SMOKE_SENSITIVITY_LEVEL: Channel = Channel::new(
    "SmokeSensitivityLevel",
    "Smoke Sensitivity Level",
    "smokecoalarm-smokesensitivitylevel",
);
pub const CHANNEL_SMOKE_CO_ALARM_EXPIRY_DATE: Channel = Channel::new(
    "ExpiryDate",
    "Expiry Date",
    "smokecoalarm-expirydate",
);

pub const SMOKE_CO_ALARM: ClusterChannels = ClusterChannels {
    cluster: "SmokeCoAlarm",
    cluster_id: 92,
    channels: &[
        CHANNEL_SMOKE_CO_ALARM_EXPRESSED_STATE,
        CHANNEL_SMOKE_CO_ALARM_SMOKE_STATE,
        CHANNEL_SMOKE_CO_ALARM_CO_STATE,
        CHANNEL_SMOKE_CO_ALARM_BATTERY_ALERT,
        CHANNEL_SMOKE_CO_ALARM_DEVICE_MUTED,
        CHANNEL_SMOKE_CO_ALARM_TEST_IN_PROGRESS,
        CHANNEL_SMOKE_CO_ALARM_HARDWARE_FAULT_ALERT,
        CHANNEL_SMOKE_CO_ALARM_END_OF_SERVICE_ALERT,
        CHANNEL_SMOKE_CO_ALARM_INTERCONNECT_SMOKE_ALARM,
        CHANNEL_SMOKE_CO_ALARM_INTERCONNECT_CO_ALARM,
        CHANNEL_SMOKE_CO_ALARM_CONTAMINATION_STATE,
        CHANNEL_SMOKE_CO_ALARM_SMOKE_SENSITIVITY_LEVEL,
        CHANNEL_SMOKE_CO_ALARM_EXPIRY_DATE,
    ],
};

/// Every cluster with registered channels.
pub static CHANNELS: &[ClusterChannels] = &[ON_OFF, LEVEL_CONTROL, BOOLEAN_STATE, SMOKE_CO_ALARM];

/// Look up a channel by its channel id (e.g. `"onoff-onoff"`).
pub fn find_channel(id: &str) -> Option<&'static Channel> {
    let found = CHANNELS
        .iter()
        .flat_map(|cluster| cluster.channels.iter())
        .find(|channel| channel.id == id);

    if found.is_none() {
        debug!("No channel registered for id {}", id);
    }

    found
}

/// Look up the channels of a cluster by its cluster ID.
pub fn cluster_channels(cluster_id: ClusterId) -> Option<&'static ClusterChannels> {
    CHANNELS
        .iter()
        .find(|cluster| cluster.cluster_id == cluster_id)
}
