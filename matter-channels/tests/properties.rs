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

//! Registry-wide and generator-contract properties: channel id/UID
//! derivation, holder rendering, and enum value/label pairs.

use std::collections::HashSet;

use rstest::rstest;

use matter_channels::channel::{self, CHANNELS};
use matter_channels::clusters::{boolean_state, level_control, on_off, smoke_co_alarm};
use matter_channels::clusters::ClusterEnum;

#[test]
fn channel_ids_follow_derivation_rule() {
    for cluster in CHANNELS {
        for channel in cluster.channels {
            let expected = format!(
                "{}-{}",
                cluster.cluster.to_lowercase(),
                channel.name.to_lowercase()
            );
            assert_eq!(channel.id, expected, "channel {}", channel.name);
        }
    }
}

#[test]
fn channel_uids_are_prefix_plus_id() {
    for cluster in CHANNELS {
        for channel in cluster.channels {
            assert_eq!(channel.uid.to_string(), format!("matter:{}", channel.id));
        }
    }
}

#[test]
fn channel_ids_are_unique() {
    let mut seen = HashSet::new();
    for cluster in CHANNELS {
        for channel in cluster.channels {
            assert!(seen.insert(channel.id), "duplicate channel id {}", channel.id);
        }
    }
}

#[test]
fn registry_matches_cluster_modules() {
    assert_eq!(channel::ON_OFF.cluster_id, on_off::ID);
    assert_eq!(channel::ON_OFF.cluster, on_off::NAME);
    assert_eq!(channel::LEVEL_CONTROL.cluster_id, level_control::ID);
    assert_eq!(channel::LEVEL_CONTROL.cluster, level_control::NAME);
    assert_eq!(channel::BOOLEAN_STATE.cluster_id, boolean_state::ID);
    assert_eq!(channel::BOOLEAN_STATE.cluster, boolean_state::NAME);
    assert_eq!(channel::SMOKE_CO_ALARM.cluster_id, smoke_co_alarm::ID);
    assert_eq!(channel::SMOKE_CO_ALARM.cluster, smoke_co_alarm::NAME);
}

/// Every variant must round-trip through its wire value, and labels must
/// be non-empty and unique within the enum.
macro_rules! check_enum {
    ($ty:ty) => {{
        let mut labels = HashSet::new();
        for variant in <$ty as strum::IntoEnumIterator>::iter() {
            assert_eq!(
                <$ty>::from_repr(variant.value() as u8),
                Some(variant),
                "value round-trip for {:?}",
                variant
            );
            assert!(!variant.label().is_empty(), "empty label for {:?}", variant);
            assert!(
                labels.insert(variant.label()),
                "duplicate label {:?}",
                variant.label()
            );
        }
    }};
}

#[test]
fn enum_values_round_trip_and_labels_are_distinct() {
    check_enum!(smoke_co_alarm::AlarmStateEnum);
    check_enum!(smoke_co_alarm::ContaminationStateEnum);
    check_enum!(smoke_co_alarm::EndOfServiceEnum);
    check_enum!(smoke_co_alarm::ExpressedStateEnum);
    check_enum!(smoke_co_alarm::MuteStateEnum);
    check_enum!(smoke_co_alarm::SensitivityEnum);
    check_enum!(on_off::DelayedAllOffEffectVariantEnum);
    check_enum!(on_off::DyingLightEffectVariantEnum);
    check_enum!(on_off::EffectIdentifierEnum);
    check_enum!(on_off::StartUpOnOffEnum);
    check_enum!(level_control::MoveModeEnum);
    check_enum!(level_control::StepModeEnum);
}

#[rstest]
#[case(smoke_co_alarm::AlarmStateEnum::Normal, 0, "Normal")]
#[case(smoke_co_alarm::AlarmStateEnum::Warning, 1, "Warning")]
#[case(smoke_co_alarm::AlarmStateEnum::Critical, 2, "Critical")]
fn alarm_state_literal_pairs(
    #[case] variant: smoke_co_alarm::AlarmStateEnum,
    #[case] value: u16,
    #[case] label: &str,
) {
    assert_eq!(variant.value(), value);
    assert_eq!(variant.label(), label);
}

#[rstest]
#[case(smoke_co_alarm::ExpressedStateEnum::Normal, 0, "Normal")]
#[case(smoke_co_alarm::ExpressedStateEnum::SmokeAlarm, 1, "Smoke Alarm")]
#[case(smoke_co_alarm::ExpressedStateEnum::COAlarm, 2, "Co Alarm")]
#[case(smoke_co_alarm::ExpressedStateEnum::BatteryAlert, 3, "Battery Alert")]
#[case(smoke_co_alarm::ExpressedStateEnum::Testing, 4, "Testing")]
#[case(smoke_co_alarm::ExpressedStateEnum::HardwareFault, 5, "Hardware Fault")]
#[case(smoke_co_alarm::ExpressedStateEnum::EndOfService, 6, "End Of Service")]
#[case(smoke_co_alarm::ExpressedStateEnum::InterconnectSmoke, 7, "Interconnect Smoke")]
#[case(smoke_co_alarm::ExpressedStateEnum::InterconnectCO, 8, "Interconnect Co")]
fn expressed_state_literal_pairs(
    #[case] variant: smoke_co_alarm::ExpressedStateEnum,
    #[case] value: u16,
    #[case] label: &str,
) {
    assert_eq!(variant.value(), value);
    assert_eq!(variant.label(), label);
}

#[test]
fn smoke_co_alarm_display_includes_every_field_once() {
    let mut cluster = smoke_co_alarm::SmokeCoAlarmCluster::new(0xAB12, 3);

    cluster.expressed_state = Some(smoke_co_alarm::ExpressedStateEnum::SmokeAlarm);
    cluster.smoke_state = Some(smoke_co_alarm::AlarmStateEnum::Warning);
    cluster.co_state = Some(smoke_co_alarm::AlarmStateEnum::Normal);
    cluster.battery_alert = Some(smoke_co_alarm::AlarmStateEnum::Critical);
    cluster.device_muted = Some(smoke_co_alarm::MuteStateEnum::Muted);
    cluster.test_in_progress = Some(false);
    cluster.hardware_fault_alert = Some(true);
    cluster.end_of_service_alert = Some(smoke_co_alarm::EndOfServiceEnum::Expired);
    cluster.interconnect_smoke_alarm = Some(smoke_co_alarm::AlarmStateEnum::Normal);
    cluster.interconnect_co_alarm = Some(smoke_co_alarm::AlarmStateEnum::Normal);
    cluster.contamination_state = Some(smoke_co_alarm::ContaminationStateEnum::Low);
    cluster.smoke_sensitivity_level = Some(smoke_co_alarm::SensitivityEnum::High);
    cluster.expiry_date = Some(746841600);
    cluster.generated_command_list = Some(vec![]);
    cluster.accepted_command_list = Some(vec![0]);
    cluster.event_list = Some(vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    cluster.attribute_list = Some(vec![0, 1, 2, 3]);
    cluster.feature_map = Some(3);
    cluster.cluster_revision = Some(1);

    let rendered = cluster.to_string();

    let needles = [
        "expressedState: Some(SmokeAlarm)",
        "smokeState: Some(Warning)",
        "coState: Some(Normal)",
        "batteryAlert: Some(Critical)",
        "deviceMuted: Some(Muted)",
        "testInProgress: Some(false)",
        "hardwareFaultAlert: Some(true)",
        "endOfServiceAlert: Some(Expired)",
        "interconnectSmokeAlarm: Some(Normal)",
        "interconnectCOAlarm: Some(Normal)",
        "contaminationState: Some(Low)",
        "smokeSensitivityLevel: Some(High)",
        "expiryDate: Some(746841600)",
        "generatedCommandList: Some([])",
        "acceptedCommandList: Some([0])",
        "eventList: Some([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10])",
        "attributeList: Some([0, 1, 2, 3])",
        "featureMap: Some(3)",
        "clusterRevision: Some(1)",
    ];

    for needle in needles {
        assert_eq!(rendered.matches(needle).count(), 1, "field {:?}", needle);
    }
}

#[test]
fn on_off_display_includes_every_field_once() {
    let mut cluster = on_off::OnOffCluster::new(1, 1);

    cluster.on_off = Some(true);
    cluster.global_scene_control = Some(false);
    cluster.on_time = Some(111);
    cluster.off_wait_time = Some(222);
    cluster.start_up_on_off = Some(on_off::StartUpOnOffEnum::Toggle);
    cluster.generated_command_list = Some(vec![]);
    cluster.accepted_command_list = Some(vec![0, 1, 2, 64, 65, 66]);
    cluster.event_list = Some(vec![]);
    cluster.attribute_list = Some(vec![0, 16384]);
    cluster.feature_map = Some(1);
    cluster.cluster_revision = Some(6);

    let rendered = cluster.to_string();

    let needles = [
        "onOff: Some(true)",
        "globalSceneControl: Some(false)",
        "onTime: Some(111)",
        "offWaitTime: Some(222)",
        "startUpOnOff: Some(Toggle)",
        "generatedCommandList: Some([])",
        "acceptedCommandList: Some([0, 1, 2, 64, 65, 66])",
        "eventList: Some([])",
        "attributeList: Some([0, 16384])",
        "featureMap: Some(1)",
        "clusterRevision: Some(6)",
    ];

    for needle in needles {
        assert_eq!(rendered.matches(needle).count(), 1, "field {:?}", needle);
    }
}

#[test]
fn holders_start_empty() {
    let cluster = boolean_state::BooleanStateCluster::new(7, 2);

    assert_eq!(cluster.addr.node_id, 7);
    assert_eq!(cluster.addr.endpoint_id, 2);
    assert_eq!(cluster.state_value, None);
    assert_eq!(cluster.to_string().matches("None").count(), 7);
}
