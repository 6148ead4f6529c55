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

//! An interface to a boolean state called StateValue.
//!
//! Generated by `pregen` from `sample-clusters.matter`; do not edit by hand.

use core::fmt;

use crate::clusters::{ClusterAddr, EndpointId, NodeId};
use crate::error::{Error, ErrorCode};

pub const ID: u32 = 69;
pub const NAME: &str = "BooleanState";
pub const REVISION: u16 = 1;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
#[repr(u32)]
pub enum AttributeId {
    StateValue = 0,
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
pub enum EventId {
    StateChange = 0,
}

impl TryFrom<u32> for EventId {
    type Error = Error;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_repr(id).ok_or_else(|| ErrorCode::EventNotFound.into())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct StateChangeEvent {
    pub state_value: bool,
}

impl StateChangeEvent {
    pub const fn new(state_value: bool) -> Self {
        Self { state_value }
    }
}

/// Attribute holder for one BooleanState cluster instance. Fields are
/// `None` until the first attribute report arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanStateCluster {
    pub addr: ClusterAddr,
    pub state_value: Option<bool>,
    pub generated_command_list: Option<Vec<u32>>,
    pub accepted_command_list: Option<Vec<u32>>,
    pub event_list: Option<Vec<u32>>,
    pub attribute_list: Option<Vec<u32>>,
    pub feature_map: Option<u32>,
    pub cluster_revision: Option<u16>,
}

impl BooleanStateCluster {
    pub fn new(node_id: NodeId, endpoint_id: EndpointId) -> Self {
        Self {
            addr: ClusterAddr::new(node_id, endpoint_id),
            state_value: None,
            generated_command_list: None,
            accepted_command_list: None,
            event_list: None,
            attribute_list: None,
            feature_map: None,
            cluster_revision: None,
        }
    }
}

impl fmt::Display for BooleanStateCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stateValue: {:?}", self.state_value)?;
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
    fn state_change_event() {
        let event = StateChangeEvent::new(true);
        assert!(event.state_value);
        assert_eq!(EventId::try_from(0).unwrap(), EventId::StateChange);
    }
}
