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

//! Emission of one whole cluster module: identifier constants, the
//! attribute/command/event ID enums, the cluster's nested types, the
//! attribute holder and its command factories.

use log::debug;
use matter_idl::Cluster;
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use crate::bitmap::bitmaps;
use crate::commands::command_factories;
use crate::enumeration::enums;
use crate::field::field_type;
use crate::id::{attribute_variant_name, field_name, module_name};
use crate::structs::{events, structs};
use crate::GenContext;

/// The ID enum for the cluster's attributes, with a fallible conversion
/// from the wire id.
pub fn attribute_id(cluster: &Cluster) -> TokenStream {
    let variants = cluster.attributes.iter().map(|attr| {
        let name = Ident::new(
            &attribute_variant_name(&attr.field.field.id),
            Span::call_site(),
        );
        let code = Literal::i64_unsuffixed(attr.field.field.code as i64);
        quote!(
            #name = #code
        )
    });

    quote!(
        #[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
        #[repr(u32)]
        pub enum AttributeId {
            #(#variants),*
        }

        impl TryFrom<u32> for AttributeId {
            type Error = Error;

            fn try_from(id: u32) -> Result<Self, Self::Error> {
                Self::from_repr(id).ok_or_else(|| ErrorCode::AttributeNotFound.into())
            }
        }
    )
}

/// The ID enum for the cluster's commands, if it has any.
pub fn command_id(cluster: &Cluster) -> TokenStream {
    if cluster.commands.is_empty() {
        return quote!();
    }

    let variants = cluster.commands.iter().map(|cmd| {
        let name = Ident::new(&cmd.id, Span::call_site());
        let code = Literal::i64_unsuffixed(cmd.code as i64);
        quote!(
            #name = #code
        )
    });

    quote!(
        #[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
        #[repr(u32)]
        pub enum CommandId {
            #(#variants),*
        }

        impl TryFrom<u32> for CommandId {
            type Error = Error;

            fn try_from(id: u32) -> Result<Self, Self::Error> {
                Self::from_repr(id).ok_or_else(|| ErrorCode::CommandNotFound.into())
            }
        }
    )
}

/// The ID enum for the cluster's events, if it has any.
pub fn event_id(cluster: &Cluster) -> TokenStream {
    if cluster.events.is_empty() {
        return quote!();
    }

    let variants = cluster.events.iter().map(|event| {
        let name = Ident::new(&event.id, Span::call_site());
        let code = Literal::i64_unsuffixed(event.code as i64);
        quote!(
            #name = #code
        )
    });

    quote!(
        #[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr)]
        #[repr(u32)]
        pub enum EventId {
            #(#variants),*
        }

        impl TryFrom<u32> for EventId {
            type Error = Error;

            fn try_from(id: u32) -> Result<Self, Self::Error> {
                Self::from_repr(id).ok_or_else(|| ErrorCode::EventNotFound.into())
            }
        }
    )
}

/// The attribute holder: one `Option` field per attribute, a constructor
/// and the command factories.
fn holder(cluster: &Cluster) -> TokenStream {
    let struct_name = Ident::new(&format!("{}Cluster", cluster.id), Span::call_site());

    let names = cluster
        .attributes
        .iter()
        .map(|attr| Ident::new(&field_name(&attr.field.field.id), Span::call_site()))
        .collect::<Vec<_>>();
    let types = cluster
        .attributes
        .iter()
        .map(|attr| {
            // the holder distinguishes "not reported" only, so nullable
            // and optional do not add further wrapping
            let base = field_type(&attr.field.field.data_type, false, false, cluster);
            quote!(Option<#base>)
        })
        .collect::<Vec<_>>();

    let doc = format!(
        " Attribute holder for one {} cluster instance. Fields are `None` until the first attribute report arrives.",
        cluster.id
    );

    let factories = command_factories(cluster);

    quote!(
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        pub struct #struct_name {
            pub addr: ClusterAddr,
            #(pub #names: #types,)*
        }

        impl #struct_name {
            pub fn new(node_id: NodeId, endpoint_id: EndpointId) -> Self {
                Self {
                    addr: ClusterAddr::new(node_id, endpoint_id),
                    #(#names: None,)*
                }
            }

            #factories
        }
    )
}

/// The `Display` impl rendering every attribute's current value exactly
/// once, keyed by the wire attribute name.
fn display(cluster: &Cluster) -> TokenStream {
    let struct_name = Ident::new(&format!("{}Cluster", cluster.id), Span::call_site());

    let count = cluster.attributes.len();
    let writes = cluster.attributes.iter().enumerate().map(|(index, attr)| {
        let name = Ident::new(&field_name(&attr.field.field.id), Span::call_site());
        let separator = if index == 0 { "" } else { ", " };
        let format = format!("{}{}: {{:?}}", separator, attr.field.field.id);

        if index + 1 == count {
            quote!(write!(f, #format, self.#name))
        } else {
            quote!(write!(f, #format, self.#name)?;)
        }
    });

    quote!(
        impl fmt::Display for #struct_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                #(#writes)*
            }
        }
    )
}

/// Create the token stream for one whole cluster module.
pub fn cluster_module(cluster: &Cluster, context: &GenContext) -> TokenStream {
    debug!("generating cluster module for {}", cluster.id);

    let module = Ident::new(&module_name(&cluster.id), Span::call_site());
    let krate = context.krate();

    let id = Literal::u32_unsuffixed(cluster.code as u32);
    let name = cluster.id.as_str();
    let revision = Literal::u16_unsuffixed(cluster.revision as u16);

    let mut imports = vec![Ident::new("ClusterAddr", Span::call_site())];
    if !cluster.commands.is_empty() {
        imports.push(Ident::new("ClusterCommand", Span::call_site()));
    }
    if !cluster.enums.is_empty() {
        imports.push(Ident::new("ClusterEnum", Span::call_site()));
    }
    imports.push(Ident::new("EndpointId", Span::call_site()));
    imports.push(Ident::new("NodeId", Span::call_site()));

    let attribute_id = attribute_id(cluster);
    let command_id = command_id(cluster);
    let event_id = event_id(cluster);
    let bitmaps = bitmaps(cluster);
    let enums = enums(cluster);
    let structs = structs(cluster);
    let events = events(cluster);
    let holder = holder(cluster);
    let display = display(cluster);

    quote!(
        pub mod #module {
            use core::fmt;

            use #krate::clusters::{#(#imports),*};
            use #krate::error::{Error, ErrorCode};

            pub const ID: u32 = #id;
            pub const NAME: &str = #name;
            pub const REVISION: u16 = #revision;

            #attribute_id

            #command_id

            #event_id

            #bitmaps

            #enums

            #structs

            #events

            #holder

            #display
        }
    )
}

#[cfg(test)]
mod tests {
    use assert_tokenstreams_eq::assert_tokenstreams_eq;
    use quote::quote;

    use crate::tests::{get_cluster_named, parse_idl};
    use crate::GenContext;

    use super::cluster_module;

    #[test]
    fn module_generation_works() {
        let idl = parse_idl(
            "
              /** An interface to a boolean state called StateValue. */
              cluster BooleanState = 69 {
                revision 1;

                info event StateChange = 0 {
                  boolean stateValue = 0;
                }

                readonly attribute boolean stateValue = 0;
                readonly attribute command_id generatedCommandList[] = 65528;
                readonly attribute command_id acceptedCommandList[] = 65529;
                readonly attribute event_id eventList[] = 65530;
                readonly attribute attrib_id attributeList[] = 65531;
                readonly attribute bitmap32 featureMap = 65532;
                readonly attribute int16u clusterRevision = 65533;
              }
            ",
        );
        let cluster = get_cluster_named(&idl, "BooleanState").expect("cluster exists");
        let context = GenContext::new("crate");

        assert_tokenstreams_eq!(
            &cluster_module(cluster, &context),
            &quote!(
                pub mod boolean_state {
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

                    #[doc = " Attribute holder for one BooleanState cluster instance. Fields are `None` until the first attribute report arrives."]
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
                }
            )
        );
    }
}
