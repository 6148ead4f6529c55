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

//! Emission of the channel constant tables: for every exposed attribute
//! one `Channel` constant carrying the (name, label, id, UID) tuple, one
//! `ClusterChannels` table per cluster, and the crate-wide registry.
//!
//! Generation is total over the input: the channel id is derived as
//! `lowercase(cluster)-lowercase(attribute)` and the label is the
//! title-cased attribute name.

use matter_idl::{Attribute, Cluster};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use crate::id::{
    attribute_variant_name, channel_constant_name, channel_id, cluster_constant_name, label,
};

/// Global attributes (ids 0xFFF8 and up) are not exposed as channels.
fn is_exposed(attribute: &Attribute) -> bool {
    attribute.field.field.code < 0xFFF8
}

/// Create the token stream for one cluster's channel constants and its
/// `ClusterChannels` table.
pub fn channel_constants(cluster: &Cluster) -> TokenStream {
    let constants = cluster
        .attributes
        .iter()
        .filter(|a| is_exposed(a))
        .map(|a| channel_constant(cluster, a));

    let table = Ident::new(&cluster_constant_name(&cluster.id), Span::call_site());
    let cluster_name = cluster.id.as_str();
    let cluster_code = Literal::u32_unsuffixed(cluster.code as u32);
    let entries = cluster
        .attributes
        .iter()
        .filter(|a| is_exposed(a))
        .map(|a| {
            Ident::new(
                &channel_constant_name(&cluster.id, &a.field.field.id),
                Span::call_site(),
            )
        });

    quote!(
        #(#constants)*

        pub const #table: ClusterChannels = ClusterChannels {
            cluster: #cluster_name,
            cluster_id: #cluster_code,
            channels: &[#(#entries),*],
        };
    )
}

fn channel_constant(cluster: &Cluster, attribute: &Attribute) -> TokenStream {
    let attribute_name = &attribute.field.field.id;

    let constant = Ident::new(
        &channel_constant_name(&cluster.id, attribute_name),
        Span::call_site(),
    );
    let name = attribute_variant_name(attribute_name);
    let label = label(attribute_name);
    let id = channel_id(&cluster.id, attribute_name);

    quote!(
        pub const #constant: Channel = Channel::new(#name, #label, #id);
    )
}

/// Create the token stream for the crate-wide channel registry.
pub fn channel_registry(clusters: &[Cluster]) -> TokenStream {
    let tables = clusters
        .iter()
        .map(|c| Ident::new(&cluster_constant_name(&c.id), Span::call_site()));

    quote!(
        pub static CHANNELS: &[ClusterChannels] = &[#(#tables),*];
    )
}
