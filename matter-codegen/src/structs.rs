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

//! Emission of the value structs of a cluster: spec structs (requests and
//! responses) and one payload struct per event.

use matter_idl::{Cluster, StructField};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::field::field_type;
use crate::id::field_name;

/// Create the token stream for all struct definitions of the cluster.
pub fn structs(cluster: &Cluster) -> TokenStream {
    let structs = cluster
        .structs
        .iter()
        .map(|s| value_struct(&s.id, &s.fields, cluster));

    quote!(
        #(#structs)*
    )
}

/// Create the token stream for the event payload structs of the cluster.
///
/// Every event becomes a `<Name>Event` struct, empty events included.
pub fn events(cluster: &Cluster) -> TokenStream {
    let events = cluster
        .events
        .iter()
        .map(|e| value_struct(&format!("{}Event", e.id), &e.fields, cluster));

    quote!(
        #(#events)*
    )
}

/// An immutable value struct with public fields and a constructor.
fn value_struct(name: &str, fields: &[StructField], cluster: &Cluster) -> TokenStream {
    let name = Ident::new(name, Span::call_site());

    let names = fields
        .iter()
        .map(|f| Ident::new(&field_name(&f.field.id), Span::call_site()))
        .collect::<Vec<_>>();
    let types = fields
        .iter()
        .map(|f| field_type(&f.field.data_type, f.is_nullable, f.is_optional, cluster))
        .collect::<Vec<_>>();

    quote!(
        #[derive(Debug, PartialEq, Eq, Clone, Hash)]
        pub struct #name {
            #(pub #names: #types,)*
        }

        impl #name {
            pub const fn new(#(#names: #types),*) -> Self {
                Self { #(#names),* }
            }
        }
    )
}
