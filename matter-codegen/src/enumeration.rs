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

//! Emission of the Rust enums corresponding to enum definitions in an
//! IDL cluster, including the shared value/label surface.

use matter_idl::{Cluster, Enum};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use crate::id::{enum_variant_name, label};

/// Create the token stream for all enum definitions of the cluster.
pub fn enums(cluster: &Cluster) -> TokenStream {
    let enums = cluster.enums.iter().map(enumeration);

    quote!(
        #(#enums)*
    )
}

/// Create the token stream for one enum definition: the `repr` enum with
/// its wire values, the `ClusterEnum` value/label impl and the fallible
/// conversion from the wire value.
fn enumeration(e: &Enum) -> TokenStream {
    let base_type = match e.base_type.as_ref() {
        "enum8" => quote!(u8),
        "enum16" => quote!(u16),
        other => panic!("Unknown enumeration base type {}", other),
    };
    let name = Ident::new(&e.id, Span::call_site());

    let items = e.entries.iter().map(|entry| {
        let variant = Ident::new(&enum_variant_name(&entry.id), Span::call_site());
        let value = Literal::i64_unsuffixed(entry.code as i64);
        quote!(
            #variant = #value
        )
    });

    let labels = e.entries.iter().map(|entry| {
        let variant = Ident::new(&enum_variant_name(&entry.id), Span::call_site());
        let label = label(&entry.id);
        quote!(
            Self::#variant => #label,
        )
    });

    quote!(
        #[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, strum::FromRepr, strum::EnumIter)]
        #[repr(#base_type)]
        pub enum #name {
            #(#items),*
        }

        impl ClusterEnum for #name {
            fn value(&self) -> u16 {
                *self as u16
            }

            fn label(&self) -> &'static str {
                match self {
                    #(#labels)*
                }
            }
        }

        impl TryFrom<#base_type> for #name {
            type Error = Error;

            fn try_from(value: #base_type) -> Result<Self, Self::Error> {
                Self::from_repr(value).ok_or_else(|| ErrorCode::InvalidEnumValue.into())
            }
        }
    )
}
