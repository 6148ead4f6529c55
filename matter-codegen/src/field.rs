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

//! Mapping of IDL field types to the Rust types carried by the generated
//! holders and structs.

use matter_idl::{Cluster, DataType};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

/// What kind of type a field refers to; decides how command payload
/// values are extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Enum,
    Bitmap,
    Struct,
}

/// Classify a type name against the owning cluster's definitions.
pub fn type_kind(name: &str, cluster: &Cluster) -> TypeKind {
    if cluster.enums.iter().any(|e| e.id == name) {
        TypeKind::Enum
    } else if cluster.bitmaps.iter().any(|b| b.id == name) {
        TypeKind::Bitmap
    } else if cluster.structs.iter().any(|s| s.id == name) {
        TypeKind::Struct
    } else {
        TypeKind::Scalar
    }
}

/// The Rust type of a field, with list and optional/nullable wrapping.
///
/// Spec-nullable and spec-optional fields both surface as `Option`: the
/// holder records a reported value or nothing.
pub fn field_type(
    data_type: &DataType,
    is_nullable: bool,
    is_optional: bool,
    cluster: &Cluster,
) -> TokenStream {
    let scalar = scalar_type(&data_type.name, cluster);

    let base = if data_type.is_list {
        quote!(Vec<#scalar>)
    } else {
        scalar
    };

    if is_nullable || is_optional {
        quote!(Option<#base>)
    } else {
        base
    }
}

fn scalar_type(name: &str, cluster: &Cluster) -> TokenStream {
    // NOTE: max_length is not used (string length limits are not checked
    // at this layer)

    match name {
        "enum8" | "int8u" | "bitmap8" => quote!(u8),
        "enum16" | "int16u" | "bitmap16" => quote!(u16),
        "int32u" | "bitmap32" => quote!(u32),
        "int64u" | "bitmap64" => quote!(u64),
        "int8s" => quote!(i8),
        "int16s" => quote!(i16),
        "int32s" => quote!(i32),
        "int64s" => quote!(i64),
        "single" => quote!(f32),
        "double" => quote!(f64),
        "boolean" => quote!(bool),

        // Spec section 7.19.2 - derived data types
        "priority" => quote!(u8),
        "status" => quote!(u8),
        "percent" => quote!(u8),
        "percent100ths" => quote!(u16),
        "epoch_us" => quote!(u64),
        "epoch_s" => quote!(u32),
        "posix_ms" => quote!(u64),
        "systime_us" => quote!(u64),
        "systime_ms" => quote!(u64),
        "elapsed_s" => quote!(u32),
        "temperature" => quote!(i16),
        "group_id" => quote!(u16),
        "endpoint_no" => quote!(u16),
        "vendor_id" => quote!(u16),
        "devtype_id" => quote!(u32),
        "fabric_id" => quote!(u64),
        "fabric_idx" => quote!(u8),
        "cluster_id" => quote!(u32),
        "attrib_id" => quote!(u32),
        "field_id" => quote!(u32),
        "event_id" => quote!(u32),
        "command_id" => quote!(u32),
        "action_id" => quote!(u8),
        "trans_id" => quote!(u32),
        "node_id" => quote!(u64),
        "entry_idx" => quote!(u16),
        "data_ver" => quote!(u32),
        "event_no" => quote!(u64),
        "namespace" => quote!(u8),
        "tag" => quote!(u8),

        "char_string" | "long_char_string" => quote!(String),
        "octet_string" | "long_octet_string" => quote!(Vec<u8>),

        "ipadr" | "ipv4adr" | "ipv6adr" | "ipv6pre" | "hwadr" | "semtag" | "tod" | "date" => {
            panic!("Unsupported field type {}", name)
        }

        // Anything else is an enum/bitmap/struct defined by the cluster
        other => {
            debug_assert!(
                type_kind(other, cluster) != TypeKind::Scalar,
                "unknown type {} in cluster {}",
                other,
                cluster.id
            );
            let ident = Ident::new(other, Span::call_site());
            quote!(#ident)
        }
    }
}
