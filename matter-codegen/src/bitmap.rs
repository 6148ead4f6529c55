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

//! Emission of `bitflags` types for the bitmap definitions of an IDL
//! cluster.

use matter_idl::{Bitmap, Cluster};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::quote;

use crate::id::constant_name;

/// Create the token stream for all bitmap definitions of the cluster.
pub fn bitmaps(cluster: &Cluster) -> TokenStream {
    let bitmaps = cluster.bitmaps.iter().map(bitmap);

    quote!(
        #(#bitmaps)*
    )
}

/// Create the token stream for one bitmap definition.
fn bitmap(b: &Bitmap) -> TokenStream {
    let base_type = match b.base_type.as_ref() {
        "bitmap8" => quote!(u8),
        "bitmap16" => quote!(u16),
        "bitmap32" => quote!(u32),
        "bitmap64" => quote!(u64),
        other => panic!("Unknown bitmap base type {}", other),
    };
    let name = Ident::new(&b.id, Span::call_site());

    let items = b.entries.iter().map(|entry| {
        let constant = Ident::new(&constant_name(&entry.id), Span::call_site());
        let value = Literal::i64_unsuffixed(entry.code as i64);
        quote!(
            const #constant = #value;
        )
    });

    quote!(
        bitflags::bitflags! {
            #[repr(transparent)]
            #[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
            pub struct #name: #base_type {
                #(#items)*
            }
        }

        impl TryFrom<#base_type> for #name {
            type Error = Error;

            fn try_from(value: #base_type) -> Result<Self, Self::Error> {
                Self::from_bits(value).ok_or_else(|| ErrorCode::InvalidBitmapValue.into())
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use assert_tokenstreams_eq::assert_tokenstreams_eq;
    use quote::quote;

    use crate::tests::{get_cluster_named, parse_idl};

    use super::bitmaps;

    #[test]
    fn bitmap_generation_works() {
        let idl = parse_idl(
            "
              cluster SmokeCoAlarm = 92 {
                revision 1;

                bitmap Feature : bitmap32 {
                  kSmokeAlarm = 0x1;
                  kCOAlarm = 0x2;
                }
              }
            ",
        );
        let cluster = get_cluster_named(&idl, "SmokeCoAlarm").expect("cluster exists");

        assert_tokenstreams_eq!(
            &bitmaps(cluster),
            &quote!(
                bitflags::bitflags! {
                    #[repr(transparent)]
                    #[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash)]
                    pub struct Feature: u32 {
                        const SMOKE_ALARM = 1;
                        const CO_ALARM = 2;
                    }
                }

                impl TryFrom<u32> for Feature {
                    type Error = Error;

                    fn try_from(value: u32) -> Result<Self, Self::Error> {
                        Self::from_bits(value).ok_or_else(|| ErrorCode::InvalidBitmapValue.into())
                    }
                }
            )
        );
    }
}
