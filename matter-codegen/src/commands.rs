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

//! Emission of the command factories: one function per spec-defined
//! command, returning a `ClusterCommand` descriptor with the command's
//! payload fields.

use log::warn;
use matter_idl::{Cluster, Command, StructField};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::field::{type_kind, TypeKind};
use crate::id::field_name;

/// Create the token stream for all command factories of the cluster.
///
/// The functions are meant to be placed inside the holder's `impl`
/// block.
pub fn command_factories(cluster: &Cluster) -> TokenStream {
    let factories = cluster.commands.iter().map(|cmd| factory(cmd, cluster));

    quote!(
        #(#factories)*
    )
}

fn factory(cmd: &Command, cluster: &Cluster) -> TokenStream {
    let doc = cmd.doc_comment.as_ref().map(|doc| {
        let text = format!(" {}", doc.trim());
        quote!(#[doc = #text])
    });

    let fn_name = Ident::new(&field_name(&cmd.id), Span::call_site());
    let variant = Ident::new(&cmd.id, Span::call_site());
    let wire_name = cmd.id.as_str();

    let request = match cmd.input.as_deref() {
        None => None,
        Some(input) => {
            let request = cluster.struct_named(input);
            if request.is_none() {
                warn!(
                    "command {} references unknown request struct {}",
                    cmd.id, input
                );
            }
            request
        }
    };

    match request {
        None => quote!(
            #doc
            pub fn #fn_name() -> ClusterCommand {
                ClusterCommand::new(ID, CommandId::#variant as u32, #wire_name)
            }
        ),
        Some(request) => {
            let request_type = Ident::new(&request.id, Span::call_site());
            let args = request.fields.iter().map(|f| payload_arg(f, cluster));

            quote!(
                #doc
                pub fn #fn_name(request: #request_type) -> ClusterCommand {
                    ClusterCommand::new(ID, CommandId::#variant as u32, #wire_name)
                        #(#args)*
                }
            )
        }
    }
}

/// One `.arg(...)` call for a payload field, extracting the wire value
/// according to the field's type kind.
fn payload_arg(field: &StructField, cluster: &Cluster) -> TokenStream {
    let wire_name = field.field.id.as_str();
    let name = Ident::new(&field_name(&field.field.id), Span::call_site());
    let wrapped = field.is_nullable || field.is_optional;

    let value = match type_kind(&field.field.data_type.name, cluster) {
        TypeKind::Enum if wrapped => quote!(request.#name.map(|v| v.value())),
        TypeKind::Enum => quote!(request.#name.value()),
        TypeKind::Bitmap if wrapped => quote!(request.#name.map(|v| v.bits())),
        TypeKind::Bitmap => quote!(request.#name.bits()),
        _ => quote!(request.#name),
    };

    quote!(.arg(#wire_name, #value))
}

#[cfg(test)]
mod tests {
    use assert_tokenstreams_eq::assert_tokenstreams_eq;
    use quote::quote;

    use crate::tests::{get_cluster_named, parse_idl};

    use super::command_factories;

    #[test]
    fn factory_generation_works() {
        let idl = parse_idl(
            "
              cluster OnOff = 6 {
                revision 6;

                enum EffectIdentifierEnum : enum8 {
                  kDelayedAllOff = 0;
                  kDyingLight = 1;
                }

                request struct OffWithEffectRequest {
                  EffectIdentifierEnum effectIdentifier = 0;
                  enum8 effectVariant = 1;
                }

                /** On receipt of this command, a device SHALL enter its 'Off' state. */
                command Off(): DefaultSuccess = 0;
                command OffWithEffect(OffWithEffectRequest): DefaultSuccess = 64;
              }
            ",
        );
        let cluster = get_cluster_named(&idl, "OnOff").expect("cluster exists");

        assert_tokenstreams_eq!(
            &command_factories(cluster),
            &quote!(
                #[doc = " On receipt of this command, a device SHALL enter its 'Off' state."]
                pub fn off() -> ClusterCommand {
                    ClusterCommand::new(ID, CommandId::Off as u32, "Off")
                }

                pub fn off_with_effect(request: OffWithEffectRequest) -> ClusterCommand {
                    ClusterCommand::new(ID, CommandId::OffWithEffect as u32, "OffWithEffect")
                        .arg("effectIdentifier", request.effect_identifier.value())
                        .arg("effectVariant", request.effect_variant)
                }
            )
        );
    }
}
