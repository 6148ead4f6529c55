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

//! Code generation over the parsed Matter data model.
//!
//! Two emission rules are implemented, matching the two artifact families
//! of the channels crate:
//!
//! - [`channels`]: the channel constant tables — for every exposed
//!   (cluster, attribute) pair a `Channel` tuple whose id is
//!   `lowercase(cluster)-lowercase(attribute)` and whose UID is the fixed
//!   binding prefix plus that id;
//! - [`cluster`]: one module per cluster with ID enums, enums (carrying
//!   the spec's value/label pairs), bitmaps, structs, events, the
//!   attribute holder and the command factories.
//!
//! Generation is total over well-formed input; malformed base types
//! panic, as the generator runs offline.

use matter_idl::idl::Idl;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

pub mod bitmap;
pub mod channels;
pub mod cluster;
pub mod commands;
pub mod enumeration;
pub mod field;
pub mod id;
pub mod structs;

/// Context data for code generation.
///
/// Carries the name of the crate the emitted code lands in, so that the
/// generated modules can refer to the shared support types (`crate` when
/// emitting into the channels crate itself).
pub struct GenContext {
    channels_crate: Ident,
}

impl GenContext {
    pub fn new(channels_crate: impl AsRef<str>) -> Self {
        Self {
            channels_crate: Ident::new(channels_crate.as_ref(), Span::call_site()),
        }
    }

    pub(crate) fn krate(&self) -> Ident {
        self.channels_crate.clone()
    }
}

/// Generate everything for the parsed IDL: one module per cluster,
/// followed by the channel constant tables and the registry.
pub fn generate(idl: &Idl, context: &GenContext) -> TokenStream {
    let modules = idl
        .clusters
        .iter()
        .map(|c| cluster::cluster_module(c, context));
    let channel_tables = idl.clusters.iter().map(channels::channel_constants);
    let registry = channels::channel_registry(&idl.clusters);

    quote!(
        #(#modules)*

        #(#channel_tables)*

        #registry
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use matter_idl::idl::Idl;
    use matter_idl::Cluster;

    pub fn parse_idl(input: &str) -> Idl {
        Idl::parse(input.into()).expect("valid input")
    }

    pub fn get_cluster_named<'a>(idl: &'a Idl, name: &str) -> Option<&'a Cluster> {
        idl.clusters.iter().find(|&cluster| cluster.id == name)
    }

    #[test]
    fn generate_covers_sample_clusters() {
        let idl = parse_idl(matter_idl::SAMPLE_CLUSTERS_IDL);
        let context = crate::GenContext::new("crate");

        let generated = crate::generate(&idl, &context).to_string();

        assert!(generated.contains("pub mod smoke_co_alarm"));
        assert!(generated.contains("pub mod on_off"));
        assert!(generated.contains("pub mod level_control"));
        assert!(generated.contains("pub mod boolean_state"));
        assert!(generated.contains("CHANNEL_SMOKE_CO_ALARM_SMOKE_STATE"));
        assert!(generated.contains("\"smokecoalarm-smokestate\""));
        assert!(generated.contains("pub static CHANNELS"));
    }
}
