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

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use matter_codegen::{generate, GenContext};
use matter_idl::idl::Idl;

/// Offline generator: emits the cluster modules and channel constant
/// tables for an IDL file. Pipe the output through rustfmt.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// IDL file to generate from
    idl: PathBuf,

    /// Only generate the named clusters (default: all)
    #[arg(short, long)]
    cluster: Vec<String>,

    /// Name of the crate the generated code is emitted into
    #[arg(long, default_value = "crate")]
    krate: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &args.log_level),
    );

    let contents = fs::read_to_string(&args.idl).expect("Valid input file");
    let mut idl = Idl::parse((&*contents).into())?;

    if !args.cluster.is_empty() {
        idl.clusters
            .retain(|cluster| args.cluster.iter().any(|name| name == &cluster.id));
    }
    info!("generating for {} clusters", idl.clusters.len());

    let context = GenContext::new(&args.krate);

    println!(
        "// Generated by `pregen` from `{}`; do not edit by hand.",
        args.idl.display()
    );
    println!("{}", generate(&idl, &context));

    Ok(())
}
