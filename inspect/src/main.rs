// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Inspection tool for material map files.
// Run with: sheen-inspect [--config sheen.toml] <command>

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sheen_io::file::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "sheen-inspect")]
#[command(version, about = "Inspect and convert material map files")]
struct CliArgs {
    /// Graph configuration file. Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every map with its link and resolved settings.
    Show {
        /// A `.ron` or `.bin` maps file.
        file: PathBuf,
    },
    /// Report links that were dropped on import or that point at absent maps.
    Check {
        /// A `.ron` or `.bin` maps file.
        file: PathBuf,
    },
    /// Re-encode a maps file; formats are taken from the extensions.
    Convert {
        /// The file to read.
        input: PathBuf,
        /// The file to write.
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let config = sheen_io::file::load_graph_config(&args.config)?;

    match args.command {
        Command::Show { file } => commands::show(&file, config),
        Command::Check { file } => commands::check(&file, config),
        Command::Convert { input, output } => commands::convert(&input, &output, config),
    }
}
