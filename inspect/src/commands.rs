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

//! Implementations of the `sheen-inspect` subcommands.

use std::path::Path;

use anyhow::{bail, Result};
use sheen_core::material::{LinkResolution, MapCollection, MapGraphConfig, MapRef};
use sheen_io::file::{read_collection, write_collection};
use sheen_io::ImportReport;

pub fn show(path: &Path, config: MapGraphConfig) -> Result<()> {
    let (maps, report) = read_collection(path, config)?;
    println!("{} ({} maps)", path.display(), maps.len());
    for map in maps.iter() {
        println!("{}", describe(&maps, map));
    }
    if !report.is_clean() {
        println!();
        print_report(&report);
    }
    Ok(())
}

pub fn check(path: &Path, config: MapGraphConfig) -> Result<()> {
    let (maps, report) = read_collection(path, config)?;
    print_report(&report);

    let problems = report.rejected_links.len() + maps.dangling_links().len();
    if problems > 0 {
        bail!("{} has {problems} link problem(s)", path.display());
    }
    println!("{}: ok", path.display());
    Ok(())
}

pub fn convert(input: &Path, output: &Path, config: MapGraphConfig) -> Result<()> {
    let (maps, report) = read_collection(input, config)?;
    if !report.rejected_links.is_empty() {
        log::warn!(
            "{} link(s) from '{}' were dropped and will not be written.",
            report.rejected_links.len(),
            input.display()
        );
    }
    write_collection(output, &maps)?;
    println!("{} -> {}", input.display(), output.display());
    Ok(())
}

fn describe(maps: &MapCollection, map: MapRef<'_>) -> String {
    let state = if map.is_enabled() { "on" } else { "off" };
    let link = match map.link_type() {
        Some(target) => target.to_string(),
        None => "-".to_string(),
    };
    let resolution = match map.resolution() {
        LinkResolution::Terminal(terminal) => format!("terminal {terminal}"),
        LinkResolution::Dangling { missing } => format!("dangling at {missing}"),
        LinkResolution::HopLimitExceeded { limit } => format!("over {limit} hops"),
    };

    let mut line = format!(
        "{:<22} {state:<3} link {link:<22} {resolution}",
        map.map_type().name()
    );
    if map.is_value_map() {
        line.push_str(&format!(" value {:.4}", map.value()));
    }
    let scale = map.projection_scale();
    line.push_str(&format!(" scale ({}, {}, {})", scale.x, scale.y, scale.z));

    let chain = maps.link_chain(map.map_type());
    if chain.len() > 1 {
        let chain: Vec<String> = chain.iter().map(|ty| ty.to_string()).collect();
        line.push_str(&format!(" chain {}", chain.join(" -> ")));
    }
    line
}

fn print_report(report: &ImportReport) {
    for map_type in &report.repeated {
        println!("repeated: {map_type} (later entry kept)");
    }
    for rejected in &report.rejected_links {
        println!(
            "rejected: {} -> {} ({})",
            rejected.source, rejected.target, rejected.error
        );
    }
    for (source, target) in &report.dangling_links {
        println!("dangling: {source} -> {target} (no {target} map)");
    }
}
