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

use anyhow::Result;
use sheen_core::material::{LinkResolution, MapCollection, MapGraphConfig, MapLinkError, MapType};
use sheen_core::math::Vec3;
use sheen_io::file::{load_graph_config, read_collection, write_collection};
use std::fs;
use tempfile::tempdir;

/// Wood material: Pattern carries the texture, Bump and GlowColor follow it.
fn wood_collection() -> MapCollection {
    let mut maps = MapCollection::new();
    {
        let mut pattern = maps.add_map(MapType::Pattern);
        pattern.set_projection_scale(Vec3::new(2.0, 2.0, 1.0));
        pattern.layers_mut().top_layer_mut().file_name = "wood.png".to_string();
    }
    maps.add_map(MapType::Bump)
        .set_link_type(Some(MapType::Pattern))
        .unwrap();
    maps.add_map(MapType::GlowColor)
        .set_link_type(Some(MapType::Bump))
        .unwrap();
    maps.add_map(MapType::Finish).set_value(0.35);
    maps
}

#[test]
fn test_ron_file_roundtrip_keeps_link_graph() -> Result<()> {
    // --- 1. ARRANGE ---
    let dir = tempdir()?;
    let path = dir.path().join("wood.ron");
    let original = wood_collection();

    // --- 2. ACT ---
    write_collection(&path, &original)?;
    let (loaded, report) = read_collection(&path, MapGraphConfig::default())?;

    // --- 3. ASSERT ---
    assert!(report.is_clean());
    assert_eq!(loaded.len(), original.len());
    for map_type in original.map_types() {
        assert_eq!(loaded.get(map_type), original.get(map_type), "{map_type} differs");
    }
    assert_eq!(
        loaded.resolve(MapType::GlowColor),
        Some(LinkResolution::Terminal(MapType::Pattern))
    );
    assert_eq!(
        loaded.get(MapType::GlowColor).unwrap().layers().top_layer().file_name,
        "wood.png"
    );
    Ok(())
}

#[test]
fn test_convert_ron_to_bincode() -> Result<()> {
    // --- 1. ARRANGE ---
    let dir = tempdir()?;
    let ron_path = dir.path().join("wood.ron");
    let bin_path = dir.path().join("wood.bin");
    write_collection(&ron_path, &wood_collection())?;

    // --- 2. ACT ---
    let (from_ron, _) = read_collection(&ron_path, MapGraphConfig::default())?;
    write_collection(&bin_path, &from_ron)?;
    let (from_bin, report) = read_collection(&bin_path, MapGraphConfig::default())?;

    // --- 3. ASSERT ---
    assert!(report.is_clean());
    assert_eq!(from_bin.map_types().collect::<Vec<_>>(), from_ron.map_types().collect::<Vec<_>>());
    assert_eq!(from_bin.get(MapType::Finish).unwrap().value(), 0.35);
    assert!(fs::metadata(&bin_path)?.len() < fs::metadata(&ron_path)?.len());
    Ok(())
}

#[test]
fn test_dangling_link_survives_save_and_load() -> Result<()> {
    // --- 1. ARRANGE ---
    // Bump links to Reflect, then Reflect is deleted: Bump's link dangles.
    let dir = tempdir()?;
    let mut maps = MapCollection::new();
    maps.add_map(MapType::Reflect);
    {
        let mut bump = maps.add_map(MapType::Bump);
        bump.set_link_type(Some(MapType::Reflect)).unwrap();
        bump.set_value(0.7);
    }
    maps.delete_map(MapType::Reflect);

    for file_name in ["dangling.ron", "dangling.bin"] {
        let path = dir.path().join(file_name);

        // --- 2. ACT ---
        write_collection(&path, &maps)?;
        let (loaded, report) = read_collection(&path, MapGraphConfig::default())?;

        // --- 3. ASSERT ---
        assert!(report.rejected_links.is_empty(), "{file_name}");
        assert_eq!(report.dangling_links, vec![(MapType::Bump, MapType::Reflect)]);
        assert_eq!(loaded.node(MapType::Bump).unwrap().link_type(), Some(MapType::Reflect));
        assert_eq!(
            loaded.resolve(MapType::Bump),
            Some(LinkResolution::Dangling {
                missing: MapType::Reflect
            })
        );
        assert_eq!(loaded.get(MapType::Bump).unwrap().value(), 0.7);
        assert_eq!(loaded.dangling_links(), maps.dangling_links());
    }
    Ok(())
}

#[test]
fn test_zero_scales_survive_save_and_load() -> Result<()> {
    // --- 1. ARRANGE ---
    let dir = tempdir()?;
    let path = dir.path().join("flat.ron");
    let mut maps = MapCollection::new();
    {
        let mut geometry = maps.add_map(MapType::Geometry);
        geometry.set_projection_scale(Vec3::new(0.0, 2.0, 0.0));
        geometry.layers_mut().top_layer_mut().scale = Vec3::new(1.0, 1.0, 0.0);
    }

    // --- 2. ACT ---
    write_collection(&path, &maps)?;
    let (loaded, _) = read_collection(&path, MapGraphConfig::default())?;

    // --- 3. ASSERT ---
    let geometry = loaded.get(MapType::Geometry).unwrap();
    assert_eq!(geometry.projection_scale(), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(geometry.layers(), maps.get(MapType::Geometry).unwrap().layers());
    Ok(())
}

#[test]
fn test_legacy_file_is_repaired_and_reports_cycles() -> Result<()> {
    // --- 1. ARRANGE ---
    // A legacy file: Bump links forward to Pattern, Pattern links back to
    // Bump, Reflect links to an absent Normal, and scales hold zeros.
    let dir = tempdir()?;
    let path = dir.path().join("legacy.ron");
    let map = |map_type: &str, link: &str| {
        format!(
            "(map_type: {map_type}, link: {link}, enabled: true, value: 1.0, \
             projection_offset: (x: 0.0, y: 0.0, z: 0.0), \
             projection_rotation: (x: 0.0, y: 0.0, z: 0.0), \
             projection_scale: (x: 0.0, y: 1.0, z: 1.0), \
             layers: [(layer_type: Image, file_name: \"\", enabled: true, mode: Parametric, \
             units: Relative, rotation: 0.0, scale: (x: 1.0, y: 1.0, z: 0.0), \
             offset: (x: 0.0, y: 0.0, z: 0.0), gamma: 1.0, inverted: false, \
             background_transparent: false)])"
        )
    };
    let text = format!(
        "(version: 0, maps: [{}, {}, {}])",
        map("Bump", "Some(Pattern)"),
        map("Pattern", "Some(Bump)"),
        map("Reflect", "Some(Normal)"),
    );
    fs::write(&path, text)?;

    // --- 2. ACT ---
    let (maps, report) = read_collection(&path, MapGraphConfig::default())?;

    // --- 3. ASSERT ---
    assert_eq!(maps.len(), 3);
    assert_eq!(report.rejected_links.len(), 1);
    assert_eq!(report.rejected_links[0].source, MapType::Pattern);
    assert_eq!(report.dangling_links, vec![(MapType::Reflect, MapType::Normal)]);
    assert_eq!(maps.node(MapType::Pattern).unwrap().link_type(), None);
    assert_eq!(
        maps.resolve(MapType::Bump),
        Some(LinkResolution::Terminal(MapType::Pattern))
    );
    let reflect = maps.get(MapType::Reflect).unwrap();
    assert_eq!(reflect.projection_scale(), Vec3::ONE);
    assert_eq!(reflect.layers().top_layer().scale, Vec3::ONE);
    Ok(())
}

#[test]
fn test_config_file_limits_loaded_chains() -> Result<()> {
    // --- 1. ARRANGE ---
    let dir = tempdir()?;
    let maps_path = dir.path().join("wood.ron");
    let config_path = dir.path().join("sheen.toml");
    write_collection(&maps_path, &wood_collection())?;
    fs::write(&config_path, "max_link_hops = 1\n")?;

    // --- 2. ACT ---
    let config = load_graph_config(&config_path)?;
    let (maps, report) = read_collection(&maps_path, config)?;

    // --- 3. ASSERT ---
    // GlowColor -> Bump -> Pattern needs two hops.
    assert_eq!(maps.config().max_link_hops, 1);
    assert_eq!(report.rejected_links.len(), 1);
    assert_eq!(report.rejected_links[0].source, MapType::GlowColor);
    assert_eq!(
        report.rejected_links[0].error,
        MapLinkError::ChainTooLong {
            source: MapType::GlowColor,
            limit: 1
        }
    );
    assert_eq!(
        maps.resolve(MapType::Bump),
        Some(LinkResolution::Terminal(MapType::Pattern))
    );
    assert_eq!(
        maps.resolve(MapType::GlowColor),
        Some(LinkResolution::Terminal(MapType::GlowColor))
    );
    Ok(())
}
