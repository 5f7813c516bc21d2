use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::test_utils::abc;
use crate::writer::{OutputLayout, clean, is_generated, write_artifact};
use crate::{Config, Strategy, Target, emit};

fn layout(dir: &TempDir) -> OutputLayout {
    OutputLayout::new(dir.path(), &Target::default())
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn layout_paths() {
    let layout = OutputLayout::new("out", &Target::default());
    assert_eq!(
        layout.interface_path("GeneratedIfZeek"),
        Path::new("out/include/dispatchers/metaprogramming/GeneratedIfZeek.h")
    );
    assert_eq!(
        layout.implementation_path("GeneratedIfZeek"),
        Path::new("out/src/dispatchers/metaprogramming/GeneratedIfZeek.cpp")
    );
    assert_eq!(layout.mapping_dir(), Path::new("out/input/analyzers"));
    assert_eq!(layout.root(), Path::new("out"));
}

#[test]
fn writes_both_units_creating_directories() {
    let dir = TempDir::new().unwrap();
    let layout = layout(&dir);
    let config = Config::default();
    let artifact = emit(&abc(), Strategy::Array, &config).unwrap();

    let written = write_artifact(&artifact, &layout, &config).unwrap();
    assert_eq!(written.class_name, "GeneratedArrayAbc");
    assert_eq!(written.strategy, Strategy::Array);
    assert_eq!(written.entries, 3);
    assert_eq!(written.geometry.map(|g| g.len), Some(17));

    let interface = fs::read_to_string(&written.interface).unwrap();
    let implementation = fs::read_to_string(&written.implementation).unwrap();
    assert_eq!(interface, artifact.render_interface(config.get_indent()));
    assert_eq!(
        implementation,
        artifact.render_implementation(config.get_indent())
    );

    // no temporary files left behind
    assert_eq!(file_names(layout.include_dir()), ["GeneratedArrayAbc.h"]);
    assert_eq!(file_names(layout.source_dir()), ["GeneratedArrayAbc.cpp"]);
}

#[test]
fn rewriting_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let layout = layout(&dir);
    let config = Config::default();

    let first = write_artifact(&emit(&abc(), Strategy::Switch, &config).unwrap(), &layout, &config)
        .unwrap();
    let before = fs::read(&first.implementation).unwrap();

    let second = write_artifact(&emit(&abc(), Strategy::Switch, &config).unwrap(), &layout, &config)
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second.implementation).unwrap(), before);
}

#[test]
fn overwrites_existing_units() {
    let dir = TempDir::new().unwrap();
    let layout = layout(&dir);
    let config = Config::default();
    let artifact = emit(&abc(), Strategy::Chain, &config).unwrap();

    let path = layout.interface_path(&artifact.class_name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "stale").unwrap();

    write_artifact(&artifact, &layout, &config).unwrap();
    assert!(fs::read_to_string(&path).unwrap().starts_with("#pragma once\n"));
}

#[test]
fn clean_removes_only_generated_units() {
    let dir = TempDir::new().unwrap();
    let layout = layout(&dir);
    let config = Config::default();
    for strategy in Strategy::ALL {
        let artifact = emit(&abc(), strategy, &config).unwrap();
        write_artifact(&artifact, &layout, &config).unwrap();
    }
    fs::write(layout.include_dir().join("IMeta.h"), "").unwrap();
    fs::write(layout.include_dir().join("GeneratedNotes.txt"), "").unwrap();
    fs::write(layout.source_dir().join("GeneratedIfAbc.h"), "").unwrap();

    let removed = clean(&layout).unwrap();
    let removed: Vec<String> = removed
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        removed,
        [
            "GeneratedArrayAbc.h",
            "GeneratedIfAbc.h",
            "GeneratedSwitchAbc.h",
            "GeneratedArrayAbc.cpp",
            "GeneratedIfAbc.cpp",
            "GeneratedSwitchAbc.cpp",
        ]
    );
    assert_eq!(file_names(layout.include_dir()), ["GeneratedNotes.txt", "IMeta.h"]);
    assert_eq!(file_names(layout.source_dir()), ["GeneratedIfAbc.h"]);

    assert!(clean(&layout).unwrap().is_empty());
}

#[test]
fn clean_without_output_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    assert!(clean(&layout(&dir)).unwrap().is_empty());
}

#[test]
fn generated_name_convention() {
    assert!(is_generated(Path::new("GeneratedSwitchZeek.h"), "h"));
    assert!(is_generated(Path::new("a/b/GeneratedIfFragmented_100.cpp"), "cpp"));
    assert!(is_generated(Path::new("GeneratedArray7.h"), "h"));
    assert!(!is_generated(Path::new("GeneratedSwitchZeek.cpp"), "h"));
    assert!(!is_generated(Path::new("GeneratedSwitch.h"), "h"));
    assert!(!is_generated(Path::new("GeneratedLoopZeek.h"), "h"));
    assert!(!is_generated(Path::new("IMeta.h"), "h"));
    assert!(!is_generated(Path::new("GeneratedIfZeek"), "h"));
}
