use std::fs;
use std::path::{Path, PathBuf};

use indoc::indoc;
use tempfile::TempDir;

use crate::generate::{check_file, mapping_files};
use crate::test_utils::MARKER;
use crate::{Config, Error, FormatError, Generator, PathProblem, Strategy};

const ZEEK: &str = indoc! {"
    # ANALYZERS
    86dd IPv6Analyzer
    1 ETHAnalyzer
    6 TCPAnalyzer
    800 IPv4Analyzer
    11 UDPAnalyzer
"};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn has_output(generator: &Generator) -> bool {
    generator.layout().include_dir().exists() || generator.layout().source_dir().exists()
}

#[test]
fn generate_one_strategy() {
    let dir = TempDir::new().unwrap();
    let mapping = write(dir.path(), "zeek", ZEEK);
    let generator = Generator::new(Config::default(), dir.path());

    let written = generator.generate(&mapping, &[Strategy::Switch]).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].class_name, "GeneratedSwitchZeek");
    assert_eq!(written[0].entries, 5);
    assert!(written[0].geometry.is_none());

    let implementation = fs::read_to_string(&written[0].implementation).unwrap();
    assert!(implementation.contains("\t\tcase 0x86dd:\n\t\t\treturn &ipv6analyzer86dd;\n"));
}

#[test]
fn generate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mapping = write(dir.path(), "zeek", ZEEK);
    let generator = Generator::new(Config::default(), dir.path());

    let first = generator.generate(&mapping, &Strategy::ALL).unwrap();
    let contents: Vec<Vec<u8>> = first
        .iter()
        .flat_map(|w| [fs::read(&w.interface).unwrap(), fs::read(&w.implementation).unwrap()])
        .collect();

    let second = generator.generate(&mapping, &Strategy::ALL).unwrap();
    assert_eq!(first, second);
    let again: Vec<Vec<u8>> = second
        .iter()
        .flat_map(|w| [fs::read(&w.interface).unwrap(), fs::read(&w.implementation).unwrap()])
        .collect();
    assert_eq!(contents, again);
}

#[test]
fn malformed_mapping_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mapping = write(dir.path(), "bad", "# ANALYZERS\n1 ETHAnalyzer\nzz FooAnalyzer\n");
    let generator = Generator::new(Config::default(), dir.path());

    let err = generator.generate(&mapping, &Strategy::ALL).unwrap_err();
    assert!(matches!(
        err,
        Error::Format {
            line: 3,
            kind: FormatError::InvalidHex { .. },
            ..
        }
    ));
    assert!(!has_output(&generator));
}

#[test]
fn marker_is_enforced_when_configured() {
    let dir = TempDir::new().unwrap();
    let good = write(dir.path(), "zeek", ZEEK);
    let bad = write(dir.path(), "packets", "# PACKETS\n1 ETHAnalyzer\n");
    let generator = Generator::new(Config::new().marker(Some(MARKER.to_string())), dir.path());

    let err = generator.generate(&bad, &Strategy::ALL).unwrap_err();
    assert!(matches!(
        err,
        Error::Format {
            line: 1,
            kind: FormatError::MissingMarker { .. },
            ..
        }
    ));
    assert!(!has_output(&generator));

    assert_eq!(generator.generate(&good, &Strategy::ALL).unwrap().len(), 3);
}

#[test]
fn empty_mapping_fails_array_before_any_write() {
    let dir = TempDir::new().unwrap();
    let mapping = write(dir.path(), "empty", "# ANALYZERS\n");
    let generator = Generator::new(Config::default(), dir.path());

    let written = generator
        .generate(&mapping, &[Strategy::Switch, Strategy::Chain])
        .unwrap();
    assert_eq!(written.len(), 2);
    generator.clean().unwrap();

    let err = generator.generate(&mapping, &Strategy::ALL).unwrap_err();
    assert!(matches!(err, Error::EmptyMapping { .. }));
    assert!(
        fs::read_dir(generator.layout().include_dir())
            .unwrap()
            .next()
            .is_none()
    );
}

#[test]
fn missing_and_non_file_paths() {
    let dir = TempDir::new().unwrap();
    let generator = Generator::new(Config::default(), dir.path());

    let err = generator
        .generate(&dir.path().join("nope"), &[Strategy::Switch])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Path {
            problem: PathProblem::Missing,
            ..
        }
    ));
    assert!(err.to_string().ends_with("nope' does not exist"));

    let err = check_file(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Path {
            problem: PathProblem::NotAFile,
            ..
        }
    ));
    assert!(!has_output(&generator));
}

#[test]
fn generate_dir_covers_every_mapping_and_strategy() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input/analyzers");
    write(&input, "zeek", ZEEK);
    write(&input, "tun", "# ANALYZERS\n4 Gre\n1 Eth\n");
    write(&input, ".hidden", "not a mapping");
    let generator = Generator::new(Config::default(), dir.path());

    let written = generator
        .generate_dir(&generator.layout().mapping_dir())
        .unwrap();
    let names: Vec<&str> = written.iter().map(|w| w.class_name.as_str()).collect();
    assert_eq!(
        names,
        [
            "GeneratedIfTun",
            "GeneratedSwitchTun",
            "GeneratedArrayTun",
            "GeneratedIfZeek",
            "GeneratedSwitchZeek",
            "GeneratedArrayZeek",
        ]
    );
    assert!(written.iter().all(|w| w.interface.is_file() && w.implementation.is_file()));
}

#[test]
fn generate_dir_checks_every_path_first() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("mappings");
    write(&input, "zeek", ZEEK);
    fs::create_dir_all(input.join("nested")).unwrap();
    let generator = Generator::new(Config::default(), dir.path());

    let err = generator.generate_dir(&input).unwrap_err();
    assert!(matches!(
        err,
        Error::Path {
            problem: PathProblem::NotAFile,
            ..
        }
    ));
    assert!(!has_output(&generator));

    let err = generator.generate_dir(&dir.path().join("zeek")).unwrap_err();
    assert!(matches!(
        err,
        Error::Path {
            problem: PathProblem::Missing,
            ..
        }
    ));

    let err = generator.generate_dir(&input.join("zeek")).unwrap_err();
    assert!(matches!(
        err,
        Error::Path {
            problem: PathProblem::NotADirectory,
            ..
        }
    ));
}

#[test]
fn generate_dir_is_all_or_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("mappings");
    write(&input, "a_good", ZEEK);
    write(&input, "b_bad", "# ANALYZERS\n1 A\n1 B\n");
    let generator = Generator::new(Config::default(), dir.path());

    let err = generator.generate_dir(&input).unwrap_err();
    assert!(matches!(err, Error::DuplicateIdentifier { .. }));
    assert!(!has_output(&generator));
}

#[test]
fn mapping_files_are_sorted() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "b", "");
    write(dir.path(), "a", "");
    write(dir.path(), ".git", "");
    let files = mapping_files(dir.path()).unwrap();
    let names: Vec<_> = files.iter().map(|p| p.file_name().unwrap()).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn render_does_not_write() {
    let dir = TempDir::new().unwrap();
    let mapping = write(dir.path(), "zeek.txt", ZEEK);
    let generator = Generator::new(Config::default(), dir.path());

    let artifact = generator.render(&mapping, Strategy::Array).unwrap();
    assert_eq!(artifact.class_name, "GeneratedArrayZeek");
    assert!(!has_output(&generator));
}

#[test]
fn clean_after_generate() {
    let dir = TempDir::new().unwrap();
    let mapping = write(dir.path(), "zeek", ZEEK);
    let generator = Generator::new(Config::default(), dir.path());

    generator.generate(&mapping, &Strategy::ALL).unwrap();
    assert_eq!(generator.clean().unwrap().len(), 6);
    assert!(generator.clean().unwrap().is_empty());
}

#[test]
fn generate_dir_rejects_shared_class_names() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("mappings");
    let first = write(&input, "zeek.a", "# ANALYZERS\n1 First\n");
    let second = write(&input, "zeek.b", "# ANALYZERS\n2 Second\n");
    let generator = Generator::new(Config::default(), dir.path());

    let err = generator.generate_dir(&input).unwrap_err();
    assert!(matches!(
        err,
        Error::ClassNameCollision { ref class_name, first: ref a, second: ref b }
            if class_name == "GeneratedIfZeek" && *a == first && *b == second
    ));
    assert!(err.to_string().ends_with("zeek.b' both generate GeneratedIfZeek"));
    assert!(!has_output(&generator));
}

#[test]
fn generate_dir_rejects_names_differing_in_first_letter_case() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("mappings");
    write(&input, "Tun", "# ANALYZERS\n4 Gre\n");
    write(&input, "tun", "# ANALYZERS\n1 Eth\n");
    // case-insensitive filesystems keep only one of the two
    if mapping_files(&input).unwrap().len() < 2 {
        return;
    }
    let generator = Generator::new(Config::default(), dir.path());

    let err = generator.generate_dir(&input).unwrap_err();
    assert!(matches!(err, Error::ClassNameCollision { .. }));
    assert!(!has_output(&generator));
}
