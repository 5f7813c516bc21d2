//! Generation orchestrator: path checks, then parse, emit, write.
//!
//! Nothing is written until every requested artifact has been emitted, so a
//! bad mapping (or a bad file in a directory run) leaves the output tree as
//! it was.

use std::collections::HashMap;
use std::collections::hash_map;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::emit::{Artifact, emit};
use crate::mapping::Mapping;
use crate::plan::Strategy;
use crate::writer::{self, OutputLayout, WrittenArtifact, write_artifact};
use crate::{Config, Error, PathProblem, Result};

/// Drives generation for one output root.
#[derive(Clone, Debug)]
pub struct Generator {
    config: Config,
    layout: OutputLayout,
}

impl Generator {
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        let layout = OutputLayout::new(root, &config.target);
        Self { config, layout }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Check and load one mapping file.
    pub fn load(&self, path: &Path) -> Result<Mapping> {
        check_file(path)?;
        Mapping::load(path, &self.config)
    }

    /// Emit one artifact without writing it.
    pub fn render(&self, path: &Path, strategy: Strategy) -> Result<Artifact> {
        let mapping = self.load(path)?;
        emit(&mapping, strategy, &self.config)
    }

    /// Generate `strategies` for the mapping at `path`.
    pub fn generate(&self, path: &Path, strategies: &[Strategy]) -> Result<Vec<WrittenArtifact>> {
        let mapping = self.load(path)?;
        let artifacts = strategies
            .iter()
            .map(|&strategy| emit(&mapping, strategy, &self.config))
            .collect::<Result<Vec<_>>>()?;
        self.write_all(&artifacts)
    }

    /// Generate every strategy for every mapping file in `dir`.
    ///
    /// Hidden files are ignored; any other entry must be a regular file.
    /// Two files that would produce the same class name (`zeek.a` and
    /// `zeek.b`, or `tun` and `Tun`) fail the run.
    pub fn generate_dir(&self, dir: &Path) -> Result<Vec<WrittenArtifact>> {
        let paths = mapping_files(dir)?;

        let mut artifacts = Vec::with_capacity(paths.len() * Strategy::ALL.len());
        let mut owners: HashMap<String, &Path> = HashMap::with_capacity(artifacts.capacity());
        for path in &paths {
            let mapping = Mapping::load(path, &self.config)?;
            for strategy in Strategy::ALL {
                let artifact = emit(&mapping, strategy, &self.config)?;
                match owners.entry(artifact.class_name.clone()) {
                    hash_map::Entry::Vacant(e) => {
                        e.insert(path);
                    }
                    hash_map::Entry::Occupied(e) => {
                        return Err(Error::ClassNameCollision {
                            class_name: artifact.class_name,
                            first: e.get().to_path_buf(),
                            second: path.clone(),
                        });
                    }
                }
                artifacts.push(artifact);
            }
        }
        self.write_all(&artifacts)
    }

    /// Remove previously generated units.
    pub fn clean(&self) -> Result<Vec<PathBuf>> {
        writer::clean(&self.layout)
    }

    fn write_all(&self, artifacts: &[Artifact]) -> Result<Vec<WrittenArtifact>> {
        artifacts
            .iter()
            .map(|artifact| write_artifact(artifact, &self.layout, &self.config))
            .collect()
    }
}

/// Fail unless `path` exists and is a regular file (symlinks followed).
pub fn check_file(path: &Path) -> Result<()> {
    if !inspect(path)?.is_file() {
        return Err(path_error(path, PathProblem::NotAFile));
    }
    Ok(())
}

/// Fail unless `path` exists and is a directory.
pub fn check_dir(path: &Path) -> Result<()> {
    if !inspect(path)?.is_dir() {
        return Err(path_error(path, PathProblem::NotADirectory));
    }
    Ok(())
}

/// Mapping files in `dir`, sorted by path.
///
/// Every path is checked before any of them is parsed.
pub fn mapping_files(dir: &Path) -> Result<Vec<PathBuf>> {
    check_dir(dir)?;
    let entries = fs::read_dir(dir).map_err(|e| Error::io("read directory", dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("read directory", dir, e))?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        check_file(&path)?;
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

fn inspect(path: &Path) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => path_error(path, PathProblem::Missing),
        _ => Error::io("inspect", path, e),
    })
}

fn path_error(path: &Path, problem: PathProblem) -> Error {
    Error::Path {
        path: path.to_path_buf(),
        problem,
    }
}
