//! Artifact output on disk.
//!
//! Layout under the output root:
//! - `include/<prefix>/<Class>.h` - interface units
//! - `src/<prefix>/<Class>.cpp` - implementation units
//!
//! Each unit is written to a temporary file in its target directory and
//! renamed into place, so readers never observe a half-written unit.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dispatchgen_core::utils::is_identifier_tail;

use crate::config::Target;
use crate::emit::Artifact;
use crate::plan::{Strategy, TableGeometry};
use crate::{Config, Error, Result};

/// Directory pair generated units go to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    include_dir: PathBuf,
    source_dir: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>, target: &Target) -> Self {
        let root = root.into();
        Self {
            include_dir: root.join("include").join(&target.include_prefix),
            source_dir: root.join("src").join(&target.include_prefix),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn include_dir(&self) -> &Path {
        &self.include_dir
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Default directory scanned when generating every mapping.
    pub fn mapping_dir(&self) -> PathBuf {
        self.root.join("input").join("analyzers")
    }

    pub fn interface_path(&self, class_name: &str) -> PathBuf {
        self.include_dir.join(format!("{class_name}.h"))
    }

    pub fn implementation_path(&self, class_name: &str) -> PathBuf {
        self.source_dir.join(format!("{class_name}.cpp"))
    }
}

/// Result of writing one artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub class_name: String,
    pub strategy: Strategy,
    /// Number of slots the dispatcher declares.
    pub entries: usize,
    pub geometry: Option<TableGeometry>,
    pub interface: PathBuf,
    pub implementation: PathBuf,
}

/// Render `artifact` with the configured indentation and write both units,
/// replacing any previous version.
pub fn write_artifact(
    artifact: &Artifact,
    layout: &OutputLayout,
    config: &Config,
) -> Result<WrittenArtifact> {
    let interface = layout.interface_path(&artifact.class_name);
    let implementation = layout.implementation_path(&artifact.class_name);

    write_atomic(&interface, &artifact.render_interface(config.indent))?;
    write_atomic(
        &implementation,
        &artifact.render_implementation(config.indent),
    )?;

    Ok(WrittenArtifact {
        class_name: artifact.class_name.clone(),
        strategy: artifact.strategy(),
        entries: artifact.plan.dump_order().len(),
        geometry: artifact.plan.geometry(),
        interface,
        implementation,
    })
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(|e| Error::io("create directory", dir, e))?;

    let mut file = tempfile::Builder::new()
        .prefix(".dispatchgen-")
        .tempfile_in(dir)
        .map_err(|e| Error::io("create temporary file in", dir, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::io("write", file.path(), e))?;
    file.persist(path)
        .map_err(|e| Error::io("write", path, e.error))?;
    Ok(())
}

/// Remove every previously generated unit from the layout.
///
/// Only files named `Generated<Switch|If|Array><Name>` with the matching
/// extension are touched. Missing directories count as already clean.
/// Returns the removed paths, interface units first, each group sorted.
pub fn clean(layout: &OutputLayout) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for (dir, extension) in [(layout.include_dir(), "h"), (layout.source_dir(), "cpp")] {
        let mut paths = generated_files(dir, extension)?;
        paths.sort();
        for path in paths {
            fs::remove_file(&path).map_err(|e| Error::io("remove", &path, e))?;
            removed.push(path);
        }
    }
    Ok(removed)
}

fn generated_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io("read directory", dir, e)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("read directory", dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| Error::io("inspect", entry.path(), e))?;
        let path = entry.path();
        if file_type.is_file() && is_generated(&path, extension) {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Whether `path` follows the generated unit naming convention.
pub fn is_generated(path: &Path, extension: &str) -> bool {
    if path.extension().is_none_or(|e| e != extension) {
        return false;
    }
    let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    let Some(rest) = stem.strip_prefix("Generated") else {
        return false;
    };
    Strategy::ALL.iter().any(|strategy| {
        rest.strip_prefix(strategy.label())
            .is_some_and(is_identifier_tail)
    })
}
