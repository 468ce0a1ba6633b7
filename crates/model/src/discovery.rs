//! File discovery over a game module's data directory.
//!
//! Reporting tools use this to decide which files can be loaded; the load and save
//! engine itself only needs a path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::naming;
use crate::schema::SchemaKind;

/// Lookup interface used by reporting tools.
pub trait FileDiscovery {
    fn file_exists(&self, file_name: &str) -> bool;

    /// Returns `true` when a complete model set exists for the file.
    fn is_file_adapted(&self, file_name: &str) -> bool;

    fn convert_to_model_name(&self, file_name: &str) -> String {
        naming::convert_to_model_name(file_name)
    }
}

/// Rough effort estimate for adapting a file, by size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
    Large,
}

impl Complexity {
    pub fn from_size(bytes: u64) -> Self {
        match bytes {
            b if b > 1024 * 1024 => Complexity::Large,
            b if b > 100 * 1024 => Complexity::Complex,
            b if b > 10 * 1024 => Complexity::Medium,
            _ => Complexity::Simple,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnadaptedFile {
    pub file_name: String,
    pub path: PathBuf,
    pub size: u64,
    pub expected_model_name: String,
    pub complexity: Complexity,
}

/// [`FileDiscovery`] backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryDiscovery {
    root: PathBuf,
}

impl DirectoryDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All `.xml` files under the root, recursively, sorted by path.
    pub fn xml_files(&self) -> io::Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {}", self.root.display()),
            ));
        }
        let mut files = Vec::new();
        collect_xml_files(&self.root, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Files under the root that have a complete model set.
    pub fn adapted_files(&self) -> io::Result<Vec<(PathBuf, SchemaKind)>> {
        Ok(self
            .xml_files()?
            .into_iter()
            .filter_map(|path| SchemaKind::from_path(&path).map(|kind| (path, kind)))
            .collect())
    }

    /// Files without a model set, simplest first and then by name.
    pub fn unadapted_files(&self) -> io::Result<Vec<UnadaptedFile>> {
        let mut unadapted = Vec::new();
        for path in self.xml_files()? {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string)
            else {
                continue;
            };
            if self.is_file_adapted(&file_name) {
                continue;
            }
            let size = fs::metadata(&path)?.len();
            unadapted.push(UnadaptedFile {
                expected_model_name: self.convert_to_model_name(&file_name),
                complexity: Complexity::from_size(size),
                file_name,
                path,
                size,
            });
        }
        unadapted.sort_by(|a, b| {
            a.complexity
                .cmp(&b.complexity)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });
        Ok(unadapted)
    }
}

impl FileDiscovery for DirectoryDiscovery {
    fn file_exists(&self, file_name: &str) -> bool {
        self.root.join(file_name).is_file()
    }

    fn is_file_adapted(&self, file_name: &str) -> bool {
        let model_name = self.convert_to_model_name(file_name);
        let adapted = SchemaKind::from_model_name(&model_name).is_some();
        debug!(file = file_name, model = %model_name, adapted, "checked file adaptation");
        adapted
    }
}

fn collect_xml_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_xml_files(&path, files)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(Complexity::from_size(0), Complexity::Simple);
        assert_eq!(Complexity::from_size(10 * 1024), Complexity::Simple);
        assert_eq!(Complexity::from_size(10 * 1024 + 1), Complexity::Medium);
        assert_eq!(Complexity::from_size(200 * 1024), Complexity::Complex);
        assert_eq!(Complexity::from_size(2 * 1024 * 1024), Complexity::Large);
    }

    #[test]
    fn test_directory_discovery() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("skills.xml"), "<ArrayOfSkillData />").unwrap();
        fs::write(dir.path().join("looknfeel.xml"), "<base />").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("attributes.xml"), "<Attributes />").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let discovery = DirectoryDiscovery::new(dir.path());
        assert!(discovery.file_exists("skills.xml"));
        assert!(!discovery.file_exists("missing.xml"));
        assert!(discovery.is_file_adapted("skills.xml"));
        assert!(!discovery.is_file_adapted("looknfeel.xml"));
        assert_eq!(discovery.convert_to_model_name("looknfeel.xml"), "LookAndFeel");

        assert_eq!(discovery.xml_files().unwrap().len(), 3);

        let adapted = discovery.adapted_files().unwrap();
        let kinds: Vec<_> = adapted.iter().map(|(_, kind)| *kind).collect();
        assert!(kinds.contains(&SchemaKind::Skills));
        assert!(kinds.contains(&SchemaKind::Attributes));

        let unadapted = discovery.unadapted_files().unwrap();
        assert_eq!(unadapted.len(), 1);
        assert_eq!(unadapted[0].expected_model_name, "LookAndFeel");
        assert_eq!(unadapted[0].complexity, Complexity::Simple);
    }

    #[test]
    fn test_missing_directory() {
        let discovery = DirectoryDiscovery::new("/nonexistent/modforge/data");
        let err = discovery.xml_files().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
