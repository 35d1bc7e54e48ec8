//! # File I/O Module
//!
//! Project file operations:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//! - **Beam input files**: Read a single `BeamInput` from JSON
//!
//! ## File Format
//!
//! Projects are saved as `.bcp` files containing pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_project, save_project};
//! use beam_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Engineer", "25-001", "Client");
//! let path = Path::new("myproject.bcp");
//!
//! save_project(&project, path)?;
//! let loaded = load_project(path)?;
//! assert_eq!(loaded.meta.job_id, "25-001");
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::calculations::BeamInput;
use crate::errors::{CalcError, CalcResult};
use crate::project::{Project, SCHEMA_VERSION};

/// File extension for project files
pub const PROJECT_EXTENSION: &str = "bcp";

/// Save a project to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize project to JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp to the target (atomic on most filesystems)
///
/// An interrupted save leaves the previous file untouched.
///
/// # Example
///
/// ```rust,no_run
/// use beam_core::file_io::save_project;
/// use beam_core::project::Project;
/// use std::path::Path;
///
/// let project = Project::new("Engineer", "25-001", "Client");
/// save_project(&project, Path::new("myproject.bcp"))?;
/// # Ok::<(), beam_core::errors::CalcError>(())
/// ```
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(CalcError::serialization)?;

    let tmp_path = path.with_extension(format!("{}.tmp", PROJECT_EXTENSION));

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(
        "saved project {} ({} beams) to {}",
        project.meta.job_id,
        project.item_count(),
        path.display()
    );
    Ok(())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project: Project = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&project.meta.version)?;

    info!(
        "loaded project {} ({} beams) from {}",
        project.meta.job_id,
        project.item_count(),
        path.display()
    );
    Ok(project)
}

/// Read a single beam definition from a JSON file.
///
/// The beam is not validated here; call [`BeamInput::validate`].
pub fn load_beam_input(path: &Path) -> CalcResult<BeamInput> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let input: BeamInput = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid beam JSON in {}: {}", path.display(), e))
    })?;

    debug!("read beam '{}' from {}", input.label, path.display());
    Ok(input)
}

/// Write text output (reports, CSV curves) to a file.
pub fn write_text(path: &Path, contents: &str) -> CalcResult<()> {
    fs::write(path, contents)
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match. While the schema is 0.x, files from a newer
/// minor version are rejected as well.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let (Some(file_major), Some(current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    if file_major != current_major {
        return Err(mismatch());
    }

    if *current_major == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::beam::BeamConfig;
    use crate::loads::Load;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_path(name: &str, extension: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}_{}.{}", name, std::process::id(), extension))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip", PROJECT_EXTENSION);

        let mut project = Project::new("Test Engineer", "TEST-001", "Test Client");
        project.add_item(BeamInput {
            label: "B-1".to_string(),
            config: BeamConfig::simply_supported(3000.0),
            loads: vec![Load::uniform(1500.0, 0.0, 3000.0)],
            cross_section: Default::default(),
            material: Default::default(),
        });
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.meta.job_id, "TEST-001");
        assert_eq!(loaded.items, project.items);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic", PROJECT_EXTENSION);
        let tmp_path = path.with_extension("bcp.tmp");

        let project = Project::new("Test", "TEST", "Client");
        save_project(&project, &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_path("newer", PROJECT_EXTENSION);

        let mut project = Project::new("Test", "TEST", "Client");
        project.meta.version = "0.9.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_project(&temp_path("does_not_exist", PROJECT_EXTENSION)).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_beam_input() {
        let path = temp_path("beam", "json");
        write_text(
            &path,
            r#"{
                "config": { "length_mm": 2000.0, "beam_type": { "type": "Cantilever" } },
                "loads": [ { "kind": "Point", "magnitude_n": 500.0, "position_mm": 2000.0 } ],
                "cross_section": { "shape": "Circular", "diameter_mm": 60.0 },
                "material": { "type": "Preset", "grade": "6061-T6" }
            }"#,
        )
        .unwrap();

        let input = load_beam_input(&path).unwrap();
        assert_eq!(input.label, "");
        assert!(input.validate().is_ok());

        write_text(&path, "{ not json").unwrap();
        assert_eq!(load_beam_input(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
