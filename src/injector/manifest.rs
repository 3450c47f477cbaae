//! Manifest model and loader
//!
//! The manifest is a YAML sequence of job entries. Each entry names a job in
//! the target pipeline document and lists the services whose entrypoints get
//! rewritten, together with the files each service materializes at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::InjectError;

/// A single `source:destination` file mapping.
///
/// The raw string is split at the first colon: the text before it is the
/// source path read on the machine running the injector, the text after it is
/// the absolute path the content is written to at container runtime.
/// Destination paths containing a colon are not representable in this format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReference(String);

impl FileReference {
    /// Creates a reference from a raw `source:destination` string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw reference string as written in the manifest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Source path, the text before the first colon.
    #[must_use]
    pub fn source(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(src, _)| src)
    }

    /// Destination path, the text after the first colon.
    #[must_use]
    pub fn destination(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, dst)| dst)
    }
}

/// A service whose runtime entrypoint is generated and injected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Service {
    /// Alias identifying the service node within its job.
    pub alias: String,

    /// Command executed at the end of the generated script.
    pub exec: String,

    /// Shell binary used to run the generated script.
    pub interpreter: String,

    /// Selects gzip+base64 encoding for every file of this service.
    pub compressed: bool,

    /// `source:destination` mappings, in manifest order.
    pub files: Vec<FileReference>,
}

/// A job entry grouping the services of one pipeline job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobEntry {
    /// Name of the job node in the pipeline document.
    pub job: String,

    /// Services of this job, in manifest order.
    pub services: Vec<Service>,
}

/// The parsed manifest: an ordered list of job entries.
///
/// Loaded once per invocation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    /// Job entries in document order.
    pub jobs: Vec<JobEntry>,
}

impl Manifest {
    /// Loads a manifest from a YAML file.
    ///
    /// Parsing is permissive: missing fields come out zero-valued and unknown
    /// fields are ignored. File references without a colon separator are
    /// rejected here so later stages can split them infallibly.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError::Io`] if the file cannot be read and
    /// [`InjectError::Parse`] if it is not a YAML sequence of job entries.
    pub fn load(path: &Path) -> Result<Self, InjectError> {
        let origin = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|e| InjectError::Io {
            path: origin.clone(),
            reason: e.to_string(),
        })?;
        Self::parse(&raw, &origin)
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, InjectError> {
        let jobs: Vec<JobEntry> = serde_yaml::from_str(raw).map_err(|e| InjectError::Parse {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

        for job in &jobs {
            for service in &job.services {
                for file in &service.files {
                    if !file.as_str().contains(':') {
                        return Err(InjectError::Parse {
                            path: origin.to_string(),
                            reason: format!(
                                "file reference '{}' has no ':' separator",
                                file.as_str()
                            ),
                        });
                    }
                }
            }
        }

        Ok(Self { jobs })
    }

    /// Finds a service by job name and alias.
    ///
    /// Returns `None` when no such job/alias pair exists. Matching is exact
    /// and case-sensitive; on duplicate aliases the first match in manifest
    /// order wins.
    #[must_use]
    pub fn find_service(&self, job: &str, alias: &str) -> Option<&Service> {
        self.jobs
            .iter()
            .filter(|entry| entry.job == job)
            .flat_map(|entry| entry.services.iter())
            .find(|service| service.alias == alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo_manifest() -> Manifest {
        Manifest {
            jobs: vec![JobEntry {
                job: "demo-job".to_string(),
                services: vec![Service {
                    alias: "service-job".to_string(),
                    exec: "/app/run.sh".to_string(),
                    interpreter: "/bin/sh".to_string(),
                    compressed: false,
                    files: vec![FileReference::new("/tmp/test.txt:/dst/ok.txt")],
                }],
            }],
        }
    }

    #[test]
    fn test_parse_manifest() {
        let raw = r#"
- job: demo-job
  services:
    - alias: service-job
      exec: /app/run.sh
      interpreter: /bin/sh
      compressed: false
      files:
        - /tmp/test.txt:/dst/ok.txt
"#;
        let manifest = Manifest::parse(raw, "serviceFile.yml").unwrap();
        assert_eq!(manifest, demo_manifest());
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let raw = r#"
- job: demo-job
  services:
    - alias: service-job
"#;
        let manifest = Manifest::parse(raw, "serviceFile.yml").unwrap();
        let service = &manifest.jobs[0].services[0];
        assert_eq!(service.exec, "");
        assert_eq!(service.interpreter, "");
        assert!(!service.compressed);
        assert!(service.files.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_sequence() {
        let err = Manifest::parse("just a scalar", "serviceFile.yml").unwrap_err();
        assert!(matches!(err, InjectError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_reference_without_colon() {
        let raw = r#"
- job: demo-job
  services:
    - alias: service-job
      files:
        - /tmp/no-destination
"#;
        let err = Manifest::parse(raw, "serviceFile.yml").unwrap_err();
        match err {
            InjectError::Parse { reason, .. } => assert!(reason.contains("/tmp/no-destination")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Manifest::load(Path::new("/nonexistent/serviceFile.yml")).unwrap_err();
        assert!(matches!(err, InjectError::Io { .. }));
    }

    #[test]
    fn test_file_reference_split_at_first_colon() {
        let reference = FileReference::new("/tmp/test.txt:/dst/ok.txt");
        assert_eq!(reference.source(), "/tmp/test.txt");
        assert_eq!(reference.destination(), "/dst/ok.txt");

        let nested = FileReference::new("a:b:c");
        assert_eq!(nested.source(), "a");
        assert_eq!(nested.destination(), "b:c");
    }

    #[test]
    fn test_find_service() {
        let manifest = demo_manifest();
        let service = manifest.find_service("demo-job", "service-job");
        assert!(service.is_some());
    }

    #[test]
    fn test_find_service_not_found() {
        let manifest = demo_manifest();
        assert!(manifest.find_service("demo-job", "missing").is_none());
        assert!(manifest.find_service("missing", "service-job").is_none());
    }

    #[test]
    fn test_find_service_duplicate_alias_first_wins() {
        let mut manifest = demo_manifest();
        let mut duplicate = manifest.jobs[0].services[0].clone();
        duplicate.exec = "/app/other.sh".to_string();
        manifest.jobs[0].services.push(duplicate);

        let service = manifest.find_service("demo-job", "service-job").unwrap();
        assert_eq!(service.exec, "/app/run.sh");
    }

    #[test]
    fn test_find_service_searches_duplicate_job_entries() {
        let mut manifest = demo_manifest();
        manifest.jobs.push(JobEntry {
            job: "demo-job".to_string(),
            services: vec![Service {
                alias: "second".to_string(),
                ..Service::default()
            }],
        });

        assert!(manifest.find_service("demo-job", "second").is_some());
    }
}
