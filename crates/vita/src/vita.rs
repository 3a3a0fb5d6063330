//! Main Vita struct and public API.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::document::ResumeDocument;
use crate::error::{Result, ValidationError, VitaError};
use crate::input::{Loader, SourceMetadata};
use crate::profile::{FilteredDocument, ProfileFilter};
use crate::render::{
    BuildEnv, BuildInfo, OutputFormat, TemplateSet, landing_context, manifest_version,
    resume_context, typeset_context,
};
use crate::validation::ValidationEngine;

/// Default location of the résumé data file.
pub const DEFAULT_DATA_FILE: &str = "data/data.yaml";

/// Default location of the project manifest used for the version tag.
pub const DEFAULT_MANIFEST_FILE: &str = "Cargo.toml";

/// Configuration for Vita.
#[derive(Debug, Clone)]
pub struct VitaConfig {
    /// Résumé YAML file.
    pub data_file: PathBuf,
    /// Directory whose templates override the built-ins.
    pub templates_dir: Option<PathBuf>,
    /// TOML manifest holding the version for the landing page.
    pub manifest_file: PathBuf,
    /// `owner/name` repository; overrides `build_env.repository`.
    pub repository: Option<String>,
    /// Build environment values for the landing page.
    pub build_env: BuildEnv,
}

impl Default for VitaConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            templates_dir: None,
            manifest_file: PathBuf::from(DEFAULT_MANIFEST_FILE),
            repository: None,
            build_env: BuildEnv::default(),
        }
    }
}

impl VitaConfig {
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    pub fn with_manifest_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_file = path.into();
        self
    }

    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    pub fn with_build_env(mut self, env: BuildEnv) -> Self {
        self.build_env = env;
        self
    }
}

/// A parsed document together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: ResumeDocument,
    pub source: SourceMetadata,
}

/// Summary of a completed render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReport {
    /// Where the output was written.
    pub output: PathBuf,
    pub format: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Bytes written.
    pub bytes: usize,
    /// Bullets in the rendered output (after filtering, if any).
    pub bullets: usize,
    pub source: SourceMetadata,
}

/// The main Vita engine.
pub struct Vita {
    config: VitaConfig,
    loader: Loader,
    validation: ValidationEngine,
    filter: ProfileFilter,
    templates: TemplateSet,
}

impl Vita {
    /// Create a new Vita instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(VitaConfig::default())
    }

    /// Create a Vita instance with custom configuration.
    pub fn with_config(config: VitaConfig) -> Self {
        let templates = match &config.templates_dir {
            Some(dir) => TemplateSet::with_dir(dir),
            None => TemplateSet::builtin(),
        };

        Self {
            config,
            loader: Loader::new(),
            validation: ValidationEngine::new(),
            filter: ProfileFilter::new(),
            templates,
        }
    }

    /// Parse the configured data file without validating it.
    pub fn load(&self) -> Result<LoadedDocument> {
        let (document, source) = self.loader.load_file(&self.config.data_file)?;
        Ok(LoadedDocument { document, source })
    }

    /// Validate a document against its own `config` section.
    pub fn validate(&self, document: &ResumeDocument) -> Result<()> {
        self.validation.validate(document)?;
        Ok(())
    }

    /// Load and validate the configured data file.
    pub fn load_validated(&self) -> Result<LoadedDocument> {
        let loaded = self.load()?;
        self.validate(&loaded.document)?;
        Ok(loaded)
    }

    /// Apply a named profile.
    pub fn filter<'a>(
        &self,
        document: &'a ResumeDocument,
        profile: &str,
    ) -> std::result::Result<FilteredDocument<'a>, ValidationError> {
        self.filter.apply(document, profile)
    }

    /// Resolve landing-page build metadata from the manifest and environment.
    pub fn build_info(&self) -> Result<BuildInfo> {
        let version = manifest_version(&self.config.manifest_file)?;
        let mut env = self.config.build_env.clone();
        if let Some(repository) = &self.config.repository {
            env.repository = Some(repository.clone());
        }
        Ok(BuildInfo::resolve(version.as_deref(), &env, Utc::now()))
    }

    /// Render a validated document.
    ///
    /// `profile` is required for formats that filter experiences and ignored
    /// by the others.
    pub fn render(
        &self,
        document: &ResumeDocument,
        format: OutputFormat,
        profile: Option<&str>,
    ) -> Result<String> {
        self.render_counted(document, format, profile)
            .map(|(output, _)| output)
    }

    /// Render and also report how many bullets made it into the output.
    fn render_counted(
        &self,
        document: &ResumeDocument,
        format: OutputFormat,
        profile: Option<&str>,
    ) -> Result<(String, usize)> {
        let template = format.template_name();

        match format {
            OutputFormat::Markdown | OutputFormat::Html => {
                let output = self.templates.render(template, resume_context(document))?;
                Ok((output, document.bullet_count()))
            }
            OutputFormat::Typst => {
                let profile = profile.ok_or_else(|| VitaError::ProfileRequired {
                    format: format.to_string(),
                })?;
                let filtered = self.filter(document, profile)?;
                debug!(
                    profile,
                    kept = filtered.kept_bullets(),
                    dropped = filtered.dropped_bullets(),
                    "applied profile"
                );
                let output = self.templates.render(template, typeset_context(&filtered))?;
                Ok((output, filtered.kept_bullets()))
            }
            OutputFormat::Index => {
                let build_info = self.build_info()?;
                let output = self
                    .templates
                    .render(template, landing_context(document, &build_info)?)?;
                Ok((output, 0))
            }
        }
    }

    /// Load, validate, render and write one output file.
    ///
    /// Parent directories of `output` are created as needed. Nothing is
    /// written unless every earlier step succeeds.
    pub fn render_to_file(
        &self,
        format: OutputFormat,
        profile: Option<&str>,
        output: impl AsRef<Path>,
    ) -> Result<RenderReport> {
        let output = output.as_ref();

        let LoadedDocument { document, source } = self.load_validated()?;
        let (rendered, bullets) = self.render_counted(&document, format, profile)?;

        write_output(output, &rendered)?;
        info!(output = %output.display(), %format, bytes = rendered.len(), "wrote output");

        Ok(RenderReport {
            output: output.to_path_buf(),
            format,
            profile: if format.requires_profile() {
                profile.map(String::from)
            } else {
                None
            },
            bytes: rendered.len(),
            bullets,
            source,
        })
    }
}

impl Default for Vita {
    fn default() -> Self {
        Self::new()
    }
}

/// Write through a sibling temp file renamed into place, so `path` is
/// either untouched or complete.
fn write_output(path: &Path, contents: &str) -> Result<()> {
    let io_error = |path: &Path, source| VitaError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let mut file = NamedTempFile::new_in(parent).map_err(|e| io_error(parent, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| io_error(path, e))?;

    // Temp files are created owner-only; keep the existing file's mode or
    // use the usual one for a new file.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = fs::metadata(path)
            .map(|m| m.permissions())
            .unwrap_or_else(|_| fs::Permissions::from_mode(0o644));
        file.as_file()
            .set_permissions(permissions)
            .map_err(|e| io_error(path, e))?;
    }

    file.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}
