//! Template environment with built-in fallbacks.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, Error, ErrorKind as TemplateErrorKind, Value};
use tracing::debug;

use crate::error::Result;

/// Templates compiled into the library, used when no directory overrides them.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("resume.md.j2", include_str!("../../templates/resume.md.j2")),
    ("resume.html.j2", include_str!("../../templates/resume.html.j2")),
    ("resume.typ.j2", include_str!("../../templates/resume.typ.j2")),
    ("index.html.j2", include_str!("../../templates/index.html.j2")),
];

/// Look up a built-in template by name.
pub fn builtin_template(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, source)| *source)
}

/// Escaping policy by template name.
///
/// A trailing `.j2` is ignored, so `resume.html.j2` escapes as HTML while
/// `resume.typ.j2` and `resume.md.j2` are emitted verbatim.
pub fn auto_escape_for(name: &str) -> AutoEscape {
    let name = name.strip_suffix(".j2").unwrap_or(name);
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html" | "htm" | "xml") => AutoEscape::Html,
        _ => AutoEscape::None,
    }
}

/// A template environment.
///
/// Templates are read from `dir` when present there, otherwise from the
/// built-in set.
pub struct TemplateSet {
    env: Environment<'static>,
}

impl TemplateSet {
    /// Only the built-in templates.
    pub fn builtin() -> Self {
        Self::build(None)
    }

    /// Templates from `dir`, falling back to the built-ins.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self::build(Some(dir.into()))
    }

    fn build(dir: Option<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(auto_escape_for);

        env.set_loader(move |name| load_template(dir.as_deref(), name));

        Self { env }
    }

    /// Render the named template with the given context.
    pub fn render(&self, name: &str, context: Value) -> Result<String> {
        let template = self.env.get_template(name)?;
        let output = template.render(context)?;
        debug!(template = name, bytes = output.len(), "rendered template");
        Ok(output)
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn load_template(dir: Option<&Path>, name: &str) -> std::result::Result<Option<String>, Error> {
    if let Some(dir) = dir {
        // Template names come from OutputFormat or from `include`/`extends`
        // inside templates; refuse anything that escapes the directory.
        if name.split(['/', '\\']).any(|segment| segment == "..") {
            return Ok(None);
        }

        let path = dir.join(name);
        match fs::read_to_string(&path) {
            Ok(source) => {
                debug!(path = %path.display(), "using template from directory");
                return Ok(Some(source));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(Error::new(
                    TemplateErrorKind::InvalidOperation,
                    format!("could not read template '{}'", path.display()),
                )
                .with_source(e));
            }
        }
    }

    Ok(builtin_template(name).map(String::from))
}
