//! Template contexts for each output format.

use minijinja::{Value, context};

use super::build_info::BuildInfo;
use crate::document::ResumeDocument;
use crate::error::{Result, VitaError};
use crate::profile::FilteredDocument;

/// Every section, unfiltered. Used for Markdown and HTML.
pub fn resume_context(document: &ResumeDocument) -> Value {
    context! {
        personal => &document.personal,
        title => document.title.as_deref().unwrap_or(""),
        experiences => &document.experiences,
        projects => &document.projects,
        education => &document.education,
        skills => &document.skills,
        publications => &document.publications,
    }
}

/// Filtered experiences plus the source's other sections. Used for Typst.
pub fn typeset_context(filtered: &FilteredDocument<'_>) -> Value {
    let source = filtered.source();
    context! {
        profile => filtered.profile_name(),
        personal => &source.personal,
        title => source.title.as_deref().unwrap_or(""),
        experiences => filtered.experiences(),
        projects => &source.projects,
        education => &source.education,
        skills => &source.skills,
        publications => &source.publications,
    }
}

/// Name, headline, contact details and build metadata for the landing page.
pub fn landing_context(document: &ResumeDocument, build_info: &BuildInfo) -> Result<Value> {
    let name = document
        .name()
        .ok_or_else(|| VitaError::MissingField("personal.name".to_string()))?;

    Ok(context! {
        name => name,
        title => document.title.as_deref().unwrap_or(""),
        contact => &document.personal,
        build_info => build_info,
    })
}
