//! Note templates: `<base>/templates/<name>.md` rendered with minijinja.

use chrono::NaiveDate;
use minijinja::Environment;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const TEMPLATE_EXTENSION: &str = "md";

/// Errors when loading or rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{name}' not found at {path}")]
    NotFound { name: String, path: PathBuf },

    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}

/// Variables available inside a template.
///
/// Rendered as `{{ date }}`, `{{ title }}` and `{{ context }}`; an absent
/// context renders as an empty string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateVars {
    pub date: String,
    pub title: String,
    pub context: String,
}

impl TemplateVars {
    pub fn new(date: NaiveDate, title: &str, context: Option<&str>) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            title: title.to_string(),
            context: context.unwrap_or_default().to_string(),
        }
    }
}

/// Renders template text with the given variables.
///
/// Unknown variables render as empty strings.
pub fn expand(text: &str, vars: &TemplateVars) -> Result<String, TemplateError> {
    let mut env = Environment::new();
    env.add_template("note", text)?;
    let tmpl = env.get_template("note")?;
    Ok(tmpl.render(vars)?)
}

/// Templates stored as markdown files in one directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path of the template called `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{TEMPLATE_EXTENSION}"))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Returns the names of all templates, sorted. A missing directory has
    /// no templates.
    pub fn list(&self) -> Result<Vec<String>, TemplateError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(TemplateError::Read {
                    path: self.dir.clone(),
                    source: e,
                });
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == TEMPLATE_EXTENSION))
            .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Reads the template called `name` and renders it.
    pub fn load(&self, name: &str, vars: &TemplateVars) -> Result<String, TemplateError> {
        let path = self.path(name);
        let text = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TemplateError::NotFound {
                    name: name.to_string(),
                    path: path.clone(),
                }
            } else {
                TemplateError::Read {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;
        expand(&text, vars)
    }
}
