//! Component scaffolding: renders the component, its test suite and its
//! story, then writes them into the configured layout.
//!
//! The only collision guard is on the component file; test and story files
//! at the computed paths are overwritten.

use crate::error::{BasekitError, Result};
use crate::models::component::{ComponentPaths, CustomProp, GenerateOptions, Generated};
use crate::models::rules::identifier_pattern;
use crate::templates::{self, TemplateVars};
use crate::utils;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Directories the three artifacts are written to.
#[derive(Debug, Clone)]
pub struct Layout {
    pub components_dir: PathBuf,
    pub tests_dir: PathBuf,
    pub stories_dir: PathBuf,
}

impl Layout {
    pub fn paths_for(&self, component: &str) -> ComponentPaths {
        ComponentPaths {
            component: self.components_dir.join(format!("{}.vue", component)),
            test: self.tests_dir.join(format!("{}.test.ts", component)),
            story: self.stories_dir.join(format!("{}.stories.ts", component)),
        }
    }
}

/// Prepend `prefix` unless `name` already starts with it.
pub fn canonical_name(name: &str, prefix: &str) -> String {
    if name.starts_with(prefix) {
        name.to_string()
    } else {
        format!("{}{}", prefix, name)
    }
}

/// Canonicalize `name` and reject identifiers the `naming` rule would fail.
///
/// The accepted shape is `<Prefix>` + an uppercase letter + letters, so
/// `Card2`, `modal` and a bare prefix are usage errors.
pub fn check_name(name: &str, prefix: &str) -> Result<String> {
    if name.is_empty() {
        return Err(BasekitError::Usage("component name is empty".into()));
    }
    let component = canonical_name(name, prefix);
    let shape = Regex::new(&format!("{}$", identifier_pattern(prefix)))?;
    if !shape.is_match(&component) {
        return Err(BasekitError::Usage(format!(
            "invalid component name '{}': expected {}<PascalCaseName> with letters only (e.g. Modal)",
            name, prefix
        )));
    }
    Ok(component)
}

/// Usage text printed when no component name is given.
pub const USAGE: &str =
    "Usage: basekit generate <ComponentName> [--no-slots] [--with-icon]\nExample: basekit generate Modal";

/// The positional name is optional for clap so a missing one exits 1, not 2.
pub fn require_name(name: Option<String>) -> Result<String> {
    name.filter(|n| !n.trim().is_empty())
        .ok_or_else(|| BasekitError::Usage(USAGE.to_string()))
}

/// Build generation options from raw command-line values.
pub fn build_options(
    no_slots: bool,
    with_icon: bool,
    description: Option<String>,
    props: &[String],
) -> Result<GenerateOptions> {
    let custom_props = props
        .iter()
        .map(|p| p.parse::<CustomProp>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(BasekitError::Usage)?;
    Ok(GenerateOptions {
        description,
        has_icon: with_icon,
        has_slots: !no_slots,
        custom_props,
    })
}

/// Render and write the three artifacts for `name`.
///
/// Fails with `ComponentExists` before touching the filesystem when the
/// component file is already present.
pub fn generate_component(
    layout: &Layout,
    prefix: &str,
    name: &str,
    opts: &GenerateOptions,
) -> Result<Generated> {
    let component = check_name(name, prefix)?;
    let paths = layout.paths_for(&component);

    if paths.component.exists() {
        return Err(BasekitError::ComponentExists {
            name: component,
            path: paths.component,
        });
    }

    let slug = name.to_lowercase();
    let description = opts
        .description
        .clone()
        .unwrap_or_else(|| format!("A {} component", slug));
    let vars = TemplateVars {
        component: &component,
        slug: &slug,
        description: &description,
        options: opts,
    };

    let component_src = templates::render_component(&vars);
    let test_src = templates::render_test(
        &vars,
        &utils::import_specifier(&layout.tests_dir, &paths.component),
    );
    let story_src = templates::render_story(
        &vars,
        &utils::import_specifier(&layout.stories_dir, &paths.component),
    );

    for dir in [&layout.components_dir, &layout.tests_dir, &layout.stories_dir] {
        fs::create_dir_all(dir).map_err(|e| BasekitError::io(dir, e))?;
    }
    write_file(&paths.component, &component_src)?;
    write_file(&paths.test, &test_src)?;
    write_file(&paths.story, &story_src)?;

    Ok(Generated { component, paths })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| BasekitError::io(path, e))
}
