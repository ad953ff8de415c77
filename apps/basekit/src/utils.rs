//! Small helpers for terminal diagnostics and path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are on unless `NO_COLOR` is set or the output is machine-readable.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn tag(label: &str, paint: fn(&str) -> String) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        label.to_string()
    } else {
        paint(label)
    }
}

pub fn error_prefix() -> String {
    tag("error:", |s| s.red().bold().to_string())
}

pub fn warn_prefix() -> String {
    tag("warn:", |s| s.yellow().bold().to_string())
}

pub fn note_prefix() -> String {
    tag("note:", |s| s.cyan().bold().to_string())
}

pub fn info_prefix() -> String {
    tag("info:", |s| s.blue().bold().to_string())
}

/// Render `p` relative to the working directory when possible.
pub fn rel_to_wd(p: &Path) -> String {
    let shown = std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(p, cwd))
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or_else(|| p.to_path_buf());
    to_slash(&shown)
}

/// Forward-slash rendering, used for paths embedded in generated sources.
pub fn to_slash(p: &Path) -> String {
    p.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
        .replace("//", "/")
}

/// Relative module specifier from `from_dir` to `target`, e.g. `./X.vue`
/// or `../../src/components/X.vue`.
pub fn import_specifier(from_dir: &Path, target: &Path) -> String {
    let rel = pathdiff::diff_paths(target, from_dir).unwrap_or_else(|| target.to_path_buf());
    let s = to_slash(&rel);
    if s.starts_with("../") || s.starts_with('/') {
        s
    } else {
        format!("./{}", s)
    }
}
