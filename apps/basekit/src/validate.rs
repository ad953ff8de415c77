//! Validation runner for component definition files.
//!
//! Every `<Prefix>*.vue` file in the components directory is checked against
//! the [`RuleTable`]. Files are checked in parallel; reports are sorted by
//! file name so the output does not depend on directory order.

use crate::error::{BasekitError, Result};
use crate::models::rules::RuleTable;
use crate::models::{FileReport, Finding, Severity, Summary, ValidationResult};
use glob::glob;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// List component definition files: names starting with `prefix`, ending in `.vue`.
pub fn discover_components(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BasekitError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "components directory not found"),
        ));
    }
    let pattern = format!(
        "{}/{}*.vue",
        glob::Pattern::escape(&dir.to_string_lossy()),
        glob::Pattern::escape(prefix)
    );
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in glob(&pattern)? {
        let p = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            BasekitError::io(&path, std::io::Error::from(e))
        })?;
        if p.is_file() {
            files.push(p);
        }
    }
    files.sort();
    Ok(files)
}

/// Evaluate every rule against one file's name and content.
pub fn validate_source(rules: &RuleTable, file_name: &str, content: &str) -> FileReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for rule in rules.iter() {
        if rule.matcher.is_satisfied(file_name, content) {
            continue;
        }
        let finding = Finding {
            rule: rule.name.clone(),
            message: rule.message_for(file_name),
        };
        match rule.severity {
            Severity::Error => errors.push(finding),
            Severity::Warning => warnings.push(finding),
        }
    }
    FileReport {
        file: file_name.to_string(),
        errors,
        warnings,
    }
}

/// Read and validate a single component file.
pub fn validate_file(rules: &RuleTable, path: &Path) -> Result<FileReport> {
    let content = fs::read_to_string(path).map_err(|e| BasekitError::io(path, e))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(validate_source(rules, &file_name, &content))
}

/// Validate every component in `dir`.
///
/// Fails with `NoComponents` when nothing matches; a read failure on any
/// file aborts the run.
pub fn run_validate(dir: &Path, prefix: &str) -> Result<ValidationResult> {
    let rules = RuleTable::standard(prefix)?;
    let files = discover_components(dir, prefix)?;
    if files.is_empty() {
        return Err(BasekitError::NoComponents {
            prefix: prefix.to_string(),
            dir: dir.to_path_buf(),
        });
    }

    let mut reports = files
        .par_iter()
        .map(|path| validate_file(&rules, path))
        .collect::<Result<Vec<_>>>()?;
    reports.sort_by(|a, b| a.file.cmp(&b.file));

    let summary = Summary {
        components: reports.len(),
        errors: reports.iter().map(|r| r.errors.len()).sum(),
        warnings: reports.iter().map(|r| r.warnings.len()).sum(),
    };
    Ok(ValidationResult { reports, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_component, Layout};
    use crate::models::component::GenerateOptions;
    use tempfile::tempdir;

    const MINIMAL_OK: &str = r#"<template>
  <button class="flex p-2" :data-testid="id"></button>
</template>
<script setup lang="ts">
export interface BaseChipProps {
  variant?: 'primary'
  size?: 'small'
  disabled?: boolean
}
export interface BaseChipEmits {
  click: []
}
export interface BaseChipSlots {
  default?: () => any
}
const props = withDefaults(defineProps<BaseChipProps>(), {})
const emit = defineEmits<BaseChipEmits>()
</script>
"#;

    fn rules() -> RuleTable {
        RuleTable::standard("Base").unwrap()
    }

    #[test]
    fn test_hard_rules_met_means_zero_errors_despite_warnings() {
        let report = validate_source(&rules(), "BaseChip.vue", MINIMAL_OK);
        assert!(report.errors.is_empty(), "{:?}", report.errors);
        assert!(report.passed());
        let names: Vec<&str> = report.warnings.iter().map(|f| f.rule.as_str()).collect();
        assert!(names.contains(&"componentDoc"));
        assert!(names.contains(&"ariaLabel"));
        assert!(names.contains(&"variant:danger"));
        assert!(names.contains(&"size:large"));
        assert!(names.contains(&"accessibility"));
        assert!(!names.contains(&"dataTestid"));
    }

    #[test]
    fn test_missing_prop_is_named_error() {
        let src = MINIMAL_OK.replace("  size?: 'small'\n", "");
        let report = validate_source(&rules(), "BaseChip.vue", &src);
        assert!(!report.passed());
        assert!(report
            .errors
            .iter()
            .any(|f| f.rule == "prop:size" && f.message == "Missing required prop: size"));
    }

    #[test]
    fn test_bad_file_name_is_error() {
        let report = validate_source(&rules(), "Basechip.vue", MINIMAL_OK);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].rule, "naming");
    }

    #[test]
    fn test_findings_follow_table_order() {
        let report = validate_source(&rules(), "BaseEmpty.vue", "");
        let order: Vec<&str> = report.errors.iter().map(|f| f.rule.as_str()).collect();
        assert_eq!(order.first(), Some(&"propsInterface"));
        assert_eq!(order.last(), Some(&"propsDeclaration"));
        assert_eq!(report.warnings.last().map(|f| f.rule.as_str()), Some("dataTestid"));
    }

    #[test]
    fn test_run_validate_sorted_and_summed() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("BaseZeta.vue"), MINIMAL_OK).unwrap();
        fs::write(dir.join("BaseAlpha.vue"), "<template></template>").unwrap();
        fs::write(dir.join("Other.vue"), "").unwrap();
        fs::write(dir.join("BaseAlpha.stories.ts"), "").unwrap();

        let res = run_validate(dir, "Base").unwrap();
        let files: Vec<&str> = res.reports.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, vec!["BaseAlpha.vue", "BaseZeta.vue"]);
        assert_eq!(res.summary.components, 2);
        assert_eq!(res.summary.errors, res.reports[0].errors.len());
        assert!(!res.passed());

        let again = run_validate(dir, "Base").unwrap();
        assert_eq!(again.summary.errors, res.summary.errors);
        assert_eq!(again.summary.warnings, res.summary.warnings);
    }

    #[test]
    fn test_discover_in_dir_with_glob_metacharacters() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("ui[v2]*");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("BaseCard.vue"), MINIMAL_OK).unwrap();
        fs::write(dir.join("Card.vue"), "").unwrap();

        let files = discover_components(&dir, "Base").unwrap();
        assert_eq!(files, vec![dir.join("BaseCard.vue")]);
    }

    #[test]
    fn test_run_validate_empty_dir() {
        let tmp = tempdir().unwrap();
        let err = run_validate(tmp.path(), "Base").unwrap_err();
        assert!(matches!(err, BasekitError::NoComponents { .. }));
        let err = run_validate(&tmp.path().join("missing"), "Base").unwrap_err();
        assert!(matches!(err, BasekitError::Io { .. }));
    }

    #[test]
    fn test_generated_component_passes_hard_rules() {
        let variants = [
            GenerateOptions::default(),
            GenerateOptions {
                has_slots: false,
                ..Default::default()
            },
            GenerateOptions {
                has_icon: true,
                description: Some("Dialog overlay".into()),
                custom_props: vec!["title:string:Dialog title".parse().unwrap()],
                ..Default::default()
            },
        ];
        for (i, opts) in variants.iter().enumerate() {
            let tmp = tempdir().unwrap();
            let root = tmp.path();
            let lay = Layout {
                components_dir: root.join("src/components"),
                tests_dir: root.join("tests/components"),
                stories_dir: root.join("src/components"),
            };
            generate_component(&lay, "Base", "Modal", opts).unwrap();
            let res = run_validate(&lay.components_dir, "Base").unwrap();
            assert_eq!(res.reports.len(), 1, "variant {}", i);
            let report = &res.reports[0];
            assert_eq!(report.file, "BaseModal.vue");
            assert!(report.errors.is_empty(), "variant {}: {:?}", i, report.errors);
            let warn: Vec<&str> = report.warnings.iter().map(|f| f.rule.as_str()).collect();
            assert_eq!(warn, vec!["ariaLabel"], "variant {}", i);
            assert!(res.passed());
        }
    }
}
