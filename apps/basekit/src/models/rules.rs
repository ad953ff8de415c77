//! The fixed rule table evaluated against every component definition.
//!
//! Rules are evaluated in table order; the order is part of the report
//! format. Severity assignments are policy and must not be reshuffled:
//! a missing `aria-label` is only a warning while a missing utility class
//! is an error.

use super::Severity;
use regex::Regex;

pub const REQUIRED_PROPS: [&str; 3] = ["variant", "size", "disabled"];
pub const REQUIRED_VARIANTS: [&str; 6] = [
    "default",
    "primary",
    "secondary",
    "success",
    "warning",
    "danger",
];
pub const REQUIRED_SIZES: [&str; 3] = ["small", "normal", "large"];

/// Shape of a canonical component identifier: the prefix, an uppercase
/// letter, then letters only. File names add `.vue`.
pub fn identifier_pattern(prefix: &str) -> String {
    format!(r"^{}[A-Z][a-zA-Z]*", regex::escape(prefix))
}

const TAILWIND_CLASSES: &str =
    r#"class="[^"]*\b(bg-|text-|border-|p-|m-|h-|w-|flex|grid|rounded)"#;

/// How a rule inspects a component.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Regex over the file name only.
    FileName(Regex),
    /// Regex anywhere in the content.
    Pattern(Regex),
    Contains(String),
    /// Every needle must be present.
    AllOf(Vec<String>),
    /// At least one needle must be present.
    AnyOf(Vec<String>),
}

impl Matcher {
    pub fn is_satisfied(&self, file_name: &str, content: &str) -> bool {
        match self {
            Matcher::FileName(re) => re.is_match(file_name),
            Matcher::Pattern(re) => re.is_match(content),
            Matcher::Contains(needle) => content.contains(needle.as_str()),
            Matcher::AllOf(needles) => needles.iter().all(|n| content.contains(n.as_str())),
            Matcher::AnyOf(needles) => needles.iter().any(|n| content.contains(n.as_str())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub matcher: Matcher,
    pub severity: Severity,
    message: String,
}

impl Rule {
    fn new(name: &str, matcher: Matcher, severity: Severity, message: String) -> Self {
        Rule {
            name: name.to_string(),
            matcher,
            severity,
            message,
        }
    }

    /// Violation message; `{file}` expands to the component file name.
    pub fn message_for(&self, file_name: &str) -> String {
        self.message.replace("{file}", file_name)
    }
}

/// Immutable ordered collection of rules, built once per process.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build the standard table for components named `<prefix><PascalName>.vue`.
    pub fn standard(prefix: &str) -> Result<Self, regex::Error> {
        use Severity::{Error, Warning};

        let pattern = |name: &str, re: &str| -> Result<Rule, regex::Error> {
            Ok(Rule::new(
                name,
                Matcher::Pattern(Regex::new(re)?),
                Error,
                format!("Missing required {} pattern", name),
            ))
        };

        let naming = Regex::new(&format!(r"{}\.vue$", identifier_pattern(prefix)))?;
        let mut rules = vec![
            Rule::new(
                "naming",
                Matcher::FileName(naming),
                Error,
                format!(
                    "Component name \"{{file}}\" doesn't follow {}* naming convention",
                    prefix
                ),
            ),
            pattern("propsInterface", r"export interface.*Props \{")?,
            pattern("emitsInterface", r"export interface.*Emits \{")?,
            pattern("slotsInterface", r"export interface.*Slots \{")?,
            pattern("scriptSetup", r#"<script setup lang="ts">"#)?,
            pattern("defineProps", r"defineProps<")?,
            pattern("defineEmits", r"defineEmits<")?,
            pattern("withDefaults", r"withDefaults")?,
            Rule::new(
                "componentDoc",
                Matcher::Contains("<!-- Component description -->".into()),
                Warning,
                "Missing componentDoc pattern".into(),
            ),
            Rule::new(
                "ariaLabel",
                Matcher::Contains("aria-label".into()),
                Warning,
                "Missing ariaLabel pattern".into(),
            ),
            Rule::new(
                "tailwindClasses",
                Matcher::Pattern(Regex::new(TAILWIND_CLASSES)?),
                Error,
                "No Tailwind CSS classes detected".into(),
            ),
        ];

        for prop in REQUIRED_PROPS {
            rules.push(Rule::new(
                &format!("prop:{}", prop),
                Matcher::Contains(format!("{}?:", prop)),
                Error,
                format!("Missing required prop: {}", prop),
            ));
        }
        for variant in REQUIRED_VARIANTS {
            rules.push(Rule::new(
                &format!("variant:{}", variant),
                Matcher::Contains(format!("'{}'", variant)),
                Warning,
                format!("Missing variant: {}", variant),
            ));
        }
        for size in REQUIRED_SIZES {
            rules.push(Rule::new(
                &format!("size:{}", size),
                Matcher::Contains(format!("'{}'", size)),
                Warning,
                format!("Missing size: {}", size),
            ));
        }

        rules.push(Rule::new(
            "propsDeclaration",
            Matcher::AllOf(vec!["export interface".into(), "Props {".into()]),
            Error,
            "Missing TypeScript Props interface".into(),
        ));
        rules.push(Rule::new(
            "accessibility",
            Matcher::AnyOf(vec!["aria-".into(), "role=".into()]),
            Warning,
            "No accessibility attributes found".into(),
        ));
        rules.push(Rule::new(
            "dataTestid",
            Matcher::Contains("data-testid".into()),
            Warning,
            "No testing attributes found".into(),
        ));

        Ok(RuleTable { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(table: &'a RuleTable, name: &str) -> &'a Rule {
        table.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_naming_rule_applies_to_file_name_only() {
        let table = RuleTable::standard("Base").unwrap();
        let naming = rule(&table, "naming");
        assert!(naming.matcher.is_satisfied("BaseButton.vue", ""));
        assert!(!naming.matcher.is_satisfied("Basebutton.vue", "BaseButton.vue"));
        assert!(!naming.matcher.is_satisfied("BaseSide-Menu.vue", ""));
        assert_eq!(
            naming.message_for("Basebutton.vue"),
            "Component name \"Basebutton.vue\" doesn't follow Base* naming convention"
        );
    }

    #[test]
    fn test_prefix_is_escaped_in_naming_rule() {
        let table = RuleTable::standard("U.i").unwrap();
        let naming = rule(&table, "naming");
        assert!(naming.matcher.is_satisfied("U.iCard.vue", ""));
        assert!(!naming.matcher.is_satisfied("UxiCard.vue", ""));
    }

    #[test]
    fn test_tailwind_rule_needs_static_utility_class() {
        let table = RuleTable::standard("Base").unwrap();
        let tw = rule(&table, "tailwindClasses");
        assert!(tw.matcher.is_satisfied("", r#"<div class="inline-flex gap-2">"#));
        assert!(tw.matcher.is_satisfied("", r#"<span class="p-4">"#));
        assert!(!tw.matcher.is_satisfied("", r#"<i class="pi pi-spinner animate-spin">"#));
        assert!(!tw.matcher.is_satisfied("", r#"<div :class="componentClasses">"#));
    }

    #[test]
    fn test_severity_policy() {
        let table = RuleTable::standard("Base").unwrap();
        for name in ["naming", "slotsInterface", "tailwindClasses", "prop:size"] {
            assert_eq!(rule(&table, name).severity, Severity::Error, "{}", name);
        }
        for name in ["componentDoc", "ariaLabel", "variant:danger", "size:large", "dataTestid"] {
            assert_eq!(rule(&table, name).severity, Severity::Warning, "{}", name);
        }
        assert_eq!(table.len(), 11 + 3 + 6 + 3 + 3);
    }

    #[test]
    fn test_any_of_and_all_of() {
        let table = RuleTable::standard("Base").unwrap();
        let a11y = rule(&table, "accessibility");
        assert!(a11y.matcher.is_satisfied("", r#"<div role="dialog">"#));
        assert!(a11y.matcher.is_satisfied("", r#"<i aria-hidden="true">"#));
        assert!(!a11y.matcher.is_satisfied("", "<div>"));
        let decl = rule(&table, "propsDeclaration");
        assert!(!decl.matcher.is_satisfied("", "export interface XEmits {"));
        assert!(decl.matcher.is_satisfied("", "export interface\nXProps {"));
    }
}
