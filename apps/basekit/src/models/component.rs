//! Generation options and the plan of files a generation run produces.

use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// An extra prop declared on the generated component.
pub struct CustomProp {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

/// Byte offset of the first `:` outside `{}`, `[]` and `()`.
fn top_level_colon(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

impl FromStr for CustomProp {
    type Err = String;

    /// Parse `name:type[:description]`, e.g. `title:string:Dialog title`.
    ///
    /// Colons inside brackets belong to the type (`point:{x: number}`); the
    /// first bracket-free colon after the type starts the description.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || format!("invalid prop '{}': expected name:type[:description]", s);
        let (name, rest) = s.split_once(':').ok_or_else(malformed)?;
        let (ty, description) = match top_level_colon(rest) {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };
        let (name, ty, description) = (name.trim(), ty.trim(), description.trim());
        if name.is_empty() || ty.is_empty() {
            return Err(malformed());
        }
        let leading_ok = name
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '_');
        if !leading_ok || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!("invalid prop name '{}'", name));
        }
        Ok(CustomProp {
            name: name.to_string(),
            ty: ty.to_string(),
            description: if description.is_empty() {
                name.to_string()
            } else {
                description.to_string()
            },
        })
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// `None` yields "A <name> component".
    pub description: Option<String>,
    pub has_icon: bool,
    pub has_slots: bool,
    pub custom_props: Vec<CustomProp>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            description: None,
            has_icon: false,
            has_slots: true,
            custom_props: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Target paths for one component.
pub struct ComponentPaths {
    pub component: PathBuf,
    pub test: PathBuf,
    pub story: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
/// What a successful generation wrote.
pub struct Generated {
    pub component: String,
    pub paths: ComponentPaths,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_custom_prop() {
        let p: CustomProp = "title:string:Dialog title".parse().unwrap();
        assert_eq!(p.name, "title");
        assert_eq!(p.ty, "string");
        assert_eq!(p.description, "Dialog title");

        let p: CustomProp = "count:number".parse().unwrap();
        assert_eq!(p.description, "count");

        let p: CustomProp = "cb:() => void:callback: fired later".parse().unwrap();
        assert_eq!(p.ty, "() => void");
        assert_eq!(p.description, "callback: fired later");
    }

    #[test]
    fn test_parse_custom_prop_rejects_malformed() {
        assert!("title".parse::<CustomProp>().is_err());
        assert!(":string".parse::<CustomProp>().is_err());
        assert!("ti-tle:string".parse::<CustomProp>().is_err());
        assert!("2col:string".parse::<CustomProp>().is_err());
    }

    #[test]
    fn test_parse_custom_prop_type_with_colons() {
        let p: CustomProp = "point:{ x: number; y: number }:Anchor point".parse().unwrap();
        assert_eq!(p.name, "point");
        assert_eq!(p.ty, "{ x: number; y: number }");
        assert_eq!(p.description, "Anchor point");

        let p: CustomProp = "rows:Array<{ id: string }>".parse().unwrap();
        assert_eq!(p.ty, "Array<{ id: string }>");
        assert_eq!(p.description, "rows");

        let p: CustomProp = "_cb:(e: MouseEvent) => void".parse().unwrap();
        assert_eq!(p.name, "_cb");
        assert_eq!(p.ty, "(e: MouseEvent) => void");
    }

    #[test]
    fn test_default_options_have_slots() {
        let o = GenerateOptions::default();
        assert!(o.has_slots);
        assert!(!o.has_icon);
        assert!(o.custom_props.is_empty());
    }
}
