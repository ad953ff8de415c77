//! Output rendering for the validate and generate commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::models::component::Generated;
use crate::models::ValidationResult;
use crate::utils::{rel_to_wd, use_colors};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

const NEXT_STEPS: [&str; 4] = [
    "Update src/index.ts to export the new component",
    "Run tests: npm run test",
    "View in Storybook: npm run storybook",
    "Validate component: basekit validate",
];

/// Print validation results in the requested format.
pub fn print_validation(res: &ValidationResult, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_validation_json(res))),
        _ => {
            let color = use_colors(output);
            for r in &res.reports {
                if color {
                    println!("📄 {}", r.file.bold());
                } else {
                    println!("📄 {}", r.file);
                }
                if r.errors.is_empty() && r.warnings.is_empty() {
                    println!("  ✅ All checks passed");
                }
                for e in &r.errors {
                    if color {
                        println!("  {} {}", "❌".red(), e.message.red());
                    } else {
                        println!("  ❌ {}", e.message);
                    }
                }
                for w in &r.warnings {
                    if color {
                        println!("  {}  {}", "⚠️".yellow(), w.message.yellow());
                    } else {
                        println!("  ⚠️  {}", w.message);
                    }
                }
                println!();
            }

            let s = &res.summary;
            if color {
                println!("{}", "📊 Validation Summary:".bold());
            } else {
                println!("📊 Validation Summary:");
            }
            println!("  Components checked: {}", s.components);
            println!("  Total errors: {}", s.errors);
            println!("  Total warnings: {}", s.warnings);

            let verdict = if s.errors > 0 {
                "❌ Validation failed! Please fix the errors above."
            } else if s.warnings > 0 {
                "⚠️  Validation passed with warnings. Consider addressing them."
            } else {
                "✅ All components pass validation!"
            };
            if color {
                let painted = if s.errors > 0 {
                    verdict.red().bold().to_string()
                } else if s.warnings > 0 {
                    verdict.yellow().bold().to_string()
                } else {
                    verdict.green().bold().to_string()
                };
                println!("\n{}", painted);
            } else {
                println!("\n{}", verdict);
            }
        }
    }
}

/// Print created files and next-step hints after a generation run.
pub fn print_generated(gen: &Generated, output: &str) {
    match output {
        "json" => println!("{}", to_pretty(&compose_generate_json(gen))),
        _ => {
            let color = use_colors(output);
            let created = [
                ("component", &gen.paths.component),
                ("test", &gen.paths.test),
                ("story", &gen.paths.story),
            ];
            for (kind, path) in created {
                let label = format!("✅ Created {}:", kind);
                if color {
                    println!("{} {}", label.green().bold(), rel_to_wd(path));
                } else {
                    println!("{} {}", label, rel_to_wd(path));
                }
            }
            let done = format!("🎉 {} generated successfully!", gen.component);
            if color {
                println!("\n{}", done.bold());
            } else {
                println!("\n{}", done);
            }
            println!("\nNext steps:");
            for (i, step) in NEXT_STEPS.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
        }
    }
}

fn to_pretty(v: &JsonVal) -> String {
    serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
}

/// Compose validation JSON object (pure) for testing/snapshot purposes.
pub fn compose_validation_json(res: &ValidationResult) -> JsonVal {
    let items: Vec<_> = res
        .reports
        .iter()
        .map(|r| {
            json!({
                "file": r.file,
                "passed": r.passed(),
                "errors": r.errors,
                "warnings": r.warnings,
            })
        })
        .collect();
    json!({
        "results": items,
        "summary": res.summary,
        "passed": res.passed(),
    })
}

/// Compose generation JSON object (pure) for testing/snapshot purposes.
pub fn compose_generate_json(gen: &Generated) -> JsonVal {
    json!({
        "component": gen.component,
        "files": {
            "component": rel_to_wd(&gen.paths.component),
            "test": rel_to_wd(&gen.paths.test),
            "story": rel_to_wd(&gen.paths.story),
        },
        "nextSteps": NEXT_STEPS,
    })
}
