//! basekit CLI binary entry point.
//! Delegates to the library for generate/validate and prints results.

use basekit::cli::{Cli, Commands};
use basekit::error::BasekitError;
use basekit::generate::{self, Layout};
use basekit::{config, output, utils, validate};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Generate {
            name,
            no_slots,
            with_icon,
            description,
            props,
            repo_root,
            output,
        } => {
            let name = generate::require_name(name).unwrap_or_else(|e| fail(e));
            let eff = config::resolve_effective(repo_root.as_deref(), output.as_deref(), None)
                .unwrap_or_else(|e| fail(e));
            let opts = generate::build_options(no_slots, with_icon, description, &props)
                .unwrap_or_else(|e| fail(e));
            let layout = Layout {
                components_dir: eff.components_dir.clone(),
                tests_dir: eff.tests_dir.clone(),
                stories_dir: eff.stories_dir.clone(),
            };
            // Only the component file is guarded; flag the others before they are replaced
            if eff.output != "json" {
                let planned = layout.paths_for(&generate::canonical_name(&name, &eff.prefix));
                if !planned.component.exists() {
                    for p in [&planned.test, &planned.story] {
                        if p.exists() {
                            eprintln!(
                                "{} {} exists and will be overwritten",
                                utils::warn_prefix(),
                                utils::rel_to_wd(p)
                            );
                        }
                    }
                }
            }
            match generate::generate_component(&layout, &eff.prefix, &name, &opts) {
                Ok(generated) => output::print_generated(&generated, &eff.output),
                Err(e) => fail(e),
            }
        }
        Commands::Validate {
            repo_root,
            components_dir,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                components_dir.as_deref(),
            )
            .unwrap_or_else(|e| fail(e));
            if eff.output != "json" {
                // Friendly note if no basekit config was found
                if eff.config_file.is_none() {
                    eprintln!(
                        "{} No basekit.toml found; using defaults.",
                        utils::note_prefix()
                    );
                }
                eprintln!(
                    "{} 🔍 Validating component architecture in {}",
                    utils::info_prefix(),
                    utils::rel_to_wd(&eff.components_dir)
                );
            }
            match validate::run_validate(&eff.components_dir, &eff.prefix) {
                Ok(result) => {
                    output::print_validation(&result, &eff.output);
                    if !result.passed() {
                        std::process::exit(1);
                    }
                }
                Err(e) => fail(e),
            }
        }
    }
}

/// Report a terminal error and exit with status 1.
fn fail(err: BasekitError) -> ! {
    eprintln!("{} {}", utils::error_prefix(), err);
    std::process::exit(1);
}
