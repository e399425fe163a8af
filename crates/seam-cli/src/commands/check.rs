//! Check command implementation.
//!
//! Validates a source tree without writing output.

use seam_resolve::Resolver;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::config::Settings;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// Runs the same walk, scan and cycle detection as resolve, then reports
/// what a real run would emit. A cycle fails the check with the same exit
/// code resolve would use.
pub fn execute(args: CheckArgs) -> Result<()> {
    let settings = Settings::resolve(
        args.root,
        args.config.as_deref(),
        None,
        args.max_depth,
        args.keyword,
    )?;
    ui::info(&format!("checking {}", settings.root.display()));

    let resolver = Resolver::new()
        .keyword(settings.keyword.as_str())
        .max_depth(settings.max_depth)
        .exclude(&settings.output);
    let resolution = resolver.resolve(&settings.root)?;

    for miss in &resolution.missing {
        ui::warning(&format!(
            "'{}' requires '{}', which does not exist",
            utils::display_relative(&miss.file, &resolution.root),
            utils::display_relative(&miss.target, &resolution.root),
        ));
    }

    if args.order {
        for path in &resolution.order {
            println!("{}", utils::display_relative(path, &resolution.root));
        }
    }

    ui::info(&format!(
        "{} files, {} dependency edges",
        resolution.files, resolution.edges
    ));
    if resolution.missing.is_empty() {
        ui::success("no cycles; every require resolves");
    } else {
        ui::success(&format!(
            "no cycles; {} missing dependencies",
            resolution.missing.len()
        ));
    }
    Ok(())
}
