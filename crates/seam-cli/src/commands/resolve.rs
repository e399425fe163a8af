//! Resolve command implementation.
//!
//! Orders a source tree dependency-first and writes the concatenated
//! contents to the output destination.

use std::io;

use seam_resolve::{Emitter, Resolver};
use tracing::debug;

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::config::Settings;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the resolve command.
///
/// The output destination is truncated at the start of the run, before the
/// walk; an aborted run (a cycle) leaves it empty rather than stale. Unless
/// `--quiet`, everything written is mirrored to stdout.
pub fn execute(args: ResolveArgs, quiet: bool) -> Result<()> {
    let settings = Settings::resolve(
        args.root,
        args.config.as_deref(),
        args.output,
        args.max_depth,
        args.keyword,
    )?;
    debug!(
        "resolving '{}' into '{}'",
        settings.root.display(),
        settings.output.display()
    );

    let mut emitter = if args.dry_run {
        None
    } else {
        let mut emitter = Emitter::create(&settings.output).with_path(&settings.output)?;
        if !quiet {
            emitter = emitter.with_echo(io::stdout());
        }
        Some(emitter)
    };

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

    match emitter.as_mut() {
        None => {
            ui::info(&format!(
                "dry run: {} files would be written to {}",
                resolution.order.len(),
                settings.output.display()
            ));
            for path in &resolution.order {
                println!("{}", utils::display_relative(path, &resolution.root));
            }
        }
        Some(emitter) => {
            emitter
                .emit_all(&resolution.order)
                .context("Failed to write resolved output")?;
            ui::success(&format!(
                "resolved {} files into {}",
                resolution.order.len(),
                settings.output.display()
            ));
        }
    }
    Ok(())
}
