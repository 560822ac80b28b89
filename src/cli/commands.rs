//! Command dispatch: load claims, build the forest, print results.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use serde::Serialize;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{
    find_references, render_outline, segment_claims, to_tree_string, ClaimForest, DanglingPolicy,
    ForestBuilder,
};

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Commands::Tree { file, plain } => tree(cli, settings, file, *plain),
        Commands::Roots { file } => roots(cli, settings, file),
        Commands::Leaves { file } => leaves(cli, settings, file),
        Commands::Depth { file } => depth(cli, settings, file),
        Commands::Refs { file } => refs(cli, settings, file),
        Commands::Completion { shell } => {
            completion(*shell);
            Ok(())
        }
    }
}

/// Read the claim strings from `file`: `-` for stdin, `.json` for a JSON
/// array of claim strings, anything else is segmented claims text.
fn read_claims(file: &Path) -> CliResult<Vec<String>> {
    let text = if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::Io {
                path: file.to_path_buf(),
                source: e,
            })?;
        buf
    } else {
        fs::read_to_string(file).map_err(|e| CliError::Io {
            path: file.to_path_buf(),
            source: e,
        })?
    };

    if file.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str::<Vec<String>>(&text).map_err(|e| CliError::InvalidInput {
            path: file.to_path_buf(),
            message: format!("expected a JSON array of claim strings: {}", e),
        })
    } else {
        Ok(segment_claims(&text))
    }
}

fn build_forest(cli: &Cli, settings: &Settings, file: &Path) -> CliResult<ClaimForest> {
    let claims = read_claims(file)?;
    debug!(count = claims.len(), "claims loaded");

    let strict = cli.strict || settings.build.strict;
    let dedup = cli.dedup || settings.build.dedup_references;
    let policy = if strict {
        DanglingPolicy::Fail
    } else {
        DanglingPolicy::Record
    };

    let forest = ForestBuilder::new()
        .with_dangling_policy(policy)
        .with_dedup_references(dedup)
        .build(&claims)?;

    for fault in forest.faults() {
        output::warning(fault);
    }
    Ok(forest)
}

fn tree(cli: &Cli, settings: &Settings, file: &Path, plain: bool) -> CliResult<()> {
    let forest = build_forest(cli, settings, file)?;
    for (i, &root) in forest.roots().iter().enumerate() {
        if i > 0 {
            println!();
        }
        if plain {
            print!("{}", render_outline(&forest, root));
        } else {
            println!("{}", to_tree_string(&forest, root));
        }
    }
    Ok(())
}

fn roots(cli: &Cli, settings: &Settings, file: &Path) -> CliResult<()> {
    let forest = build_forest(cli, settings, file)?;
    output::header("Independent claims:");
    for &root in forest.roots() {
        if let Some(node) = forest.get(root) {
            output::detail(&format!(
                "Claim {}: {}",
                node.claim.number,
                node.claim.summary()
            ));
        }
    }
    Ok(())
}

fn leaves(cli: &Cli, settings: &Settings, file: &Path) -> CliResult<()> {
    let forest = build_forest(cli, settings, file)?;
    output::header("Leaf claims:");
    for number in forest.leaf_claims() {
        let summary = forest
            .lookup(number)
            .and_then(|idx| forest.get(idx))
            .map(|node| node.claim.summary())
            .unwrap_or_default();
        output::detail(&format!("Claim {}: {}", number, summary));
    }
    Ok(())
}

fn depth(cli: &Cli, settings: &Settings, file: &Path) -> CliResult<()> {
    let forest = build_forest(cli, settings, file)?;
    for &root in forest.roots() {
        if let Some(node) = forest.get(root) {
            output::info(&format!(
                "Claim {}: depth {}",
                node.claim.number,
                forest.depth(root)
            ));
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RefEntry {
    claim: u32,
    refs: Vec<u32>,
}

fn refs(cli: &Cli, settings: &Settings, file: &Path) -> CliResult<()> {
    let forest = build_forest(cli, settings, file)?;
    let entries: Vec<RefEntry> = forest
        .nodes()
        .map(|(_, node)| RefEntry {
            claim: node.claim.number,
            refs: find_references(&node.claim.text),
        })
        .collect();
    output::info(&serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
