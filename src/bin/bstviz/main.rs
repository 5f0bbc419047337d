//! Replays insertions and searches on a BST, drawing every step to stdout.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use bstviz::presenter::Presenter;
use bstviz::tree::Tree;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bstviz::log::init(cli.log_level());

    let stdout = io::stdout();
    let mut presenter = Presenter::new(stdout.lock(), cli.presenter_config())
        .context("invalid presenter settings")?;
    let mut tree = Tree::new();

    for &value in cli.insert() {
        tree.insert_with(value, &mut presenter);
    }
    info!(len = tree.len(), height = tree.height(), "tree built");

    let mut results = Vec::with_capacity(cli.search().len());
    for &value in cli.search() {
        let found = tree.search_with(&value, &mut presenter);
        results.push((value, found));
    }

    let traversal = cli
        .traverse()
        .then(|| tree.inorder_traversal_with(&mut presenter));

    let mut out = presenter.finish().context("failed to draw the tree")?;
    report(&mut out, &results, traversal.as_deref()).context("failed to write results")?;

    Ok(())
}

fn report(
    out: &mut impl io::Write,
    results: &[(i64, bool)],
    traversal: Option<&[i64]>,
) -> io::Result<()> {
    for &(value, found) in results {
        if found {
            writeln!(out, "Number {value} found!")?;
        } else {
            writeln!(out, "Number {value} not found!")?;
        }
    }
    if let Some(values) = traversal {
        let values: Vec<String> = values.iter().map(i64::to_string).collect();
        writeln!(out, "In-order: {}", values.join(", "))?;
    }

    out.flush()
}
