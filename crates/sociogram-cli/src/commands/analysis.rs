//! Graph analysis commands: paths, suggestions, clusters, export

use std::io::Write;

use clap::Args;
use sociogram_core::{limits, Graph};

use super::friendship::PairArgs;
use crate::output::{clusters_table, path_table, suggestions_table, to_json, OutputFormat};
use crate::session::Session;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Person name
    pub name: String,
    /// Join timestamp
    pub joined: String,
    /// Maximum suggestions (defaults to the configured count)
    #[arg(short, long)]
    pub max: Option<usize>,
}

pub fn path<W: Write>(args: &PairArgs, session: &Session, out: &mut W) -> anyhow::Result<()> {
    let from = session.key(&args.name1, &args.joined1)?;
    let to = session.key(&args.name2, &args.joined2)?;

    session.require(&from)?;
    session.require(&to)?;

    tracing::info!("Finding path from {} to {}", from, to);
    let path = session.network.shortest_path(&from, &to);
    let ts_format = &session.config.timestamp_format;

    match (session.format, path) {
        (OutputFormat::Table, Some(path)) => writeln!(out, "{}", path_table(&path, ts_format))?,
        (OutputFormat::Table, None) => writeln!(
            out,
            "No path found between {} and {}",
            session.show_key(&from),
            session.show_key(&to)
        )?,
        (OutputFormat::Json, path) => writeln!(out, "{}", to_json(&path))?,
    }
    Ok(())
}

pub fn suggest<W: Write>(args: &SuggestArgs, session: &Session, out: &mut W) -> anyhow::Result<()> {
    let key = session.key(&args.name, &args.joined)?;
    let max = args.max.unwrap_or(session.config.default_suggestions);
    limits::validate_suggestion_count(max)?;

    let Some(subject) = session.network.get_person(&key) else {
        anyhow::bail!("Person not found: {}", session.show_key(&key));
    };
    let suggestions = session.network.suggest_friends(&key, max);

    match session.format {
        OutputFormat::Table => writeln!(
            out,
            "{}",
            suggestions_table(subject, &suggestions, &session.config.timestamp_format)
        )?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&suggestions))?,
    }
    Ok(())
}

pub fn clusters<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let clusters = session.network.clusters();

    match session.format {
        OutputFormat::Table => writeln!(
            out,
            "{}",
            clusters_table(&clusters, &session.config.timestamp_format)
        )?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&clusters))?,
    }
    Ok(())
}

/// Snapshot of the whole network; always JSON
pub fn export<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let graph = Graph::from(&session.network);
    tracing::info!(
        "Exporting {} people and {} friendships",
        graph.people.len(),
        graph.friendships.len()
    );
    writeln!(out, "{}", to_json(&graph))?;
    Ok(())
}
