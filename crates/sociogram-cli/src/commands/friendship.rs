//! Friendship commands

use std::io::Write;

use clap::Args;
use serde_json::json;

use crate::output::{to_json, OutputFormat};
use crate::session::Session;

/// Two identities, as `<name1> <joined1> <name2> <joined2>`
#[derive(Args, Debug)]
pub struct PairArgs {
    /// First person's name
    pub name1: String,
    /// First person's join timestamp
    pub joined1: String,
    /// Second person's name
    pub name2: String,
    /// Second person's join timestamp
    pub joined2: String,
}

pub fn add<W: Write>(args: &PairArgs, session: &mut Session, out: &mut W) -> anyhow::Result<()> {
    let a = session.key(&args.name1, &args.joined1)?;
    let b = session.key(&args.name2, &args.joined2)?;
    session.require(&a)?;
    session.require(&b)?;
    if a == b {
        anyhow::bail!("A person cannot befriend themselves: {}", session.show_key(&a));
    }

    session.network.add_friendship(&a, &b)?;

    match session.format {
        OutputFormat::Table => writeln!(
            out,
            "Friendship added between {} and {}",
            session.show_key(&a),
            session.show_key(&b)
        )?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&json!({ "a": a, "b": b })))?,
    }
    Ok(())
}

pub fn remove<W: Write>(args: &PairArgs, session: &mut Session, out: &mut W) -> anyhow::Result<()> {
    let a = session.key(&args.name1, &args.joined1)?;
    let b = session.key(&args.name2, &args.joined2)?;
    session.require(&a)?;
    session.require(&b)?;

    let removed = session.network.remove_friendship(&a, &b)?;
    let (a, b) = (session.show_key(&a), session.show_key(&b));

    match session.format {
        OutputFormat::Table if removed => {
            writeln!(out, "Friendship removed between {} and {}", a, b)?
        }
        OutputFormat::Table => writeln!(out, "{} and {} were not friends", a, b)?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&json!({ "removed": removed })))?,
    }
    Ok(())
}
