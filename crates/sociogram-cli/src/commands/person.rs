//! Person commands

use std::io::Write;

use clap::Args;
use serde_json::json;
use sociogram_core::{limits, NewPerson, Person};

use crate::output::{people_table, to_json, OutputFormat};
use crate::session::Session;

/// A person's identity as typed in the shell
#[derive(Args, Debug)]
pub struct IdentityArgs {
    /// Person name
    pub name: String,
    /// Join timestamp
    pub joined: String,
}

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Name to look up
    pub name: String,
}

#[derive(Args, Debug)]
pub struct AddPersonArgs {
    /// Person name
    pub name: String,
    /// Age in years
    #[arg(short, long)]
    pub age: u32,
    /// Hobbies (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub hobbies: Vec<String>,
    /// Join timestamp (defaults to now)
    #[arg(short, long)]
    pub joined: Option<String>,
}

pub fn add<W: Write>(args: &AddPersonArgs, session: &mut Session, out: &mut W) -> anyhow::Result<()> {
    let hobbies: Vec<String> = args
        .hobbies
        .iter()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect();

    limits::validate_name(&args.name)?;
    limits::validate_age(args.age)?;
    limits::validate_hobbies(&hobbies)?;

    let person = match &args.joined {
        Some(raw) => {
            let joined_at = session.parse_timestamp(raw)?;
            session
                .network
                .add_person(NewPerson::new(&args.name, args.age, joined_at).with_hobbies(hobbies))
        }
        None => session.network.add_person_now(&args.name, args.age, hobbies),
    }
    .clone();

    match session.format {
        OutputFormat::Table => writeln!(out, "Person added: {}", session.show(&person))?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&person))?,
    }
    Ok(())
}

pub fn remove<W: Write>(args: &IdentityArgs, session: &mut Session, out: &mut W) -> anyhow::Result<()> {
    let key = session.key(&args.name, &args.joined)?;
    let removed = session.network.remove_person(&key);

    match session.format {
        OutputFormat::Table if removed => {
            writeln!(out, "Person removed: {}", session.show_key(&key))?
        }
        OutputFormat::Table => writeln!(out, "Person not found: {}", session.show_key(&key))?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&json!({ "removed": removed })))?,
    }
    Ok(())
}

pub fn list<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
    let people: Vec<&Person> = session.network.people().collect();

    match session.format {
        OutputFormat::Table if people.is_empty() => writeln!(out, "No people in the network")?,
        OutputFormat::Table => writeln!(
            out,
            "{}",
            people_table("People", &people, &session.config.timestamp_format)
        )?,
        OutputFormat::Json => writeln!(out, "{}", to_json(&people))?,
    }
    Ok(())
}

/// Everyone sharing a name, so their join timestamps can be told apart
pub fn find<W: Write>(args: &FindArgs, session: &Session, out: &mut W) -> anyhow::Result<()> {
    let people = session.network.find_by_name(&args.name);

    match session.format {
        OutputFormat::Table if people.is_empty() => {
            writeln!(out, "No one named {}", args.name)?
        }
        OutputFormat::Table => {
            let title = format!("Named {}", args.name);
            writeln!(
                out,
                "{}",
                people_table(&title, &people, &session.config.timestamp_format)
            )?
        }
        OutputFormat::Json => writeln!(out, "{}", to_json(&people))?,
    }
    Ok(())
}

pub fn friends<W: Write>(args: &IdentityArgs, session: &Session, out: &mut W) -> anyhow::Result<()> {
    let key = session.key(&args.name, &args.joined)?;
    session.require(&key)?;
    let friends = session.network.friends_of(&key).unwrap_or_default();

    match session.format {
        OutputFormat::Table => {
            let title = format!("Friends of {}", key.name);
            writeln!(
                out,
                "{}",
                people_table(&title, &friends, &session.config.timestamp_format)
            )?
        }
        OutputFormat::Json => writeln!(out, "{}", to_json(&friends))?,
    }
    Ok(())
}
