//! Interactive shell: one command per line against an in-memory network

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::analysis::{self, SuggestArgs};
use super::friendship::{self, PairArgs};
use super::person::{self, AddPersonArgs, FindArgs, IdentityArgs};
use crate::config::Config;
use crate::session::Session;
use crate::Cli;

#[derive(Args, Debug, Default)]
pub struct ShellArgs {
    /// Read commands from a file instead of stdin
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(
    name = "sociogram",
    no_binary_name = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Add a person to the network
    AddPerson(AddPersonArgs),
    /// Remove a person and all their friendships
    RemovePerson(IdentityArgs),
    /// Make two people friends
    AddFriendship(PairArgs),
    /// End a friendship
    RemoveFriendship(PairArgs),
    /// Find the shortest chain of friends between two people
    Path(PairArgs),
    /// Suggest new friends for a person
    Suggest(SuggestArgs),
    /// List connected clusters
    Clusters,
    /// List a person's friends
    Friends(IdentityArgs),
    /// List everyone in the network
    List,
    /// List everyone with a given name
    Find(FindArgs),
    /// Print the whole network as JSON
    Export,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Whether the shell should keep reading
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run(args: &ShellArgs, cli: &Cli, config: Config) -> anyhow::Result<()> {
    let format = cli.format.unwrap_or(config.format);
    let mut session = Session::new(config, format);
    let mut out = io::stdout().lock();

    match &args.file {
        Some(path) => {
            tracing::info!("Running commands from {:?}", path);
            let reader = BufReader::new(File::open(path)?);
            drive(reader, &mut session, &mut out, false)
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                writeln!(out, "Sociogram shell. Type 'help' for commands, 'exit' to quit.")?;
            }
            drive(stdin.lock(), &mut session, &mut out, interactive)
        }
    }
}

/// Feed every line of `input` to the session until it ends or asks to exit
pub fn drive<R: BufRead, W: Write>(
    input: R,
    session: &mut Session,
    out: &mut W,
    prompt: bool,
) -> anyhow::Result<()> {
    if prompt {
        write!(out, "sociogram> ")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        match execute(&line, session, out) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => {
                tracing::debug!("Command failed: {:#}", err);
                writeln!(out, "Error: {:#}", err)?;
            }
        }
        if prompt {
            write!(out, "sociogram> ")?;
            out.flush()?;
        }
    }

    tracing::debug!("Shell finished with {} people", session.network.len());
    Ok(())
}

/// Run a single shell line
pub fn execute<W: Write>(line: &str, session: &mut Session, out: &mut W) -> anyhow::Result<Flow> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(Flow::Continue);
    }

    let tokens = tokenize(trimmed)?;
    let parsed = match ShellLine::try_parse_from(tokens) {
        Ok(parsed) => parsed,
        Err(err) => {
            // help output and usage errors alike are shown, never fatal
            write!(out, "{}", err)?;
            return Ok(Flow::Continue);
        }
    };

    match &parsed.command {
        ShellCommand::AddPerson(args) => person::add(args, session, out)?,
        ShellCommand::RemovePerson(args) => person::remove(args, session, out)?,
        ShellCommand::AddFriendship(args) => friendship::add(args, session, out)?,
        ShellCommand::RemoveFriendship(args) => friendship::remove(args, session, out)?,
        ShellCommand::Path(args) => analysis::path(args, session, out)?,
        ShellCommand::Suggest(args) => analysis::suggest(args, session, out)?,
        ShellCommand::Clusters => analysis::clusters(session, out)?,
        ShellCommand::Friends(args) => person::friends(args, session, out)?,
        ShellCommand::List => person::list(session, out)?,
        ShellCommand::Find(args) => person::find(args, session, out)?,
        ShellCommand::Export => analysis::export(session, out)?,
        ShellCommand::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Split a line into words, keeping quoted text together.
///
/// Double and single quotes group words; a backslash outside single quotes
/// escapes the next character.
fn tokenize(line: &str) -> anyhow::Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_token = true;
                }
                None => anyhow::bail!("Trailing backslash"),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_token = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        anyhow::bail!("Unterminated {} quote", q);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn session() -> Session {
        Session::new(Config::default(), OutputFormat::Table)
    }

    fn run_lines(session: &mut Session, lines: &[&str]) -> String {
        let mut out = Vec::new();
        let input = lines.join("\n");
        drive(input.as_bytes(), session, &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize(r#"path "John Doe" '2024-05-29 10:30:00' Jane\ Smith x"#).unwrap(),
            vec!["path", "John Doe", "2024-05-29 10:30:00", "Jane Smith", "x"]
        );
        assert_eq!(tokenize(r#"a "" b"#).unwrap(), vec!["a", "", "b"]);
        assert_eq!(tokenize("  spaced   out ").unwrap(), vec!["spaced", "out"]);
        assert!(tokenize(r#"add-person "John"#).is_err());
    }

    #[test]
    fn test_blank_and_comment_lines_are_ignored() {
        let mut session = session();
        let mut out = Vec::new();
        assert_eq!(execute("", &mut session, &mut out).unwrap(), Flow::Continue);
        assert_eq!(
            execute("# a comment", &mut session, &mut out).unwrap(),
            Flow::Continue
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_exit_stops_reading() {
        let mut session = session();
        let output = run_lines(
            &mut session,
            &[
                "add-person A --age 20 --joined '2024-01-01 00:00:00'",
                "exit",
                "add-person B --age 20 --joined '2024-01-01 00:00:00'",
            ],
        );

        assert!(output.contains("Person added: A"));
        assert_eq!(session.network.len(), 1);
    }

    #[test]
    fn test_demo_session() {
        let mut session = session();
        let output = run_lines(
            &mut session,
            &[
                r#"add-person "John Doe" --age 25 --hobbies reading,hiking,cooking --joined "2024-05-29 10:30:00""#,
                r#"add-person "Jane Smith" --age 30 --hobbies "running, reading" --joined "2024-05-28 14:45:00""#,
                r#"add-person "Alice Johnson" --age 28 --hobbies painting,cooking --joined "2024-05-27 09:15:00""#,
                r#"add-person "Bob Brown" --age 35 --hobbies hiking,painting --joined "2024-05-29 11:00:00""#,
                r#"add-friendship "John Doe" "2024-05-29 10:30:00" "Jane Smith" "2024-05-28 14:45:00""#,
                r#"add-friendship "John Doe" "2024-05-29 10:30:00" "Bob Brown" "2024-05-29 11:00:00""#,
                r#"add-friendship "Jane Smith" "2024-05-28 14:45:00" "Alice Johnson" "2024-05-27 09:15:00""#,
                r#"add-friendship "Alice Johnson" "2024-05-27 09:15:00" "Bob Brown" "2024-05-29 11:00:00""#,
                r#"path "John Doe" "2024-05-29 10:30:00" "Alice Johnson" "2024-05-27 09:15:00""#,
                r#"suggest "John Doe" "2024-05-29 10:30:00" --max 3"#,
                "clusters",
            ],
        );

        assert!(output.contains("Shortest path (2 hops): John Doe"));
        assert!(output.contains("-> Jane Smith (Age: 30, Joined: 2024-05-28 14:45:00) -> Alice Johnson"));
        assert!(output.contains("Suggested friends for John Doe:"));
        assert!(output.contains("Alice Johnson (Age: 28, Joined: 2024-05-27 09:15:00) (Score: 2.5"));
        assert!(output.contains("Number of clusters found: 1"));

        let jane = session.key("Jane Smith", "2024-05-28 14:45:00").unwrap();
        assert_eq!(
            session.network.get_person(&jane).unwrap().hobbies,
            vec!["running", "reading"]
        );
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let mut session = session();
        let output = run_lines(
            &mut session,
            &[
                "add-person A --age 20 --joined 'not a date'",
                "add-friendship A '2024-01-01 00:00:00' B '2024-01-01 00:00:00'",
                "frobnicate",
                "add-person A --age 20 --joined '2024-01-01 00:00:00'",
            ],
        );

        assert!(output.contains("Error: Invalid timestamp"));
        assert!(output.contains("Error: Person not found: A @ 2024-01-01 00:00:00"));
        assert!(output.contains("Person added: A"));
        assert_eq!(session.network.len(), 1);
    }

    #[test]
    fn test_unknown_person_messages() {
        let mut session = session();
        let output = run_lines(
            &mut session,
            &[
                "remove-person Ghost '2024-01-01 00:00:00'",
                "suggest Ghost '2024-01-01 00:00:00'",
            ],
        );

        assert!(output.contains("Person not found: Ghost @ 2024-01-01 00:00:00"));
        assert!(output.contains("Error: Person not found: Ghost"));
    }

    #[test]
    fn test_find_lists_namesakes() {
        let mut session = session();
        let output = run_lines(
            &mut session,
            &[
                "add-person Sam --age 20 --joined '2024-01-01 00:00:00'",
                "add-person Sam --age 40 --joined '2024-02-01 00:00:00'",
                "add-person Kim --age 30 --joined '2024-03-01 00:00:00'",
                "find Sam",
                "find Nobody",
            ],
        );

        assert!(output.contains("Named Sam (2 found):"));
        assert!(output.contains("Sam (Age: 40, Joined: 2024-02-01 00:00:00)"));
        assert!(output.contains("No one named Nobody"));
    }

    #[test]
    fn test_custom_timestamp_format_is_used_for_output() {
        let mut config = Config::default();
        config.set("timestamp_format", "%d/%m/%Y %H:%M:%S").unwrap();
        let mut session = Session::new(config, OutputFormat::Table);
        let output = run_lines(
            &mut session,
            &[
                "add-person A --age 20 --joined '29/05/2024 10:30:00'",
                "add-person B --age 21 --joined '30/05/2024 08:00:00'",
                "list",
                "path A '29/05/2024 10:30:00' B '30/05/2024 08:00:00'",
                "add-friendship A '29/05/2024 10:30:00' C '01/06/2024 00:00:00'",
                "remove-person C '01/06/2024 00:00:00'",
            ],
        );

        assert!(output.contains("Person added: A (Age: 20, Joined: 29/05/2024 10:30:00)"));
        assert!(output.contains("  B (Age: 21, Joined: 30/05/2024 08:00:00)"));
        assert!(output.contains(
            "No path found between A @ 29/05/2024 10:30:00 and B @ 30/05/2024 08:00:00"
        ));
        assert!(output.contains("Error: Person not found: C @ 01/06/2024 00:00:00"));
        assert!(output.contains("Person not found: C @ 01/06/2024 00:00:00"));
        assert!(!output.contains("2024-05-29"));

        // whatever the shell prints can be typed back in
        let output = run_lines(&mut session, &["friends A '29/05/2024 10:30:00'"]);
        assert!(output.contains("Friends of A (0 found):"));
    }

    #[test]
    fn test_input_limits_are_reported() {
        let mut session = session();
        let output = run_lines(
            &mut session,
            &[
                "add-person '' --age 20 --joined '2024-01-01 00:00:00'",
                "add-person Old --age 200 --joined '2024-01-01 00:00:00'",
                "add-person A --age 20 --joined '2024-01-01 00:00:00'",
                "suggest A '2024-01-01 00:00:00' --max 0",
                "add-friendship A '2024-01-01 00:00:00' A '2024-01-01 00:00:00'",
            ],
        );

        assert!(output.contains("Error: Name cannot be empty"));
        assert!(output.contains("Error: Age too large: 200 (max 150)"));
        assert!(output.contains("Error: Suggestion count must be positive"));
        assert!(output.contains("Error: A person cannot befriend themselves: A @ 2024-01-01 00:00:00"));
        assert_eq!(session.network.len(), 1);
    }

    #[test]
    fn test_json_output() {
        let mut session = Session::new(Config::default(), OutputFormat::Json);
        let output = run_lines(
            &mut session,
            &[
                "add-person A --age 20 --joined '2024-01-01 00:00:00'",
                "add-person B --age 21 --joined '2024-01-01 00:00:00'",
                "path A '2024-01-01 00:00:00' B '2024-01-01 00:00:00'",
            ],
        );

        assert!(output.contains("\"name\": \"A\""));
        assert!(output.trim_end().ends_with("null"));
    }
}
