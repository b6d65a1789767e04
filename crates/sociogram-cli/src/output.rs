//! Output formatting utilities

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sociogram_core::{Cluster, FriendPath, Person, PersonKey, Suggestion};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format: {} (expected table or json)", other),
        }
    }
}

/// Pretty JSON for any serializable result
pub fn to_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

/// Person line with the join time printed in `ts_format`
pub fn display_person(person: &Person, ts_format: &str) -> String {
    format!(
        "{} (Age: {}, Joined: {})",
        person.name(),
        person.age,
        person.joined_at().format(ts_format)
    )
}

/// `name @ joined` with the join time printed in `ts_format`
pub fn display_key(key: &PersonKey, ts_format: &str) -> String {
    format!("{} @ {}", key.name, key.joined_at.format(ts_format))
}

pub fn path_table(path: &FriendPath, ts_format: &str) -> String {
    let route: Vec<String> = path
        .people
        .iter()
        .map(|person| display_person(person, ts_format))
        .collect();
    format!(
        "Shortest path ({} hops): {}",
        path.length,
        route.join(" -> ")
    )
}

pub fn suggestions_table(
    subject: &Person,
    suggestions: &[Suggestion],
    ts_format: &str,
) -> String {
    let mut lines = vec![format!("Suggested friends for {}:", subject.name())];
    if suggestions.is_empty() {
        lines.push("  (no suggestions)".to_string());
    }
    for s in suggestions {
        lines.push(format!(
            "  {} (Score: {:.1}, mutual friends: {}, common hobbies: {})",
            display_person(&s.person, ts_format),
            s.score,
            s.mutual_friends,
            s.common_hobbies
        ));
    }
    lines.join("\n")
}

pub fn clusters_table(clusters: &[Cluster], ts_format: &str) -> String {
    let mut lines = Vec::new();
    for cluster in clusters {
        lines.push(format!("Cluster {}:", cluster.index));
        for member in &cluster.members {
            lines.push(format!("  {}", display_person(member, ts_format)));
        }
        lines.push(String::new());
    }
    lines.push(format!("Number of clusters found: {}", clusters.len()));
    lines.join("\n")
}

pub fn people_table(title: &str, people: &[&Person], ts_format: &str) -> String {
    let mut lines = vec![format!("{} ({} found):", title, people.len())];
    for person in people {
        let hobbies = if person.hobbies.is_empty() {
            String::new()
        } else {
            format!(" [{}]", person.hobbies.join(", "))
        };
        lines.push(format!("  {}{}", display_person(person, ts_format), hobbies));
    }
    lines.join("\n")
}
