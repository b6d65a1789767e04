//! Shell session state: the network plus the settings used to talk about it

use anyhow::Context;
use chrono::NaiveDateTime;
use sociogram_core::{Person, PersonKey, SocialNetwork};

use crate::config::Config;
use crate::output::{display_key, display_person, OutputFormat};

/// Everything a shell command can read or change.
///
/// The network lives only as long as the session.
pub struct Session {
    pub network: SocialNetwork,
    pub config: Config,
    pub format: OutputFormat,
}

impl Session {
    pub fn new(config: Config, format: OutputFormat) -> Self {
        Self {
            network: SocialNetwork::new(),
            config,
            format,
        }
    }

    pub fn parse_timestamp(&self, raw: &str) -> anyhow::Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw.trim(), &self.config.timestamp_format).with_context(
            || {
                format!(
                    "Invalid timestamp {:?}, expected format {}",
                    raw, self.config.timestamp_format
                )
            },
        )
    }

    /// Build an identity from a name and a raw timestamp
    pub fn key(&self, name: &str, joined: &str) -> anyhow::Result<PersonKey> {
        Ok(PersonKey::new(name, self.parse_timestamp(joined)?))
    }

    /// A person as the shell prints them, in the configured timestamp format
    pub fn show(&self, person: &Person) -> String {
        display_person(person, &self.config.timestamp_format)
    }

    pub fn show_key(&self, key: &PersonKey) -> String {
        display_key(key, &self.config.timestamp_format)
    }

    /// Fail with a printable message unless `key` is registered
    pub fn require(&self, key: &PersonKey) -> anyhow::Result<()> {
        if !self.network.contains(key) {
            anyhow::bail!("Person not found: {}", self.show_key(key));
        }
        Ok(())
    }
}
