//! Person (node) types

use chrono::{DateTime, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format used for join timestamps
pub const JOINED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Composite identity of a person: display name plus the moment they joined.
///
/// Two people may share a name; the join timestamp tells them apart.
/// Ordering is by name first, then join time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonKey {
    pub name: String,
    pub joined_at: NaiveDateTime,
}

impl PersonKey {
    pub fn new(name: impl Into<String>, joined_at: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            joined_at,
        }
    }
}

impl fmt::Display for PersonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.joined_at.format(JOINED_FORMAT))
    }
}

/// A member of the social network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Identity (immutable once created)
    #[serde(flatten)]
    key: PersonKey,

    pub age: u32,

    /// Hobbies in the order given; duplicates are kept
    pub hobbies: Vec<String>,
}

impl Person {
    pub fn new(key: PersonKey, age: u32, hobbies: Vec<String>) -> Self {
        Self { key, age, hobbies }
    }

    pub fn key(&self) -> &PersonKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn joined_at(&self) -> NaiveDateTime {
        self.key.joined_at
    }

    /// Number of this person's hobbies that `other` also lists.
    ///
    /// Each entry of `self.hobbies` counts once if `other` has it at all, so
    /// repeats on this side count every time and the result is not
    /// symmetric.
    pub fn common_hobbies(&self, other: &Person) -> usize {
        self.hobbies
            .iter()
            .filter(|hobby| other.hobbies.contains(*hobby))
            .count()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Person {}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Age: {}, Joined: {})",
            self.key.name,
            self.age,
            self.key.joined_at.format(JOINED_FORMAT)
        )
    }
}

/// Data for creating a new person
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub hobbies: Vec<String>,
    pub joined_at: NaiveDateTime,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, age: u32, joined_at: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            age,
            hobbies: Vec::new(),
            joined_at,
        }
    }

    /// Stamp with the current local time, truncated to whole seconds
    pub fn joined_now(name: impl Into<String>, age: u32) -> Self {
        Self::new(name, age, now_truncated(Local::now()))
    }

    pub fn with_hobby(mut self, hobby: impl Into<String>) -> Self {
        self.hobbies.push(hobby.into());
        self
    }

    pub fn with_hobbies<I, S>(mut self, hobbies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hobbies.extend(hobbies.into_iter().map(Into::into));
        self
    }

    pub fn key(&self) -> PersonKey {
        PersonKey::new(self.name.clone(), self.joined_at)
    }
}

impl From<NewPerson> for Person {
    fn from(new: NewPerson) -> Self {
        Person::new(PersonKey::new(new.name, new.joined_at), new.age, new.hobbies)
    }
}

fn now_truncated(now: DateTime<Local>) -> NaiveDateTime {
    let naive = now.naive_local();
    naive.with_nanosecond(0).unwrap_or(naive)
}
