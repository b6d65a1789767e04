//! The social network: person registry and friendship edges in one node table

use crate::error::{Error, Result};
use crate::person::{NewPerson, Person, PersonKey};
use indexmap::{IndexMap, IndexSet};

/// A registered person together with their friends.
///
/// Friend keys keep insertion order; traversal relies on it.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) person: Person,
    pub(crate) friends: IndexSet<PersonKey>,
}

impl Node {
    fn new(person: Person) -> Self {
        Self {
            person,
            friends: IndexSet::new(),
        }
    }
}

/// In-memory social graph.
///
/// Every registered person owns exactly one node, so the registry and the
/// adjacency can never drift apart. Friendship is symmetric: if `a` lists
/// `b` as a friend, `b` lists `a`. Self-loops and parallel edges are never
/// stored.
///
/// People are enumerated in the order they were first added.
#[derive(Debug, Clone, Default)]
pub struct SocialNetwork {
    pub(crate) nodes: IndexMap<PersonKey, Node>,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a person, replacing any existing person with the same key.
    ///
    /// A replaced person keeps their position in the registry but starts over
    /// with no friends; the old edges are removed from both sides.
    pub fn add_person(&mut self, new: NewPerson) -> &Person {
        let person = Person::from(new);
        let key = person.key().clone();

        if let Some(old) = self.nodes.get(&key) {
            let former: Vec<PersonKey> = old.friends.iter().cloned().collect();
            for friend in &former {
                if let Some(node) = self.nodes.get_mut(friend) {
                    node.friends.shift_remove(&key);
                }
            }
            tracing::debug!(
                "Replacing {} and dropping {} friendships",
                key,
                former.len()
            );
        }

        let entry = self.nodes.entry(key.clone());
        let node = match entry {
            indexmap::map::Entry::Occupied(mut occupied) => {
                occupied.insert(Node::new(person));
                occupied.into_mut()
            }
            indexmap::map::Entry::Vacant(vacant) => vacant.insert(Node::new(person)),
        };
        tracing::info!("Person added: {}", node.person);
        &node.person
    }

    /// Add a person stamped with the current time (whole seconds)
    pub fn add_person_now(
        &mut self,
        name: impl Into<String>,
        age: u32,
        hobbies: Vec<String>,
    ) -> &Person {
        self.add_person(NewPerson::joined_now(name, age).with_hobbies(hobbies))
    }

    /// Remove a person and every friendship they were part of.
    ///
    /// Returns `false` and changes nothing if the key is unknown.
    pub fn remove_person(&mut self, key: &PersonKey) -> bool {
        let Some(removed) = self.nodes.shift_remove(key) else {
            tracing::debug!("Person not found for removal: {}", key);
            return false;
        };

        for node in self.nodes.values_mut() {
            node.friends.shift_remove(key);
        }

        tracing::info!("Person removed: {}", removed.person);
        true
    }

    /// Look up a person by identity
    pub fn get_person(&self, key: &PersonKey) -> Option<&Person> {
        self.nodes.get(key).map(|node| &node.person)
    }

    pub fn contains(&self, key: &PersonKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// All people sharing a display name, in registry order
    pub fn find_by_name(&self, name: &str) -> Vec<&Person> {
        self.nodes
            .values()
            .filter(|node| node.person.name() == name)
            .map(|node| &node.person)
            .collect()
    }

    /// All people in registry order
    pub fn people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.nodes.values().map(|node| &node.person)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Friendships
    // ─────────────────────────────────────────────────────────────────────────

    /// Befriend two people. Adding an existing friendship is a no-op.
    pub fn add_friendship(&mut self, a: &PersonKey, b: &PersonKey) -> Result<()> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            return Err(Error::SelfFriendship(a.to_string()));
        }

        let mut added = false;
        if let Some(node) = self.nodes.get_mut(a) {
            added |= node.friends.insert(b.clone());
        }
        if let Some(node) = self.nodes.get_mut(b) {
            added |= node.friends.insert(a.clone());
        }

        if added {
            tracing::info!("Friendship added between {} and {}", a, b);
        } else {
            tracing::debug!("Friendship already present between {} and {}", a, b);
        }
        Ok(())
    }

    /// Unfriend two people.
    ///
    /// Returns whether a friendship existed; removing a missing one is not an
    /// error.
    pub fn remove_friendship(&mut self, a: &PersonKey, b: &PersonKey) -> Result<bool> {
        self.require(a)?;
        self.require(b)?;

        let mut removed = false;
        if let Some(node) = self.nodes.get_mut(a) {
            removed |= node.friends.shift_remove(b);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            removed |= node.friends.shift_remove(a);
        }

        if removed {
            tracing::info!("Friendship removed between {} and {}", a, b);
        }
        Ok(removed)
    }

    pub fn are_friends(&self, a: &PersonKey, b: &PersonKey) -> bool {
        self.nodes
            .get(a)
            .is_some_and(|node| node.friends.contains(b))
    }

    /// Direct friends of a person in the order they were befriended
    pub fn friends_of(&self, key: &PersonKey) -> Option<Vec<&Person>> {
        let node = self.nodes.get(key)?;
        Some(
            node.friends
                .iter()
                .filter_map(|friend| self.get_person(friend))
                .collect(),
        )
    }

    /// Number of undirected friendships
    pub fn friendship_count(&self) -> usize {
        self.nodes.values().map(|node| node.friends.len()).sum::<usize>() / 2
    }

    pub(crate) fn neighbors<'a>(
        &'a self,
        key: &PersonKey,
    ) -> impl Iterator<Item = &'a PersonKey> + 'a {
        self.nodes
            .get(key)
            .into_iter()
            .flat_map(|node| node.friends.iter())
    }

    fn require(&self, key: &PersonKey) -> Result<()> {
        if self.nodes.contains_key(key) {
            Ok(())
        } else {
            Err(Error::PersonNotFound(key.to_string()))
        }
    }
}
