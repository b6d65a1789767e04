//! Breadth-first traversal: shortest friend paths and clusters

use crate::network::SocialNetwork;
use crate::person::{Person, PersonKey};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// A chain of friends from one person to another
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendPath {
    /// People from source to target, both included
    pub people: Vec<Person>,

    /// Path length (number of friendships crossed)
    pub length: usize,
}

impl FriendPath {
    pub fn start(&self) -> Option<&Person> {
        self.people.first()
    }

    pub fn end(&self) -> Option<&Person> {
        self.people.last()
    }
}

/// A connected group of people
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// 1-based position among the clusters found
    pub index: usize,

    /// Members in breadth-first discovery order
    pub members: Vec<Person>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Counters for one BFS run, reported through `tracing`
#[derive(Debug, Clone, Default)]
pub(crate) struct TraversalStats {
    pub(crate) nodes_visited: usize,
    pub(crate) edges_traversed: usize,
    pub(crate) path_found: bool,
}

impl SocialNetwork {
    /// Shortest chain of friends from `from` to `to`.
    ///
    /// Friends are explored in the order they were befriended, so among
    /// several shortest paths the first one discovered wins. Returns `None`
    /// if either person is unknown or no chain exists. A person's path to
    /// themselves is just that person.
    pub fn shortest_path(&self, from: &PersonKey, to: &PersonKey) -> Option<FriendPath> {
        if !self.contains(from) || !self.contains(to) {
            tracing::debug!("Shortest path endpoint not found: {} -> {}", from, to);
            return None;
        }

        let mut visited: HashSet<&PersonKey> = HashSet::new();
        let mut parent: HashMap<&PersonKey, &PersonKey> = HashMap::new();
        let mut queue: VecDeque<&PersonKey> = VecDeque::new();
        let mut stats = TraversalStats::default();

        let start = self.nodes.get_key_value(from)?.0;
        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            stats.nodes_visited += 1;

            if current == to {
                stats.path_found = true;
                break;
            }

            for next in self.neighbors(current) {
                stats.edges_traversed += 1;
                if visited.insert(next) {
                    parent.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        tracing::debug!(
            "BFS {} -> {}: visited {} nodes, traversed {} edges, found: {}",
            from,
            to,
            stats.nodes_visited,
            stats.edges_traversed,
            stats.path_found
        );

        if !stats.path_found {
            return None;
        }
        Some(self.reconstruct_path(from, to, &parent))
    }

    /// Partition everyone into connected clusters.
    ///
    /// Clusters are seeded in registry order; an isolated person forms a
    /// cluster of one.
    pub fn clusters(&self) -> Vec<Cluster> {
        let mut visited: HashSet<&PersonKey> = HashSet::new();
        let mut clusters = Vec::new();

        for key in self.nodes.keys() {
            if visited.contains(key) {
                continue;
            }
            let members = self.bfs_collect(key, &mut visited);
            clusters.push(Cluster {
                index: clusters.len() + 1,
                members,
            });
        }

        tracing::debug!("Found {} clusters among {} people", clusters.len(), self.len());
        clusters
    }

    /// Number of connected clusters
    pub fn cluster_count(&self) -> usize {
        self.clusters().len()
    }

    /// BFS without a target, marking everything reachable from `start`
    fn bfs_collect<'a>(
        &'a self,
        start: &'a PersonKey,
        visited: &mut HashSet<&'a PersonKey>,
    ) -> Vec<Person> {
        let mut queue: VecDeque<&PersonKey> = VecDeque::new();
        let mut members = Vec::new();

        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            if let Some(person) = self.get_person(current) {
                members.push(person.clone());
            }
            for next in self.neighbors(current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        members
    }

    /// Reconstruct path from parent map
    fn reconstruct_path(
        &self,
        start: &PersonKey,
        end: &PersonKey,
        parent: &HashMap<&PersonKey, &PersonKey>,
    ) -> FriendPath {
        let mut keys = vec![end];
        let mut current = end;

        while current != start {
            match parent.get(current) {
                Some(&prev) => {
                    keys.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        keys.reverse();

        let people: Vec<Person> = keys
            .into_iter()
            .filter_map(|key| self.get_person(key).cloned())
            .collect();

        FriendPath {
            length: people.len().saturating_sub(1),
            people,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::NewPerson;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 29)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn names(people: &[Person]) -> Vec<&str> {
        people.iter().map(Person::name).collect()
    }

    /// John, Jane, Alice, Bob with John–Jane, John–Bob, Jane–Alice, Alice–Bob
    fn create_square() -> (SocialNetwork, [PersonKey; 4]) {
        let mut net = SocialNetwork::new();
        let john = net
            .add_person(NewPerson::new("John", 25, ts(10, 30)))
            .key()
            .clone();
        let jane = net
            .add_person(NewPerson::new("Jane", 30, ts(14, 45)))
            .key()
            .clone();
        let alice = net
            .add_person(NewPerson::new("Alice", 28, ts(9, 15)))
            .key()
            .clone();
        let bob = net
            .add_person(NewPerson::new("Bob", 35, ts(11, 0)))
            .key()
            .clone();

        net.add_friendship(&john, &jane).unwrap();
        net.add_friendship(&john, &bob).unwrap();
        net.add_friendship(&jane, &alice).unwrap();
        net.add_friendship(&alice, &bob).unwrap();

        (net, [john, jane, alice, bob])
    }

    #[test]
    fn test_bfs_shortest_path() {
        let (net, [john, _, alice, _]) = create_square();
        let path = net.shortest_path(&john, &alice).unwrap();

        // Jane was befriended before Bob, so her branch is found first
        assert_eq!(names(&path.people), vec!["John", "Jane", "Alice"]);
        assert_eq!(path.length, 2);
        assert_eq!(path.start().map(Person::key), Some(&john));
        assert_eq!(path.end().map(Person::key), Some(&alice));
    }

    #[test]
    fn test_empty_path_has_no_endpoints() {
        let path = FriendPath {
            people: Vec::new(),
            length: 0,
        };
        assert!(path.start().is_none());
        assert!(path.end().is_none());
    }

    #[test]
    fn test_path_to_self() {
        let (net, [john, ..]) = create_square();
        let path = net.shortest_path(&john, &john).unwrap();

        assert_eq!(names(&path.people), vec!["John"]);
        assert_eq!(path.length, 0);
    }

    #[test]
    fn test_no_path_found() {
        let (mut net, [john, ..]) = create_square();
        let loner = net
            .add_person(NewPerson::new("Frank", 40, ts(7, 30)))
            .key()
            .clone();

        assert!(net.shortest_path(&john, &loner).is_none());
        assert!(net
            .shortest_path(&john, &PersonKey::new("Nobody", ts(1, 0)))
            .is_none());
    }

    #[test]
    fn test_cluster_scenario() {
        let (mut net, [john, jane, alice, bob]) = create_square();
        assert_eq!(net.cluster_count(), 1);

        net.remove_friendship(&john, &bob).unwrap();
        let clusters = net.clusters();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 4);
        assert_eq!(names(&clusters[0].members), vec!["John", "Jane", "Alice", "Bob"]);

        net.remove_person(&jane);
        net.remove_person(&bob);
        let clusters = net.clusters();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].index, 1);
        assert_eq!(names(&clusters[0].members), vec!["John"]);
        assert_eq!(clusters[1].index, 2);
        assert_eq!(names(&clusters[1].members), vec!["Alice"]);
        assert!(net.shortest_path(&john, &alice).is_none());
    }

    #[test]
    fn test_clusters_follow_registry_order() {
        let mut net = SocialNetwork::new();
        let a = net.add_person(NewPerson::new("A", 1, ts(1, 0))).key().clone();
        let b = net.add_person(NewPerson::new("B", 1, ts(2, 0))).key().clone();
        let c = net.add_person(NewPerson::new("C", 1, ts(3, 0))).key().clone();
        net.add_friendship(&c, &a).unwrap();

        let clusters = net.clusters();
        assert_eq!(clusters.len(), 2);
        assert_eq!(names(&clusters[0].members), vec!["A", "C"]);
        assert_eq!(clusters[1].members[0].key(), &b);
    }

    #[test]
    fn test_empty_network_has_no_clusters() {
        let net = SocialNetwork::new();
        assert!(net.clusters().is_empty());
        assert_eq!(net.cluster_count(), 0);
    }
}
