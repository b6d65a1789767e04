//! Serializable snapshot of a social network

use crate::network::SocialNetwork;
use crate::person::{Person, PersonKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An undirected friendship, reported once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friendship {
    pub a: PersonKey,
    pub b: PersonKey,
}

/// Graph containing people and their friendships
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    pub people: Vec<Person>,
    pub friendships: Vec<Friendship>,
}

impl From<&SocialNetwork> for Graph {
    fn from(network: &SocialNetwork) -> Self {
        let mut seen: HashSet<(&PersonKey, &PersonKey)> = HashSet::new();
        let mut friendships = Vec::with_capacity(network.friendship_count());

        for (key, node) in &network.nodes {
            for friend in &node.friends {
                if seen.contains(&(friend, key)) {
                    continue;
                }
                seen.insert((key, friend));
                friendships.push(Friendship {
                    a: key.clone(),
                    b: friend.clone(),
                });
            }
        }

        Self {
            people: network.people().cloned().collect(),
            friendships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::NewPerson;
    use chrono::NaiveDate;

    #[test]
    fn test_snapshot_lists_each_friendship_once() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 29).unwrap();
        let mut net = SocialNetwork::new();
        let a = net
            .add_person(NewPerson::new("A", 20, day.and_hms_opt(1, 0, 0).unwrap()))
            .key()
            .clone();
        let b = net
            .add_person(NewPerson::new("B", 21, day.and_hms_opt(2, 0, 0).unwrap()))
            .key()
            .clone();
        let c = net
            .add_person(NewPerson::new("C", 22, day.and_hms_opt(3, 0, 0).unwrap()))
            .key()
            .clone();
        net.add_friendship(&a, &b).unwrap();
        net.add_friendship(&c, &b).unwrap();

        let graph = Graph::from(&net);
        assert_eq!(graph.people.len(), 3);
        assert_eq!(
            graph.friendships,
            vec![
                Friendship { a: a.clone(), b: b.clone() },
                Friendship { a: b, b: c },
            ]
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 29).unwrap();
        let mut net = SocialNetwork::new();
        net.add_person(
            NewPerson::new("John Doe", 25, day.and_hms_opt(10, 30, 0).unwrap())
                .with_hobby("reading"),
        );

        let json = serde_json::to_value(Graph::from(&net)).unwrap();
        assert_eq!(json["people"][0]["name"], "John Doe");
        assert_eq!(json["people"][0]["joined_at"], "2024-05-29T10:30:00");
        assert_eq!(json["people"][0]["hobbies"][0], "reading");
        assert!(json["friendships"].as_array().unwrap().is_empty());
    }
}
