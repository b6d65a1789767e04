//! Friend suggestions scored by mutual friends and shared hobbies

use crate::network::SocialNetwork;
use crate::person::{Person, PersonKey};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Weight of one mutual friend in a suggestion score
pub const MUTUAL_FRIEND_WEIGHT: f64 = 1.0;

/// Weight of one shared hobby in a suggestion score
pub const COMMON_HOBBY_WEIGHT: f64 = 0.5;

/// A suggested new friend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub person: Person,
    pub score: f64,
    pub mutual_friends: usize,
    pub common_hobbies: usize,
}

impl Suggestion {
    fn score(mutual_friends: usize, common_hobbies: usize) -> f64 {
        mutual_friends as f64 * MUTUAL_FRIEND_WEIGHT
            + common_hobbies as f64 * COMMON_HOBBY_WEIGHT
    }

    /// Highest score first, then by identity
    fn rank(a: &Suggestion, b: &Suggestion) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.person.key().cmp(b.person.key()))
    }
}

impl SocialNetwork {
    /// Suggest up to `max` people the subject is not yet friends with.
    ///
    /// Each candidate scores one point per mutual friend and half a point per
    /// shared hobby. Candidates scoring zero are left out. Equal scores are
    /// ordered by name, then join time. Unknown subjects get no suggestions.
    pub fn suggest_friends(&self, key: &PersonKey, max: usize) -> Vec<Suggestion> {
        let Some(subject) = self.nodes.get(key) else {
            tracing::debug!("Suggestion subject not found: {}", key);
            return Vec::new();
        };

        let mut suggestions: Vec<Suggestion> = self
            .nodes
            .iter()
            .filter(|(candidate, _)| *candidate != key && !subject.friends.contains(*candidate))
            .filter_map(|(_, node)| {
                let mutual_friends = subject
                    .friends
                    .iter()
                    .filter(|friend| node.friends.contains(*friend))
                    .count();
                let common_hobbies = subject.person.common_hobbies(&node.person);
                let score = Suggestion::score(mutual_friends, common_hobbies);

                (score > 0.0).then(|| Suggestion {
                    person: node.person.clone(),
                    score,
                    mutual_friends,
                    common_hobbies,
                })
            })
            .collect();

        suggestions.sort_by(Suggestion::rank);
        suggestions.truncate(max);

        tracing::debug!(
            "Suggesting {} friends for {} (max {})",
            suggestions.len(),
            key,
            max
        );
        suggestions
    }
}
