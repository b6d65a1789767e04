//! Sociogram Core - In-memory social graph engine
//!
//! This crate provides the people registry, symmetric friendships, and the
//! graph algorithms on top of them: shortest friend paths, friend
//! suggestions, and cluster detection.

pub mod error;
pub mod graph;
pub mod limits;
pub mod network;
pub mod person;
pub mod suggest;
pub mod traversal;

pub use error::{Error, Result};
pub use graph::{Friendship, Graph};
pub use network::SocialNetwork;
pub use person::{NewPerson, Person, PersonKey, JOINED_FORMAT};
pub use suggest::Suggestion;
pub use traversal::{Cluster, FriendPath};
