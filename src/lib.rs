//! Placeholder Search library.
//!
//! Searches the posts, users and albums of a JSON placeholder API, filtering
//! whole collections locally, and serves a small web UI over the results.

pub mod auth;
pub mod components;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod history;
pub mod models;
pub mod stats;
pub mod web;
