//! Repository layer for the profiles domain

mod profiles;

pub use profiles::{InsertOutcome, ProfileRepository};
