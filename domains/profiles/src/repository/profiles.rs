//! Profile repository
//!
//! Runtime queries against PostgreSQL. The store's uniqueness constraints
//! are the only concurrency control: violations come back as tagged
//! outcomes for callers to branch on, never as raw database errors.

use sqlx::PgPool;

use crate::domain::entities::{placeholder_username, Profile, DEFAULT_ROLE};
use crate::domain::validation::validate_username;
use crate::error::ProfileError;

/// Primary-key constraint on `subject_id`
const SUBJECT_CONSTRAINT: &str = "profiles_pkey";

/// Unique constraint on `username`
const USERNAME_CONSTRAINT: &str = "profiles_username_key";

/// Upper bound on placeholder re-derivations before first access fails
const MAX_PLACEHOLDER_ATTEMPTS: u32 = 8;

/// Outcome of inserting a new profile row.
///
/// Both conflict variants are expected states, not faults: a concurrent
/// first access races the insert, and a placeholder name can collide with
/// an existing profile.
#[derive(Debug)]
pub enum InsertOutcome {
    Created(Profile),
    SubjectExists,
    UsernameTaken,
}

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get profile by subject id
    pub async fn find(&self, subject_id: &str) -> Result<Option<Profile>, ProfileError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT subject_id, username, role, created_at
            FROM profiles
            WHERE subject_id = $1
            "#,
        )
        .bind(subject_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Insert a new profile row, reporting constraint violations as
    /// tagged outcomes.
    pub async fn insert(
        &self,
        subject_id: &str,
        username: &str,
    ) -> Result<InsertOutcome, ProfileError> {
        let inserted = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (subject_id, username, role)
            VALUES ($1, $2, $3)
            RETURNING subject_id, username, role, created_at
            "#,
        )
        .bind(subject_id)
        .bind(username)
        .bind(DEFAULT_ROLE)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(profile) => Ok(InsertOutcome::Created(profile)),
            Err(sqlx::Error::Database(db_err)) => match db_err.constraint() {
                Some(SUBJECT_CONSTRAINT) => Ok(InsertOutcome::SubjectExists),
                Some(USERNAME_CONSTRAINT) => Ok(InsertOutcome::UsernameTaken),
                _ => Err(sqlx::Error::Database(db_err).into()),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the profile for `subject_id`, creating it with a placeholder
    /// display name on first access.
    ///
    /// Safe under concurrent first access: a `SubjectExists` outcome means
    /// another request won the race, so the winner's row is re-read and
    /// returned. A `UsernameTaken` outcome retries with the next derived
    /// placeholder.
    pub async fn get_or_create(&self, subject_id: &str) -> Result<Profile, ProfileError> {
        if let Some(profile) = self.find(subject_id).await? {
            return Ok(profile);
        }

        for attempt in 0..MAX_PLACEHOLDER_ATTEMPTS {
            let username = placeholder_username(subject_id, attempt);
            match self.insert(subject_id, &username).await? {
                InsertOutcome::Created(profile) => {
                    tracing::info!(
                        subject_id,
                        username = %profile.username,
                        "created profile on first access"
                    );
                    return Ok(profile);
                }
                InsertOutcome::SubjectExists => {
                    if let Some(profile) = self.find(subject_id).await? {
                        return Ok(profile);
                    }
                    // Conflicting transaction not yet visible; retry.
                }
                InsertOutcome::UsernameTaken => {
                    tracing::warn!(
                        subject_id,
                        username = %username,
                        attempt,
                        "placeholder display name collision"
                    );
                }
            }
        }

        Err(ProfileError::PlaceholderExhausted)
    }

    /// Rename the profile owned by `subject_id`.
    ///
    /// Validates the new name before any store interaction. Renaming a
    /// profile to the name it already owns is a no-op success; a name held
    /// by a different profile is a conflict.
    pub async fn update_username(
        &self,
        subject_id: &str,
        username: &str,
    ) -> Result<Profile, ProfileError> {
        if !validate_username(username) {
            return Err(ProfileError::InvalidDisplayName);
        }

        let updated = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET username = $2
            WHERE subject_id = $1
            RETURNING subject_id, username, role, created_at
            "#,
        )
        .bind(subject_id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await;

        match updated {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(ProfileError::NotFound),
            Err(sqlx::Error::Database(db_err))
                if db_err.constraint() == Some(USERNAME_CONSTRAINT) =>
            {
                Err(ProfileError::DisplayNameTaken)
            }
            Err(e) => Err(e.into()),
        }
    }
}
