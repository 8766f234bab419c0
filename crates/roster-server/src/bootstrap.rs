//! Schema creation and seeding of example users.

use roster_config::SeedUser;
use roster_core::{NewUser, RosterError, RosterResult};
use roster_repository::{DatabasePool, UserRepository};
use tracing::{debug, info, warn};

/// Inserts every seed user whose email is not stored yet.
///
/// Returns the number of users inserted. Running it twice inserts nothing the
/// second time. A seed whose name is already taken, for example after its
/// email was edited, is skipped.
pub async fn seed_users<R>(repository: &R, users: &[SeedUser]) -> RosterResult<usize>
where
    R: UserRepository + ?Sized,
{
    let mut inserted = 0;

    for seed in users {
        if repository.exists_by_email(&seed.email).await? {
            debug!("Seed user already present: {}", seed.email);
            continue;
        }

        match repository
            .save(&NewUser::new(seed.name.clone(), seed.email.clone()))
            .await
        {
            Ok(user) => {
                info!("Seeded user {} <{}> as {}", user.name, user.email, user.id);
                inserted += 1;
            }
            Err(RosterError::Conflict(reason)) => {
                warn!("Skipping seed user {} <{}>: {}", seed.name, seed.email, reason);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(inserted)
}

/// Creates the schema and seeds the given users.
pub async fn bootstrap_database<R>(
    pool: &DatabasePool,
    repository: &R,
    users: &[SeedUser],
) -> RosterResult<usize>
where
    R: UserRepository + ?Sized,
{
    pool.ensure_schema().await?;
    let inserted = seed_users(repository, users).await?;
    info!("Database bootstrap complete ({} users inserted)", inserted);
    Ok(inserted)
}
