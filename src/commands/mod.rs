//! Command implementations for the Sleeper Fantasy Football CLI

pub mod common;
pub mod highest_scorers;
pub mod league_data;
pub mod trending;
pub mod update_players;
pub mod user_data;

use crate::{SleeperError, Result, UserId, USER_ID_ENV_VAR};

/// Resolve the acting user id from the CLI argument or the environment.
pub fn resolve_user_id(user_id: Option<UserId>) -> Result<UserId> {
    user_id
        .or_else(|| std::env::var(USER_ID_ENV_VAR).ok().map(UserId::new))
        .ok_or_else(|| SleeperError::MissingUserId {
            env_var: USER_ID_ENV_VAR.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers all three resolution paths: the env var is process
    // global, so separate tests would race under the parallel runner.
    #[test]
    fn test_resolve_user_id_resolution_order() {
        std::env::set_var(USER_ID_ENV_VAR, "env_user");
        let resolved = resolve_user_id(Some(UserId::new("arg_user"))).unwrap();
        assert_eq!(resolved.as_str(), "arg_user");

        let resolved = resolve_user_id(None).unwrap();
        assert_eq!(resolved.as_str(), "env_user");

        std::env::remove_var(USER_ID_ENV_VAR);
        let err = resolve_user_id(None).unwrap_err();
        assert!(matches!(err, SleeperError::MissingUserId { .. }));
    }
}
