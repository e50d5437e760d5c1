//! The signed-in user and the sector they are looking at.

use qiq_common::{Sector, User};
use serde::Serialize;

use crate::errors::LookupError;
use crate::fixtures::Fixtures;

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: User,
    pub sector: Sector,
}

impl Session {
    /// Resolve `user_id` against the loaded users.
    pub fn resolve(data: &Fixtures, user_id: &str, sector: Sector) -> Result<Self, LookupError> {
        let user = data
            .user(user_id.trim())
            .cloned()
            .ok_or_else(|| LookupError::UnknownUser {
                id: user_id.to_string(),
                known: data
                    .users
                    .iter()
                    .map(|u| u.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
        tracing::debug!(user = %user.name, sector = %sector, "session resolved");
        Ok(Self { user, sector })
    }

    /// "Alex Johnson (Admin, Quality Assurance)".
    pub fn describe(&self) -> String {
        format!(
            "{} ({}, {})",
            self.user.name,
            self.user.role.label(),
            self.user.department
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixtures() -> Fixtures {
        Fixtures::load(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn resolves_known_user() {
        let session = Session::resolve(&fixtures(), "1", Sector::Textile).unwrap();
        assert_eq!(session.user.name, "Alex Johnson");
        assert_eq!(session.sector, Sector::Textile);
        assert_eq!(session.describe(), "Alex Johnson (Admin, Quality Assurance)");
    }

    #[test]
    fn unknown_user_lists_valid_ids() {
        let err = Session::resolve(&fixtures(), "42", Sector::Food).unwrap_err();
        match &err {
            LookupError::UnknownUser { id, known } => {
                assert_eq!(id, "42");
                assert_eq!(known, "1, 2, 3");
            }
            _ => panic!("Expected UnknownUser"),
        }
    }
}
