//! DTOs for the people service JSON bodies.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! records in one pass. String fields default to empty so a sparse entry still
//! decodes.

use serde::{Deserialize, Serialize};

use crate::domain::{UserRecord, UserRecordId};

#[derive(Debug, Serialize)]
pub(super) struct LoginRequestDto<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginResponseDto {
    #[serde(default)]
    pub(super) token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    #[serde(default)]
    pub(super) first_name: String,
    #[serde(default)]
    pub(super) last_name: String,
    #[serde(default)]
    pub(super) email: String,
    #[serde(default)]
    pub(super) avatar: String,
}

impl UserDto {
    pub(super) fn into_domain(self) -> UserRecord {
        UserRecord::new(
            UserRecordId::new(self.id),
            self.first_name,
            self.last_name,
            self.email,
            self.avatar,
        )
    }
}

impl LoginResponseDto {
    pub(super) fn into_token(self) -> Result<String, String> {
        match self.token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err("login response did not include a token".to_owned()),
        }
    }
}
