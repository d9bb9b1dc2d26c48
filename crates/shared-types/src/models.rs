use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account category governing which dashboard and navigation set a session
/// may access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Business,
    Freelancer,
    Employee,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Business, Role::Freelancer, Role::Employee];

    /// Lowercase key used in paths and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Business => "business",
            Role::Freelancer => "freelancer",
            Role::Employee => "employee",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Business => "Business",
            Role::Freelancer => "Freelancer",
            Role::Employee => "Employee",
        }
    }

    /// Root of this role's dashboard area, e.g. `/freelancer`.
    pub fn home_path(&self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "business" => Ok(Role::Business),
            "freelancer" => Ok(Role::Freelancer),
            "employee" => Ok(Role::Employee),
            other => Err(AppError::field("role", format!("Unknown role '{other}'"))),
        }
    }
}

/// The locally held record of the current authenticated identity.
///
/// Serialized as-is into device storage; the field set is the storage
/// format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: String,
}

impl Session {
    /// Build a session client-side from an email and role.
    ///
    /// There is no identity authority behind this; the id is a fresh v4 UUID
    /// and the display fields are derived from the email.
    pub fn fabricate(email: &str, role: Role) -> Self {
        let email = email.trim().to_string();
        let name = name_from_email(&email);
        let avatar = avatar_url(&name);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            name,
            role,
            avatar,
        }
    }

    /// Initials shown in the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }

    /// Shallow-merge a partial update into this session.
    ///
    /// Every present field replaces the current value. A role different
    /// from the current one, or a present field that is blank, is rejected
    /// and nothing is merged.
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), AppError> {
        if let Some(role) = update.role {
            if role != self.role {
                return Err(AppError::field("role", "Role cannot be changed"));
            }
        }
        let name = required("name", "Name is required", update.name)?;
        let email = required("email", "Email is required", update.email)?;
        let avatar = required("avatar", "Avatar is required", update.avatar)?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
        Ok(())
    }
}

/// Trim a present field, failing when nothing is left.
fn required(field: &str, message: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Err(AppError::field(field, message)),
        other => Ok(other),
    }
}

/// Partial set of session fields accepted by a profile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl ProfileUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Derive a display name from the local part of an email.
///
/// `jane.doe@example.com` becomes `Jane Doe`. `.`, `_`, `-` and `+` split
/// words. An empty local part yields `User`.
pub fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let words: Vec<String> = local
        .split(['.', '_', '-', '+'])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() {
        "User".to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generated avatar image for a display name.
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Session {
        Session {
            id: "3f6c".into(),
            email: "jane.doe@example.com".into(),
            name: "Jane Doe".into(),
            role: Role::Business,
            avatar: avatar_url("Jane Doe"),
        }
    }

    #[test]
    fn role_parses_every_key() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn role_rejects_unknown_and_uppercase_keys() {
        assert!("manager".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Freelancer).unwrap(), "\"freelancer\"");
    }

    #[test]
    fn home_path_is_role_root() {
        assert_eq!(Role::Employee.home_path(), "/employee");
    }

    #[test]
    fn name_is_derived_from_local_part() {
        assert_eq!(name_from_email("jane.doe@example.com"), "Jane Doe");
        assert_eq!(name_from_email("a@b.com"), "A");
        assert_eq!(name_from_email("sam_o-neil+work@x.io"), "Sam O Neil Work");
        assert_eq!(name_from_email("noatsign"), "Noatsign");
        assert_eq!(name_from_email("@example.com"), "User");
    }

    #[test]
    fn avatar_url_encodes_name() {
        assert_eq!(
            avatar_url("Jane Doe"),
            "https://ui-avatars.com/api/?name=Jane%20Doe&background=random"
        );
    }

    #[test]
    fn fabricate_fills_every_field() {
        let session = Session::fabricate("  a@b.com ", Role::Freelancer);
        assert_eq!(session.email, "a@b.com");
        assert_eq!(session.name, "A");
        assert_eq!(session.role, Role::Freelancer);
        assert_eq!(session.avatar, avatar_url("A"));
        assert!(uuid::Uuid::parse_str(&session.id).is_ok());
    }

    #[test]
    fn fabricated_ids_differ() {
        let a = Session::fabricate("a@b.com", Role::Admin);
        let b = Session::fabricate("a@b.com", Role::Admin);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn session_roundtrip_is_lossless() {
        let session = sample();
        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, parsed);
    }

    #[test]
    fn session_deserializes_storage_record() {
        let json = r#"{"id":"1","email":"a@b.com","name":"A","role":"employee","avatar":"x"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.role, Role::Employee);
        assert_eq!(session.avatar, "x");
    }

    #[test]
    fn apply_name_preserves_other_fields() {
        let mut session = sample();
        session.apply(ProfileUpdate::name("Janet")).unwrap();
        assert_eq!(
            session,
            Session {
                name: "Janet".into(),
                ..sample()
            }
        );
    }

    #[test]
    fn apply_rejects_role_change() {
        let mut session = sample();
        let update = ProfileUpdate {
            name: Some("Mallory".into()),
            role: Some(Role::Admin),
            ..Default::default()
        };
        let err = session.apply(update).unwrap_err();
        assert!(err.field_errors.contains_key("role"));
        assert_eq!(session, sample());
    }

    #[test]
    fn apply_accepts_unchanged_role() {
        let mut session = sample();
        let update = ProfileUpdate {
            role: Some(Role::Business),
            avatar: Some("https://img.example/me.png".into()),
            ..Default::default()
        };
        session.apply(update).unwrap();
        assert_eq!(session.avatar, "https://img.example/me.png");
        assert_eq!(session.role, Role::Business);
    }

    #[test]
    fn apply_rejects_blank_present_field() {
        let mut session = sample();
        let err = session.apply(ProfileUpdate::name("   ")).unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("name").map(String::as_str),
            Some("Name is required")
        );
        assert_eq!(session, sample());
    }

    #[test]
    fn apply_blank_field_blocks_whole_update() {
        let mut session = sample();
        let update = ProfileUpdate {
            name: Some("Janet".into()),
            avatar: Some("".into()),
            ..Default::default()
        };
        assert!(session.apply(update).is_err());
        assert_eq!(session, sample());
    }

    #[test]
    fn apply_trims_present_fields() {
        let mut session = sample();
        session.apply(ProfileUpdate::name("  Janet  ")).unwrap();
        assert_eq!(session.name, "Janet");
    }

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(sample().initials(), "JD");
    }
}
