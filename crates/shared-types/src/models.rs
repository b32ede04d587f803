use serde::{Deserialize, Deserializer, Serialize};

/// Canonical portal role.
///
/// The backend is free to send any role text; it is laundered through
/// [`Role::normalize`] before it reaches any UI logic, so only these two
/// values ever exist on the client. Unknown text becomes `Officer`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    #[default]
    Officer,
}

impl Role {
    /// Map raw backend role text onto a canonical role.
    ///
    /// Case-insensitive. `admin`, `company_admin` and `superadmin` are
    /// `Admin`; everything else, including absent or empty input, is
    /// `Officer`. Never fails.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Role::Officer;
        };
        match raw.to_lowercase().as_str() {
            "admin" | "company_admin" | "superadmin" => Role::Admin,
            "officer" | "company_officer" => Role::Officer,
            _ => Role::Officer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Officer => "Officer",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserialization goes through the normalizer and accepts any JSON value:
/// non-string roles (numbers, objects, null) degrade to `Officer` instead of
/// failing the surrounding payload.
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(Role::normalize(value.as_ref().and_then(|v| v.as_str())))
    }
}

/// The resolved caller, as returned by `GET /api/auth/me`.
///
/// Re-fetched on every protected navigation and handed down to the
/// protected subtree as a read-only value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub company_id: String,
    #[serde(default)]
    pub role: Role,
}

impl Identity {
    /// Parse an identity body defensively.
    ///
    /// Returns `None` for anything that is not a JSON object carrying
    /// non-empty `_id`, `username` and `company_id` strings.
    pub fn from_body(body: &str) -> Option<Self> {
        let identity: Identity = serde_json::from_str(body).ok()?;
        if identity.id.is_empty() || identity.username.is_empty() || identity.company_id.is_empty()
        {
            return None;
        }
        Some(identity)
    }

    /// The dashboard this identity lands on.
    pub fn home(&self) -> Portal {
        Portal::from(self.role)
    }
}

/// Which login endpoint and home view a session belongs to.
///
/// This is the role toggle on the login form; it defaults to `Admin`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    #[default]
    Admin,
    Officer,
}

impl Portal {
    pub fn login_path(&self) -> &'static str {
        match self {
            Portal::Admin => "/admin/login",
            Portal::Officer => "/officer/login",
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            Portal::Admin => "/admin",
            Portal::Officer => "/officer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Portal::Admin => "Admin",
            Portal::Officer => "Officer",
        }
    }
}

impl From<Role> for Portal {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Portal::Admin,
            Role::Officer => Portal::Officer,
        }
    }
}
