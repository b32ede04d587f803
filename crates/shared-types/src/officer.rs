use serde::{Deserialize, Serialize};

use crate::Role;

/// A field officer belonging to one company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Officer {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub company_id: String,
}

/// `GET /admin/officers` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OfficerList {
    #[serde(default)]
    pub items: Vec<Officer>,
}

/// `POST /admin/officers` success body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfficerCreated {
    #[serde(default)]
    pub message: Option<String>,
    pub id: String,
}
