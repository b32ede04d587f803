use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::{AppError, Portal};

pub const LOGIN_FIELDS_REQUIRED: &str = "Company ID, username and password are required";
pub const OFFICER_FIELDS_REQUIRED: &str = "Username and password are required";
pub const CROP_FIELDS_REQUIRED: &str = "Crop name and rate per unit are required";
pub const CROP_RATE_INVALID: &str = "Invalid rate per unit";
pub const CROP_RATE_NEGATIVE: &str = "Rate per unit must be positive";

/// Body of `POST /admin/login` and `POST /officer/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Company ID, username and password are required"))
    )]
    pub company_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Company ID, username and password are required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Company ID, username and password are required"))
    )]
    pub password: String,
}

/// Body of `POST /admin/officers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateOfficerRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username and password are required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username and password are required"))
    )]
    pub password: String,
}

/// Body of `POST /admin/crops` and `PUT /admin/crops/{crop_name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CropRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Crop name and rate per unit are required"))
    )]
    pub crop_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Rate per unit must be positive"))
    )]
    pub rate_per_unit: f64,
}

/// Raw text of the login form plus the role toggle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub company_id: String,
    pub username: String,
    pub password: String,
    pub portal: Portal,
}

impl LoginForm {
    /// Company id and username are trimmed; the password is sent as typed.
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            company_id: self.company_id.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Raw text of the create-officer form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfficerForm {
    pub username: String,
    pub password: String,
}

impl OfficerForm {
    /// Both fields are trimmed before they are checked and sent.
    pub fn to_request(&self) -> CreateOfficerRequest {
        CreateOfficerRequest {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

/// Raw text of the add/edit crop form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CropForm {
    pub crop_name: String,
    pub rate_per_unit: String,
}

impl CropForm {
    /// Trim the name and parse the rate.
    ///
    /// An empty name or rate, or a rate that does not parse as a finite
    /// number, is a validation error. Range checks happen in
    /// `CropRequest` validation.
    pub fn to_request(&self) -> Result<CropRequest, AppError> {
        let crop_name = self.crop_name.trim();
        let rate = self.rate_per_unit.trim();
        if crop_name.is_empty() || rate.is_empty() {
            return Err(AppError::validation(
                CROP_FIELDS_REQUIRED,
                Default::default(),
            ));
        }
        let rate_per_unit: f64 = rate
            .parse()
            .ok()
            .filter(|r: &f64| r.is_finite())
            .ok_or_else(|| AppError::validation(CROP_RATE_INVALID, Default::default()))?;
        Ok(CropRequest {
            crop_name: crop_name.to_string(),
            rate_per_unit,
        })
    }
}

/// Trait for validating request DTOs before they are sent.
#[cfg(feature = "validation")]
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

#[cfg(feature = "validation")]
impl<T: Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
