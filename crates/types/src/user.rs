//! User and authentication payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered user as returned by the backend.
///
/// Only the identity fields are always present. The profile section is
/// filled in progressively by the user and is omitted from the JSON when
/// unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub role: String,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "updatedAt")]
    pub updated_at: DateTime<Utc>,

    // Profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(
        default,
        alias = "countryOfOrigin",
        skip_serializing_if = "Option::is_none"
    )]
    pub country_of_origin: Option<String>,
    #[serde(
        default,
        alias = "currentLocation",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    // Documents, stored as file paths on the server
    #[serde(default, alias = "cvFilePath", skip_serializing_if = "Option::is_none")]
    pub cv_file_path: Option<String>,
    #[serde(
        default,
        alias = "pictureFilePath",
        skip_serializing_if = "Option::is_none"
    )]
    pub picture_file_path: Option<String>,
    #[serde(
        default,
        alias = "referenceLettersFilePath",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference_letters_file_path: Option<String>,

    // Visa and work authorization
    #[serde(default, alias = "visaStatus", skip_serializing_if = "Option::is_none")]
    pub visa_status: Option<String>,
    #[serde(
        default,
        alias = "workAuthorization",
        skip_serializing_if = "Option::is_none"
    )]
    pub work_authorization: Option<String>,
    #[serde(
        default,
        alias = "passportCountry",
        skip_serializing_if = "Option::is_none"
    )]
    pub passport_country: Option<String>,

    // Subscription
    #[serde(
        default,
        alias = "subscriptionType",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_type: Option<String>,
    #[serde(
        default,
        alias = "subscriptionStatus",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_status: Option<String>,
    #[serde(
        default,
        alias = "subscriptionStartDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "subscriptionEndDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_end_date: Option<DateTime<Utc>>,

    // Contact and experience
    #[serde(default, alias = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(
        default,
        alias = "linkedinProfile",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_profile: Option<String>,
    #[serde(
        default,
        alias = "yearsOfExperience",
        skip_serializing_if = "Option::is_none"
    )]
    pub years_of_experience: Option<i32>,
    // JSON arrays encoded as strings
    #[serde(
        default,
        alias = "preferredJobTypes",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_job_types: Option<String>,
    #[serde(
        default,
        alias = "preferredLocations",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_locations: Option<String>,
    #[serde(
        default,
        alias = "salaryExpectation",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary_expectation: Option<String>,
    #[serde(
        default,
        alias = "languagesSpoken",
        skip_serializing_if = "Option::is_none"
    )]
    pub languages_spoken: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,

    // Completion and verification
    #[serde(
        default,
        alias = "profileCompleted",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_completed: Option<bool>,
    #[serde(
        default,
        alias = "profileVerified",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_verified: Option<bool>,
    #[serde(
        default,
        alias = "profileCompletionPercentage",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_completion_percentage: Option<i32>,
}

impl User {
    /// Create a user with only the identity fields set
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
            created_at: now,
            updated_at: now,
            description: None,
            gender: None,
            country_of_origin: None,
            current_location: None,
            availability: None,
            cv_file_path: None,
            picture_file_path: None,
            reference_letters_file_path: None,
            visa_status: None,
            work_authorization: None,
            passport_country: None,
            subscription_type: None,
            subscription_status: None,
            subscription_start_date: None,
            subscription_end_date: None,
            phone_number: None,
            linkedin_profile: None,
            years_of_experience: None,
            preferred_job_types: None,
            preferred_locations: None,
            salary_expectation: None,
            languages_spoken: None,
            certifications: None,
            profile_completed: None,
            profile_verified: None,
            profile_completion_percentage: None,
        }
    }

    /// Display name as "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[serde(alias = "firstName")]
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,
    #[serde(alias = "lastName")]
    #[validate(length(min = 1, message = "last_name is required"))]
    pub last_name: String,
    #[serde(default, alias = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(
        default,
        alias = "countryOfOrigin",
        skip_serializing_if = "Option::is_none"
    )]
    pub country_of_origin: Option<String>,
    #[serde(
        default,
        alias = "currentLocation",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_location: Option<String>,
}

impl RegisterRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: None,
            country_of_origin: None,
            current_location: None,
        }
    }
}

/// Body returned by a successful registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}
