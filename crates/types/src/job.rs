//! Job listing payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page reported when the backend omits it or sends zero
pub const DEFAULT_PAGE: u32 = 1;

/// Page size reported when the backend omits it or sends zero
pub const DEFAULT_LIMIT: u32 = 10;

/// A scraped job listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Department, e.g. "deck", "engine", "interior"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default, alias = "sourceUrl", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Site the listing was scraped from
    pub source: String,
    #[serde(default, alias = "postedAt", skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(alias = "scrapedAt")]
    pub scraped_at: DateTime<Utc>,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Query parameters accepted by `GET /jobs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilter {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Query parameters in wire order.
    ///
    /// Empty strings and zero numbers are treated as unset and left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("type", &self.job_type),
            ("location", &self.location),
            ("company", &self.company),
        ];
        let numbers = [("limit", self.limit), ("offset", self.offset)];

        text.into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .chain(numbers.into_iter().filter_map(|(key, value)| {
                value.filter(|v| *v != 0).map(|v| (key, v.to_string()))
            }))
            .collect()
    }
}

/// Paginated envelope returned by `GET /jobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResponse {
    pub jobs: Vec<Job>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl Default for JobResponse {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            total: 0,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Listing envelope as the backend may actually send it, every field optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialJobResponse {
    #[serde(default)]
    pub jobs: Option<Vec<Job>>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PartialJobResponse {
    /// Fill missing or zero fields with their defaults
    pub fn normalize(self) -> JobResponse {
        JobResponse {
            jobs: self.jobs.unwrap_or_default(),
            total: self.total.unwrap_or(0),
            page: self.page.filter(|p| *p != 0).unwrap_or(DEFAULT_PAGE),
            limit: self.limit.filter(|l| *l != 0).unwrap_or(DEFAULT_LIMIT),
        }
    }
}

/// Body of the admin `POST /admin/jobs` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewJob {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "source is required"))]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default, alias = "sourceUrl", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, alias = "postedAt", skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl NewJob {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            source: source.into(),
            ..Self::default()
        }
    }

    /// Materialize as a stored listing with server-assigned fields
    pub fn into_job(self, id: impl Into<String>, now: DateTime<Utc>) -> Job {
        Job {
            id: id.into(),
            title: self.title,
            company: self.company,
            location: self.location,
            job_type: self.job_type,
            vessel: self.vessel,
            duration: self.duration,
            salary: self.salary,
            description: self.description,
            requirements: self.requirements,
            source_url: self.source_url,
            source: self.source,
            posted_at: self.posted_at,
            scraped_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body returned by a successful job creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateJobResponse {
    pub message: String,
    pub job: Job,
}
