//! The HTTP boundary of the stronger fitness tracker.
//!
//! [ApiClient] wraps the fixed set of AJAX and REST endpoints the
//! backend serves. Every request is independent: there is no retry, no
//! bespoke timeout beyond the transport default and no cancellation.
//! Non-safe methods carry the anti-forgery token; see [crate::csrf].

mod csrf;

pub mod error;

use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::cookie::Jar;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use stronger_charts::payload::MetricPayload;

use crate::csrf::CsrfSend;
use crate::error::ApiError;
use crate::error::Result;

/// A blocking client for the stronger backend.
pub struct ApiClient {
    client: Client,
    cookies: Arc<Jar>,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<ApiClient> {
        let base_url =
            Url::parse(base_url).map_err(|error| ApiError::BaseUrl(error.to_string()))?;

        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .build()?;

        Ok(Self {
            client,
            cookies,
            base_url,
        })
    }

    /// Seeds the anti-forgery token cookie.
    ///
    /// The backend normally plants the cookie on the first page load; a
    /// headless caller provides it up front instead.
    pub fn set_csrf_token(&self, token: &str) {
        let cookie = format!("{name}={token}", name = "csrftoken");
        self.cookies.add_cookie_str(&cookie, &self.base_url);
    }

    /// Fetches the chart envelope of a single exercise, filtered to one
    /// rep range.
    pub fn exercise_charts(&self, name: &str, reps: u32) -> Result<MetricPayload> {
        self.get_json(&format!("/ajax/exercises/{name}?reps={reps}"))
    }

    /// Fetches the chart envelope of a single workout.
    pub fn workout_charts(&self, workout_id: u64) -> Result<MetricPayload> {
        self.get_json(&format!("/ajax/workout/{workout_id}"))
    }

    /// Fetches the chart envelope summarizing the recent workouts.
    pub fn workouts_summary(&self, days_back: u32) -> Result<MetricPayload> {
        self.get_json(&format!("/ajax/workouts?days-back={days_back}"))
    }

    /// Fetches the chart envelope summarizing the recent nutrition.
    pub fn nutrition_summary(&self, days_back: u32) -> Result<MetricPayload> {
        self.get_json(&format!("/ajax/nutrition-summary?days-back={days_back}"))
    }

    /// Fetches the lift name to date-keyed weight mapping of the three
    /// main lifts of a user.
    pub fn big_three_progress(&self, username: &str) -> Result<MetricPayload> {
        self.get_json(&format!("/ajax/big-three-progress/{username}"))
    }

    /// Fetches the most performed exercises across all users, grouped
    /// by exercise kind.
    pub fn popular_exercises(&self) -> Result<MetricPayload> {
        self.get_json("/ajax/popular-exercises")
    }

    /// Fetches the bodyweight entries of a user, in server order.
    pub fn bodyweight(&self, user: u64) -> Result<Vec<BodyweightEntry>> {
        self.get_json(&format!("/api/bodyweight?user={user}"))
    }

    /// Logs a bodyweight record.
    pub fn log_bodyweight(&self, record: &BodyweightRecord) -> Result<()> {
        let url = self.url("/api/bodyweight")?;
        let response = self
            .client
            .post(url)
            .form(record)
            .csrf_send(&self.cookies)?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => Ok(()),
            status_code => {
                let message = response.text()?;
                Err(ApiError::Response {
                    status_code,
                    message,
                })
            }
        }
    }

    /// Starts following another user.
    pub fn follow(&self, user: u64, friend: u64) -> Result<()> {
        let url = self.url("/api/friends")?;
        let response = self
            .client
            .post(url)
            .form(&[("user", user), ("friend", friend)])
            .csrf_send(&self.cookies)?;

        match response.status() {
            StatusCode::CREATED => Ok(()),
            status_code => {
                let message = response.text()?;
                Err(ApiError::Response {
                    status_code,
                    message,
                })
            }
        }
    }

    /// Stops following another user by deleting the friendship.
    pub fn unfollow(&self, friendship_id: u64) -> Result<()> {
        let url = self.url(&format!("/api/friends/{friendship_id}"))?;
        let response = self.client.delete(url).csrf_send(&self.cookies)?;

        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
            status_code => {
                let message = response.text()?;
                Err(ApiError::Response {
                    status_code,
                    message,
                })
            }
        }
    }

    /// Joins a group.
    pub fn join_group(&self, membership: &GroupMembership) -> Result<()> {
        let url = self.url("/api/groupmembers/")?;
        let response = self
            .client
            .post(url)
            .form(membership)
            .csrf_send(&self.cookies)?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => Ok(()),
            status_code => {
                let message = response.text()?;
                Err(ApiError::Response {
                    status_code,
                    message,
                })
            }
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let response = self.client.get(url).csrf_send(&self.cookies)?;

        match response.status() {
            StatusCode::OK => {
                let body: T = response.json()?;
                Ok(body)
            }
            status_code => {
                let message = response.text()?;
                Err(ApiError::Response {
                    status_code,
                    message,
                })
            }
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|error| ApiError::BaseUrl(error.to_string()))
    }
}

/// One bodyweight measurement of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyweightEntry {
    pub date: NaiveDate,
    pub bodyweight: f64,
}

/// The form body for logging a bodyweight record.
#[derive(Debug, Clone, Serialize)]
pub struct BodyweightRecord {
    pub bodyweight: f64,
    pub date: NaiveDate,
    pub user: u64,
}

/// The form body for creating a group membership.
#[derive(Debug, Clone, Serialize)]
pub struct GroupMembership {
    pub user: u64,
    pub group: String,
    pub joined: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bodyweight_entries() {
        let json = r#"[
            { "date": "2014-01-01", "bodyweight": 70 },
            { "date": "2014-03-01", "bodyweight": 74.5 }
        ]"#;

        let entries: Vec<BodyweightEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0],
            BodyweightEntry {
                date: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
                bodyweight: 70.0
            }
        );
    }

    #[test]
    fn reject_an_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::BaseUrl(_))
        ));
    }
}
