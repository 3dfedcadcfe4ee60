//! Typed bindings for the ritual backend endpoints.
//!
//! Each method is one call through the [`ApiClient`] pipeline. Endpoints that
//! return JSON are decoded into the payload types below; the rest hand back
//! the raw response body for the caller to echo.

use super::{ApiClient, ApiError, ApiRequest, ReqwestTransport, Transport};
use crate::libs::interval::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ADD_ACTIVITY_URL: &str = "add-activity";
const GET_ACTIVITIES_URL: &str = "get-activities";
const GET_SUMMARY_URL: &str = "get-summary";
const ADD_GOAL_URL: &str = "add-goal";
const DELETE_GOAL_URL: &str = "delete-goal";
const GET_GOALS_URL: &str = "get-goals";
const SET_SUBGOALS_URL: &str = "set-subgoals";
const GET_SUBGOALS_URL: &str = "get-subgoals";
const TUNE_URL: &str = "tune";
const RESET_TUNE_URL: &str = "reset-tune";
const CREATE_ACCOUNT_URL: &str = "create-account";

/// Timestamp format expected by `add-activity`.
pub const ACTIVITY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize)]
pub struct LogRequest {
    pub activity_name: String,
    pub activity_begin: String,
    pub activity_end: String,
    pub memo: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogFeedback {
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Personality settings. Only the non-empty fields are changed server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TuneRequest {
    pub core: String,
    pub summary: String,
    pub feedback: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// One logged activity as returned by `get-activities`.
///
/// Begin and end are times of day (`HH:MM:SS`) and may be empty for entries
/// logged without a duration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityListItem {
    pub activity_name: String,
    #[serde(rename = "activity_begin", default)]
    pub begin_time: String,
    #[serde(rename = "activity_end", default)]
    pub end_time: String,
    #[serde(default)]
    pub memo: String,
}

/// Activities keyed by `YYYY-MM-DD`, iterated in ascending date order.
pub type ActivitiesByDate = BTreeMap<String, Vec<ActivityListItem>>;

/// Client for the ritual backend.
pub struct Ritual<T: Transport = ReqwestTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> Ritual<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub async fn add_activity(&self, activity: &LogRequest) -> Result<LogFeedback, ApiError> {
        self.client.execute_json(ApiRequest::post(ADD_ACTIVITY_URL).json(activity)?).await
    }

    pub async fn activities(&self, range: &DateRange) -> Result<ActivitiesByDate, ApiError> {
        self.client.execute_json(Self::ranged(GET_ACTIVITIES_URL, range)).await
    }

    pub async fn summary(&self, range: &DateRange) -> Result<SummaryResponse, ApiError> {
        self.client.execute_json(Self::ranged(GET_SUMMARY_URL, range)).await
    }

    pub async fn add_goal(&self, goal: &Goal) -> Result<String, ApiError> {
        self.client.execute(ApiRequest::post(ADD_GOAL_URL).json(goal)?).await
    }

    pub async fn delete_goal(&self, name: &str) -> Result<String, ApiError> {
        self.client.execute(ApiRequest::delete(DELETE_GOAL_URL).query("name", name)).await
    }

    pub async fn goals(&self) -> Result<Vec<Goal>, ApiError> {
        self.client.execute_json(ApiRequest::get(GET_GOALS_URL)).await
    }

    /// Asks the coach to generate subgoals for `name`. Returns the raw reply.
    pub async fn set_subgoals(&self, name: &str) -> Result<String, ApiError> {
        let goal = Goal {
            name: name.to_string(),
            description: String::new(),
        };
        self.client.execute(ApiRequest::post(SET_SUBGOALS_URL).json(&goal)?).await
    }

    pub async fn subgoals(&self, name: &str) -> Result<Vec<Goal>, ApiError> {
        self.client.execute_json(ApiRequest::get(GET_SUBGOALS_URL).query("name", name)).await
    }

    pub async fn tune(&self, tune: &TuneRequest) -> Result<String, ApiError> {
        self.client.execute(ApiRequest::post(TUNE_URL).json(tune)?).await
    }

    pub async fn reset_tune(&self) -> Result<String, ApiError> {
        self.client.execute(ApiRequest::post(RESET_TUNE_URL)).await
    }

    /// Creates an account. This is the only unauthenticated endpoint.
    pub async fn create_account(&self, signup: &SignupRequest) -> Result<String, ApiError> {
        self.client.execute(ApiRequest::post(CREATE_ACCOUNT_URL).json(signup)?.anonymous()).await
    }

    fn ranged(path: &str, range: &DateRange) -> ApiRequest {
        range
            .query_params()
            .into_iter()
            .fold(ApiRequest::get(path), |request, (key, value)| request.query(key, value))
    }
}
