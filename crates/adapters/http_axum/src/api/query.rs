//! `POST /sc/query` — dispatch on the `action` field.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use sc_bridge_app::ports::KnowledgeBase;
use sc_bridge_domain::query::Query;

use crate::api::TextBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Fields of a query body that matter for dispatch.
///
/// Fields are kept as raw JSON so that a field of an unexpected type never
/// rejects the whole request; [`Query::parse`] decides what is acceptable.
/// `device` and `value` belong to device actions and are ignored here.
#[derive(Debug, Default)]
pub struct QueryRequest {
    pub action: Value,
    pub text: Value,
}

impl From<Value> for QueryRequest {
    /// Read fields by name. Anything but a JSON object has no fields.
    fn from(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::default();
        };
        Self {
            action: fields.remove("action").unwrap_or_default(),
            text: fields.remove("text").unwrap_or_default(),
        }
    }
}

impl QueryRequest {
    /// Validate the raw body into a [`Query`].
    ///
    /// A non-string `text` is rendered as its JSON representation; a missing
    /// or `null` one becomes empty.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `action` is not a known action string.
    pub fn into_query(self) -> Result<Query, ApiError> {
        let text = match self.text {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        };
        Query::parse(self.action.as_str(), text).map_err(ApiError::from)
    }
}

/// Possible responses from the query endpoint.
pub enum QueryResponse {
    Ok(Json<TextBody>),
}

impl IntoResponse for QueryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /sc/query`
pub async fn handle<K>(
    State(state): State<AppState<K>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<QueryResponse, ApiError>
where
    K: KnowledgeBase + Send + Sync + 'static,
{
    let body = match body {
        Ok(Json(body)) => body,
        // A body not declared as JSON is read as having no fields.
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
        Err(rejection) => return Err(rejection.into()),
    };
    match QueryRequest::from(body).into_query()? {
        Query::Ask(question) => {
            let answer = state.knowledge_base.ask_question(question).await?;
            Ok(QueryResponse::Ok(Json(TextBody {
                text: answer.into_text(),
            })))
        }
    }
}
