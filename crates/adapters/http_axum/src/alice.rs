//! Yandex Alice skill webhook.
//!
//! Alice posts every user utterance to `POST /alice`. The utterance is asked
//! as a question and the answer is wrapped in the dialog response format,
//! echoing the session identifiers back. The webhook always answers `200`
//! when the body is readable: a failing knowledge base produces a fallback
//! phrase instead of an error, since Alice would otherwise read out nothing.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use sc_bridge_app::ports::KnowledgeBase;
use sc_bridge_domain::query::Question;

use crate::error::ApiError;
use crate::state::AppState;

/// Dialog protocol version sent with every reply.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Spoken when the knowledge base cannot produce an answer.
pub const FALLBACK_TEXT: &str = "Не могу ответить";

/// Incoming webhook body (only the parts the bridge reads).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AliceRequest {
    pub request: AliceUtterance,
    pub session: AliceSession,
}

/// What the user said.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AliceUtterance {
    /// Normalised user phrase.
    pub command: Option<String>,
}

/// Session identifiers, echoed back verbatim.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliceSession {
    pub session_id: serde_json::Value,
    pub message_id: serde_json::Value,
    pub user_id: serde_json::Value,
}

/// Outgoing webhook body.
#[derive(Debug, Serialize)]
pub struct AliceResponse {
    pub response: AliceReply,
    pub session: AliceSession,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AliceReply {
    pub text: String,
    pub end_session: bool,
}

/// Possible responses from the webhook.
pub enum WebhookResponse {
    Ok(Json<AliceResponse>),
}

impl IntoResponse for WebhookResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /alice`
#[allow(clippy::missing_errors_doc)]
pub async fn handle<K>(
    State(state): State<AppState<K>>,
    body: Result<Json<AliceRequest>, JsonRejection>,
) -> Result<WebhookResponse, ApiError>
where
    K: KnowledgeBase + Send + Sync + 'static,
{
    let Json(req) = body?;
    let question = Question::new(req.request.command.unwrap_or_default());

    let text = match state.knowledge_base.ask_question(question).await {
        Ok(answer) => answer.into_text(),
        Err(err) => {
            tracing::warn!(error = %err, "knowledge base failed to answer alice");
            FALLBACK_TEXT.to_string()
        }
    };

    Ok(WebhookResponse::Ok(Json(AliceResponse {
        response: AliceReply {
            text,
            end_session: false,
        },
        session: req.session,
        version: PROTOCOL_VERSION,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_read_command_and_session() {
        let req: AliceRequest = serde_json::from_value(json!({
            "meta": {"locale": "ru-RU"},
            "request": {"command": "какая температура", "type": "SimpleUtterance"},
            "session": {"session_id": "s-1", "message_id": 4, "user_id": "u-9", "new": false},
            "version": "1.0"
        }))
        .unwrap();

        assert_eq!(req.request.command.as_deref(), Some("какая температура"));
        assert_eq!(req.session.session_id, json!("s-1"));
        assert_eq!(req.session.message_id, json!(4));
        assert_eq!(req.session.user_id, json!("u-9"));
    }

    #[test]
    fn should_default_missing_request_and_session() {
        let req: AliceRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.request.command.is_none());
        assert_eq!(req.session, AliceSession::default());
    }

    #[test]
    fn should_serialize_dialog_response() {
        let resp = AliceResponse {
            response: AliceReply {
                text: "привет".to_string(),
                end_session: false,
            },
            session: AliceSession {
                session_id: json!("s-1"),
                message_id: json!(1),
                user_id: json!("u-1"),
            },
            version: PROTOCOL_VERSION,
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({
                "response": {"text": "привет", "end_session": false},
                "session": {"session_id": "s-1", "message_id": 1, "user_id": "u-1"},
                "version": "1.0"
            })
        );
    }
}
