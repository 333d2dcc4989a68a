//! Command layer — translates bridge requests into sc-server operations.
//!
//! Question answering and device updates are placeholders until the
//! corresponding sc-agents exist: questions are echoed back and temperature
//! changes are only logged. Both go through [`KnowledgeBase`] so a real
//! implementation can replace this one without touching the HTTP layer.

use sc_bridge_domain::device::TemperatureSetting;
use sc_bridge_domain::error::BridgeError;
use sc_bridge_domain::query::{Answer, Question};

use crate::ports::{KnowledgeBase, ScConnection, ScRequest};

/// Prefix of the echo reply produced for every question.
pub const ECHO_PREFIX: &str = "Я получил вопрос: ";

/// Default [`KnowledgeBase`] backed by an injected sc-server connection.
pub struct ScCommands<C> {
    connection: C,
}

impl<C: ScConnection> ScCommands<C> {
    /// Create the command layer on top of an already connected session.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    #[cfg(test)]
    fn connection(&self) -> &C {
        &self.connection
    }
}

impl<C: ScConnection + Send + Sync> KnowledgeBase for ScCommands<C> {
    #[tracing::instrument(skip(self, question), fields(question = %question))]
    async fn ask_question(&self, question: Question) -> Result<Answer, BridgeError> {
        // TODO: replace the echo with an sc-search over the question's key nodes.
        Ok(Answer::new(format!("{ECHO_PREFIX}{question}")))
    }

    #[tracing::instrument(skip(self, setting), fields(device = %setting.device))]
    async fn set_temperature(&self, setting: TemperatureSetting) -> Result<(), BridgeError> {
        tracing::info!(
            device = %setting.device,
            value = setting.value,
            "set temperature"
        );
        Ok(())
    }

    async fn ping(&self) -> Result<(), BridgeError> {
        self.connection.execute(ScRequest::healthcheck()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ScResponse;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingConnection {
        requests: Mutex<Vec<ScRequest>>,
    }

    impl ScConnection for RecordingConnection {
        async fn execute(&self, request: ScRequest) -> Result<ScResponse, BridgeError> {
            self.requests.lock().unwrap().push(request);
            Ok(ScResponse {
                payload: serde_json::Value::Null,
            })
        }
    }

    struct BrokenConnection;

    impl ScConnection for BrokenConnection {
        async fn execute(&self, _request: ScRequest) -> Result<ScResponse, BridgeError> {
            Err(BridgeError::Remote(Box::new(std::io::Error::other(
                "connection reset",
            ))))
        }
    }

    #[tokio::test]
    async fn should_echo_question_with_prefix() {
        let commands = ScCommands::new(RecordingConnection::default());
        let answer = commands
            .ask_question(Question::new("hello"))
            .await
            .unwrap();
        assert_eq!(answer.as_str(), "Я получил вопрос: hello");
    }

    #[tokio::test]
    async fn should_echo_empty_question_as_bare_prefix() {
        let commands = ScCommands::new(RecordingConnection::default());
        let answer = commands.ask_question(Question::default()).await.unwrap();
        assert_eq!(answer.as_str(), ECHO_PREFIX);
    }

    #[tokio::test]
    async fn should_not_contact_server_when_answering() {
        let commands = ScCommands::new(BrokenConnection);
        assert!(commands.ask_question(Question::new("hi")).await.is_ok());
    }

    #[tokio::test]
    async fn should_always_accept_temperature_settings() {
        let commands = ScCommands::new(BrokenConnection);
        for value in [-40.0, 0.0, 21.5, 1e9] {
            let setting = TemperatureSetting {
                device: "thermostat".to_string(),
                value,
            };
            assert!(commands.set_temperature(setting).await.is_ok());
        }
    }

    #[tokio::test]
    async fn should_accept_unvalidated_temperature_settings() {
        let commands = ScCommands::new(BrokenConnection);
        let setting = TemperatureSetting {
            device: String::new(),
            value: f64::NAN,
        };
        assert!(commands.set_temperature(setting).await.is_ok());
    }

    #[tokio::test]
    async fn should_send_healthcheck_on_ping() {
        let commands = ScCommands::new(RecordingConnection::default());
        commands.ping().await.unwrap();

        let requests = commands.connection().requests.lock().unwrap();
        assert_eq!(requests.as_slice(), &[ScRequest::healthcheck()]);
    }

    #[tokio::test]
    async fn should_propagate_connection_failure_on_ping() {
        let commands = ScCommands::new(BrokenConnection);
        let result = commands.ping().await;
        assert!(matches!(result, Err(BridgeError::Remote(_))));
    }
}
