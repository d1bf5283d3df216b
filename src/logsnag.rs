use std::sync::Arc;

use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::payload::{InsightOptions, InsightPayload, InsightValue, PublishOptions, PublishPayload};

/// Envelope around the decoded JSON value returned by the service
///
/// No schema is imposed on `data`; the caller interprets the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct LogResponse {
    pub data: Value,
}

/// Project-scoped handle for publishing events and recording insights
///
/// Pairs a project name with a shared [`ApiClient`]. Stateless beyond
/// configuration; calls are independent request/response exchanges and may
/// be issued concurrently.
pub struct LogSnag {
    project: String,
    client: Arc<ApiClient>,
}

impl LogSnag {
    /// Create a handle for a project
    pub fn new(project: impl Into<String>, client: Arc<ApiClient>) -> Self {
        Self {
            project: project.into(),
            client,
        }
    }

    /// The project name stamped on every payload
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Publish a named event to a channel
    ///
    /// Issues a single `POST <base>/log`. Unset options are omitted from
    /// the request body. Transport, API, and decode errors propagate
    /// unchanged.
    pub async fn publish(
        &self,
        channel: &str,
        event: &str,
        options: PublishOptions,
    ) -> Result<LogResponse, ClientError> {
        let payload = PublishPayload {
            project: self.project.clone(),
            channel: channel.to_string(),
            event: event.to_string(),
            description: options.description,
            icon: options.icon,
            tags: options.tags,
            notify: options.notify,
            parser: options.parser,
        };

        tracing::debug!(project = %self.project, channel, event, "publishing event");
        let data = self.client.post("log", &payload).await?;
        Ok(LogResponse { data })
    }

    /// Record a titled metric against the project
    ///
    /// Issues a single `POST <base>/insight`. The value may be a string,
    /// number, or boolean.
    pub async fn insight(
        &self,
        title: &str,
        value: impl Into<InsightValue>,
        options: InsightOptions,
    ) -> Result<LogResponse, ClientError> {
        let payload = InsightPayload {
            project: self.project.clone(),
            title: title.to_string(),
            value: value.into(),
            icon: options.icon,
        };

        tracing::debug!(project = %self.project, title, "recording insight");
        let data = self.client.post("insight", &payload).await?;
        Ok(LogResponse { data })
    }

    /// Blocking version of [`publish`](Self::publish) for sync contexts
    ///
    /// Uses the current tokio runtime if one exists, otherwise creates a
    /// temporary runtime for the call.
    pub fn publish_blocking(
        &self,
        channel: &str,
        event: &str,
        options: PublishOptions,
    ) -> Result<LogResponse, ClientError> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.publish(channel, event, options)),
            Err(_) => {
                tokio::runtime::Runtime::new()?.block_on(self.publish(channel, event, options))
            }
        }
    }

    /// Blocking version of [`insight`](Self::insight) for sync contexts
    pub fn insight_blocking(
        &self,
        title: &str,
        value: impl Into<InsightValue>,
        options: InsightOptions,
    ) -> Result<LogResponse, ClientError> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.insight(title, value, options)),
            Err(_) => tokio::runtime::Runtime::new()?.block_on(self.insight(title, value, options)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;

    #[test]
    fn test_handle_creation() {
        let client = ApiClient::new("test-token", ClientConfig::default()).unwrap();
        let logsnag = LogSnag::new("my-saas", Arc::new(client));
        assert_eq!(logsnag.project(), "my-saas");
    }

    #[test]
    fn test_client_is_shared() {
        let client = Arc::new(ApiClient::new("test-token", ClientConfig::default()).unwrap());
        let a = LogSnag::new("project-a", Arc::clone(&client));
        let b = LogSnag::new("project-b", Arc::clone(&client));
        assert_eq!(a.project(), "project-a");
        assert_eq!(b.project(), "project-b");
    }
}
