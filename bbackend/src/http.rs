//! HTTP implementation of the chat backend over the store's REST API.

use bcommon::SessionId;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    BackendError, BackendFuture, ChatBackend, Message, MessageExchange, Product, Role, Session,
};

#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: Client,
    base_url: String,
}

impl HttpChatBackend {
    /// Wraps an existing client; credentials and cookie handling belong to
    /// whoever configured it.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self::new(Client::new(), base_url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn parse_error(response: Response) -> BackendError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("chat request failed with status {status}"));

        classify_status(status, message)
    }

    async fn expect_success(response: Response) -> Result<Response, BackendError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::parse_error(response).await)
        }
    }
}

impl ChatBackend for HttpChatBackend {
    fn list_sessions<'a>(&'a self) -> BackendFuture<'a, Result<Vec<Session>, BackendError>> {
        Box::pin(async move {
            let url = self.endpoint("chat/sessions/");
            let response = self.client.get(url).send().await.map_err(request_error)?;
            let response = Self::expect_success(response).await?;

            let parsed: Vec<ApiSession> = response.json().await.map_err(decode_error)?;
            Ok(parsed.into_iter().map(Session::from).collect())
        })
    }

    fn create_session<'a>(&'a self) -> BackendFuture<'a, Result<Session, BackendError>> {
        Box::pin(async move {
            let url = self.endpoint("chat/sessions/");
            let response = self.client.post(url).send().await.map_err(request_error)?;
            let response = Self::expect_success(response).await?;

            let parsed: ApiSession = response.json().await.map_err(decode_error)?;
            Ok(Session::from(parsed))
        })
    }

    fn delete_session<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BackendFuture<'a, Result<(), BackendError>> {
        Box::pin(async move {
            let url = self.endpoint(&format!("chat/sessions/{session_id}/"));
            let response = self.client.delete(url).send().await.map_err(request_error)?;
            Self::expect_success(response).await?;
            Ok(())
        })
    }

    fn reset_session<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BackendFuture<'a, Result<(), BackendError>> {
        Box::pin(async move {
            let url = self.endpoint(&format!("chat/sessions/{session_id}/reset/"));
            let response = self.client.post(url).send().await.map_err(request_error)?;
            Self::expect_success(response).await?;
            Ok(())
        })
    }

    fn list_messages<'a>(
        &'a self,
        session_id: &'a SessionId,
    ) -> BackendFuture<'a, Result<Vec<Message>, BackendError>> {
        Box::pin(async move {
            let url = self.endpoint(&format!("chat/sessions/{session_id}/messages/"));
            let response = self.client.get(url).send().await.map_err(request_error)?;
            let response = Self::expect_success(response).await?;

            let parsed: Vec<ApiMessage> = response.json().await.map_err(decode_error)?;
            Ok(parsed
                .into_iter()
                .map(|message| message.into_message(session_id))
                .collect())
        })
    }

    fn send_message<'a>(
        &'a self,
        session_id: &'a SessionId,
        content: &'a str,
    ) -> BackendFuture<'a, Result<MessageExchange, BackendError>> {
        Box::pin(async move {
            let url = self.endpoint(&format!("chat/sessions/{session_id}/messages/"));
            let body = SendMessageBody { content };
            let response = self
                .client
                .post(url)
                .json(&body)
                .send()
                .await
                .map_err(request_error)?;
            let response = Self::expect_success(response).await?;

            let parsed: ApiExchange = response.json().await.map_err(decode_error)?;
            Ok(MessageExchange {
                user_message: parsed.user_message.into_message(session_id),
                bot_message: parsed.bot_message.into_message(session_id),
            })
        })
    }
}

fn request_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::timeout(error.to_string())
    } else {
        BackendError::network(error.to_string())
    }
}

fn decode_error(error: reqwest::Error) -> BackendError {
    BackendError::api(format!("malformed chat response: {error}"))
}

fn classify_status(status: StatusCode, message: String) -> BackendError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::authentication(message),
        StatusCode::NOT_FOUND => BackendError::not_found(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            BackendError::invalid_request(message)
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            BackendError::timeout(message)
        }
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
            BackendError::unavailable(message)
        }
        _ => BackendError::api(message),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value
        .get("error")
        .or_else(|| value.get("detail"))
        .or_else(|| value.get("message"))?;

    message.as_str().map(str::to_string)
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiSession {
    session_id: String,
    updated_at: String,
    #[serde(default)]
    message_count: u64,
}

impl From<ApiSession> for Session {
    fn from(value: ApiSession) -> Self {
        Session::new(value.session_id, value.updated_at).with_message_count(value.message_count)
    }
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    id: u64,
    message_type: String,
    content: String,
    timestamp: String,
    #[serde(default)]
    related_products: Vec<ApiProduct>,
}

impl ApiMessage {
    fn into_message(self, session_id: &SessionId) -> Message {
        // Anything the backend does not mark as user-authored renders as a
        // bot message, matching the transcript's two-party layout.
        let role = match self.message_type.as_str() {
            "user" => Role::User,
            _ => Role::Bot,
        };

        Message::new(self.id, session_id.clone(), role, self.content, self.timestamp)
            .with_related_products(self.related_products.into_iter().map(Product::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct ApiProduct {
    id: u64,
    name: String,
    category: String,
    price: String,
    rating: f64,
    stock: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image_url: String,
}

impl From<ApiProduct> for Product {
    fn from(value: ApiProduct) -> Self {
        Product {
            id: value.id,
            name: value.name,
            category: value.category,
            price: value.price,
            rating: value.rating,
            stock: value.stock,
            description: value.description,
            image_url: value.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiExchange {
    user_message: ApiMessage,
    bot_message: ApiMessage,
}
