use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder};
use scrumboard_core::{ScrumboardError, ScrumboardResult};
use scrumboard_domain::{BoardList, Card, ListId, NewCard, NewList, UserData, UserId};

use super::BoardStore;

const API_PREFIX: &str = "kanbanboard";

fn transport(err: reqwest::Error) -> ScrumboardError {
    ScrumboardError::Transport(err.to_string())
}

/// `BoardStore` backed by the board service's REST API
#[derive(Debug, Clone)]
pub struct HttpBoardStore {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBoardStore {
    pub fn new(base_url: impl Into<String>) -> ScrumboardResult<Self> {
        let http = Client::builder().build().map_err(transport)?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: None,
        }
    }

    /// Send `Authorization: Token <token>` with every request
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_PREFIX, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Token {token}")),
            None => builder,
        }
    }
}

#[async_trait]
impl BoardStore for HttpBoardStore {
    async fn fetch_lists(&self) -> ScrumboardResult<Vec<BoardList>> {
        self.request(Method::GET, "lists")
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)
    }

    async fn create_card(&self, card: &NewCard) -> ScrumboardResult<Card> {
        self.request(Method::POST, "cards/")
            .json(card)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)
    }

    async fn create_list(&self, list: &NewList) -> ScrumboardResult<BoardList> {
        self.request(Method::POST, "lists/")
            .json(list)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)
    }

    async fn delete_list(&self, id: ListId) -> ScrumboardResult<()> {
        self.request(Method::DELETE, &format!("lists/{id}"))
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?;
        Ok(())
    }

    async fn fetch_user(&self, id: UserId) -> ScrumboardResult<UserData> {
        self.request(Method::GET, &format!("users/{id}"))
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)
    }

    async fn update_user(&self, id: UserId, fields: &UserData) -> ScrumboardResult<UserData> {
        self.request(Method::PATCH, &format!("users/{id}/"))
            .json(fields)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)
    }
}
