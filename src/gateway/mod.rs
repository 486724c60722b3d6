//! Search gateway over the upstream posts / users / albums API.
//!
//! The gateway owns the session token, fetches whole collections, filters
//! them locally and normalizes every record into a [`SearchResult`]. Every
//! request goes through [`SearchGateway::send`], which attaches the bearer
//! token and clears the session when the upstream answers 401.

mod error;
pub mod filter;

pub use error::{GatewayError, SearchError};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::auth::{AuthOutcome, Session};
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::models::{AlbumRecord, Category, PostRecord, SearchResult, SearchScope, UserRecord};
use error::FetchError;

const LOGIN_PATH: &str = "auth/login";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Client for the upstream API with lazy demo authentication.
pub struct SearchGateway {
    client: Client,
    base_url: String,
    session: Session,
    username: String,
    password: String,
    fallback_token: String,
}

impl SearchGateway {
    /// Build a gateway from configuration and the application session.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(config: &Config, session: Session) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            session,
            username: config.demo_username.clone(),
            password: config.demo_password.clone(),
            fallback_token: config.fallback_token.clone(),
        })
    }

    /// Log in with the demo credentials.
    ///
    /// Never fails: when the login endpoint errors or returns no token the
    /// configured fallback token is stored instead.
    pub async fn authenticate(&self) -> AuthOutcome {
        let body = LoginRequest {
            username: &self.username,
            password: &self.password,
        };
        let request = self.client.post(self.endpoint(LOGIN_PATH)).json(&body);

        match self.send::<LoginResponse>(request).await {
            Ok(LoginResponse {
                token: Some(token),
            }) if !token.is_empty() => {
                self.session.set_token(token.as_str());
                info!("Authenticated with issued token");
                AuthOutcome::Issued(token)
            }
            Ok(_) => {
                debug!("Login response carried no token, using fallback token");
                self.use_fallback_token()
            }
            Err(e) => {
                warn!(error = %e, "Login failed, using fallback token");
                self.use_fallback_token()
            }
        }
    }

    fn use_fallback_token(&self) -> AuthOutcome {
        self.session.set_token(self.fallback_token.as_str());
        AuthOutcome::Fallback(self.fallback_token.clone())
    }

    /// Forget the current token.
    pub fn logout(&self) {
        self.session.clear();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    async fn ensure_authenticated(&self) {
        if !self.is_authenticated() {
            let outcome = self.authenticate().await;
            debug!(fallback = outcome.is_fallback(), "Session authenticated");
        }
    }

    /// Posts whose title or body contains `query`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Posts`] if the collection cannot be fetched.
    pub async fn search_posts(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let posts: Vec<PostRecord> = self.fetch_collection(Category::Posts).await?;
        let needle = query.to_lowercase();
        Ok(posts
            .iter()
            .filter(|post| filter::post_matches(post, &needle))
            .map(|post| SearchResult::from_post(post, &self.base_url))
            .collect())
    }

    /// Users whose name, email, or username contains `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Users`] if the collection cannot be fetched.
    pub async fn search_users(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let users: Vec<UserRecord> = self.fetch_collection(Category::Users).await?;
        let needle = query.to_lowercase();
        Ok(users
            .iter()
            .filter(|user| filter::user_matches(user, &needle))
            .map(|user| SearchResult::from_user(user, &self.base_url))
            .collect())
    }

    /// Albums whose title contains `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Albums`] if the collection cannot be fetched.
    pub async fn search_albums(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let albums: Vec<AlbumRecord> = self.fetch_collection(Category::Albums).await?;
        let needle = query.to_lowercase();
        Ok(albums
            .iter()
            .filter(|album| filter::album_matches(album, &needle))
            .map(|album| SearchResult::from_album(album, &self.base_url))
            .collect())
    }

    /// Search one or all collections.
    ///
    /// A blank query returns nothing without touching the network. With no
    /// category (or `"all"`) the three collections are searched concurrently
    /// and concatenated as posts, users, albums; the first failure fails the
    /// whole search. Unrecognized categories search posts.
    ///
    /// # Errors
    ///
    /// Returns the [`SearchError`] of the first category that failed.
    pub async fn search(
        &self,
        query: &str,
        category: Option<&str>,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let scope = SearchScope::from_param(category);
        debug!(query = %query, scope = ?scope, "Searching");

        match scope {
            SearchScope::All => {
                // One login up front instead of one per concurrent branch.
                self.ensure_authenticated().await;
                let (posts, users, albums) = tokio::try_join!(
                    self.search_posts(query),
                    self.search_users(query),
                    self.search_albums(query),
                )?;
                let mut results = posts;
                results.extend(users);
                results.extend(albums);
                Ok(results)
            }
            SearchScope::Only(Category::Posts) => self.search_posts(query).await,
            SearchScope::Only(Category::Users) => self.search_users(query).await,
            SearchScope::Only(Category::Albums) => self.search_albums(query).await,
        }
    }

    /// Fetch one record by id.
    ///
    /// `category` must be `posts`, `users`, or `albums`. Unknown categories,
    /// missing records, and failed requests all yield `None`.
    pub async fn get_item_by_id(&self, id: &str, category: &str) -> Option<SearchResult> {
        self.ensure_authenticated().await;

        let Some(kind) = Category::parse(category) else {
            debug!(category = %category, "Unknown category for item lookup");
            return None;
        };

        let path = format!("{}/{}", kind.collection(), urlencoding::encode(id));
        let url = self.endpoint(&path);
        debug!(id = %id, category = kind.as_str(), "Fetching item");

        let result = match kind {
            Category::Posts => self
                .send::<PostRecord>(self.client.get(url))
                .await
                .map(|post| SearchResult::post_detail(&post, &self.base_url)),
            Category::Users => self
                .send::<UserRecord>(self.client.get(url))
                .await
                .map(|user| SearchResult::user_detail(&user, &self.base_url)),
            Category::Albums => self
                .send::<AlbumRecord>(self.client.get(url))
                .await
                .map(|album| SearchResult::album_detail(&album, &self.base_url)),
        };

        match result {
            Ok(item) => Some(item),
            Err(e) => {
                error!(id = %id, category = kind.as_str(), error = %e, "Failed to fetch item");
                None
            }
        }
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        category: Category,
    ) -> Result<Vec<T>, SearchError> {
        self.ensure_authenticated().await;

        let url = self.endpoint(category.collection());
        debug!(category = category.as_str(), "Fetching collection");

        self.send(self.client.get(url)).await.map_err(|e| {
            error!(category = category.as_str(), error = %e, "Failed to fetch collection");
            SearchError::for_category(category)
        })
    }

    /// Send a request with the session token attached and decode the JSON body.
    ///
    /// A 401 from the upstream clears the session before the error is returned.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FetchError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(url = %response.url(), "Upstream rejected the session token, logging out");
            self.logout();
            return Err(FetchError::Unauthorized);
        }

        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}
