//! HTTP client helpers (REST).

use gloo_net::http::{Request, Response};
use slash_api_models::{ProblemDetails, UpdateUserRequest, User};

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(crate) async fn fetch_current_user(&self) -> anyhow::Result<User> {
        let resp = Request::get(&self.url("/api/v1/user/me")).send().await?;
        decode(resp).await
    }

    pub(crate) async fn update_user(
        &self,
        id: i32,
        request: &UpdateUserRequest,
    ) -> anyhow::Result<User> {
        let resp = Request::patch(&self.url(&format!("/api/v1/user/{id}")))
            .json(request)?
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: for<'de> serde::Deserialize<'de>>(resp: Response) -> anyhow::Result<T> {
    if resp.ok() {
        return Ok(resp.json::<T>().await?);
    }
    let status = resp.status();
    match resp.json::<ProblemDetails>().await {
        Ok(problem) => Err(anyhow::anyhow!(
            problem.detail.unwrap_or(problem.title)
        )),
        Err(_) => Err(anyhow::anyhow!("request failed with status {status}")),
    }
}
