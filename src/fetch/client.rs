use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes a prepared HTTP request. Lets tests swap in a recording client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
