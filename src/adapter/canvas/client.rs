//! Canvas Transport Abstractions
//!
//! HTTPトランスポートの抽象化と実装

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

#[cfg(test)]
use mockall::automock;

/// ステータスコードとボディだけに落としたHTTPレスポンス
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for the three HTTP call shapes of the workflow
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CanvasTransport: Send + Sync {
    /// Bearer認証付きのフォームPOST（notify用）
    async fn post_form(
        &self,
        url: &str,
        bearer_token: &str,
        fields: Vec<(String, String)>,
    ) -> Result<ApiResponse>;

    /// 認証なしのマルチパートPOST（事前認可済みアップロードURL用）
    async fn post_multipart(
        &self,
        url: &str,
        field_name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiResponse>;

    /// Bearer認証付きのJSON PUT（提出更新用）
    async fn put_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse>;
}

/// reqwestによる実トランスポート
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// 新しいトランスポートを作成
    ///
    /// # Arguments
    ///
    /// * `request_timeout` - リクエスト全体のタイムアウト
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(20))
            .timeout(request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    async fn into_api_response(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl CanvasTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        bearer_token: &str,
        fields: Vec<(String, String)>,
    ) -> Result<ApiResponse> {
        let response = self
            .client
            .post(url)
            .bearer_auth(bearer_token)
            .form(&fields)
            .send()
            .await
            .context("Failed to send notify request")?;

        Self::into_api_response(response).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        field_name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiResponse> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part(field_name.to_string(), part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .context("Failed to send upload request")?;

        Self::into_api_response(response).await
    }

    async fn put_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse> {
        let response = self
            .client
            .put(url)
            .bearer_auth(bearer_token)
            .json(&body)
            .send()
            .await
            .context("Failed to send submission update request")?;

        Self::into_api_response(response).await
    }
}
