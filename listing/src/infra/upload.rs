use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// External file-upload collaborator. Only deletion is exercised by the
/// service side, uploads happen browser-to-service directly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadService: Send + Sync {
    async fn delete_files(&self, image_key: &str) -> anyhow::Result<bool>;
}

#[derive(Clone)]
pub struct HttpUploadService {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteRequest<'a> {
    image_key: &'a str,
}

#[derive(Deserialize)]
struct DeleteResponse {
    success: bool,
}

impl HttpUploadService {
    pub fn new(base_url: String) -> anyhow::Result<HttpUploadService> {
        Ok(HttpUploadService {
            client: reqwest::ClientBuilder::new().build()?,
            base_url,
        })
    }
}

#[async_trait]
impl UploadService for HttpUploadService {
    async fn delete_files(&self, image_key: &str) -> anyhow::Result<bool> {
        let resp = self
            .client
            .post(format!("{}/api/uploadthing/delete", self.base_url))
            .json(&DeleteRequest { image_key })
            .send()
            .await?
            .json::<DeleteResponse>()
            .await?;
        Ok(resp.success)
    }
}
