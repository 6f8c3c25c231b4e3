pub mod form;
pub mod location;

use crate::client::form::{FormError, HotelForm, RoomForm};
use crate::domain::model::{Hotel, HotelFilter, HotelWithRooms, Room};
use crate::infra::upload::UploadService;
use reqwest::{RequestBuilder, StatusCode};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("server responded {status}")]
    Api { status: u16 },
}

/// Typed client for the listing API. Submitting a form with an existing
/// id updates the record, without one it creates a new record. A failed
/// submit leaves the form value untouched so it can be resubmitted.
pub struct ListingClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ListingClient {
    pub fn new(base_url: String) -> anyhow::Result<ListingClient> {
        Ok(ListingClient {
            client: reqwest::ClientBuilder::new().build()?,
            base_url,
            token: None,
        })
    }

    pub fn with_token(mut self, token: String) -> ListingClient {
        self.token = Some(token);
        self
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn expect_ok<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        if !resp.status().is_success() {
            return Err(ClientError::Api {
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.json().await?)
    }

    pub async fn submit_hotel(
        &self,
        existing: Option<Uuid>,
        form: &HotelForm,
    ) -> Result<Hotel, ClientError> {
        form.validate()?;
        let builder = match existing {
            Some(id) => self.client.patch(format!("{}/hotel/{}", self.base_url, id)),
            None => self.client.post(format!("{}/hotel", self.base_url)),
        };
        let resp = self.authorized(builder).json(&form.body()).send().await?;
        Self::expect_ok(resp).await
    }

    pub async fn submit_room(
        &self,
        hotel_id: Uuid,
        existing: Option<Uuid>,
        form: &RoomForm,
    ) -> Result<Room, ClientError> {
        form.validate()?;
        let builder = match existing {
            Some(id) => self.client.patch(format!("{}/room/{}", self.base_url, id)),
            None => self.client.post(format!("{}/room", self.base_url)),
        };
        let resp = self
            .authorized(builder)
            .json(&form.body(hotel_id))
            .send()
            .await?;
        Self::expect_ok(resp).await
    }

    pub async fn delete_hotel(&self, id: Uuid) -> Result<Hotel, ClientError> {
        let builder = self
            .client
            .delete(format!("{}/hotel/{}", self.base_url, id));
        let resp = self.authorized(builder).send().await?;
        Self::expect_ok(resp).await
    }

    pub async fn delete_room(&self, id: Uuid) -> Result<Room, ClientError> {
        let builder = self.client.delete(format!("{}/room/{}", self.base_url, id));
        let resp = self.authorized(builder).send().await?;
        Self::expect_ok(resp).await
    }

    pub async fn hotel(&self, id: Uuid) -> Result<Option<HotelWithRooms>, ClientError> {
        let resp = self
            .client
            .get(format!("{}/hotel/{}", self.base_url, id))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::expect_ok(resp).await.map(Some)
    }

    pub async fn search(&self, filter: &HotelFilter) -> Result<Vec<HotelWithRooms>, ClientError> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(title) = filter.title() {
            params.push(("title", title));
        }
        if let Some(country) = filter.country() {
            params.push(("country", country));
        }
        if let Some(state) = filter.state() {
            params.push(("state", state));
        }
        if let Some(city) = filter.city() {
            params.push(("city", city));
        }
        let resp = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&params)
            .send()
            .await?;
        Self::expect_ok(resp).await
    }
}

/// Two-step image removal: ask the upload service to delete the stored
/// file, clear the local field only when it reports success.
pub async fn delete_image(
    uploader: &dyn UploadService,
    image: &mut String,
) -> anyhow::Result<bool> {
    let key = image
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();
    if uploader.delete_files(&key).await? {
        image.clear();
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::upload::MockUploadService;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn image_field_cleared_only_after_confirmed_deletion() {
        let mut uploader = MockUploadService::new();
        uploader
            .expect_delete_files()
            .with(eq("abc123.png"))
            .returning(|_| Ok(true));

        let mut image = "https://utfs.io/f/abc123.png".to_string();
        assert!(delete_image(&uploader, &mut image).await.unwrap());
        assert!(image.is_empty());
    }

    #[tokio::test]
    async fn image_field_kept_when_deletion_reports_failure() {
        let mut uploader = MockUploadService::new();
        uploader.expect_delete_files().returning(|_| Ok(false));

        let mut image = "https://utfs.io/f/abc123.png".to_string();
        assert!(!delete_image(&uploader, &mut image).await.unwrap());
        assert_eq!(image, "https://utfs.io/f/abc123.png");
    }
}
