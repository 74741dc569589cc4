//! HTTP implementation of `Backend`
//!
//! JSON endpoints always answer with an envelope, even on 4xx/5xx, so the
//! envelope is decoded regardless of status. Binary endpoints only carry an
//! envelope when they fail.

use async_trait::async_trait;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{routes, Backend};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Archive, Envelope, FileDetail, FileView, FolderView, StorageSnapshot, TorrentUpload,
    TorrentView,
};

#[derive(Serialize)]
struct MagnetArgs<'a> {
    magnet_link: &'a str,
}

#[derive(Serialize)]
struct SelectedFilesArgs<'a> {
    files: &'a [String],
}

/// Decoded successful envelope
struct Reply {
    message: String,
    body: Map<String, Value>,
}

impl Reply {
    fn payload<T: DeserializeOwned>(mut self, key: &str) -> ApiResult<T> {
        let value = self
            .body
            .remove(key)
            .ok_or_else(|| ApiError::Decode(format!("missing `{}`", key)))?;
        Ok(serde_json::from_value(value)?)
    }
}

#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn envelope(&self, request: RequestBuilder) -> ApiResult<Reply> {
        let response = request.send().await?;
        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            ApiError::Decode(format!("HTTP {}: {}", status.as_u16(), e))
        })?;

        let envelope = Envelope::deserialize(&body)?;
        let message = envelope.message.unwrap_or_default();
        if !envelope.success {
            let message = if message.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                message
            };
            return Err(ApiError::Rejected(message));
        }

        match body {
            Value::Object(body) => Ok(Reply { message, body }),
            _ => Err(ApiError::Decode("expected a JSON object".to_string())),
        }
    }

    async fn archive(&self, request: RequestBuilder) -> ApiResult<Archive> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Envelope>()
                .await
                .ok()
                .and_then(|e| e.message)
                .filter(|m| !m.is_empty());
            return Err(match message {
                Some(m) => ApiError::Rejected(m),
                None => ApiError::Status(status.as_u16()),
            });
        }

        let content_disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();
        Ok(Archive {
            bytes,
            content_disposition,
        })
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn torrents(&self) -> ApiResult<Vec<TorrentView>> {
        let reply = self.envelope(self.client.get(self.url(routes::TORRENTS))).await?;
        let torrents: Option<Map<String, Value>> = reply.payload("torrents")?;
        torrents
            .unwrap_or_default()
            .into_iter()
            .map(|(_, v)| serde_json::from_value(v).map_err(ApiError::from))
            .collect()
    }

    async fn add_magnet(&self, magnet_link: &str) -> ApiResult<String> {
        let request = self
            .client
            .post(self.url(routes::ADD_TORRENT))
            .json(&MagnetArgs { magnet_link });
        Ok(self.envelope(request).await?.message)
    }

    async fn add_torrent_file(&self, upload: TorrentUpload) -> ApiResult<String> {
        let part = Part::bytes(upload.bytes).file_name(upload.name);
        let form = Form::new().part("torrent_file", part);
        let request = self.client.post(self.url(routes::ADD_TORRENT)).multipart(form);
        Ok(self.envelope(request).await?.message)
    }

    async fn pause(&self, id: &str) -> ApiResult<String> {
        let request = self.client.post(self.url(&routes::pause(id)));
        Ok(self.envelope(request).await?.message)
    }

    async fn resume(&self, id: &str) -> ApiResult<String> {
        let request = self.client.post(self.url(&routes::resume(id)));
        Ok(self.envelope(request).await?.message)
    }

    async fn remove(&self, id: &str, delete_files: bool) -> ApiResult<String> {
        let request = self.client.delete(self.url(&routes::remove(id, delete_files)));
        Ok(self.envelope(request).await?.message)
    }

    async fn storage(&self) -> ApiResult<StorageSnapshot> {
        self.envelope(self.client.get(self.url(routes::STORAGE)))
            .await?
            .payload("storage")
    }

    async fn folders(&self) -> ApiResult<Vec<FolderView>> {
        self.envelope(self.client.get(self.url(routes::FOLDERS)))
            .await?
            .payload("folders")
    }

    async fn files(&self) -> ApiResult<Vec<FileView>> {
        self.envelope(self.client.get(self.url(routes::FILES)))
            .await?
            .payload("files")
    }

    async fn file_info(&self, path: &str) -> ApiResult<FileDetail> {
        self.envelope(self.client.get(self.url(&routes::file_info(path))))
            .await?
            .payload("file")
    }

    async fn delete_file(&self, path: &str) -> ApiResult<String> {
        let request = self.client.delete(self.url(&routes::delete_file(path)));
        Ok(self.envelope(request).await?.message)
    }

    async fn delete_folder(&self, path: &str) -> ApiResult<String> {
        let request = self.client.delete(self.url(&routes::delete_folder(path)));
        Ok(self.envelope(request).await?.message)
    }

    async fn download_folder(&self, path: &str) -> ApiResult<Archive> {
        self.archive(self.client.get(self.url(&routes::download_folder(path))))
            .await
    }

    async fn download_selected(&self, paths: &[String]) -> ApiResult<Archive> {
        let request = self
            .client
            .post(self.url(routes::DOWNLOAD_SELECTED))
            .json(&SelectedFilesArgs { files: paths });
        self.archive(request).await
    }
}
