//! REST client for the gallery backend.
//!
//! Topics and images live server-side; this module is the only place that
//! talks to the network. Every call is one-shot — no retries, no caching —
//! and failures bubble up as [`GalleryError`] for the views to display.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use web_sys::{File, FormData};

use crate::model::{ImageAsset, Topic};

const API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("server returned {status} for {url}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for GalleryError {
    fn from(err: gloo_net::Error) -> Self {
        GalleryError::Http(err.to_string())
    }
}

#[derive(Serialize)]
struct CreateTopicBody<'a> {
    title: &'a str,
    icon: &'a str,
}

#[derive(Serialize)]
struct RenameBody<'a> {
    title: &'a str,
}

/// Stateless facade over the backend endpoints.
pub struct GalleryService;

impl GalleryService {
    pub async fn topics() -> Result<Vec<Topic>, GalleryError> {
        let url = format!("{API_BASE}/topics");
        let resp = Request::get(&url).send().await?;
        if !resp.ok() {
            return Err(GalleryError::Status {
                status: resp.status(),
                url,
            });
        }
        resp.json().await.map_err(|e| GalleryError::Decode(e.to_string()))
    }

    pub async fn create_topic(title: &str, icon: &str) -> Result<Topic, GalleryError> {
        let url = format!("{API_BASE}/topics");
        let resp = Request::post(&url)
            .json(&CreateTopicBody { title, icon })?
            .send()
            .await?;
        if !resp.ok() {
            return Err(GalleryError::Status {
                status: resp.status(),
                url,
            });
        }
        resp.json().await.map_err(|e| GalleryError::Decode(e.to_string()))
    }

    /// Images of one topic, newest upload first (server ordering).
    pub async fn images(topic_id: &str) -> Result<Vec<ImageAsset>, GalleryError> {
        let url = format!("{API_BASE}/topics/{topic_id}/images");
        let resp = Request::get(&url).send().await?;
        if !resp.ok() {
            return Err(GalleryError::Status {
                status: resp.status(),
                url,
            });
        }
        resp.json().await.map_err(|e| GalleryError::Decode(e.to_string()))
    }

    pub async fn upload_image(topic_id: &str, file: File) -> Result<ImageAsset, GalleryError> {
        let url = format!("{API_BASE}/topics/{topic_id}/images");
        let form = FormData::new()
            .map_err(|_| GalleryError::Http("could not build form data".into()))?;
        form.append_with_blob_and_filename("file", &file, &file.name())
            .map_err(|_| GalleryError::Http("could not attach file".into()))?;
        let resp = Request::post(&url).body(form)?.send().await?;
        if !resp.ok() {
            return Err(GalleryError::Status {
                status: resp.status(),
                url,
            });
        }
        resp.json().await.map_err(|e| GalleryError::Decode(e.to_string()))
    }

    pub async fn delete_image(image_id: &str) -> Result<(), GalleryError> {
        let url = format!("{API_BASE}/images/{image_id}");
        let resp = Request::delete(&url).send().await?;
        if !resp.ok() {
            return Err(GalleryError::Status {
                status: resp.status(),
                url,
            });
        }
        Ok(())
    }

    pub async fn rename_image(image_id: &str, new_title: &str) -> Result<(), GalleryError> {
        let url = format!("{API_BASE}/images/{image_id}");
        let resp = Request::patch(&url)
            .json(&RenameBody { title: new_title })?
            .send()
            .await?;
        if !resp.ok() {
            return Err(GalleryError::Status {
                status: resp.status(),
                url,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ImageAsset, Topic};

    #[test]
    fn image_payload_maps_backend_fields() {
        let body = r#"[{
            "id": "img_41",
            "title": "Router diagram",
            "src": "https://cdn.example.net/images/t1/41.png",
            "fileName": "router.png",
            "size": 204800,
            "mimeType": "image/png",
            "uploadedAt": 1714570000000
        }]"#;
        let assets: Vec<ImageAsset> = serde_json::from_str(body).unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].file_name, "router.png");
        assert_eq!(assets[0].mime_type.as_deref(), Some("image/png"));
        assert_eq!(assets[0].size, 204800);
    }

    #[test]
    fn topic_payload_tolerates_missing_optionals() {
        let body = r#"{"id": "t1", "title": "Redes"}"#;
        let topic: Topic = serde_json::from_str(body).unwrap();
        assert_eq!(topic.title, "Redes");
        assert!(topic.description.is_none());
        assert!(topic.icon.is_none());
    }
}
