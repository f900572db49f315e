use crate::error::ApiError;
use serde::{Deserialize, Serialize};

static ENDPOINT: &str = "https://vimeo.com/api/oembed.json";

/// Client for vimeo's oembed api
#[derive(Clone)]
pub struct OembedClient {
    client: reqwest::blocking::Client,
    ep: Option<String>,
}

impl Default for OembedClient {
    fn default() -> Self {
        Self {
            client: crate::http::new_client(),
            ep: None,
        }
    }
}

impl OembedClient {
    /// Use `ep` instead of the public vimeo endpoint
    pub fn with_ep(ep: impl ToString) -> Self {
        Self {
            ep: Some(ep.to_string()),
            ..Self::default()
        }
    }

    pub fn endpoint(&self) -> &str {
        self.ep.as_deref().unwrap_or(ENDPOINT)
    }

    /// Looks up `url`, asking for a thumbnail of `width`x`height`
    pub fn lookup_video(&self, url: &str, width: u32, height: u32) -> Result<Video, ApiError> {
        #[derive(Serialize)]
        struct Query<'a> {
            url: &'a str,
            width: u32,
            height: u32,
        }

        crate::http::get_json(
            &self.client,
            self.endpoint(),
            &Query { url, width, height },
            &[("Accept", "application/json")],
        )
        .map_err(Into::into)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub thumbnail_url: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(OembedClient::default().endpoint(), ENDPOINT);
        assert_eq!(
            OembedClient::with_ep("http://localhost/oembed.json").endpoint(),
            "http://localhost/oembed.json"
        );
    }
}
