use crate::{renderer::EmbedRenderer, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Things every video service can do
///
/// Services differ in their api endpoint, the pattern used to find the video
/// id, and their url templates. Thumbnail sizes are plain tags so each service
/// can have its own set.
pub trait ServiceAdapter {
    /// The name of the service (ie: "Vimeo")
    fn service_name(&self) -> &'static str;

    /// The url the adapter was made from
    fn raw_url(&self) -> &str;

    fn video_id(&self) -> &str;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn renderer(&self) -> &dyn EmbedRenderer;

    fn has_thumbnail(&self) -> bool;

    /// The thumbnail url for the `size` tag
    ///
    /// Fails with [`Error::InvalidThumbnailSize`](crate::Error::InvalidThumbnailSize) if
    /// `size` isn't one of [`thumbnail_sizes`](ServiceAdapter::thumbnail_sizes)
    fn thumbnail(&self, size: &str, force_secure: bool) -> Result<String>;

    /// Every thumbnail size tag, in a fixed order
    fn thumbnail_sizes(&self) -> &'static [&'static str];

    /// The url of the embeddable player
    fn embed_url(&self, force_autoplay: bool, force_secure: bool) -> String;

    fn is_embeddable(&self) -> bool;

    /// `https` when forced, otherwise the scheme of the raw url
    fn scheme(&self, force_secure: bool) -> String {
        if force_secure {
            return "https".into();
        }
        scheme_of(self.raw_url())
    }

    /// Renders the embed url with the adapter's renderer
    fn embed_code(
        &self,
        width: u32,
        height: u32,
        force_autoplay: bool,
        force_secure: bool,
    ) -> String {
        self.renderer().render_video_embed_code(
            &self.embed_url(force_autoplay, force_secure),
            width,
            height,
        )
    }
}

/// Everything an adapter knows, rendered out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub service: &'static str,
    pub id: String,
    pub title: String,
    pub description: String,
    pub embeddable: bool,
    pub embed_url: String,
    pub embed_code: String,
    pub thumbnails: BTreeMap<&'static str, String>,
}

impl Summary {
    pub fn new(
        adapter: &dyn ServiceAdapter,
        (width, height): (u32, u32),
        force_autoplay: bool,
        force_secure: bool,
    ) -> Result<Self> {
        let thumbnails = adapter
            .thumbnail_sizes()
            .iter()
            .map(|&size| adapter.thumbnail(size, force_secure).map(|url| (size, url)))
            .collect::<Result<_>>()?;

        Ok(Self {
            service: adapter.service_name(),
            id: adapter.video_id().to_string(),
            title: adapter.title().to_string(),
            description: adapter.description().to_string(),
            embeddable: adapter.is_embeddable(),
            embed_url: adapter.embed_url(force_autoplay, force_secure),
            embed_code: adapter.embed_code(width, height, force_autoplay, force_secure),
            thumbnails,
        })
    }
}

/// Lowercase scheme of `url`, `http` when it doesn't have one
pub(crate) fn scheme_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .filter(|url| !url.cannot_be_a_base())
        .map(|url| url.scheme().to_string())
        .unwrap_or_else(|| "http".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes() {
        assert_eq!(scheme_of("https://vimeo.com/76979871"), "https");
        assert_eq!(scheme_of("HTTP://vimeo.com/76979871"), "http");
        assert_eq!(scheme_of("vimeo.com/76979871"), "http");
        assert_eq!(scheme_of("//vimeo.com/76979871"), "http");
    }
}
