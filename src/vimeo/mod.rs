use crate::{
    adapter::ServiceAdapter,
    error::ApiError,
    renderer::EmbedRenderer,
    Error, Result,
};

use once_cell::sync::Lazy;
use regex::Regex;
use std::{collections::BTreeMap, sync::Arc};

pub mod client;
use client::OembedClient;


static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    const HOST: &str = r"^((?:https?://)?(?:www\.)?vimeo\.com)";
    // the id has to be the whole path segment
    const END: &str = r"(?:[/?#]|$)";
    [
        format!(r"(?i){}/([0-9]+){}", HOST, END),
        format!(r"(?i){}/channels/[^/]+/([0-9]+){}", HOST, END),
        format!(r"(?i){}/groups/[^/]+/videos/([0-9]+){}", HOST, END),
        format!(r"(?i){}/album/[0-9]+/video/([0-9]+){}", HOST, END),
        format!(r"(?i)^((?:https?://)?player\.vimeo\.com)/video/([0-9]+){}", END),
    ]
    .iter()
    .map(|re| Regex::new(re).unwrap())
    .collect()
});

/// Patterns for the vimeo urls we know about. The video id is always the second group.
pub fn patterns() -> &'static [Regex] {
    &PATTERNS
}

/// Builds an adapter with the first of [`patterns`] that matches `url`
pub fn parse(
    url: &str,
    renderer: impl EmbedRenderer + 'static,
    client: &OembedClient,
) -> Result<VimeoServiceAdapter> {
    let pattern = patterns()
        .iter()
        .find(|re| re.is_match(url))
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;
    VimeoServiceAdapter::new(url, pattern, renderer, client)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ThumbnailSize {
    Small,
    Medium,
    Large,
}

// requested (width, height) for each size, in declaration order
const DIMENSIONS: [(ThumbnailSize, (u32, u32)); 3] = [
    (ThumbnailSize::Small, (100, 75)),
    (ThumbnailSize::Medium, (200, 150)),
    (ThumbnailSize::Large, (640, 464)),
];

static SIZE_TAGS: [&str; 3] = ["small", "medium", "large"];

impl ThumbnailSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        SIZE_TAGS[self as usize]
    }

    /// The (width, height) asked of the api for this size
    pub fn dimensions(self) -> (u32, u32) {
        DIMENSIONS[self as usize].1
    }
}

impl std::str::FromStr for ThumbnailSize {
    type Err = Error;
    fn from_str(input: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == input)
            .ok_or_else(|| Error::InvalidThumbnailSize(input.to_string()))
    }
}

impl std::fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of a thumbnail url returned by the api
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: Option<String>,
}

impl Thumbnail {
    fn parse(input: &str) -> std::result::Result<Self, ApiError> {
        let url = url::Url::parse(input).map_err(|source| ApiError::MalformedThumbnail {
            url: input.to_string(),
            source,
        })?;

        let host = url
            .host_str()
            .ok_or_else(|| ApiError::MissingHost(input.to_string()))?;

        Ok(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            path: url.path().to_string(),
            query: url.query().map(ToString::to_string),
        })
    }

    /// `scheme://host/path`, without the query
    pub fn to_url(&self, scheme: &str) -> String {
        format!("{}://{}{}", scheme, self.host, self.path)
    }
}

/// A vimeo video, with everything fetched up front
#[derive(Clone)]
pub struct VimeoServiceAdapter {
    raw_url: String,
    video_id: String,
    title: String,
    description: String,
    thumbnails: BTreeMap<ThumbnailSize, Thumbnail>,
    renderer: Arc<dyn EmbedRenderer>,
}

impl std::fmt::Debug for VimeoServiceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VimeoServiceAdapter")
            .field("raw_url", &self.raw_url)
            .field("video_id", &self.video_id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("thumbnails", &self.thumbnails)
            .finish()
    }
}

impl VimeoServiceAdapter {
    /// Finds the video id in `url` with the second capture group of `pattern`,
    /// then asks the api about it once per thumbnail size.
    ///
    /// Any failed lookup fails the whole thing.
    pub fn new(
        url: impl Into<String>,
        pattern: &Regex,
        renderer: impl EmbedRenderer + 'static,
        client: &OembedClient,
    ) -> Result<Self> {
        let raw_url = url.into();
        let video_id = video_id_by_pattern(&raw_url, pattern)
            .ok_or_else(|| Error::InvalidUrl(raw_url.clone()))?;

        log::debug!("looking up vimeo video {} ({})", video_id, raw_url);

        let mut thumbnails = BTreeMap::new();
        let mut info = None;

        for &(size, (width, height)) in &DIMENSIONS {
            let video = client
                .lookup_video(&raw_url, width, height)
                .map_err(|err| Error::unavailable(&raw_url, err))?;

            let thumbnail = Thumbnail::parse(&video.thumbnail_url)
                .map_err(|err| Error::unavailable(&raw_url, err))?;
            log::trace!("{} thumbnail for {}: {:?}", size, video_id, thumbnail);
            thumbnails.insert(size, thumbnail);

            // only the small lookup's title and description are kept
            if size == ThumbnailSize::Small {
                info = Some((video.title, video.description));
            }
        }

        let (title, description) = info.unwrap_or_default();

        Ok(Self {
            raw_url,
            video_id,
            title,
            description,
            thumbnails,
            renderer: Arc::new(renderer),
        })
    }

    pub fn thumbnail_for(&self, size: ThumbnailSize, force_secure: bool) -> String {
        self.thumbnails
            .get(&size)
            .map(|thumb| thumb.to_url(&self.scheme(force_secure)))
            .unwrap_or_default()
    }

    pub fn small_thumbnail(&self, force_secure: bool) -> String {
        self.thumbnail_for(ThumbnailSize::Small, force_secure)
    }

    pub fn medium_thumbnail(&self, force_secure: bool) -> String {
        self.thumbnail_for(ThumbnailSize::Medium, force_secure)
    }

    pub fn large_thumbnail(&self, force_secure: bool) -> String {
        self.thumbnail_for(ThumbnailSize::Large, force_secure)
    }

    /// Same as [`large_thumbnail`](Self::large_thumbnail)
    pub fn largest_thumbnail(&self, force_secure: bool) -> String {
        self.thumbnail_for(ThumbnailSize::Large, force_secure)
    }

    /// The parsed thumbnail urls, by size
    pub fn thumbnails(&self) -> &BTreeMap<ThumbnailSize, Thumbnail> {
        &self.thumbnails
    }
}

impl ServiceAdapter for VimeoServiceAdapter {
    fn service_name(&self) -> &'static str {
        "Vimeo"
    }

    fn raw_url(&self) -> &str {
        &self.raw_url
    }

    fn video_id(&self) -> &str {
        &self.video_id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn renderer(&self) -> &dyn EmbedRenderer {
        &*self.renderer
    }

    fn has_thumbnail(&self) -> bool {
        !self.thumbnails.is_empty()
    }

    fn thumbnail(&self, size: &str, force_secure: bool) -> Result<String> {
        let size = size.parse()?;
        Ok(self.thumbnail_for(size, force_secure))
    }

    fn thumbnail_sizes(&self) -> &'static [&'static str] {
        &SIZE_TAGS
    }

    fn embed_url(&self, force_autoplay: bool, force_secure: bool) -> String {
        format!(
            "{}://player.vimeo.com/video/{}{}",
            self.scheme(force_secure),
            self.video_id,
            if force_autoplay { "?autoplay=1" } else { "" }
        )
    }

    fn is_embeddable(&self) -> bool {
        true
    }
}

fn video_id_by_pattern(url: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(url)?
        .get(2)
        .map(|id| id.as_str().to_string())
        .filter(|id| !id.is_empty())
}
