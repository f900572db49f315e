/// Errors produced while loading or querying a video
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pattern didn't match the url, or it had no second capture group
    #[error("cannot find a video id in '{0}'")]
    InvalidUrl(String),

    /// The metadata api couldn't be used
    #[error("cannot get video info for '{url}'")]
    ServiceUnavailable {
        url: String,
        #[source]
        source: ApiError,
    },

    /// The requested thumbnail size isn't one the service provides
    #[error("'{0}' is not a known thumbnail size")]
    InvalidThumbnailSize(String),
}

/// Why a metadata lookup failed
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to the oembed api failed")]
    Transport(#[from] reqwest::Error),

    #[error("thumbnail url '{url}' is malformed")]
    MalformedThumbnail {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("thumbnail url '{0}' has no host")]
    MissingHost(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn unavailable(url: impl ToString, source: impl Into<ApiError>) -> Self {
        Self::ServiceUnavailable {
            url: url.to_string(),
            source: source.into(),
        }
    }
}
