/*!
vidembed. embeddable player and thumbnail urls for vimeo videos

```no_run
# fn main() -> Result<(), vidembed::Error> {
use vidembed::{vimeo, DefaultRenderer, OembedClient, ServiceAdapter as _};

let client = OembedClient::default();
let video = vimeo::parse("https://vimeo.com/76979871", DefaultRenderer, &client)?;

println!("{}", video.embed_url(false, true));
println!("{}", video.large_thumbnail(true));
# Ok(())
# }
```
*/

/// Configuration
pub mod config;

/// The service adapter trait shared by video services
pub mod adapter;

/// Embed markup renderers
pub mod renderer;

/// The vimeo service adapter
pub mod vimeo;

mod error;
mod http;

#[doc(hidden)]
pub mod util;

#[cfg(test)]
mod test;

pub use adapter::{ServiceAdapter, Summary};
pub use config::Config;
pub use error::{ApiError, Error, Result};
pub use renderer::{DefaultRenderer, EmbedRenderer};
pub use vimeo::{client::OembedClient, ThumbnailSize, VimeoServiceAdapter};

static DEFAULT_CONFIG: &str = include_str!("../default.toml");
