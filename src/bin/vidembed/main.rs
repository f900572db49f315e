use anyhow::Context as _;
use vidembed::{util::inspect_err, vimeo, Config, DefaultRenderer, Summary};

const CONFIG_LOCATION: &str = "vidembed.toml";

struct Args {
    config: String,
    secure: bool,
    autoplay: bool,
    urls: Vec<String>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut this = Self {
            config: CONFIG_LOCATION.into(),
            secure: false,
            autoplay: false,
            urls: vec![],
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    this.config = args
                        .next()
                        .with_context(|| "--config needs a path")?;
                }
                "--secure" => this.secure = true,
                "--autoplay" => this.autoplay = true,
                s if s.starts_with("--") => anyhow::bail!("unknown flag: {}", s),
                _ => this.urls.push(arg),
            }
        }

        anyhow::ensure!(
            !this.urls.is_empty(),
            "usage: vidembed [--config PATH] [--secure] [--autoplay] <url>..."
        );
        Ok(this)
    }
}

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "vidembed=trace");
    }

    let args = Args::parse(std::env::args().skip(1))?;
    let (config, from_file) = Config::load_or_default(&args.config)?;

    let opts = alto_logger::Options::default()
        .with_time(alto_logger::options::TimeConfig::date_time_format("%c"));
    let file = alto_logger::FileLogger::timestamp(opts.clone(), &config.log.file)?;

    let logger = alto_logger::MultiLogger::new()
        .with(alto_logger::TermLogger::new(opts)?)
        .with(file);
    alto_logger::init(logger).expect("init logger");

    if !from_file {
        log::info!("no config at '{}', using defaults", args.config);
    }

    let client = config.client();
    let (secure, autoplay) = (
        args.secure || config.embed.secure,
        args.autoplay || config.embed.autoplay,
    );
    let size = (config.embed.width, config.embed.height);

    let mut failed = 0;
    for url in &args.urls {
        let summary = vimeo::parse(url, DefaultRenderer, &client)
            .and_then(|video| Summary::new(&video, size, autoplay, secure))
            .map_err(anyhow::Error::from)
            .and_then(|summary| serde_json::to_string_pretty(&summary).map_err(Into::into));

        match summary {
            Ok(summary) => println!("{}", summary),
            Err(err) => {
                inspect_err(&err, || format!("cannot load '{}'", url));
                failed += 1;
            }
        }
    }

    anyhow::ensure!(failed == 0, "{} of {} urls failed", failed, args.urls.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Args> {
        Args::parse(list.iter().map(ToString::to_string))
    }

    #[test]
    fn parse_args() {
        let args = args(&["--secure", "https://vimeo.com/1", "--config", "a.toml", "vimeo.com/2"]).unwrap();
        assert_eq!(args.config, "a.toml");
        assert!(args.secure);
        assert!(!args.autoplay);
        assert_eq!(args.urls, vec!["https://vimeo.com/1", "vimeo.com/2"]);
    }

    #[test]
    fn bad_args() {
        assert!(args(&[]).is_err());
        assert!(args(&["--config"]).is_err());
        assert!(args(&["--loud", "https://vimeo.com/1"]).is_err());
    }
}
