// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "gallery_lens=info";

const HELP: &str = "\
GalleryLens - photo gallery browser

USAGE:
  gallery_lens [OPTIONS]

OPTIONS:
  --server <URL>      Gallery server base URL (overrides settings.toml)
  --lang <LOCALE>     Interface language, e.g. en-US or fr
  --config-dir <DIR>  Directory holding settings.toml
  -h, --help          Print this help

ENVIRONMENT:
  GALLERY_LENS_CONFIG_DIR  Config directory when --config-dir is not given
  RUST_LOG                 Log filter (default: gallery_lens=info)
";

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Returns `None` when help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        server_url: args.opt_value_from_str("--server")?,
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}
