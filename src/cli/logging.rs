use std::env;

use once_cell::sync::OnceCell;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

pub fn init(verbose: bool) {
    LOGGING.get_or_init(|| {
        let filter = match env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) => {
                let level = if verbose {
                    Level::DEBUG
                } else {
                    env::var("STACKS_LOG")
                        .ok()
                        .and_then(|level| level.parse().ok())
                        .unwrap_or(Level::WARN)
                };
                EnvFilter::new(format!("stacks={}", level.as_str().to_ascii_lowercase()))
            }
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}
