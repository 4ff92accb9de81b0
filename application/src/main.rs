use std::{
    io::{self, Write as _},
    sync::OnceLock,
};

use application::{Args, Config, View};
use service::{domain::Selection, infra::Remote, Service};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args {
        config,
        category,
        select,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let config = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(
        config.service(),
        Remote::new(config.catalog.endpoint.clone()),
    );
    let view = View {
        labels: config.display.labels.into(),
    };

    let mut out = io::stdout().lock();

    view.loading(&mut out).map_err(|e| {
        log::error!("failed to write to stdout: {e}");
    })?;
    out.flush().map_err(|e| {
        log::error!("failed to write to stdout: {e}");
    })?;

    // The only fetch of this run. A failure has already been collapsed into
    // an empty catalog by the `Service`.
    let catalog = service.catalog().await;

    let mut selection = Selection::none();
    if let Some(id) = select {
        selection.select(id);
    }

    view.render(
        &mut out,
        &service.config().location,
        &catalog,
        category,
        selection,
    )
    .map_err(|e| {
        log::error!("failed to render the catalog page: {e}");
    })
}
