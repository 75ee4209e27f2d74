use tracing::Level;

/// Map the numeric `log_level` from the config file to a tracing level
pub fn level_from_config(log_level: usize) -> Level {
    match log_level {
        0 => Level::TRACE,
        1 => Level::DEBUG,
        2 => Level::INFO,
        3 => Level::WARN,
        4 => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(feature = "ssr")]
pub fn init_tracing_subscriber(
    log_level: usize,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    init_panic_hook();

    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            level_from_config(log_level),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

#[cfg(feature = "ssr")]
fn init_panic_hook() {
    std::panic::set_hook(Box::new(|panic| {
        if let Some(location) = panic.location() {
            tracing::error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            tracing::error!(message = %panic);
        }
    }));
}

/// Send tracing events to the browser console
#[cfg(feature = "hydrate")]
pub fn init_web_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new());
    // hydrate can run more than once under hot reload
    keep_existing_subscriber(tracing_subscriber::registry().with(fmt_layer).try_init());
}

/// A global subscriber can only be installed once, a failed attempt keeps
/// the one already there. Returns whether `result` installed a new one.
pub fn keep_existing_subscriber(
    result: Result<(), tracing_subscriber::util::TryInitError>,
) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "tracing already initialized");
            false
        }
    }
}
