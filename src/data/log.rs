use log::LevelFilter;

/// Logs at `info` unless `RUST_LOG` says otherwise.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

/// Only warnings and errors from here on.
pub fn set_quiet() {
    log::set_max_level(log::max_level().min(LevelFilter::Warn));
}
