use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards the one-time logger setup
static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` facade.
///
/// Defaults to `info`, with the table's own module at `debug` so resizes show
/// up. `RUST_LOG` overrides both. Safe to call more than once.
pub fn init_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("probetable::probing_table", LevelFilter::Debug)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the host application.
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_logging_levels() {
        init_logger();
        init_logger();
        debug!("Debug message in test");
        info!("Info message in test");
    }
}
