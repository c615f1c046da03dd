use env_logger::builder as log_builder;
use std::env;

pub use log::{debug, error, info, log, warn};

const RUST_LOG: &str = "RUST_LOG";

#[cfg(debug_assertions)]
const DEFAULT_LEVEL: &str = "debug";

#[cfg(not(debug_assertions))]
const DEFAULT_LEVEL: &str = "info";

pub fn init_logger() {
    if env::var(RUST_LOG).is_err() {
        env::set_var(RUST_LOG, DEFAULT_LEVEL);
    }

    log_builder().default_format().format_timestamp_millis().format_indent(Some(4)).init();
}
