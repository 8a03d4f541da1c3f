use tracing::{error, info, warn};

use crate::errors::FeedbackError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

/// Log an application error at a level matching its kind.
///
/// User errors (bad input, wrong credentials) are warnings; everything else
/// is an error.
pub fn log_app_error<E: FeedbackError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}
