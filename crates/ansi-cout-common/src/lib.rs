#![deny(clippy::all)]

mod shared_buffer;
mod sync;
mod telemetry;

pub use shared_buffer::SharedBuffer;
pub use sync::mutex_lock_or_recover;
pub use telemetry::LOG_FILE_ENV;
pub use telemetry::LogTarget;
pub use telemetry::TelemetryGuard;
pub use telemetry::capture_subscriber;
pub use telemetry::init_tracing;
pub use telemetry::init_tracing_to;
