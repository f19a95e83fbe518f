mod cart_service_logger;
mod tracing_logger;

pub use cart_service_logger::TracingCartService;
pub use tracing_logger::TracingLogger;
