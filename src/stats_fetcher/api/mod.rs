pub mod executor;
pub mod http_client;
pub mod orchestrator;
pub mod urls;

pub use executor::{RequestExecutor, RequestOutcome, RetryPolicy};
pub use http_client::{
    HttpTransport, RawResponse, ReqwestTransport, create_http_client_with_timeout,
};
pub use orchestrator::{INVALID_REGION, LookupOrchestrator};
