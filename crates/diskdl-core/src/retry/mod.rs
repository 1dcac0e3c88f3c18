//! Retry and backoff for transport failures.
//!
//! Only failures where no response arrived are retried. Any HTTP response,
//! whatever its status, goes to the resolver as-is.

mod classify;
mod policy;
mod run;

pub use classify::classify_curl_error;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
