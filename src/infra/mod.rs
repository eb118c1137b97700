//! Infrastructure: the HTTP client and the submission pipeline around it.

pub mod submit;
pub mod transport;

#[allow(unused_imports)]
pub use submit::{ResultSink, SubmitError, SubmitGate, Submitter};
#[allow(unused_imports)]
pub use transport::{HttpTransport, Transport, TransportError};
