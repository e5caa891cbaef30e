//! HTTP layer: the [`Transport`] seam and the request/response [`Envelope`].

pub mod envelope;
pub mod transport;

pub use envelope::Envelope;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
