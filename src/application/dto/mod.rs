/// Data Transfer Objects for the application layer
mod conversion_request;
mod conversion_response;

pub use conversion_request::ConversionRequest;
pub use conversion_response::ConversionResponse;
