/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the conversion domain and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod use_cases;
