/// Mapping of domain errors to HTTP responses
pub mod error_handling;
/// Request extractors that check payloads against their schema
pub mod validation;
