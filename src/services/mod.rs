pub mod content_extractor;
pub mod fetcher;
pub mod model_service;
pub mod quiz_generator;
pub mod quiz_service;
