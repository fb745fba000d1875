// Adapters layer: concrete implementations for external systems (http backend, local files).

pub mod http;
pub mod storage;
