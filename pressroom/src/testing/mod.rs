//! Test doubles for pressroom's injected capabilities.
//!
//! Everything here is usable from unit tests, integration tests, and
//! downstream consumers that want scripted probes or engines.

mod mocks;

pub use mocks::{
    CacheOutcome, EngineOutcome, MockCacheProbe, MockSelfProbe, RecordingEngine, SelfOutcome,
};
