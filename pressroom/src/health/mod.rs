//! Health-check orchestration.
//!
//! On each invocation the orchestrator launches two probes concurrently —
//! a cache/store availability check and a self-referential HTTP reachability
//! check — joins them with fail-fast semantics, and collapses the outcome
//! into a tri-state [`HealthVerdict`]. Verdicts are computed fresh per
//! invocation; nothing is cached between calls.

mod endpoint;
mod join;
mod orchestrator;
mod orchestrator_tests;
mod probes;
mod verdict;

pub use endpoint::{router, AppState};
pub use join::ProbeGroup;
pub use orchestrator::HealthCheck;
pub use probes::{CacheProbe, HttpSelfProbe, SelfProbe, TcpCachePing};
pub use verdict::{HealthVerdict, ProbeReport};
