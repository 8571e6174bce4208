//! Domain model for a skill gap analysis
//! Roles, the outbound request, the backend result and the request lifecycle

pub mod request;
pub mod result;
pub mod role;
pub mod state;

pub use request::AnalysisRequest;
pub use result::{AnalysisResponse, AnalysisResult};
pub use role::Role;
pub use state::RequestState;
