//! REST API access: endpoint routing, transport port and the API service.
//!
//! ```text
//! Endpoint + SessionContext ──→ router::build ──→ BuiltRequest ──→ Transport ──→ HttpResponse
//! ```

mod client;
mod error;
mod models;
pub mod router;
mod transport;

pub use client::{ApiClient, ApiService};
pub use error::{ApiError, RouterError, TransportError};
pub use models::{
    ClubCreated, CreateClubRequest, GetClubResponse, Member, MemberList, SaveGoalRequest,
    SignUpRequest, TimerResponse,
};
pub use router::{BuiltRequest, Endpoint};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
