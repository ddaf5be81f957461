use crate::model::HealthRes;

/// Health check shared by every server surface.
///
/// Used by monitoring and load balancer probes; carries no state.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Reports the service as alive.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Hale API is alive".into(),
        }
    }
}
