//! Entity services: validate inputs, translate them to row shape, issue
//! one store operation and hand back application models.
//!
//! Every service holds the same `Arc<dyn Store>`; [`Services`] bundles
//! them for the API layer.

use std::sync::Arc;

use bauhub_db::Store;

pub mod error;
pub mod fleet;
pub mod profile;
pub mod project;
pub mod subsystem;
pub mod supplier;

pub use error::{ServiceError, ServiceResult};
pub use fleet::FleetService;
pub use profile::ProfileService;
pub use project::ProjectService;
pub use subsystem::SubsystemService;
pub use supplier::SupplierService;

/// All entity services over one store.
#[derive(Clone)]
pub struct Services {
    pub projects: ProjectService,
    pub subsystems: SubsystemService,
    pub suppliers: SupplierService,
    pub fleet: FleetService,
    pub profiles: ProfileService,
}

impl Services {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            projects: ProjectService::new(Arc::clone(&store)),
            subsystems: SubsystemService::new(Arc::clone(&store)),
            suppliers: SupplierService::new(Arc::clone(&store)),
            fleet: FleetService::new(Arc::clone(&store)),
            profiles: ProfileService::new(store),
        }
    }
}
