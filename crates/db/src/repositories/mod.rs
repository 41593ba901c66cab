//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Inputs are the row-shaped
//! `*Changes` partials; `None` binds as `NULL` and is coalesced away on
//! update.

pub mod activity_repo;
pub mod material_repo;
pub mod position_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod reservation_repo;
pub mod subsystem_repo;
pub mod supplier_repo;
pub mod vehicle_repo;

pub use activity_repo::ActivityRepo;
pub use material_repo::MaterialRepo;
pub use position_repo::PositionRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use reservation_repo::ReservationRepo;
pub use subsystem_repo::SubsystemRepo;
pub use supplier_repo::SupplierRepo;
pub use vehicle_repo::VehicleRepo;
