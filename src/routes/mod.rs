pub mod frontend;

pub mod homeworks;

pub mod roster;

pub mod submissions;

pub mod system;

pub use frontend::configure_frontend_routes;
pub use homeworks::configure_homeworks_routes;
pub use roster::configure_roster_routes;
pub use submissions::configure_submissions_routes;
pub use system::configure_system_routes;
