pub mod homeworks;
pub mod roster;
pub mod submissions;
pub mod system;

pub use homeworks::HomeworkService;
pub use roster::RosterService;
pub use submissions::SubmissionService;
pub use system::SystemService;
