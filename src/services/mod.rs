pub mod decision;
pub mod local_files;

mod executor;
mod probe;
mod restore_check_service_impl;

pub use decision::{decide, depends_on_local_file};
pub use executor::ActionExecutor;
pub use local_files::{local_file_exists, write_atomically};
pub use probe::ObjectProbe;
pub use restore_check_service_impl::RestoreCheckServiceImpl;
