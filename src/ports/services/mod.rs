mod restore_check_service;

pub use restore_check_service::RestoreCheckService;
