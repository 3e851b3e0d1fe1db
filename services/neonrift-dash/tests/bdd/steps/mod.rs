//! BDD step definitions for the neonrift dashboard

pub mod auto_refresh_steps;
pub mod device_steps;
pub mod poller_steps;
