pub mod plan;
pub mod watch;
