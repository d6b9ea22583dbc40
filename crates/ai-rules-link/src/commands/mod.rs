pub mod base;
pub mod common;
pub mod config;
pub mod diff;
pub mod init;
pub mod list;
pub mod rules;
pub mod status;

pub use base::Base;
pub use common::CommandContext;
pub use config::Config;
pub use diff::Diff;
pub use init::Init;
pub use list::List;
pub use rules::Rules;
pub use status::Status;
