mod export;
mod init;
mod overview;
mod score;

pub use export::cmd_export;
pub use init::cmd_init;
pub use overview::cmd_overview;
pub use score::cmd_score;
