mod audit;
mod extract;
mod inject;

pub use audit::{run_audit_assets, run_audit_pages};
pub use extract::run_extract;
pub use inject::{run_inject_scripts, run_inject_stylesheets};
