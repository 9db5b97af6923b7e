//! Front Desk Server - climbing gym front-of-house consistency engine
//!
//! # Overview
//!
//! Everything the front desk does funnels through a handful of
//! cross-entity rules that must hold even with several terminals acting
//! at once:
//!
//! - **Identity resolution** (`domain::identity`): waiver submissions
//!   attach to an existing customer or create one, never both
//! - **Membership ledger** (`api::memberships`): at most one active
//!   membership per customer, constraint-backed
//! - **Check-in gate** (`domain::gate`): waiver and membership state
//!   decide admission; every admit writes exactly one visit
//! - **Sale recorder** (`api::sales`): header plus line items commit
//!   atomically
//! - **Daily aggregator** (`api::reports`): read-only rollup over the
//!   business-timezone day window
//!
//! # Module structure
//!
//! ```text
//! desk-server/src/
//! ├── core/          # config, state, server, errors
//! ├── db/            # pool setup, migrations, repositories
//! ├── domain/        # identity resolver, check-in gate
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # router assembly, middleware
//! └── utils/         # logger, time windows, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod domain;
pub mod services;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env, then bring up logging from the resulting environment
pub fn setup_environment() -> anyhow::Result<()> {
    // .env is optional; real deployments set variables directly
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(Some(&log_level), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______                 __
   / ____/________  ____  / /_
  / /_  / ___/ __ \/ __ \/ __/
 / __/ / /  / /_/ / / / / /_
/_/   /_/   \____/_/ /_/\__/
    ____            __
   / __ \___  _____/ /__
  / / / / _ \/ ___/ //_/
 / /_/ /  __(__  ) ,<
/_____/\___/____/_/|_|
    "#
    );
}
