//! Command implementations.

pub mod categorize;
pub mod config;
pub mod evaluate;
pub mod films;
pub mod report;
pub mod rules;

pub use self::categorize::execute_categorize;
pub use self::config::execute_config;
pub use self::evaluate::execute_evaluate;
pub use self::films::execute_films;
pub use self::report::execute_report;
pub use self::rules::execute_rules;
