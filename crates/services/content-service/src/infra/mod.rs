//! Infrastructure layer - database and schema migrations.

mod db;
pub mod migrations;

pub use db::{Database, HealthProbe};
pub use migrations::Migrator;
