pub mod migration;

pub use migration::{MigrationCandidate, MigrationPlanner};
