/// PostgreSQL adapters for database readiness checks
mod postgres_probe;
mod tls;

pub use postgres_probe::PostgresProbe;
