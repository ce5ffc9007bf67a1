/// Ports module defining interfaces for hexagonal architecture
///
/// The application core talks to files, the console and the database
/// only through the outbound ports defined here.
pub mod outbound;
