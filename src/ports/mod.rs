/// Ports module defining interfaces for hexagonal architecture
///
/// The CLI drives the application directly through its use case; the
/// outbound (driven) ports here describe everything the core needs from
/// infrastructure.
pub mod outbound;
