/// Inbound adapters - Sources of events that drive the application
mod signal_listener;

pub use signal_listener::spawn_signal_listener;
