// Adapters layer: concrete implementations of the domain ports.

pub mod airvisual;

pub use airvisual::AirVisualClient;
