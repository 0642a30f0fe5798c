// Concrete implementations of the domain ports.

pub mod bisnode;

pub use bisnode::BisnodeClient;
