//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Konfiguration, die von `app`, `render` und dem Host
//! gleichermaßen gelesen wird.

pub mod options;

pub use options::DemoOptions;
