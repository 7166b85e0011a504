pub mod breeds;
pub mod dolls;
pub mod pets;

// Re-export handler functions
pub use breeds::*;
pub use dolls::*;
pub use pets::*;
