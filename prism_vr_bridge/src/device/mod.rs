/// Device module - the seam between the bridge and a native graphics API

// Module declarations
pub mod graphics_device;
pub mod mock_device;

// Re-export the trait and handle types
pub use graphics_device::*;
