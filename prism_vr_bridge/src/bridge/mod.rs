/// Bridge module - swap-chain and mirror-texture management

// Module declarations
pub mod mirror_texture;
pub mod session;
pub mod swap_chain;
pub mod texture_bridge;

// Re-export everything
pub use mirror_texture::*;
pub use session::*;
pub use swap_chain::*;
pub use texture_bridge::*;
