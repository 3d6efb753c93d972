//! Domain and wire models shared across the client.

mod role;
mod user;
mod wire;

pub use role::Role;
pub use user::{User, UserProfile};
pub use wire::{ApiProfile, ApiUser, AuthResponse, LoginRequest, RegisterRequest, UserPatch};
