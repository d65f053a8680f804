pub mod initialize_vault;
pub use initialize_vault::*;

pub mod deposit_native;
pub use deposit_native::*;

pub mod update_recipients;
pub use update_recipients::*;

pub mod distribute_native;
pub use distribute_native::*;

pub mod distribute_token;
pub use distribute_token::*;

pub mod rescue_native;
pub use rescue_native::*;

pub mod rescue_token;
pub use rescue_token::*;

pub mod transfer_admin;
pub use transfer_admin::*;

pub mod get_recipients;
pub use get_recipients::*;
