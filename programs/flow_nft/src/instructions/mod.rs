pub mod initialize_registry;
pub mod bind_recorder;
pub mod mint;
pub mod record_interaction;
pub mod read_identity;
pub mod token_uri;

pub use initialize_registry::*;
pub use bind_recorder::*;
pub use mint::*;
pub use record_interaction::*;
pub use read_identity::*;
pub use token_uri::*;
