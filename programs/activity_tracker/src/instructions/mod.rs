pub mod like;
pub mod batch_like;
pub mod read_likes;

pub use like::*;
pub use batch_like::*;
pub use read_likes::*;
