pub mod initialize_tip_module;
pub mod set_min_tip;
pub mod tip;
pub mod batch_tip;
pub mod withdraw;
pub mod read_ledger;

pub use initialize_tip_module::*;
pub use set_min_tip::*;
pub use tip::*;
pub use batch_tip::*;
pub use withdraw::*;
pub use read_ledger::*;
