pub mod create_auction;
pub mod purchase;
pub mod withdraw;

pub use create_auction::*;
pub use purchase::*;
pub use withdraw::*;
