mod auction_created;
pub use auction_created::*;

mod auction_purchased;
pub use auction_purchased::*;

mod auction_withdrawn;
pub use auction_withdrawn::*;
