pub mod create_campaign;
pub mod set_campaign_status;
pub mod set_attestor;
pub mod claim_token;
pub mod claim_nft;

pub use create_campaign::*;
pub use set_campaign_status::*;
pub use set_attestor::*;
pub use claim_token::*;
pub use claim_nft::*;
