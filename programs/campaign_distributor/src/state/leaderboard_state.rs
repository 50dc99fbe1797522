use anchor_lang::prelude::*;

/**
 * Leaderboard entry account
 *
 * One entry per participant that received a reward from a campaign.
 *
 * Derivation: ["leaderboard", campaign_key, sha256(user_id)]
 *
 * Lifecycle:
 * 1. Created by claim_token / claim_nft (using init)
 * 2. Never modified afterwards
 *
 * Design Notes:
 * - `init` fails when the entry already exists, so a participant can claim once per campaign
 * - `campaign` is the first field so clients can list a leaderboard with a memcmp
 *   at CAMPAIGN_OFFSET and order it by `position`
 */
#[account]
#[derive(InitSpace, Debug)]
pub struct LeaderboardEntry {
    pub campaign: Pubkey,

    /// Wallet that received the reward
    pub recipient: Pubkey,

    /// Shared token mint or the NFT mint created for this claim
    pub reward_mint: Pubkey,

    /// Claim ordinal within the campaign, starting at 0
    pub position: u64,

    pub claimed_at: i64,

    #[max_len(64)]
    pub user_id: String,

    #[max_len(32)]
    pub username: String,

    pub bump: u8,
}

impl LeaderboardEntry {
    pub const LEN: usize = 8 + LeaderboardEntry::INIT_SPACE;

    pub const CAMPAIGN_OFFSET: usize = 8;
}
