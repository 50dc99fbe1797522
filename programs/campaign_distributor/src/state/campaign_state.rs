use anchor_lang::prelude::*;

use crate::constants::NFT_SELLER_FEE_BASIS_POINTS;
use crate::error::CampaignError;

/// Reward handed out by a campaign
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RewardKind {
    /// A fresh 1-of-1 NFT per claim
    Nft,
    /// One unit of the campaign's fungible token per claim
    Token,
}

impl RewardKind {
    /// Royalty written into the reward's metadata; fungible rewards carry none
    pub fn seller_fee_basis_points(&self) -> u16 {
        match self {
            RewardKind::Nft => NFT_SELLER_FEE_BASIS_POINTS,
            RewardKind::Token => 0,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum CampaignStatus {
    #[default]
    Active,
    Inactive,
}

/**
 * Social engagement requirements of a campaign
 *
 * Every enabled requirement must hold for a participant to be eligible.
 * Thresholds of zero and disabled flags are always satisfied.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct GatingRequirements {
    /// Minimum platform points
    pub required_points: u64,
    /// Minimum consecutive activity days
    pub required_streak_days: u32,
    /// When false, accounts younger than MIN_ACCOUNT_AGE are rejected
    pub allow_recent_accounts: bool,
    pub should_follow_creator: bool,
    pub should_react_to_post: bool,
    pub should_comment_on_post: bool,
    pub should_be_portal_member: bool,
}

/**
 * Campaign state account
 *
 * This struct represents a reward campaign: who created it, what it hands out,
 * how many rewards may be handed out and who may receive them.
 *
 * Derivation: ["campaign", sha256(slug)]
 *
 * Lifecycle:
 * 1. Created during create_campaign instruction
 * 2. Updated on every claim (distributed_count increments)
 * 3. Updated once on the first TOKEN claim (token_mint is assigned)
 * 4. Status and attestor can be changed by the creator
 *
 * Design Notes:
 * - The campaign PDA is the mint authority of all reward mints
 * - `creator` is the first field so clients can filter campaigns by creator
 *   with a memcmp at CREATOR_OFFSET
 */
#[account]
#[derive(InitSpace, Debug)]
pub struct Campaign {
    /// Creator of the campaign
    /// - Can change status and attestor
    pub creator: Pubkey,

    /// Key that attests participant eligibility and co-signs claims
    pub attestor: Pubkey,

    /// sha256 of the slug, used as PDA seed
    pub slug_hash: [u8; 32],

    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when the campaign signs CPIs
    pub bump: u8,

    pub status: CampaignStatus,

    pub reward_kind: RewardKind,

    /// Claims are rejected before this time (Unix timestamp)
    pub start_time: i64,

    /// Claims are rejected after this time, if set
    pub end_time: Option<i64>,

    /// Distribution cap
    pub max_distribution: u64,

    /// Number of rewards already handed out
    /// - Never exceeds max_distribution
    /// - Doubles as the position of the next claim
    pub distributed_count: u64,

    /// Fungible reward mint, assigned by the first TOKEN claim
    pub token_mint: Option<Pubkey>,

    pub requirements: GatingRequirements,

    pub created_at: i64,

    #[max_len(64)]
    pub title: String,

    #[max_len(64)]
    pub slug: String,

    /// Token name for TOKEN campaigns, NFT name for NFT campaigns
    #[max_len(32)]
    pub reward_name: String,

    #[max_len(10)]
    pub token_symbol: String,

    /// Off-chain JSON metadata (name, symbol, image) of the reward
    #[max_len(200)]
    pub metadata_uri: String,
}

impl Campaign {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + serialized struct size
    pub const LEN: usize = 8 + Campaign::INIT_SPACE;

    /// Byte offset of `creator` in the account data
    pub const CREATOR_OFFSET: usize = 8;

    /// Checks status, time window and cap for a claim at `now`
    pub fn ensure_claimable(&self, now: i64) -> Result<()> {
        require!(
            self.status == CampaignStatus::Active,
            CampaignError::CampaignInactive
        );
        require!(now >= self.start_time, CampaignError::CampaignNotStarted);
        if let Some(end_time) = self.end_time {
            require!(now <= end_time, CampaignError::CampaignEnded);
        }
        require!(
            self.distributed_count < self.max_distribution,
            CampaignError::MaxDistributionReached
        );
        Ok(())
    }

    /// Counts one reward against the cap and returns its position
    pub fn record_claim(&mut self) -> Result<u64> {
        require!(
            self.distributed_count < self.max_distribution,
            CampaignError::MaxDistributionReached
        );
        let position = self.distributed_count;
        self.distributed_count = position
            .checked_add(1)
            .ok_or(CampaignError::ArithmeticOverflow)?;
        Ok(position)
    }

    /// Binds the campaign to its fungible mint
    ///
    /// Returns true when this call assigned the mint, false when the same
    /// mint was already assigned.
    pub fn assign_token_mint(&mut self, mint: Pubkey) -> Result<bool> {
        match self.token_mint {
            Some(existing) => {
                require_keys_eq!(existing, mint, CampaignError::TokenMintMismatch);
                Ok(false)
            }
            None => {
                self.token_mint = Some(mint);
                Ok(true)
            }
        }
    }

    pub fn remaining(&self) -> u64 {
        self.max_distribution.saturating_sub(self.distributed_count)
    }
}
