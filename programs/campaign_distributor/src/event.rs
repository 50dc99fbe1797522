use anchor_lang::prelude::*;

use crate::state::{CampaignStatus, RewardKind};

/// Event emitted when a new campaign is created
#[event]
pub struct CampaignCreated {
    /// The campaign account public key
    pub campaign: Pubkey,
    /// Creator of the campaign
    pub creator: Pubkey,
    /// Slug derived from the title
    pub slug: String,
    /// NFT or TOKEN
    pub reward_kind: RewardKind,
    /// Distribution cap
    pub max_distribution: u64,
    /// Key allowed to attest participant eligibility
    pub attestor: Pubkey,
}

/// Event emitted when the creator activates or deactivates a campaign
#[event]
pub struct CampaignStatusUpdated {
    pub campaign: Pubkey,
    pub status: CampaignStatus,
}

/// Event emitted when the creator rotates the attestor
#[event]
pub struct AttestorUpdated {
    pub campaign: Pubkey,
    pub previous_attestor: Pubkey,
    pub attestor: Pubkey,
}

/// Event emitted once per TOKEN campaign, on the claim that creates its mint
#[event]
pub struct TokenMintCreated {
    pub campaign: Pubkey,
    pub token_mint: Pubkey,
}

/// Event emitted for every successful claim
#[event]
pub struct RewardClaimed {
    /// The campaign account public key
    pub campaign: Pubkey,
    /// Wallet that received the reward
    pub recipient: Pubkey,
    /// Mint of the reward (shared mint for TOKEN, fresh mint for NFT)
    pub reward_mint: Pubkey,
    /// Platform identity of the participant
    pub user_id: String,
    /// Claim ordinal within the campaign
    pub position: u64,
    /// Distributed count after this claim
    pub distributed_count: u64,
}
