use anchor_lang::prelude::*;

declare_id!("GxC1zakKRG25FLw82QnRewACaaSBxywyeL1jC5Vh5R2T");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{CampaignStatus, ParticipantAttestation};

/**
 * Campaign Distributor Program
 *
 * A Solana program for handing out NFT or fungible-token rewards to participants
 * who meet a campaign's social-engagement requirements.
 *
 * Key Features:
 * - NFT campaigns (a fresh 1-of-1 per claim) and TOKEN campaigns (one unit per claim)
 * - Lazily created fungible mint, reused by every later claim
 * - Distribution cap checked and incremented atomically with the mint
 * - Gating on points, streak, account age, follow, reaction, comment and portal membership
 * - Eligibility facts relayed by a per-campaign attestor that co-signs claims
 * - One claim per participant per campaign (leaderboard entry PDA)
 *
 * Architecture:
 * - Campaign PDA: Stores campaign parameters and counters, mint authority of all rewards
 * - Token Mint PDA: Fungible reward mint of a TOKEN campaign
 * - NFT Mint PDAs: One per NFT claim, indexed by claim position
 * - Leaderboard Entry PDAs: One per (campaign, participant)
 *
 * Workflow:
 * 1. Creator creates a campaign and names its attestor
 * 2. Attestor queries the social platform for a participant and co-signs a claim
 * 3. Program verifies the campaign window, cap and requirements, then mints
 * 4. Creator can deactivate the campaign or rotate the attestor at any time
 */
#[program]
pub mod campaign_distributor {
    use super::*;

    /**
     * Creates a new campaign
     *
     * The campaign PDA is derived from the slug of the title, so titles that
     * produce the same slug cannot coexist.
     *
     * @param ctx - Account context containing campaign, creator and attestor accounts
     * @param params - Title, time window, reward, cap and gating requirements
     *
     * Access Control: Anyone (becomes the creator)
     */
    pub fn create_campaign(ctx: Context<CreateCampaign>, params: CreateCampaignParams) -> Result<()> {
        handle_create_campaign(ctx, params)
    }

    /**
     * Activates or deactivates a campaign
     *
     * Access Control: Creator only
     */
    pub fn set_campaign_status(ctx: Context<SetCampaignStatus>, status: CampaignStatus) -> Result<()> {
        handle_set_campaign_status(ctx, status)
    }

    /**
     * Replaces the attestor of a campaign
     *
     * Access Control: Creator only
     */
    pub fn set_attestor(ctx: Context<SetAttestor>) -> Result<()> {
        handle_set_attestor(ctx)
    }

    /**
     * Claims one unit of a TOKEN campaign
     *
     * Creates the campaign's fungible mint on the first claim.
     *
     * @param ctx - Account context containing campaign, mint, leaderboard and token accounts
     * @param attestation - Participant facts relayed by the attestor
     *
     * Access Control: Attestor co-signature, recipient = attested primary wallet
     */
    pub fn claim_token(ctx: Context<ClaimToken>, attestation: ParticipantAttestation) -> Result<()> {
        handle_claim_token(ctx, attestation)
    }

    /**
     * Claims a fresh NFT from an NFT campaign
     *
     * @param ctx - Account context containing campaign, mint, metadata, edition and leaderboard accounts
     * @param attestation - Participant facts relayed by the attestor
     *
     * Access Control: Attestor co-signature, recipient = attested primary wallet
     */
    pub fn claim_nft(ctx: Context<ClaimNft>, attestation: ParticipantAttestation) -> Result<()> {
        handle_claim_nft(ctx, attestation)
    }
}
