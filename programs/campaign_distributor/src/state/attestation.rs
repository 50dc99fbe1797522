use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;

use crate::constants::*;
use crate::error::CampaignError;

/**
 * Participant facts relayed by the campaign attestor
 *
 * The attestor reads these from the social platform's identity service
 * for one (user, content) pair and passes them as a claim argument. The
 * attestor signs the claim transaction, which covers this payload.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipantAttestation {
    /// Platform user id
    pub user_id: String,
    pub username: String,
    /// Post the campaign is embedded in
    pub content_id: String,
    pub points: u64,
    pub streak_days: u32,
    /// Unix timestamp of the platform account creation
    pub account_created_at: i64,
    /// Participant follows the creator of the content
    pub follows_creator: bool,
    pub reacted_to_content: bool,
    pub commented_on_content: bool,
    /// Participant is a member of the content's portal
    pub is_portal_member: bool,
    /// Primary wallet registered with the platform; the reward goes here
    pub primary_wallet: Pubkey,
    /// When the attestor queried the identity service
    pub issued_at: i64,
}

impl ParticipantAttestation {
    /// Leaderboard seed for this participant
    pub fn participant_seed(&self) -> [u8; 32] {
        hash(self.user_id.as_bytes()).to_bytes()
    }

    /// Checks the string fields fit the leaderboard entry
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.user_id.is_empty() && self.user_id.len() <= MAX_USER_ID_LEN,
            CampaignError::InvalidAttestation
        );
        require!(
            !self.username.is_empty() && self.username.len() <= MAX_USERNAME_LEN,
            CampaignError::InvalidAttestation
        );
        require!(
            !self.content_id.is_empty() && self.content_id.len() <= MAX_CONTENT_ID_LEN,
            CampaignError::InvalidAttestation
        );
        require!(
            self.primary_wallet != Pubkey::default(),
            CampaignError::InvalidAttestation
        );
        Ok(())
    }

    /// Rejects stale attestations and ones issued ahead of the cluster clock
    pub fn ensure_fresh(&self, now: i64) -> Result<()> {
        require!(
            self.issued_at <= now.saturating_add(ATTESTATION_CLOCK_SKEW),
            CampaignError::AttestationFromFuture
        );
        require!(
            now.saturating_sub(self.issued_at) <= ATTESTATION_TTL,
            CampaignError::AttestationExpired
        );
        Ok(())
    }
}
