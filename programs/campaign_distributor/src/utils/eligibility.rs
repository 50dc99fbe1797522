use anchor_lang::prelude::*;

use crate::constants::MIN_ACCOUNT_AGE;
use crate::error::CampaignError;
use crate::state::{Campaign, GatingRequirements, ParticipantAttestation};

/// Checks every enabled requirement of a campaign against an attested participant
///
/// All requirements are combined with AND. The first unmet requirement is
/// returned as its own error so clients can tell the participant what is missing.
pub fn verify_eligibility(
    requirements: &GatingRequirements,
    participant: &ParticipantAttestation,
    now: i64,
) -> Result<()> {
    require!(
        participant.points >= requirements.required_points,
        CampaignError::InsufficientPoints
    );
    require!(
        participant.streak_days >= requirements.required_streak_days,
        CampaignError::InsufficientStreak
    );
    require!(
        requirements.allow_recent_accounts
            || is_account_old_enough(participant.account_created_at, now),
        CampaignError::AccountTooRecent
    );
    require!(
        !requirements.should_follow_creator || participant.follows_creator,
        CampaignError::NotFollowingCreator
    );
    require!(
        !requirements.should_react_to_post || participant.reacted_to_content,
        CampaignError::MissingReaction
    );
    require!(
        !requirements.should_comment_on_post || participant.commented_on_content,
        CampaignError::MissingComment
    );
    require!(
        !requirements.should_be_portal_member || participant.is_portal_member,
        CampaignError::NotPortalMember
    );
    Ok(())
}

pub fn is_account_old_enough(account_created_at: i64, now: i64) -> bool {
    now.saturating_sub(account_created_at) >= MIN_ACCOUNT_AGE
}

/// Every check a claim runs before touching any account
///
/// Order: campaign status, time window and cap, then the attestation
/// payload and its freshness, then the campaign's gating requirements.
pub fn verify_claim(
    campaign: &Campaign,
    participant: &ParticipantAttestation,
    now: i64,
) -> Result<()> {
    campaign.ensure_claimable(now)?;
    participant.validate()?;
    participant.ensure_fresh(now)?;
    verify_eligibility(&campaign.requirements, participant, now)
}
