pub mod test_eligibility;
pub mod test_params;

use anchor_lang::prelude::*;

use crate::error::CampaignError;
use crate::state::*;
use crate::utils::slug_hash;

/// Fixed "now" for all tests (2024-06-01T00:00:00Z)
pub const NOW: i64 = 1_717_200_000;

pub fn sample_campaign(reward_kind: RewardKind, max_distribution: u64) -> Campaign {
    Campaign {
        creator: Pubkey::new_unique(),
        attestor: Pubkey::new_unique(),
        slug_hash: slug_hash("summer_drop"),
        bump: 254,
        status: CampaignStatus::Active,
        reward_kind,
        start_time: NOW - 3_600,
        end_time: Some(NOW + 3_600),
        max_distribution,
        distributed_count: 0,
        token_mint: None,
        requirements: GatingRequirements::default(),
        created_at: NOW - 7_200,
        title: "Summer Drop".to_string(),
        slug: "summer_drop".to_string(),
        reward_name: "Summer".to_string(),
        token_symbol: "SUM".to_string(),
        metadata_uri: "https://example.com/summer.json".to_string(),
    }
}

/// A participant that satisfies every requirement the tests use
pub fn sample_attestation() -> ParticipantAttestation {
    ParticipantAttestation {
        user_id: "1201336789738979476".to_string(),
        username: "alice".to_string(),
        content_id: "1201336789738979999".to_string(),
        points: 500,
        streak_days: 10,
        account_created_at: NOW - 90 * 24 * 60 * 60,
        follows_creator: true,
        reacted_to_content: true,
        commented_on_content: true,
        is_portal_member: true,
        primary_wallet: Pubkey::new_unique(),
        issued_at: NOW - 10,
    }
}

pub fn assert_campaign_error<T: std::fmt::Debug>(result: Result<T>, expected: CampaignError) {
    let err = result.expect_err("expected an error");
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}
