#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::error::CampaignError;
    use crate::state::*;
    use crate::test::*;
    use crate::utils::{is_account_old_enough, verify_claim, verify_eligibility};
    use anchor_lang::prelude::Pubkey;

    fn is_eligible(
        requirements: &GatingRequirements,
        participant: &ParticipantAttestation,
        now: i64,
    ) -> bool {
        verify_eligibility(requirements, participant, now).is_ok()
    }

    fn all_requirements() -> GatingRequirements {
        GatingRequirements {
            required_points: 100,
            required_streak_days: 7,
            allow_recent_accounts: false,
            should_follow_creator: true,
            should_react_to_post: true,
            should_comment_on_post: true,
            should_be_portal_member: true,
        }
    }

    #[test]
    fn test_no_requirements_accepts_fresh_participant() {
        let requirements = GatingRequirements {
            allow_recent_accounts: true,
            ..GatingRequirements::default()
        };
        let participant = ParticipantAttestation {
            points: 0,
            streak_days: 0,
            account_created_at: NOW,
            follows_creator: false,
            reacted_to_content: false,
            commented_on_content: false,
            is_portal_member: false,
            ..sample_attestation()
        };

        assert!(is_eligible(&requirements, &participant, NOW));
    }

    #[test]
    fn test_all_requirements_met() {
        verify_eligibility(&all_requirements(), &sample_attestation(), NOW).unwrap();
    }

    #[test]
    fn test_each_requirement_is_enforced() {
        let requirements = all_requirements();
        let base = sample_attestation();

        let cases: Vec<(ParticipantAttestation, CampaignError)> = vec![
            (
                ParticipantAttestation { points: 99, ..base.clone() },
                CampaignError::InsufficientPoints,
            ),
            (
                ParticipantAttestation { streak_days: 6, ..base.clone() },
                CampaignError::InsufficientStreak,
            ),
            (
                ParticipantAttestation { account_created_at: NOW - 60, ..base.clone() },
                CampaignError::AccountTooRecent,
            ),
            (
                ParticipantAttestation { follows_creator: false, ..base.clone() },
                CampaignError::NotFollowingCreator,
            ),
            (
                ParticipantAttestation { reacted_to_content: false, ..base.clone() },
                CampaignError::MissingReaction,
            ),
            (
                ParticipantAttestation { commented_on_content: false, ..base.clone() },
                CampaignError::MissingComment,
            ),
            (
                ParticipantAttestation { is_portal_member: false, ..base.clone() },
                CampaignError::NotPortalMember,
            ),
        ];

        for (participant, expected) in cases {
            assert!(!is_eligible(&requirements, &participant, NOW));
            assert_campaign_error(
                verify_eligibility(&requirements, &participant, NOW),
                expected,
            );
        }
    }

    #[test]
    fn test_disabled_flags_are_ignored() {
        // Only points are required; every engagement flag is false
        let requirements = GatingRequirements {
            required_points: 100,
            allow_recent_accounts: true,
            ..GatingRequirements::default()
        };
        let participant = ParticipantAttestation {
            account_created_at: NOW,
            follows_creator: false,
            reacted_to_content: false,
            commented_on_content: false,
            is_portal_member: false,
            ..sample_attestation()
        };

        assert!(is_eligible(&requirements, &participant, NOW));
    }

    #[test]
    fn test_one_failing_requirement_fails_the_whole_check() {
        let requirements = all_requirements();

        // Exhaust every combination of the four engagement flags
        for mask in 0u8..16 {
            let participant = ParticipantAttestation {
                follows_creator: mask & 1 != 0,
                reacted_to_content: mask & 2 != 0,
                commented_on_content: mask & 4 != 0,
                is_portal_member: mask & 8 != 0,
                ..sample_attestation()
            };
            assert_eq!(
                is_eligible(&requirements, &participant, NOW),
                mask == 15,
                "mask {:04b}",
                mask
            );
        }
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let requirements = all_requirements();
        let participant = ParticipantAttestation {
            points: requirements.required_points,
            streak_days: requirements.required_streak_days,
            account_created_at: NOW - MIN_ACCOUNT_AGE,
            ..sample_attestation()
        };

        assert!(is_eligible(&requirements, &participant, NOW));
    }

    #[test]
    fn test_account_age() {
        assert!(is_account_old_enough(NOW - MIN_ACCOUNT_AGE, NOW));
        assert!(!is_account_old_enough(NOW - MIN_ACCOUNT_AGE + 1, NOW));
        assert!(!is_account_old_enough(NOW + 100, NOW));

        let recent = ParticipantAttestation {
            account_created_at: NOW - 24 * 60 * 60,
            ..sample_attestation()
        };
        let strict = GatingRequirements::default();
        let lenient = GatingRequirements {
            allow_recent_accounts: true,
            ..GatingRequirements::default()
        };
        assert!(!is_eligible(&strict, &recent, NOW));
        assert!(is_eligible(&lenient, &recent, NOW));
    }

    #[test]
    fn test_attestation_freshness() {
        let mut participant = sample_attestation();

        participant.issued_at = NOW - ATTESTATION_TTL;
        participant.ensure_fresh(NOW).unwrap();

        participant.issued_at = NOW - ATTESTATION_TTL - 1;
        assert_campaign_error(participant.ensure_fresh(NOW), CampaignError::AttestationExpired);

        participant.issued_at = NOW + ATTESTATION_CLOCK_SKEW;
        participant.ensure_fresh(NOW).unwrap();

        participant.issued_at = NOW + ATTESTATION_CLOCK_SKEW + 1;
        assert_campaign_error(
            participant.ensure_fresh(NOW),
            CampaignError::AttestationFromFuture,
        );
    }

    #[test]
    fn test_attestation_fields_validated() {
        sample_attestation().validate().unwrap();

        let invalid = vec![
            ParticipantAttestation { user_id: String::new(), ..sample_attestation() },
            ParticipantAttestation { user_id: "1".repeat(MAX_USER_ID_LEN + 1), ..sample_attestation() },
            ParticipantAttestation { username: String::new(), ..sample_attestation() },
            ParticipantAttestation { username: "a".repeat(MAX_USERNAME_LEN + 1), ..sample_attestation() },
            ParticipantAttestation { content_id: String::new(), ..sample_attestation() },
            ParticipantAttestation { primary_wallet: Pubkey::default(), ..sample_attestation() },
        ];
        for participant in invalid {
            assert_campaign_error(participant.validate(), CampaignError::InvalidAttestation);
        }
    }

    #[test]
    fn test_participant_seed_is_per_user() {
        let alice = sample_attestation();
        let alice_other_wallet = ParticipantAttestation {
            primary_wallet: Pubkey::new_unique(),
            ..sample_attestation()
        };
        let bob = ParticipantAttestation {
            user_id: "42".to_string(),
            ..sample_attestation()
        };

        assert_eq!(alice.participant_seed(), alice_other_wallet.participant_seed());
        assert_ne!(alice.participant_seed(), bob.participant_seed());
    }

    #[test]
    fn test_verify_claim_checks_campaign_before_participant() {
        let mut campaign = sample_campaign(RewardKind::Nft, 1);
        campaign.requirements = all_requirements();
        campaign.status = CampaignStatus::Inactive;

        let ineligible = ParticipantAttestation {
            points: 0,
            ..sample_attestation()
        };

        assert_campaign_error(
            verify_claim(&campaign, &ineligible, NOW),
            CampaignError::CampaignInactive,
        );

        campaign.status = CampaignStatus::Active;
        assert_campaign_error(
            verify_claim(&campaign, &ineligible, NOW),
            CampaignError::InsufficientPoints,
        );

        verify_claim(&campaign, &sample_attestation(), NOW).unwrap();
    }
}
