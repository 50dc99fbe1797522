#[cfg(test)]
mod tests {
    use crate::error::CampaignError;
    use crate::instructions::CreateCampaignParams;
    use crate::state::*;
    use crate::test::*;
    use crate::utils::{campaign_seed, slug_hash, slugify};

    fn token_params() -> CreateCampaignParams {
        CreateCampaignParams {
            title: "Summer Drop".to_string(),
            start_time: NOW,
            end_time: Some(NOW + 86_400),
            reward_kind: RewardKind::Token,
            reward_name: "Summer".to_string(),
            token_symbol: "SUM".to_string(),
            metadata_uri: "https://example.com/summer.json".to_string(),
            max_distribution: 100,
            requirements: GatingRequirements::default(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Summer Drop"), "summer_drop");
        assert_eq!(slugify("  Summer   Drop  "), "summer_drop");
        assert_eq!(slugify("GM! Frens (v2)"), "gm_frens_v2");
        assert_eq!(slugify("already_slugged-title"), "already_slugged-title");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_titles_with_same_slug_share_a_seed() {
        assert_eq!(campaign_seed("Summer Drop"), campaign_seed("summer   drop"));
        assert_eq!(campaign_seed("Summer Drop"), slug_hash("summer_drop"));
        assert_ne!(campaign_seed("Summer Drop"), campaign_seed("Winter Drop"));
    }

    #[test]
    fn test_valid_params_return_slug() {
        assert_eq!(token_params().validate().unwrap(), "summer_drop");

        let nft = CreateCampaignParams {
            reward_kind: RewardKind::Nft,
            token_symbol: String::new(),
            end_time: None,
            ..token_params()
        };
        assert_eq!(nft.validate().unwrap(), "summer_drop");
    }

    #[test]
    fn test_invalid_params() {
        let cases = vec![
            (
                CreateCampaignParams { title: "   ".to_string(), ..token_params() },
                CampaignError::InvalidTitle,
            ),
            (
                CreateCampaignParams { title: "x".repeat(65), ..token_params() },
                CampaignError::InvalidTitle,
            ),
            (
                CreateCampaignParams { title: "???".to_string(), ..token_params() },
                CampaignError::InvalidSlug,
            ),
            (
                CreateCampaignParams { max_distribution: 0, ..token_params() },
                CampaignError::InvalidMaxDistribution,
            ),
            (
                CreateCampaignParams { end_time: Some(NOW), ..token_params() },
                CampaignError::InvalidTimeWindow,
            ),
            (
                CreateCampaignParams { reward_name: String::new(), ..token_params() },
                CampaignError::InvalidRewardName,
            ),
            (
                CreateCampaignParams { reward_name: "n".repeat(33), ..token_params() },
                CampaignError::InvalidRewardName,
            ),
            (
                CreateCampaignParams { token_symbol: String::new(), ..token_params() },
                CampaignError::InvalidTokenSymbol,
            ),
            (
                CreateCampaignParams { token_symbol: "LONGSYMBOL1".to_string(), ..token_params() },
                CampaignError::InvalidTokenSymbol,
            ),
            (
                CreateCampaignParams { metadata_uri: "u".repeat(201), ..token_params() },
                CampaignError::InvalidMetadataUri,
            ),
        ];

        for (params, expected) in cases {
            assert_campaign_error(params.validate(), expected);
        }
    }
}
