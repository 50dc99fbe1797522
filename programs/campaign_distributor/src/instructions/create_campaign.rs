use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{campaign_seed, slug_hash, slugify};
use anchor_lang::prelude::*;

/// Creation payload of a campaign
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateCampaignParams {
    pub title: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub reward_kind: RewardKind,
    /// Token name (TOKEN) or NFT name (NFT)
    pub reward_name: String,
    /// Required for TOKEN, ignored for NFT
    pub token_symbol: String,
    /// JSON metadata uploaded by the creator's client
    pub metadata_uri: String,
    pub max_distribution: u64,
    pub requirements: GatingRequirements,
}

impl CreateCampaignParams {
    /// Validates the payload and returns the derived slug
    pub fn validate(&self) -> Result<String> {
        require!(
            !self.title.trim().is_empty() && self.title.len() <= MAX_TITLE_LEN,
            CampaignError::InvalidTitle
        );

        let slug = slugify(&self.title);
        require!(
            !slug.is_empty() && slug.len() <= MAX_SLUG_LEN,
            CampaignError::InvalidSlug
        );

        require!(
            self.max_distribution > 0,
            CampaignError::InvalidMaxDistribution
        );

        if let Some(end_time) = self.end_time {
            require!(end_time > self.start_time, CampaignError::InvalidTimeWindow);
        }

        require!(
            !self.reward_name.is_empty() && self.reward_name.len() <= MAX_NAME_LEN,
            CampaignError::InvalidRewardName
        );

        require!(
            self.token_symbol.len() <= MAX_SYMBOL_LEN,
            CampaignError::InvalidTokenSymbol
        );
        if self.reward_kind == RewardKind::Token {
            require!(
                !self.token_symbol.is_empty(),
                CampaignError::InvalidTokenSymbol
            );
        }

        require!(
            self.metadata_uri.len() <= MAX_URI_LEN,
            CampaignError::InvalidMetadataUri
        );

        Ok(slug)
    }
}

/**
 * Account context for creating a campaign
 *
 * - Creates the campaign PDA derived from the slug of the title
 * - Records the attestor that will co-sign claims
 *
 * Access Control: Anyone can create a campaign and becomes its creator
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(params: CreateCampaignParams)]
pub struct CreateCampaign<'info> {
    /// The campaign account (PDA)
    /// - Derived from: ["campaign", sha256(slug)]
    /// - Creation fails if another campaign already uses the slug
    #[account(
        init,
        payer = creator,
        space = Campaign::LEN,
        seeds = [CAMPAIGN_SEED.as_bytes(), campaign_seed(&params.title).as_ref()],
        bump
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    /// The creator of the campaign
    /// - Pays for the campaign account
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The key that attests participant eligibility
    /// CHECK: This account is validated by storing its key in the campaign state
    pub attestor: UncheckedAccount<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_create_campaign(
    ctx: Context<CreateCampaign>,
    params: CreateCampaignParams,
) -> Result<()> {
    let slug = params.validate()?;

    require!(
        ctx.accounts.attestor.key() != Pubkey::default(),
        CampaignError::InvalidAttestor
    );

    let now = Clock::get()?.unix_timestamp;
    let campaign = &mut ctx.accounts.campaign;

    campaign.set_inner(Campaign {
        creator: ctx.accounts.creator.key(),
        attestor: ctx.accounts.attestor.key(),
        slug_hash: slug_hash(&slug),
        bump: ctx.bumps.campaign,
        status: CampaignStatus::Active,
        reward_kind: params.reward_kind,
        start_time: params.start_time,
        end_time: params.end_time,
        max_distribution: params.max_distribution,
        distributed_count: 0,
        token_mint: None,
        requirements: params.requirements,
        created_at: now,
        title: params.title,
        slug: slug.clone(),
        reward_name: params.reward_name,
        token_symbol: params.token_symbol,
        metadata_uri: params.metadata_uri,
    });

    emit_cpi!(CampaignCreated {
        campaign: campaign.key(),
        creator: campaign.creator,
        slug,
        reward_kind: campaign.reward_kind,
        max_distribution: campaign.max_distribution,
        attestor: campaign.attestor,
    });

    Ok(())
}
