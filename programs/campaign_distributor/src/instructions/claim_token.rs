use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::Metadata;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::{create_reward_metadata, mint_reward, verify_claim, MetadataAccounts};

/**
 * Account context for claiming one unit of a TOKEN campaign
 *
 * The first claim of a campaign creates the fungible mint and its metadata;
 * every later claim reuses that mint. The recipient's associated token
 * account is created when missing.
 *
 * Access Control: The campaign attestor must co-sign; the recipient must be
 * the attested primary wallet of the participant
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(attestation: ParticipantAttestation)]
pub struct ClaimToken<'info> {
    /// The campaign being claimed from
    /// - Write-locked for the whole claim, which serializes concurrent claims
    #[account(
        mut,
        seeds = [CAMPAIGN_SEED.as_bytes(), campaign.slug_hash.as_ref()],
        bump = campaign.bump,
        has_one = attestor @ CampaignError::InvalidAttestor,
        constraint = campaign.reward_kind == RewardKind::Token @ CampaignError::RewardKindMismatch,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    /// Leaderboard entry of the participant
    /// - Derived from: ["leaderboard", campaign_key, sha256(user_id)]
    /// - Already existing means the participant already claimed
    #[account(
        init,
        payer = payer,
        space = LeaderboardEntry::LEN,
        seeds = [LEADERBOARD_SEED.as_bytes(), campaign.key().as_ref(), attestation.participant_seed().as_ref()],
        bump
    )]
    pub leaderboard_entry: Box<Account<'info, LeaderboardEntry>>,

    /// Fungible reward mint
    /// - Derived from: ["token_mint", campaign_key]
    /// - Created by the first claim, mint and freeze authority is the campaign PDA
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [TOKEN_MINT_SEED.as_bytes(), campaign.key().as_ref()],
        bump,
        mint::decimals = 0,
        mint::authority = campaign,
        mint::freeze_authority = campaign,
        mint::token_program = token_program,
    )]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Metadata account of the reward mint, written on the first claim only
    /// CHECK: Address is checked against the Token Metadata PDA of token_mint
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), token_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub token_metadata: UncheckedAccount<'info>,

    /// Wallet receiving the reward
    /// CHECK: Only used as token account authority; must equal the attested primary wallet
    #[account(
        constraint = recipient.key() == attestation.primary_wallet @ CampaignError::RecipientMismatch
    )]
    pub recipient: UncheckedAccount<'info>,

    /// Recipient's associated token account, created when missing
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = token_mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub recipient_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The campaign attestor, vouching for the attestation argument
    pub attestor: Signer<'info>,

    /// Pays for the leaderboard entry, token account and, on the first claim, the mint
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub token_metadata_program: Program<'info, Metadata>,

    pub rent: Sysvar<'info, Rent>,
}

/**
 * Hands one token unit to an eligible participant
 *
 * @param ctx - The account context containing all required accounts
 * @param attestation - Participant facts relayed by the attestor
 *
 * Validation Process:
 * 1. Campaign is active, inside its time window and below its cap
 * 2. Attestation is well formed and fresh
 * 3. Every enabled gating requirement holds
 *
 * The mint assignment, the counter increment and the mint CPI happen in
 * the same instruction, so a failure leaves no partial state behind.
 */
pub fn handle_claim_token(
    ctx: Context<ClaimToken>,
    attestation: ParticipantAttestation,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // ===== VALIDATION PHASE =====

    verify_claim(&ctx.accounts.campaign, &attestation, now)?;

    // ===== EFFECTS PHASE (State Updates) =====

    let campaign_key = ctx.accounts.campaign.key();
    let token_mint_key = ctx.accounts.token_mint.key();
    let recipient_key = ctx.accounts.recipient.key();

    let campaign = &mut ctx.accounts.campaign;
    let created_mint = campaign.assign_token_mint(token_mint_key)?;
    let position = campaign.record_claim()?;
    let distributed_count = campaign.distributed_count;

    let slug_hash = campaign.slug_hash;
    let campaign_bump = campaign.bump;
    let reward_name = campaign.reward_name.clone();
    let token_symbol = campaign.token_symbol.clone();
    let metadata_uri = campaign.metadata_uri.clone();
    let seller_fee_basis_points = campaign.reward_kind.seller_fee_basis_points();
    let remaining = campaign.remaining();

    ctx.accounts.leaderboard_entry.set_inner(LeaderboardEntry {
        campaign: campaign_key,
        recipient: recipient_key,
        reward_mint: token_mint_key,
        position,
        claimed_at: now,
        user_id: attestation.user_id.clone(),
        username: attestation.username.clone(),
        bump: ctx.bumps.leaderboard_entry,
    });

    // ===== INTERACTIONS PHASE (Metadata and Mint) =====

    let seeds = &[
        CAMPAIGN_SEED.as_bytes(),
        slug_hash.as_ref(),
        &[campaign_bump],
    ];
    let signer = &[&seeds[..]];

    if created_mint {
        let metadata_accounts = MetadataAccounts {
            metadata: ctx.accounts.token_metadata.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            authority: ctx.accounts.campaign.to_account_info(),
            payer: ctx.accounts.payer.to_account_info(),
            token_metadata_program: ctx.accounts.token_metadata_program.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        };
        create_reward_metadata(
            &metadata_accounts,
            reward_name,
            token_symbol,
            metadata_uri,
            seller_fee_basis_points,
            signer,
        )?;

        emit_cpi!(TokenMintCreated {
            campaign: campaign_key,
            token_mint: token_mint_key,
        });
    }

    mint_reward(
        ctx.accounts.campaign.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        1,
        signer,
    )?;

    msg!(
        "token claim {} of {} by {}, {} remaining",
        position,
        campaign_key,
        attestation.user_id,
        remaining
    );

    emit_cpi!(RewardClaimed {
        campaign: campaign_key,
        recipient: recipient_key,
        reward_mint: token_mint_key,
        user_id: attestation.user_id,
        position,
        distributed_count,
    });

    Ok(())
}
