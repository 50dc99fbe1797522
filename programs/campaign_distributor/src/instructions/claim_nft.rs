use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::Metadata;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::event::*;
use crate::utils::{
    create_reward_edition, create_reward_metadata, mint_reward, verify_claim, MetadataAccounts,
};

/**
 * Account context for claiming an NFT from an NFT campaign
 *
 * Every claim creates a fresh mint, mints its single unit to the recipient,
 * then writes metadata and a master edition. The master edition takes over
 * the mint authority, so the supply stays at 1.
 *
 * Access Control: The campaign attestor must co-sign; the recipient must be
 * the attested primary wallet of the participant
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(attestation: ParticipantAttestation)]
pub struct ClaimNft<'info> {
    #[account(
        mut,
        seeds = [CAMPAIGN_SEED.as_bytes(), campaign.slug_hash.as_ref()],
        bump = campaign.bump,
        has_one = attestor @ CampaignError::InvalidAttestor,
        constraint = campaign.reward_kind == RewardKind::Nft @ CampaignError::RewardKindMismatch,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    #[account(
        init,
        payer = payer,
        space = LeaderboardEntry::LEN,
        seeds = [LEADERBOARD_SEED.as_bytes(), campaign.key().as_ref(), attestation.participant_seed().as_ref()],
        bump
    )]
    pub leaderboard_entry: Box<Account<'info, LeaderboardEntry>>,

    /// Mint of the NFT handed out by this claim
    /// - Derived from: ["nft_mint", campaign_key, distributed_count]
    #[account(
        init,
        payer = payer,
        seeds = [NFT_MINT_SEED.as_bytes(), campaign.key().as_ref(), campaign.distributed_count.to_le_bytes().as_ref()],
        bump,
        mint::decimals = 0,
        mint::authority = campaign,
        mint::freeze_authority = campaign,
        mint::token_program = token_program,
    )]
    pub nft_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Address is checked against the Token Metadata PDA of nft_mint
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), nft_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub nft_metadata: UncheckedAccount<'info>,

    /// CHECK: Address is checked against the Token Metadata edition PDA of nft_mint
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), nft_mint.key().as_ref(), b"edition"],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub master_edition: UncheckedAccount<'info>,

    /// CHECK: Only used as token account authority; must equal the attested primary wallet
    #[account(
        constraint = recipient.key() == attestation.primary_wallet @ CampaignError::RecipientMismatch
    )]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = nft_mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub recipient_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub attestor: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub token_metadata_program: Program<'info, Metadata>,

    pub rent: Sysvar<'info, Rent>,
}

/**
 * Hands a fresh NFT to an eligible participant
 *
 * @param ctx - The account context containing all required accounts
 * @param attestation - Participant facts relayed by the attestor
 *
 * Validation is the same as for token claims. The NFT takes the campaign's
 * reward name, symbol (often empty for NFT campaigns) and metadata URI.
 */
pub fn handle_claim_nft(
    ctx: Context<ClaimNft>,
    attestation: ParticipantAttestation,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // ===== VALIDATION PHASE =====

    verify_claim(&ctx.accounts.campaign, &attestation, now)?;

    // ===== EFFECTS PHASE (State Updates) =====

    let campaign_key = ctx.accounts.campaign.key();
    let nft_mint_key = ctx.accounts.nft_mint.key();
    let recipient_key = ctx.accounts.recipient.key();

    let campaign = &mut ctx.accounts.campaign;
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
        reward_mint: nft_mint_key,
        position,
        claimed_at: now,
        user_id: attestation.user_id.clone(),
        username: attestation.username.clone(),
        bump: ctx.bumps.leaderboard_entry,
    });

    // ===== INTERACTIONS PHASE (Mint, Metadata, Edition) =====

    let seeds = &[
        CAMPAIGN_SEED.as_bytes(),
        slug_hash.as_ref(),
        &[campaign_bump],
    ];
    let signer = &[&seeds[..]];

    // Supply must be 1 before the master edition is created
    mint_reward(
        ctx.accounts.campaign.to_account_info(),
        ctx.accounts.nft_mint.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        1,
        signer,
    )?;

    let metadata_accounts = MetadataAccounts {
        metadata: ctx.accounts.nft_metadata.to_account_info(),
        mint: ctx.accounts.nft_mint.to_account_info(),
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
    create_reward_edition(
        &metadata_accounts,
        ctx.accounts.master_edition.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer,
    )?;

    msg!(
        "nft claim {} of {} by {}, {} remaining",
        position,
        campaign_key,
        attestation.user_id,
        remaining
    );

    emit_cpi!(RewardClaimed {
        campaign: campaign_key,
        recipient: recipient_key,
        reward_mint: nft_mint_key,
        user_id: attestation.user_id,
        position,
        distributed_count,
    });

    Ok(())
}
