use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for rotating the attestor of a campaign
 *
 * Access Control: Only the creator can set the attestor
 *
 * Business Logic:
 * - Attestations signed by the previous attestor stop being accepted immediately
 * - Existing leaderboard entries are unaffected
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetAttestor<'info> {
    #[account(
        mut,
        has_one = creator @ CampaignError::OnlyCreator
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    pub creator: Signer<'info>,

    /// The new attestor
    /// CHECK: This account is validated by storing its key in the campaign state
    pub attestor: UncheckedAccount<'info>,
}

pub fn handle_set_attestor(ctx: Context<SetAttestor>) -> Result<()> {
    let attestor = ctx.accounts.attestor.key();
    require!(attestor != Pubkey::default(), CampaignError::InvalidAttestor);

    let campaign = &mut ctx.accounts.campaign;
    let previous_attestor = campaign.attestor;
    campaign.attestor = attestor;

    emit_cpi!(AttestorUpdated {
        campaign: campaign.key(),
        previous_attestor,
        attestor,
    });

    Ok(())
}
