use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;

/**
 * Account context for activating or deactivating a campaign
 *
 * Access Control: Only the creator can change the status
 *
 * Business Logic:
 * - Inactive campaigns reject every claim
 * - Status can be toggled any number of times, counters are kept
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetCampaignStatus<'info> {
    #[account(
        mut,
        has_one = creator @ CampaignError::OnlyCreator
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    pub creator: Signer<'info>,
}

pub fn handle_set_campaign_status(
    ctx: Context<SetCampaignStatus>,
    status: CampaignStatus,
) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;
    campaign.status = status;

    emit_cpi!(CampaignStatusUpdated {
        campaign: campaign.key(),
        status,
    });

    Ok(())
}
