use anchor_lang::prelude::*;
use anchor_spl::metadata::mpl_token_metadata::types::DataV2;
use anchor_spl::metadata::{
    create_master_edition_v3, create_metadata_accounts_v3, CreateMasterEditionV3,
    CreateMetadataAccountsV3,
};
use anchor_spl::token_interface::{mint_to, MintTo};

/// Mints reward units with the campaign PDA as mint authority
/// Works for both SPL Token and Token 2022 mints
pub fn mint_reward<'a>(
    authority: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    to: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = MintTo {
        mint,
        to,
        authority,
    };

    mint_to(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
    )
}

/// Accounts shared by the Token Metadata CPIs of a claim
pub struct MetadataAccounts<'a> {
    pub metadata: AccountInfo<'a>,
    pub mint: AccountInfo<'a>,
    /// Campaign PDA, both mint and update authority
    pub authority: AccountInfo<'a>,
    pub payer: AccountInfo<'a>,
    pub token_metadata_program: AccountInfo<'a>,
    pub system_program: AccountInfo<'a>,
    pub rent: AccountInfo<'a>,
}

/// Creates the metadata account of a reward mint
pub fn create_reward_metadata<'a>(
    accounts: &MetadataAccounts<'a>,
    name: String,
    symbol: String,
    uri: String,
    seller_fee_basis_points: u16,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = CreateMetadataAccountsV3 {
        metadata: accounts.metadata.clone(),
        mint: accounts.mint.clone(),
        mint_authority: accounts.authority.clone(),
        payer: accounts.payer.clone(),
        update_authority: accounts.authority.clone(),
        system_program: accounts.system_program.clone(),
        rent: accounts.rent.clone(),
    };

    let data = DataV2 {
        name,
        symbol,
        uri,
        seller_fee_basis_points,
        creators: None,
        collection: None,
        uses: None,
    };

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            accounts.token_metadata_program.clone(),
            cpi_accounts,
            signer_seeds,
        ),
        data,
        true,
        true,
        None,
    )
}

/// Creates a master edition with no prints, freezing the NFT supply at 1
pub fn create_reward_edition<'a>(
    accounts: &MetadataAccounts<'a>,
    edition: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = CreateMasterEditionV3 {
        edition,
        mint: accounts.mint.clone(),
        update_authority: accounts.authority.clone(),
        mint_authority: accounts.authority.clone(),
        payer: accounts.payer.clone(),
        metadata: accounts.metadata.clone(),
        token_program,
        system_program: accounts.system_program.clone(),
        rent: accounts.rent.clone(),
    };

    create_master_edition_v3(
        CpiContext::new_with_signer(
            accounts.token_metadata_program.clone(),
            cpi_accounts,
            signer_seeds,
        ),
        Some(0),
    )
}
