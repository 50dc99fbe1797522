use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the campaign distributor program.
 * These constants control eligibility timing, attestation freshness, PDA derivation
 * and the length limits of the strings stored on chain.
 */

#[constant]
/// ===== ELIGIBILITY CONSTANTS =====

/// Minimum age of a social account when a campaign does not allow recent accounts (30 days)
/// - Compared against `now - account_created_at`
/// - Value: 30 days * 24 hours * 60 minutes * 60 seconds = 2,592,000 seconds
pub const MIN_ACCOUNT_AGE: i64 = 30 * 24 * 60 * 60;

/// ===== ATTESTATION CONSTANTS =====

/// Maximum age of a participant attestation (5 minutes)
/// - Claims carrying an older attestation are rejected
pub const ATTESTATION_TTL: i64 = 5 * 60;

/// Tolerated drift between the attestor clock and the cluster clock (60 seconds)
/// - An attestation issued further in the future is rejected
pub const ATTESTATION_CLOCK_SKEW: i64 = 60;

/// ===== PDA SEED CONSTANTS =====

/// Seed for campaign PDA derivation
/// - Used in: ["campaign", sha256(slug)]
/// - Makes slugs globally unique
/// - The campaign PDA is also the mint and update authority of every reward it hands out
pub const CAMPAIGN_SEED: &str = "campaign";

/// Seed for the fungible reward mint of a TOKEN campaign
/// - Used in: ["token_mint", campaign_key]
/// - Created lazily by the first claim, reused by every later claim
pub const TOKEN_MINT_SEED: &str = "token_mint";

/// Seed for the per-claim NFT mint of an NFT campaign
/// - Used in: ["nft_mint", campaign_key, position]
/// - `position` is the campaign's distributed count at claim time (u64, little endian)
pub const NFT_MINT_SEED: &str = "nft_mint";

/// Seed for leaderboard entry PDA derivation
/// - Used in: ["leaderboard", campaign_key, sha256(user_id)]
/// - One entry per (campaign, participant) pair, which prevents double-claiming
pub const LEADERBOARD_SEED: &str = "leaderboard";

/// ===== ROYALTY CONSTANTS =====

/// Secondary-sale royalty written into NFT reward metadata (5.5%)
pub const NFT_SELLER_FEE_BASIS_POINTS: u16 = 550;

/// ===== LENGTH LIMITS =====

pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_SLUG_LEN: usize = 64;
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_URI_LEN: usize = 200;
pub const MAX_USER_ID_LEN: usize = 64;
pub const MAX_USERNAME_LEN: usize = 32;
pub const MAX_CONTENT_ID_LEN: usize = 64;
