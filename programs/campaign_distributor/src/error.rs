use anchor_lang::prelude::*;

#[error_code]
pub enum CampaignError {
    // Access control errors
    #[msg("Only the campaign creator can perform this action")]
    OnlyCreator,
    #[msg("Attestor does not match the campaign attestor")]
    InvalidAttestor,

    // Campaign state errors
    #[msg("Campaign is not active")]
    CampaignInactive,
    #[msg("Campaign has not started")]
    CampaignNotStarted,
    #[msg("Campaign has ended")]
    CampaignEnded,
    #[msg("Max distribution reached")]
    MaxDistributionReached,
    #[msg("Reward kind does not match this claim instruction")]
    RewardKindMismatch,
    #[msg("Token mint does not match the campaign's token mint")]
    TokenMintMismatch,

    // Creation validation errors
    #[msg("Title must be non-empty and at most 64 bytes")]
    InvalidTitle,
    #[msg("Title does not produce a usable slug")]
    InvalidSlug,
    #[msg("Max distribution must be greater than zero")]
    InvalidMaxDistribution,
    #[msg("End time must be after start time")]
    InvalidTimeWindow,
    #[msg("Reward name is missing or too long")]
    InvalidRewardName,
    #[msg("Token symbol is missing or too long")]
    InvalidTokenSymbol,
    #[msg("Metadata URI is too long")]
    InvalidMetadataUri,

    // Eligibility errors
    #[msg("Not enough points")]
    InsufficientPoints,
    #[msg("Streak is too short")]
    InsufficientStreak,
    #[msg("Account is too recent")]
    AccountTooRecent,
    #[msg("Participant does not follow the creator")]
    NotFollowingCreator,
    #[msg("Participant has not reacted to the post")]
    MissingReaction,
    #[msg("Participant has not commented on the post")]
    MissingComment,
    #[msg("Participant is not a portal member")]
    NotPortalMember,

    // Attestation errors
    #[msg("Attestation has expired")]
    AttestationExpired,
    #[msg("Attestation is issued in the future")]
    AttestationFromFuture,
    #[msg("Attestation field is empty or too long")]
    InvalidAttestation,
    #[msg("Recipient is not the participant's primary wallet")]
    RecipientMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
