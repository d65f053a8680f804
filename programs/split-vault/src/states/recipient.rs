use anchor_lang::prelude::*;

/// One entry of the payout table
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct Recipient {
    /// Destination wallet
    pub address: Pubkey,
    /// Share of every distribution in basis points
    pub share_bps: u16,
}

/// Wire form of the recipient table: two index-aligned lists
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipientTable {
    pub recipients: Vec<Pubkey>,
    pub shares: Vec<u16>,
}

impl RecipientTable {
    pub fn from_entries(entries: &[Recipient]) -> Self {
        Self {
            recipients: entries.iter().map(|r| r.address).collect(),
            shares: entries.iter().map(|r| r.share_bps).collect(),
        }
    }
}
