use anchor_lang::prelude::*;
use crate::constants::{MAX_RECIPIENTS, MIN_RECIPIENTS, TOTAL_SHARE_BPS};
use crate::errors::ErrorCode;
use crate::guard::{AccessGuard, ReentrancyLock};
use crate::states::{Recipient, RecipientTable};

/// Vault configuration. The PDA itself also custodies the native balance.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    /// Identity allowed to reconfigure, distribute and rescue
    pub admin: Pubkey,
    /// Payout table; shares always sum to 10000 bps
    #[max_len(20)] // MAX_RECIPIENTS
    pub recipients: Vec<Recipient>,
    /// Held while a distribution is running
    pub lock: ReentrancyLock,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl AccessGuard for Vault {
    fn admin(&self) -> Pubkey {
        self.admin
    }
}

impl Vault {
    /// Validates parallel address/share lists and zips them into table entries
    pub fn build_table(recipients: &[Pubkey], shares: &[u16]) -> Result<Vec<Recipient>> {
        require!(
            recipients.len() == shares.len(),
            ErrorCode::RecipientShareLengthMismatch
        );
        require!(recipients.len() >= MIN_RECIPIENTS, ErrorCode::EmptyRecipients);
        require!(recipients.len() <= MAX_RECIPIENTS, ErrorCode::TooManyRecipients);

        let mut total: u32 = 0;
        for share in shares {
            require!(*share <= TOTAL_SHARE_BPS, ErrorCode::ShareOutOfRange);
            total = total
                .checked_add(u32::from(*share))
                .ok_or(ErrorCode::MathOverflow)?;
        }
        require!(total == u32::from(TOTAL_SHARE_BPS), ErrorCode::InvalidShareTotal);

        Ok(recipients
            .iter()
            .zip(shares)
            .map(|(address, share_bps)| Recipient {
                address: *address,
                share_bps: *share_bps,
            })
            .collect())
    }

    /// Replaces the whole table; on error the current table is left untouched.
    /// Refused while a distribution holds the lock.
    pub fn set_recipients(&mut self, table: &RecipientTable) -> Result<()> {
        require!(!self.lock.is_entered(), ErrorCode::ReentrantCall);
        let entries = Self::build_table(&table.recipients, &table.shares)?;
        self.recipients = entries;
        Ok(())
    }

    pub fn table(&self) -> RecipientTable {
        RecipientTable::from_entries(&self.recipients)
    }

    #[cfg(test)]
    pub fn total_shares(&self) -> u32 {
        self.recipients.iter().map(|r| u32::from(r.share_bps)).sum()
    }
}
