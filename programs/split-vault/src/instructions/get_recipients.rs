use anchor_lang::prelude::*;
use crate::constants::VAULT_SEED;
use crate::states::{RecipientTable, Vault};

/// Read-only view of the recipient table, open to any caller
#[derive(Accounts)]
pub struct GetRecipients<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}

impl<'info> GetRecipients<'info> {
    pub fn handle(ctx: Context<GetRecipients>) -> Result<RecipientTable> {
        let table = ctx.accounts.vault.table();
        msg!("Recipient table: {} recipients", table.recipients.len());
        Ok(table)
    }
}
