use anchor_lang::prelude::*;
use crate::constants::VAULT_SEED;
use crate::errors::ErrorCode;
use crate::guard::AccessGuard;
use crate::states::{RecipientTable, Vault};

#[derive(Accounts)]
pub struct UpdateRecipients<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
        constraint = vault.is_admin(&admin.key()) @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,
}

impl<'info> UpdateRecipients<'info> {
    pub fn handle(ctx: Context<UpdateRecipients>, table: RecipientTable) -> Result<()> {
        let vault = &mut ctx.accounts.vault;
        vault.set_recipients(&table)?;

        msg!("Recipient table replaced: {} recipients", vault.recipients.len());

        emit!(crate::events::RecipientsUpdated {
            recipients: table.recipients,
            shares: table.shares,
        });

        Ok(())
    }
}
