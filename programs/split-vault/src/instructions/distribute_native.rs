use anchor_lang::prelude::*;
use crate::constants::VAULT_SEED;
use crate::distribution::distribute;
use crate::errors::ErrorCode;
use crate::guard::AccessGuard;
use crate::states::Vault;
use crate::treasury::NativeTreasury;

/// Splits the vault's full native balance across the recipient table.
///
/// Remaining accounts: one writable account per recipient, in table order.
#[derive(Accounts)]
pub struct DistributeNative<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
        constraint = vault.is_admin(&admin.key()) @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,
}

impl<'info> DistributeNative<'info> {
    pub fn handle(ctx: Context<'_, '_, 'info, 'info, DistributeNative<'info>>) -> Result<()> {
        msg!("Starting native distribution");

        let vault = &mut ctx.accounts.vault;
        vault.lock.enter()?;
        vault.exit(&crate::ID)?;
        let recipients = vault.recipients.clone();

        let rent = Rent::get()?;
        let mut treasury = NativeTreasury::new(
            ctx.accounts.vault.to_account_info(),
            &recipients,
            ctx.remaining_accounts,
            &rent,
        )?;
        let total = distribute(&mut treasury, &recipients)?;

        ctx.accounts.vault.lock.release();

        msg!("Native distribution completed: {} lamports", total);

        emit!(crate::events::NativeDistributed { total });

        Ok(())
    }
}
