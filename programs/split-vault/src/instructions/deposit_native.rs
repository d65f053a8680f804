use anchor_lang::prelude::*;
use crate::constants::VAULT_SEED;
use crate::states::Vault;

#[derive(Accounts)]
pub struct DepositNative<'info> {
    /// Anyone may deposit
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

impl<'info> DepositNative<'info> {
    pub fn handle(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.depositor.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            amount,
        )?;

        msg!("Deposited {} lamports from {}", amount, ctx.accounts.depositor.key());

        emit!(crate::events::NativeDeposited {
            sender: ctx.accounts.depositor.key(),
            amount,
        });

        Ok(())
    }
}
