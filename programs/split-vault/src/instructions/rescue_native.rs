use anchor_lang::prelude::*;
use crate::constants::VAULT_SEED;
use crate::errors::ErrorCode;
use crate::guard::AccessGuard;
use crate::states::Vault;
use crate::treasury::rescue_lamports;

/// Moves lamports out of the vault without consulting the recipient table
#[derive(Accounts)]
pub struct RescueNative<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
        constraint = vault.is_admin(&admin.key()) @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: any writable account may receive lamports
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,
}

impl<'info> RescueNative<'info> {
    pub fn handle(ctx: Context<RescueNative>, amount: u64) -> Result<()> {
        rescue_lamports(
            &ctx.accounts.vault.to_account_info(),
            &ctx.accounts.destination.to_account_info(),
            amount,
            &Rent::get()?,
        )?;

        msg!("Rescued {} lamports to {}", amount, ctx.accounts.destination.key());

        emit!(crate::events::NativeRescued {
            destination: ctx.accounts.destination.key(),
            amount,
        });

        Ok(())
    }
}
