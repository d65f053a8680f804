use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::VAULT_SEED;
use crate::errors::ErrorCode;
use crate::guard::AccessGuard;
use crate::states::Vault;
use crate::treasury::{ensure_covers, TokenSource};

/// Moves tokens out of a vault token account without consulting the recipient table
#[derive(Accounts)]
pub struct RescueToken<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump,
        constraint = vault.is_admin(&admin.key()) @ ErrorCode::Unauthorized
    )]
    pub vault: Box<Account<'info, Vault>>,

    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault-owned token account to rescue from
    #[account(
        mut,
        token::mint = mint,
        token::authority = vault,
        token::token_program = token_program
    )]
    pub source: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Any token account of the same mint
    #[account(
        mut,
        constraint = destination.mint == mint.key() @ ErrorCode::MintMismatch
    )]
    pub destination: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> RescueToken<'info> {
    pub fn handle(ctx: Context<RescueToken>, amount: u64) -> Result<()> {
        let mint_key = ctx.accounts.mint.key();
        msg!("Rescuing {} units of {}", amount, mint_key);

        ensure_covers(ctx.accounts.source.amount, amount)?;

        let bump = [ctx.accounts.vault.bump];
        let seeds: &[&[u8]] = &[VAULT_SEED, &bump];

        TokenSource {
            token_account: ctx.accounts.source.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            authority: ctx.accounts.vault.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            decimals: ctx.accounts.mint.decimals,
        }
        .send(ctx.accounts.destination.to_account_info(), amount, &[seeds])?;

        msg!("Rescued {} units to {}", amount, ctx.accounts.destination.key());

        emit!(crate::events::TokenRescued {
            mint: mint_key,
            destination: ctx.accounts.destination.key(),
            amount,
        });

        Ok(())
    }
}
