use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::VAULT_SEED;
use crate::distribution::distribute;
use crate::errors::ErrorCode;
use crate::guard::AccessGuard;
use crate::states::Vault;
use crate::treasury::{TokenSource, TokenTreasury};

/// Splits the vault's full balance of one token across the recipient table.
///
/// Remaining accounts: one token account per recipient, in table order,
/// same mint, owned by that recipient.
#[derive(Accounts)]
pub struct DistributeToken<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
        constraint = vault.is_admin(&admin.key()) @ ErrorCode::Unauthorized
    )]
    pub vault: Box<Account<'info, Vault>>,

    /// Token being distributed (SPL Token or Token-2022)
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault-owned token account holding the balance
    #[account(
        mut,
        token::mint = mint,
        token::authority = vault,
        token::token_program = token_program
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> DistributeToken<'info> {
    pub fn handle(ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>) -> Result<()> {
        let mint_key = ctx.accounts.mint.key();
        msg!("Starting token distribution for mint: {}", mint_key);

        let vault = &mut ctx.accounts.vault;
        vault.lock.enter()?;
        vault.exit(&crate::ID)?;
        let recipients = vault.recipients.clone();
        let bump = [vault.bump];

        let seeds: &[&[u8]] = &[VAULT_SEED, &bump];
        let signer_seeds = &[seeds];

        let source = TokenSource {
            token_account: ctx.accounts.treasury.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            authority: ctx.accounts.vault.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            decimals: ctx.accounts.mint.decimals,
        };
        let mut treasury = TokenTreasury::new(
            source,
            ctx.accounts.treasury.amount,
            &recipients,
            ctx.remaining_accounts,
            signer_seeds,
        )?;
        let total = distribute(&mut treasury, &recipients)?;

        ctx.accounts.vault.lock.release();

        msg!("Token distribution completed: {} units of {}", total, mint_key);

        emit!(crate::events::TokenDistributed {
            mint: mint_key,
            total,
        });

        Ok(())
    }
}
