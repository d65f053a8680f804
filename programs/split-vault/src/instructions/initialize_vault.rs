use anchor_lang::prelude::*;
use crate::constants::VAULT_SEED;
use crate::errors::ErrorCode;
use crate::guard::ReentrancyLock;
use crate::states::{RecipientTable, Vault};

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// Pays for the vault account; gains no authority over it
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Vault PDA: configuration and native custody
    #[account(
        init,
        payer = payer,
        space = Vault::DISCRIMINATOR.len() + Vault::INIT_SPACE,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeVaultParams {
    /// Identity to install as admin (wallet or multisig PDA)
    pub admin: Pubkey,
    /// Initial recipient table
    pub table: RecipientTable,
}

impl<'info> InitializeVault<'info> {
    pub fn handle(ctx: Context<InitializeVault>, params: InitializeVaultParams) -> Result<()> {
        msg!("Initializing split vault");

        require!(params.admin != Pubkey::default(), ErrorCode::InvalidAdmin);

        let vault = &mut ctx.accounts.vault;
        vault.admin = params.admin;
        vault.lock = ReentrancyLock::default();
        vault.bump = ctx.bumps.vault;
        vault.set_recipients(&params.table)?;

        msg!("Admin: {}", vault.admin);
        msg!("Recipients: {}", vault.recipients.len());

        emit!(crate::events::AdminTransferred {
            previous_admin: Pubkey::default(),
            new_admin: params.admin,
        });
        emit!(crate::events::RecipientsUpdated {
            recipients: params.table.recipients,
            shares: params.table.shares,
        });

        Ok(())
    }
}
