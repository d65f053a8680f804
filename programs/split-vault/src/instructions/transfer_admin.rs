use anchor_lang::prelude::*;
use crate::constants::VAULT_SEED;
use crate::errors::ErrorCode;
use crate::guard::AccessGuard;
use crate::states::Vault;

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump,
        constraint = vault.is_admin(&admin.key()) @ ErrorCode::Unauthorized
    )]
    pub vault: Account<'info, Vault>,
}

impl<'info> TransferAdmin<'info> {
    pub fn handle(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        require!(new_admin != Pubkey::default(), ErrorCode::InvalidAdmin);

        let vault = &mut ctx.accounts.vault;
        let previous_admin = vault.admin;
        vault.admin = new_admin;

        msg!("Admin transferred from {} to {}", previous_admin, new_admin);

        emit!(crate::events::AdminTransferred {
            previous_admin,
            new_admin,
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::code;
    use crate::test_fixtures::{load, Slot};

    fn validate(signer_is_admin: bool) -> Result<()> {
        let mut signer = Slot::wallet();
        let admin = if signer_is_admin { signer.key } else { Pubkey::new_unique() };
        let mut vault = Slot::vault(admin);

        let infos = vec![signer.info(false), vault.info(true)];
        let loaded = load::<TransferAdmin, TransferAdminBumps>(&infos);
        loaded.map(|_| ())
    }

    #[test]
    fn admin_may_hand_over() {
        assert!(validate(true).is_ok());
    }

    #[test]
    fn non_admin_is_unauthorized() {
        let err = validate(false).unwrap_err();
        assert_eq!(code(err), u32::from(ErrorCode::Unauthorized));
    }
}
