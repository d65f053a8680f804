use anchor_lang::prelude::*;

declare_id!("2VyMPk7pbLdwngWicnCSi7Aogn2t6jHdUYJJsjhegtFp");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod guard;
pub mod distribution;
pub mod treasury;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use instructions::*;
pub use events::*;
pub use states::RecipientTable;

#[program]
pub mod split_vault {
    use super::*;

    pub fn initialize_vault(ctx: Context<InitializeVault>, params: InitializeVaultParams) -> Result<()> {
        InitializeVault::handle(ctx, params)
    }

    pub fn deposit_native(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
        DepositNative::handle(ctx, amount)
    }

    pub fn update_recipients(ctx: Context<UpdateRecipients>, table: RecipientTable) -> Result<()> {
        UpdateRecipients::handle(ctx, table)
    }

    pub fn distribute_native<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeNative<'info>>,
    ) -> Result<()> {
        DistributeNative::handle(ctx)
    }

    pub fn distribute_token<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeToken<'info>>,
    ) -> Result<()> {
        DistributeToken::handle(ctx)
    }

    pub fn rescue_native(ctx: Context<RescueNative>, amount: u64) -> Result<()> {
        RescueNative::handle(ctx, amount)
    }

    pub fn rescue_token(ctx: Context<RescueToken>, amount: u64) -> Result<()> {
        RescueToken::handle(ctx, amount)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        TransferAdmin::handle(ctx, new_admin)
    }

    pub fn get_recipients(ctx: Context<GetRecipients>) -> Result<RecipientTable> {
        GetRecipients::handle(ctx)
    }
}
