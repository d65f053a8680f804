use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TokenAccount, TransferChecked};
use crate::distribution::Treasury;
use crate::errors::ErrorCode;
use crate::states::Recipient;

/// Moves lamports out of a program-owned account.
///
/// Reads each balance right before writing it so `from == to` is a no-op.
pub fn move_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::InsufficientBalance)?;
    **from.try_borrow_mut_lamports()? = debited;

    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}

/// Lamports held by the vault PDA above its rent-exempt reserve
pub fn native_available(vault: &AccountInfo, rent: &Rent) -> u64 {
    let reserve = rent.minimum_balance(vault.data_len());
    vault.lamports().saturating_sub(reserve)
}

/// Fails with `InsufficientBalance` unless `balance` covers `amount`
pub fn ensure_covers(balance: u64, amount: u64) -> Result<()> {
    require!(balance >= amount, ErrorCode::InsufficientBalance);
    Ok(())
}

/// Moves exactly `amount` lamports out of the vault, never touching its rent reserve
pub fn rescue_lamports(
    vault: &AccountInfo,
    destination: &AccountInfo,
    amount: u64,
    rent: &Rent,
) -> Result<()> {
    let available = native_available(vault, rent);
    msg!("Rescuing {} lamports ({} available)", amount, available);
    ensure_covers(available, amount)?;
    move_lamports(vault, destination, amount)
}

/// Native balance of the vault PDA, paid directly from its lamports
pub struct NativeTreasury<'a, 'info> {
    vault: AccountInfo<'info>,
    recipients: &'a [AccountInfo<'info>],
    available: u64,
}

impl<'a, 'info> NativeTreasury<'a, 'info> {
    /// `accounts` must list one writable account per table entry, in order
    pub fn new(
        vault: AccountInfo<'info>,
        table: &[Recipient],
        accounts: &'a [AccountInfo<'info>],
        rent: &Rent,
    ) -> Result<Self> {
        require!(
            accounts.len() == table.len(),
            ErrorCode::RecipientAccountCountMismatch
        );
        for (entry, account) in table.iter().zip(accounts) {
            require_keys_eq!(*account.key, entry.address, ErrorCode::RecipientAccountMismatch);
            require!(account.is_writable, ErrorCode::RecipientAccountNotWritable);
        }

        let available = native_available(&vault, rent);
        Ok(Self {
            vault,
            recipients: accounts,
            available,
        })
    }
}

impl<'a, 'info> Treasury for NativeTreasury<'a, 'info> {
    fn available(&self) -> Result<u64> {
        Ok(self.available)
    }

    fn pay(&mut self, slot: usize, amount: u64) -> Result<()> {
        move_lamports(&self.vault, &self.recipients[slot], amount)?;
        self.available = self
            .available
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientBalance)?;
        Ok(())
    }
}

/// Accounts needed to move one mint out of a vault token account
pub struct TokenSource<'info> {
    pub token_account: AccountInfo<'info>,
    pub mint: AccountInfo<'info>,
    pub authority: AccountInfo<'info>,
    pub token_program: AccountInfo<'info>,
    pub decimals: u8,
}

impl<'info> TokenSource<'info> {
    /// `transfer_checked` signed by the vault PDA
    pub fn send(
        &self,
        to: AccountInfo<'info>,
        amount: u64,
        signer_seeds: &[&[&[u8]]],
    ) -> Result<()> {
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                TransferChecked {
                    from: self.token_account.clone(),
                    mint: self.mint.clone(),
                    to,
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
            self.decimals,
        )
    }
}

/// Token balance of a vault token account
pub struct TokenTreasury<'a, 'info> {
    source: TokenSource<'info>,
    recipients: &'a [AccountInfo<'info>],
    signer_seeds: &'a [&'a [&'a [u8]]],
    available: u64,
}

impl<'a, 'info> TokenTreasury<'a, 'info> {
    /// `accounts` must list one token account of the same mint per table
    /// entry, in order, each owned by that entry's address
    pub fn new(
        source: TokenSource<'info>,
        balance: u64,
        table: &[Recipient],
        accounts: &'a [AccountInfo<'info>],
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Result<Self> {
        require!(
            accounts.len() == table.len(),
            ErrorCode::RecipientAccountCountMismatch
        );
        for (entry, account) in table.iter().zip(accounts) {
            require_keys_eq!(
                *account.owner,
                *source.token_program.key,
                ErrorCode::InvalidRecipientTokenAccount
            );
            require!(account.is_writable, ErrorCode::RecipientAccountNotWritable);

            let data = account.try_borrow_data()?;
            let token_account = TokenAccount::try_deserialize(&mut &data[..])
                .map_err(|_| error!(ErrorCode::InvalidRecipientTokenAccount))?;
            require_keys_eq!(token_account.mint, *source.mint.key, ErrorCode::MintMismatch);
            require_keys_eq!(
                token_account.owner,
                entry.address,
                ErrorCode::RecipientAccountMismatch
            );
        }

        Ok(Self {
            source,
            recipients: accounts,
            signer_seeds,
            available: balance,
        })
    }
}

impl<'a, 'info> Treasury for TokenTreasury<'a, 'info> {
    fn available(&self) -> Result<u64> {
        Ok(self.available)
    }

    fn pay(&mut self, slot: usize, amount: u64) -> Result<()> {
        self.source
            .send(self.recipients[slot].clone(), amount, self.signer_seeds)?;
        self.available = self
            .available
            .checked_sub(amount)
            .ok_or(ErrorCode::InsufficientBalance)?;
        Ok(())
    }
}
