use std::collections::BTreeSet;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::token_2022::spl_token_2022;
use spl_token_2022::state::{Account as PackedTokenAccount, AccountState, Mint as PackedMint};

use crate::constants::VAULT_SEED;
use crate::guard::ReentrancyLock;
use crate::states::{Recipient, Vault};

pub const FUNDED: u64 = 1_000_000_000;

/// Backing storage for one in-memory `AccountInfo`
pub struct Slot {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub signer: bool,
    pub executable: bool,
}

impl Slot {
    /// Program-owned account with zeroed data
    pub fn new(lamports: u64, data_len: usize) -> Self {
        Self {
            key: Pubkey::new_unique(),
            owner: crate::ID,
            lamports,
            data: vec![0; data_len],
            signer: false,
            executable: false,
        }
    }

    /// Funded system wallet that signs the transaction
    pub fn wallet() -> Self {
        Self {
            owner: anchor_lang::system_program::ID,
            signer: true,
            ..Self::new(FUNDED, 0)
        }
    }

    /// Vault PDA holding a single-recipient table under `admin`
    pub fn vault(admin: Pubkey) -> Self {
        let (key, bump) = Pubkey::find_program_address(&[VAULT_SEED], &crate::ID);
        let vault = Vault {
            admin,
            recipients: vec![Recipient {
                address: Pubkey::new_unique(),
                share_bps: 10_000,
            }],
            lock: ReentrancyLock::default(),
            bump,
        };
        let mut data = Vec::new();
        vault.try_serialize(&mut data).unwrap();
        Self {
            key,
            data,
            ..Self::new(FUNDED, 0)
        }
    }

    /// Executable account standing in for a deployed program
    pub fn program(id: Pubkey) -> Self {
        Self {
            key: id,
            owner: Pubkey::default(),
            executable: true,
            ..Self::new(FUNDED, 0)
        }
    }

    pub fn token_program() -> Self {
        Self::program(spl_token_2022::ID)
    }

    pub fn mint(decimals: u8) -> Self {
        let mut data = vec![0; PackedMint::LEN];
        PackedMint::pack(
            PackedMint {
                decimals,
                is_initialized: true,
                ..PackedMint::default()
            },
            &mut data,
        )
        .unwrap();
        Self {
            owner: spl_token_2022::ID,
            data,
            ..Self::new(FUNDED, 0)
        }
    }

    /// Initialized Token-2022 account of `mint` owned by `owner`
    pub fn token_account(mint: Pubkey, owner: Pubkey, amount: u64) -> Self {
        let mut data = vec![0; PackedTokenAccount::LEN];
        PackedTokenAccount::pack(
            PackedTokenAccount {
                mint,
                owner,
                amount,
                state: AccountState::Initialized,
                ..PackedTokenAccount::default()
            },
            &mut data,
        )
        .unwrap();
        Self {
            owner: spl_token_2022::ID,
            data,
            ..Self::new(FUNDED, 0)
        }
    }

    pub fn info(&mut self, writable: bool) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.signer,
            writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}

/// Runs the account validation of an instruction against `infos`
pub fn load<'info, T, B>(infos: &'info [AccountInfo<'info>]) -> Result<T>
where
    T: Accounts<'info, B>,
    B: Default,
{
    let mut remaining = infos;
    T::try_accounts(
        &crate::ID,
        &mut remaining,
        &[],
        &mut B::default(),
        &mut BTreeSet::new(),
    )
}
