use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Single-identity authorization check applied to every admin instruction.
///
/// The vault only knows which key is installed; whether that key is a
/// plain wallet or a multisig PDA is decided by whoever installs it.
pub trait AccessGuard {
    /// Currently installed admin
    fn admin(&self) -> Pubkey;

    /// Whether `caller` is the installed admin. Admin accounts reject
    /// everyone else with `Unauthorized`.
    fn is_admin(&self, caller: &Pubkey) -> bool {
        *caller != Pubkey::default() && *caller == self.admin()
    }
}

/// Lock held for the whole duration of a distribution.
///
/// The engaged state must reach account data before the first outbound
/// transfer; a failed instruction is rolled back by the runtime, which
/// releases the lock on that path.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct ReentrancyLock {
    entered: bool,
}

impl ReentrancyLock {
    /// Takes the lock, failing with `ReentrantCall` if it is already held
    pub fn enter(&mut self) -> Result<()> {
        require!(!self.entered, ErrorCode::ReentrantCall);
        self.entered = true;
        Ok(())
    }

    /// Releases the lock
    pub fn release(&mut self) {
        self.entered = false;
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }
}
