use anchor_lang::prelude::*;

/// Event emitted when lamports are deposited through `deposit_native`
#[event]
pub struct NativeDeposited {
    /// Depositor's wallet address
    pub sender: Pubkey,
    /// Lamports deposited
    pub amount: u64,
}

/// Event emitted when the recipient table is set or replaced
#[event]
pub struct RecipientsUpdated {
    /// Recipient addresses in payout order
    pub recipients: Vec<Pubkey>,
    /// Shares in basis points, index-aligned with `recipients`
    pub shares: Vec<u16>,
}

/// Event emitted after the full native balance has been split
#[event]
pub struct NativeDistributed {
    /// Lamports distributed across all recipients
    pub total: u64,
}

/// Event emitted after the full balance of a token has been split
#[event]
pub struct TokenDistributed {
    /// Mint of the distributed token
    pub mint: Pubkey,
    /// Token units distributed across all recipients
    pub total: u64,
}

/// Event emitted when tokens are rescued outside the share table
#[event]
pub struct TokenRescued {
    /// Mint of the rescued token
    pub mint: Pubkey,
    /// Destination token account
    pub destination: Pubkey,
    /// Token units moved
    pub amount: u64,
}

/// Event emitted when lamports are rescued outside the share table
#[event]
pub struct NativeRescued {
    /// Destination account
    pub destination: Pubkey,
    /// Lamports moved
    pub amount: u64,
}

/// Event emitted when a new admin is installed, including at initialization
#[event]
pub struct AdminTransferred {
    /// Previous admin (default pubkey at initialization)
    pub previous_admin: Pubkey,
    /// New admin
    pub new_admin: Pubkey,
}
