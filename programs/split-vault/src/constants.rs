// PDA Seeds
pub const VAULT_SEED: &[u8] = b"vault";

// Share accounting
pub const TOTAL_SHARE_BPS: u16 = 10_000; // 100.00%
pub const BPS_DENOMINATOR: u128 = 10_000;

// Recipient table limits
pub const MIN_RECIPIENTS: usize = 1;
pub const MAX_RECIPIENTS: usize = 20; // bounded by vault account space and per-tx compute
