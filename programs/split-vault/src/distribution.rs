use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::ErrorCode;
use crate::states::Recipient;

/// An asset balance held by the vault, as reported by the ledger that owns it.
pub trait Treasury {
    /// Amount the vault can pay out right now
    fn available(&self) -> Result<u64>;

    /// Pays `amount` to the recipient at `slot` (table order)
    fn pay(&mut self, slot: usize, amount: u64) -> Result<()>;
}

/// floor(total * share_bps / 10000)
pub fn share_of(total: u64, share_bps: u16) -> Result<u64> {
    let amount = (total as u128)
        .checked_mul(share_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        / BPS_DENOMINATOR;
    u64::try_from(amount).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Splits `total` across the table.
///
/// Every entry but the last gets its truncated share; the last gets
/// whatever is left, so the amounts always add up to `total`.
pub fn split(total: u64, recipients: &[Recipient]) -> Result<Vec<u64>> {
    let (_, head) = recipients
        .split_last()
        .ok_or(ErrorCode::EmptyRecipients)?;

    let mut amounts = Vec::with_capacity(recipients.len());
    let mut distributed: u64 = 0;
    for recipient in head {
        let amount = share_of(total, recipient.share_bps)?;
        distributed = distributed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        amounts.push(amount);
    }

    let remainder = total
        .checked_sub(distributed)
        .ok_or(ErrorCode::MathOverflow)?;
    amounts.push(remainder);
    Ok(amounts)
}

/// Pays out the treasury's full balance according to the table and
/// returns the amount distributed. Zero payouts are skipped.
pub fn distribute<T: Treasury + ?Sized>(treasury: &mut T, recipients: &[Recipient]) -> Result<u64> {
    let total = treasury.available()?;
    require!(total > 0, ErrorCode::NothingToDistribute);

    msg!("Distributing {} units across {} recipients", total, recipients.len());

    let amounts = split(total, recipients)?;
    for (slot, amount) in amounts.into_iter().enumerate() {
        if amount == 0 {
            continue;
        }
        treasury.pay(slot, amount)?;
        msg!("Paid {} units to {}", amount, recipients[slot].address);
    }

    Ok(total)
}
