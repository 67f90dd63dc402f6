use std::collections::BTreeMap;

use fairway_core::payout::{allocate, format_cents};
use fairway_core::EntryId;

use crate::error::CliError;

pub fn run_payout(
    pot_cents: i64,
    total_skins: Option<u32>,
    skins: &[(EntryId, u32)],
    as_json: bool,
) -> Result<(), CliError> {
    let counts: BTreeMap<EntryId, u32> = skins.iter().cloned().collect();
    let total_skins = total_skins.unwrap_or_else(|| counts.values().sum());
    let allocation = allocate(pot_cents, total_skins, &counts);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&allocation)?);
        return Ok(());
    }

    println!(
        "Payout per skin: {}",
        format_cents(allocation.payout_per_skin_cents)
    );
    for (entry, cents) in &allocation.per_player_payout_cents {
        let skin_count = counts.get(entry).copied().unwrap_or(0);
        println!("{entry}: {skin_count} skins, {}", format_cents(*cents));
    }
    Ok(())
}
