//! Skins payout allocation
//!
//! All arithmetic is performed in integer cents. Dollars only appear at the
//! presentation boundary via [`format_cents`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::EntryId;

/// Allocation of a skins pot across tournament entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutAllocation {
    pub payout_per_skin_cents: i64,
    pub per_player_payout_cents: BTreeMap<EntryId, i64>,
}

/// Distribute an integer-cent pot across skin winners.
///
/// With zero total skins every entry gets 0 and no division occurs. Otherwise
/// each entry's base payout is `skins * floor(pot / total_skins)`; the
/// leftover cents (always fewer than `total_skins`) go one at a time to
/// entries holding at least one skin, visited in descending skin-count order
/// with ties broken by ascending entry id, cycling until exhausted. The
/// resulting payouts always sum to the pot exactly.
///
/// Inputs are assumed pre-validated by the caller (non-negative pot, skin
/// counts consistent with `total_skins`).
#[must_use]
pub fn allocate(
    pot_amount_cents: i64,
    total_skins: u32,
    per_entry_skin_counts: &BTreeMap<EntryId, u32>,
) -> PayoutAllocation {
    if total_skins == 0 {
        return PayoutAllocation {
            payout_per_skin_cents: 0,
            per_player_payout_cents: per_entry_skin_counts
                .keys()
                .map(|entry| (entry.clone(), 0))
                .collect(),
        };
    }

    let payout_per_skin_cents = pot_amount_cents / i64::from(total_skins);

    let mut per_player_payout_cents: BTreeMap<EntryId, i64> = per_entry_skin_counts
        .iter()
        .map(|(entry, &skins)| (entry.clone(), i64::from(skins) * payout_per_skin_cents))
        .collect();

    let mut winners: Vec<&EntryId> = per_entry_skin_counts
        .iter()
        .filter(|(_, &skins)| skins > 0)
        .map(|(entry, _)| entry)
        .collect();
    winners.sort_by(|a, b| {
        per_entry_skin_counts[*b]
            .cmp(&per_entry_skin_counts[*a])
            .then_with(|| a.cmp(b))
    });

    let mut remainder = pot_amount_cents - per_player_payout_cents.values().sum::<i64>();
    let mut cursor = 0;
    while remainder > 0 && !winners.is_empty() {
        let entry = winners[cursor % winners.len()];
        if let Some(payout) = per_player_payout_cents.get_mut(entry) {
            *payout += 1;
        }
        remainder -= 1;
        cursor += 1;
    }

    PayoutAllocation {
        payout_per_skin_cents,
        per_player_payout_cents,
    }
}

/// Format integer cents as a dollar string for display (`1234` -> `$12.34`)
#[must_use]
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{sign}${}.{:02}", magnitude / 100, magnitude % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn counts(entries: &[(&str, u32)]) -> BTreeMap<EntryId, u32> {
        entries
            .iter()
            .map(|&(id, skins)| (EntryId::new(id), skins))
            .collect()
    }

    fn payout_sum(allocation: &PayoutAllocation) -> i64 {
        allocation.per_player_payout_cents.values().sum()
    }

    #[test]
    fn test_zero_skins_pays_nothing() {
        let allocation = allocate(10_000, 0, &counts(&[("alice", 0), ("bob", 0)]));

        assert_eq!(allocation.payout_per_skin_cents, 0);
        assert_eq!(allocation.per_player_payout_cents.len(), 2);
        assert!(allocation.per_player_payout_cents.values().all(|&c| c == 0));
    }

    #[test]
    fn test_even_split() {
        let allocation = allocate(10_000, 4, &counts(&[("alice", 2), ("bob", 1), ("carol", 1)]));

        assert_eq!(allocation.payout_per_skin_cents, 2_500);
        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("alice")], 5_000);
        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("bob")], 2_500);
        assert_eq!(payout_sum(&allocation), 10_000);
    }

    #[test]
    fn test_remainder_goes_to_top_skin_count_first() {
        // 100 / 3 = 33 per skin, remainder 1 cent goes to bob (2 skins)
        let allocation = allocate(100, 3, &counts(&[("alice", 1), ("bob", 2)]));

        assert_eq!(allocation.payout_per_skin_cents, 33);
        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("bob")], 67);
        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("alice")], 33);
        assert_eq!(payout_sum(&allocation), 100);
    }

    #[test]
    fn test_remainder_ties_break_by_ascending_entry_id() {
        // 101 / 4 = 25 per skin, remainder 1; both hold 2 skins, "alice" wins
        // the tie lexically
        let allocation = allocate(101, 4, &counts(&[("bob", 2), ("alice", 2)]));

        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("alice")], 51);
        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("bob")], 50);
        assert_eq!(payout_sum(&allocation), 101);
    }

    #[test]
    fn test_remainder_cycles_through_winners() {
        // 7 / 4 = 1 per skin, remainder 3 over two winners: ordered
        // [bob (3 skins), alice (1 skin)], cycle gives bob 2 extra cents and
        // alice 1
        let allocation = allocate(7, 4, &counts(&[("alice", 1), ("bob", 3)]));

        assert_eq!(allocation.payout_per_skin_cents, 1);
        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("bob")], 5);
        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("alice")], 2);
        assert_eq!(payout_sum(&allocation), 7);
    }

    #[test]
    fn test_entries_without_skins_never_receive_remainder() {
        // Remainder 2 must skip carol (0 skins)
        let allocation = allocate(200, 3, &counts(&[("alice", 2), ("bob", 1), ("carol", 0)]));

        assert_eq!(allocation.per_player_payout_cents[&EntryId::new("carol")], 0);
        assert_eq!(payout_sum(&allocation), 200);
    }

    #[test]
    fn test_sum_matches_pot_exactly_across_fixtures() {
        let fixtures: &[(i64, u32, &[(&str, u32)])] = &[
            (10_000, 4, &[("a", 2), ("b", 1), ("c", 1)]),
            (9_999, 7, &[("a", 3), ("b", 2), ("c", 2)]),
            (1, 1, &[("solo", 1)]),
            (25_000, 18, &[("a", 6), ("b", 5), ("c", 4), ("d", 3)]),
            (333, 2, &[("a", 1), ("b", 1)]),
        ];

        for &(pot, total_skins, entries) in fixtures {
            let allocation = allocate(pot, total_skins, &counts(entries));
            assert_eq!(
                payout_sum(&allocation),
                pot,
                "pot {pot} with {total_skins} skins must allocate exactly"
            );
        }
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1_234), "$12.34");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(-250), "-$2.50");
    }
}
