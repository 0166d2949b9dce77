// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2025 Matchbook Systems. All rights reserved.
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The cross-company matching computation.
//!
//! Matching is on quantity only, ignoring price: the matchable size for a security is the
//! total quantity that could be paired between buy-side and sell-side interest, where a
//! pairing is only permitted between two different companies.

use std::collections::BTreeMap;

use matchbook_model::{identifiers::CompanyId, orders::Order};

/// Computes the total quantity matchable between `buys` and `sells`.
///
/// Quantities are first aggregated per company on each side, then companies are paired
/// greedily: each buy company consumes sell interest company by company, skipping its own,
/// matching `min(remaining buy, remaining sell)` at every pairing. The greedy result
/// depends on enumeration order, so both sides are walked in ascending lexicographic
/// company order to keep it reproducible run-to-run.
///
/// The inputs are borrowed and never mutated; all bookkeeping happens on function-local
/// aggregates.
#[must_use]
pub fn matching_size(buys: &[&Order], sells: &[&Order]) -> u64 {
    let buy_qtys = aggregate_by_company(buys);
    let mut sell_qtys = aggregate_by_company(sells);

    let mut total = 0;

    for (buy_company, mut buy_remaining) in buy_qtys {
        for (sell_company, sell_remaining) in &mut sell_qtys {
            if *sell_company == buy_company {
                continue;
            }

            let matched = buy_remaining.min(*sell_remaining);
            total += matched;
            buy_remaining -= matched;
            *sell_remaining -= matched;

            if buy_remaining == 0 {
                break;
            }
        }
    }

    total
}

/// Sums order quantities per company into a sorted map (zero-quantity orders contribute
/// nothing but are harmless).
fn aggregate_by_company(orders: &[&Order]) -> BTreeMap<CompanyId, u64> {
    let mut qtys = BTreeMap::new();
    for order in orders {
        *qtys.entry(order.company_id).or_insert(0) += order.qty;
    }
    qtys
}
