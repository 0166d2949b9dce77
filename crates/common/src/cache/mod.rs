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

//! In-memory cache for active orders.
//!
//! Provides methods to add, cancel, and query cached orders, and the derived
//! cross-company matching size per security.

pub mod config;
pub mod matching;

mod index;


use std::{
    fmt::Debug,
    time::{SystemTime, UNIX_EPOCH},
};

use ahash::{AHashMap, AHashSet};
pub use config::CacheConfig; // Re-export
pub use index::{OrderCacheIndex, SideBuckets};
use matchbook_model::{
    enums::Side,
    identifiers::{OrderId, SecurityId, UserId},
    orders::Order,
};

use crate::cache::matching::matching_size;

/// The order store contract: the operations a venue order cache must provide.
///
/// [`OrderCache`] is the canonical implementation; the trait exists so alternative index
/// strategies (sorted structures, sharded-by-security) can substitute without changing
/// callers.
pub trait OrderStore {
    /// Adds `order` to the store; a reused order ID overwrites the prior record.
    fn add_order(&mut self, order: Order);

    /// Cancels the order with the `order_id` (no-op if unknown).
    fn cancel_order(&mut self, order_id: OrderId);

    /// Cancels every order belonging to the `user_id` (no-op if unknown).
    fn cancel_orders_for_user(&mut self, user_id: UserId);

    /// Cancels every order for the `security_id`, on either side, with a quantity of at
    /// least `min_qty` (no-op if unknown).
    fn cancel_orders_for_security_with_min_qty(&mut self, security_id: SecurityId, min_qty: u64);

    /// Returns the total cross-company matchable quantity for the `security_id`
    /// (zero if unknown).
    fn matching_size_for_security(&self, security_id: &SecurityId) -> u64;

    /// Returns a by-value snapshot of all live orders, in unspecified order.
    fn all_orders(&self) -> Vec<Order>;
}

/// A common in-memory `OrderCache` for active venue orders.
///
/// Maintains three coordinated views over one logical set of orders: a by-ID table which
/// owns every record, a by-user index, and a by-security index split into buy and sell
/// buckets. Every mutation updates all three views before returning, so no caller can
/// observe them disagreeing.
///
/// The cache is not internally synchronized: mutating operations take `&mut self`, which
/// serializes single-process callers through the borrow checker. Sharing a cache across
/// threads requires wrapping it in an external lock.
pub struct OrderCache {
    config: CacheConfig,
    index: OrderCacheIndex,
    orders: AHashMap<OrderId, Order>,
}

impl Debug for OrderCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(OrderCache))
            .field("config", &self.config)
            .field("index", &self.index)
            .field("orders", &self.orders)
            .finish()
    }
}

impl Default for OrderCache {
    /// Creates a new default [`OrderCache`] instance.
    fn default() -> Self {
        Self::new(Some(CacheConfig::default()))
    }
}

impl OrderCache {
    /// Creates a new [`OrderCache`] instance with an optional configuration.
    ///
    /// Uses the provided `CacheConfig` or defaults for pre-sizing the internal views.
    #[must_use]
    pub fn new(config: Option<CacheConfig>) -> Self {
        let config = config.unwrap_or_default();
        let index = OrderCacheIndex::with_config(&config);
        let orders = AHashMap::with_capacity(config.order_capacity);

        Self {
            config,
            index,
            orders,
        }
    }

    // -- COMMANDS --------------------------------------------------------------------------------

    /// Adds the `order` to the cache, indexing it by ID, by user, and by security side
    /// bucket.
    ///
    /// A reused order ID overwrites the prior record: its entries are purged from every
    /// view before the new record is indexed, and a warning is logged. Zero-quantity
    /// orders are accepted.
    pub fn add_order(&mut self, order: Order) {
        let order_id = order.order_id;

        if let Some(prior) = self.orders.remove(&order_id) {
            self.index.remove_order(&prior);
            log::warn!("Order {order_id} already cached, overwriting");
        }

        log::debug!("Adding {order:?}");

        self.index.insert_order(&order);
        self.orders.insert(order_id, order);
    }

    /// Cancels the order with the `order_id`, removing it from every view.
    ///
    /// An unknown ID is a no-op, not an error.
    pub fn cancel_order(&mut self, order_id: OrderId) {
        if let Some(order) = self.orders.remove(&order_id) {
            self.index.remove_order(&order);
            log::info!("Canceled order {order_id}");
        } else {
            log::debug!("Order {order_id} not found when canceling");
        }
    }

    /// Cancels every order belonging to the `user_id`.
    ///
    /// An unknown user is a no-op. The user's ID set is snapshotted before any removal,
    /// so cancellation never mutates a container while walking it.
    pub fn cancel_orders_for_user(&mut self, user_id: UserId) {
        let order_ids: Vec<OrderId> = match self.index.user_orders.get(&user_id) {
            Some(order_ids) => order_ids.iter().copied().collect(),
            None => {
                log::debug!("User {user_id} has no orders when canceling");
                return;
            }
        };

        for order_id in order_ids {
            self.cancel_order(order_id);
        }
    }

    /// Cancels every order for the `security_id`, on either side, with a quantity of at
    /// least `min_qty`.
    ///
    /// An unknown security is a no-op. Qualifying IDs from both side buckets are
    /// snapshotted before any removal.
    pub fn cancel_orders_for_security_with_min_qty(
        &mut self,
        security_id: SecurityId,
        min_qty: u64,
    ) {
        let order_ids: Vec<OrderId> = match self.index.security_orders.get(&security_id) {
            Some(buckets) => buckets
                .buys
                .iter()
                .chain(buckets.sells.iter())
                .filter(|order_id| {
                    self.orders
                        .get(order_id)
                        .is_some_and(|order| order.qty >= min_qty)
                })
                .copied()
                .collect(),
            None => {
                log::debug!("Security {security_id} has no orders when canceling");
                return;
            }
        };

        for order_id in order_ids {
            self.cancel_order(order_id);
        }
    }

    /// Resets the cache.
    ///
    /// All stateful fields are reset to their initial value.
    pub fn reset(&mut self) {
        log::debug!("Resetting cache");

        self.orders.clear();
        self.index.clear();

        log::info!("Reset cache");
    }

    /// Checks the cache integrity, verifying the cross-index consistency invariant in
    /// both directions: every owned order is indexed under its user and its security
    /// side bucket, and every indexed ID resolves to an owned order with matching keys.
    ///
    /// If a violation is found a log error message will also be produced.
    ///
    /// # Panics
    ///
    /// Panics if failure calling system clock.
    #[must_use]
    pub fn check_integrity(&self) -> bool {
        let mut error_count = 0;
        let failure = "Integrity failure";

        // Get current timestamp in microseconds
        let timestamp_us = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_micros();

        log::info!("Checking data integrity");

        // Check owned orders against the indexes
        for (order_id, order) in &self.orders {
            if !self
                .index
                .user_orders
                .get(&order.user_id)
                .is_some_and(|order_ids| order_ids.contains(order_id))
            {
                log::error!(
                    "{failure} in orders: {order_id} not found in `index.user_orders` for {}",
                    order.user_id,
                );
                error_count += 1;
            }
            if !self
                .index
                .security_orders
                .get(&order.security_id)
                .is_some_and(|buckets| buckets.bucket(order.side).contains(order_id))
            {
                log::error!(
                    "{failure} in orders: {order_id} not found in `index.security_orders` for {} {}",
                    order.security_id,
                    order.side,
                );
                error_count += 1;
            }
        }

        // Check indexes against the owned orders
        for (user_id, order_ids) in &self.index.user_orders {
            if order_ids.is_empty() {
                log::error!("{failure} in `index.user_orders`: empty group for {user_id}");
                error_count += 1;
            }
            for order_id in order_ids {
                match self.orders.get(order_id) {
                    Some(order) if order.user_id == *user_id => {}
                    Some(_) => {
                        log::error!(
                            "{failure} in `index.user_orders`: {order_id} indexed under the wrong user {user_id}",
                        );
                        error_count += 1;
                    }
                    None => {
                        log::error!(
                            "{failure} in `index.user_orders`: {order_id} not found in `self.orders`",
                        );
                        error_count += 1;
                    }
                }
            }
        }

        for (security_id, buckets) in &self.index.security_orders {
            if buckets.is_empty() {
                log::error!("{failure} in `index.security_orders`: empty group for {security_id}");
                error_count += 1;
            }
            for side in [Side::Buy, Side::Sell] {
                for order_id in buckets.bucket(side) {
                    match self.orders.get(order_id) {
                        Some(order) if order.security_id == *security_id && order.side == side => {}
                        Some(_) => {
                            log::error!(
                                "{failure} in `index.security_orders`: {order_id} indexed under the wrong bucket {security_id} {side}",
                            );
                            error_count += 1;
                        }
                        None => {
                            log::error!(
                                "{failure} in `index.security_orders`: {order_id} not found in `self.orders`",
                            );
                            error_count += 1;
                        }
                    }
                }
            }
        }

        let total_us = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_micros()
            - timestamp_us;

        if error_count == 0 {
            log::info!("Integrity check passed in {total_us}μs");
            true
        } else {
            log::error!(
                "Integrity check failed with {error_count} error{} in {total_us}μs",
                if error_count == 1 { "" } else { "s" },
            );
            false
        }
    }

    // -- ORDER QUERIES ---------------------------------------------------------------------------

    /// Gets a reference to the order with the `order_id` (if found).
    #[must_use]
    pub fn order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.get(order_id)
    }

    /// Returns whether an order with the `order_id` exists.
    #[must_use]
    pub fn order_exists(&self, order_id: &OrderId) -> bool {
        self.orders.contains_key(order_id)
    }

    /// Returns the total count of live orders.
    #[must_use]
    pub fn orders_total_count(&self) -> usize {
        self.orders.len()
    }

    /// Returns a by-value snapshot of all live orders.
    ///
    /// The sequence order is unspecified and must not be relied upon.
    #[must_use]
    pub fn all_orders(&self) -> Vec<Order> {
        self.orders.values().copied().collect()
    }

    /// Returns the order IDs belonging to the `user_id`.
    #[must_use]
    pub fn user_order_ids(&self, user_id: &UserId) -> AHashSet<OrderId> {
        match self.index.user_orders.get(user_id) {
            Some(order_ids) => order_ids.clone(),
            None => AHashSet::new(),
        }
    }

    /// Returns the order IDs for the `security_id`, optionally filtered to one side.
    #[must_use]
    pub fn security_order_ids(
        &self,
        security_id: &SecurityId,
        side: Option<Side>,
    ) -> AHashSet<OrderId> {
        match self.index.security_orders.get(security_id) {
            Some(buckets) => match side {
                Some(side) => buckets.bucket(side).clone(),
                None => buckets.buys.union(&buckets.sells).copied().collect(),
            },
            None => AHashSet::new(),
        }
    }

    /// Returns references to all orders belonging to the `user_id`.
    #[must_use]
    pub fn orders_for_user(&self, user_id: &UserId) -> Vec<&Order> {
        match self.index.user_orders.get(user_id) {
            Some(order_ids) => self.orders_for_ids(order_ids),
            None => Vec::new(),
        }
    }

    /// Returns references to all orders for the `security_id`, optionally filtered to
    /// one side.
    #[must_use]
    pub fn orders_for_security(&self, security_id: &SecurityId, side: Option<Side>) -> Vec<&Order> {
        match self.index.security_orders.get(security_id) {
            Some(buckets) => match side {
                Some(side) => self.orders_for_ids(buckets.bucket(side)),
                None => {
                    let mut orders = self.orders_for_ids(&buckets.buys);
                    orders.extend(self.orders_for_ids(&buckets.sells));
                    orders
                }
            },
            None => Vec::new(),
        }
    }

    fn orders_for_ids(&self, order_ids: &AHashSet<OrderId>) -> Vec<&Order> {
        order_ids
            .iter()
            .filter_map(|order_id| self.orders.get(order_id))
            .collect()
    }

    // -- MATCHING QUERIES ------------------------------------------------------------------------

    /// Returns the total quantity matchable between buy-side and sell-side interest for
    /// the `security_id`, where a match is only permitted across companies.
    ///
    /// An unknown security returns zero, as does a security whose interest all belongs
    /// to a single company. Read-only: the cache is never mutated.
    #[must_use]
    pub fn matching_size_for_security(&self, security_id: &SecurityId) -> u64 {
        let Some(buckets) = self.index.security_orders.get(security_id) else {
            return 0;
        };

        let buys = self.orders_for_ids(&buckets.buys);
        let sells = self.orders_for_ids(&buckets.sells);

        matching_size(&buys, &sells)
    }
}

impl OrderStore for OrderCache {
    fn add_order(&mut self, order: Order) {
        Self::add_order(self, order);
    }

    fn cancel_order(&mut self, order_id: OrderId) {
        Self::cancel_order(self, order_id);
    }

    fn cancel_orders_for_user(&mut self, user_id: UserId) {
        Self::cancel_orders_for_user(self, user_id);
    }

    fn cancel_orders_for_security_with_min_qty(&mut self, security_id: SecurityId, min_qty: u64) {
        Self::cancel_orders_for_security_with_min_qty(self, security_id, min_qty);
    }

    fn matching_size_for_security(&self, security_id: &SecurityId) -> u64 {
        Self::matching_size_for_security(self, security_id)
    }

    fn all_orders(&self) -> Vec<Order> {
        Self::all_orders(self)
    }
}
