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

use ahash::{AHashMap, AHashSet};
use matchbook_model::{
    enums::Side,
    identifiers::{OrderId, SecurityId, UserId},
    orders::Order,
};

use crate::cache::CacheConfig;

/// The buy and sell order ID buckets for a single security.
#[derive(Debug, Default)]
pub struct SideBuckets {
    pub(crate) buys: AHashSet<OrderId>,
    pub(crate) sells: AHashSet<OrderId>,
}

impl SideBuckets {
    pub(crate) fn bucket(&self, side: Side) -> &AHashSet<OrderId> {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }

    pub(crate) fn bucket_mut(&mut self, side: Side) -> &mut AHashSet<OrderId> {
        match side {
            Side::Buy => &mut self.buys,
            Side::Sell => &mut self.sells,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }
}

/// A key-value lookup index for an `OrderCache`.
///
/// Secondary views hold order IDs only; the cache's by-ID table is the single owner of
/// every order record, so the views can never hold a divergent copy.
#[derive(Debug, Default)]
pub struct OrderCacheIndex {
    pub(crate) user_orders: AHashMap<UserId, AHashSet<OrderId>>,
    pub(crate) security_orders: AHashMap<SecurityId, SideBuckets>,
}

impl OrderCacheIndex {
    /// Creates a new [`OrderCacheIndex`] instance with capacities from `config`.
    #[must_use]
    pub fn with_config(config: &CacheConfig) -> Self {
        Self {
            user_orders: AHashMap::with_capacity(config.user_capacity),
            security_orders: AHashMap::with_capacity(config.security_capacity),
        }
    }

    /// Indexes `order` under its user and its security side bucket.
    pub(crate) fn insert_order(&mut self, order: &Order) {
        self.user_orders
            .entry(order.user_id)
            .or_default()
            .insert(order.order_id);

        self.security_orders
            .entry(order.security_id)
            .or_default()
            .bucket_mut(order.side)
            .insert(order.order_id);
    }

    /// Removes `order` from its user group and its security side bucket, dropping
    /// either group entirely once its last ID is gone.
    pub(crate) fn remove_order(&mut self, order: &Order) {
        if let Some(user_orders) = self.user_orders.get_mut(&order.user_id) {
            user_orders.remove(&order.order_id);
            if user_orders.is_empty() {
                self.user_orders.remove(&order.user_id);
            }
        }

        if let Some(buckets) = self.security_orders.get_mut(&order.security_id) {
            buckets.bucket_mut(order.side).remove(&order.order_id);
            if buckets.is_empty() {
                self.security_orders.remove(&order.security_id);
            }
        }
    }

    /// Clears the index which will clear/reset all internal state.
    pub fn clear(&mut self) {
        self.user_orders.clear();
        self.security_orders.clear();
    }
}
