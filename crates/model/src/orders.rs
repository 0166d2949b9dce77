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

//! An `Order` data type representing a single active order at the venue.

use std::fmt::Display;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    enums::Side,
    identifiers::{CompanyId, OrderId, SecurityId, UserId},
};

/// Represents a single active order at the venue.
///
/// The identity fields never change after construction; only the quantity is mutable,
/// shrinking as an order is partially executed. A zero quantity is accepted and
/// contributes nothing to matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[serde(tag = "type")]
pub struct Order {
    /// The order ID (assigned by the submitting client).
    pub order_id: OrderId,
    /// The ID of the security being traded.
    pub security_id: SecurityId,
    /// The order side.
    pub side: Side,
    /// The order quantity.
    pub qty: u64,
    /// The ID of the user which submitted the order.
    pub user_id: UserId,
    /// The ID of the company owning the order.
    pub company_id: CompanyId,
}

impl Order {
    /// Creates a new [`Order`] instance.
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        security_id: SecurityId,
        side: Side,
        qty: u64,
        user_id: UserId,
        company_id: CompanyId,
    ) -> Self {
        Self {
            order_id,
            security_id,
            side,
            qty,
            user_id,
            company_id,
        }
    }

    /// Returns whether the order is buy side.
    #[must_use]
    pub fn is_buy(&self) -> bool {
        self.side == Side::Buy
    }

    /// Sets the order quantity.
    pub fn set_qty(&mut self, qty: u64) {
        self.qty = qty;
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.order_id, self.security_id, self.side, self.qty, self.user_id, self.company_id,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use rstest::rstest;

    use super::OrderBuilder;
    use crate::{
        enums::Side,
        identifiers::{CompanyId, OrderId, SecurityId, UserId},
        orders::Order,
        stubs::stub_order_buy,
    };

    fn create_test_order() -> Order {
        Order::new(
            OrderId::from("OrdId1"),
            SecurityId::from("SecId1"),
            Side::Buy,
            1_000,
            UserId::from("User1"),
            CompanyId::from("CompanyA"),
        )
    }

    #[rstest]
    fn test_order_new() {
        let order = create_test_order();

        assert_eq!(order.order_id, OrderId::from("OrdId1"));
        assert_eq!(order.security_id, SecurityId::from("SecId1"));
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.qty, 1_000);
        assert_eq!(order.user_id, UserId::from("User1"));
        assert_eq!(order.company_id, CompanyId::from("CompanyA"));
    }

    #[rstest]
    fn test_order_builder() {
        let order = OrderBuilder::default()
            .order_id(OrderId::from("OrdId2"))
            .security_id(SecurityId::from("SecId2"))
            .side(Side::Sell)
            .qty(3_000)
            .user_id(UserId::from("User2"))
            .company_id(CompanyId::from("CompanyB"))
            .build()
            .unwrap();

        assert_eq!(order.order_id, OrderId::from("OrdId2"));
        assert_eq!(order.security_id, SecurityId::from("SecId2"));
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.qty, 3_000);
        assert_eq!(order.user_id, UserId::from("User2"));
        assert_eq!(order.company_id, CompanyId::from("CompanyB"));
    }

    #[rstest]
    #[case(Side::Buy, true)]
    #[case(Side::Sell, false)]
    fn test_is_buy(#[case] side: Side, #[case] expected: bool) {
        let mut order = create_test_order();
        order.side = side;
        assert_eq!(order.is_buy(), expected);
    }

    #[rstest]
    fn test_set_qty() {
        let mut order = create_test_order();
        order.set_qty(250);
        assert_eq!(order.qty, 250);

        order.set_qty(0);
        assert_eq!(order.qty, 0);
    }

    #[rstest]
    fn test_order_hash() {
        let order1 = create_test_order();
        let order2 = create_test_order();

        let mut hasher1 = DefaultHasher::new();
        let mut hasher2 = DefaultHasher::new();

        order1.hash(&mut hasher1);
        order2.hash(&mut hasher2);

        assert_eq!(hasher1.finish(), hasher2.finish());
    }

    #[rstest]
    fn test_order_partial_eq() {
        let order1 = create_test_order();
        let order2 = create_test_order();
        let mut order3 = create_test_order();
        order3.set_qty(500);

        assert_eq!(order1, order2);
        assert_ne!(order1, order3);
    }

    #[rstest]
    fn test_order_clone() {
        let order1 = create_test_order();
        let order2 = order1;

        assert_eq!(order1, order2);
        assert_eq!(order1.order_id, order2.order_id);
    }

    #[rstest]
    fn test_order_debug() {
        let order = create_test_order();
        let debug_str = format!("{order:?}");

        assert!(debug_str.contains("Order"));
        assert!(debug_str.contains("OrdId1"));
        assert!(debug_str.contains("SecId1"));
        assert!(debug_str.contains("Buy"));
    }

    #[rstest]
    fn test_to_string(stub_order_buy: Order) {
        assert_eq!(
            stub_order_buy.to_string(),
            "OrdId1,SecId1,Buy,1000,User1,CompanyA"
        );
    }

    #[rstest]
    fn test_order_serialization() {
        let order = create_test_order();

        let json = serde_json::to_string(&order).unwrap();
        let deserialized: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(order, deserialized);
    }

    #[rstest]
    fn test_deserialize_raw_string() {
        let raw_string = r#"{
            "type": "Order",
            "order_id": "OrdId4",
            "security_id": "SecId3",
            "side": "Sell",
            "qty": 200,
            "user_id": "User8",
            "company_id": "CompanyE"
        }"#;

        let order: Order = serde_json::from_str(raw_string).unwrap();

        assert_eq!(order.order_id, OrderId::from("OrdId4"));
        assert_eq!(order.security_id, SecurityId::from("SecId3"));
        assert_eq!(order.side, Side::Sell);
        assert_eq!(order.qty, 200);
        assert_eq!(order.user_id, UserId::from("User8"));
        assert_eq!(order.company_id, CompanyId::from("CompanyE"));
    }
}
