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

//! Type stubs to facilitate testing.

use rstest::fixture;

use crate::{
    enums::Side,
    identifiers::{CompanyId, OrderId, SecurityId, UserId},
    orders::Order,
};

// ---- Orders ----

#[fixture]
pub fn stub_order_buy() -> Order {
    Order::new(
        OrderId::from("OrdId1"),
        SecurityId::from("SecId1"),
        Side::Buy,
        1_000,
        UserId::from("User1"),
        CompanyId::from("CompanyA"),
    )
}

#[fixture]
pub fn stub_order_sell() -> Order {
    Order::new(
        OrderId::from("OrdId3"),
        SecurityId::from("SecId1"),
        Side::Sell,
        500,
        UserId::from("User3"),
        CompanyId::from("CompanyA"),
    )
}

/// A small book of five orders across two securities, five users, and three companies.
///
/// `SecId1` carries same-company interest only (`CompanyA` both sides), while `SecId2`
/// carries cross-company interest from `CompanyA`, `CompanyB`, and `CompanyC`.
#[fixture]
pub fn stub_order_list() -> Vec<Order> {
    vec![
        Order::new(
            OrderId::from("OrdId1"),
            SecurityId::from("SecId1"),
            Side::Buy,
            1_000,
            UserId::from("User1"),
            CompanyId::from("CompanyA"),
        ),
        Order::new(
            OrderId::from("OrdId2"),
            SecurityId::from("SecId2"),
            Side::Sell,
            3_000,
            UserId::from("User2"),
            CompanyId::from("CompanyB"),
        ),
        Order::new(
            OrderId::from("OrdId3"),
            SecurityId::from("SecId1"),
            Side::Sell,
            500,
            UserId::from("User3"),
            CompanyId::from("CompanyA"),
        ),
        Order::new(
            OrderId::from("OrdId4"),
            SecurityId::from("SecId2"),
            Side::Buy,
            600,
            UserId::from("User4"),
            CompanyId::from("CompanyC"),
        ),
        Order::new(
            OrderId::from("OrdId5"),
            SecurityId::from("SecId2"),
            Side::Buy,
            100,
            UserId::from("User5"),
            CompanyId::from("CompanyA"),
        ),
    ]
}

// ---- Generators ----

/// Creates a deterministic list of `security_count * user_count * orders_per_user` orders
/// spread across securities, users, sides, and companies.
///
/// Users are assigned to companies round-robin (ten companies), so the generated book
/// always carries cross-company interest on both sides of every security.
#[must_use]
pub fn create_order_list_sample(
    security_count: usize,
    user_count: usize,
    orders_per_user: usize,
) -> Vec<Order> {
    let mut orders = Vec::with_capacity(security_count * user_count * orders_per_user);

    for sec in 0..security_count {
        let security_id = SecurityId::new(format!("SEC-{sec}"));
        for user in 0..user_count {
            let user_id = UserId::new(format!("USER-{user}"));
            let company_id = CompanyId::new(format!("COMPANY-{}", user % 10));
            for n in 0..orders_per_user {
                let order_id = OrderId::new(format!("O-{sec}-{user}-{n}"));
                let side = if n % 2 == 0 { Side::Buy } else { Side::Sell };
                let qty = (100 + 10 * ((user + n) % 90)) as u64;
                orders.push(Order::new(order_id, security_id, side, qty, user_id, company_id));
            }
        }
    }

    orders
}
