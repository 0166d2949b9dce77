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

//! Default implementations and fixture functions to provide stub identifiers for testing.

use rstest::fixture;

use crate::identifiers::{CompanyId, OrderId, SecurityId, UserId};

// ---- OrderId ----

#[fixture]
pub fn order_id() -> OrderId {
    OrderId::from("OrdId1")
}

// ---- SecurityId ----

#[fixture]
pub fn security_id() -> SecurityId {
    SecurityId::from("SecId1")
}

#[fixture]
pub fn security_id_2() -> SecurityId {
    SecurityId::from("SecId2")
}

// ---- UserId ----

#[fixture]
pub fn user_id() -> UserId {
    UserId::from("User1")
}

#[fixture]
pub fn user_id_2() -> UserId {
    UserId::from("User2")
}

// ---- CompanyId ----

#[fixture]
pub fn company_id() -> CompanyId {
    CompanyId::from("CompanyA")
}

#[fixture]
pub fn company_id_b() -> CompanyId {
    CompanyId::from("CompanyB")
}
