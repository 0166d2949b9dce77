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

//! Identifiers for the trading domain model.
//!
//! All identifiers wrap an interned string, so copies are cheap and equality is a
//! pointer comparison. Ordering compares the string contents.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[macro_use]
mod macros;

pub mod company_id;
pub mod order_id;
pub mod security_id;
pub mod user_id;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

// Re-exports
pub use crate::identifiers::{
    company_id::CompanyId, order_id::OrderId, security_id::SecurityId, user_id::UserId,
};

impl_from_str_for_identifier!(company_id::CompanyId);
impl_from_str_for_identifier!(order_id::OrderId);
impl_from_str_for_identifier!(security_id::SecurityId);
impl_from_str_for_identifier!(user_id::UserId);

impl_serialization_for_identifier!(company_id::CompanyId);
impl_serialization_for_identifier!(order_id::OrderId);
impl_serialization_for_identifier!(security_id::SecurityId);
impl_serialization_for_identifier!(user_id::UserId);

impl_as_ref_for_identifier!(company_id::CompanyId);
impl_as_ref_for_identifier!(order_id::OrderId);
impl_as_ref_for_identifier!(security_id::SecurityId);
impl_as_ref_for_identifier!(user_id::UserId);
