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

//! Trading domain model for Matchbook.
//!
//! The `matchbook-model` crate defines the domain vocabulary shared across the workspace:
//!
//! - Identifier newtypes backed by interned strings (`OrderId`, `SecurityId`, `UserId`,
//!   `CompanyId`).
//! - The `Side` enumeration and the venue's side classification rule.
//! - The `Order` record representing a single active order.
//!
//! # Feature flags
//!
//! This crate provides feature flags to control source code inclusion during compilation:
//!
//! - `stubs`: Enables type stubs for use in testing scenarios.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod enums;
pub mod identifiers;
pub mod macros;
pub mod orders;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;
