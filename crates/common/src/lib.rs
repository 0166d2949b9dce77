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

//! Common componentry for Matchbook.
//!
//! The `matchbook-common` crate provides the order caching layer: an in-memory
//! [`OrderCache`](cache::OrderCache) maintaining consistent multi-index views over active
//! orders, and the cross-company matching computation derived from those views.
//!
//! # Platform
//!
//! Matchbook is an in-memory order cache and cross-company matcher for venue trading
//! systems. It maintains a consistent multi-index view over active orders, supporting
//! constant-time membership queries, bulk cancellation by user or security, and a derived
//! cross-company matching quantity per security.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cache;
