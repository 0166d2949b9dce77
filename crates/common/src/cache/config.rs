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

use serde::{Deserialize, Serialize};

/// Configuration for `OrderCache` instances.
///
/// The capacities are pre-sizing hints only; the cache grows past them without limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// The initial capacity for the by-ID order table.
    pub order_capacity: usize,
    /// The initial capacity for the by-user index.
    pub user_capacity: usize,
    /// The initial capacity for the by-security index.
    pub security_capacity: usize,
}

impl Default for CacheConfig {
    /// Creates a new default [`CacheConfig`] instance.
    fn default() -> Self {
        Self {
            order_capacity: 10_000,
            user_capacity: 1_000,
            security_capacity: 1_000,
        }
    }
}

impl CacheConfig {
    /// Creates a new [`CacheConfig`] instance.
    #[must_use]
    pub const fn new(order_capacity: usize, user_capacity: usize, security_capacity: usize) -> Self {
        Self {
            order_capacity,
            user_capacity,
            security_capacity,
        }
    }
}
