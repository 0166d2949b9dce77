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

//! Represents a valid order ID (assigned by the submitting client).

use std::{
    fmt::{Debug, Display, Formatter},
    hash::Hash,
};

use matchbook_core::correctness::{FAILED, check_valid_string};
use ustr::Ustr;

/// Represents a valid order ID (assigned by the submitting client).
///
/// Order IDs are globally unique within the cache and act as the primary key for
/// all order state.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderId(Ustr);

impl OrderId {
    /// Creates a new [`OrderId`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error:
    /// - If `value` is not a valid string.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, stringify!(value))?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`OrderId`] instance.
    ///
    /// # Panics
    ///
    /// Panics:
    /// - If `value` is not a valid string.
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Returns the inner identifier value.
    #[must_use]
    pub fn inner(&self) -> Ustr {
        self.0
    }

    /// Returns the inner identifier value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Debug for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::OrderId;
    use crate::identifiers::stubs::*;

    #[rstest]
    fn test_string_reprs(order_id: OrderId) {
        assert_eq!(order_id.as_str(), "OrdId1");
        assert_eq!(format!("{order_id}"), "OrdId1");
        assert_eq!(format!("{order_id:?}"), "\"OrdId1\"");
    }

    #[rstest]
    fn test_from_str_conversions() {
        let from_str = OrderId::from("OrdId1");
        let from_string = OrderId::from(String::from("OrdId1"));
        assert_eq!(from_str, from_string);
    }

    #[rstest]
    fn test_new_checked_with_invalid_value() {
        assert!(OrderId::new_checked("").is_err());
        assert!(OrderId::new_checked("  ").is_err());
    }
}
