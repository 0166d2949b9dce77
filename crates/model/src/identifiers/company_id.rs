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

//! Represents a valid company ID (the organization owning the order).

use std::{
    fmt::{Debug, Display, Formatter},
    hash::Hash,
};

use matchbook_core::correctness::{FAILED, check_valid_string};
use ustr::Ustr;

/// Represents a valid company ID (the organization owning the order).
///
/// Orders from the same company never match against each other. Ordering compares the
/// inner string contents, so sorted containers enumerate companies lexicographically.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompanyId(Ustr);

impl CompanyId {
    /// Creates a new [`CompanyId`] instance with correctness checking.
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

    /// Creates a new [`CompanyId`] instance.
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

impl Debug for CompanyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Display for CompanyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rstest::rstest;

    use super::CompanyId;
    use crate::identifiers::stubs::*;

    #[rstest]
    fn test_string_reprs(company_id: CompanyId) {
        assert_eq!(company_id.as_str(), "CompanyA");
        assert_eq!(format!("{company_id}"), "CompanyA");
    }

    #[rstest]
    fn test_btree_map_enumerates_lexicographically() {
        let mut qtys: BTreeMap<CompanyId, u64> = BTreeMap::new();
        qtys.insert(CompanyId::from("CompanyC"), 300);
        qtys.insert(CompanyId::from("CompanyA"), 100);
        qtys.insert(CompanyId::from("CompanyB"), 200);

        let companies: Vec<&str> = qtys.keys().map(CompanyId::as_str).collect();
        assert_eq!(companies, vec!["CompanyA", "CompanyB", "CompanyC"]);
    }
}
