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

//! Defines enumerations for the trading domain model.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumIter, EnumString, FromRepr};

use crate::enum_strum_serde;

/// The side for a specific order.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    AsRefStr,
    FromRepr,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// The order is a buy.
    Buy = 1,
    /// The order is a sell.
    Sell = 2,
}

impl Side {
    /// Classifies a raw side string per the venue convention: exactly `"Buy"` is buy side,
    /// any other value is sell side.
    ///
    /// Callers wanting rejection of unrecognized values should use [`Side::from_str`] instead,
    /// which parses `"Buy"` and `"Sell"` case-insensitively.
    #[must_use]
    pub fn classify(value: &str) -> Self {
        if value == "Buy" { Self::Buy } else { Self::Sell }
    }

    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

enum_strum_serde!(Side);

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(Side::Buy, "Buy")]
    #[case(Side::Sell, "Sell")]
    fn test_display(#[case] side: Side, #[case] expected: &str) {
        assert_eq!(side.to_string(), expected);
        assert_eq!(side.as_ref(), expected);
    }

    #[rstest]
    #[case("Buy", Side::Buy)]
    #[case("buy", Side::Buy)]
    #[case("BUY", Side::Buy)]
    #[case("Sell", Side::Sell)]
    #[case("sell", Side::Sell)]
    fn test_from_str(#[case] value: &str, #[case] expected: Side) {
        assert_eq!(Side::from_str(value).unwrap(), expected);
    }

    #[rstest]
    fn test_from_str_unrecognized_is_rejected() {
        assert!(Side::from_str("B").is_err());
        assert!(Side::from_str("").is_err());
    }

    #[rstest]
    #[case(1, Some(Side::Buy))]
    #[case(2, Some(Side::Sell))]
    #[case(0, None)]
    #[case(3, None)]
    fn test_from_repr(#[case] repr: usize, #[case] expected: Option<Side>) {
        assert_eq!(Side::from_repr(repr), expected);
    }

    #[rstest]
    #[case("Buy", Side::Buy)]
    #[case("Sell", Side::Sell)]
    #[case("buy", Side::Sell)] // <-- classification is exact match only
    #[case("BUY", Side::Sell)]
    #[case("", Side::Sell)]
    #[case("Hold", Side::Sell)]
    fn test_classify(#[case] value: &str, #[case] expected: Side) {
        assert_eq!(Side::classify(value), expected);
    }

    #[rstest]
    fn test_classify_roundtrips_display() {
        for side in Side::iter() {
            assert_eq!(Side::classify(side.as_ref()), side);
        }
    }

    #[rstest]
    #[case(Side::Buy, Side::Sell)]
    #[case(Side::Sell, Side::Buy)]
    fn test_opposite(#[case] side: Side, #[case] expected: Side) {
        assert_eq!(side.opposite(), expected);
    }

    #[rstest]
    fn test_serde_roundtrip() {
        let side = Side::Buy;
        let json = serde_json::to_string(&side).unwrap();
        assert_eq!(json, "\"Buy\"");
        let deserialized: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, side);
    }
}
