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

//! Functions for condition and predicate checks similar to the *design by contract* philosophy.
//!
//! Domain constructors validate their inputs through these functions, returning a descriptive
//! error on failure. The panicking constructor variants pair the checked call with
//! `.expect(FAILED)`.

use anyhow::bail;

/// A message prefix that can be used with calls to `expect` or other assertion-related functions.
pub const FAILED: &str = "Condition failed:";

/// Checks the string `s` has semantic meaning and contains only ASCII characters.
///
/// # Errors
///
/// Returns an error if:
/// - The string `s` is an empty string.
/// - The string `s` consists solely of whitespace characters.
/// - The string `s` contains a non-ASCII character.
pub fn check_valid_string(s: &str, param: &str) -> anyhow::Result<()> {
    if s.is_empty() {
        bail!("{FAILED} invalid string for '{param}', was empty")
    } else if s.chars().all(char::is_whitespace) {
        bail!("{FAILED} invalid string for '{param}', was all whitespace")
    } else if !s.is_ascii() {
        bail!("{FAILED} invalid string for '{param}' contained a non-ASCII char, was '{s}'")
    } else {
        Ok(())
    }
}
