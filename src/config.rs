/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! YAML settings for programs built on the kernel.
//!
//! ```yaml
//! verbosity: 1
//! determinant:
//!   triangular-fast-path: true
//!   pivoting:
//!     zero-substitution:
//!       epsilon: 1e-200
//! ```
//!
//! Every key is optional.

use crate::FailResult;
use dmat_linalg::DetSettings;

use std::io::Read;

/// Root settings object.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// See `GlobalLogger::verbosity`.
    pub verbosity: i32,

    /// Used for every determinant, minor, cofactor, adjugate and inverse.
    pub determinant: DetSettings,
}

impl Settings {
    /// Read settings from YAML.
    ///
    /// Unrecognized keys are not an error, but each one is logged as a warning.
    pub fn from_reader(mut r: impl Read) -> FailResult<Settings>
    {
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        Settings::from_yaml_str(&s)
    }

    pub fn from_yaml_str(s: &str) -> FailResult<Settings>
    {
        // serde_ignored needs a Deserializer, and going through Value
        // garbles the error messages.  So on failure, parse again from the
        // string to get a proper one.
        let value: serde_yaml::Value = serde_yaml::from_str(s)?;
        let parsed = serde_ignored::deserialize(
            value,
            |path| warn!("Unused config item (possible typo?): {}", path),
        );
        match parsed {
            Ok(settings) => Ok(settings),
            Err(_) => Ok(serde_yaml::from_str(s)?),
        }
    }
}
