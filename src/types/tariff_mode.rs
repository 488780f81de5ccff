// Copyright (c) 2024-2025  EcoSwitch Lite authors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/*!
Mode tarifaire
==============

Mode de tarification de l'électricité du client.
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Mode tarifaire de l'électricité
///
/// Electricity tariff mode. Labels that are not recognised are kept as `Other` and priced as
/// `Base`, so that a simulation can always be produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TariffMode {
    /// Prix unique toute la journée
    #[strum(serialize = "base")]
    Base,
    /// Heures pleines / heures creuses (time of use)
    #[strum(serialize = "hp_hc")]
    PeakOffPeak,
    /// Tempo: heures pleines / heures creuses selon la couleur du jour
    #[strum(serialize = "tempo")]
    Tempo,
    /// Mode non reconnu
    #[strum(default)]
    Other(String),
}

impl Default for TariffMode {
    fn default() -> Self {
        TariffMode::Base
    }
}

impl fmt::Display for TariffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TariffMode::Base => write!(f, "base"),
            TariffMode::PeakOffPeak => write!(f, "hp_hc"),
            TariffMode::Tempo => write!(f, "tempo"),
            TariffMode::Other(label) => write!(f, "{}", label),
        }
    }
}

impl From<String> for TariffMode {
    fn from(label: String) -> Self {
        TariffMode::from_str(label.trim()).unwrap_or(TariffMode::Other(label))
    }
}

impl From<TariffMode> for String {
    fn from(mode: TariffMode) -> Self {
        mode.to_string()
    }
}
