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
Tarifs de l'énergie
===================

Résolution des prix horaires de l'électricité et du gaz selon le mode tarifaire.

- `base`: prix du profil client toute la journée
- `hp_hc`: prix heures creuses si l'heure appartient aux heures creuses, heures pleines sinon
- `tempo`: comme `hp_hc`, avec un couple de prix par couleur de jour

Le gaz est toujours au prix du profil. Un mode inconnu, ou dont la table n'est pas fournie,
est traité comme `base`.

Tables (loaded once per run and passed explicitly to the resolver):

```json
{ "heures_creuses": [22, 23, 0, 1, 2, 3, 4, 5], "hc_eur_kwh": 0.2068, "hp_eur_kwh": 0.27 }
```

```json
{
    "heures_creuses": [22, 23, 0, 1, 2, 3, 4, 5],
    "default_couleur": "bleu",
    "bleu": { "hc": 0.1296, "hp": 0.1609 },
    "blanc": { "hc": 0.1486, "hp": 0.1894 },
    "rouge": { "hc": 0.1568, "hp": 0.7562 }
}
```
*/

use std::collections::BTreeMap;
use std::str;

use serde::{Deserialize, Serialize};

use crate::{
    error::{EcoError, Result},
    types::{ClientProfile, TariffMode},
};

/// Couleur tempo par défaut
pub const DEFAULT_TEMPO_COLOR: &str = "bleu";

fn default_tempo_color() -> String {
    DEFAULT_TEMPO_COLOR.to_string()
}

/// Couple de prix heures creuses / heures pleines [€/kWh]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakOffPeak {
    /// Prix heures creuses
    #[serde(rename = "hc")]
    pub offpeak: f64,
    /// Prix heures pleines
    #[serde(rename = "hp")]
    pub peak: f64,
}

impl PeakOffPeak {
    /// Prix de l'heure `hour` (0-23)
    pub fn price(&self, hour: u32, offpeak_hours: &[u32]) -> f64 {
        if offpeak_hours.contains(&hour) {
            self.offpeak
        } else {
            self.peak
        }
    }

    fn validate(&self, what: &str) -> Result<()> {
        for price in &[self.offpeak, self.peak] {
            if !(price.is_finite() && *price >= 0.0) {
                return Err(EcoError::WrongInput(format!(
                    "prix {} incorrect: {}",
                    what, price
                )));
            }
        }
        Ok(())
    }
}

fn validate_hours(hours: &[u32]) -> Result<()> {
    if let Some(h) = hours.iter().find(|&&h| h > 23) {
        return Err(EcoError::WrongInput(format!(
            "heure creuse hors de 0-23: {}",
            h
        )));
    }
    Ok(())
}

/// Table heures pleines / heures creuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakOffPeakTable {
    /// Heures creuses (0-23)
    #[serde(rename = "heures_creuses")]
    pub offpeak_hours: Vec<u32>,
    /// Prix heures creuses [€/kWh]
    #[serde(rename = "hc_eur_kwh")]
    pub offpeak_price: f64,
    /// Prix heures pleines [€/kWh]
    #[serde(rename = "hp_eur_kwh")]
    pub peak_price: f64,
}

impl PeakOffPeakTable {
    /// Prix de l'électricité à l'heure `hour`
    pub fn price(&self, hour: u32) -> f64 {
        self.prices().price(hour, &self.offpeak_hours)
    }

    fn prices(&self) -> PeakOffPeak {
        PeakOffPeak {
            offpeak: self.offpeak_price,
            peak: self.peak_price,
        }
    }
}

impl str::FromStr for PeakOffPeakTable {
    type Err = EcoError;

    fn from_str(s: &str) -> std::result::Result<PeakOffPeakTable, Self::Err> {
        let table: PeakOffPeakTable = serde_json::from_str(s.trim_start_matches('\u{feff}'))?;
        validate_hours(&table.offpeak_hours)?;
        table.prices().validate("hp_hc")?;
        Ok(table)
    }
}

/// Table tempo : couples de prix par couleur de jour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoTable {
    /// Heures creuses (0-23), communes à toutes les couleurs
    #[serde(rename = "heures_creuses")]
    pub offpeak_hours: Vec<u32>,
    /// Couleur utilisée lorsqu'aucune n'est indiquée
    #[serde(rename = "default_couleur", default = "default_tempo_color")]
    pub default_color: String,
    /// Prix par couleur
    #[serde(flatten)]
    pub colors: BTreeMap<String, PeakOffPeak>,
}

impl TempoTable {
    /// Couple de prix d'une couleur
    ///
    /// No color means the default color. An unknown color also resolves to the default one.
    pub fn pair_for(&self, color: Option<&str>) -> Option<&PeakOffPeak> {
        color
            .and_then(|c| self.colors.get(c))
            .or_else(|| self.colors.get(&self.default_color))
    }

    /// Prix de l'électricité à l'heure `hour` pour une couleur
    pub fn price(&self, hour: u32, color: Option<&str>) -> Option<f64> {
        self.pair_for(color)
            .map(|pair| pair.price(hour, &self.offpeak_hours))
    }

    /// La couleur est définie dans la table
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.contains_key(color)
    }
}

impl str::FromStr for TempoTable {
    type Err = EcoError;

    fn from_str(s: &str) -> std::result::Result<TempoTable, Self::Err> {
        let table: TempoTable = serde_json::from_str(s.trim_start_matches('\u{feff}'))?;
        validate_hours(&table.offpeak_hours)?;
        if !table.has_color(&table.default_color) {
            return Err(EcoError::ColorUnknown(table.default_color));
        }
        for (color, pair) in &table.colors {
            pair.validate(color)?;
        }
        Ok(table)
    }
}

/// Tables tarifaires disponibles pour une simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TariffTables {
    /// Table heures pleines / heures creuses
    pub hp_hc: Option<PeakOffPeakTable>,
    /// Table tempo
    pub tempo: Option<TempoTable>,
}

impl TariffTables {
    /// Le mode peut être résolu avec ces tables, sans repli sur le tarif base
    pub fn supports(&self, mode: &TariffMode) -> bool {
        match mode {
            TariffMode::Base => true,
            TariffMode::PeakOffPeak => self.hp_hc.is_some(),
            TariffMode::Tempo => self.tempo.is_some(),
            TariffMode::Other(_) => false,
        }
    }
}

/// Prix de l'électricité et du gaz [€/kWh] pour une heure de la journée
///
/// Electricity and gas unit prices for `hour` (0-23) under `mode`. Gas is always priced at
/// the profile price. Unsupported modes and missing tables fall back to base pricing.
pub fn price_for_hour(
    mode: &TariffMode,
    hour: u32,
    color: Option<&str>,
    profile: &ClientProfile,
    tables: &TariffTables,
) -> (f64, f64) {
    let elec = match (mode, &tables.hp_hc, &tables.tempo) {
        (TariffMode::PeakOffPeak, Some(hp_hc), _) => hp_hc.price(hour),
        (TariffMode::Tempo, _, Some(tempo)) => {
            tempo.price(hour, color).unwrap_or(profile.elec_price)
        }
        _ => profile.elec_price,
    };
    (elec, profile.gas_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const THPHC: &str = r#"{"heures_creuses": [22, 23, 0, 1, 2, 3, 4, 5],
        "hc_eur_kwh": 0.2068, "hp_eur_kwh": 0.27}"#;

    const TTEMPO: &str = r#"{
        "heures_creuses": [22, 23, 0, 1, 2, 3, 4, 5],
        "default_couleur": "bleu",
        "bleu": { "hc": 0.1296, "hp": 0.1609 },
        "blanc": { "hc": 0.1486, "hp": 0.1894 },
        "rouge": { "hc": 0.1568, "hp": 0.7562 }
    }"#;

    fn tprofile(mode: &str) -> ClientProfile {
        format!(
            r#"{{"ua_w_k": 200, "t_confort": 19, "rendement_chaudiere": 0.92,
                "mode_tarif": "{}", "prix_elec_eur_kwh": 0.2, "prix_gaz_eur_kwh": 0.08}}"#,
            mode
        )
        .parse()
        .unwrap()
    }

    fn ttables() -> TariffTables {
        TariffTables {
            hp_hc: Some(THPHC.parse().unwrap()),
            tempo: Some(TTEMPO.parse().unwrap()),
        }
    }

    #[test]
    fn tariffs_base() {
        let profile = tprofile("base");
        let tables = ttables();
        for hour in 0..24 {
            assert_eq!(
                (0.2, 0.08),
                price_for_hour(&profile.tariff_mode, hour, None, &profile, &tables)
            );
        }
    }

    #[test]
    fn tariffs_hp_hc() {
        let profile = tprofile("hp_hc");
        let tables = ttables();
        let mode = &profile.tariff_mode;
        assert_eq!((0.2068, 0.08), price_for_hour(mode, 23, None, &profile, &tables));
        assert_eq!((0.2068, 0.08), price_for_hour(mode, 3, None, &profile, &tables));
        assert_eq!((0.27, 0.08), price_for_hour(mode, 6, None, &profile, &tables));
        assert_eq!((0.27, 0.08), price_for_hour(mode, 18, None, &profile, &tables));
    }

    #[test]
    fn tariffs_tempo_colors() {
        let profile = tprofile("tempo");
        let tables = ttables();
        let mode = &profile.tariff_mode;
        // Default color
        assert_eq!((0.1609, 0.08), price_for_hour(mode, 12, None, &profile, &tables));
        assert_eq!((0.1296, 0.08), price_for_hour(mode, 2, None, &profile, &tables));
        assert_eq!(
            (0.7562, 0.08),
            price_for_hour(mode, 12, Some("rouge"), &profile, &tables)
        );
        // Unknown color -> default color
        assert_eq!(
            (0.1609, 0.08),
            price_for_hour(mode, 12, Some("violet"), &profile, &tables)
        );
    }

    #[test]
    fn tariffs_fallback_to_base() {
        let profile = tprofile("ejp");
        let tables = ttables();
        assert!(!tables.supports(&profile.tariff_mode));
        assert_eq!(
            (0.2, 0.08),
            price_for_hour(&profile.tariff_mode, 12, None, &profile, &tables)
        );
        // Mode without its table
        let profile = tprofile("hp_hc");
        let empty = TariffTables::default();
        assert!(!empty.supports(&profile.tariff_mode));
        assert_eq!(
            (0.2, 0.08),
            price_for_hour(&profile.tariff_mode, 2, None, &profile, &empty)
        );
    }

    #[test]
    fn tariffs_table_validation() {
        assert!(r#"{"heures_creuses": [24], "hc_eur_kwh": 0.1, "hp_eur_kwh": 0.2}"#
            .parse::<PeakOffPeakTable>()
            .is_err());
        assert!(r#"{"heures_creuses": [1], "hc_eur_kwh": -0.1, "hp_eur_kwh": 0.2}"#
            .parse::<PeakOffPeakTable>()
            .is_err());
        let missing_default = r#"{"heures_creuses": [1], "default_couleur": "vert",
            "bleu": {"hc": 0.1, "hp": 0.2}}"#
            .parse::<TempoTable>();
        match missing_default {
            Err(EcoError::ColorUnknown(c)) => assert_eq!(c, "vert"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn tariffs_tempo_default_color_when_absent() {
        let table = r#"{"heures_creuses": [1], "bleu": {"hc": 0.1, "hp": 0.2}}"#
            .parse::<TempoTable>()
            .unwrap();
        assert_eq!(DEFAULT_TEMPO_COLOR, table.default_color);
        assert_eq!(Some(0.1), table.price(1, None));
    }
}
