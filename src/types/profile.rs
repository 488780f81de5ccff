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
Profil client
=============

Paramètres du logement et du contrat d'énergie d'un client.

Client profile: building, heating system and energy contract parameters of a single dwelling.

```json
{
    "nom": "Famille Martin",
    "code_postal": "69003",
    "ua_w_k": 200,
    "t_confort": 19,
    "rendement_chaudiere": 0.92,
    "t_depart_pac": 50,
    "mode_tarif": "hp_hc",
    "prix_elec_eur_kwh": 0.2516,
    "prix_gaz_eur_kwh": 0.1054
}
```
*/

use std::str;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{EcoError, Result},
    heatpump::DEFAULT_SUPPLY_TEMP,
    types::TariffMode,
};

/// Profil client
///
/// Immutable input record of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Nom du client (affichage)
    #[serde(rename = "nom", default)]
    pub name: String,
    /// Code postal (affichage)
    #[serde(
        rename = "code_postal",
        default,
        deserialize_with = "string_or_number"
    )]
    pub postal_code: String,
    /// Conductance thermique globale du bâtiment UA [W/K]
    #[serde(rename = "ua_w_k")]
    pub ua: f64,
    /// Température de confort [°C]
    #[serde(rename = "t_confort")]
    pub t_comfort: f64,
    /// Rendement de la chaudière gaz, dans ]0, 1]
    #[serde(rename = "rendement_chaudiere")]
    pub boiler_efficiency: f64,
    /// Température de départ d'eau de la PAC [°C]
    #[serde(rename = "t_depart_pac", default = "default_supply_temp")]
    pub t_supply: f64,
    /// Mode tarifaire de l'électricité
    #[serde(rename = "mode_tarif", default)]
    pub tariff_mode: TariffMode,
    /// Prix de l'électricité en tarif base [€/kWh]
    #[serde(rename = "prix_elec_eur_kwh")]
    pub elec_price: f64,
    /// Prix du gaz [€/kWh]
    #[serde(rename = "prix_gaz_eur_kwh")]
    pub gas_price: f64,
    /// Couleur tempo appliquée à toute la période (couleur par défaut de la table si absente)
    #[serde(
        rename = "couleur_tempo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tempo_color: Option<String>,
}

fn default_supply_temp() -> f64 {
    DEFAULT_SUPPLY_TEMP
}

/// Accepts "69003" as well as 69003
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl ClientProfile {
    /// Vérifie la cohérence des données du profil
    ///
    /// Check ranges of the physical and economic parameters.
    ///
    /// # Errors
    ///
    /// * non positive or non finite conductance
    /// * boiler efficiency outside ]0, 1]
    /// * non finite temperatures
    /// * negative or non finite prices
    pub fn validate(&self) -> Result<()> {
        if !(self.ua.is_finite() && self.ua > 0.0) {
            return Err(EcoError::WrongInput(format!(
                "la conductance UA doit être positive et vaut {}",
                self.ua
            )));
        }
        if !(self.boiler_efficiency > 0.0 && self.boiler_efficiency <= 1.0) {
            return Err(EcoError::WrongInput(format!(
                "le rendement de la chaudière doit être dans ]0, 1] et vaut {}",
                self.boiler_efficiency
            )));
        }
        for (name, value) in &[("t_confort", self.t_comfort), ("t_depart_pac", self.t_supply)] {
            if !value.is_finite() {
                return Err(EcoError::WrongInput(format!(
                    "température {} incorrecte: {}",
                    name, value
                )));
            }
        }
        for (name, value) in &[
            ("prix_elec_eur_kwh", self.elec_price),
            ("prix_gaz_eur_kwh", self.gas_price),
        ] {
            if !(value.is_finite() && *value >= 0.0) {
                return Err(EcoError::WrongInput(format!(
                    "le prix {} doit être positif ou nul et vaut {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl str::FromStr for ClientProfile {
    type Err = EcoError;

    fn from_str(s: &str) -> std::result::Result<ClientProfile, Self::Err> {
        let s_nobom = s.trim_start_matches('\u{feff}');
        let profile: ClientProfile = serde_json::from_str(s_nobom)?;
        profile.validate()?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TPROFILE: &str = r#"{
        "nom": "Famille Martin",
        "code_postal": 69003,
        "ua_w_k": 200,
        "t_confort": 19,
        "rendement_chaudiere": 0.92,
        "mode_tarif": "hp_hc",
        "prix_elec_eur_kwh": 0.2516,
        "prix_gaz_eur_kwh": 0.1054
    }"#;

    #[test]
    fn profile_parse() {
        let profile = TPROFILE.parse::<ClientProfile>().unwrap();
        assert_eq!(profile.name, "Famille Martin");
        assert_eq!(profile.postal_code, "69003");
        assert_eq!(profile.ua, 200.0);
        assert_eq!(profile.t_supply, DEFAULT_SUPPLY_TEMP);
        assert_eq!(profile.tariff_mode, TariffMode::PeakOffPeak);
        assert_eq!(profile.tempo_color, None);
    }

    #[test]
    fn profile_default_mode_is_base() {
        let profile = r#"{"ua_w_k": 150, "t_confort": 20, "rendement_chaudiere": 0.9,
            "prix_elec_eur_kwh": 0.2, "prix_gaz_eur_kwh": 0.1}"#
            .parse::<ClientProfile>()
            .unwrap();
        assert_eq!(profile.tariff_mode, TariffMode::Base);
        assert_eq!(profile.name, "");
    }

    #[test]
    fn profile_rejects_zero_efficiency() {
        let res = r#"{"ua_w_k": 150, "t_confort": 20, "rendement_chaudiere": 0.0,
            "prix_elec_eur_kwh": 0.2, "prix_gaz_eur_kwh": 0.1}"#
            .parse::<ClientProfile>();
        assert!(res.is_err());
    }

    #[test]
    fn profile_rejects_missing_field() {
        let res = r#"{"ua_w_k": 150, "t_confort": 20}"#.parse::<ClientProfile>();
        assert!(res.is_err());
    }
}
