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
Résultats horaires et agrégats
==============================

Per hour records and aggregated totals produced by a simulation run.
*/

use std::ops::AddAssign;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

fn round_serialize_4<S>(x: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64((x * 10_000.0).round() / 10_000.0)
}

/// Énergie d'entrée, coût et émissions d'une source
///
/// Input energy, cost and CO2 of a supply scenario, for one hour or a whole period.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplyFlows {
    /// Énergie consommée (électricité ou gaz) [kWh]
    #[serde(serialize_with = "round_serialize_4")]
    pub energy_in_kwh: f64,
    /// Coût [€]
    #[serde(serialize_with = "round_serialize_4")]
    pub cost_eur: f64,
    /// Émissions [kg CO2]
    #[serde(serialize_with = "round_serialize_4")]
    pub co2_kg: f64,
}

impl SupplyFlows {
    /// Flux d'une source à partir de l'énergie consommée, du prix et du facteur d'émission
    pub fn from_input(energy_in_kwh: f64, price: f64, co2_factor: f64) -> Self {
        Self {
            energy_in_kwh,
            cost_eur: energy_in_kwh * price,
            co2_kg: energy_in_kwh * co2_factor,
        }
    }
}

impl AddAssign for SupplyFlows {
    fn add_assign(&mut self, other: Self) {
        self.energy_in_kwh += other.energy_in_kwh;
        self.cost_eur += other.cost_eur;
        self.co2_kg += other.co2_kg;
    }
}

/// Décision et flux horaires du scénario hybride
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HybridHour {
    /// La PAC sert la totalité de la demande de l'heure
    pub uses_heat_pump: bool,
    /// Coût marginal du kWh utile par la PAC [€/kWh]
    pub cost_per_useful_pac: f64,
    /// Coût marginal du kWh utile par la chaudière [€/kWh]
    pub cost_per_useful_gas: f64,
    /// Énergie utile fournie par la PAC [kWh]
    pub useful_pac_kwh: f64,
    /// Énergie utile fournie par la chaudière [kWh]
    pub useful_gas_kwh: f64,
    /// Électricité consommée par la PAC
    pub heat_pump: SupplyFlows,
    /// Gaz consommé par la chaudière
    pub gas: SupplyFlows,
}

impl HybridHour {
    /// Coût total de l'heure [€]
    pub fn cost_eur(&self) -> f64 {
        self.heat_pump.cost_eur + self.gas.cost_eur
    }

    /// Émissions totales de l'heure [kg CO2]
    pub fn co2_kg(&self) -> f64 {
        self.heat_pump.co2_kg + self.gas.co2_kg
    }
}

/// Résultats d'une heure de simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Horodatage (heure locale)
    pub datetime: NaiveDateTime,
    /// Température extérieure [°C]
    pub t_ext: f64,
    /// Écart de température confort - extérieur, nul si négatif [K]
    pub delta_t: f64,
    /// Besoin de chaleur utile [kWh]
    pub demand_kwh: f64,
    /// Coefficient de performance de la PAC [-]
    pub cop: f64,
    /// Prix de l'électricité [€/kWh]
    pub elec_price: f64,
    /// Prix du gaz [€/kWh]
    pub gas_price: f64,
    /// Scénario gaz seul
    pub gas: SupplyFlows,
    /// Scénario PAC seule
    pub heat_pump: SupplyFlows,
    /// Scénario hybride
    pub hybrid: HybridHour,
}

/// Totaux du scénario hybride
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HybridTotals {
    /// Électricité consommée par la PAC [kWh]
    #[serde(serialize_with = "round_serialize_4")]
    pub elec_in_kwh: f64,
    /// Gaz consommé par la chaudière [kWh]
    #[serde(serialize_with = "round_serialize_4")]
    pub gas_in_kwh: f64,
    /// Énergie utile fournie par la PAC [kWh]
    #[serde(serialize_with = "round_serialize_4")]
    pub useful_pac_kwh: f64,
    /// Coût [€]
    #[serde(serialize_with = "round_serialize_4")]
    pub cost_eur: f64,
    /// Émissions [kg CO2]
    #[serde(serialize_with = "round_serialize_4")]
    pub co2_kg: f64,
}

impl AddAssign<&HybridHour> for HybridTotals {
    fn add_assign(&mut self, hour: &HybridHour) {
        self.elec_in_kwh += hour.heat_pump.energy_in_kwh;
        self.gas_in_kwh += hour.gas.energy_in_kwh;
        self.useful_pac_kwh += hour.useful_pac_kwh;
        self.cost_eur += hour.cost_eur();
        self.co2_kg += hour.co2_kg();
    }
}

/// Agrégats de la période simulée
///
/// Sums and medians over the hourly records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aggregates {
    /// Énergie utile demandée [kWh]
    #[serde(serialize_with = "round_serialize_4")]
    pub useful_energy_kwh: f64,
    /// COP médian des heures avec besoin de chauffage, None s'il n'y en a aucune
    pub cop_median: Option<f64>,
    /// Scénario gaz seul
    pub gas: SupplyFlows,
    /// Scénario PAC seule
    pub heat_pump: SupplyFlows,
    /// Scénario hybride
    pub hybrid: HybridTotals,
    /// Part de l'énergie utile fournie par la PAC en hybride [%]
    #[serde(serialize_with = "round_serialize_4")]
    pub hybrid_heat_pump_share_pct: f64,
}

impl Aggregates {
    /// COP médian, 0 lorsqu'il n'est pas défini (aucune heure de chauffage)
    ///
    /// Neutralized median COP to be used in threshold comparisons.
    pub fn cop_median_or_zero(&self) -> f64 {
        self.cop_median.unwrap_or(0.0)
    }

    /// Il y a au moins une heure avec un besoin de chauffage
    pub fn has_heating_demand(&self) -> bool {
        self.cop_median.is_some()
    }
}
