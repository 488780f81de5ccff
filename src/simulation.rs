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
Simulation du chauffage
=======================

Calcul horaire de la demande utile et comparaison de trois scénarios :

- gaz seul : énergie d'entrée `D / η`
- PAC seule : énergie d'entrée `D / COP`
- hybride : chaque heure, toute la demande est servie par la source dont le coût par kWh utile
  est le plus bas (`prix_elec / COP` contre `prix_gaz / η`). En cas d'égalité, la PAC.

Every division is guarded: a zero denominator yields zero, so totals are always finite.
*/

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    demand::{temperature_deficit, useful_demand_series},
    heatpump,
    tariffs::{price_for_hour, TariffTables},
    types::{Aggregates, ClientProfile, HourlyRecord, HybridHour, HybridTotals, SupplyFlows},
    vecops::{median, safe_div},
    weather::WeatherSeries,
};

/// Facteur d'émission de l'électricité [kg CO2/kWh]
pub const CO2_ELEC: f64 = 0.06;
/// Facteur d'émission du gaz [kg CO2/kWh]
pub const CO2_GAS: f64 = 0.227;

/// Résultat d'une simulation : séries horaires et agrégats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Résultats horaires, dans l'ordre de la série météo
    pub hourly: Vec<HourlyRecord>,
    /// Agrégats de la période
    pub aggregates: Aggregates,
}

/// La PAC est retenue pour l'heure
///
/// Hybrid dispatch rule: the heat pump serves the hour when its marginal cost per useful kWh
/// is lower than or equal to the boiler's.
pub fn dispatch_to_heat_pump(cost_per_useful_pac: f64, cost_per_useful_gas: f64) -> bool {
    cost_per_useful_pac <= cost_per_useful_gas
}

/// Calcule les résultats d'une heure
///
/// * `demand` - useful heat demand [kWh]
/// * `cop` - heat pump coefficient of performance [-]
/// * `efficiency` - boiler efficiency [-]
/// * `elec_price`, `gas_price` - unit prices [€/kWh]
#[allow(clippy::too_many_arguments)]
fn hour_record(
    datetime: chrono::NaiveDateTime,
    t_ext: f64,
    delta_t: f64,
    demand: f64,
    cop: f64,
    efficiency: f64,
    elec_price: f64,
    gas_price: f64,
) -> HourlyRecord {
    let gas_in = safe_div(demand, efficiency);
    let pac_in = safe_div(demand, cop);

    let gas = SupplyFlows::from_input(gas_in, gas_price, CO2_GAS);
    let heat_pump = SupplyFlows::from_input(pac_in, elec_price, CO2_ELEC);

    let cost_per_useful_pac = safe_div(elec_price, cop);
    let cost_per_useful_gas = safe_div(gas_price, efficiency);
    let uses_heat_pump = dispatch_to_heat_pump(cost_per_useful_pac, cost_per_useful_gas);

    let hybrid = if uses_heat_pump {
        HybridHour {
            uses_heat_pump,
            cost_per_useful_pac,
            cost_per_useful_gas,
            useful_pac_kwh: demand,
            useful_gas_kwh: 0.0,
            heat_pump,
            gas: SupplyFlows::default(),
        }
    } else {
        HybridHour {
            uses_heat_pump,
            cost_per_useful_pac,
            cost_per_useful_gas,
            useful_pac_kwh: 0.0,
            useful_gas_kwh: demand,
            heat_pump: SupplyFlows::default(),
            gas,
        }
    };

    HourlyRecord {
        datetime,
        t_ext,
        delta_t,
        demand_kwh: demand,
        cop,
        elec_price,
        gas_price,
        gas,
        heat_pump,
        hybrid,
    }
}

/// Agrège les résultats horaires
pub fn aggregate(hourly: &[HourlyRecord]) -> Aggregates {
    let mut useful_energy_kwh = 0.0;
    let mut gas = SupplyFlows::default();
    let mut heat_pump = SupplyFlows::default();
    let mut hybrid = HybridTotals::default();
    let mut heating_cops = Vec::with_capacity(hourly.len());

    for hour in hourly {
        useful_energy_kwh += hour.demand_kwh;
        gas += hour.gas;
        heat_pump += hour.heat_pump;
        hybrid += &hour.hybrid;
        if hour.demand_kwh > 0.0 {
            heating_cops.push(hour.cop);
        }
    }

    let hybrid_heat_pump_share_pct = if useful_energy_kwh > 0.0 {
        100.0 * hybrid.useful_pac_kwh / useful_energy_kwh
    } else {
        0.0
    };

    Aggregates {
        useful_energy_kwh,
        cop_median: median(&heating_cops),
        gas,
        heat_pump,
        hybrid,
        hybrid_heat_pump_share_pct,
    }
}

/// Simule le chauffage du logement sur la période météo
///
/// Computes the hourly demand, COP and prices for every weather sample and the three supply
/// scenarios, then aggregates them. Never fails: unsupported tariff modes are priced as base
/// and degenerate divisions yield zero.
pub fn simulate(
    profile: &ClientProfile,
    weather: &WeatherSeries,
    tables: &TariffTables,
) -> Simulation {
    let mode = &profile.tariff_mode;
    if !tables.supports(mode) {
        warn!(
            "Mode tarifaire \"{}\" non disponible, repli sur le tarif base",
            mode
        );
    }
    let color = profile.tempo_color.as_ref().map(String::as_str);
    if let (Some(c), Some(tempo)) = (color, &tables.tempo) {
        if !tempo.has_color(c) {
            warn!(
                "Couleur tempo \"{}\" inconnue, utilisation de \"{}\"",
                c, tempo.default_color
            );
        }
    }

    let demand = useful_demand_series(weather, profile);
    let hourly: Vec<HourlyRecord> = weather
        .iter()
        .zip(demand)
        .map(|(sample, (datetime, demand))| {
            let delta_t = temperature_deficit(profile.t_comfort, sample.t_ext);
            let cop = heatpump::cop(sample.t_ext, profile.t_supply);
            let (elec_price, gas_price) =
                price_for_hour(mode, datetime.hour(), color, profile, tables);
            hour_record(
                datetime,
                sample.t_ext,
                delta_t,
                demand,
                cop,
                profile.boiler_efficiency,
                elec_price,
                gas_price,
            )
        })
        .collect();

    let aggregates = aggregate(&hourly);
    debug!(
        "Simulation: {} heures, {:.1} kWh utiles, coût gaz {:.2} €, PAC {:.2} €, hybride {:.2} €",
        hourly.len(),
        aggregates.useful_energy_kwh,
        aggregates.gas.cost_eur,
        aggregates.heat_pump.cost_eur,
        aggregates.hybrid.cost_eur
    );

    Simulation { hourly, aggregates }
}
