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
EcoSwitch
=========

Cette *crate* fournit une bibliothèque et un programme qui **simulent heure par heure le
chauffage d'un logement** et comparent trois stratégies d'approvisionnement :

- chaudière gaz seule
- pompe à chaleur (PAC) seule
- hybride, où chaque heure est servie par la source dont le coût par kWh utile est le plus bas

La simulation produit, pour chaque scénario, l'énergie consommée, le coût et les émissions de
CO₂, ainsi qu'un EcoScore (0-100) et une recommandation.

Hypothèses du modèle :

- bâtiment représenté par une conductance thermique globale unique (UA, W/K)
- COP de la PAC linéaire en température extérieure et température de départ, borné à [1.0, 5.5]
- facteurs d'émission constants (électricité 0.06 kg/kWh, gaz 0.227 kg/kWh)
- tarifs : base, heures pleines / heures creuses (`hp_hc`) ou tempo

This crate provides a library and a binary that simulate the hourly heat demand of a dwelling
and compare gas-only, heat-pump-only and hybrid supply in cost, CO2, eco score and a
recommendation.

# Exemple

```rust
use ecoswitch::*;

let profile: ClientProfile = r#"{
    "nom": "Démo", "code_postal": "69003",
    "ua_w_k": 200, "t_confort": 19, "rendement_chaudiere": 0.92,
    "t_depart_pac": 50, "mode_tarif": "base",
    "prix_elec_eur_kwh": 0.20, "prix_gaz_eur_kwh": 0.08
}"#
.parse()
.unwrap();

let weather: WeatherSeries = "datetime,t_ext\n2024-01-15T08:00:00,7.0\n".parse().unwrap();

let sim = simulate(&profile, &weather, &TariffTables::default());
let score = eco_score(&sim.aggregates);
let advice = verdict(&sim.aggregates, &profile);

assert!(sim.aggregates.hybrid.cost_eur <= sim.aggregates.gas.cost_eur);
println!("{} - EcoScore {}/100", advice, score);
```
*/

#![deny(missing_docs)]

#[cfg(test)] // <-- not needed in examples + integration tests
#[macro_use]
extern crate pretty_assertions;

mod demand;
mod ecoscore;
mod heatpump;
mod simulation;
mod tariffs;
mod vecops;
mod verdict;
mod weather;

pub mod ascsv;
pub mod asplain;
pub mod error;
pub mod types;

pub use demand::*;
pub use ecoscore::*;
pub use heatpump::*;
pub use simulation::*;
pub use tariffs::*;
pub use types::*;
pub use verdict::*;
pub use weather::*;

/// Numéro de version de la bibliothèque
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
