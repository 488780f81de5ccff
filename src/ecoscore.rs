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
EcoScore
========

Indice de 0 à 100 combinant le gain relatif de coût (60 %) et le gain relatif d'émissions
(40 %) du scénario hybride par rapport au gaz seul.
*/

use crate::{types::Aggregates, vecops::clamp};

/// Poids du gain de coût
pub const ECOSCORE_WEIGHT_COST: f64 = 0.6;
/// Poids du gain d'émissions
pub const ECOSCORE_WEIGHT_CO2: f64 = 0.4;

/// Gain relatif de `candidate` par rapport à `reference`, dans [0, 1]
///
/// Zero when the reference is not positive or the candidate is worse.
fn relative_gain(reference: f64, candidate: f64) -> f64 {
    if reference > 0.0 {
        ((reference - candidate) / reference).max(0.0)
    } else {
        0.0
    }
}

/// EcoScore de la simulation, entre 0 et 100
///
/// The blended score is rounded with `f64::round`, so exact halves round away from zero.
pub fn eco_score(aggregates: &Aggregates) -> u8 {
    let gain_cost = relative_gain(aggregates.gas.cost_eur, aggregates.hybrid.cost_eur);
    let gain_co2 = relative_gain(aggregates.gas.co2_kg, aggregates.hybrid.co2_kg);
    let score = 100.0 * (ECOSCORE_WEIGHT_COST * gain_cost + ECOSCORE_WEIGHT_CO2 * gain_co2);
    if !score.is_finite() {
        return 0;
    }
    clamp(score, 0.0, 100.0).round() as u8
}
