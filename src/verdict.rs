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
Recommandation
==============

Règles de recommandation, évaluées dans l'ordre :

1. PAC seule si `coût PAC ≤ 0.75 · coût gaz` et `COP médian ≥ 2.5`
2. PAC hybride si `coût hybride ≤ 0.90 · coût gaz`
3. conserver la chaudière sinon

An undefined median COP counts as 0. A period without any heating hour keeps the boiler.
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Aggregates, ClientProfile};

/// Rapport maximal coût PAC / coût gaz pour recommander la PAC seule
pub const HEAT_PUMP_COST_RATIO: f64 = 0.75;
/// COP médian minimal pour recommander la PAC seule
pub const HEAT_PUMP_MIN_COP: f64 = 2.5;
/// Rapport maximal coût hybride / coût gaz pour recommander l'hybride
pub const HYBRID_COST_RATIO: f64 = 0.90;

/// Recommandation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// PAC seule recommandée
    HeatPumpOnly,
    /// PAC hybride (en relève) recommandée
    HybridRelief,
    /// Conserver la chaudière
    KeepBoiler,
}

impl Verdict {
    /// Libellé de la recommandation
    pub fn label(self) -> &'static str {
        match self {
            Verdict::HeatPumpOnly => "🟢 PAC seule recommandée (économique et performante)",
            Verdict::HybridRelief => "🔵 PAC hybride (en relève) recommandée",
            Verdict::KeepBoiler => "🟠 Conserver la chaudière (optimiser les réglages d'abord)",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Recommandation pour les agrégats d'une simulation
///
/// The client profile is accepted for rules that depend on the dwelling; none does so far.
pub fn verdict(aggregates: &Aggregates, _profile: &ClientProfile) -> Verdict {
    if !aggregates.has_heating_demand() {
        return Verdict::KeepBoiler;
    }
    let cost_gas = aggregates.gas.cost_eur;
    let cop_median = aggregates.cop_median_or_zero();

    if aggregates.heat_pump.cost_eur <= HEAT_PUMP_COST_RATIO * cost_gas
        && cop_median >= HEAT_PUMP_MIN_COP
    {
        Verdict::HeatPumpOnly
    } else if aggregates.hybrid.cost_eur <= HYBRID_COST_RATIO * cost_gas {
        Verdict::HybridRelief
    } else {
        Verdict::KeepBoiler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HybridTotals, SupplyFlows};

    fn tprofile() -> ClientProfile {
        r#"{"ua_w_k": 200, "t_confort": 19, "rendement_chaudiere": 0.92,
            "prix_elec_eur_kwh": 0.2, "prix_gaz_eur_kwh": 0.08}"#
            .parse()
            .unwrap()
    }

    fn tagg(cost_gas: f64, cost_pac: f64, cost_hybrid: f64, cop_median: Option<f64>) -> Aggregates {
        let flows = |cost_eur| SupplyFlows {
            cost_eur,
            ..Default::default()
        };
        Aggregates {
            useful_energy_kwh: 100.0,
            cop_median,
            gas: flows(cost_gas),
            heat_pump: flows(cost_pac),
            hybrid: HybridTotals {
                cost_eur: cost_hybrid,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn verdict_heat_pump_only() {
        let agg = tagg(100.0, 75.0, 70.0, Some(2.5));
        assert_eq!(Verdict::HeatPumpOnly, verdict(&agg, &tprofile()));
    }

    #[test]
    fn verdict_low_cop_falls_to_hybrid() {
        let agg = tagg(100.0, 60.0, 90.0, Some(2.4));
        assert_eq!(Verdict::HybridRelief, verdict(&agg, &tprofile()));
    }

    #[test]
    fn verdict_keep_boiler() {
        let agg = tagg(100.0, 95.0, 91.0, Some(3.0));
        assert_eq!(Verdict::KeepBoiler, verdict(&agg, &tprofile()));
    }

    #[test]
    fn verdict_without_heating_hours() {
        let agg = Aggregates::default();
        assert_eq!(None, agg.cop_median);
        assert_eq!(Verdict::KeepBoiler, verdict(&agg, &tprofile()));
    }

    #[test]
    fn verdict_labels() {
        assert!(Verdict::HeatPumpOnly.to_string().starts_with("🟢"));
        assert!(Verdict::HybridRelief.to_string().starts_with("🔵"));
        assert!(Verdict::KeepBoiler.to_string().starts_with("🟠"));
    }
}
