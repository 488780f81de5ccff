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
Rapport client
==============

Rapport en texte simple d'une simulation : paramètres du client, synthèse énergétique,
scénarios comparés, recommandation et EcoScore.
*/

use serde::Serialize;

use crate::{
    eco_score, simulate, types::ClientProfile, verdict, weather::WeatherSeries, Simulation,
    TariffTables, Verdict,
};

/// Affichage en format simple
///
/// Plain text rendering of results
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

/// Données complètes d'un rapport client
#[derive(Debug, Clone, Serialize)]
pub struct ClientReport<'a> {
    /// Profil du client
    pub client: &'a ClientProfile,
    /// Résultats de la simulation
    pub simulation: &'a Simulation,
    /// Recommandation
    pub verdict: Verdict,
    /// Libellé de la recommandation
    pub recommandation: &'static str,
    /// EcoScore (0-100)
    pub ecoscore: u8,
}

impl<'a> ClientReport<'a> {
    /// Rapport pour une simulation déjà calculée
    pub fn new(client: &'a ClientProfile, simulation: &'a Simulation) -> Self {
        let verdict = verdict(&simulation.aggregates, client);
        Self {
            client,
            simulation,
            verdict,
            recommandation: verdict.label(),
            ecoscore: eco_score(&simulation.aggregates),
        }
    }
}

/// Simule et évalue en une seule étape
///
/// Convenience wrapper returning the simulation together with its verdict and score.
pub fn assess(
    profile: &ClientProfile,
    weather: &WeatherSeries,
    tables: &TariffTables,
) -> (Simulation, Verdict, u8) {
    let sim = simulate(profile, weather, tables);
    let advice = verdict(&sim.aggregates, profile);
    let score = eco_score(&sim.aggregates);
    (sim, advice, score)
}

/// Affiche une valeur optionnelle avec la précision voulue, ou un tiret si elle est absente
fn value_or_dash(v: Option<f64>, precision: usize) -> String {
    match v {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

impl<'a> AsPlain for ClientReport<'a> {
    fn to_plain(&self) -> String {
        let c = self.client;
        let a = &self.simulation.aggregates;

        let name = if c.name.is_empty() { "N/A" } else { c.name.as_str() };
        let postal_code = &c.postal_code;
        let ua = c.ua;
        let t_comfort = c.t_comfort;
        let efficiency = c.boiler_efficiency;
        let mode = &c.tariff_mode;
        let t_supply = c.t_supply;

        let useful = a.useful_energy_kwh;
        let cop_median = value_or_dash(a.cop_median, 2);
        let (gas_cost, gas_co2) = (a.gas.cost_eur, a.gas.co2_kg);
        let (pac_cost, pac_co2) = (a.heat_pump.cost_eur, a.heat_pump.co2_kg);
        let (hyb_cost, hyb_co2) = (a.hybrid.cost_eur, a.hybrid.co2_kg);
        let share = a.hybrid_heat_pump_share_pct;
        let hours = self.simulation.hourly.len();

        let verdict = self.verdict;
        let score = self.ecoscore;

        format!(
            "EcoSwitch Lite — Rapport client
=====================================

Client : {name} — CP {postal_code}
UA : {ua} W/K | T_confort : {t_comfort} °C
Rendement chaudière : {efficiency} | Mode tarif : {mode}
T_depart PAC : {t_supply} °C

Synthèse énergétique & économique
---------------------------------
Période simulée        : {hours} h
Énergie utile demandée : {useful:.1} kWh
COP médian observé    : {cop_median}

Scénarios comparés (totaux)
---------------------------
Gaz seul  : coût = {gas_cost:.2} €, CO₂ = {gas_co2:.1} kg
PAC seule : coût = {pac_cost:.2} €, CO₂ = {pac_co2:.1} kg
Hybride   : coût = {hyb_cost:.2} €, CO₂ = {hyb_co2:.1} kg
Part utile PAC en hybride : {share:.1} %

Recommandation
--------------
{verdict}

EcoScore (0–100)
----------------
{score}/100

Notes
-----
- Modèle Lite pédagogique, conductance thermique unique.
- Hypothèses CO₂ et tarifs simplifiées. Données 100% locales, sans cloud.
- « Ne devinez plus — mesurez. »
"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tprofile() -> ClientProfile {
        r#"{"nom": "Famille Martin", "code_postal": "69003", "ua_w_k": 200, "t_confort": 19,
            "rendement_chaudiere": 0.92, "t_depart_pac": 50, "mode_tarif": "base",
            "prix_elec_eur_kwh": 0.20, "prix_gaz_eur_kwh": 0.08}"#
            .parse()
            .unwrap()
    }

    #[test]
    fn report_plain() {
        let profile = tprofile();
        let weather: WeatherSeries = "datetime,t_ext\n2024-01-15T08:00:00,7\n".parse().unwrap();
        let sim = simulate(&profile, &weather, &TariffTables::default());
        let report = ClientReport::new(&profile, &sim).to_plain();
        assert!(report.contains("Client : Famille Martin — CP 69003"));
        assert!(report.contains("Énergie utile demandée : 2.4 kWh"));
        assert!(report.contains("COP médian observé    : 2.9"));
        assert!(report.contains("Gaz seul  : coût = 0.21 €"));
        assert!(report.contains("PAC seule : coût = 0.16 €"));
        assert!(report.contains("Part utile PAC en hybride : 100.0 %"));
    }

    #[test]
    fn report_without_heating_hours() {
        let profile = tprofile();
        let weather: WeatherSeries = "datetime,t_ext\n2024-07-15T08:00:00,25\n".parse().unwrap();
        let (sim, advice, score) = assess(&profile, &weather, &TariffTables::default());
        assert_eq!(Verdict::KeepBoiler, advice);
        assert_eq!(0, score);
        let report = ClientReport::new(&profile, &sim).to_plain();
        assert!(report.contains("COP médian observé    : -"));
        assert!(report.contains("0/100"));
    }
}
