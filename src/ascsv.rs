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
Export horaire CSV
==================

Une ligne par heure simulée, précédée d'une ligne d'en-tête.
*/

use crate::{
    error::{EcoError, Result},
    types::HourlyRecord,
};

/// Colonnes de l'export horaire
pub const HOURLY_CSV_HEADER: [&str; 22] = [
    "datetime",
    "t_ext",
    "delta_t",
    "e_utile_kwh",
    "cop",
    "prix_elec",
    "prix_gaz",
    "gaz_e_in_kwh",
    "gaz_cout_eur",
    "gaz_co2_kg",
    "pac_e_in_kwh",
    "pac_cout_eur",
    "pac_co2_kg",
    "cout_utile_pac",
    "cout_utile_gaz",
    "hybride_pac",
    "hybride_utile_pac_kwh",
    "hybride_utile_gaz_kwh",
    "hybride_elec_in_kwh",
    "hybride_gaz_in_kwh",
    "hybride_cout_eur",
    "hybride_co2_kg",
];

fn fmt4(v: f64) -> String {
    format!("{:.4}", v)
}

fn to_row(r: &HourlyRecord) -> Vec<String> {
    let h = &r.hybrid;
    vec![
        r.datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
        format!("{:.2}", r.t_ext),
        format!("{:.2}", r.delta_t),
        fmt4(r.demand_kwh),
        format!("{:.3}", r.cop),
        fmt4(r.elec_price),
        fmt4(r.gas_price),
        fmt4(r.gas.energy_in_kwh),
        fmt4(r.gas.cost_eur),
        fmt4(r.gas.co2_kg),
        fmt4(r.heat_pump.energy_in_kwh),
        fmt4(r.heat_pump.cost_eur),
        fmt4(r.heat_pump.co2_kg),
        fmt4(h.cost_per_useful_pac),
        fmt4(h.cost_per_useful_gas),
        if h.uses_heat_pump { "1" } else { "0" }.to_string(),
        fmt4(h.useful_pac_kwh),
        fmt4(h.useful_gas_kwh),
        fmt4(h.heat_pump.energy_in_kwh),
        fmt4(h.gas.energy_in_kwh),
        fmt4(h.cost_eur()),
        fmt4(h.co2_kg()),
    ]
}

/// Convertit les résultats horaires en CSV
///
/// Hourly records as CSV text, header first.
pub fn hourly_to_csv(hourly: &[HourlyRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&HOURLY_CSV_HEADER)?;
    for record in hourly {
        writer.write_record(to_row(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| EcoError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| EcoError::ParseError(format!("UTF-8 ({})", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{simulate, ClientProfile, TariffTables, WeatherSeries};

    #[test]
    fn csv_hourly_export() {
        let profile: ClientProfile = r#"{"ua_w_k": 200, "t_confort": 19, "rendement_chaudiere": 0.92,
            "prix_elec_eur_kwh": 0.20, "prix_gaz_eur_kwh": 0.08}"#
            .parse()
            .unwrap();
        let weather: WeatherSeries = "datetime,t_ext
2024-01-15T07:00:00,7
2024-01-15T08:00:00,21
"
        .parse()
        .unwrap();
        let sim = simulate(&profile, &weather, &TariffTables::default());
        let csv = hourly_to_csv(&sim.hourly).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(3, lines.len());
        assert_eq!(HOURLY_CSV_HEADER.join(","), lines[0]);
        assert!(lines[1].starts_with("2024-01-15T07:00:00,7.00,12.00,2.4000,"));
        assert!(lines[2].starts_with("2024-01-15T08:00:00,21.00,0.00,0.0000,"));
        assert_eq!(HOURLY_CSV_HEADER.len(), lines[1].split(',').count());
    }
}
