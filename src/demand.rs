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
Besoins de chauffage
====================

Besoin de chaleur utile horaire d'un modèle à conductance thermique unique.

Hourly useful heat demand of a single lumped thermal conductance model:
`demand [kWh] = UA [W/K] · max(0, T_confort - T_ext) [K] · 1 h / 1000`.
*/

use chrono::NaiveDateTime;

use crate::{types::ClientProfile, vecops::round_to, weather::WeatherSeries};

/// Précision du besoin utile horaire (0.1 Wh)
const DEMAND_DECIMALS: i32 = 4;

/// Écart de température à compenser, nul s'il fait plus chaud dehors que la consigne [K]
pub fn temperature_deficit(t_comfort: f64, t_ext: f64) -> f64 {
    let dt = t_comfort - t_ext;
    if dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// Besoin utile d'une heure [kWh] pour une conductance `ua` [W/K] et un écart `deficit` [K]
pub fn useful_demand(ua: f64, deficit: f64) -> f64 {
    round_to(ua * deficit / 1000.0, DEMAND_DECIMALS)
}

/// Série horaire des besoins utiles
///
/// One value per weather sample, in the same order.
pub fn useful_demand_series(
    weather: &WeatherSeries,
    profile: &ClientProfile,
) -> Vec<(NaiveDateTime, f64)> {
    weather
        .iter()
        .map(|sample| {
            let deficit = temperature_deficit(profile.t_comfort, sample.t_ext);
            (sample.datetime, useful_demand(profile.ua, deficit))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWEATHER: &str = "datetime,t_ext
2024-01-15 06:00:00,-2.0
2024-01-15 07:00:00,7.0
2024-01-15 08:00:00,19.0
2024-01-15 09:00:00,24.5
";

    fn tprofile() -> ClientProfile {
        r#"{"ua_w_k": 200, "t_confort": 19, "rendement_chaudiere": 0.92,
            "prix_elec_eur_kwh": 0.2, "prix_gaz_eur_kwh": 0.08}"#
            .parse()
            .unwrap()
    }

    #[test]
    fn deficit_is_never_negative() {
        assert_eq!(12.0, temperature_deficit(19.0, 7.0));
        assert_eq!(0.0, temperature_deficit(19.0, 19.0));
        assert_eq!(0.0, temperature_deficit(19.0, 30.0));
    }

    #[test]
    fn demand_series() {
        let weather: WeatherSeries = TWEATHER.parse().unwrap();
        let series = useful_demand_series(&weather, &tprofile());
        let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
        assert_eq!(vec![4.2, 2.4, 0.0, 0.0], values);
        assert_eq!(
            weather.iter().map(|s| s.datetime).collect::<Vec<_>>(),
            series.iter().map(|(t, _)| *t).collect::<Vec<_>>()
        );
    }
}
