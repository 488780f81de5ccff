#[macro_use]
extern crate pretty_assertions;

use std::fs::read_to_string;

use ecoswitch::asplain::assess;
use ecoswitch::error::EcoError;
use ecoswitch::*;

const TOL: f64 = 1e-6;

fn approx_equal(expected: f64, got: f64) -> bool {
    (expected - got).abs() < 1e-3
}

fn get_profile(path: &str) -> ClientProfile {
    read_to_string(path).unwrap().parse().unwrap()
}

fn get_weather(path: &str) -> WeatherSeries {
    read_to_string(path).unwrap().parse().unwrap()
}

fn get_tables() -> TariffTables {
    TariffTables {
        hp_hc: Some(
            read_to_string("test_data/tarifs_hp_hc.json")
                .unwrap()
                .parse()
                .unwrap(),
        ),
        tempo: Some(
            read_to_string("test_data/tarifs_tempo.json")
                .unwrap()
                .parse()
                .unwrap(),
        ),
    }
}

fn profile_from(t_comfort: f64, ua: f64, efficiency: f64, elec: f64, gas: f64) -> ClientProfile {
    format!(
        r#"{{"nom": "Test", "code_postal": "00000", "ua_w_k": {}, "t_confort": {},
            "rendement_chaudiere": {}, "t_depart_pac": 50, "mode_tarif": "base",
            "prix_elec_eur_kwh": {}, "prix_gaz_eur_kwh": {}}}"#,
        ua, t_comfort, efficiency, elec, gas
    )
    .parse()
    .unwrap()
}

#[test]
fn cop_stays_within_bounds() {
    for t_ext in (-60..=60).map(f64::from) {
        for t_supply in &[30.0, 35.0, 45.0, 50.0, 55.0, 65.0] {
            let value = cop(t_ext, *t_supply);
            assert!(value >= COP_MIN && value <= COP_MAX, "COP {} hors bornes", value);
        }
    }
    assert_eq!(COP_MIN, cop(-50.0, 50.0));
    assert_eq!(COP_MAX, cop(50.0, 35.0));
}

#[test]
fn hourly_results_are_consistent() {
    let profile = get_profile("test_data/demo_client.json");
    let weather = get_weather("test_data/meteo_demo.csv");
    let sim = simulate(&profile, &weather, &TariffTables::default());

    assert_eq!(72, sim.hourly.len());
    for hour in &sim.hourly {
        for v in &[
            hour.demand_kwh,
            hour.gas.energy_in_kwh,
            hour.gas.cost_eur,
            hour.gas.co2_kg,
            hour.heat_pump.energy_in_kwh,
            hour.heat_pump.cost_eur,
            hour.heat_pump.co2_kg,
            hour.hybrid.cost_eur(),
            hour.hybrid.co2_kg(),
        ] {
            assert!(v.is_finite() && *v >= 0.0);
        }
        // Toute la demande est servie par une seule source
        assert!(
            (hour.hybrid.useful_pac_kwh + hour.hybrid.useful_gas_kwh - hour.demand_kwh).abs()
                < TOL
        );
        let cheapest = hour.gas.cost_eur.min(hour.heat_pump.cost_eur);
        assert!(hour.hybrid.cost_eur() <= cheapest + TOL);
    }
}

#[test]
fn demo_client_base_tariff() {
    let profile = get_profile("test_data/demo_client.json");
    let weather = get_weather("test_data/meteo_demo.csv");
    let (sim, advice, score) = assess(&profile, &weather, &TariffTables::default());
    let agg = &sim.aggregates;

    assert!(approx_equal(244.8, agg.useful_energy_kwh));
    assert!(approx_equal(2.625, agg.cop_median.unwrap()));
    assert!(approx_equal(21.2870, agg.gas.cost_eur));
    assert!(approx_equal(19.2144, agg.heat_pump.cost_eur));
    assert!(approx_equal(19.1445, agg.hybrid.cost_eur));
    assert!(approx_equal(85.3922, agg.hybrid_heat_pump_share_pct));
    assert!(agg.hybrid.cost_eur <= agg.gas.cost_eur.min(agg.heat_pump.cost_eur));
    assert_eq!(Verdict::HybridRelief, advice);
    assert_eq!(37, score);
}

#[test]
fn seven_degrees_single_hour() {
    let profile = get_profile("test_data/demo_client.json");
    let weather: WeatherSeries = "datetime,t_ext\n2024-01-15T08:00:00,7.0\n".parse().unwrap();
    let (sim, advice, score) = assess(&profile, &weather, &TariffTables::default());
    let hour = &sim.hourly[0];

    assert_eq!(2.4, hour.demand_kwh);
    assert!(approx_equal(2.975, hour.cop));
    assert!(approx_equal(0.1613, hour.heat_pump.cost_eur));
    assert!(approx_equal(0.2087, hour.gas.cost_eur));
    assert!(hour.hybrid.uses_heat_pump);
    assert_eq!(Verdict::HybridRelief, advice);
    assert_eq!(50, score);
}

#[test]
fn tie_goes_to_heat_pump() {
    // COP borné à 1.0 et rendement 1.0 : coûts par kWh utile identiques
    let profile = profile_from(19.0, 100.0, 1.0, 0.1, 0.1);
    let weather: WeatherSeries = "datetime,t_ext\n2024-01-15T08:00:00,-50\n".parse().unwrap();
    let sim = simulate(&profile, &weather, &TariffTables::default());
    let hour = &sim.hourly[0];

    assert_eq!(1.0, hour.cop);
    assert_eq!(hour.hybrid.cost_per_useful_pac, hour.hybrid.cost_per_useful_gas);
    assert!(hour.hybrid.uses_heat_pump);
    assert_eq!(hour.demand_kwh, hour.hybrid.useful_pac_kwh);
    assert_eq!(100.0, sim.aggregates.hybrid_heat_pump_share_pct);
}

#[test]
fn no_heating_when_warm() {
    let profile = get_profile("test_data/demo_client.json");
    let weather = get_weather("test_data/meteo_ete.csv");
    let (sim, advice, score) = assess(&profile, &weather, &TariffTables::default());
    let agg = &sim.aggregates;

    assert!(sim.hourly.iter().all(|h| h.demand_kwh == 0.0));
    assert_eq!(0.0, agg.useful_energy_kwh);
    assert_eq!(0.0, agg.gas.cost_eur);
    assert_eq!(0.0, agg.heat_pump.cost_eur);
    assert_eq!(0.0, agg.hybrid.cost_eur);
    assert_eq!(0.0, agg.hybrid_heat_pump_share_pct);
    assert_eq!(None, agg.cop_median);
    assert_eq!(Verdict::KeepBoiler, advice);
    assert_eq!(0, score);
}

#[test]
fn peak_offpeak_prices() {
    let mut profile = get_profile("test_data/demo_client.json");
    profile.tariff_mode = TariffMode::PeakOffPeak;
    let weather = get_weather("test_data/meteo_demo.csv");
    let sim = simulate(&profile, &weather, &get_tables());

    assert_eq!(0.1696, sim.hourly[0].elec_price);
    assert_eq!(0.2146, sim.hourly[12].elec_price);
    assert_eq!(0.1696, sim.hourly[23].elec_price);
    assert!(sim.hourly.iter().all(|h| h.gas_price == 0.08));
    assert!(approx_equal(18.6439, sim.aggregates.hybrid.cost_eur));
    assert_eq!(40, eco_score(&sim.aggregates));
}

#[test]
fn tempo_red_day() {
    let profile = get_profile("test_data/client_tempo.json");
    let weather = get_weather("test_data/meteo_demo.csv");
    let (sim, advice, score) = assess(&profile, &weather, &get_tables());

    assert_eq!(0.1568, sim.hourly[2].elec_price);
    assert_eq!(0.7562, sim.hourly[12].elec_price);
    assert!(sim.aggregates.heat_pump.cost_eur > sim.aggregates.gas.cost_eur);
    assert!(approx_equal(29.9308, sim.aggregates.hybrid.cost_eur));
    assert_eq!(Verdict::HybridRelief, advice);
    assert_eq!(25, score);
}

#[test]
fn tempo_unknown_color_uses_default() {
    let mut profile = get_profile("test_data/client_tempo.json");
    profile.tempo_color = Some("violet".to_string());
    let weather = get_weather("test_data/meteo_demo.csv");
    let sim = simulate(&profile, &weather, &get_tables());

    assert_eq!(0.1296, sim.hourly[2].elec_price);
    assert_eq!(0.1609, sim.hourly[12].elec_price);
}

#[test]
fn missing_table_falls_back_to_base() {
    let profile = get_profile("test_data/client_tempo.json");
    let weather = get_weather("test_data/meteo_demo.csv");
    let sim = simulate(&profile, &weather, &TariffTables::default());

    assert!(sim.hourly.iter().all(|h| h.elec_price == 0.2516));
    assert!(approx_equal(31.0357, sim.aggregates.hybrid.cost_eur));
    assert_eq!(100.0, sim.aggregates.hybrid_heat_pump_share_pct);
}

#[test]
fn invalid_profile_is_rejected() {
    let res = read_to_string("test_data/client_invalide.json")
        .unwrap()
        .parse::<ClientProfile>();
    match res {
        Err(EcoError::WrongInput(_)) => (),
        other => panic!("Erreur attendue, obtenu : {:?}", other),
    }
}

#[test]
fn weather_order_is_chronological() {
    let weather: WeatherSeries = "datetime,t_ext
2024-01-15T10:00:00,3.0
2024-01-15T08:00:00,1.0
2024-01-15T09:00:00,2.0
"
    .parse()
    .unwrap();
    let temps: Vec<f64> = weather.iter().map(|s| s.t_ext).collect();
    assert_eq!(vec![1.0, 2.0, 3.0], temps);
}
