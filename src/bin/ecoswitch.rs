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

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;
use itertools::Itertools;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ecoswitch::asplain::{AsPlain, ClientReport};
use ecoswitch::*;

const LICENSE: &str = "
Copyright (c) 2024-2025  EcoSwitch Lite authors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

// Fonctions auxiliaires -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Fichier {} introuvable", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Erreur de lecture du fichier")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) {
    let res = File::create(&path).and_then(|mut file| file.write_all(content));
    if let Err(err) = res {
        eprintln!(
            "ERREUR : impossible d'écrire dans \"{}\" ({})",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    }
}

/// Lit et interprète un fichier de données, ou termine le programme
///
/// Exits with IOERR when the file can't be read and DATAERR when it can't be parsed.
fn load<T>(path: &str, descr: &str, verbosity: u64) -> T
where
    T: std::str::FromStr<Err = error::EcoError>,
{
    let path = Path::new(path);
    let contents = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERREUR : impossible de lire le fichier {} \"{}\" ({})",
            descr,
            path.display(),
            err.as_fail()
        );
        exit(exitcode::IOERR);
    });
    let value = contents.parse::<T>().unwrap_or_else(|err| {
        eprintln!(
            "ERREUR : format incorrect du fichier {} \"{}\" ({})",
            descr,
            path.display(),
            err
        );
        exit(exitcode::DATAERR);
    });
    if verbosity > 0 {
        println!("{} : \"{}\"", descr, path.display());
    }
    value
}

/// Mode tarifaire : CLI > profil client > valeur par défaut (base)
fn get_tariff_mode(profile: &ClientProfile, matches: &clap::ArgMatches<'_>) -> TariffMode {
    if let Some(mode) = matches.value_of("mode") {
        let mode = TariffMode::from(mode.to_string());
        println!("Mode tarif (utilisateur) : {}", mode);
        mode
    } else {
        println!("Mode tarif (profil client) : {}", profile.tariff_mode);
        profile.tariff_mode.clone()
    }
}

/// Tables tarifaires indiquées en ligne de commande
fn get_tariff_tables(matches: &clap::ArgMatches<'_>, verbosity: u64) -> TariffTables {
    let tables = TariffTables {
        hp_hc: matches
            .value_of("archivo_hphc")
            .map(|path| load::<PeakOffPeakTable>(path, "Tarifs HP/HC", verbosity)),
        tempo: matches
            .value_of("archivo_tempo")
            .map(|path| load::<TempoTable>(path, "Tarifs tempo", verbosity)),
    };
    if let (Some(tempo), true) = (&tables.tempo, verbosity > 0) {
        println!(
            "Couleurs tempo : {} (par défaut : {})",
            tempo.colors.keys().join(", "),
            tempo.default_color
        );
    }
    tables
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ecoswitch={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Fonction principale ------------------------------------------------------------------------

fn main() {
    let matches = App::new("EcoSwitch")
        .bin_name("ecoswitch")
        .version(env!("CARGO_PKG_VERSION"))
        .author("EcoSwitch Lite authors\n\nLicence : publié sous licence MIT.\n")
        .about("EcoSwitch Lite - Comparaison chaudière gaz, PAC et hybride, heure par heure.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("archivo_cliente")
            .short("c")
            .long("client")
            .value_name("FICHIER_CLIENT")
            .help("Profil client (JSON)")
            .takes_value(true)
            .required_unless("showlicense")
            .display_order(1))
        .arg(Arg::with_name("archivo_meteo")
            .short("m")
            .long("meteo")
            .value_name("FICHIER_METEO")
            .help("Série météo horaire (CSV, colonnes datetime et t_ext)")
            .takes_value(true)
            .required_unless("showlicense")
            .display_order(2))
        .arg(Arg::with_name("archivo_hphc")
            .long("hphc")
            .value_name("FICHIER_HPHC")
            .help("Table tarifaire heures pleines / heures creuses (JSON)")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("archivo_tempo")
            .long("tempo")
            .value_name("FICHIER_TEMPO")
            .help("Table tarifaire tempo (JSON)")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("mode")
            .long("mode")
            .value_name("MODE")
            .possible_values(&["base", "hp_hc", "tempo"])
            .help("Mode tarifaire, prioritaire sur celui du profil client")
            .takes_value(true)
            .display_order(5))
        .arg(Arg::with_name("couleur")
            .long("couleur")
            .value_name("COULEUR")
            .help("Couleur tempo appliquée à toute la période.\nP.ex. : --couleur blanc")
            .takes_value(true)
            .display_order(6))
        .arg(Arg::with_name("archivo_salida_csv")
            .long("csv")
            .value_name("FICHIER_CSV")
            .help("Fichier de sortie des résultats horaires (CSV)")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_rapport")
            .long("rapport")
            .value_name("FICHIER_RAPPORT")
            .help("Fichier de sortie du rapport client (texte)")
            .takes_value(true))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("FICHIER_JSON")
            .help("Fichier de sortie des résultats détaillés (JSON)")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licence")
            .help("Affiche la licence du programme (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Niveau de verbosité"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!("{}", LICENSE);
        exit(exitcode::OK);
    }

    // Prologue -----------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");
    init_logging(verbosity);

    if verbosity > 2 {
        println!("Options : ----------");
        println!("{:#?}", matches);
        println!("--------------------");
    }

    println!("** Données d'entrée");

    // Profil client ------------------------------------------------------------------------------
    let mut profile: ClientProfile = load(
        matches.value_of("archivo_cliente").unwrap_or_default(),
        "Profil client",
        verbosity,
    );
    profile.tariff_mode = get_tariff_mode(&profile, &matches);
    if let Some(color) = matches.value_of("couleur") {
        profile.tempo_color = Some(color.to_string());
    }
    if verbosity > 1 {
        println!("{:#?}", profile);
    }

    // Météo --------------------------------------------------------------------------------------
    let weather: WeatherSeries = load(
        matches.value_of("archivo_meteo").unwrap_or_default(),
        "Météo",
        verbosity,
    );
    println!("Météo : {} heures", weather.len());

    // Tarifs -------------------------------------------------------------------------------------
    let tables = get_tariff_tables(&matches, verbosity);
    if !tables.supports(&profile.tariff_mode) {
        println!(
            "AVIS : mode tarif \"{}\" sans table tarifaire, calcul en tarif base",
            profile.tariff_mode
        );
    }

    // Simulation ---------------------------------------------------------------------------------
    info!("Simulation de {} heures", weather.len());
    let simulation = simulate(&profile, &weather, &tables);
    let report = ClientReport::new(&profile, &simulation);
    debug!("Recommandation : {:?}, EcoScore {}", report.verdict, report.ecoscore);

    // Sortie des résultats -----------------------------------------------------------------------
    if let Some(path) = matches.value_of_os("archivo_salida_csv") {
        let path = Path::new(path);
        let csv = ascsv::hourly_to_csv(&simulation.hourly).unwrap_or_else(|error| {
            eprintln!("ERREUR : impossible de générer les résultats horaires ({})", error);
            exit(exitcode::SOFTWARE);
        });
        writefile(path, csv.as_bytes());
        if verbosity > 0 {
            println!("Résultats horaires (CSV) : {}", path.display());
        }
    }

    if let Some(path) = matches.value_of_os("archivo_salida_json") {
        let path = Path::new(path);
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            eprintln!("ERREUR : impossible de convertir les résultats au format JSON ({})", error);
            exit(exitcode::SOFTWARE);
        });
        writefile(path, json.as_bytes());
        if verbosity > 0 {
            println!("Résultats détaillés (JSON) : {}", path.display());
        }
    }

    let plain = report.to_plain();
    if let Some(path) = matches.value_of_os("archivo_salida_rapport") {
        let path = Path::new(path);
        writefile(path, plain.as_bytes());
        if verbosity > 0 {
            println!("Rapport client : {}", path.display());
        }
    }

    // Toujours en format simple
    println!("** Résultats");
    println!("{}", plain);
    println!("✅ Simulation terminée");
    println!("Verdict : {}", report.verdict);
    println!("EcoScore global : {}", report.ecoscore);
}
