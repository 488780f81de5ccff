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
Données météo
=============

Série horaire de températures extérieures lue depuis un CSV avec les colonnes `datetime`
(horodatage ISO 8601) et `t_ext` (°C). Les autres colonnes sont ignorées.

```csv
datetime,t_ext
2024-01-15T00:00:00,2.1
2024-01-15T01:00:00,1.8
```

The series is sorted by timestamp on load. Hourly spacing is assumed, not enforced.
*/

use std::slice;
use std::str;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EcoError, Result};

/// Donnée météo horaire
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Horodatage (heure locale)
    pub datetime: NaiveDateTime,
    /// Température extérieure [°C]
    pub t_ext: f64,
}

/// Série météo ordonnée
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSeries {
    /// Échantillons, par horodatage croissant
    pub samples: Vec<WeatherSample>,
}

impl WeatherSeries {
    /// Construit une série à partir d'échantillons, triés par horodatage
    pub fn new(mut samples: Vec<WeatherSample>) -> Self {
        samples.sort_by_key(|s| s.datetime);
        Self { samples }
    }

    /// Nombre d'échantillons
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// La série est vide
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Itérateur sur les échantillons
    pub fn iter(&self) -> slice::Iter<'_, WeatherSample> {
        self.samples.iter()
    }
}

/// Interprète un horodatage ISO 8601
///
/// Accepts RFC 3339 timestamps (the offset is dropped and the local time kept), naive
/// timestamps with a `T` or space separator, with or without seconds, and plain dates.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for fmt in &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| EcoError::ParseError(format!("horodatage \"{}\"", s)))
}

impl str::FromStr for WeatherSeries {
    type Err = EcoError;

    fn from_str(s: &str) -> std::result::Result<WeatherSeries, Self::Err> {
        let s_nobom = s.trim_start_matches('\u{feff}');
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(s_nobom.as_bytes());

        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| EcoError::MissingColumn(name.into()))
        };
        let idx_datetime = column("datetime")?;
        let idx_t_ext = column("t_ext")?;

        let mut samples = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // Line 1 is the header
            let line = idx + 2;
            let datetime = record
                .get(idx_datetime)
                .ok_or_else(|| EcoError::ParseError(format!("ligne {}: datetime absent", line)))
                .and_then(parse_datetime)?;
            let t_ext = record
                .get(idx_t_ext)
                .ok_or_else(|| EcoError::ParseError(format!("ligne {}: t_ext absent", line)))?
                .parse::<f64>()
                .map_err(|e| EcoError::ParseError(format!("ligne {}: t_ext ({})", line, e)))?;
            if !t_ext.is_finite() {
                return Err(EcoError::WrongInput(format!(
                    "ligne {}: température extérieure non finie",
                    line
                )));
            }
            samples.push(WeatherSample { datetime, t_ext });
        }

        if samples.is_empty() {
            return Err(EcoError::WrongInput(
                "la série météo ne contient aucune donnée".into(),
            ));
        }
        Ok(WeatherSeries::new(samples))
    }
}
