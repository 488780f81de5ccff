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
Performance de la pompe à chaleur
=================================

COP dynamique approché à partir de courbes génériques (EN 14825).

Linear approximation around the reference operating point (7 °C outdoor, 35 °C supply water,
COP 3.2). The COP rises with the outdoor temperature and falls with the supply temperature
(higher lift), and is bounded to [1.0, 5.5].
*/

use crate::vecops::clamp;

/// COP au point de référence
pub const COP_REF: f64 = 3.2;
/// Température extérieure du point de référence [°C]
pub const T_EXT_REF: f64 = 7.0;
/// Température de départ du point de référence [°C]
pub const T_SUPPLY_REF: f64 = 35.0;
/// Sensibilité du COP à la température extérieure [1/K]
pub const COP_SLOPE_T_EXT: f64 = 0.07;
/// Sensibilité du COP à la température de départ [1/K]
pub const COP_SLOPE_T_SUPPLY: f64 = 0.015;
/// COP minimal
pub const COP_MIN: f64 = 1.0;
/// COP maximal
pub const COP_MAX: f64 = 5.5;
/// Température de départ par défaut [°C]
pub const DEFAULT_SUPPLY_TEMP: f64 = 50.0;

/// COP de la PAC pour une température extérieure et une température de départ d'eau
///
/// Coefficient of performance for `t_ext` outdoor and `t_supply` supply temperatures [°C],
/// always within [COP_MIN, COP_MAX].
pub fn cop(t_ext: f64, t_supply: f64) -> f64 {
    let base = COP_REF + COP_SLOPE_T_EXT * (t_ext - T_EXT_REF)
        - COP_SLOPE_T_SUPPLY * (t_supply - T_SUPPLY_REF);
    if base.is_nan() {
        return COP_MIN;
    }
    clamp(base, COP_MIN, COP_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cop_reference_point() {
        assert_eq!(COP_REF, cop(T_EXT_REF, T_SUPPLY_REF));
    }

    #[test]
    fn cop_supply_50() {
        assert!((cop(7.0, 50.0) - 2.975).abs() < 1e-9);
    }

    #[test]
    fn cop_is_bounded() {
        for t_ext in (-40..=45).map(f64::from) {
            for t_supply in (25..=75).step_by(5).map(f64::from) {
                let c = cop(t_ext, t_supply);
                assert!(c >= COP_MIN && c <= COP_MAX, "cop({}, {}) = {}", t_ext, t_supply, c);
            }
        }
        assert_eq!(COP_MIN, cop(-100.0, 50.0));
        assert_eq!(COP_MAX, cop(60.0, 35.0));
    }

    #[test]
    fn cop_decreases_with_supply_temperature() {
        assert!(cop(0.0, 35.0) > cop(0.0, 55.0));
        assert!(cop(-5.0, 45.0) < cop(5.0, 45.0));
    }
}
