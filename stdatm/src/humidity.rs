/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

/// psychrometric functions for humid air.
///
/// Property evaluation goes through the [`HumidAirSolver`] trait, which works in SI units (K, Pa,
/// kg water per kg dry air). The free functions of this module use the engineering units of the
/// measurement side (pressure in psi, temperatures in °F) and the process-wide default solver.

use std::env;
use lazy_static::lazy_static;
use tracing::{trace,warn};
use uom::si::pressure::pascal;

use stdatm_common::{exp, ln, pow2};
use stdatm_common::constants::{MAIR, MH2O, EPSILON_H2O, TRIPLE_POINT_H2O};
use stdatm_common::temperature::{fahrenheit_to_kelvin, kelvin_to_fahrenheit};
use stdatm_common::uom::psi;

use crate::config::{PsychroConfig, load_config, PSYCHRO_CONFIG_ENV};
use crate::errors::{Result, StdAtmError, invalid_humidity_input};

/// default mass mixing ratio (kg/kg)
pub const DEFAULT_MMR: f64 = 1e-3;
/// standard sea level pressure (psi)
pub const STD_PRESSURE_PSI: f64 = 14.696;

/// validity range of the saturation pressure formulation (K)
pub const MIN_TEMPERATURE_K: f64 = 173.15;
pub const MAX_TEMPERATURE_K: f64 = 473.15;

/// the interface of humid air property solvers. All temperatures are in K, pressures in Pa and
/// humidity ratios in kg water vapor per kg dry air
pub trait HumidAirSolver {
    /// saturation vapor pressure at temperature `t`
    fn saturation_pressure (&self, t: f64) -> Result<f64>;

    /// dew point temperature for given humidity ratio `w` and total pressure `p`
    fn dew_point (&self, w: f64, p: f64) -> Result<f64>;

    /// relative humidity (0..1) at dry bulb temperature `t` and dew point `t_dew`
    fn relative_humidity (&self, t: f64, t_dew: f64, p: f64) -> Result<f64> {
        check_pressure(p)?;
        if t_dew > t {
            return Err( invalid_humidity_input( format!("dew point {t_dew}K above dry bulb temperature {t}K")))
        }
        Ok( self.saturation_pressure(t_dew)? / self.saturation_pressure(t)? )
    }

    /// humidity ratio at dry bulb temperature `t` and dew point `t_dew`
    fn humidity_ratio (&self, t: f64, t_dew: f64, p: f64) -> Result<f64> {
        check_pressure(p)?;
        if t_dew > t {
            return Err( invalid_humidity_input( format!("dew point {t_dew}K above dry bulb temperature {t}K")))
        }
        let p_w = self.saturation_pressure(t_dew)?;
        if p_w >= p {
            return Err( invalid_humidity_input( format!("vapor pressure {p_w}Pa exceeds total pressure {p}Pa")))
        }
        Ok( EPSILON_H2O * p_w / (p - p_w) )
    }
}

fn check_pressure (p: f64) -> Result<()> {
    if p > 0.0 { Ok(()) } else { Err( invalid_humidity_input( format!("non-positive pressure {p}"))) }
}

fn check_temperature (t: f64) -> Result<()> {
    if (MIN_TEMPERATURE_K..=MAX_TEMPERATURE_K).contains(&t) {
        Ok(())
    } else {
        Err( invalid_humidity_input( format!("temperature {t}K outside [{MIN_TEMPERATURE_K}..{MAX_TEMPERATURE_K}]")))
    }
}

/* #region IdealHumidAir ******************************************************************/

// Hyland-Wexler coefficients over ice
const C1: f64 = -5.6745359E+03;
const C2: f64 = 6.3925247E+00;
const C3: f64 = -9.6778430E-03;
const C4: f64 = 6.2215701E-07;
const C5: f64 = 2.0747825E-09;
const C6: f64 = -9.4840240E-13;
const C7: f64 = 4.1635019E+00;

// Hyland-Wexler coefficients over liquid water
const C8: f64 = -5.8002206E+03;
const C9: f64 = 1.3914993E+00;
const C10: f64 = -4.8640239E-02;
const C11: f64 = 4.1764768E-05;
const C12: f64 = -1.4452093E-08;
const C13: f64 = 6.5459673E+00;

/// humid air as an ideal mixture of dry air and water vapor, with Hyland-Wexler saturation
/// pressures over ice (below the triple point) and liquid water
#[derive(Debug,Clone,Default)]
pub struct IdealHumidAir {
    config: PsychroConfig,
}

impl IdealHumidAir {
    pub fn new (config: PsychroConfig) -> Self {
        IdealHumidAir { config }
    }

    pub fn config (&self) -> &PsychroConfig { &self.config }

    /// ln of saturation pressure (Pa) and its derivative with respect to `t`
    fn ln_saturation_pressure (t: f64) -> (f64,f64) {
        let ln_t = ln(t);
        if t <= TRIPLE_POINT_H2O {
            let v = C1/t + C2 + t*(C3 + t*(C4 + t*(C5 + t*C6))) + C7*ln_t;
            let d = -C1/pow2(t) + C3 + t*(2.0*C4 + t*(3.0*C5 + t*4.0*C6)) + C7/t;
            (v,d)
        } else {
            let v = C8/t + C9 + t*(C10 + t*(C11 + t*C12)) + C13*ln_t;
            let d = -C8/pow2(t) + C10 + t*(2.0*C11 + t*3.0*C12) + C13/t;
            (v,d)
        }
    }

    /// dew point (K) for a given vapor partial pressure (Pa)
    pub fn dew_point_from_vapor_pressure (&self, p_w: f64) -> Result<f64> {
        let (ln_min,_) = Self::ln_saturation_pressure( MIN_TEMPERATURE_K);
        let (ln_max,_) = Self::ln_saturation_pressure( MAX_TEMPERATURE_K);

        if !(p_w > 0.0) {
            return Err( invalid_humidity_input( format!("non-positive vapor pressure {p_w}")))
        }
        let target = ln(p_w);
        if target < ln_min || target > ln_max {
            return Err( invalid_humidity_input( format!("vapor pressure {p_w}Pa outside of saturation pressure range")))
        }

        // safeguarded Newton iteration: ln p_ws(t) is increasing so we can maintain a bracket
        let mut lo = MIN_TEMPERATURE_K;
        let mut hi = MAX_TEMPERATURE_K;
        let mut t = magnus_dew_point(p_w).clamp(lo, hi);

        for i in 0..self.config.max_iterations {
            let (v,d) = Self::ln_saturation_pressure(t);
            let f = v - target;
            if f == 0.0 { return Ok(t) }
            if f > 0.0 { hi = t } else { lo = t }
            if hi - lo < self.config.dew_point_tolerance { // bracket collapsed
                return Ok( 0.5 * (lo + hi))
            }

            let mut t_next = t - f/d;
            if !(t_next > lo && t_next < hi) {
                t_next = 0.5 * (lo + hi)
            }
            trace!("dew point iteration {}: {} -> {}", i, t, t_next);

            if (t_next - t).abs() < self.config.dew_point_tolerance {
                return Ok(t_next)
            }
            t = t_next;
        }

        warn!("dew point iteration for vapor pressure {}Pa did not converge", p_w);
        Err( StdAtmError::NoConvergence(self.config.max_iterations))
    }
}

/// closed form dew point approximation (K) used as the start value of the iteration
fn magnus_dew_point (p_w: f64) -> f64 {
    let g = ln(p_w / 611.2);
    243.12 * g / (17.62 - g) + 273.15
}

impl HumidAirSolver for IdealHumidAir {
    fn saturation_pressure (&self, t: f64) -> Result<f64> {
        check_temperature(t)?;
        Ok( exp( Self::ln_saturation_pressure(t).0) )
    }

    fn dew_point (&self, w: f64, p: f64) -> Result<f64> {
        check_pressure(p)?;
        if !(w > 0.0) {
            return Err( invalid_humidity_input( format!("non-positive humidity ratio {w}")))
        }
        let p_w = p * w / (EPSILON_H2O + w);
        self.dew_point_from_vapor_pressure(p_w)
    }
}

/* #endregion IdealHumidAir */

lazy_static! {
    /// the default solver, configured from the RON file pointed to by $STDATM_PSYCHRO_CONFIG (if set)
    static ref DEFAULT_SOLVER: IdealHumidAir = IdealHumidAir::new( default_psychro_config());
}

fn default_psychro_config () -> PsychroConfig {
    match env::var(PSYCHRO_CONFIG_ENV) {
        Ok(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load psychrometric config {}: {}, using defaults", path, e);
                PsychroConfig::default()
            }
        }
        Err(_) => PsychroConfig::default()
    }
}

pub fn default_solver () -> &'static IdealHumidAir { &DEFAULT_SOLVER }

#[inline] fn psi_to_pa (p: f64) -> f64 { psi(p).get::<pascal>() }

/* #region engineering unit functions ******************************************************/

/// partial pressure of water vapor (in the units of `p`, normally psi) for a given mass mixing ratio
pub fn vapor_pressure (mmr: f64, p: f64) -> f64 {
    p * mmr / (MH2O / MAIR + mmr)
}

/// dew point (°F) for mass mixing ratio `mmr` at pressure `p` (psi)
pub fn dew_point (mmr: f64, p: f64) -> Result<f64> {
    dew_point_with( default_solver(), mmr, p)
}

pub fn dew_point_with (solver: &impl HumidAirSolver, mmr: f64, p: f64) -> Result<f64> {
    let t_d = solver.dew_point( mmr, psi_to_pa(p))?;
    Ok( kelvin_to_fahrenheit(t_d) )
}

/// relative humidity (0..1) for temperature `t` (°F), dew point `t_d` (°F) and pressure `p` (psi)
pub fn relative_humidity (t: f64, t_d: f64, p: f64) -> Result<f64> {
    relative_humidity_with( default_solver(), t, t_d, p)
}

pub fn relative_humidity_with (solver: &impl HumidAirSolver, t: f64, t_d: f64, p: f64) -> Result<f64> {
    solver.relative_humidity( fahrenheit_to_kelvin(t), fahrenheit_to_kelvin(t_d), psi_to_pa(p))
}

/// humidity ratio aka mass mixing ratio (kg/kg) for temperature `t` (°F), dew point `t_d` (°F)
/// and pressure `p` (psi)
pub fn humidity_ratio (t: f64, t_d: f64, p: f64) -> Result<f64> {
    humidity_ratio_with( default_solver(), t, t_d, p)
}

pub fn humidity_ratio_with (solver: &impl HumidAirSolver, t: f64, t_d: f64, p: f64) -> Result<f64> {
    solver.humidity_ratio( fahrenheit_to_kelvin(t), fahrenheit_to_kelvin(t_d), psi_to_pa(p))
}

/* #endregion engineering unit functions */
