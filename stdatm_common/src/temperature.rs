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

/// temperature scale conversion. All conversions go through Kelvin.

use std::str::FromStr;
use serde::{Serialize,Deserialize};
use strum::{Display,EnumString};

use crate::{round_to, Result, CommonError, unknown_temperature_unit};
use crate::constants::{C2K,K2R};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,EnumString,Display)]
#[strum(ascii_case_insensitive)]
pub enum TemperatureUnit {
    #[strum(serialize = "c", to_string = "C")] Celsius,
    #[strum(serialize = "k", to_string = "K")] Kelvin,
    #[strum(serialize = "f", to_string = "F")] Fahrenheit,
    #[strum(serialize = "r", to_string = "R")] Rankine,
}

impl TemperatureUnit {
    pub fn to_kelvin (&self, t: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius    => t + C2K,
            TemperatureUnit::Fahrenheit => (t - 32.0) / K2R + C2K,
            TemperatureUnit::Rankine    => t / K2R,
            TemperatureUnit::Kelvin     => t,
        }
    }

    pub fn from_kelvin (&self, t_k: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius    => t_k - C2K,
            TemperatureUnit::Fahrenheit => (t_k - C2K) * K2R + 32.0,
            TemperatureUnit::Rankine    => t_k * K2R,
            TemperatureUnit::Kelvin     => t_k,
        }
    }
}

/// convert `value` given in `units` into `desired_units`, rounded to 10 decimals.
/// Fails if `value` is below absolute zero.
pub fn convert_temperature (value: f64, units: TemperatureUnit, desired_units: TemperatureUnit) -> Result<f64> {
    let t_k = units.to_kelvin(value);
    if t_k < 0.0 {
        return Err( CommonError::BelowAbsoluteZero { value, unit: units.to_string() })
    }

    Ok( round_to( desired_units.from_kelvin(t_k), 10) )
}

/// same as [`convert_temperature`] but with unit names ("c", "k", "f", "r", case insensitive)
pub fn convert_temperature_str (value: f64, units: &str, desired_units: &str) -> Result<f64> {
    let from = TemperatureUnit::from_str(units).map_err(|_| unknown_temperature_unit(units))?;
    let to = TemperatureUnit::from_str(desired_units).map_err(|_| unknown_temperature_unit(desired_units))?;
    convert_temperature( value, from, to)
}

#[inline] pub fn fahrenheit_to_kelvin (t_f: f64) -> f64 { TemperatureUnit::Fahrenheit.to_kelvin(t_f) }
#[inline] pub fn kelvin_to_fahrenheit (t_k: f64) -> f64 { TemperatureUnit::Fahrenheit.from_kelvin(t_k) }
