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
#![allow(unused)]

use stdatm_common::CommonError;
use stdatm_common::temperature::*;

#[test]
fn test_conversion() {
    use TemperatureUnit::*;

    assert_eq!( convert_temperature( 0.0, Celsius, Kelvin).unwrap(), 273.15);
    assert_eq!( convert_temperature( 32.0, Fahrenheit, Celsius).unwrap(), 0.0);
    assert_eq!( convert_temperature( 100.0, Celsius, Fahrenheit).unwrap(), 212.0);
    assert_eq!( convert_temperature( 491.67, Rankine, Fahrenheit).unwrap(), 32.0);
    assert_eq!( convert_temperature( 288.15, Kelvin, Rankine).unwrap(), 518.67);
    assert_eq!( convert_temperature( -40.0, Celsius, Fahrenheit).unwrap(), -40.0);
    assert_eq!( convert_temperature( 0.0, Kelvin, Kelvin).unwrap(), 0.0);
}

#[test]
fn test_below_absolute_zero() {
    let e = convert_temperature( -300.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin).unwrap_err();
    println!("{e}");
    assert!( matches!( e, CommonError::BelowAbsoluteZero{..}));
    assert!( convert_temperature( -1.0, TemperatureUnit::Rankine, TemperatureUnit::Celsius).is_err());
}

#[test]
fn test_unit_names() {
    assert_eq!( convert_temperature_str( 25.0, "C", "f").unwrap(), 77.0);
    assert_eq!( convert_temperature_str( 273.15, "k", "c").unwrap(), 0.0);
    assert_eq!( "R".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Rankine);
    assert_eq!( TemperatureUnit::Fahrenheit.to_string(), "F");

    assert_eq!( convert_temperature_str( 1.0, "x", "k"), Err(CommonError::UnknownTemperatureUnit("x".to_string())));
    assert!( convert_temperature_str( 1.0, "k", "kelvin").is_err());
}

#[test]
fn test_large_values() {
    use TemperatureUnit::*;

    // rounding to 10 decimals must not overflow
    assert_eq!( convert_temperature( 1e300, Kelvin, Kelvin).unwrap(), 1e300);
    assert_eq!( convert_temperature( 1e20, Kelvin, Kelvin).unwrap(), 1e20);
    assert_eq!( stdatm_common::round_to( 1.23456789012345, 10), 1.2345678901);
    assert_eq!( stdatm_common::round_to( f64::MAX, 10), f64::MAX);
}
