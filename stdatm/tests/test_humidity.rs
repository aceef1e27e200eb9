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

use stdatm::StdAtmError;
use stdatm::config::{PsychroConfig, load_config};
use stdatm::humidity::*;

fn assert_close (a: f64, b: f64, tol: f64) {
    assert!( (a - b).abs() <= tol, "{a} != {b} (tolerance {tol})");
}

#[test]
fn test_vapor_pressure() {
    assert_close( vapor_pressure( DEFAULT_MMR, STD_PRESSURE_PSI), 0.0235852, 1e-6);
    assert_eq!( vapor_pressure( 0.0, STD_PRESSURE_PSI), 0.0);
}

#[test]
fn test_saturation_pressure() {
    let solver = IdealHumidAir::default();

    assert_close( solver.saturation_pressure(293.15).unwrap(), 2338.8, 0.5);
    assert_close( solver.saturation_pressure(373.15).unwrap(), 101418.7, 1.0);

    // ice and water branches meet at the triple point
    let below = solver.saturation_pressure(273.16).unwrap();
    let above = solver.saturation_pressure(273.16 + 1e-9).unwrap();
    assert_close( below, 611.657, 1e-3);
    assert_close( below, above, 1e-3);

    assert!( solver.saturation_pressure(100.0).is_err());
}

#[test]
fn test_relative_humidity() {
    let rh = relative_humidity( 70.0, 50.0, STD_PRESSURE_PSI).unwrap();
    println!("rh(70°F, 50°F) = {rh}");
    assert_close( rh, 0.4903, 1e-3);

    assert_close( relative_humidity( 60.0, 60.0, STD_PRESSURE_PSI).unwrap(), 1.0, 1e-12);
    assert!( relative_humidity( 50.0, 70.0, STD_PRESSURE_PSI).is_err());
    assert!( relative_humidity( 70.0, 50.0, -1.0).is_err());
}

#[test]
fn test_humidity_ratio() {
    let w = humidity_ratio( 70.0, 50.0, STD_PRESSURE_PSI).unwrap();
    println!("w(70°F, 50°F) = {w}");
    assert_close( w, 0.00763, 1e-5);

    // lower total pressure means more vapor per dry air mass
    let w_low = humidity_ratio( 70.0, 50.0, 10.0).unwrap();
    assert!( w_low > w);
}

#[test]
fn test_dew_point_round_trip() {
    for (t, td) in [(70.0, 50.0), (90.0, 75.0), (40.0, 10.0), (32.0, -20.0)] {
        let w = humidity_ratio( t, td, STD_PRESSURE_PSI).unwrap();
        let td1 = dew_point( w, STD_PRESSURE_PSI).unwrap();
        println!("t={t}°F td={td}°F -> w={w:.6} -> td={td1:.6}°F");
        assert_close( td1, td, 1e-6);
    }
}

#[test]
fn test_dew_point_below_freezing() {
    let solver = IdealHumidAir::default();
    let p = 101325.0;
    let w = DEFAULT_MMR;

    let td = solver.dew_point( w, p).unwrap();
    let p_w = p * w / (0.621945 + w);
    println!("dew point for w={w}: {td}K");

    assert!( td < 273.15);
    assert_close( solver.saturation_pressure(td).unwrap(), p_w, p_w * 1e-9);
}

#[test]
fn test_dew_point_errors() {
    assert!( dew_point( 0.0, STD_PRESSURE_PSI).is_err());
    assert!( dew_point( DEFAULT_MMR, 0.0).is_err());

    let solver = IdealHumidAir::new( PsychroConfig { dew_point_tolerance: 1e-9, max_iterations: 0 });
    assert!( matches!( dew_point_with( &solver, DEFAULT_MMR, STD_PRESSURE_PSI), Err(StdAtmError::NoConvergence(0))));
}

#[test]
fn test_config() {
    let config = PsychroConfig::from_ron_str("PsychroConfig(max_iterations: 5)").unwrap();
    assert_eq!( config.max_iterations, 5);
    assert_eq!( config.dew_point_tolerance, PsychroConfig::default().dew_point_tolerance);

    let config: PsychroConfig = load_config("configs/psychro.ron").unwrap();
    assert_eq!( config, PsychroConfig::default());

    assert!( PsychroConfig::from_ron_str("PsychroConfig(max_iterations: \"many\")").is_err());
    assert!( load_config::<PsychroConfig>("configs/does_not_exist.ron").is_err());

    let solver = IdealHumidAir::new(config);
    assert_close( dew_point_with( &solver, DEFAULT_MMR, STD_PRESSURE_PSI).unwrap(),
                  dew_point( DEFAULT_MMR, STD_PRESSURE_PSI).unwrap(), 1e-6);
}

// run with "cargo test -p stdatm --test test_humidity test_traced_dew_point -- --nocapture" to see iterations
#[test]
fn test_traced_dew_point() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).try_init();

    let solver = IdealHumidAir::default();
    let td = solver.dew_point( 0.01, 101325.0)?;
    println!("dew point for w=0.01: {td}K");
    assert!( td > 280.0 && td < 290.0);

    Ok(())
}
