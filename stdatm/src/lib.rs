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

//! standard atmosphere reference calculator.
//!
//! Temperature, pressure and density ratios of the ICAO / 1976 US standard atmosphere as functions
//! of geometric altitude (km) and latitude (deg), together with the geophysical quantities they depend
//! on (earth radius, geopotential altitude, gravity) and psychrometric functions for humid air.

pub mod layers;
pub mod geophys;
pub mod check;
pub mod atmos;
pub mod humidity;
pub mod config;

mod errors;
pub use errors::*;

pub use layers::{Layer, LayerTable, STANDARD_LAYERS, last_index_le};
pub use atmos::{AltitudeQuery, AtmosphereState, temperature_ratio, pressure_ratio, density_ratio};
pub use geophys::{radius_earth, geopotential, gravity_acceleration};
pub use check::check;
