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

/// geophysical collaborators of the standard atmosphere: earth radius by latitude, geometric to
/// geopotential altitude conversion and local gravity.

use stdatm_common::{pow2, sqrt, sin2, cos, sin, rad};
use stdatm_common::constants::{REARTHEQ, REARTHPOL};

// International Gravity Formula 1967 coefficients
const IGF_G_EQ: f64 = 9.7803270;
const IGF_C1: f64 = 0.0053024;
const IGF_C2: f64 = 0.0000058;
const FREE_AIR_GRADIENT: f64 = 3.086e-6; // (m/s²)/m

/// geocentric earth radius (km) at the given geodetic latitude (degrees), computed from the
/// equatorial and polar radii of the WGS84 ellipsoid
pub fn radius_earth (latitude: f64) -> f64 {
    let lat = rad(latitude);
    let (sin_lat, cos_lat) = (sin(lat), cos(lat));

    let num = pow2(pow2(REARTHEQ) * cos_lat) + pow2(pow2(REARTHPOL) * sin_lat);
    let den = pow2(REARTHEQ * cos_lat) + pow2(REARTHPOL * sin_lat);

    sqrt(num / den)
}

/// convert geometric altitude (km) at latitude (deg) into geopotential altitude (km)
pub fn geopotential (altitude: f64, latitude: f64) -> f64 {
    let r = radius_earth(latitude);
    altitude * r / (altitude + r)
}

/// inverse of [`geopotential`], i.e. the geometric altitude (km) for a given geopotential altitude
pub fn geometric (geopotential_altitude: f64, latitude: f64) -> f64 {
    let r = radius_earth(latitude);
    geopotential_altitude * r / (r - geopotential_altitude)
}

/// local gravitational acceleration (m/s²) at altitude (km) and latitude (deg), based on the
/// IGF 1967 latitude term and the free-air correction
pub fn gravity_acceleration (altitude: f64, latitude: f64) -> f64 {
    let lat = rad(latitude);
    let g_lat = IGF_G_EQ * (1.0 + IGF_C1 * sin2(lat) - IGF_C2 * sin2(2.0 * lat));
    let g_alt = FREE_AIR_GRADIENT * altitude * 1000.0;

    g_lat - g_alt
}
