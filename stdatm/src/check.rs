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

use tracing::warn;
use crate::errors::{Result, StdAtmError};

pub const MIN_ALTITUDE_KM: f64 = -5.0;
pub const MAX_ALTITUDE_KM: f64 = 86.0;
pub const MIN_LATITUDE_DEG: f64 = -90.0;
pub const MAX_LATITUDE_DEG: f64 = 90.0;

/// check if altitude (km) and latitude (deg) are within the range for which standard atmosphere
/// results are valid. Altitude is checked first
pub fn check (altitude: f64, latitude: f64) -> Result<()> {
    if !(MIN_ALTITUDE_KM..=MAX_ALTITUDE_KM).contains(&altitude) {
        warn!("altitude {}km outside of valid range", altitude);
        Err( StdAtmError::AltitudeOutOfRange(altitude))

    } else if !(MIN_LATITUDE_DEG..=MAX_LATITUDE_DEG).contains(&latitude) {
        warn!("latitude {}° outside of valid range", latitude);
        Err( StdAtmError::LatitudeOutOfRange(latitude))

    } else {
        Ok(())
    }
}
