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

/// standard atmosphere properties as functions of geometric altitude (km) and latitude (deg).
///
/// The free functions use the [`STANDARD_LAYERS`] table. Inputs are converted into geopotential
/// altitude before the layer lookup. Results are correct up to 86km and only approximate above.
/// None of these functions validate their inputs, use [`crate::check::check`] or
/// [`AltitudeQuery::validated`] for that.

use serde::{Serialize,Deserialize};
use uom::si::f64::{Length,Pressure,ThermodynamicTemperature,MassDensity,Velocity,DynamicViscosity,Acceleration};

use stdatm_common::sqrt;
use stdatm_common::constants::{TZERO,PZERO,RHOZERO,AZERO,SUTHC1,SUTHTEMP};
use stdatm_common::uom::{
    kilometers, kelvins, kilopascals, kg_per_cubic_meter, meters_per_second, pascal_seconds, meters_per_second_squared,
    ser_length_as_kilometers, ser_temperature_as_kelvin, ser_pressure_as_kilopascals, ser_density_as_kg_per_cubic_meter,
    ser_velocity_as_meters_per_second, ser_viscosity_as_pascal_seconds, ser_acceleration_as_meters_per_second_squared
};

use crate::check::check;
use crate::errors::Result;
use crate::geophys::{geopotential, gravity_acceleration};
use crate::layers::{Layer, STANDARD_LAYERS};

pub const DEFAULT_ALTITUDE_KM: f64 = 0.0;
pub const DEFAULT_LATITUDE_DEG: f64 = 45.0;

/// ratio of temperature to sea level temperature
pub fn temperature_ratio (altitude: f64, latitude: f64) -> f64 {
    STANDARD_LAYERS.temperature_ratio_at( geopotential(altitude, latitude))
}

/// ratio of pressure to sea level pressure
pub fn pressure_ratio (altitude: f64, latitude: f64) -> f64 {
    STANDARD_LAYERS.pressure_ratio_at( geopotential(altitude, latitude))
}

/// ratio of density to sea level density
pub fn density_ratio (altitude: f64, latitude: f64) -> f64 {
    pressure_ratio(altitude, latitude) / temperature_ratio(altitude, latitude)
}

/// temperature (K)
pub fn temperature (altitude: f64, latitude: f64) -> f64 {
    temperature_ratio(altitude, latitude) * TZERO
}

/// pressure (kPa)
pub fn pressure (altitude: f64, latitude: f64) -> f64 {
    pressure_ratio(altitude, latitude) * PZERO
}

/// density (kg/m³)
pub fn density (altitude: f64, latitude: f64) -> f64 {
    density_ratio(altitude, latitude) * RHOZERO
}

/// speed of sound (m/s)
pub fn speed_of_sound (altitude: f64, latitude: f64) -> f64 {
    AZERO * sqrt( temperature_ratio(altitude, latitude))
}

/// dynamic viscosity (kg/m-s) from Sutherland's law
pub fn dynamic_viscosity (altitude: f64, latitude: f64) -> f64 {
    sutherland_viscosity( temperature(altitude, latitude))
}

#[inline]
pub fn sutherland_viscosity (t: f64) -> f64 {
    SUTHC1 * t * sqrt(t) / (t + SUTHTEMP)
}

/* #region AltitudeQuery ******************************************************************/

/// a geometric altitude (km) / latitude (deg) pair. Defaults to sea level at 45°
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct AltitudeQuery {
    #[serde(alias="altitude")]
    pub geometric_altitude_km: f64,
    #[serde(alias="latitude")]
    pub latitude_deg: f64,
}

impl Default for AltitudeQuery {
    fn default() -> Self {
        AltitudeQuery { geometric_altitude_km: DEFAULT_ALTITUDE_KM, latitude_deg: DEFAULT_LATITUDE_DEG }
    }
}

impl AltitudeQuery {
    pub fn new (geometric_altitude_km: f64, latitude_deg: f64) -> Self {
        AltitudeQuery { geometric_altitude_km, latitude_deg }
    }

    /// query at the default latitude
    pub fn at_altitude (geometric_altitude_km: f64) -> Self {
        AltitudeQuery { geometric_altitude_km, ..Default::default() }
    }

    /// create a query only if altitude and latitude are within the valid range
    pub fn validated (geometric_altitude_km: f64, latitude_deg: f64) -> Result<Self> {
        check( geometric_altitude_km, latitude_deg)?;
        Ok( Self::new( geometric_altitude_km, latitude_deg))
    }

    pub fn check (&self) -> Result<()> {
        check( self.geometric_altitude_km, self.latitude_deg)
    }

    pub fn geopotential_altitude_km (&self) -> f64 {
        geopotential( self.geometric_altitude_km, self.latitude_deg)
    }

    pub fn layer (&self) -> Layer {
        STANDARD_LAYERS.find_layer( self.geopotential_altitude_km())
    }

    pub fn temperature_ratio (&self) -> f64 { temperature_ratio( self.geometric_altitude_km, self.latitude_deg) }
    pub fn pressure_ratio (&self) -> f64 { pressure_ratio( self.geometric_altitude_km, self.latitude_deg) }
    pub fn density_ratio (&self) -> f64 { density_ratio( self.geometric_altitude_km, self.latitude_deg) }

    pub fn temperature (&self) -> ThermodynamicTemperature { kelvins( temperature( self.geometric_altitude_km, self.latitude_deg)) }
    pub fn pressure (&self) -> Pressure { kilopascals( pressure( self.geometric_altitude_km, self.latitude_deg)) }
    pub fn density (&self) -> MassDensity { kg_per_cubic_meter( density( self.geometric_altitude_km, self.latitude_deg)) }
    pub fn speed_of_sound (&self) -> Velocity { meters_per_second( speed_of_sound( self.geometric_altitude_km, self.latitude_deg)) }
    pub fn dynamic_viscosity (&self) -> DynamicViscosity { pascal_seconds( dynamic_viscosity( self.geometric_altitude_km, self.latitude_deg)) }
    pub fn gravity (&self) -> Acceleration { meters_per_second_squared( gravity_acceleration( self.geometric_altitude_km, self.latitude_deg)) }

    /// compute all properties at once
    pub fn state (&self) -> AtmosphereState {
        let theta = self.temperature_ratio();
        let delta = self.pressure_ratio();
        let sigma = delta / theta;
        let t = theta * TZERO;

        AtmosphereState {
            query: *self,
            geopotential_altitude: kilometers( self.geopotential_altitude_km()),
            temperature_ratio: theta,
            pressure_ratio: delta,
            density_ratio: sigma,
            temperature: kelvins(t),
            pressure: kilopascals( delta * PZERO),
            density: kg_per_cubic_meter( sigma * RHOZERO),
            speed_of_sound: meters_per_second( AZERO * sqrt(theta)),
            dynamic_viscosity: pascal_seconds( sutherland_viscosity(t)),
            gravity: self.gravity(),
        }
    }
}

/* #endregion AltitudeQuery */

/// snapshot of all standard atmosphere properties for a given [`AltitudeQuery`]
#[derive(Debug,Clone,Serialize)]
pub struct AtmosphereState {
    pub query: AltitudeQuery,

    #[serde(serialize_with="ser_length_as_kilometers")]
    pub geopotential_altitude: Length,

    pub temperature_ratio: f64,
    pub pressure_ratio: f64,
    pub density_ratio: f64,

    #[serde(serialize_with="ser_temperature_as_kelvin")]
    pub temperature: ThermodynamicTemperature,

    #[serde(serialize_with="ser_pressure_as_kilopascals")]
    pub pressure: Pressure,

    #[serde(serialize_with="ser_density_as_kg_per_cubic_meter")]
    pub density: MassDensity,

    #[serde(serialize_with="ser_velocity_as_meters_per_second")]
    pub speed_of_sound: Velocity,

    #[serde(serialize_with="ser_viscosity_as_pascal_seconds")]
    pub dynamic_viscosity: DynamicViscosity,

    #[serde(serialize_with="ser_acceleration_as_meters_per_second_squared")]
    pub gravity: Acceleration,
}
