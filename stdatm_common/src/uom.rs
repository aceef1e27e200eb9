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

use uom::si::f64::{Length,Pressure,ThermodynamicTemperature,MassDensity,Velocity,DynamicViscosity,Acceleration};
use uom::si::length::kilometer;
use uom::si::pressure::{kilopascal,pound_force_per_square_inch};
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::velocity::meter_per_second;
use uom::si::dynamic_viscosity::pascal_second;
use uom::si::acceleration::meter_per_second_squared;
use serde::ser::Serializer;

#[inline] pub fn kilometers (len: f64)-> Length { Length::new::<kilometer>(len) }

#[inline] pub fn kilopascals (p: f64)-> Pressure { Pressure::new::<kilopascal>(p) }
#[inline] pub fn psi (p: f64)-> Pressure { Pressure::new::<pound_force_per_square_inch>(p) }

#[inline] pub fn kelvins (t: f64)-> ThermodynamicTemperature { ThermodynamicTemperature::new::<kelvin>(t) }

#[inline] pub fn kg_per_cubic_meter (rho: f64)-> MassDensity { MassDensity::new::<kilogram_per_cubic_meter>(rho) }
#[inline] pub fn meters_per_second (v: f64)-> Velocity { Velocity::new::<meter_per_second>(v) }
#[inline] pub fn pascal_seconds (mu: f64)-> DynamicViscosity { DynamicViscosity::new::<pascal_second>(mu) }
#[inline] pub fn meters_per_second_squared (a: f64)-> Acceleration { Acceleration::new::<meter_per_second_squared>(a) }

//--- serialization support

pub fn ser_length_as_kilometers<S: Serializer> (length: &Length, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( length.get::<kilometer>())
}

pub fn ser_pressure_as_kilopascals<S: Serializer> (p: &Pressure, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( p.get::<kilopascal>())
}

pub fn ser_temperature_as_kelvin<S: Serializer> (t: &ThermodynamicTemperature, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( t.get::<kelvin>())
}

pub fn ser_density_as_kg_per_cubic_meter<S: Serializer> (rho: &MassDensity, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( rho.get::<kilogram_per_cubic_meter>())
}

pub fn ser_velocity_as_meters_per_second<S: Serializer> (v: &Velocity, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( v.get::<meter_per_second>())
}

pub fn ser_viscosity_as_pascal_seconds<S: Serializer> (mu: &DynamicViscosity, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( mu.get::<pascal_second>())
}

pub fn ser_acceleration_as_meters_per_second_squared<S: Serializer> (a: &Acceleration, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_f64( a.get::<meter_per_second_squared>())
}
