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

/// angle normalization and bearing conversions.
///
/// Trigonometric angles are measured counter-clockwise from east (x-axis), compass angles clockwise
/// from north. Wind directions are reported as the direction the wind is blowing *from*, which
/// reverses the mapping (see [`trig_to_compass`]).

use std::{fmt,cmp};

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// reduce values outside of [0..360] into it. Note that 360 itself is left as is
#[inline]
fn reduce_closed_360 (d: f64) -> f64 {
    if d > 360.0 || d < 0.0 { d.rem_euclid(360.0) } else { d }
}

/// convert trigonometric degrees into compass degrees.
/// If `calculating_wind` is set the result is the meteorological (blowing-from) direction of a wind
/// vector with the given trigonometric angle.
pub fn trig_to_compass (trig_degrees: f64, calculating_wind: bool) -> f64 {
    flip_bearing( reduce_closed_360(trig_degrees), calculating_wind)
}

/// convert compass degrees into trigonometric degrees (inverse of [`trig_to_compass`])
pub fn compass_to_trig (comp_degrees: f64, calculating_wind: bool) -> f64 {
    flip_bearing( reduce_closed_360(comp_degrees), calculating_wind)
}

// the mapping is its own inverse so both directions share it
fn flip_bearing (d: f64, calculating_wind: bool) -> f64 {
    if calculating_wind {
        let r = 270.0 - d;
        if r <= 0.0 { r + 360.0 }
        else if r > 360.0 { r - 360.0 }
        else { r }

    } else {
        if (0.0..=90.0).contains(&d) { 90.0 - d }
        else if d > 90.0 && d <= 360.0 { 450.0 - d }
        else { d } // NaN
    }
}

/// opposite direction in degrees. Results are in (0..360], i.e. the reciprocal of 180 is 360
pub fn reciprocal (degrees: f64) -> f64 {
    let d = if degrees < 0.0 || degrees >= 360.0 { degrees.rem_euclid(360.0) } else { degrees };

    if (0.0..=180.0).contains(&d) { d + 180.0 }
    else if d > 180.0 && d < 360.0 { d - 180.0 }
    else { d }
}

/* #region Angle360 ***********************************************************************/

/// a direction in degrees, normalized to [0..360)
#[derive(Copy,Clone,PartialEq)]
pub struct Angle360(f64);

impl Angle360 {
    #[inline]
    pub fn from_degrees (deg: f64) -> Self { Angle360( normalize_360(deg)) }

    #[inline] pub fn degrees (&self) -> f64 { self.0 }
    #[inline] pub fn radians (&self) -> f64 { self.0.to_radians() }

    /// interpret this as a trigonometric angle and return the compass bearing
    pub fn trig_to_compass (&self, calculating_wind: bool) -> Angle360 {
        Angle360::from_degrees( trig_to_compass( self.0, calculating_wind))
    }

    /// interpret this as a compass bearing and return the trigonometric angle
    pub fn compass_to_trig (&self, calculating_wind: bool) -> Angle360 {
        Angle360::from_degrees( compass_to_trig( self.0, calculating_wind))
    }

    pub fn reciprocal (&self) -> Angle360 {
        Angle360::from_degrees( reciprocal( self.0))
    }
}

impl From<Angle360> for f64 {
    fn from(a: Angle360) -> Self { a.0 }
}

impl fmt::Display for Angle360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}deg", self.0) }
}

impl fmt::Debug for Angle360 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Angle360({})", self.0) }
}

impl cmp::PartialOrd for Angle360 {
    fn partial_cmp(&self,other:&Self) -> Option<cmp::Ordering> { self.0.partial_cmp(&other.0) }
}

/* #endregion Angle360 */

/* #region serde support ******************************************************************/

use serde::ser::{Serialize, Serializer};
use serde::de::{self, Deserialize, Deserializer, Visitor};

impl<'de> Deserialize<'de> for Angle360 {
    fn deserialize<D>(deserializer: D) -> Result<Angle360, D::Error> where D: Deserializer<'de> {
        struct AngleVisitor;

        impl<'de> Visitor<'de> for AngleVisitor {
            type Value = Angle360;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("expecting floating point degrees between [0..360]")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> where E: de::Error {
                if (0.0..=360.0).contains(&value) {
                    Ok(Angle360::from_degrees(value))
                } else {
                    Err(E::custom(format!("degrees out of range: {}", value)))
                }
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> where E: de::Error {
                self.visit_f64( value as f64)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> where E: de::Error {
                self.visit_f64( value as f64)
            }
        }

        deserializer.deserialize_f64( AngleVisitor)
    }
}

impl Serialize for Angle360 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64(self.0)
    }
}

/* #endregion serde support */
