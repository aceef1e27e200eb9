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

pub mod constants;
pub mod angle;
pub mod temperature;
pub mod uom;

mod errors;
pub use errors::*;

// syntactic sugar - this is just more readable in formula-heavy code
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn sin2(x:f64) -> f64 { let sin_x = x.sin(); sin_x*sin_x }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn sqrt(x:f64) -> f64 { x.sqrt() }
#[inline(always)] pub fn pow2(x:f64) -> f64 { x*x }
#[inline(always)] pub fn exp(x:f64) -> f64 { x.exp() }
#[inline(always)] pub fn ln(x:f64) -> f64 { x.ln() }
#[inline(always)] pub fn rad(x:f64)->f64 { x.to_radians() }

/// round to a fixed number of decimal places. Values that already carry no fractional digits at
/// that scale (or would overflow when scaled) are returned unchanged
#[inline]
pub fn round_to (x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = x * scale;
    if !scaled.is_finite() || scaled.abs() >= 4503599627370496.0 { // 2^52
        x
    } else {
        scaled.round() / scale
    }
}

