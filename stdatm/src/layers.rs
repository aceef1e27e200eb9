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

/// the piecewise layer model of the 1976 US / ICAO standard atmosphere up to 84.852km geopotential
/// altitude. Each layer has a base height, a linear temperature gradient and base values for
/// temperature and pressure ratio. Layers with a zero gradient are isothermal and use exponential
/// pressure decay, all others use the power law that follows from the hydrostatic equation.

use serde::Serialize;
use tracing::debug;

use stdatm_common::exp;
use stdatm_common::constants::GMR;
use crate::errors::{Result, invalid_layer_table};

pub const N_LAYERS: usize = 8;

/// layer index and height above layer base
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct Layer {
    pub index: usize,
    /// geopotential height above the layer base (km)
    pub delta_h: f64,
}

/// fixed layer table. Custom tables have to be created through [`LayerTable::new`], which checks
/// their consistency
#[derive(Debug,Clone,PartialEq)]
pub struct LayerTable<const N: usize = N_LAYERS> {
    /// geopotential base heights (km), strictly increasing
    base_heights: [f64;N],
    /// temperature gradients (K/km)
    lapse_rates: [f64;N],
    /// base temperatures (K)
    base_temperatures: [f64;N],
    /// base pressures as ratio to sea level pressure
    base_pressure_ratios: [f64;N],
}

pub const STANDARD_LAYERS: LayerTable = LayerTable {
    base_heights:         [0.0, 11.0, 20.0, 32.0, 47.0, 51.0, 71.0, 84.852],
    lapse_rates:          [-6.5, 0.0, 1.0, 2.8, 0.0, -2.8, -2.0, 0.0],
    base_temperatures:    [288.15, 216.65, 216.65, 228.65, 270.65, 270.65, 214.65, 186.946],
    base_pressure_ratios: [1.0, 2.2336110E-1, 5.4032950E-2, 8.5666784E-3, 1.0945601E-3, 6.6063531E-4, 3.9046834E-5, 3.68501E-6],
};

/// index of the last element in `sorted` that is <= `target`. Clamps to 0 if `target` is below
/// the first element (or `sorted` is empty) and to `sorted.len()-1` if it is above the last one
pub fn last_index_le (sorted: &[f64], target: f64) -> usize {
    let mut lo = 0;
    let mut hi = sorted.len();

    while hi > lo + 1 {
        let mid = (lo + hi) / 2;
        if target < sorted[mid] { hi = mid } else { lo = mid }
    }
    lo
}

impl <const N: usize> LayerTable<N> {

    /// create a custom layer table. Base heights have to be strictly increasing, the first pressure
    /// ratio has to be 1 and base temperatures have to be positive
    pub fn new (base_heights: [f64;N], lapse_rates: [f64;N], base_temperatures: [f64;N], base_pressure_ratios: [f64;N]) -> Result<Self> {
        if N == 0 {
            return Err( invalid_layer_table("no layers"))
        }
        if base_heights.windows(2).any(|w| !(w[0] < w[1])) {
            return Err( invalid_layer_table("base heights not strictly increasing"))
        }
        if base_pressure_ratios[0] != 1.0 {
            return Err( invalid_layer_table("sea level pressure ratio is not 1"))
        }
        if base_temperatures.iter().any(|t| !(*t > 0.0)) {
            return Err( invalid_layer_table("non-positive base temperature"))
        }

        Ok( LayerTable { base_heights, lapse_rates, base_temperatures, base_pressure_ratios } )
    }

    #[inline] pub fn len (&self) -> usize { N }

    #[inline] pub fn base_heights (&self) -> &[f64;N] { &self.base_heights }
    #[inline] pub fn lapse_rates (&self) -> &[f64;N] { &self.lapse_rates }
    #[inline] pub fn base_temperatures (&self) -> &[f64;N] { &self.base_temperatures }
    #[inline] pub fn base_pressure_ratios (&self) -> &[f64;N] { &self.base_pressure_ratios }

    /// reference (sea level) temperature of this table (K)
    #[inline] pub fn reference_temperature (&self) -> f64 { self.base_temperatures[0] }

    /// find the layer that contains geopotential altitude `h` (km). Values outside the table are
    /// extrapolated from the first and last layer respectively
    pub fn find_layer (&self, h: f64) -> Layer {
        let index = last_index_le( &self.base_heights, h);
        if h < self.base_heights[0] || h > self.base_heights[N-1] {
            debug!("extrapolating layer {} for geopotential altitude {}km", index, h);
        }
        Layer { index, delta_h: h - self.base_heights[index] }
    }

    /// local temperature (K) at geopotential altitude `h` (km)
    pub fn temperature_at (&self, h: f64) -> f64 {
        let layer = self.find_layer(h);
        self.layer_temperature( &layer)
    }

    #[inline]
    fn layer_temperature (&self, layer: &Layer) -> f64 {
        self.base_temperatures[layer.index] + self.lapse_rates[layer.index] * layer.delta_h
    }

    /// temperature ratio θ = T(h)/T0 at geopotential altitude `h` (km)
    pub fn temperature_ratio_at (&self, h: f64) -> f64 {
        self.temperature_at(h) / self.reference_temperature()
    }

    /// pressure ratio δ = P(h)/P0 at geopotential altitude `h` (km)
    pub fn pressure_ratio_at (&self, h: f64) -> f64 {
        let layer = self.find_layer(h);
        let i = layer.index;

        let tgrad = self.lapse_rates[i];
        let tbase = self.base_temperatures[i];
        let pbase = self.base_pressure_ratios[i];

        if tgrad == 0.0 { // isothermal layer - the table has exact zeros for those
            pbase * exp( -GMR * layer.delta_h / tbase)
        } else {
            let tlocal = self.layer_temperature( &layer);
            pbase * (tbase / tlocal).powf( GMR / tgrad)
        }
    }

    /// density ratio σ = δ/θ at geopotential altitude `h` (km)
    pub fn density_ratio_at (&self, h: f64) -> f64 {
        self.pressure_ratio_at(h) / self.temperature_ratio_at(h)
    }
}
