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

/// physical reference values and unit conversion factors that should be consistent throughout
/// stdatm computations. Lengths that enter the standard atmosphere are in kilometers.

/* #region conversion constants ***********************************************************/

/// mult feet to get meters
pub const FT2METERS: f64 = 0.3048;
/// mult Kelvin to get deg Rankine
pub const K2R: f64 = 1.8;
/// add degC to get Kelvin
pub const C2K: f64 = 273.15;
/// add degF to get degR
pub const F2R: f64 = 459.67;
/// mult lb/ft² to get N/m²
pub const PSF2NSM: f64 = 47.877874;
/// mult lb/in² to get N/m²
pub const PSI2NSM: f64 = 6894.4138;
/// mult psi to get kPa
pub const PSI2KPA: f64 = 6.89476;
/// mult slugs/ft³ to get kg/m³
pub const SCF2KCM: f64 = 515.379;
/// mult nautical miles to get km
pub const KM2NM: f64 = 1.852;
/// mult m/s to get kts
pub const MS2KTS: f64 = 900.0 / 463.0;
/// mult millibars to get inHg
pub const MB2INHG: f64 = 33.8639;
/// mult inHg to get psi
pub const INHG2PSI: f64 = 0.491154;
/// mult m to get astronomical units
pub const M2AU: f64 = 6.68459e-12;

// US customary
pub const GC: f64 = 32.174;               // mult slugs to get lbm
pub const NM2FT: f64 = 2315000.0 / 381.0; // mult nautical miles to get feet
pub const MI2NM: f64 = 57875.0 / 50292.0; // mult miles to get nautical miles
pub const FPS2KTS: f64 = 0.592484;        // mult fps to get kts

/* #endregion conversion constants */

/* #region physical constants *************************************************************/

/// sea level temperature (K)
pub const TZERO: f64 = 288.15;
/// sea level pressure (kPa)
pub const PZERO: f64 = 101.325;
/// sea level density (kg/m³)
pub const RHOZERO: f64 = 1.2250;
/// sea level speed of sound (m/s)
pub const AZERO: f64 = 340.294;

/// semi major axis in km
pub const REARTHEQ: f64 = 6378.1370;
/// semi minor axis in km
pub const REARTHPOL: f64 = 6356.7523;

/// g0*M0/R* in K/km
pub const GMR: f64 = 34.163195;
/// ratio of specific heats of air
pub const GAM: f64 = 1.4;
/// specific gas constant of air (J/kg-K)
pub const RAIR: f64 = 287.05;
/// Sutherland constant (kg/m-s-sqrt(K))
pub const SUTHC1: f64 = 1.458e-06;
/// Sutherland temperature (K)
pub const SUTHTEMP: f64 = 110.4;

/// molar mass of dry air (g/mol)
pub const MAIR: f64 = 28.9583;
/// molar mass of water (g/mol)
pub const MH2O: f64 = 18.015;

/// ratio of molar masses of water vapor and dry air as used in psychrometric humidity ratios
pub const EPSILON_H2O: f64 = 0.621945;

/// triple point of water (K)
pub const TRIPLE_POINT_H2O: f64 = 273.16;

/* #endregion physical constants */
