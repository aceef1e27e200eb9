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

/// runtime configuration. The standard atmosphere layer table is fixed, only the numerical
/// parameters of the psychrometric solver can be configured (from RON files)

use std::{fs,path::Path};
use serde::{Serialize,Deserialize};
use tracing::debug;

use crate::errors::Result;

/// env var that can point to a RON file with the [`PsychroConfig`] for the process-wide default solver
pub const PSYCHRO_CONFIG_ENV: &str = "STDATM_PSYCHRO_CONFIG";

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct PsychroConfig {
    /// convergence threshold of the dew point iteration (K)
    pub dew_point_tolerance: f64,
    pub max_iterations: usize,
}

impl Default for PsychroConfig {
    fn default() -> Self {
        PsychroConfig { dew_point_tolerance: 1e-9, max_iterations: 50 }
    }
}

impl PsychroConfig {
    pub fn from_ron_str (s: &str) -> Result<Self> {
        Ok( ron::from_str(s)? )
    }
}

/// load a RON config file
pub fn load_config<C> (path: impl AsRef<Path>) -> Result<C> where C: for <'a> Deserialize<'a> {
    let path = path.as_ref();
    debug!("loading config {:?}", path);
    let data = fs::read(path)?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}
