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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StdAtmError>;

#[derive(Error,Debug)]
pub enum StdAtmError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config RON error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("common error {0}")]
    CommonError( #[from] stdatm_common::CommonError),

    #[error("results are not valid unless -5km <= altitude <= 86km (got {0}km)")]
    AltitudeOutOfRange(f64),

    #[error("latitude has to be given in degrees between -90° and 90° (got {0}°)")]
    LatitudeOutOfRange(f64),

    #[error("invalid layer table {0}")]
    InvalidLayerTable(String),

    #[error("invalid psychrometric input {0}")]
    InvalidHumidityInput(String),

    #[error("dew point iteration did not converge after {0} steps")]
    NoConvergence(usize),
}

pub fn invalid_layer_table (msg: impl ToString)->StdAtmError {
    StdAtmError::InvalidLayerTable(msg.to_string())
}

pub fn invalid_humidity_input (msg: impl ToString)->StdAtmError {
    StdAtmError::InvalidHumidityInput(msg.to_string())
}
