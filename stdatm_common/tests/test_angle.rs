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
#![allow(unused)]

use stdatm_common::angle::*;

// run with "cargo test -p stdatm_common --test test_angle -- --nocapture"

#[test]
fn test_trig_to_compass() {
    assert_eq!( trig_to_compass( 0.0, false), 90.0);
    assert_eq!( trig_to_compass( 90.0, false), 0.0);
    assert_eq!( trig_to_compass( 180.0, false), 270.0);
    assert_eq!( trig_to_compass( 270.0, false), 180.0);
    assert_eq!( trig_to_compass( 360.0, false), 90.0);

    // out of range inputs are reduced first
    assert_eq!( trig_to_compass( -90.0, false), 180.0);
    assert_eq!( trig_to_compass( 450.0, false), 0.0);
}

#[test]
fn test_wind_direction() {
    // a wind vector pointing east (trig 0) blows from the west
    assert_eq!( trig_to_compass( 0.0, true), 270.0);
    assert_eq!( trig_to_compass( 90.0, true), 180.0);
    assert_eq!( trig_to_compass( 270.0, true), 360.0);
    assert_eq!( trig_to_compass( 300.0, true), 330.0);

    assert_eq!( compass_to_trig( 270.0, true), 360.0);
    assert_eq!( compass_to_trig( 180.0, true), 90.0);
}

#[test]
fn test_compass_to_trig() {
    assert_eq!( compass_to_trig( 0.0, false), 90.0);
    assert_eq!( compass_to_trig( 90.0, false), 0.0);
    assert_eq!( compass_to_trig( 135.0, false), 315.0);
    assert_eq!( compass_to_trig( -45.0, false), 135.0);

    for d in [10.0, 45.0, 120.0, 200.0, 359.0] {
        assert_eq!( compass_to_trig( trig_to_compass( d, false), false), d);
    }
}

#[test]
fn test_reciprocal() {
    assert_eq!( reciprocal( 0.0), 180.0);
    assert_eq!( reciprocal( 90.0), 270.0);
    assert_eq!( reciprocal( 180.0), 360.0);
    assert_eq!( reciprocal( 270.0), 90.0);
    assert_eq!( reciprocal( 360.0), 180.0);
    assert_eq!( reciprocal( -90.0), 90.0);
    assert_eq!( reciprocal( 540.0), 360.0);
}

#[test]
fn test_normalized_angles() {
    let a = Angle360::from_degrees( -90.0);
    println!("display a = {}", a);
    println!("debug a = {:?}", a);
    assert_eq!( a.degrees(), 270.0);
    assert_eq!( a.reciprocal().degrees(), 90.0);
    assert_eq!( Angle360::from_degrees(0.0).trig_to_compass(false).degrees(), 90.0);
    assert_eq!( Angle360::from_degrees(90.0).compass_to_trig(false).degrees(), 0.0);

    assert_eq!( Angle360::from_degrees( 360.0).degrees(), 0.0);
    assert_eq!( Angle360::from_degrees( 725.0).degrees(), 5.0);
    assert_eq!( format!("{:?}", Angle360::from_degrees( 450.0)), "Angle360(90)");

    let a: Angle360 = serde_json::from_str("45").unwrap();
    assert_eq!( a.degrees(), 45.0);
    assert!( serde_json::from_str::<Angle360>("400.0").is_err());
    assert!( serde_json::from_str::<Angle360>("-1.0").is_err());
    assert_eq!( serde_json::to_string(&a).unwrap(), "45.0");
}
