//! Advent of Code 2023
//!
//! Every day registers itself through `AutoRegisterSolver`; nothing here
//! needs to be called. Days 13 and 14 are not solved.

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_06;
pub mod day_07;
pub mod day_08;
pub mod day_09;
pub mod day_10;
pub mod day_11;
pub mod day_12;
pub mod day_15;
pub mod day_16;
