//! Trip planner server.
//!
//! A web application that answers: "I have this many days and this much
//! money, what should the trip look like?" Plans are built from a static
//! catalog of cities, venues, hotels and transport.

pub mod catalog;
pub mod domain;
pub mod planner;
pub mod web;
