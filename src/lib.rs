//! Clinical Probe - prompt-chained assessment of multiple-choice clinical questions
//!
//! A question and its labelled options go through three model calls in
//! sequence: an initial answer, a battery of eight probing follow-ups, and a
//! final assessment built from the probe analyses.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
