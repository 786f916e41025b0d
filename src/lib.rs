// src/lib.rs

pub mod animation;
pub mod config;
pub mod controllers;
pub mod models;
pub mod views;
