//! HTTP request handlers

pub mod contact;
