// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod charts;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod synth;
pub mod types;

#[cfg(test)]
pub mod test_utils;
