// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory model of composed charts and the resources they hold.

pub mod chart;
pub mod kustomization;
pub mod labels;
pub mod resource;

pub use chart::{App, Chart, ChartProps, ChartResource};
pub use kustomization::Kustomization;
pub use labels::Labels;
pub use resource::Resource;
