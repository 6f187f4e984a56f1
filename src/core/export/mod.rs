//! Export orchestration
//!
//! This module provides the core export logic for brandpack, including:
//! - Output layout and directory setup
//! - The conversion sweep with rasterizer fallback
//! - Summary and reporting
//! - A read-only inventory of existing outputs

pub mod coordinator;
pub mod inventory;
pub mod layout;
pub mod summary;

pub use coordinator::{ExportCoordinator, CLOSING_NOTICE, START_NOTICE};
pub use inventory::{take_inventory, OutputState, SourceInventory};
pub use layout::ExportLayout;
pub use summary::{AttemptFailure, ConversionOutcome, ConversionRecord, ExportSummary};
