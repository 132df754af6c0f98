//! Shared test harness modules for the Outlook CLI.

use super::*;

mod helpers;
mod score_unit;
