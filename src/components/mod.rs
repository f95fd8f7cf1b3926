//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Components render state provided via context or props; route-scoped
//! orchestration stays in `pages`.

pub mod file_upload;
pub mod header;
pub mod metrics_panel;
pub mod protected;
pub mod supplier_card;
pub mod sustainability_score;
pub mod theme_toggle;
pub mod toast_host;
pub mod verification_badge;
