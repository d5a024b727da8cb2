pub mod stage1_progress;
pub mod stage2_aggregate;
pub mod stage3_index;
pub mod stage4_bands;
pub mod stage5_snapshot;
pub mod stage6_report;
