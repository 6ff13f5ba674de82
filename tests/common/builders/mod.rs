pub mod vm_stats;
