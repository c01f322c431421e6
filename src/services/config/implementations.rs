// 設定管理の具象実装

use crate::core::StampConfig;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultStampConfig {
    max_concurrent: usize,
    buffer_size: usize,
    enable_progress: bool,
}

impl DefaultStampConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            max_concurrent: cpu_count.max(1) * 2,
            buffer_size: 100,
            enable_progress: true,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultStampConfig {
    fn default() -> Self {
        Self {
            max_concurrent: num_cpus::get().max(1) * 2,
            buffer_size: 100,
            enable_progress: true,
        }
    }
}

impl StampConfig for DefaultStampConfig {
    fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}
