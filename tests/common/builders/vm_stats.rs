use darwin_memwatch::{error::Result, memory::PageCounts, traits::VmStatsSource, Error};

/// Fixed kernel counters returned by [`TestVmStats`]
#[derive(Debug, Clone)]
pub struct TestVmStats {
    page_size: u64,
    pages: PageCounts,
    physical_memory: u64,
    failing: bool,
}

impl VmStatsSource for TestVmStats {
    fn page_size(&self) -> Result<u64> {
        Ok(self.page_size)
    }

    fn page_counts(&self) -> Result<PageCounts> {
        if self.failing {
            return Err(Error::System("host_statistics64 returned 5".to_string()));
        }
        Ok(self.pages)
    }

    fn physical_memory(&self) -> Result<u64> {
        Ok(self.physical_memory)
    }
}

pub struct TestVmStatsBuilder {
    page_size: u64,
    pages: PageCounts,
    physical_memory: u64,
    failing: bool,
}

impl TestVmStatsBuilder {
    pub fn new() -> Self {
        Self {
            page_size: 16384,
            pages: PageCounts::default(),
            physical_memory: 16 * 1024 * 1024 * 1024,
            failing: false,
        }
    }

    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn physical_memory(mut self, bytes: u64) -> Self {
        self.physical_memory = bytes;
        self
    }

    pub fn free(mut self, pages: u64) -> Self {
        self.pages.free = pages;
        self
    }

    pub fn active(mut self, pages: u64) -> Self {
        self.pages.active = pages;
        self
    }

    pub fn inactive(mut self, pages: u64) -> Self {
        self.pages.inactive = pages;
        self
    }

    pub fn wired(mut self, pages: u64) -> Self {
        self.pages.wired = pages;
        self
    }

    pub fn compressed(mut self, pages: u64) -> Self {
        self.pages.compressed = pages;
        self
    }

    pub fn external(mut self, pages: u64) -> Self {
        self.pages.external = pages;
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn build(self) -> TestVmStats {
        TestVmStats {
            page_size: self.page_size,
            pages: self.pages,
            physical_memory: self.physical_memory,
            failing: self.failing,
        }
    }
}

impl Default for TestVmStatsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
